use godoc_loader::{Decl, Package};

/// Marker prefix naming an example function.
pub const EXAMPLE_PREFIX: &str = "Example";

/// Doc line marker carrying an example's expected output.
pub const OUTPUT_MARKER: &str = "Output:";

/// A usage example extracted from the syntax trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleDoc {
    /// Full example function name (`ExampleDistance`)
    pub name: String,
    /// Verbatim body source, braces included
    pub code: String,
    /// Expected output declared in the doc comment, if any
    pub output: Option<String>,
}

/// Collect every example function for `target` in encounter order.
///
/// A function qualifies when its name starts with the example prefix and
/// ends with `target` — deliberately loose, so an example for `Foo` also
/// admits `ExampleBarFoo`. Callers depend on that suffix rule; do not
/// tighten it. When several doc lines carry the output marker, the last
/// one wins.
pub fn examples_for(package: &Package, target: &str) -> Vec<ExampleDoc> {
    let mut examples = Vec::new();
    for file in &package.files {
        for decl in &file.decls {
            let Decl::Func(f) = decl else {
                continue;
            };
            if !f.name.starts_with(EXAMPLE_PREFIX) || !f.name.ends_with(target) {
                continue;
            }

            let mut output = None;
            for line in &f.doc {
                if let Some(rest) = line.strip_prefix(OUTPUT_MARKER) {
                    output = Some(rest.trim().to_string());
                }
            }

            examples.push(ExampleDoc {
                name: f.name.clone(),
                code: f.body_text.clone(),
                output,
            });
        }
    }
    examples
}
