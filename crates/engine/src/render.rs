//! Markdown rendering of assembled documentation records.
//!
//! Pure formatting only: one function per query shape, no lookups, no
//! failure modes. Absent optional fields (empty comments, missing output,
//! elided types) drop their line or sub-section from the output.

use crate::doc::{
    ConstDoc, FuncDoc, MethodDocDetail, PackageInfo, PackageInspection, StructDoc, VarDoc,
};
use crate::example::ExampleDoc;
use std::fmt::Write;

/// `# Packages` listing with one section per package.
pub fn format_package_list(packages: &[PackageInfo]) -> String {
    let mut out = String::from("# Packages\n\n");
    for pkg in packages {
        let _ = writeln!(out, "## {}", pkg.name);
        let _ = writeln!(out, "Import Path: `{}`\n", pkg.import_path);
        if !pkg.comment.is_empty() {
            let _ = writeln!(out, "{}\n", pkg.comment);
        }
    }
    out
}

/// `# Package:` overview with struct/function/method sub-sections.
pub fn format_package_inspection(inspection: &PackageInspection, include_comments: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Package: {}\n", inspection.package.name);
    let _ = writeln!(out, "Import Path: `{}`\n", inspection.package.import_path);
    if !inspection.package.comment.is_empty() {
        let _ = writeln!(out, "{}\n", inspection.package.comment);
    }

    if !inspection.structs.is_empty() {
        out.push_str("## Structs\n\n");
        for s in &inspection.structs {
            let _ = writeln!(out, "### {}", s.name);
            if include_comments && !s.comment.is_empty() {
                let _ = writeln!(out, "{}\n", s.comment);
            }
        }
    }

    if !inspection.funcs.is_empty() {
        out.push_str("## Functions\n\n");
        for f in &inspection.funcs {
            let _ = writeln!(out, "### {}", f.name);
            if include_comments && !f.comment.is_empty() {
                let _ = writeln!(out, "{}\n", f.comment);
            }
        }
    }

    if !inspection.methods.is_empty() {
        out.push_str("## Methods\n\n");
        for m in &inspection.methods {
            let _ = writeln!(out, "### {}.{}", m.receiver_type, m.name);
            if include_comments && !m.comment.is_empty() {
                let _ = writeln!(out, "{}\n", m.comment);
            }
        }
    }

    out
}

/// `# Struct:` detail with field and method sub-sections.
pub fn format_struct_doc(doc: &StructDoc) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Struct: {}\n", doc.name);
    if !doc.comment.is_empty() {
        let _ = writeln!(out, "{}\n", doc.comment);
    }

    if !doc.fields.is_empty() {
        out.push_str("## Fields\n\n");
        for f in &doc.fields {
            let _ = writeln!(out, "### {}", f.name);
            let _ = writeln!(out, "Type: `{}`", f.type_text);
            if !f.comment.is_empty() {
                let _ = writeln!(out, "{}\n", f.comment);
            }
        }
    }

    if !doc.methods.is_empty() {
        out.push_str("## Methods\n\n");
        for m in &doc.methods {
            let _ = writeln!(out, "### {}", m.name);
            let _ = writeln!(out, "Signature: `{}`", m.signature);
            if !m.comment.is_empty() {
                let _ = writeln!(out, "{}\n", m.comment);
            }
        }
    }

    out
}

/// `# Function:` detail with signature, comment, and examples.
pub fn format_func_doc(doc: &FuncDoc) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Function: {}\n", doc.name);
    let _ = writeln!(out, "Signature: `{}`\n", doc.signature);
    if !doc.comment.is_empty() {
        let _ = writeln!(out, "{}\n", doc.comment);
    }
    push_examples(&mut out, &doc.examples);
    out
}

/// `# Method: Recv.Name` detail with signature, comment, and examples.
pub fn format_method_doc(doc: &MethodDocDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Method: {}.{}\n", doc.receiver_type, doc.name);
    let _ = writeln!(out, "Signature: `{}`\n", doc.signature);
    if !doc.comment.is_empty() {
        let _ = writeln!(out, "{}\n", doc.comment);
    }
    push_examples(&mut out, &doc.examples);
    out
}

/// `# Constants` / `# Variables` listing for one package.
pub fn format_const_and_var_doc(constants: &[ConstDoc], variables: &[VarDoc]) -> String {
    let mut out = String::new();

    if !constants.is_empty() {
        out.push_str("# Constants\n\n");
        for c in constants {
            let _ = writeln!(out, "## {}", c.name);
            if !c.type_text.is_empty() {
                let _ = writeln!(out, "Type: `{}`", c.type_text);
            }
            if !c.value_text.is_empty() {
                let _ = writeln!(out, "Value: `{}`", c.value_text);
            }
            if !c.comment.is_empty() {
                let _ = writeln!(out, "{}\n", c.comment);
            }
        }
    }

    if !variables.is_empty() {
        out.push_str("# Variables\n\n");
        for v in variables {
            let _ = writeln!(out, "## {}", v.name);
            if !v.type_text.is_empty() {
                let _ = writeln!(out, "Type: `{}`", v.type_text);
            }
            if !v.comment.is_empty() {
                let _ = writeln!(out, "{}\n", v.comment);
            }
        }
    }

    out
}

fn push_examples(out: &mut String, examples: &[ExampleDoc]) {
    if examples.is_empty() {
        return;
    }
    out.push_str("## Examples\n\n");
    for e in examples {
        let _ = writeln!(out, "### {}", e.name);
        let _ = writeln!(out, "```go\n{}\n```", e.code);
        if let Some(output) = &e.output {
            let _ = writeln!(out, "Output:\n```\n{output}\n```");
        }
        out.push('\n');
    }
}
