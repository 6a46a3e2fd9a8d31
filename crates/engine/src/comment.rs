use godoc_loader::{Decl, Package};

/// Find the doc comment for `name` in `package`'s declaration forest.
///
/// Files are visited in load order, declarations in source order, a type's
/// fields right after the type's own name. The first declaration that binds
/// the name wins and the search stops there, even when it carries no
/// comment — "undocumented" is a normal outcome, never an error. Trailing
/// same-line comments are a fallback for struct fields and value specs
/// only; type and function declarations take a leading doc block or
/// nothing.
pub fn comment_for(package: &Package, name: &str) -> String {
    for file in &package.files {
        for decl in &file.decls {
            match decl {
                Decl::Type(t) => {
                    if t.name == name {
                        return join(&t.doc);
                    }
                    for field in &t.fields {
                        if field.name == name {
                            if !field.doc.is_empty() {
                                return join(&field.doc);
                            }
                            return join(&field.trailing);
                        }
                    }
                }
                Decl::Func(f) => {
                    // Methods match on name alone; the caller has already
                    // picked the receiver.
                    if f.name == name {
                        return join(&f.doc);
                    }
                }
                Decl::Value(v) => {
                    for spec in &v.specs {
                        if spec.names.iter().any(|n| n == name) {
                            if !spec.doc.is_empty() {
                                return join(&spec.doc);
                            }
                            return join(&spec.trailing);
                        }
                    }
                }
            }
        }
    }
    String::new()
}

fn join(lines: &[String]) -> String {
    lines.join("\n").trim().to_string()
}
