use crate::types::{
    ConstSym, Decl, FieldSym, FuncDecl, FuncSym, MethodSym, PackageScope, SourceFile, Symbol,
    TypeSym, ValueKind, VarSym,
};

/// Build the package scope from the declaration forest.
///
/// Symbols land in a sorted map (the enumeration-order analogue of a
/// `go/types` scope); methods go into per-receiver tables in encounter
/// order. First declaration wins on duplicate names.
pub fn build_scope(files: &[SourceFile]) -> PackageScope {
    let mut scope = PackageScope::default();

    for file in files {
        for decl in &file.decls {
            match decl {
                Decl::Type(t) => {
                    let fields = t
                        .fields
                        .iter()
                        .map(|f| FieldSym {
                            name: f.name.clone(),
                            type_text: f.type_text.clone(),
                            is_exported: f.is_exported,
                        })
                        .collect();
                    scope.symbols.entry(t.name.clone()).or_insert(Symbol::Type(TypeSym {
                        name: t.name.clone(),
                        is_struct: t.is_struct,
                        fields,
                    }));
                }
                Decl::Func(f) => match &f.receiver_type {
                    Some(receiver) => {
                        let table = scope.methods.entry(receiver_base(receiver)).or_default();
                        table.push(MethodSym {
                            name: f.name.clone(),
                            receiver_text: receiver.clone(),
                            signature: signature_text(f),
                        });
                    }
                    None => {
                        scope.symbols.entry(f.name.clone()).or_insert(Symbol::Func(FuncSym {
                            name: f.name.clone(),
                            signature: signature_text(f),
                        }));
                    }
                },
                Decl::Value(v) => {
                    for spec in &v.specs {
                        for (i, name) in spec.names.iter().enumerate() {
                            let value_text = spec.values.get(i).cloned().unwrap_or_default();
                            let type_text = if spec.type_text.is_empty() {
                                literal_type(&value_text)
                            } else {
                                spec.type_text.clone()
                            };
                            let symbol = match v.kind {
                                ValueKind::Const => Symbol::Const(ConstSym {
                                    name: name.clone(),
                                    type_text,
                                    value_text,
                                }),
                                ValueKind::Var => Symbol::Var(VarSym {
                                    name: name.clone(),
                                    type_text,
                                }),
                            };
                            scope.symbols.entry(name.clone()).or_insert(symbol);
                        }
                    }
                }
            }
        }
    }

    scope
}

/// `func(<params>) <results>` text for a declaration; the receiver is
/// never part of the signature, matching how `go/types` prints one.
pub fn signature_text(f: &FuncDecl) -> String {
    if f.result_text.is_empty() {
        format!("func{}", f.params_text)
    } else {
        format!("func{} {}", f.params_text, f.result_text)
    }
}

/// Base type name of a receiver: one leading `*` and any type parameter
/// list stripped. `*List[T]` -> `List`.
pub fn receiver_base(receiver: &str) -> String {
    let base = receiver.strip_prefix('*').unwrap_or(receiver);
    let base = base.split('[').next().unwrap_or(base);
    base.trim().to_string()
}

/// Best-effort type text for an untyped constant or variable from its
/// literal initializer, the way `go/types` names untyped kinds. Returns
/// the empty string when the initializer is not a recognizable literal.
fn literal_type(value: &str) -> String {
    let value = value.trim();
    let mut chars = value.chars();
    match chars.next() {
        Some('"') | Some('`') => "untyped string".to_string(),
        Some('\'') => "untyped rune".to_string(),
        Some(c) if c.is_ascii_digit() || ((c == '-' || c == '+') && chars.clone().next().is_some_and(|d| d.is_ascii_digit())) => {
            if value.contains('.') || (value.contains(['e', 'E']) && !value.starts_with("0x")) {
                "untyped float".to_string()
            } else {
                "untyped int".to_string()
            }
        }
        _ if value == "true" || value == "false" => "untyped bool".to_string(),
        _ if value == "iota" => "untyped int".to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str, receiver: Option<&str>, params: &str, result: &str) -> FuncDecl {
        FuncDecl {
            name: name.to_string(),
            receiver_type: receiver.map(str::to_string),
            doc: Vec::new(),
            params_text: params.to_string(),
            result_text: result.to_string(),
            body_text: "{}".to_string(),
        }
    }

    #[test]
    fn test_signature_text() {
        assert_eq!(signature_text(&func("Add", None, "(a, b int)", "int")), "func(a, b int) int");
        assert_eq!(signature_text(&func("Reset", None, "()", "")), "func()");
    }

    #[test]
    fn test_receiver_base() {
        assert_eq!(receiver_base("*Point"), "Point");
        assert_eq!(receiver_base("Point"), "Point");
        assert_eq!(receiver_base("*List[T]"), "List");
    }

    #[test]
    fn test_literal_type() {
        assert_eq!(literal_type("42"), "untyped int");
        assert_eq!(literal_type("-3"), "untyped int");
        assert_eq!(literal_type("3.14"), "untyped float");
        assert_eq!(literal_type("1e9"), "untyped float");
        assert_eq!(literal_type("\"hi\""), "untyped string");
        assert_eq!(literal_type("'x'"), "untyped rune");
        assert_eq!(literal_type("true"), "untyped bool");
        assert_eq!(literal_type("iota"), "untyped int");
        assert_eq!(literal_type("NewThing()"), "");
        assert_eq!(literal_type(""), "");
    }

    #[test]
    fn test_first_declaration_wins() {
        let files = vec![SourceFile {
            path: "a.go".into(),
            package_name: "sample".to_string(),
            package_doc: String::new(),
            decls: vec![
                Decl::Func(func("Run", None, "()", "")),
                Decl::Func(func("Run", None, "(n int)", "error")),
            ],
        }];
        let scope = build_scope(&files);
        let Some(Symbol::Func(f)) = scope.symbols.get("Run") else {
            panic!("missing Run");
        };
        assert_eq!(f.signature, "func()");
    }
}
