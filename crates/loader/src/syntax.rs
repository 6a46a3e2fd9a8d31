use crate::error::{LoadError, Result};
use crate::types::{
    is_exported, Decl, FieldDecl, FuncDecl, TypeDecl, ValueDecl, ValueKind, ValueSpec,
};
use tree_sitter::{Node, Parser};

/// Parser for Go source files.
///
/// Wraps a tree-sitter parser and turns each file into the declaration
/// forest retained for comment and example lookups. The tree-sitter tree
/// itself is transient; everything queries need later is extracted here,
/// once, so the loaded package set stays `Send + Sync`.
pub struct GoParser {
    parser: Parser,
}

/// The syntax-side view of one parsed file.
pub struct ParsedFile {
    pub package_name: String,
    pub package_doc: String,
    pub decls: Vec<Decl>,
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_go::LANGUAGE.into())
            .map_err(|e| LoadError::parse(format!("failed to set Go grammar: {e}")))?;
        Ok(Self { parser })
    }

    /// Parse one Go source file into its declaration forest.
    ///
    /// Files with syntax errors still contribute whatever declarations
    /// parsed cleanly; tree-sitter recovers around ERROR nodes.
    pub fn parse_file(&mut self, source: &str) -> Result<ParsedFile> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| LoadError::parse("tree-sitter returned no tree"))?;
        let root = tree.root_node();
        let mut cursor = root.walk();
        let top: Vec<Node> = root.children(&mut cursor).collect();

        let mut file = ParsedFile {
            package_name: String::new(),
            package_doc: String::new(),
            decls: Vec::new(),
        };

        for (i, node) in top.iter().enumerate() {
            match node.kind() {
                "package_clause" => {
                    file.package_name = package_name(*node, source);
                    file.package_doc = join_doc(&leading_doc(&top, i, source));
                }
                "function_declaration" | "method_declaration" => {
                    let doc = leading_doc(&top, i, source);
                    file.decls.push(Decl::Func(func_decl(*node, source, doc)));
                }
                "type_declaration" => type_decls(*node, source, &top, i, &mut file.decls),
                "const_declaration" => {
                    value_decls(*node, source, &top, i, ValueKind::Const, &mut file.decls);
                }
                "var_declaration" => {
                    value_decls(*node, source, &top, i, ValueKind::Var, &mut file.decls);
                }
                _ => {}
            }
        }

        Ok(file)
    }
}

fn node_text<'a>(node: Node, source: &'a str) -> &'a str {
    &source[node.start_byte()..node.end_byte()]
}

fn field_text(node: Node, field: &str, source: &str) -> String {
    node.child_by_field_name(field)
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default()
}

fn name_texts(node: Node, source: &str) -> Vec<String> {
    let mut cursor = node.walk();
    node.children_by_field_name("name", &mut cursor)
        .map(|n| node_text(n, source).to_string())
        .collect()
}

fn package_name(clause: Node, source: &str) -> String {
    let mut cursor = clause.walk();
    let name = clause
        .named_children(&mut cursor)
        .find(|c| c.kind() == "package_identifier")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    name
}

/// Collect the contiguous run of comment siblings directly above
/// `siblings[idx]`, normalized to doc lines.
///
/// A comment only joins the run when it sits on the line immediately above
/// the node below it, and a comment sharing a line with the previous sibling
/// is that sibling's trailing comment, never doc.
fn leading_doc(siblings: &[Node], idx: usize, source: &str) -> Vec<String> {
    let mut first = idx;
    let mut expect_row = siblings[idx].start_position().row;
    while first > 0 {
        let prev = siblings[first - 1];
        if prev.kind() != "comment" || prev.end_position().row + 1 != expect_row {
            break;
        }
        if first >= 2 && siblings[first - 2].end_position().row == prev.start_position().row {
            break;
        }
        expect_row = prev.start_position().row;
        first -= 1;
    }

    let mut lines = Vec::new();
    for node in &siblings[first..idx] {
        lines.extend(normalize_comment(node_text(*node, source)));
    }
    lines
}

/// Same-line comment after `siblings[idx]`, normalized; empty when absent.
fn trailing_comment(siblings: &[Node], idx: usize, source: &str) -> Vec<String> {
    match siblings.get(idx + 1) {
        Some(next)
            if next.kind() == "comment"
                && next.start_position().row == siblings[idx].end_position().row =>
        {
            normalize_comment(node_text(*next, source))
        }
        _ => Vec::new(),
    }
}

/// Strip Go comment markers the way `go/ast`'s `CommentGroup.Text` does:
/// `//` plus one following space, `/* */` fences, directive lines dropped.
fn normalize_comment(raw: &str) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(body) = raw.strip_prefix("//") {
        // `//go:build`-style directives are not documentation
        if body.starts_with("go:") {
            return lines;
        }
        let line = body.strip_prefix(' ').unwrap_or(body);
        lines.push(line.trim_end().to_string());
    } else {
        let body = raw.strip_prefix("/*").unwrap_or(raw);
        let body = body.strip_suffix("*/").unwrap_or(body);
        for line in body.lines() {
            lines.push(line.trim().to_string());
        }
        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
    }
    lines
}

fn join_doc(lines: &[String]) -> String {
    lines.join("\n").trim().to_string()
}

fn func_decl(node: Node, source: &str, doc: Vec<String>) -> FuncDecl {
    let receiver_type = node
        .child_by_field_name("receiver")
        .and_then(|r| receiver_type_text(r, source));
    FuncDecl {
        name: field_text(node, "name", source),
        receiver_type,
        doc,
        params_text: field_text(node, "parameters", source),
        result_text: field_text(node, "result", source),
        body_text: field_text(node, "body", source),
    }
}

fn receiver_type_text(receiver: Node, source: &str) -> Option<String> {
    let mut cursor = receiver.walk();
    let ty = receiver
        .named_children(&mut cursor)
        .find(|c| c.kind() == "parameter_declaration")
        .and_then(|p| p.child_by_field_name("type"))
        .map(|t| node_text(t, source).to_string());
    ty
}

fn type_decls(decl: Node, source: &str, top: &[Node], idx: usize, out: &mut Vec<Decl>) {
    let mut cursor = decl.walk();
    let children: Vec<Node> = decl.children(&mut cursor).collect();
    let grouped = children.iter().any(|c| c.kind() == "(");

    for (i, child) in children.iter().enumerate() {
        if !matches!(child.kind(), "type_spec" | "type_alias") {
            continue;
        }
        // In an ungrouped declaration the doc sits above the `type` keyword;
        // inside parens each spec carries its own.
        let doc = if grouped {
            leading_doc(&children, i, source)
        } else {
            leading_doc(top, idx, source)
        };
        out.push(Decl::Type(type_spec(*child, source, doc)));
    }
}

fn type_spec(spec: Node, source: &str, doc: Vec<String>) -> TypeDecl {
    let ty = spec.child_by_field_name("type");
    let is_struct = ty.is_some_and(|t| t.kind() == "struct_type");
    let fields = ty
        .filter(|t| t.kind() == "struct_type")
        .map(|t| struct_fields(t, source))
        .unwrap_or_default();
    TypeDecl {
        name: field_text(spec, "name", source),
        doc,
        is_struct,
        fields,
    }
}

fn struct_fields(struct_ty: Node, source: &str) -> Vec<FieldDecl> {
    let mut cursor = struct_ty.walk();
    let Some(list) = struct_ty
        .named_children(&mut cursor)
        .find(|c| c.kind() == "field_declaration_list")
    else {
        return Vec::new();
    };

    let mut entry_cursor = list.walk();
    let entries: Vec<Node> = list.children(&mut entry_cursor).collect();

    let mut fields = Vec::new();
    for (i, entry) in entries.iter().enumerate() {
        if entry.kind() != "field_declaration" {
            continue;
        }
        let doc = leading_doc(&entries, i, source);
        let trailing = trailing_comment(&entries, i, source);
        let type_text = field_text(*entry, "type", source);
        let names = name_texts(*entry, source);

        if names.is_empty() {
            // Embedded field: its name is the unqualified type name.
            let starred = node_text(*entry, source).starts_with('*');
            let base = type_text
                .rsplit('.')
                .next()
                .unwrap_or(type_text.as_str())
                .to_string();
            let display_type = if starred {
                format!("*{type_text}")
            } else {
                type_text.clone()
            };
            fields.push(FieldDecl {
                is_exported: is_exported(&base),
                name: base,
                type_text: display_type,
                doc,
                trailing,
            });
        } else {
            for name in names {
                fields.push(FieldDecl {
                    is_exported: is_exported(&name),
                    name,
                    type_text: type_text.clone(),
                    doc: doc.clone(),
                    trailing: trailing.clone(),
                });
            }
        }
    }
    fields
}

fn value_decls(
    decl: Node,
    source: &str,
    top: &[Node],
    idx: usize,
    kind: ValueKind,
    out: &mut Vec<Decl>,
) {
    let mut cursor = decl.walk();
    let children: Vec<Node> = decl.children(&mut cursor).collect();
    let grouped = children.iter().any(|c| c.kind() == "(");

    let mut specs = Vec::new();
    for (i, child) in children.iter().enumerate() {
        if !matches!(child.kind(), "const_spec" | "var_spec") {
            continue;
        }
        let doc = if grouped {
            leading_doc(&children, i, source)
        } else {
            leading_doc(top, idx, source)
        };
        let trailing = if grouped {
            trailing_comment(&children, i, source)
        } else {
            trailing_comment(top, idx, source)
        };
        specs.push(value_spec(*child, source, doc, trailing));
    }

    if !specs.is_empty() {
        out.push(Decl::Value(ValueDecl { kind, specs }));
    }
}

fn value_spec(spec: Node, source: &str, doc: Vec<String>, trailing: Vec<String>) -> ValueSpec {
    let values = spec
        .child_by_field_name("value")
        .map(|list| {
            let mut cursor = list.walk();
            list.named_children(&mut cursor)
                .map(|expr| node_text(expr, source).to_string())
                .collect()
        })
        .unwrap_or_default();
    ValueSpec {
        names: name_texts(spec, source),
        type_text: field_text(spec, "type", source),
        values,
        doc,
        trailing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> ParsedFile {
        GoParser::new().unwrap().parse_file(source).unwrap()
    }

    #[test]
    fn test_package_clause_and_doc() {
        let file = parse("// Package sample does sample things.\npackage sample\n");
        assert_eq!(file.package_name, "sample");
        assert_eq!(file.package_doc, "Package sample does sample things.");
    }

    #[test]
    fn test_package_doc_requires_adjacency() {
        let file = parse("// A stray comment.\n\npackage sample\n");
        assert_eq!(file.package_doc, "");
    }

    #[test]
    fn test_function_decl() {
        let file = parse(
            "package sample\n\n// Add adds two ints.\nfunc Add(a, b int) int {\n\treturn a + b\n}\n",
        );
        let Decl::Func(f) = &file.decls[0] else {
            panic!("expected func decl");
        };
        assert_eq!(f.name, "Add");
        assert_eq!(f.receiver_type, None);
        assert_eq!(f.doc, vec!["Add adds two ints.".to_string()]);
        assert_eq!(f.params_text, "(a, b int)");
        assert_eq!(f.result_text, "int");
        assert_eq!(f.body_text, "{\n\treturn a + b\n}");
    }

    #[test]
    fn test_method_decl_receiver() {
        let file = parse("package sample\n\nfunc (p *Point) String() string { return \"\" }\n");
        let Decl::Func(f) = &file.decls[0] else {
            panic!("expected func decl");
        };
        assert_eq!(f.name, "String");
        assert_eq!(f.receiver_type.as_deref(), Some("*Point"));
        assert_eq!(f.result_text, "string");
    }

    #[test]
    fn test_struct_with_field_docs() {
        let src = "package sample\n\n// Point represents a 2D point.\ntype Point struct {\n\t// X is the horizontal coordinate.\n\tX int\n\tY int // vertical\n\tname string\n}\n";
        let file = parse(src);
        let Decl::Type(t) = &file.decls[0] else {
            panic!("expected type decl");
        };
        assert_eq!(t.name, "Point");
        assert!(t.is_struct);
        assert_eq!(t.doc, vec!["Point represents a 2D point.".to_string()]);
        assert_eq!(t.fields.len(), 3);
        assert_eq!(t.fields[0].name, "X");
        assert_eq!(t.fields[0].doc, vec!["X is the horizontal coordinate.".to_string()]);
        assert_eq!(t.fields[1].name, "Y");
        assert!(t.fields[1].doc.is_empty());
        assert_eq!(t.fields[1].trailing, vec!["vertical".to_string()]);
        assert_eq!(t.fields[2].name, "name");
        assert!(!t.fields[2].is_exported);
    }

    #[test]
    fn test_embedded_field_name() {
        let file = parse("package sample\n\ntype Wrapper struct {\n\t*Inner\n\tio.Reader\n}\n");
        let Decl::Type(t) = &file.decls[0] else {
            panic!("expected type decl");
        };
        assert_eq!(t.fields[0].name, "Inner");
        assert_eq!(t.fields[0].type_text, "*Inner");
        assert_eq!(t.fields[1].name, "Reader");
        assert_eq!(t.fields[1].type_text, "io.Reader");
    }

    #[test]
    fn test_grouped_const_specs() {
        let src = "package sample\n\nconst (\n\t// A is first.\n\tA = 1\n\tB = 2 // second\n)\n";
        let file = parse(src);
        let Decl::Value(v) = &file.decls[0] else {
            panic!("expected value decl");
        };
        assert_eq!(v.kind, ValueKind::Const);
        assert_eq!(v.specs.len(), 2);
        assert_eq!(v.specs[0].names, vec!["A".to_string()]);
        assert_eq!(v.specs[0].values, vec!["1".to_string()]);
        assert_eq!(v.specs[0].doc, vec!["A is first.".to_string()]);
        assert_eq!(v.specs[1].trailing, vec!["second".to_string()]);
    }

    #[test]
    fn test_ungrouped_var_with_doc() {
        let file = parse("package sample\n\n// Answer is the answer.\nvar Answer int = 42\n");
        let Decl::Value(v) = &file.decls[0] else {
            panic!("expected value decl");
        };
        assert_eq!(v.kind, ValueKind::Var);
        assert_eq!(v.specs[0].names, vec!["Answer".to_string()]);
        assert_eq!(v.specs[0].type_text, "int");
        assert_eq!(v.specs[0].values, vec!["42".to_string()]);
        assert_eq!(v.specs[0].doc, vec!["Answer is the answer.".to_string()]);
    }

    #[test]
    fn test_multi_name_spec() {
        let file = parse("package sample\n\nvar X, Y = 1, 2\n");
        let Decl::Value(v) = &file.decls[0] else {
            panic!("expected value decl");
        };
        assert_eq!(v.specs[0].names, vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(v.specs[0].values, vec!["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_directive_lines_dropped() {
        let src = "package sample\n\n//go:noinline\n// Slow is slow.\nfunc Slow() {}\n";
        let file = parse(src);
        let Decl::Func(f) = &file.decls[0] else {
            panic!("expected func decl");
        };
        assert_eq!(f.doc, vec!["Slow is slow.".to_string()]);
    }

    #[test]
    fn test_block_comment_doc() {
        let file = parse("package sample\n\n/*\nRun runs the thing.\n*/\nfunc Run() {}\n");
        let Decl::Func(f) = &file.decls[0] else {
            panic!("expected func decl");
        };
        assert_eq!(f.doc, vec!["Run runs the thing.".to_string()]);
    }

    #[test]
    fn test_trailing_comment_of_previous_decl_is_not_doc() {
        let src = "package sample\n\nvar A = 1 // about A\nvar B = 2\n";
        let file = parse(src);
        let Decl::Value(b) = &file.decls[1] else {
            panic!("expected value decl");
        };
        assert!(b.specs[0].doc.is_empty());
    }
}
