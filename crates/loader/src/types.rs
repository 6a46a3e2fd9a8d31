use std::collections::BTreeMap;
use std::path::PathBuf;

/// A loaded Go package: identity, retained syntax, and its symbol scope.
///
/// Immutable once built; every documentation query is a read over this.
#[derive(Debug)]
pub struct Package {
    /// Short package name from the `package` clause
    pub name: String,
    /// Import path (module path joined with the package directory)
    pub import_path: String,
    /// Absolute directory the package was loaded from
    pub dir: PathBuf,
    /// Source files in load order (sorted by file name)
    pub files: Vec<SourceFile>,
    /// Derived symbol scope ("type graph" view, no comments attached)
    pub scope: PackageScope,
}

impl Package {
    /// First non-empty file-level doc comment across the package's files,
    /// in load order.
    #[must_use]
    pub fn package_comment(&self) -> &str {
        self.files
            .iter()
            .map(|f| f.package_doc.trim())
            .find(|doc| !doc.is_empty())
            .unwrap_or("")
    }
}

/// One parsed source file: the syntax-side view of the package.
#[derive(Debug)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Package name declared by this file's `package` clause
    pub package_name: String,
    /// Doc comment attached to the `package` clause, normalized
    pub package_doc: String,
    /// Top-level declarations in source order
    pub decls: Vec<Decl>,
}

/// A top-level declaration, one variant per Go declaration kind.
///
/// Grouped declarations (`type (...)`, `const (...)`, `var (...)`) are
/// flattened into one entry per spec so source order is preserved and
/// per-kind matching stays a plain `match`.
#[derive(Debug)]
pub enum Decl {
    Type(TypeDecl),
    Func(FuncDecl),
    Value(ValueDecl),
}

/// A single `type` spec.
#[derive(Debug)]
pub struct TypeDecl {
    pub name: String,
    /// Normalized doc lines (comment markers stripped)
    pub doc: Vec<String>,
    /// Whether the underlying type expression is a struct literal
    pub is_struct: bool,
    /// Struct fields in declaration order; empty for non-struct types
    pub fields: Vec<FieldDecl>,
}

/// A struct field entry.
#[derive(Debug)]
pub struct FieldDecl {
    pub name: String,
    pub type_text: String,
    pub doc: Vec<String>,
    /// Same-line comment after the field, if any
    pub trailing: Vec<String>,
    pub is_exported: bool,
}

/// A function or method declaration.
#[derive(Debug)]
pub struct FuncDecl {
    pub name: String,
    /// Receiver type text (`*Point`, `Point`) for methods, `None` for
    /// free functions
    pub receiver_type: Option<String>,
    pub doc: Vec<String>,
    /// Parameter list source text, parentheses included
    pub params_text: String,
    /// Result source text; empty when the function returns nothing
    pub result_text: String,
    /// Verbatim body source, braces included; empty for bodyless decls
    pub body_text: String,
}

/// Whether a value declaration is `const` or `var`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Const,
    Var,
}

/// A `const` or `var` declaration (one entry per spec line).
#[derive(Debug)]
pub struct ValueDecl {
    pub kind: ValueKind,
    pub specs: Vec<ValueSpec>,
}

/// One spec line of a value declaration: `A, B Type = x, y`.
#[derive(Debug)]
pub struct ValueSpec {
    pub names: Vec<String>,
    /// Declared type text; empty when the type is elided
    pub type_text: String,
    /// Initializer expression texts, aligned with `names`
    pub values: Vec<String>,
    pub doc: Vec<String>,
    pub trailing: Vec<String>,
}

/// The derived symbol scope of a package: named objects with signature and
/// type text, no comments. Keys iterate in sorted order, matching the
/// enumeration order `go/types` gives a package scope.
#[derive(Debug, Default)]
pub struct PackageScope {
    /// Package-level symbols keyed by name
    pub symbols: BTreeMap<String, Symbol>,
    /// Method tables keyed by receiver base type name (leading `*` stripped);
    /// entries in first-encounter order
    pub methods: BTreeMap<String, Vec<MethodSym>>,
}

impl PackageScope {
    /// Whether any receiver's method table contains `name`.
    #[must_use]
    pub fn has_method_named(&self, name: &str) -> bool {
        self.methods
            .values()
            .any(|table| table.iter().any(|m| m.name == name))
    }
}

/// A package-level symbol object.
#[derive(Debug)]
pub enum Symbol {
    Type(TypeSym),
    Func(FuncSym),
    Const(ConstSym),
    Var(VarSym),
}

/// A named type and, when it is a struct, its field layout.
#[derive(Debug)]
pub struct TypeSym {
    pub name: String,
    pub is_struct: bool,
    pub fields: Vec<FieldSym>,
}

#[derive(Debug)]
pub struct FieldSym {
    pub name: String,
    pub type_text: String,
    pub is_exported: bool,
}

/// A receiver-less function.
#[derive(Debug)]
pub struct FuncSym {
    pub name: String,
    /// `func(<params>) <results>` text; never includes a receiver
    pub signature: String,
}

#[derive(Debug)]
pub struct ConstSym {
    pub name: String,
    pub type_text: String,
    /// Literal initializer text (`42`, `"hello"`, `iota`); may be empty
    pub value_text: String,
}

#[derive(Debug)]
pub struct VarSym {
    pub name: String,
    pub type_text: String,
}

/// A method attached to a named type.
#[derive(Debug)]
pub struct MethodSym {
    pub name: String,
    /// Receiver type text as written, pointer indicator included
    pub receiver_text: String,
    pub signature: String,
}

/// Go exported-ness: the first rune of the name is uppercase.
#[must_use]
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
