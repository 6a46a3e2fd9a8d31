//! # GoDoc Loader
//!
//! Loads a Go package graph into memory for documentation queries.
//!
//! Loading happens once, at startup, and produces two views of every
//! package that later queries reconcile:
//!
//! ```text
//! Root Directory
//!     │
//!     ├──> Discovery (go.mod module path, ignore-aware walk,
//!     │               selector pattern, *_test.go excluded)
//!     │
//!     ├──> Tree-sitter Parsing (one pass per file)
//!     │    ├─> Declaration forest: doc comments, trailing comments,
//!     │    │   verbatim bodies — the syntax-side view
//!     │    └─> Package scope: symbols, signatures, method tables —
//!     │        the type-graph view, no comments attached
//!     │
//!     └──> Package[] (immutable for the process lifetime)
//! ```

mod discover;
mod error;
mod scope;
mod syntax;
mod types;

pub use error::{LoadError, Result};
pub use scope::{receiver_base, signature_text};
pub use types::{
    is_exported, ConstSym, Decl, FieldDecl, FieldSym, FuncDecl, FuncSym, MethodSym, Package,
    PackageScope, SourceFile, Symbol, TypeDecl, TypeSym, ValueDecl, ValueKind, ValueSpec, VarSym,
};

use std::fs;
use std::path::Path;
use syntax::GoParser;

/// Load every package under `root` admitted by `selector`.
///
/// `selector` follows Go package-pattern conventions: empty loads all
/// packages, `dir/...` a subtree, `dir` one directory. Test sources are
/// excluded. Files that fail to read are skipped with a warning so a
/// partially broken tree still contributes what it can.
pub fn load(root: &Path, selector: &str) -> Result<Vec<Package>> {
    if !root.is_dir() {
        return Err(LoadError::RootNotFound(root.display().to_string()));
    }

    let module = discover::module_path(root);
    let groups = discover::discover(root, selector)?;
    let mut parser = GoParser::new()?;

    let mut packages = Vec::new();
    for group in groups {
        let mut files = Vec::new();
        for path in &group.files {
            let source = match fs::read_to_string(path) {
                Ok(source) => source,
                Err(e) => {
                    log::warn!("skipping {}: {e}", path.display());
                    continue;
                }
            };
            let parsed = parser.parse_file(&source)?;
            files.push(SourceFile {
                path: path.clone(),
                package_name: parsed.package_name,
                package_doc: parsed.package_doc,
                decls: parsed.decls,
            });
        }
        if files.is_empty() {
            continue;
        }

        let name = files
            .iter()
            .map(|f| f.package_name.as_str())
            .find(|n| !n.is_empty())
            .unwrap_or_default()
            .to_string();
        let import_path = import_path(module.as_deref(), &group.rel_dir, root);
        let scope = scope::build_scope(&files);

        log::debug!("loaded package {import_path} ({} files)", files.len());
        packages.push(Package {
            name,
            import_path,
            dir: group.dir,
            files,
            scope,
        });
    }

    if packages.is_empty() {
        return Err(LoadError::NoPackages {
            root: root.display().to_string(),
            pattern: selector.to_string(),
        });
    }

    log::info!("loaded {} package(s) from {}", packages.len(), root.display());
    Ok(packages)
}

/// Import path of a package directory: the module path joined with the
/// relative directory. Without a `go.mod` the relative directory stands
/// alone (the root directory's own name for the root package).
fn import_path(module: Option<&str>, rel_dir: &str, root: &Path) -> String {
    match (module, rel_dir) {
        (Some(module), ".") => module.to_string(),
        (Some(module), rel) => format!("{module}/{rel}"),
        (None, ".") => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string()),
        (None, rel) => rel.to_string(),
    }
}
