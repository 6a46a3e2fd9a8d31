use crate::error::Result;
use ignore::WalkBuilder;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory names the Go toolchain never descends into when walking
/// package patterns.
const IGNORED_DIRS: &[&str] = &["vendor", "testdata"];

/// The `.go` files of one package directory, sorted by file name.
pub struct PackageFiles {
    pub dir: PathBuf,
    /// Directory relative to the root, `.` for the root itself
    pub rel_dir: String,
    pub files: Vec<PathBuf>,
}

/// Read the `module` directive from `<root>/go.mod`, if present.
pub fn module_path(root: &Path) -> Option<String> {
    let content = fs::read_to_string(root.join("go.mod")).ok()?;
    content.lines().find_map(|line| {
        line.trim()
            .strip_prefix("module ")
            .and_then(|rest| rest.split_whitespace().next())
            .map(|path| path.trim_matches('"').to_string())
    })
}

/// Walk the root and group non-test `.go` files by directory, keeping only
/// directories the selector pattern admits.
pub fn discover(root: &Path, selector: &str) -> Result<Vec<PackageFiles>> {
    let mut groups: BTreeMap<String, PackageFiles> = BTreeMap::new();

    let walk_root = root.to_path_buf();
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true);
    builder.filter_entry(move |entry| !is_ignored_scope(entry.path(), &walk_root));

    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("failed to read entry: {e}");
                continue;
            }
        };
        let Some(file_type) = entry.file_type() else {
            continue;
        };
        if !file_type.is_file() {
            continue;
        }

        let path = entry.path();
        if !is_go_source(path) {
            continue;
        }

        let rel_dir = relative_dir(path, root);
        if !selector_matches(&rel_dir, selector) {
            continue;
        }

        let dir = path.parent().unwrap_or(root).to_path_buf();
        groups
            .entry(rel_dir.clone())
            .or_insert_with(|| PackageFiles {
                dir,
                rel_dir,
                files: Vec::new(),
            })
            .files
            .push(path.to_path_buf());
    }

    let mut packages: Vec<PackageFiles> = groups.into_values().collect();
    for pkg in &mut packages {
        pkg.files.sort();
    }
    log::debug!("discovered {} package directories", packages.len());
    Ok(packages)
}

/// `.go` files only; `_test.go` sources are never loaded.
fn is_go_source(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    name.ends_with(".go") && !name.ends_with("_test.go")
}

fn is_ignored_scope(path: &Path, root: &Path) -> bool {
    if let Ok(relative) = path.strip_prefix(root) {
        for component in relative.components() {
            if let std::path::Component::Normal(name) = component {
                let name = name.to_string_lossy();
                if IGNORED_DIRS.iter().any(|ignored| name.eq_ignore_ascii_case(ignored))
                    || name.starts_with('_')
                {
                    return true;
                }
            }
        }
    }
    false
}

fn relative_dir(file: &Path, root: &Path) -> String {
    let rel = file
        .parent()
        .and_then(|dir| dir.strip_prefix(root).ok())
        .map(|dir| dir.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default();
    if rel.is_empty() {
        ".".to_string()
    } else {
        rel
    }
}

/// Go package-pattern matching for the selector: empty or `...` loads
/// everything, `dir/...` the subtree, `dir` exactly that directory. A
/// leading `./` is ignored.
pub fn selector_matches(rel_dir: &str, selector: &str) -> bool {
    let sel = selector.strip_prefix("./").unwrap_or(selector);
    if sel.is_empty() || sel == "..." {
        return true;
    }
    if let Some(prefix) = sel.strip_suffix("/...") {
        if prefix.is_empty() || prefix == "." {
            return true;
        }
        return rel_dir == prefix || rel_dir.starts_with(&format!("{prefix}/"));
    }
    rel_dir == sel
}
