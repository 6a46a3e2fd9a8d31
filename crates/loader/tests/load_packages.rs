use godoc_loader::{load, LoadError, Symbol};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
    fs::write(path, content).expect("write file");
}

fn fixture() -> TempDir {
    let temp = TempDir::new().expect("tempdir");
    let root = temp.path();
    write(root, "go.mod", "module example.com/demo\n\ngo 1.22\n");
    write(
        root,
        "geometry/point.go",
        r#"// Package geometry provides flat shapes.
package geometry

// Point represents a position on the plane.
type Point struct {
	// X is the horizontal coordinate.
	X int
	Y int
}

// Distance returns the distance from the origin.
func (p *Point) Distance() float64 {
	return 0
}

// Origin is the zero point.
var Origin = Point{}
"#,
    );
    write(
        root,
        "geometry/shapes.go",
        r#"package geometry

// MaxSides bounds polygon complexity.
const MaxSides = 64
"#,
    );
    write(
        root,
        "util/strings.go",
        "package util\n\nfunc Reverse(s string) string { return s }\n",
    );
    write(
        root,
        "util/strings_test.go",
        "package util\n\nfunc Reverse2(s string) string { return s }\n",
    );
    temp
}

#[test]
fn loads_packages_with_module_import_paths() {
    let temp = fixture();
    let packages = load(temp.path(), "").expect("load");

    let mut paths: Vec<&str> = packages.iter().map(|p| p.import_path.as_str()).collect();
    paths.sort();
    assert_eq!(paths, vec!["example.com/demo/geometry", "example.com/demo/util"]);

    let geometry = packages
        .iter()
        .find(|p| p.import_path == "example.com/demo/geometry")
        .expect("geometry package");
    assert_eq!(geometry.name, "geometry");
    assert_eq!(geometry.package_comment(), "Package geometry provides flat shapes.");
    assert_eq!(geometry.files.len(), 2);
}

#[test]
fn scope_holds_symbols_and_method_tables() {
    let temp = fixture();
    let packages = load(temp.path(), "geometry").expect("load");
    let geometry = &packages[0];

    let Some(Symbol::Type(point)) = geometry.scope.symbols.get("Point") else {
        panic!("Point missing from scope");
    };
    assert!(point.is_struct);
    assert_eq!(point.fields.len(), 2);
    assert_eq!(point.fields[0].name, "X");

    let methods = geometry.scope.methods.get("Point").expect("method table");
    assert_eq!(methods.len(), 1);
    assert_eq!(methods[0].name, "Distance");
    assert_eq!(methods[0].receiver_text, "*Point");
    assert_eq!(methods[0].signature, "func() float64");

    let Some(Symbol::Const(max_sides)) = geometry.scope.symbols.get("MaxSides") else {
        panic!("MaxSides missing from scope");
    };
    assert_eq!(max_sides.value_text, "64");
    assert_eq!(max_sides.type_text, "untyped int");

    assert!(matches!(geometry.scope.symbols.get("Origin"), Some(Symbol::Var(_))));
}

#[test]
fn test_sources_are_excluded() {
    let temp = fixture();
    let packages = load(temp.path(), "util").expect("load");
    let util = &packages[0];
    assert_eq!(util.files.len(), 1);
    assert!(util.scope.symbols.contains_key("Reverse"));
    assert!(!util.scope.symbols.contains_key("Reverse2"));
}

#[test]
fn selector_restricts_to_subtree() {
    let temp = fixture();
    let packages = load(temp.path(), "./geometry/...").expect("load");
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].import_path, "example.com/demo/geometry");
}

#[test]
fn missing_root_is_a_load_error() {
    let err = load(Path::new("/definitely/not/a/real/root"), "").unwrap_err();
    assert!(matches!(err, LoadError::RootNotFound(_)));
}

#[test]
fn empty_root_yields_no_packages() {
    let temp = TempDir::new().expect("tempdir");
    let err = load(temp.path(), "").unwrap_err();
    assert!(matches!(err, LoadError::NoPackages { .. }));
}

#[test]
fn vendor_and_underscore_dirs_are_skipped() {
    let temp = fixture();
    write(
        temp.path(),
        "vendor/dep/dep.go",
        "package dep\n\nfunc Hidden() {}\n",
    );
    write(
        temp.path(),
        "_attic/old.go",
        "package old\n\nfunc Older() {}\n",
    );
    let packages = load(temp.path(), "").expect("load");
    assert!(packages.iter().all(|p| !p.import_path.contains("vendor")));
    assert!(packages.iter().all(|p| !p.import_path.contains("_attic")));
}

#[test]
fn files_with_syntax_errors_still_contribute() {
    let temp = TempDir::new().expect("tempdir");
    write(
        temp.path(),
        "broken/broken.go",
        "package broken\n\nfunc Fine() {}\n\nfunc Oops( {\n",
    );
    let packages = load(temp.path(), "").expect("load");
    let broken = &packages[0];
    assert_eq!(broken.name, "broken");
    assert!(broken.scope.symbols.contains_key("Fine"));
}
