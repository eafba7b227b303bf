//! End-to-end bundling over real directory trees.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use cpp_bundler::{BundleConfig, BundleError, Bundler};

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn config(root: &Path, prefixes: &[&str]) -> BundleConfig {
    BundleConfig::default()
        .with_root_dir(root.join("tree"))
        .with_output(root.join("bundle.cpp"))
        .with_exclude_prefixes(prefixes.iter().copied())
}

#[test]
fn local_includes_removed_system_includes_kept() {
    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    write(&tree, "a/inc.h", "#include <vector>\n#include \"inc2.h\"\nint x;\n");
    write(&tree, "a/main.cpp", "#include \"inc.h\"\nint main(){return 0;}\n");

    let report = Bundler::new(config(dir.path(), &[]), &tree).run().unwrap();
    let output = fs::read_to_string(dir.path().join("bundle.cpp")).unwrap();

    assert_eq!(report.headers, 1);
    assert_eq!(report.sources, 1);
    assert_eq!(report.removed_includes, 2);
    assert!(report.skipped.is_empty());

    let header_block = "// --- Content From: a/inc.h ---\n\n\
                        #include <vector>\nint x;\n\n\
                        // --- End Content From: a/inc.h ---\n";
    let source_block = "// --- Content From: a/main.cpp ---\n\n\
                        int main(){return 0;}\n\n\
                        // --- End Content From: a/main.cpp ---\n";

    let header_at = output.find(header_block).expect("header block present");
    let source_at = output.find(source_block).expect("source block present");
    assert!(header_at < source_at);
    assert!(!output.contains("inc2.h"));
    assert!(!output.contains("#include \"inc.h\""));
    assert!(output.starts_with("// ==================================================\n"));
    assert!(output.ends_with("// End of Bundled Code\n// ==================================================\n"));
}

#[test]
fn excluded_directory_never_appears() {
    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    write(&tree, "build/ignored.h", "int ignored;\n");
    write(&tree, "src/kept.h", "int kept;\n");

    let report = Bundler::new(config(dir.path(), &["build"]), &tree).run().unwrap();
    let output = fs::read_to_string(dir.path().join("bundle.cpp")).unwrap();

    assert_eq!(report.headers, 1);
    assert!(output.contains("// --- Content From: src/kept.h ---"));
    assert!(!output.contains("ignored"));
    assert!(output.contains("// --- No source files found ---"));
}

#[test]
fn empty_tree_writes_placeholder() {
    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    write(&tree, "main.c", "int main(void){return 0;}\n");
    write(&tree, "README.md", "# readme\n");

    let cfg = config(dir.path(), &["cmake-"]);
    let report = Bundler::new(cfg.clone(), &tree).run().unwrap();
    let output = fs::read_to_string(dir.path().join("bundle.cpp")).unwrap();

    assert!(report.is_empty());
    assert_eq!(
        output,
        format!(
            "// Bundled C++ Code - Generated by script\n\
             // Target file: bundle.cpp\n\
             // No source or header files found in '{}' (excluding prefixes: ['cmake-'])\n\
             // NOTE: This script version removes local #includes and keeps system #includes.\n",
            cfg.root_dir.display()
        )
    );
}

#[test]
fn file_without_includes_is_verbatim_apart_from_trimming() {
    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    let body = "namespace n {\n\tint f() { return \"#include \\\"x.h\\\"\"[0]; }\n}";
    write(&tree, "n.hpp", &format!("{body}\n"));

    Bundler::new(config(dir.path(), &[]), &tree).run().unwrap();
    let output = fs::read_to_string(dir.path().join("bundle.cpp")).unwrap();

    assert!(output.contains(&format!("// --- Content From: n.hpp ---\n\n{body}\n\n")));
}

#[cfg(unix)]
#[test]
fn unreadable_file_is_listed_as_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    write(&tree, "ok.cpp", "int ok;\n");
    write(&tree, "locked.cpp", "int locked;\n");
    let locked = tree.join("locked.cpp");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root ignores permission bits
    if fs::read(&locked).is_ok() {
        return;
    }

    let report = Bundler::new(config(dir.path(), &[]), &tree).run().unwrap();
    let output = fs::read_to_string(dir.path().join("bundle.cpp")).unwrap();

    assert_eq!(report.sources, 2);
    assert_eq!(report.skipped, vec![locked]);
    assert!(output.contains("// --- Skipped (Error Reading?): locked.cpp ---"));
    assert!(output.contains("// Source Files Content (2 files)"));
    assert!(output.contains("int ok;"));
}

#[test]
fn unwritable_output_is_fatal() {
    let dir = TempDir::new().unwrap();
    let tree = dir.path().join("tree");
    write(&tree, "a.h", "int a;\n");

    let cfg = config(dir.path(), &[]).with_output(dir.path().join("no/such/dir/out.cpp"));
    let err = Bundler::new(cfg, &tree).run().unwrap_err();

    assert!(matches!(err, BundleError::Output { .. }));
    assert_eq!(err.exit_code(), 1);
}
