use std::fs;
use std::path::Path;

use ferroute::error::RouteError;
use ferroute::scan::{scan_dir, FileSystemEntry};
use ferroute::RouterOptions;

fn touch(path: &Path) {
    fs::write(path, "pub fn handler() {}\n").unwrap();
}

fn find<'a>(entries: &'a [FileSystemEntry], name: &str) -> Option<&'a FileSystemEntry> {
    entries.iter().find(|entry| entry.name() == name)
}

#[test]
fn test_scan_admits_convention_files_and_filters_the_rest() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("users.get.rs"));
    touch(&root.join("auth.middleware.rs"));
    touch(&root.join("_middleware.rs"));
    touch(&root.join("_error.rs"));
    touch(&root.join("notes.txt"));
    touch(&root.join("helpers.rs"));
    touch(&root.join("users.fetch.rs"));
    touch(&root.join(".users.get.rs"));
    touch(&root.join("index.rs"));

    let options = RouterOptions::new(root);
    let entries = scan_dir(root, &options).unwrap();

    assert!(matches!(
        find(&entries, "users.get"),
        Some(FileSystemEntry::File(file)) if file.extension == "rs"
    ));
    assert!(find(&entries, "auth.middleware").is_some());
    assert!(find(&entries, "_middleware").is_some());
    assert!(find(&entries, "_error").is_some());

    // Wrong extension, no method segment, unknown method, hidden file, and
    // the generated artifact are all excluded.
    assert!(find(&entries, "notes").is_none());
    assert!(find(&entries, "helpers").is_none());
    assert!(find(&entries, "users.fetch").is_none());
    assert!(find(&entries, ".users.get").is_none());
    assert!(find(&entries, "index").is_none());
    assert_eq!(entries.len(), 4);
}

#[test]
fn test_scan_recurses_and_keeps_empty_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir(root.join("users")).unwrap();
    touch(&root.join("users").join("[id].get.rs"));
    fs::create_dir(root.join("empty")).unwrap();

    let options = RouterOptions::new(root);
    let entries = scan_dir(root, &options).unwrap();

    let users = match find(&entries, "users") {
        Some(FileSystemEntry::Directory(dir)) => dir,
        other => panic!("expected the users directory, got {other:?}"),
    };
    assert_eq!(users.children.len(), 1);
    assert_eq!(users.children[0].name(), "[id].get");
    assert_eq!(
        users.children[0].path(),
        root.join("users").join("[id].get.rs")
    );

    assert!(matches!(
        find(&entries, "empty"),
        Some(FileSystemEntry::Directory(dir)) if dir.children.is_empty()
    ));
}

#[test]
fn test_scan_preserves_enumeration_order_against_reread() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    for name in ["a.get.rs", "b.get.rs", "c.get.rs"] {
        touch(&root.join(name));
    }

    let options = RouterOptions::new(root);
    let first: Vec<String> = scan_dir(root, &options)
        .unwrap()
        .iter()
        .map(|e| e.name().to_string())
        .collect();
    let second: Vec<String> = scan_dir(root, &options)
        .unwrap()
        .iter()
        .map(|e| e.name().to_string())
        .collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}

#[test]
fn test_scan_respects_configured_extensions() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path();
    touch(&root.join("users.get.rs"));
    touch(&root.join("legacy.get.rhai"));

    let mut options = RouterOptions::new(root);
    options.extensions = vec!["rs".to_string(), "rhai".to_string()];
    let entries = scan_dir(root, &options).unwrap();

    assert!(find(&entries, "users.get").is_some());
    assert!(find(&entries, "legacy.get").is_some());
}

#[test]
fn test_unreadable_root_aborts_the_scan() {
    let options = RouterOptions::new("/definitely/not/a/real/path");
    let err = scan_dir(Path::new("/definitely/not/a/real/path"), &options).unwrap_err();

    assert!(matches!(err, RouteError::Scan { .. }));
    assert!(err.to_string().contains("failed to scan"));
}
