//! Edge case and error handling tests for arbor


use harness::{TestTree, run_arbor};

#[cfg(unix)]
use std::os::unix::fs::{PermissionsExt, symlink};
use std::fs;

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
#[cfg(unix)]
fn test_symlink_to_parent_no_infinite_loop() {
    let tree = TestTree::new();
    tree.add_file("a/subdir/file.rs", "fn file() {}");

    // subdir/parent -> .. creates a cycle if links are followed.
    let link_path = tree.path().join("a/subdir/parent");
    symlink("..", &link_path).expect("Failed to create parent symlink");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);
    assert!(success, "arbor should not hang on parent symlink");
    assert!(stdout.contains("subdir"));
    assert!(stdout.contains("file.rs"));
    assert!(!stdout.contains("parent"), "dir symlink should be omitted: {}", stdout);
}

#[test]
#[cfg(unix)]
fn test_self_referential_symlink() {
    let tree = TestTree::new();
    tree.add_file("a/file.rs", "fn file() {}");

    let link_path = tree.path().join("a/selfref");
    symlink("selfref", &link_path).expect("Failed to create self-referential symlink");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);
    assert!(success, "arbor should handle self-referential symlinks");
    assert!(stdout.contains("file.rs"));
}

#[test]
#[cfg(unix)]
fn test_symlink_to_file_listed_with_target_size() {
    let tree = TestTree::new();
    tree.add_file("a/target.txt", "hello");
    symlink(tree.path().join("a/target.txt"), tree.path().join("a/link.txt"))
        .expect("Failed to create symlink");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["-s", "a"]);
    assert!(success);
    assert!(stdout.contains("link.txt 5"), "link shows target size: {}", stdout);
    assert!(stdout.contains(" 1 directory, 2 files"));
}

#[test]
#[cfg(unix)]
fn test_broken_symlink() {
    let tree = TestTree::new();
    tree.add_file("a/real.rs", "fn real() {}");

    let link_path = tree.path().join("a/broken_link.rs");
    symlink("nonexistent.rs", &link_path).expect("Failed to create broken symlink");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);
    assert!(success, "arbor should handle broken symlinks");
    assert!(stdout.contains("real.rs"));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
#[cfg(unix)]
fn test_unreadable_directory_renders_failure_marker() {
    let tree = TestTree::new();
    tree.add_file("a/readable/file.rs", "fn readable() {}");
    tree.add_file("a/unreadable/hidden.rs", "fn hidden() {}");

    let unreadable = tree.path().join("a/unreadable");
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o000);
    fs::set_permissions(&unreadable, perms).expect("Failed to set permissions");

    // Permission bits cannot lock out a privileged user; nothing to observe
    // in that case.
    if fs::read_dir(&unreadable).is_ok() {
        return;
    }

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);

    // Restore permissions for cleanup.
    let mut perms = fs::metadata(&unreadable).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&unreadable, perms).expect("Failed to restore permissions");

    assert!(success, "walk should survive an unreadable directory");
    assert!(stdout.contains("file.rs"), "siblings still rendered: {}", stdout);
    assert!(
        stdout.contains("unreadable - failed: "),
        "failure marker expected: {}",
        stdout
    );
    assert!(!stdout.contains("hidden.rs"), "no descent into failed dir");
    // Both directories count even though one failed to list.
    assert!(stdout.contains(" 3 directories, 1 file"), "summary: {}", stdout);
}

// ============================================================================
// Name Handling
// ============================================================================

#[test]
fn test_names_sort_in_byte_order() {
    let tree = TestTree::new();
    tree.add_file("a/banana", "x");
    tree.add_file("a/Apple", "x");
    tree.add_file("a/cherry", "x");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);
    assert!(success);
    let apple = stdout.find("Apple").unwrap();
    let banana = stdout.find("banana").unwrap();
    let cherry = stdout.find("cherry").unwrap();
    assert!(apple < banana && banana < cherry, "byte order: {}", stdout);
}

#[test]
fn test_names_with_spaces_and_unicode() {
    let tree = TestTree::new();
    tree.add_file("a/with space.txt", "x");
    tree.add_file("a/naïve.md", "x");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);
    assert!(success);
    assert!(stdout.contains("with space.txt"));
    assert!(stdout.contains("naïve.md"));
}

#[test]
fn test_deeply_nested_tree() {
    let tree = TestTree::new();
    let mut path = String::from("a");
    for i in 0..40 {
        path.push_str(&format!("/level{:02}", i));
    }
    tree.add_file(&format!("{}/bottom.txt", path), "x");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);
    assert!(success, "deep recursion should complete");
    assert!(stdout.contains("bottom.txt"));
    assert!(stdout.contains(" 41 directories, 1 file"), "summary: {}", stdout);
}

#[test]
fn test_empty_directory_renders_without_children() {
    let tree = TestTree::new();
    tree.add_dir("a/empty");

    let (stdout, _stderr, success) = run_arbor(tree.path(), &["a"]);
    assert!(success);
    assert_eq!(stdout, "a\n`-- empty\n\n 2 directories, 0 files\n");
}

#[test]
fn test_prune_with_dirs_only_collapses_fileless_chains() {
    let tree = TestTree::new();
    tree.add_file("a/sub/leaf.txt", "x");

    // Under -d every directory bottom out empty, so --prune removes them all.
    let (stdout, _stderr, success) = run_arbor(tree.path(), &["-d", "--prune", "a"]);
    assert!(success);
    assert_eq!(stdout, "a\n\n 1 directory\n");
}
