use std::fs;
use std::path::Path;

use dupsweep::{collect_files, sweep};

fn run_pass(root: &Path) -> dupsweep::SweepSummary {
    let paths = collect_files(root);
    sweep(&paths, false)
}

#[test]
fn duplicate_in_subdirectory_loses_to_single_keeper() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), "hello").unwrap();
    fs::create_dir(dir.path().join("b")).unwrap();
    fs::write(dir.path().join("b/b.txt"), "hello").unwrap();
    fs::write(dir.path().join("c.txt"), "world").unwrap();

    let summary = run_pass(dir.path());
    assert_eq!(summary.duplicate_groups, 1);
    assert_eq!(summary.files_deleted, 1);

    let hello_survivors = [dir.path().join("a.txt"), dir.path().join("b/b.txt")]
        .iter()
        .filter(|p| p.exists())
        .count();
    assert_eq!(hello_survivors, 1);
    assert!(dir.path().join("c.txt").exists());
}

#[test]
fn second_pass_after_cleanup_finds_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("one"), "dup").unwrap();
    fs::write(dir.path().join("two"), "dup").unwrap();
    fs::write(dir.path().join("unique"), "only").unwrap();

    let first = run_pass(dir.path());
    assert_eq!(first.files_deleted, 1);

    let second = run_pass(dir.path());
    assert_eq!(second.duplicate_groups, 0);
    assert_eq!(second.files_deleted, 0);
}

#[test]
fn clean_tree_is_left_untouched_twice() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), "1").unwrap();
    fs::write(dir.path().join("b"), "2").unwrap();
    fs::write(dir.path().join("c"), "3").unwrap();

    for _ in 0..2 {
        let summary = run_pass(dir.path());
        assert_eq!(summary.duplicate_groups, 0);
        assert_eq!(summary.files_deleted, 0);
        assert_eq!(collect_files(dir.path()).len(), 3);
    }
}

#[test]
fn empty_tree_reports_no_duplicates() {
    let dir = tempfile::tempdir().unwrap();
    let summary = run_pass(dir.path());
    assert_eq!(summary.files_hashed, 0);
    assert_eq!(summary.duplicate_groups, 0);
    assert_eq!(summary.files_deleted, 0);
}

#[test]
fn identical_content_is_deduplicated_regardless_of_depth() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir_all(dir.path().join("x/y/z")).unwrap();
    fs::write(dir.path().join("top"), "payload").unwrap();
    fs::write(dir.path().join("x/mid"), "payload").unwrap();
    fs::write(dir.path().join("x/y/z/deep"), "payload").unwrap();

    let summary = run_pass(dir.path());
    assert_eq!(summary.duplicate_groups, 1);
    assert_eq!(summary.files_deleted, 2);
    assert_eq!(collect_files(dir.path()).len(), 1);
}
