use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

use dirculese::{apply_rule, run_rules, Location, Rule, RuleKind};

fn names(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn prefix_rule_creates_subdirectory() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(src.path().join("pre__one.txt"), "1").unwrap();

    let rule = Rule::moving(
        Location::new(src.path()),
        Location::new(dst.path()),
        RuleKind::Prefix,
        vec!["__".into()],
    );
    apply_rule(&rule).unwrap();

    assert!(dst.path().join("pre").is_dir());
    assert_eq!(names(&dst.path().join("pre")), set(&["pre__one.txt"]));
    assert!(names(src.path()).is_empty());
}

#[test]
fn suffix_rule_uses_text_after_delimiter() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(src.path().join("holiday--2024.jpg"), "j").unwrap();

    let rule = Rule::moving(
        Location::new(src.path()),
        Location::new(dst.path()),
        RuleKind::Suffix,
        vec!["--".into()],
    );
    apply_rule(&rule).unwrap();

    assert_eq!(names(&dst.path().join("2024")), set(&["holiday--2024.jpg"]));
}

#[test]
fn existing_file_with_subdirectory_name_aborts_rule() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(src.path().join("pre__one.txt"), "1").unwrap();
    fs::write(dst.path().join("pre"), "in the way").unwrap();

    let rule = Rule::moving(
        Location::new(src.path()),
        Location::new(dst.path()),
        RuleKind::Prefix,
        vec!["__".into()],
    );
    let err = apply_rule(&rule).unwrap_err();

    assert_eq!(err.code(), "filesystem_error");
    assert!(err.to_string().contains("create directory"), "msg was: {err}");
    assert!(src.path().join("pre__one.txt").exists());
}

#[test]
fn abort_keeps_files_already_moved_by_the_rule() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(src.path().join("one__x.txt"), "1").unwrap();
    fs::write(src.path().join("two__y.txt"), "2").unwrap();

    // Block the subdirectory of whichever file the listing yields second.
    let listed: Vec<String> = fs::read_dir(src.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    let (first, second) = (&listed[0], &listed[1]);
    let prefix_of = |name: &str| name.split_once("__").unwrap().0.to_string();
    fs::write(dst.path().join(prefix_of(second)), "in the way").unwrap();

    let rule = Rule::moving(
        Location::new(src.path()),
        Location::new(dst.path()),
        RuleKind::Prefix,
        vec!["__".into()],
    );
    let err = apply_rule(&rule).unwrap_err();

    assert_eq!(err.code(), "filesystem_error");
    assert!(dst.path().join(prefix_of(first)).join(first).is_file());
    assert!(!src.path().join(first).exists());
    assert!(src.path().join(second).is_file());
}

#[test]
fn empty_prefix_token_moves_into_target() {
    let src = tempdir().unwrap();
    let dst = tempdir().unwrap();
    fs::write(src.path().join("__one.txt"), "1").unwrap();

    let rule = Rule::moving(
        Location::new(src.path()),
        Location::new(dst.path()),
        RuleKind::Prefix,
        vec!["__".into()],
    );
    let outcomes = apply_rule(&rule).unwrap();

    assert_eq!(outcomes.len(), 1);
    assert_eq!(names(dst.path()), set(&["__one.txt"]));
    assert!(names(src.path()).is_empty());
}

fn sort_into_same_directory(kind: RuleKind, files: &[&str], delims: [&str; 3]) -> tempfile::TempDir {
    let base = tempdir().unwrap();
    let dir = base.path();
    let loc = Location::new(dir);
    let rules = vec![
        Rule::moving(loc.clone(), loc.clone(), kind, vec![delims[0].into()]),
        Rule::moving(loc.clone(), loc.clone(), kind, vec![delims[1].into()]),
        Rule::deleting(loc.clone(), kind, vec![delims[2].into()]),
    ];
    for _ in 0..2 {
        for f in files {
            fs::write(dir.join(f), b"").unwrap();
        }
        run_rules(&rules).unwrap();
    }
    base
}

#[test]
fn prefix_rules_sort_into_source_subdirectories_across_runs() {
    let files = [
        "pre1__test1.txt",
        "pre1__test2.txt",
        "pre1__test3.txt",
        "pre2--test1.txt",
        "pre2--test2.txt",
        "pre2--test3.txt",
        "pre3++test1.txt",
    ];
    let base = sort_into_same_directory(RuleKind::Prefix, &files, ["__", "--", "++"]);
    let dir = base.path();

    assert_eq!(names(dir), set(&["pre1", "pre2"]));
    assert_eq!(
        names(&dir.join("pre1")),
        set(&[
            "pre1__test1.txt",
            "pre1__test10.txt",
            "pre1__test2.txt",
            "pre1__test20.txt",
            "pre1__test3.txt",
            "pre1__test30.txt",
        ])
    );
    assert_eq!(
        names(&dir.join("pre2")),
        set(&[
            "pre2--test1.txt",
            "pre2--test10.txt",
            "pre2--test2.txt",
            "pre2--test20.txt",
            "pre2--test3.txt",
            "pre2--test30.txt",
        ])
    );
}

#[test]
fn suffix_rules_sort_into_source_subdirectories_across_runs() {
    let files = [
        "test1__suf1.txt",
        "test2__suf1.txt",
        "test3__suf1.txt",
        "test1--suf2.txt",
        "test2--suf2.txt",
        "test3--suf2.txt",
        "test1++suf3.txt",
    ];
    let base = sort_into_same_directory(RuleKind::Suffix, &files, ["__", "--", "++"]);
    let dir = base.path();

    assert_eq!(names(dir), set(&["suf1", "suf2"]));
    assert_eq!(
        names(&dir.join("suf1")),
        set(&[
            "test1__suf1.txt",
            "test1__suf10.txt",
            "test2__suf1.txt",
            "test2__suf10.txt",
            "test3__suf1.txt",
            "test3__suf10.txt",
        ])
    );
    assert_eq!(
        names(&dir.join("suf2")),
        set(&[
            "test1--suf2.txt",
            "test1--suf20.txt",
            "test2--suf2.txt",
            "test2--suf20.txt",
            "test3--suf2.txt",
            "test3--suf20.txt",
        ])
    );
}
