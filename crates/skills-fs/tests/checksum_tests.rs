//! Tree digest behaviour against real directory layouts

use assert_fs::prelude::*;
use rstest::rstest;
use skills_fs::{hash_file, hash_tree, list_files};

fn build(files: &[(&str, &str)]) -> assert_fs::TempDir {
    let temp = assert_fs::TempDir::new().unwrap();
    for (path, content) in files {
        temp.child(path).write_str(content).unwrap();
    }
    temp
}

#[test]
fn creation_order_does_not_matter() {
    let forward = build(&[("SKILL.md", "skill"), ("hooks/a.sh", "a"), ("rules/r.md", "r")]);
    let backward = build(&[("rules/r.md", "r"), ("hooks/a.sh", "a"), ("SKILL.md", "skill")]);

    assert_eq!(
        hash_tree(forward.path()).unwrap(),
        hash_tree(backward.path()).unwrap()
    );
}

#[test]
fn one_byte_change_changes_digest() {
    let original = build(&[("SKILL.md", "skill"), ("rules/r.md", "rule")]);
    let changed = build(&[("SKILL.md", "skill"), ("rules/r.md", "rulf")]);

    assert_ne!(
        hash_tree(original.path()).unwrap(),
        hash_tree(changed.path()).unwrap()
    );
}

#[rstest]
#[case::renamed_file(&[("rules/a.md", "x")], &[("rules/b.md", "x")])]
#[case::moved_file(&[("rules/a.md", "x")], &[("hooks/a.md", "x")])]
#[case::extra_file(&[("a.md", "x")], &[("a.md", "x"), ("b.md", "")])]
#[case::case_change(&[("a.md", "x")], &[("A.md", "x")])]
fn path_set_changes_digest(#[case] left: &[(&str, &str)], #[case] right: &[(&str, &str)]) {
    let left = build(left);
    let right = build(right);

    assert_ne!(hash_tree(left.path()).unwrap(), hash_tree(right.path()).unwrap());
}

#[test]
fn empty_directories_are_ignored() {
    let plain = build(&[("SKILL.md", "skill")]);
    let with_empty = build(&[("SKILL.md", "skill")]);
    with_empty.child("templates").create_dir_all().unwrap();

    assert_eq!(
        hash_tree(plain.path()).unwrap(),
        hash_tree(with_empty.path()).unwrap()
    );
}

#[test]
fn deep_trees_are_walked() {
    let temp = assert_fs::TempDir::new().unwrap();
    let deep: String = (0..64).map(|i| format!("d{i}/")).collect();
    temp.child(format!("{deep}leaf.txt")).write_str("leaf").unwrap();

    let files = list_files(temp.path()).unwrap();
    assert_eq!(files, vec![format!("{deep}leaf.txt")]);
}

#[test]
fn file_and_tree_digests_are_independent() {
    let temp = build(&[("SKILL.md", "skill")]);
    let file_digest = hash_file(&temp.path().join("SKILL.md")).unwrap();
    let tree_digest = hash_tree(temp.path()).unwrap();

    assert_eq!(file_digest.len(), 12);
    assert_eq!(tree_digest.len(), 12);
    assert_ne!(file_digest, tree_digest);
}
