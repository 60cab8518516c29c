use proptest::prelude::*;
use skills_fs::hash_tree;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

fn write_tree(root: &Path, files: &[(String, Vec<u8>)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

fn tree_strategy() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    prop::collection::btree_map(
        "[a-z]{1,6}(/[a-z]{1,6}){0,2}\\.md",
        prop::collection::vec(any::<u8>(), 0..64),
        1..8,
    )
    // A path that is also a directory prefix of another path cannot exist on disk
    .prop_filter("file/directory clash", |files| {
        files.keys().all(|a| {
            files
                .keys()
                .all(|b| a == b || !b.starts_with(&format!("{a}/")))
        })
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tree_digest_ignores_creation_order(files in tree_strategy()) {
        let forward: Vec<_> = files.clone().into_iter().collect();
        let mut backward = forward.clone();
        backward.reverse();

        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_tree(a.path(), &forward);
        write_tree(b.path(), &backward);

        prop_assert_eq!(hash_tree(a.path()).unwrap(), hash_tree(b.path()).unwrap());
    }

    #[test]
    fn tree_digest_tracks_content(files in tree_strategy(), flip in any::<u8>()) {
        let entries: Vec<_> = files.into_iter().collect();
        let mut changed = entries.clone();
        let first = &mut changed[0].1;
        if first.is_empty() {
            first.push(flip);
        } else {
            first[0] = first[0].wrapping_add(flip.max(1));
        }

        let a = tempfile::tempdir().unwrap();
        let b = tempfile::tempdir().unwrap();
        write_tree(a.path(), &entries);
        write_tree(b.path(), &changed);

        prop_assert_ne!(hash_tree(a.path()).unwrap(), hash_tree(b.path()).unwrap());
    }
}
