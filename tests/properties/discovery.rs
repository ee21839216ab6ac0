//! Property tests for component/service discovery.

use std::collections::BTreeSet;
use std::path::PathBuf;

use proptest::prelude::*;

use ngharness::discover_angular_files;

fn dir_segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,8}").unwrap()
}

fn relative_dir() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(dir_segment(), 0..=3)
}

fn non_matching_suffix() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(".module.ts"),
        Just(".component.html"),
        Just(".component.scss"),
        Just(".service.js"),
        Just(".pipe.ts"),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: N matching plus M non-matching files yields exactly the N matches.
    #[test]
    fn property_discovery_finds_exactly_matching_files(
        matching in proptest::collection::vec((relative_dir(), any::<bool>()), 0..8),
        other in proptest::collection::vec((relative_dir(), non_matching_suffix()), 0..8),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let mut expected = BTreeSet::new();

        for (i, (segments, is_component)) in matching.iter().enumerate() {
            let suffix = if *is_component { "component" } else { "service" };
            let path: PathBuf = segments
                .iter()
                .fold(root.to_path_buf(), |p, s| p.join(s))
                .join(format!("m{}.{}.ts", i, suffix));
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "").unwrap();
            expected.insert(path);
        }

        for (i, (segments, suffix)) in other.iter().enumerate() {
            let path: PathBuf = segments
                .iter()
                .fold(root.to_path_buf(), |p, s| p.join(s))
                .join(format!("o{}{}", i, suffix));
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(&path, "").unwrap();
        }

        let found = discover_angular_files(root).unwrap();

        prop_assert_eq!(found.len(), expected.len());
        let found: BTreeSet<PathBuf> = found.into_iter().collect();
        prop_assert_eq!(found, expected);
    }
}
