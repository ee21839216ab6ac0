//! Property tests for `--pick` index parsing.

use std::path::PathBuf;

use proptest::prelude::*;

use ngharness::domain::value_objects::IndexSelection;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,64}") {
        let _ = IndexSelection::parse(&s);
    }

    /// PROPERTY: In-range 1-based indices resolve to the same candidates in input order.
    #[test]
    fn property_resolve_follows_input_order(
        len in 1usize..12,
        raw in proptest::collection::vec(any::<prop::sample::Index>(), 1..8),
    ) {
        let candidates: Vec<PathBuf> = (0..len)
            .map(|i| PathBuf::from(format!("/p/f{}.component.ts", i)))
            .collect();
        let picks: Vec<usize> = raw.iter().map(|ix| ix.index(len)).collect();
        let input = picks
            .iter()
            .map(|i| (i + 1).to_string())
            .collect::<Vec<_>>()
            .join(",");

        let resolved = IndexSelection::parse(&input).unwrap().resolve(&candidates).unwrap();

        let expected: Vec<PathBuf> = picks.iter().map(|&i| candidates[i].clone()).collect();
        prop_assert_eq!(resolved, expected);
    }
}
