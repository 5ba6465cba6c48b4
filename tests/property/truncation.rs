//! A query and its first 100 characters are the same query.

use super::common::fixture_engine;
use proptest::prelude::*;

fn long_query() -> impl Strategy<Value = String> {
    prop_oneof![
        "\\PC{101,240}",
        (super::domain_query(), "[a-z ]{100,160}").prop_map(|(q, tail)| format!("{} {}", q, tail)),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_truncation_parity(query in long_query()) {
        let engine = fixture_engine();
        let cut: String = query.chars().take(100).collect();
        let a = engine.search(&query);
        let b = engine.search(&cut);
        prop_assert_eq!(a.mode, b.mode);
        prop_assert_eq!(a.ids(), b.ids());
        prop_assert_eq!(a.intent, b.intent);
        prop_assert_eq!(a.keywords, b.keywords);
    }
}
