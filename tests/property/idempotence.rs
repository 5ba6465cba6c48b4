//! Stripping settles after one pass, and searching the core is the same search.

use super::common::fixture_engine;
use proptest::prelude::*;
use toolscout::strip;

fn short_query() -> impl Strategy<Value = String> {
    prop_oneof!["[a-zA-Z' ]{0,60}", super::domain_query()]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_strip_idempotent(query in "\\PC{0,80}") {
        let once = strip(&query);
        prop_assert_eq!(strip(&once), once);
    }

    #[test]
    fn prop_core_query_gives_same_results(query in short_query()) {
        let engine = fixture_engine();
        let core = strip(&query);
        let from_raw = engine.natural_language_search(&query);
        let from_core = engine.natural_language_search(&core);

        prop_assert_eq!(from_raw.ids(), from_core.ids());
        prop_assert_eq!(from_raw.keywords, from_core.keywords);
        if !core.is_empty() {
            prop_assert_eq!(from_raw.intent, from_core.intent);
        }
    }
}
