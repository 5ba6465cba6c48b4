//! No id twice in any result list.

use super::common::fixture_engine;
use super::query_strategy;
use proptest::prelude::*;
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_ids_unique(query in query_strategy()) {
        let engine = fixture_engine();
        for results in [
            engine.search(&query),
            engine.keyword_search(&query),
            engine.natural_language_search(&query),
        ] {
            let ids = results.ids();
            let unique: HashSet<_> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
        }
    }
}
