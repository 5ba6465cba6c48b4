// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query handling.
//!
//! Throws arbitrary bytes at both query paths over the fixture corpus. Nothing
//! may panic, and every result list must stay well-formed.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;
use std::fs;
use toolscout::{parse_corpus, EngineConfig, MatchSource, QueryMode, SearchEngine};

fuzz_target!(|query: &[u8]| {
    // Note: fuzz targets run from the fuzz/ directory, so try the parent too
    static ENGINE: std::sync::OnceLock<SearchEngine> = std::sync::OnceLock::new();
    let engine = ENGINE.get_or_init(|| {
        let paths = ["fixtures/tools.json", "../fixtures/tools.json"];
        let json = paths
            .iter()
            .find_map(|p| fs::read_to_string(p).ok())
            .expect("Failed to read fixture corpus from any path");
        SearchEngine::with_defaults(parse_corpus(&json).expect("Fixture corpus is valid"))
    });

    let query = String::from_utf8_lossy(query);
    let config = EngineConfig::default();

    // INVARIANT 1: search() never panics
    let results = engine.search(&query);

    // INVARIANT 2: intent is bounded by the query cap
    assert!(results.intent.chars().count() <= config.max_query_chars);

    // INVARIANT 3: no id twice
    let ids = results.ids();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len(), "duplicate ids for {:?}", query);

    // INVARIANT 4: fuzzy hits first, ascending, within [0, 1]
    let fuzzy: Vec<f64> = results
        .items
        .iter()
        .take_while(|i| i.source == MatchSource::Fuzzy)
        .filter_map(|i| i.distance)
        .collect();
    assert!(fuzzy.windows(2).all(|w| w[0] <= w[1]));
    assert!(fuzzy.iter().all(|d| (0.0..=1.0).contains(d)));
    assert!(results.items[fuzzy.len()..]
        .iter()
        .all(|i| i.source == MatchSource::CategoryFallback));

    // INVARIANT 5: fallback only tops up thin results
    if fuzzy.len() < results.len() {
        assert!(fuzzy.len() < config.fallback_min_results);
    }

    // INVARIANT 6: keyword mode is capped
    if results.mode == QueryMode::Keyword {
        assert!(results.len() <= config.keyword_limit);
    }
});
