//! Adding rules or fallback only ever adds: expansion grows with the catalog,
//! and category fallback appends to thin fuzzy results.

use super::common::{fixture_engine, fixture_records};
use super::query_strategy;
use proptest::prelude::*;
use std::sync::LazyLock;
use toolscout::{
    builtin_rules, expand, strip, truncate_chars, EngineConfig, IntentCatalog, IntentRule,
    MatchSource, SearchEngine,
};

/// Same corpus, but fallback runs on every query with a matched category.
static ALWAYS_FALLBACK: LazyLock<SearchEngine> = LazyLock::new(|| {
    let config = EngineConfig {
        fallback_min_results: usize::MAX,
        ..EngineConfig::default()
    };
    SearchEngine::new(fixture_records().to_vec(), IntentCatalog::default(), config)
});

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_fallback_only_when_thin(query in query_strategy()) {
        let results = fixture_engine().natural_language_search(&query);
        let fuzzy = results.items.iter().filter(|i| i.source == MatchSource::Fuzzy).count();
        let fallback = results.len() - fuzzy;
        if fallback > 0 {
            prop_assert!(fuzzy < EngineConfig::default().fallback_min_results);
        }
        // Fuzzy hits first, fallback after
        prop_assert!(results.items[..fuzzy].iter().all(|i| i.source == MatchSource::Fuzzy));
    }

    #[test]
    fn prop_fallback_stays_in_matched_categories(query in query_strategy()) {
        let raw = truncate_chars(&query, EngineConfig::default().max_query_chars);
        let expansion = expand(&IntentCatalog::default(), &strip(raw));
        let results = fixture_engine().natural_language_search(&query);
        for item in results.items.iter().filter(|i| i.source == MatchSource::CategoryFallback) {
            prop_assert!(expansion.categories.contains(&item.record.category));
            prop_assert!(item.distance.is_none());
        }
    }

    #[test]
    fn prop_fallback_only_appends(query in query_strategy()) {
        let default = fixture_engine().natural_language_search(&query).ids();
        let always = ALWAYS_FALLBACK.natural_language_search(&query).ids();
        prop_assert!(always.len() >= default.len());
        prop_assert_eq!(&always[..default.len()], &default[..]);
    }

    #[test]
    fn prop_extra_rule_only_adds(
        query in super::domain_query(),
        fallback_pattern in "[a-z]{3,8}",
        keywords in prop::collection::vec("[a-z]{3,10}", 1..4),
        categories in prop::collection::vec("[a-z]{3,8}-[a-z]{3,8}", 0..3),
        prepend in any::<bool>(),
    ) {
        let core = strip(&query);
        // Trigger on a word of the query when there is one, so the rule usually matches
        let pattern = core
            .split_whitespace()
            .last()
            .map(str::to_lowercase)
            .unwrap_or(fallback_pattern);
        let keyword_refs: Vec<&str> = keywords.iter().map(String::as_str).collect();
        let category_refs: Vec<&str> = categories.iter().map(String::as_str).collect();
        let extra = IntentRule::new(&[pattern.as_str()], &keyword_refs, &category_refs);

        let mut rules = builtin_rules();
        if prepend {
            rules.insert(0, extra);
        } else {
            rules.push(extra);
        }
        let extended_catalog = IntentCatalog::new(rules).unwrap();

        let base = expand(&IntentCatalog::default(), &core);
        let extended = expand(&extended_catalog, &core);

        for keyword in &base.rule_keywords {
            prop_assert!(extended.rule_keywords.contains(keyword), "lost {:?}", keyword);
        }
        for category in &base.categories {
            prop_assert!(extended.categories.contains(category), "lost {:?}", category);
        }
        prop_assert!(extended.matched_rules.len() >= base.matched_rules.len());
        prop_assert_eq!(&extended.raw_words, &base.raw_words);
        if !prepend {
            prop_assert_eq!(&extended.rule_keywords[..base.rule_keywords.len()], &base.rule_keywords[..]);
        }
    }
}
