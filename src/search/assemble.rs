// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result assembly for both query modes.
//!
//! # Natural language
//!
//! ```text
//! raw ──truncate──► strip ──► core ──expand──► keywords + categories
//!                                                  │
//!                          first N keywords joined │
//!                                                  ▼
//!                                  FuzzyIndex::search (natural-language profile)
//!                                                  │
//!                               fuzzy hits, ranked │
//!                                                  ▼
//!              fewer than `fallback_min_results`? and any category matched?
//!                     │ yes                              │ no
//!                     ▼                                  │
//!     append records in those categories, corpus order   │
//!                     │                                  │
//!                     └──────────► dedup by id ◄─────────┘
//! ```
//!
//! The category slug is itself a weighted fuzzy field, and expanded keywords
//! like "audio" are often substrings of it ("voice-audio"). So records tied to
//! a query only by category mostly come back as fuzzy hits. Fallback picks
//! them up when the category field carries no weight or shares no text with
//! the expanded keywords.
//!
//! # Keyword
//!
//! The trimmed query goes straight to the index with the keyword profile,
//! capped to `keyword_limit`. No stripping, no expansion, no fallback.
//!
//! Both functions are total. Any string in, a `SearchResults` out.

use super::dedup::ResultMerger;
use crate::catalog::IntentCatalog;
use crate::config::EngineConfig;
use crate::index::{FuzzyIndex, Hit};
use crate::query::{expand, strip};
use crate::types::{MatchSource, QueryMode, RankedTool, SearchResults, ToolRecord};
use crate::utils::truncate_chars;

/// Natural-language search over `records`.
///
/// `index` must have been built from `records`; hit positions are looked up in
/// it. A position with no record (a mismatched index) is skipped.
pub fn assemble<'a>(
    records: &'a [ToolRecord],
    index: &FuzzyIndex,
    catalog: &IntentCatalog,
    config: &EngineConfig,
    raw: &str,
) -> SearchResults<'a> {
    let raw = truncate_chars(raw, config.max_query_chars);
    let core = strip(raw);
    let expansion = expand(catalog, &core);
    let search_string = expansion.search_string(config.expansion_keyword_cap);

    let hits = index.search(&search_string, &config.natural_language);
    let fuzzy_count = hits.len();

    let mut merger = ResultMerger::with_capacity(fuzzy_count);
    merger.merge_all(fuzzy_items(records, &hits));

    let mut fallback_added = 0;
    if fuzzy_count < config.fallback_min_results && expansion.has_categories() {
        let fallback = records
            .iter()
            .filter(|r| expansion.categories.iter().any(|c| *c == r.category))
            .map(|record| RankedTool {
                record,
                distance: None,
                source: MatchSource::CategoryFallback,
            });
        fallback_added = merger.merge_all(fallback);
        tracing::debug!(
            fuzzy = fuzzy_count,
            added = fallback_added,
            categories = ?expansion.categories,
            "category fallback"
        );
    }

    let intent = if core.is_empty() {
        raw.to_string()
    } else {
        core
    };
    let keywords = expansion.display_keywords(config.display_keyword_cap);
    let items = merger.into_items();

    tracing::debug!(
        mode = %QueryMode::NaturalLanguage,
        intent = %intent,
        rules = expansion.matched_rules.len(),
        keywords = keywords.len(),
        fuzzy = fuzzy_count,
        fallback = fallback_added,
        results = items.len(),
        "query assembled"
    );

    SearchResults {
        mode: QueryMode::NaturalLanguage,
        intent,
        keywords,
        items,
    }
}

/// Direct lookup, the search-box path.
///
/// Queries shorter than `keyword_min_query_chars` (after trimming) return an
/// empty list rather than everything. A blank query keeps its raw text as the
/// intent.
pub fn keyword_lookup<'a>(
    records: &'a [ToolRecord],
    index: &FuzzyIndex,
    config: &EngineConfig,
    raw: &str,
) -> SearchResults<'a> {
    let raw = truncate_chars(raw, config.max_query_chars);
    let query = raw.trim();
    if query.is_empty() {
        return SearchResults::empty(QueryMode::Keyword, raw);
    }
    if query.chars().count() < config.keyword_min_query_chars {
        return SearchResults::empty(QueryMode::Keyword, query);
    }

    let hits = index.search(query, &config.keyword);
    let mut merger = ResultMerger::with_capacity(config.keyword_limit);
    for item in fuzzy_items(records, &hits) {
        if merger.len() >= config.keyword_limit {
            break;
        }
        merger.merge(item);
    }
    let items = merger.into_items();

    tracing::debug!(
        mode = %QueryMode::Keyword,
        query = %query,
        hits = hits.len(),
        results = items.len(),
        "query assembled"
    );

    SearchResults {
        mode: QueryMode::Keyword,
        intent: query.to_string(),
        keywords: Vec::new(),
        items,
    }
}

fn fuzzy_items<'a, 'h>(
    records: &'a [ToolRecord],
    hits: &'h [Hit],
) -> impl Iterator<Item = RankedTool<'a>> + 'h
where
    'a: 'h,
{
    hits.iter().filter_map(move |hit| {
        records.get(hit.position).map(|record| RankedTool {
            record,
            distance: Some(hit.distance),
            source: MatchSource::Fuzzy,
        })
    })
}
