// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The engine: one corpus, one catalog, one index, any number of queries.
//!
//! Construction is the only expensive step. After that every call takes
//! `&self`, allocates its own scratch state, and returns results borrowing the
//! corpus. Nothing is mutated, so the engine can sit behind an `Arc` and serve
//! overlapping queries from several threads. Discarding stale results is the
//! caller's business.

use crate::catalog::IntentCatalog;
use crate::config::EngineConfig;
use crate::index::FuzzyIndex;
use crate::query::classify;
use crate::search::{assemble, keyword_lookup};
use crate::types::{QueryMode, SearchResults, ToolRecord};
use crate::utils::truncate_chars;

/// Corpora at least this large are indexed on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_BUILD_THRESHOLD: usize = 2048;

#[derive(Debug, Clone)]
pub struct SearchEngine {
    records: Vec<ToolRecord>,
    index: FuzzyIndex,
    catalog: IntentCatalog,
    config: EngineConfig,
}

impl SearchEngine {
    /// Take ownership of the corpus and build the index once.
    ///
    /// `config` is used as given. Validate it first (`EngineConfig::validate`)
    /// if it came from user input.
    pub fn new(records: Vec<ToolRecord>, catalog: IntentCatalog, config: EngineConfig) -> Self {
        let index = build_index(&records, config.min_match_chars);
        tracing::debug!(
            records = records.len(),
            rules = catalog.len(),
            "search engine ready"
        );
        Self {
            records,
            index,
            catalog,
            config,
        }
    }

    /// Built-in catalog, default config.
    pub fn with_defaults(records: Vec<ToolRecord>) -> Self {
        Self::new(records, IntentCatalog::default(), EngineConfig::default())
    }

    /// Classify and dispatch.
    ///
    /// The query is cut to `max_query_chars` first, so a long query and its
    /// truncation always produce the same results.
    pub fn search(&self, raw: &str) -> SearchResults<'_> {
        let raw = truncate_chars(raw, self.config.max_query_chars);
        match classify(raw) {
            QueryMode::NaturalLanguage => self.natural_language_search(raw),
            QueryMode::Keyword => self.keyword_search(raw),
        }
    }

    /// Strip, expand, fuzzy-match, then fill thin results from matched categories.
    pub fn natural_language_search(&self, raw: &str) -> SearchResults<'_> {
        assemble(&self.records, &self.index, &self.catalog, &self.config, raw)
    }

    /// Direct fuzzy lookup with the keyword profile.
    pub fn keyword_search(&self, raw: &str) -> SearchResults<'_> {
        keyword_lookup(&self.records, &self.index, &self.config, raw)
    }

    pub fn classify(&self, raw: &str) -> QueryMode {
        classify(truncate_chars(raw, self.config.max_query_chars))
    }

    pub fn records(&self) -> &[ToolRecord] {
        &self.records
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn index(&self) -> &FuzzyIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(feature = "parallel")]
fn build_index(records: &[ToolRecord], min_match_chars: usize) -> FuzzyIndex {
    if records.len() >= PARALLEL_BUILD_THRESHOLD {
        FuzzyIndex::build_parallel(records, min_match_chars)
    } else {
        FuzzyIndex::build(records, min_match_chars)
    }
}

#[cfg(not(feature = "parallel"))]
fn build_index(records: &[ToolRecord], min_match_chars: usize) -> FuzzyIndex {
    FuzzyIndex::build(records, min_match_chars)
}
