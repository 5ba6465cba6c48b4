// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine tuning knobs.
//!
//! Every number here came from watching real queries against a scraped corpus of
//! a few hundred tools. None of them is derived from anything, so they all live in
//! one serde struct instead of being scattered as constants. A JSON file with
//! any subset of the fields overrides the defaults.
//!
//! | Field                     | Default | Used by            |
//! |---------------------------|---------|--------------------|
//! | `max_query_chars`         | 100     | every query        |
//! | `fallback_min_results`    | 5       | category fallback  |
//! | `expansion_keyword_cap`   | 15      | synthetic query    |
//! | `display_keyword_cap`     | 8       | keyword chips      |
//! | `min_match_chars`         | 2       | term extraction    |
//! | `keyword_min_query_chars` | 2       | keyword mode       |
//! | `keyword_limit`           | 8       | keyword mode       |

use crate::error::ConfigError;
use crate::scoring::FieldWeights;
use serde::{Deserialize, Deserializer, Serialize};

/// Field weights plus the looseness cutoff for one kind of query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchProfile {
    pub weights: FieldWeights,
    /// Normalized edit-distance cutoff: 0 = exact only, 1 = anything goes.
    pub threshold: f64,
}

impl Default for SearchProfile {
    fn default() -> Self {
        Self::natural_language()
    }
}

impl SearchProfile {
    /// Expanded-keyword search: weighted toward titles, a bit loose.
    pub fn natural_language() -> Self {
        Self {
            weights: FieldWeights::natural_language(),
            threshold: 0.4,
        }
    }

    /// Direct lookups from the search box: flat weights, a bit stricter.
    pub fn keyword() -> Self {
        Self {
            weights: FieldWeights::keyword(),
            threshold: 0.35,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                name,
                value: self.threshold,
            });
        }
        let w = &self.weights;
        let all_valid = [w.title, w.description, w.tags, w.category, w.author]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !all_valid {
            return Err(ConfigError::InvalidWeight { name });
        }
        Ok(())
    }
}

/// A profile as written in a config file. Anything left out keeps the value
/// of the profile it overrides, so `{"threshold": 0.2}` under `keyword` still
/// has keyword weights.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileOverride {
    weights: WeightsOverride,
    threshold: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeightsOverride {
    title: Option<f64>,
    description: Option<f64>,
    tags: Option<f64>,
    category: Option<f64>,
    author: Option<f64>,
}

impl ProfileOverride {
    fn apply(self, base: SearchProfile) -> SearchProfile {
        let w = self.weights;
        let b = base.weights;
        SearchProfile {
            weights: FieldWeights {
                title: w.title.unwrap_or(b.title),
                description: w.description.unwrap_or(b.description),
                tags: w.tags.unwrap_or(b.tags),
                category: w.category.unwrap_or(b.category),
                author: w.author.unwrap_or(b.author),
            },
            threshold: self.threshold.unwrap_or(base.threshold),
        }
    }
}

fn natural_language_profile<'de, D: Deserializer<'de>>(d: D) -> Result<SearchProfile, D::Error> {
    ProfileOverride::deserialize(d).map(|o| o.apply(SearchProfile::natural_language()))
}

fn keyword_profile<'de, D: Deserializer<'de>>(d: D) -> Result<SearchProfile, D::Error> {
    ProfileOverride::deserialize(d).map(|o| o.apply(SearchProfile::keyword()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longer queries are cut to this many characters before anything else runs.
    pub max_query_chars: usize,
    /// Category fallback kicks in below this many fuzzy hits.
    pub fallback_min_results: usize,
    /// How many expanded keywords make it into the synthetic query.
    pub expansion_keyword_cap: usize,
    /// How many rule keywords are returned for display.
    pub display_keyword_cap: usize,
    /// Query terms shorter than this are ignored by the index.
    pub min_match_chars: usize,
    /// Keyword-mode queries shorter than this return nothing.
    pub keyword_min_query_chars: usize,
    /// Keyword-mode result cap.
    pub keyword_limit: usize,
    #[serde(deserialize_with = "natural_language_profile")]
    pub natural_language: SearchProfile,
    #[serde(deserialize_with = "keyword_profile")]
    pub keyword: SearchProfile,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_query_chars: 100,
            fallback_min_results: 5,
            expansion_keyword_cap: 15,
            display_keyword_cap: 8,
            min_match_chars: 2,
            keyword_min_query_chars: 2,
            keyword_limit: 8,
            natural_language: SearchProfile::natural_language(),
            keyword: SearchProfile::keyword(),
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = [
            ("max_query_chars", self.max_query_chars),
            ("expansion_keyword_cap", self.expansion_keyword_cap),
            ("min_match_chars", self.min_match_chars),
            ("keyword_limit", self.keyword_limit),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::ZeroLimit { name });
            }
        }
        self.natural_language.validate("natural_language")?;
        self.keyword.validate("keyword")?;
        Ok(())
    }
}
