// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Intent expansion: core query in, domain keywords and candidate categories out.
//!
//! Every rule is checked. "transcribe my meeting notes" hits both the
//! transcription rule and the meeting rule, and both should count, so there's no
//! early exit and no priority. The scan is rules × patterns, which for a catalog
//! of a few dozen rules is nothing.
//!
//! The query's own words (longer than two characters) ride along as a fallback,
//! so a term the catalog has never heard of still reaches the index.

use crate::catalog::IntentCatalog;
use crate::utils::push_unique;

/// Words of at most this many characters are not used as fallback keywords.
pub const RAW_WORD_MIN_EXCLUSIVE: usize = 2;

/// What one expansion produced. All lists are de-duplicated, first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expansion {
    /// Keywords contributed by matching rules.
    pub rule_keywords: Vec<String>,
    /// The query's own words, lower-cased, longer than two characters.
    pub raw_words: Vec<String>,
    /// Category slugs named by matching rules.
    pub categories: Vec<String>,
    /// Indices of the rules that matched.
    pub matched_rules: Vec<usize>,
}

impl Expansion {
    /// Rule keywords then raw words, de-duplicated.
    pub fn keywords(&self) -> Vec<String> {
        let mut all = self.rule_keywords.clone();
        for word in &self.raw_words {
            push_unique(&mut all, word);
        }
        all
    }

    /// The synthetic query fed to the index: the first `cap` keywords, space-joined.
    pub fn search_string(&self, cap: usize) -> String {
        self.keywords()
            .into_iter()
            .take(cap)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Rule keywords only, for display.
    pub fn display_keywords(&self, cap: usize) -> Vec<String> {
        self.rule_keywords.iter().take(cap).cloned().collect()
    }

    pub fn has_categories(&self) -> bool {
        !self.categories.is_empty()
    }
}

pub fn expand(catalog: &IntentCatalog, core: &str) -> Expansion {
    let core_lower = core.to_lowercase();
    let mut expansion = Expansion::default();

    for (idx, rule) in catalog.rules().iter().enumerate() {
        if !rule.patterns.iter().any(|p| core_lower.contains(p.as_str())) {
            continue;
        }
        expansion.matched_rules.push(idx);
        for keyword in &rule.keywords {
            push_unique(&mut expansion.rule_keywords, keyword);
        }
        for category in &rule.categories {
            push_unique(&mut expansion.categories, category);
        }
    }

    for word in core_lower.split_whitespace() {
        if word.chars().count() > RAW_WORD_MIN_EXCLUSIVE {
            push_unique(&mut expansion.raw_words, word);
        }
    }

    expansion
}
