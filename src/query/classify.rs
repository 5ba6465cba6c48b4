// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword or natural language? Decided from the raw string alone.
//!
//! Three or more words is always a sentence. Shorter queries count as sentences
//! only if they open like one ("help", "show", "i ", "what "...). Everything
//! else, including the empty string, is a keyword lookup.

use crate::types::QueryMode;

/// Openers that mark a short query as conversational.
///
/// Prefix match on the lower-cased, trimmed query, so "tools" matches
/// "tool". The trailing spaces on "i ", "how " and "what " keep "ios"
/// and "however" out.
pub const NATURAL_LANGUAGE_TRIGGERS: &[&str] = &[
    "i ", "help", "find", "show", "need", "want", "looking", "tool", "something", "how ", "what ",
    "can you",
];

/// Minimum word count that makes any query natural language.
pub const NATURAL_LANGUAGE_MIN_WORDS: usize = 3;

pub fn classify(query: &str) -> QueryMode {
    let q = query.trim().to_lowercase();
    if q.split_whitespace().count() >= NATURAL_LANGUAGE_MIN_WORDS
        || NATURAL_LANGUAGE_TRIGGERS.iter().any(|t| q.starts_with(t))
    {
        QueryMode::NaturalLanguage
    } else {
        QueryMode::Keyword
    }
}

pub fn is_natural_language(query: &str) -> bool {
    classify(query) == QueryMode::NaturalLanguage
}
