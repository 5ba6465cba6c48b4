// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy index: normalized field text, built once per corpus.
//!
//! Building is the only step that scales with corpus size times field count, so
//! it happens once at load and every query after that reuses it. The index holds
//! positions into the corpus, not records, which keeps it `Send + Sync` and lets
//! the engine hand out borrows of the original records.
//!
//! # Layout
//!
//! ```text
//! fields[position] = [title, description, tags, category, author]
//!                      │        │            │      │         │
//!                      └────────┴── normalized text, None if absent/blank
//! ```
//!
//! A record with a null description simply has `None` in that slot. Scoring
//! skips it. No placeholder text, no error.
//!
//! Each slot also keeps its text split into words (runs of letters and digits),
//! since approximate matches are anchored at word starts.

use crate::config::SearchProfile;
use crate::fuzzy::{best_word_distance, max_edits};
use crate::scoring::ranking::compare_hits;
use crate::scoring::{combine_fields, field_distance, term_distance, FieldKind};
use crate::types::ToolRecord;
use crate::utils::{normalize, query_terms};
use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// One normalized field and its words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct FieldText {
    text: String,
    words: Vec<String>,
}

impl FieldText {
    fn new(text: String) -> Option<Self> {
        if text.is_empty() {
            return None;
        }
        let words = text
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        Some(Self { text, words })
    }
}

/// Normalized searchable text for one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedFields {
    fields: [Option<FieldText>; 5],
}

impl IndexedFields {
    pub fn from_record(record: &ToolRecord) -> Self {
        let mut fields: [Option<FieldText>; 5] = Default::default();
        fields[FieldKind::Title.slot()] = FieldText::new(normalize(&record.title));
        fields[FieldKind::Description.slot()] =
            record.description.as_deref().map(normalize).and_then(FieldText::new);
        fields[FieldKind::Tags.slot()] = FieldText::new(normalize(&record.tags.join(" ")));
        fields[FieldKind::Category.slot()] =
            FieldText::new(normalize(&record.category.replace('-', " ")));
        fields[FieldKind::Author.slot()] = FieldText::new(normalize(&record.author));
        Self { fields }
    }

    pub fn get(&self, field: FieldKind) -> Option<&str> {
        self.fields[field.slot()].as_ref().map(|f| f.text.as_str())
    }

    pub fn words(&self, field: FieldKind) -> &[String] {
        self.fields[field.slot()]
            .as_ref()
            .map_or(&[][..], |f| f.words.as_slice())
    }

    /// Edits for `term` against `field`, if within `max`.
    fn distance(&self, field: FieldKind, term: &str, max: usize) -> Option<usize> {
        let slot = self.fields[field.slot()].as_ref()?;
        best_word_distance(term, &slot.text, slot.words.iter().map(String::as_str), max)
    }
}

/// One fuzzy match: where it is in the corpus and how close it was.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    pub position: usize,
    /// 0 = exact, 1 = unrelated.
    pub distance: f64,
}

/// Weighted multi-field approximate-match index.
#[derive(Debug, Clone, Default)]
pub struct FuzzyIndex {
    entries: Vec<IndexedFields>,
    min_match_chars: usize,
}

impl FuzzyIndex {
    /// Index a corpus snapshot. Positions line up with `records`.
    pub fn build(records: &[ToolRecord], min_match_chars: usize) -> Self {
        let start = Instant::now();
        let entries: Vec<IndexedFields> = records.iter().map(IndexedFields::from_record).collect();
        tracing::info!(
            records = entries.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "fuzzy index built"
        );
        Self {
            entries,
            min_match_chars: min_match_chars.max(1),
        }
    }

    /// Same index as `build`, normalizing records on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn build_parallel(records: &[ToolRecord], min_match_chars: usize) -> Self {
        let start = Instant::now();
        let entries: Vec<IndexedFields> =
            records.par_iter().map(IndexedFields::from_record).collect();
        tracing::info!(
            records = entries.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "fuzzy index built (parallel)"
        );
        Self {
            entries,
            min_match_chars: min_match_chars.max(1),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fields(&self, position: usize) -> Option<&IndexedFields> {
        self.entries.get(position)
    }

    /// Rank every record against `text`, best first.
    ///
    /// Empty or all-short-term queries return nothing. Records where no
    /// weighted field gets a term within the profile threshold are left out.
    pub fn search(&self, text: &str, profile: &SearchProfile) -> Vec<Hit> {
        let terms = query_terms(text, self.min_match_chars);
        if terms.is_empty() || self.entries.is_empty() {
            return Vec::new();
        }

        let weights = profile.weights.normalized();
        let threshold = profile.threshold.clamp(0.0, 1.0);
        let bounds: Vec<(usize, usize)> = terms
            .iter()
            .map(|t| {
                let chars = t.chars().count();
                (chars, max_edits(chars, threshold))
            })
            .collect();

        let mut hits: Vec<Hit> = self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(position, entry)| {
                score_entry(entry, &terms, &bounds, &weights)
                    .map(|distance| Hit { position, distance })
            })
            .collect();

        hits.sort_by(compare_hits);
        hits
    }
}

/// Record distance for one entry, or `None` if no weighted field matched.
fn score_entry(
    entry: &IndexedFields,
    terms: &[String],
    bounds: &[(usize, usize)],
    weights: &[f64; 5],
) -> Option<f64> {
    let mut participating: Vec<(f64, f64)> = Vec::new();
    let mut matched: Vec<f64> = Vec::with_capacity(terms.len());

    for field in FieldKind::ALL {
        let weight = weights[field.slot()];
        if weight <= 0.0 {
            continue;
        }
        if entry.get(field).is_none() {
            continue;
        }

        matched.clear();
        for (term, &(chars, max)) in terms.iter().zip(bounds) {
            if let Some(edits) = entry.distance(field, term, max) {
                matched.push(term_distance(edits, chars));
            }
        }
        if !matched.is_empty() {
            participating.push((weight, field_distance(&matched, terms.len())));
        }
    }

    combine_fields(participating)
}
