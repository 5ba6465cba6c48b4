// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind fuzzy ranking.
//!
//! Everything here is a distance: 0 is an exact hit, 1 is unrelated. Three
//! steps take a query from terms to a single number per record:
//!
//! 1. **Term distance**: edits / term length, from `fuzzy::best_word_distance`.
//!    Over the profile threshold means "no match" for that term.
//! 2. **Field distance**: mean over *all* query terms, unmatched ones counting 1.0.
//!    A field only participates if at least one term matched it.
//! 3. **Record distance**: product over participating fields of
//!    `max(field, EPSILON) ^ weight`, with weights normalized to sum 1.
//!
//! The product form means more matching fields always helps, and a higher weight
//! pulls a good match further toward zero. With default weights an exact title
//! hit lands around `EPSILON^0.4`, far below anything approximate.

use serde::{Deserialize, Serialize};

/// Floor for zero distances so exact matches still respond to field weight.
pub const DISTANCE_EPSILON: f64 = 1e-6;

/// Which part of a record a term matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Title,
    Description,
    Tags,
    Category,
    Author,
}

impl FieldKind {
    pub const ALL: [FieldKind; 5] = [
        FieldKind::Title,
        FieldKind::Description,
        FieldKind::Tags,
        FieldKind::Category,
        FieldKind::Author,
    ];

    /// Position in per-record field arrays.
    #[inline]
    pub fn slot(self) -> usize {
        self as usize
    }
}

/// Relative importance of each field. Only ratios matter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldWeights {
    pub title: f64,
    pub description: f64,
    pub tags: f64,
    pub category: f64,
    pub author: f64,
}

impl Default for FieldWeights {
    fn default() -> Self {
        Self::natural_language()
    }
}

impl FieldWeights {
    /// Title > description > tags > category. Author is ignored.
    pub fn natural_language() -> Self {
        Self {
            title: 2.0,
            description: 1.5,
            tags: 1.0,
            category: 0.5,
            author: 0.0,
        }
    }

    /// Flat weights over title, description, tags and author.
    pub fn keyword() -> Self {
        Self {
            title: 1.0,
            description: 1.0,
            tags: 1.0,
            category: 0.0,
            author: 1.0,
        }
    }

    pub fn get(&self, field: FieldKind) -> f64 {
        match field {
            FieldKind::Title => self.title,
            FieldKind::Description => self.description,
            FieldKind::Tags => self.tags,
            FieldKind::Category => self.category,
            FieldKind::Author => self.author,
        }
    }

    pub fn total(&self) -> f64 {
        FieldKind::ALL.iter().map(|f| self.get(*f)).sum()
    }

    /// Weights scaled to sum 1, indexed by `FieldKind::slot`.
    ///
    /// Negative weights are treated as zero. All-zero weights stay all-zero,
    /// which makes every search come back empty.
    pub fn normalized(&self) -> [f64; 5] {
        let mut out = [0.0; 5];
        let total: f64 = FieldKind::ALL.iter().map(|f| self.get(*f).max(0.0)).sum();
        if total <= 0.0 {
            return out;
        }
        for field in FieldKind::ALL {
            out[field.slot()] = self.get(field).max(0.0) / total;
        }
        out
    }
}

/// Normalized distance for a term that needed `edits` edits.
#[inline]
pub fn term_distance(edits: usize, term_chars: usize) -> f64 {
    if term_chars == 0 {
        return 0.0;
    }
    (edits as f64 / term_chars as f64).min(1.0)
}

/// Coverage-weighted field distance.
///
/// `matched` holds the distances of terms that hit this field; the remaining
/// `total_terms - matched.len()` terms count as 1.0.
pub fn field_distance(matched: &[f64], total_terms: usize) -> f64 {
    if total_terms == 0 {
        return 1.0;
    }
    let missing = total_terms.saturating_sub(matched.len()) as f64;
    (matched.iter().sum::<f64>() + missing) / total_terms as f64
}

/// Fold participating fields into one record distance.
///
/// `fields` pairs a normalized weight with a field distance. Zero-weight
/// fields contribute nothing (x^0 = 1). Returns `None` if no weighted field
/// participated.
pub fn combine_fields(fields: impl IntoIterator<Item = (f64, f64)>) -> Option<f64> {
    let mut total = 1.0;
    let mut any = false;
    for (weight, distance) in fields {
        if weight <= 0.0 {
            continue;
        }
        any = true;
        total *= distance.max(DISTANCE_EPSILON).powf(weight);
    }
    any.then_some(total)
}
