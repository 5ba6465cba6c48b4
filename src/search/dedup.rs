// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Identity-keyed result deduplication.
//!
//! A record should appear at most once in search results. Results come from
//! two places (fuzzy hits, then category fallback), and the same record can
//! easily show up in both. `ResultMerger` keys on the record id only, and
//! the first occurrence wins, so the fuzzy rank is never overwritten by a
//! fallback entry.
//!
//! **Invariant**: Each record id appears at most once, in first-merged order.

use crate::types::RankedTool;
use std::collections::HashSet;

/// Order-preserving merger that drops repeated record ids.
///
/// # Example
///
/// ```ignore
/// let mut merger = ResultMerger::with_capacity(hits.len());
/// merger.merge_all(fuzzy_items);
/// merger.merge_all(fallback_items);
/// let items = merger.into_items();
/// ```
#[derive(Debug, Default)]
pub struct ResultMerger<'a> {
    seen: HashSet<&'a str>,
    items: Vec<RankedTool<'a>>,
}

impl<'a> ResultMerger<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(capacity),
            items: Vec::with_capacity(capacity),
        }
    }

    /// Append `item` unless its id is already present. Returns whether it was kept.
    pub fn merge(&mut self, item: RankedTool<'a>) -> bool {
        if self.seen.insert(item.record.id.as_str()) {
            self.items.push(item);
            true
        } else {
            false
        }
    }

    /// Merge several items in order. Returns how many were kept.
    pub fn merge_all(&mut self, items: impl IntoIterator<Item = RankedTool<'a>>) -> usize {
        items.into_iter().filter(|item| self.merge(*item)).count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<RankedTool<'a>> {
        self.items
    }
}
