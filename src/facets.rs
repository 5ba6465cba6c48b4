// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browsing the corpus without a query: category pages, type filters, trending.
//!
//! These never rank by text. Order is always corpus order, except `trending`,
//! which sorts by the trending metric and keeps corpus order on ties.

use crate::types::{RankedTool, Source, ToolRecord, ToolType};
use std::cmp::Ordering;

/// A slug in the category taxonomy and its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub slug: &'static str,
    pub label: &'static str,
}

/// The category taxonomy used when the corpus was built.
pub const CATEGORIES: &[Category] = &[
    Category { slug: "llm-models", label: "LLM Models" },
    Category { slug: "ai-agents", label: "AI Agents" },
    Category { slug: "code-generation", label: "Code Generation" },
    Category { slug: "image-video", label: "Image & Video" },
    Category { slug: "voice-audio", label: "Voice & Audio" },
    Category { slug: "rag-search", label: "RAG & Search" },
    Category { slug: "local-ai", label: "Local AI" },
    Category { slug: "ai-infrastructure", label: "AI Infrastructure" },
    Category { slug: "data-analytics", label: "Data & Analytics" },
    Category { slug: "ai-writing", label: "AI Writing" },
    Category { slug: "robotics-embodied", label: "Robotics & Embodied AI" },
];

/// Where records that matched no category keywords end up.
pub const FALLBACK_CATEGORY: &str = "ai-infrastructure";

/// How many trending records the dashboard shows.
pub const DEFAULT_TRENDING_LIMIT: usize = 12;

pub fn category(slug: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.slug == slug)
}

/// Display label for a slug. Unknown slugs are shown as-is.
pub fn category_label(slug: &str) -> &str {
    category(slug).map(|c| c.label).unwrap_or(slug)
}

/// Anything the facet filters can look through to a record: plain corpus
/// records or ranked search results.
pub trait Faceted {
    fn record(&self) -> &ToolRecord;
}

impl Faceted for &ToolRecord {
    fn record(&self) -> &ToolRecord {
        self
    }
}

impl Faceted for RankedTool<'_> {
    fn record(&self) -> &ToolRecord {
        self.record
    }
}

pub fn filter_by_category<T: Faceted>(items: impl IntoIterator<Item = T>, slug: &str) -> Vec<T> {
    items.into_iter().filter(|item| item.record().category == slug).collect()
}

pub fn filter_by_tool_type<T: Faceted>(
    items: impl IntoIterator<Item = T>,
    tool_type: ToolType,
) -> Vec<T> {
    items.into_iter().filter(|item| item.record().tool_type == tool_type).collect()
}

/// Per-type counts in `ToolType::ALL` order, zeros included.
pub fn tool_type_counts<'a>(records: impl IntoIterator<Item = &'a ToolRecord>) -> Vec<(ToolType, usize)> {
    let mut counts = [0usize; 4];
    for record in records {
        if let Some(slot) = ToolType::ALL.iter().position(|t| *t == record.tool_type) {
            counts[slot] += 1;
        }
    }
    ToolType::ALL.iter().copied().zip(counts).collect()
}

/// Per-source counts in `Source::ALL` order, zeros included.
pub fn source_counts(records: &[ToolRecord]) -> Vec<(Source, usize)> {
    Source::ALL
        .iter()
        .map(|s| (*s, records.iter().filter(|r| r.source == *s).count()))
        .collect()
}

/// Counts per category slug.
///
/// Taxonomy slugs come first, in taxonomy order, and only if present. Slugs
/// outside the taxonomy follow in first-seen order.
pub fn category_counts(records: &[ToolRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = CATEGORIES
        .iter()
        .map(|c| (c.slug.to_string(), 0))
        .collect();
    for record in records {
        match counts.iter_mut().find(|(slug, _)| *slug == record.category) {
            Some((_, n)) => *n += 1,
            None => counts.push((record.category.clone(), 1)),
        }
    }
    counts.retain(|(_, n)| *n > 0);
    counts
}

/// Records with a trending metric, highest first, at most `limit`.
pub fn trending(records: &[ToolRecord], limit: usize) -> Vec<&ToolRecord> {
    let mut scored: Vec<(&ToolRecord, f64)> = records
        .iter()
        .filter_map(|r| r.trending_score.map(|s| (r, s)))
        .collect();
    // sort_by is stable, so equal scores keep corpus order
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    scored.into_iter().take(limit).map(|(r, _)| r).collect()
}
