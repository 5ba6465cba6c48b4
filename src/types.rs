// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks: tool records, intent rules, and what a search hands back.
//!
//! Records and rules are loaded once and never mutated. Everything a query
//! produces borrows from them, so a `SearchResults<'a>` can't outlive the
//! engine that made it.
//!
//! # Invariants
//!
//! - **ToolRecord**: `id` is unique across the corpus. It is the only dedup key
//!   downstream, so two records sharing an id would silently shadow each other.
//!   `corpus::parse_corpus` rejects that at load time.
//!
//! - **IntentRule**: `patterns` and `keywords` are non-empty. Enforced by
//!   `IntentCatalog::new`, not by the type.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// CORPUS RECORDS
// =============================================================================

/// Where a record was scraped from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Github,
    Hackernews,
    Producthunt,
    Ycombinator,
    Twitter,
}

impl Source {
    pub const ALL: [Source; 5] = [
        Source::Github,
        Source::Hackernews,
        Source::Producthunt,
        Source::Ycombinator,
        Source::Twitter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Github => "github",
            Source::Hackernews => "hackernews",
            Source::Producthunt => "producthunt",
            Source::Ycombinator => "ycombinator",
            Source::Twitter => "twitter",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse classification of what a record actually is.
///
/// Anything the scrapers didn't recognise lands in `Unknown` rather than
/// failing the whole corpus load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolType {
    App,
    Library,
    Model,
    #[default]
    #[serde(other)]
    Unknown,
}

impl ToolType {
    pub const ALL: [ToolType; 4] = [
        ToolType::App,
        ToolType::Library,
        ToolType::Model,
        ToolType::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolType::App => "app",
            ToolType::Library => "library",
            ToolType::Model => "model",
            ToolType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ToolType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "app" => Ok(ToolType::App),
            "library" | "lib" => Ok(ToolType::Library),
            "model" => Ok(ToolType::Model),
            "unknown" => Ok(ToolType::Unknown),
            other => Err(format!("unknown tool type '{}'", other)),
        }
    }
}

/// One tool in the corpus.
///
/// `stars` and `score` are two popularity signals from different sources
/// (GitHub stars vs. HN/PH points). At most one is meaningful for any given
/// record; neither takes part in ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: String,
    pub source: Source,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub score: Option<u64>,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub fetched_at: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default)]
    pub trending_score: Option<f64>,
    #[serde(default)]
    pub tool_type: ToolType,
}

// =============================================================================
// INTENT CATALOG ENTRIES
// =============================================================================

/// One row of the intent catalog: casual phrasing in, domain vocabulary out.
///
/// `patterns` are substring-matched against the lower-cased core query.
/// Every matching rule contributes; there is no priority between rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentRule {
    pub patterns: Vec<String>,
    pub keywords: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl IntentRule {
    pub fn new(patterns: &[&str], keywords: &[&str], categories: &[&str]) -> Self {
        Self {
            patterns: patterns.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
            categories: categories.iter().map(|s| s.to_string()).collect(),
        }
    }
}

// =============================================================================
// QUERY OUTPUT
// =============================================================================

/// Which path a query took through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMode {
    /// Short lookup, matched directly against the index.
    Keyword,
    /// Conversational request, stripped and expanded before matching.
    NaturalLanguage,
}

impl fmt::Display for QueryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryMode::Keyword => f.write_str("keyword"),
            QueryMode::NaturalLanguage => f.write_str("natural-language"),
        }
    }
}

/// How a record got into the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchSource {
    /// Fuzzy text match against the index. Ranked by distance.
    Fuzzy,
    /// Appended because its category matched the query's intent.
    CategoryFallback,
}

/// A record in the final list, with provenance.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RankedTool<'a> {
    pub record: &'a ToolRecord,
    /// Fuzzy distance (0 = exact, 1 = unrelated). `None` for fallback items.
    pub distance: Option<f64>,
    pub source: MatchSource,
}

impl RankedTool<'_> {
    pub fn id(&self) -> &str {
        &self.record.id
    }
}

/// Everything one search call produces.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResults<'a> {
    pub mode: QueryMode,
    /// Human-readable label for what the user asked for.
    pub intent: String,
    /// Rule-derived keywords, for display as chips.
    pub keywords: Vec<String>,
    pub items: Vec<RankedTool<'a>>,
}

impl<'a> SearchResults<'a> {
    pub fn empty(mode: QueryMode, intent: impl Into<String>) -> Self {
        Self {
            mode,
            intent: intent.into(),
            keywords: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Just the records, in rank order.
    pub fn records(&self) -> impl Iterator<Item = &'a ToolRecord> + '_ {
        self.items.iter().map(|item| item.record)
    }

    pub fn ids(&self) -> Vec<&'a str> {
        self.items.iter().map(|item| item.record.id.as_str()).collect()
    }
}
