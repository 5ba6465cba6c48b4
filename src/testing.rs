//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Source, ToolRecord, ToolType};

/// Create a minimal record: no description, no tags, unknown type.
///
/// This is the canonical implementation used across all tests.
pub fn make_tool(id: &str, title: &str, category: &str) -> ToolRecord {
    ToolRecord {
        id: id.to_string(),
        source: Source::Github,
        title: title.to_string(),
        description: None,
        url: format!("https://github.com/example/{}", id),
        author: String::new(),
        stars: None,
        score: None,
        category: category.to_string(),
        tags: vec![],
        language: None,
        created_at: "2026-02-22T00:00:00Z".to_string(),
        fetched_at: "2026-02-22T02:14:00Z".to_string(),
        thumbnail_url: None,
        is_new: false,
        trending_score: None,
        tool_type: ToolType::Unknown,
    }
}

/// Create a record with a description and tags.
pub fn make_tool_with(
    id: &str,
    title: &str,
    category: &str,
    description: Option<&str>,
    tags: &[&str],
) -> ToolRecord {
    ToolRecord {
        description: description.map(str::to_string),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_tool(id, title, category)
    }
}

/// Create a record with a tool type and trending score.
pub fn make_ranked_tool(
    id: &str,
    title: &str,
    category: &str,
    tool_type: ToolType,
    trending_score: Option<f64>,
) -> ToolRecord {
    ToolRecord {
        tool_type,
        trending_score,
        ..make_tool(id, title, category)
    }
}
