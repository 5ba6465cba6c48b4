// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading engine input from JSON.
//!
//! This is the one place allowed to fail. Two corpus shapes are accepted:
//!
//! ```text
//! [ {record}, {record}, ... ]                      bare array
//! { "metadata": {...}, "items": [ {record}, ... ] } index.json / category file
//! ```
//!
//! Anything else in the wrapper object (metadata, category counts, slug, label)
//! is ignored. Record ids must be unique; the first duplicate is reported with
//! both positions.

use crate::catalog::IntentCatalog;
use crate::config::EngineConfig;
use crate::error::{LoadError, LoadResult};
use crate::types::{IntentRule, ToolRecord};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

#[derive(Deserialize)]
struct WrappedCorpus {
    items: Vec<ToolRecord>,
}

/// Parse a corpus from JSON text.
pub fn parse_corpus(json: &str) -> LoadResult<Vec<ToolRecord>> {
    // Shape is decided by the first byte so errors point at the record, not the enum.
    let records: Vec<ToolRecord> = if json.trim_start().starts_with('[') {
        serde_json::from_str(json)?
    } else {
        serde_json::from_str::<WrappedCorpus>(json)?.items
    };
    check_unique_ids(&records)?;
    Ok(records)
}

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> LoadResult<Vec<ToolRecord>> {
    let path = path.as_ref();
    let text = read(path)?;
    let records = parse_corpus(&text).map_err(|e| with_path(e, path))?;
    tracing::info!(path = %path.display(), records = records.len(), "corpus loaded");
    Ok(records)
}

fn check_unique_ids(records: &[ToolRecord]) -> LoadResult<()> {
    let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        if let Some(&first) = seen.get(record.id.as_str()) {
            tracing::warn!(id = %record.id, first, second = position, "duplicate record id");
            return Err(LoadError::DuplicateId {
                id: record.id.clone(),
                first,
                second: position,
            });
        }
        seen.insert(record.id.as_str(), position);
    }
    Ok(())
}

/// Parse an intent catalog from a JSON array of rules.
pub fn parse_catalog(json: &str) -> LoadResult<IntentCatalog> {
    let rules: Vec<IntentRule> = serde_json::from_str(json)?;
    IntentCatalog::new(rules).map_err(|e| {
        tracing::warn!(error = %e, "rejected intent catalog");
        e.into()
    })
}

pub fn load_catalog(path: impl AsRef<Path>) -> LoadResult<IntentCatalog> {
    let path = path.as_ref();
    let text = read(path)?;
    let catalog = parse_catalog(&text).map_err(|e| with_path(e, path))?;
    tracing::info!(path = %path.display(), rules = catalog.len(), "intent catalog loaded");
    Ok(catalog)
}

/// Parse and validate an engine config. Missing fields take their defaults.
pub fn parse_config(json: &str) -> LoadResult<EngineConfig> {
    let config: EngineConfig = serde_json::from_str(json)?;
    if let Err(e) = config.validate() {
        tracing::warn!(error = %e, "rejected engine config");
        return Err(e.into());
    }
    Ok(config)
}

pub fn load_config(path: impl AsRef<Path>) -> LoadResult<EngineConfig> {
    let path = path.as_ref();
    let text = read(path)?;
    let config = parse_config(&text).map_err(|e| with_path(e, path))?;
    tracing::info!(path = %path.display(), "engine config loaded");
    Ok(config)
}

fn read(path: &Path) -> LoadResult<String> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Attach the file path to a bare JSON error.
fn with_path(err: LoadError, path: &Path) -> LoadError {
    match err {
        LoadError::Parse(source) => LoadError::Json {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}
