// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the parts that are allowed to fail.
//!
//! Only loading and validation can fail: reading a corpus, building a catalog,
//! checking a config. The query path has no error type at all. Any string in
//! produces a defined result out.

use std::path::PathBuf;
use thiserror::Error;

/// Anything that can go wrong turning a JSON file into engine input.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate record id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("rule {rule} has no trigger patterns")]
    NoPatterns { rule: usize },

    #[error("rule {rule} has no expansion keywords")]
    NoKeywords { rule: usize },

    #[error("rule {rule} contains a blank {what}")]
    BlankEntry { rule: usize, what: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be within [0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f64 },

    #[error("{name} has a negative or non-finite field weight")]
    InvalidWeight { name: &'static str },

    #[error("{name} must be at least 1")]
    ZeroLimit { name: &'static str },
}

pub type LoadResult<T> = Result<T, LoadError>;
