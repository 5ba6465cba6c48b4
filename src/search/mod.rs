// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a query into a result list.
//!
//! The index ranks, the query module understands. This module glues them:
//! natural-language assembly (strip, expand, fuzzy, category fallback, dedup)
//! and the plain keyword lookup.

pub mod assemble;
pub mod dedup;

pub use assemble::{assemble, keyword_lookup};
pub use dedup::ResultMerger;
