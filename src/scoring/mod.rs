// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how fuzzy hits get their numbers and their order.
//!
//! Field weight dominates closeness only up to a point. An exact hit in any
//! weighted field beats a loose hit in the same field, and at equal closeness the
//! heavier field wins.

mod core;
pub mod ranking;

pub use core::*;
