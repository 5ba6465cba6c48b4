// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how fuzzy hits get sorted.
//!
//! Ascending distance, then corpus position. Corpus order is the only
//! tiebreaker, so two runs over the same corpus always agree.

use crate::index::Hit;
use std::cmp::Ordering;

/// Compare two hits for ranking.
///
/// Sort order:
/// 1. **Distance** - lower wins
/// 2. **Position** - earlier in the corpus wins
///
/// NaN distances can't come out of the index, but if one did it would sort
/// as equal and fall through to position.
pub fn compare_hits(a: &Hit, b: &Hit) -> Ordering {
    match a.distance.partial_cmp(&b.distance) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.position.cmp(&b.position),
    }
}
