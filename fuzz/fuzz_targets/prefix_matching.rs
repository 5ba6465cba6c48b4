// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for word-prefix edit distance.
//!
//! Checks the bound, the free tail and the length lower bound against
//! arbitrary UTF-8.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use toolscout::prefix_distance;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    pattern: String,
    word: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let pattern: String = input.pattern.chars().take(40).collect();
    let word: String = input.word.chars().take(80).collect();
    let max = usize::from(input.max % 8);

    let result = prefix_distance(&pattern, &word, max);

    // INVARIANT 1: never over the bound
    if let Some(d) = result {
        assert!(d <= max, "distance {} over bound {}", d, max);
    }

    // INVARIANT 2: a word starting with the pattern costs nothing
    if word.starts_with(pattern.as_str()) {
        assert_eq!(result, Some(0), "pattern={:?} word={:?}", pattern, word);
    }

    // INVARIANT 3: can't match with fewer edits than the unmatched length
    let (m, n) = (pattern.chars().count(), word.chars().count());
    if let Some(d) = result {
        assert!(d >= m.saturating_sub(n));
    }

    // INVARIANT 4: raising the bound never loses a match
    if let Some(d) = result {
        assert_eq!(prefix_distance(&pattern, &word, max + 1), Some(d));
    }
});
