// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early-exit bounds.
//!
//! Query terms are matched against field text in two steps. Exact containment
//! anywhere in the field is free, so "gpt" finds "pdfgpt". Otherwise the term is
//! aligned against the *start* of each word, with the word's tail left free:
//! "whispr" finds "whisper.cpp", "transcri" finds "transcription". Anchoring at
//! word starts keeps a five-letter term with two allowed edits from matching
//! the middle of every unrelated word.
//!
//! The DP bails out as soon as the bound can't be met. The pattern-vs-word
//! length difference is a lower bound up front; the smallest cell of the current
//! column is one while scanning, since it never decreases.

/// Fewest edits needed to turn `pattern` into some prefix of `word`, if that's
/// at most `max`.
///
/// The DP runs column-by-column over `word`, keeping one column of
/// `pattern.len() + 1` cells. The answer is the minimum of the last row over
/// all columns (any prefix may end the match).
pub fn prefix_distance(pattern: &str, word: &str, max: usize) -> Option<usize> {
    let pat: Vec<char> = pattern.chars().collect();
    let m = pat.len();
    if m == 0 {
        return Some(0);
    }
    if m > word.chars().count() + max {
        return None;
    }

    // col[i] = edits to align pat[..i] with the word prefix read so far
    let mut col: Vec<usize> = (0..=m).collect();
    let mut best = col[m];

    for (j, wc) in word.chars().enumerate() {
        let mut diag = col[0];
        col[0] = j + 1;
        let mut min_col = col[0];
        for i in 1..=m {
            let up = col[i];
            let cost = usize::from(pat[i - 1] != wc);
            col[i] = (diag + cost).min(up + 1).min(col[i - 1] + 1);
            diag = up;
            min_col = min_col.min(col[i]);
        }
        best = best.min(col[m]);
        if best == 0 || min_col > max {
            break;
        }
    }

    (best <= max).then_some(best)
}

/// Edits for `term` against one field: 0 if `text` contains it, else the
/// closest word-prefix alignment within `max`.
pub fn best_word_distance<'w>(
    term: &str,
    text: &str,
    words: impl IntoIterator<Item = &'w str>,
    max: usize,
) -> Option<usize> {
    if text.contains(term) {
        return Some(0);
    }
    if max == 0 {
        return None;
    }
    let mut best: Option<usize> = None;
    for word in words {
        // Only a strictly closer word is worth the DP
        let bound = match best {
            Some(0) | Some(1) => break,
            Some(b) => b - 1,
            None => max,
        };
        if let Some(d) = prefix_distance(term, word, bound) {
            best = Some(d);
        }
    }
    best
}

/// How many edits a term of `term_chars` characters may absorb under `threshold`.
///
/// `threshold` is the normalized cutoff (0 = exact only, 1 = anything).
/// Two-letter terms at the default 0.4 get zero edits, so "ai" never fuzzes
/// into "at".
pub fn max_edits(term_chars: usize, threshold: f64) -> usize {
    // Nudge so 0.4 * 5 doesn't land on 1.999...
    (threshold * term_chars as f64 + 1e-9).floor() as usize
}
