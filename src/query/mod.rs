// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query understanding: everything that happens before the index is touched.
//!
//! ```text
//! raw ──▶ classify ──┬── keyword ─────────────────────────────▶ index
//!                    └── natural language ─▶ strip ─▶ expand ─▶ index
//! ```
//!
//! All three steps are pure functions of their input (plus the read-only
//! catalog for `expand`).

mod classify;
mod expand;
mod filler;

pub use classify::{classify, is_natural_language, NATURAL_LANGUAGE_MIN_WORDS, NATURAL_LANGUAGE_TRIGGERS};
pub use expand::{expand, Expansion, RAW_WORD_MIN_EXCLUSIVE};
pub use filler::{strip, FILLER_PATTERNS};
