// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Strip conversational scaffolding: "I need a tool that parses PDFs" → "parses PDFs".
//!
//! Each rule is a case-insensitive regex anchored at the start of the string.
//! One pass tries every rule once, in order, trimming after each. Passes repeat
//! until nothing changes, so `strip(strip(q)) == strip(q)`.

use regex::Regex;
use std::sync::LazyLock;

/// Prefix rules, applied in this order within a pass.
pub const FILLER_PATTERNS: &[&str] = &[
    r"^i need (a |an |some )?",
    r"^i want (a |an |some )?",
    r"^i'm looking for (a |an |some )?",
    r"^help me ",
    r"^show me ",
    r"^find (a |an |some )?",
    r"^tool (that |to |for |which )",
    r"^tools? (that |to |for |which )",
    r"^something (that |to |for |which )",
    r"^(a |an )?tool (to |for |that |which )",
    r"^(a |an )?software (to |for |that |which )",
    r"^(a |an )?app (to |for |that |which )",
    r"^can you (find |show |suggest )",
    r"^what (is |are |can )",
    r"^how (do |can |to )",
];

static FILLER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    FILLER_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("filler pattern is valid regex"))
        .collect()
});

/// Core query with filler removed. Always trimmed; may be empty.
pub fn strip(query: &str) -> String {
    let mut q = query.trim().to_string();
    loop {
        let before = q.len();
        for re in FILLER_REGEXES.iter() {
            if let Some(m) = re.find(&q) {
                // Anchored, so m.start() == 0; an empty match removes nothing.
                if m.end() > 0 {
                    q = q[m.end()..].trim().to_string();
                }
            }
        }
        // Each applied rule removes at least one byte, so this terminates.
        if q.len() == before {
            return q;
        }
    }
}
