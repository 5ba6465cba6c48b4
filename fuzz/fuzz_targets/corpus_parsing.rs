// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus, catalog and config parsing.
//!
//! Malformed JSON must come back as an error, never a panic. Whatever parses
//! must be searchable.

#![no_main]

use libfuzzer_sys::fuzz_target;
use toolscout::{parse_catalog, parse_config, parse_corpus, SearchEngine};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(records) = parse_corpus(json) {
        let engine = SearchEngine::with_defaults(records);
        let _ = engine.search("I need a tool that transcribes meetings");
        let _ = engine.search("whisper");
    }

    if let Ok(catalog) = parse_catalog(json) {
        let _ = toolscout::expand(&catalog, "transcribe meeting notes");
    }

    if let Ok(config) = parse_config(json) {
        assert!(config.validate().is_ok());
    }
});
