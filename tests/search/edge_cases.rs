//! Inputs that must not break anything.

use super::common::{fixture_engine, make_tool, make_tool_with};
use toolscout::{QueryMode, SearchEngine};

#[test]
fn test_empty_and_blank_queries() {
    let engine = fixture_engine();
    for query in ["", " ", "\t\n"] {
        let results = engine.search(query);
        assert_eq!(results.mode, QueryMode::Keyword);
        assert!(results.is_empty(), "{:?}", query);
        assert_eq!(results.intent, query);
        assert!(results.keywords.is_empty());
    }
}

#[test]
fn test_single_character_query() {
    assert!(fixture_engine().search("x").is_empty());
}

#[test]
fn test_punctuation_only_query() {
    assert!(fixture_engine().search("!!!").is_empty());
    assert!(fixture_engine().search("?? ** !!").is_empty());
}

#[test]
fn test_bare_opener_is_not_stripped() {
    // Every filler rule ends in a space, which trimming removes first
    let results = fixture_engine().search("help me");
    assert_eq!(results.mode, QueryMode::NaturalLanguage);
    assert_eq!(results.intent, "help me");
    assert!(results.is_empty());
}

#[test]
fn test_unmatched_sentence() {
    let results = fixture_engine().search("I need a tool that zzqx");
    assert!(results.is_empty());
    assert_eq!(results.intent, "zzqx");
    assert!(results.keywords.is_empty());
}

#[test]
fn test_null_description_is_searchable() {
    let records = vec![
        make_tool("bare", "Whisper", "voice-audio"),
        make_tool_with("full", "Murmur", "voice-audio", Some("whisper wrapper"), &[]),
    ];
    assert!(records[0].description.is_none());
    let engine = SearchEngine::with_defaults(records);
    assert_eq!(engine.search("whisper").ids(), vec!["bare", "full"]);
}

#[test]
fn test_empty_corpus() {
    let engine = SearchEngine::with_defaults(Vec::new());
    assert!(engine.search("whisper").is_empty());
    let results = engine.search("I need a tool that transcribes meetings");
    assert!(results.is_empty());
    assert_eq!(results.intent, "transcribes meetings");
    assert!(results.keywords.contains(&"transcription".to_string()));
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_fold() {
    let engine = SearchEngine::with_defaults(vec![make_tool("cafe", "Café Bot", "other")]);
    assert_eq!(engine.search("cafe").ids(), vec!["cafe"]);
    assert_eq!(engine.search("CAFÉ").ids(), vec!["cafe"]);
}

#[test]
fn test_emoji_and_symbols() {
    let engine = fixture_engine();
    let results = engine.search("🎙️ transcribe 🎧");
    assert_eq!(results.mode, QueryMode::NaturalLanguage);
    assert_eq!(results.ids().first(), Some(&"gh-whisper-cpp"));
}
