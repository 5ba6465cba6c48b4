//! Keyword vs. natural-language routing.

use super::common::fixture_engine;
use toolscout::{classify, QueryMode};

#[test]
fn test_short_lookups_are_keywords() {
    for query in ["whisper", "pdf parser", "Stable Diffusion", "llama.cpp"] {
        assert_eq!(classify(query), QueryMode::Keyword, "{:?}", query);
    }
}

#[test]
fn test_three_tokens_is_natural_language() {
    assert_eq!(classify("pdf parser online"), QueryMode::NaturalLanguage);
    assert_eq!(classify("a b c"), QueryMode::NaturalLanguage);
}

#[test]
fn test_trigger_prefix_is_natural_language() {
    for query in ["help", "Find pdf", "show agents", "can you", "How fast", "I transcribe"] {
        assert_eq!(classify(query), QueryMode::NaturalLanguage, "{:?}", query);
    }
}

#[test]
fn test_prefix_needs_word_boundary() {
    // "i ", "how " and "what " carry their trailing space
    assert_eq!(classify("ios app"), QueryMode::Keyword);
    assert_eq!(classify("however fast"), QueryMode::Keyword);
    assert_eq!(classify("whatsapp clone"), QueryMode::Keyword);
}

#[test]
fn test_surrounding_whitespace_is_ignored() {
    assert_eq!(classify("   help   "), QueryMode::NaturalLanguage);
    assert_eq!(classify("  whisper  "), QueryMode::Keyword);
}

#[test]
fn test_empty_query_is_keyword() {
    assert_eq!(classify(""), QueryMode::Keyword);
    assert_eq!(classify("   "), QueryMode::Keyword);
}

#[test]
fn test_engine_routes_by_classification() {
    let engine = fixture_engine();
    assert_eq!(engine.search("whisper").mode, QueryMode::Keyword);
    assert_eq!(
        engine.search("I need a tool that transcribes meetings").mode,
        QueryMode::NaturalLanguage
    );
    assert_eq!(engine.classify("show me agents"), QueryMode::NaturalLanguage);
}
