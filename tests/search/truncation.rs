//! Over-long queries are cut, never rejected.

use super::common::fixture_engine;
use toolscout::{truncate_chars, EngineConfig, QueryMode};

fn first_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

#[test]
fn test_long_query_equals_its_truncation() {
    let engine = fixture_engine();
    let long = format!(
        "I need a tool that transcribes meetings and {}",
        "then summarizes them ".repeat(20)
    );
    assert!(long.chars().count() > 100);

    let a = engine.search(&long);
    let b = engine.search(&first_chars(&long, 100));
    assert_eq!(a.mode, b.mode);
    assert_eq!(a.ids(), b.ids());
    assert_eq!(a.intent, b.intent);
    assert_eq!(a.keywords, b.keywords);
}

#[test]
fn test_truncation_happens_before_classification() {
    // 100 characters of one token, then more words
    let long = format!("{} pdf parser online", "x".repeat(100));
    assert_eq!(fixture_engine().classify(&long), QueryMode::Keyword);
}

#[test]
fn test_multibyte_truncation_counts_chars() {
    let long = "ñ".repeat(150);
    let results = fixture_engine().search(&long);
    assert_eq!(results.mode, QueryMode::Keyword);
    assert_eq!(results.intent.chars().count(), 100);
    assert!(results.is_empty());
}

#[test]
fn test_intent_never_exceeds_bound() {
    let engine = fixture_engine();
    let long = format!("I need a tool that {}", "z".repeat(300));
    let results = engine.search(&long);
    assert!(results.intent.chars().count() <= EngineConfig::default().max_query_chars);
}

#[test]
fn test_truncate_chars_boundaries() {
    assert_eq!(truncate_chars("héllo", 2), "hé");
    assert_eq!(truncate_chars("short", 100), "short");
    assert_eq!(truncate_chars("", 10), "");
}
