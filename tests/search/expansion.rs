//! Intent catalog expansion.

use toolscout::{expand, IntentCatalog, IntentRule};

#[test]
fn test_transcription_rule() {
    let expansion = expand(&IntentCatalog::default(), "transcribes meetings");
    assert_eq!(expansion.matched_rules.len(), 1);
    assert!(expansion.rule_keywords.contains(&"transcription".to_string()));
    assert_eq!(expansion.categories, vec!["voice-audio"]);
    assert_eq!(expansion.raw_words, vec!["transcribes", "meetings"]);
}

#[test]
fn test_every_matching_rule_contributes() {
    let expansion = expand(&IntentCatalog::default(), "transcribe meeting notes");
    assert_eq!(expansion.matched_rules.len(), 2);
    assert_eq!(expansion.categories, vec!["voice-audio", "ai-writing"]);
    // "transcription" comes from both rules but appears once
    let count = expansion
        .rule_keywords
        .iter()
        .filter(|k| *k == "transcription")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_unknown_words_pass_through() {
    let expansion = expand(&IntentCatalog::default(), "zzqx");
    assert!(expansion.matched_rules.is_empty());
    assert!(expansion.categories.is_empty());
    assert_eq!(expansion.keywords(), vec!["zzqx"]);
    assert_eq!(expansion.search_string(15), "zzqx");
}

#[test]
fn test_short_raw_words_dropped() {
    let expansion = expand(&IntentCatalog::empty(), "an ai to do it all");
    assert_eq!(expansion.raw_words, vec!["all"]);
}

#[test]
fn test_search_string_capped_at_fifteen() {
    let expansion = expand(
        &IntentCatalog::default(),
        "generate images and music for my video podcast with voice",
    );
    assert!(expansion.keywords().len() > 15);
    let search = expansion.search_string(15);
    assert!(search.starts_with("image generation text-to-image stable diffusion"));
    assert!(search.ends_with("music generation suno"));
}

#[test]
fn test_display_keywords_are_rule_keywords_only() {
    let expansion = expand(
        &IntentCatalog::default(),
        "generate images and music for my video podcast with voice",
    );
    let display = expansion.display_keywords(8);
    assert_eq!(display.len(), 8);
    assert_eq!(display, expansion.rule_keywords[..8].to_vec());
    assert!(!display.contains(&"podcast".to_string()));
}

#[test]
fn test_custom_catalog() {
    let catalog = IntentCatalog::empty()
        .with_rule(IntentRule::new(&["Zine"], &["Risograph", "print"], &["printing"]))
        .unwrap();
    let expansion = expand(&catalog, "make me a ZINE");
    assert_eq!(expansion.rule_keywords, vec!["risograph", "print"]);
    assert_eq!(expansion.categories, vec!["printing"]);
}
