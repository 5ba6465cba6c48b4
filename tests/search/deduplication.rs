//! Each record id appears at most once per result list.

use super::common::{fixture_engine, make_tool};
use std::collections::HashSet;
use toolscout::search::ResultMerger;
use toolscout::{MatchSource, RankedTool, SearchEngine};

const QUERIES: &[&str] = &[
    "whisper",
    "pdf",
    "agents",
    "I need a tool that transcribes meetings",
    "I want to generate image art",
    "what is a vector database",
    "can you recommend text to speech",
    "chatbot for my docs",
];

#[test]
fn test_fixture_results_have_unique_ids() {
    let engine = fixture_engine();
    for query in QUERIES {
        let ids = engine.search(query).ids();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len(), "duplicates for {:?}: {:?}", query, ids);
    }
}

#[test]
fn test_duplicate_ids_in_corpus_collapse() {
    // load_corpus rejects this; an engine built by hand must still cope
    let engine = SearchEngine::with_defaults(vec![
        make_tool("dup", "Whisper", "voice-audio"),
        make_tool("dup", "Whisper Two", "voice-audio"),
        make_tool("other", "Whisper", "voice-audio"),
    ]);
    let results = engine.search("whisper");
    assert_eq!(results.ids(), vec!["dup", "other"]);
    assert_eq!(results.items[0].record.title, "Whisper");
}

#[test]
fn test_first_occurrence_wins() {
    let a = make_tool("a", "First", "other");
    let a_again = make_tool("a", "Second", "other");

    let mut merger = ResultMerger::new();
    assert!(merger.merge(RankedTool {
        record: &a,
        distance: Some(0.1),
        source: MatchSource::Fuzzy,
    }));
    assert!(!merger.merge(RankedTool {
        record: &a_again,
        distance: None,
        source: MatchSource::CategoryFallback,
    }));

    assert!(merger.contains("a"));
    let items = merger.into_items();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].record.title, "First");
    assert_eq!(items[0].source, MatchSource::Fuzzy);
}
