//! Conversational filler removal.

use toolscout::strip;

#[test]
fn test_chained_prefixes() {
    assert_eq!(strip("I need a tool that transcribes meetings"), "transcribes meetings");
    assert_eq!(strip("i want an app to edit video"), "edit video");
}

#[test]
fn test_single_prefixes() {
    assert_eq!(strip("show me agents"), "agents");
    assert_eq!(strip("what is a vector database"), "a vector database");
    assert_eq!(strip("how do I summarize pdfs"), "I summarize pdfs");
    assert_eq!(strip("tool that makes music"), "makes music");
    assert_eq!(strip("something for data analysis"), "data analysis");
}

#[test]
fn test_case_insensitive_and_trimmed() {
    assert_eq!(strip("  I NEED A TOOL THAT Transcribes  "), "Transcribes");
}

#[test]
fn test_no_filler_returns_trimmed_input() {
    assert_eq!(strip("  pdf parser "), "pdf parser");
    assert_eq!(strip("best tools for rag"), "best tools for rag");
}

#[test]
fn test_prefix_without_trailing_text_is_kept() {
    // "help me " needs the space, so a bare "help me" is already core
    assert_eq!(strip("help me"), "help me");
}

#[test]
fn test_stripping_is_idempotent() {
    for query in [
        "I need a tool that transcribes meetings",
        "Can you help me find a tool for writing",
        "i want an app to edit video",
        "how do I summarize pdfs",
        "",
    ] {
        let once = strip(query);
        assert_eq!(strip(&once), once, "{:?}", query);
    }
}
