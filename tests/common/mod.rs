//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::sync::LazyLock;
use toolscout::{load_corpus, EngineConfig, IntentCatalog, SearchEngine, ToolRecord};

// Re-export canonical test utilities from toolscout::testing
pub use toolscout::testing::{make_ranked_tool, make_tool, make_tool_with};

// ============================================================================
// FIXTURE CORPUS
// ============================================================================

/// Sixteen records in the scraper's wrapped `{"metadata", "items"}` shape.
pub const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/tools.json");

static FIXTURE_RECORDS: LazyLock<Vec<ToolRecord>> =
    LazyLock::new(|| load_corpus(FIXTURE_PATH).expect("Failed to load fixture corpus"));

static FIXTURE_ENGINE: LazyLock<SearchEngine> =
    LazyLock::new(|| SearchEngine::with_defaults(FIXTURE_RECORDS.clone()));

pub fn fixture_records() -> &'static [ToolRecord] {
    &FIXTURE_RECORDS
}

/// Default engine over the fixture corpus, built once per test binary.
pub fn fixture_engine() -> &'static SearchEngine {
    &FIXTURE_ENGINE
}

// ============================================================================
// VOICE-AUDIO SCENARIO
// ============================================================================

/// A corpus where voice-audio records share no text with transcription
/// vocabulary. Only their category can connect them to a transcription query.
///
/// Order: one ai-writing record, two voice-audio, one code-generation, then
/// four more voice-audio.
pub fn voice_audio_corpus() -> Vec<ToolRecord> {
    vec![
        make_tool_with(
            "doc-1",
            "Pixel Forge",
            "ai-writing",
            Some("Paint pictures from prompts"),
            &["canvas"],
        ),
        make_tool("va-1", "Podcast Booth", "voice-audio"),
        make_tool_with("va-2", "Echo Room", "voice-audio", Some("Rooms for hosts"), &["hosting"]),
        make_tool_with("code-1", "Quill", "code-generation", Some("Editor plugin"), &[]),
        make_tool("va-3", "Murmur", "voice-audio"),
        make_tool_with("va-4", "Loudly", "voice-audio", Some("Mixing desk in the browser"), &[]),
        make_tool_with("va-5", "Tin Can", "voice-audio", None, &["calls"]),
        make_tool("va-6", "Hush", "voice-audio"),
    ]
}

/// Ids of the voice-audio records in `voice_audio_corpus`, corpus order.
pub const VOICE_AUDIO_IDS: [&str; 6] = ["va-1", "va-2", "va-3", "va-4", "va-5", "va-6"];

/// Engine whose natural-language profile ignores the category field, so the
/// scenario's voice-audio records can only arrive through category fallback.
pub fn engine_without_category_field(records: Vec<ToolRecord>) -> SearchEngine {
    let mut config = EngineConfig::default();
    config.natural_language.weights.category = 0.0;
    SearchEngine::new(records, IntentCatalog::default(), config)
}
