use super::common::fixture_records;
use toolscout::facets::{
    category_counts, category_label, filter_by_category, filter_by_tool_type, source_counts,
    tool_type_counts, trending, CATEGORIES, DEFAULT_TRENDING_LIMIT, FALLBACK_CATEGORY,
};
use toolscout::{Source, ToolType};

fn ids<'a>(records: impl IntoIterator<Item = &'a toolscout::ToolRecord>) -> Vec<&'a str> {
    records.into_iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_trending_order_and_ties() {
    let top = trending(fixture_records(), DEFAULT_TRENDING_LIMIT);
    assert_eq!(
        ids(top),
        vec![
            "gh-stable-diffusion",
            "ph-elevenlabs",
            "gh-whisper-cpp",
            "hn-pdfgpt",
            "gh-comfyui",
            "gh-cursor",
            "gh-langchain",
            "gh-unstructured",
        ]
    );
}

#[test]
fn test_trending_limit() {
    assert_eq!(trending(fixture_records(), 3).len(), 3);
    assert!(trending(fixture_records(), 0).is_empty());
}

#[test]
fn test_filter_by_category() {
    let voice = filter_by_category(fixture_records(), "voice-audio");
    assert_eq!(
        ids(voice),
        vec!["gh-whisper-cpp", "ph-elevenlabs", "yc-fathom", "tw-suno"]
    );
    assert!(filter_by_category(fixture_records(), "robotics-embodied").is_empty());
}

#[test]
fn test_filter_by_tool_type() {
    let models = filter_by_tool_type(fixture_records(), ToolType::Model);
    assert_eq!(ids(models), vec!["gh-mistral"]);
    let unknown = filter_by_tool_type(fixture_records(), ToolType::Unknown);
    assert_eq!(ids(unknown), vec!["gh-autogen"]);
}

#[test]
fn test_counts() {
    let records = fixture_records();
    let types = tool_type_counts(records);
    let total: usize = types.iter().map(|(_, n)| n).sum();
    assert_eq!(total, records.len());

    let sources = source_counts(records);
    assert_eq!(sources[0], (Source::Github, 9));
    assert_eq!(sources.iter().map(|(_, n)| n).sum::<usize>(), 16);

    let categories = category_counts(records);
    assert_eq!(categories[0], ("llm-models".to_string(), 1));
    assert!(categories.contains(&("voice-audio".to_string(), 4)));
    assert!(categories.contains(&("rag-search".to_string(), 3)));
    assert_eq!(categories.iter().map(|(_, n)| n).sum::<usize>(), 16);
}

#[test]
fn test_taxonomy() {
    assert_eq!(CATEGORIES.len(), 11);
    assert!(CATEGORIES.iter().any(|c| c.slug == FALLBACK_CATEGORY));
    assert_eq!(category_label("not-a-slug"), "not-a-slug");
}
