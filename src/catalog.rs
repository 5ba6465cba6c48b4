// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The intent catalog: casual phrasing mapped to the vocabulary tools actually use.
//!
//! People type "make my podcast into text". Tool pages say "speech-to-text",
//! "whisper", "asr". Each rule bridges one such gap, and optionally names the
//! category slugs where tools of that kind live.
//!
//! The catalog is plain data, injected into the engine at construction.
//! `IntentCatalog::default()` is the built-in vocabulary. Hosts can load
//! their own with `corpus::load_catalog`.

use crate::error::CatalogError;
use crate::types::IntentRule;

/// Validated, lower-cased intent rules in insertion order.
///
/// Order carries no meaning: every rule is checked on every expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentCatalog {
    rules: Vec<IntentRule>,
}

impl IntentCatalog {
    /// Validate and lower-case a rule set.
    pub fn new(rules: Vec<IntentRule>) -> Result<Self, CatalogError> {
        let mut catalog = Self::empty();
        for rule in rules {
            catalog.push(rule)?;
        }
        Ok(catalog)
    }

    /// A catalog with no rules. Expansion then only sees the query's own words.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Append a rule after validating it.
    pub fn push(&mut self, rule: IntentRule) -> Result<(), CatalogError> {
        let idx = self.rules.len();
        validate_rule(idx, &rule)?;
        self.rules.push(IntentRule {
            patterns: rule.patterns.iter().map(|p| p.trim().to_lowercase()).collect(),
            keywords: rule.keywords.iter().map(|k| k.trim().to_lowercase()).collect(),
            categories: rule.categories.iter().map(|c| c.trim().to_string()).collect(),
        });
        Ok(())
    }

    pub fn with_rule(mut self, rule: IntentRule) -> Result<Self, CatalogError> {
        self.push(rule)?;
        Ok(self)
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for IntentCatalog {
    fn default() -> Self {
        Self::new(builtin_rules()).unwrap_or_else(|_| Self::empty())
    }
}

fn validate_rule(rule_idx: usize, rule: &IntentRule) -> Result<(), CatalogError> {
    if rule.patterns.is_empty() {
        return Err(CatalogError::NoPatterns { rule: rule_idx });
    }
    if rule.keywords.is_empty() {
        return Err(CatalogError::NoKeywords { rule: rule_idx });
    }
    // A blank pattern would substring-match every query.
    if rule.patterns.iter().any(|p| p.trim().is_empty()) {
        return Err(CatalogError::BlankEntry {
            rule: rule_idx,
            what: "pattern",
        });
    }
    if rule.keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(CatalogError::BlankEntry {
            rule: rule_idx,
            what: "keyword",
        });
    }
    Ok(())
}

/// The built-in vocabulary.
pub fn builtin_rules() -> Vec<IntentRule> {
    vec![
        // Documents & files
        IntentRule::new(
            &["pdf", "parse pdf", "read pdf", "extract pdf", "pdf file", "pdf text", "document", "word doc", "docx"],
            &["pdf", "document", "extraction", "ocr", "text extraction", "document qa", "rag", "parse", "reader"],
            &["rag-search", "data-analytics"],
        ),
        IntentRule::new(
            &["ocr", "scan", "scanned", "handwriting", "text from image", "extract text"],
            &["ocr", "optical character recognition", "text extraction", "vision", "document"],
            &["data-analytics", "rag-search"],
        ),
        // Image & video
        IntentRule::new(
            &["generate image", "create image", "make image", "image generation", "ai image", "picture", "illustration", "artwork", "draw"],
            &["image generation", "text-to-image", "stable diffusion", "dalle", "midjourney", "flux", "diffusion"],
            &["image-video"],
        ),
        IntentRule::new(
            &["edit image", "remove background", "background removal", "photo editing", "enhance photo", "upscale image"],
            &["image editing", "inpainting", "upscaling", "super resolution", "background removal"],
            &["image-video"],
        ),
        IntentRule::new(
            &["generate video", "create video", "text to video", "ai video", "video generation", "animate"],
            &["video generation", "text-to-video", "animation", "sora", "runway", "pika"],
            &["image-video"],
        ),
        IntentRule::new(
            &["3d", "3d model", "three dimensional", "3d generation"],
            &["3d", "three-dimensional", "mesh", "nerf", "3d generation"],
            &[],
        ),
        // Audio & voice
        IntentRule::new(
            &["transcribe", "transcription", "speech to text", "voice to text", "audio to text", "meeting notes", "podcast transcript"],
            &["transcription", "whisper", "speech", "asr", "audio", "speech-to-text", "voice recognition"],
            &["voice-audio"],
        ),
        IntentRule::new(
            &["text to speech", "tts", "voice", "text to voice", "narrate", "read aloud", "voiceover"],
            &["text-to-speech", "tts", "voice synthesis", "elevenlabs", "voice clone", "narration"],
            &["voice-audio"],
        ),
        IntentRule::new(
            &["music", "generate music", "ai music", "song", "compose music", "beat"],
            &["music generation", "suno", "udio", "audiocraft", "music", "song generation"],
            &["voice-audio"],
        ),
        IntentRule::new(
            &["clone voice", "voice cloning", "duplicate voice", "copy voice"],
            &["voice clone", "voice cloning", "voice synthesis", "tts"],
            &["voice-audio"],
        ),
        // Code & development
        IntentRule::new(
            &["write code", "generate code", "coding assistant", "code completion", "programming help", "debug code", "code review", "refactor"],
            &["code generation", "coding assistant", "copilot", "codeium", "cursor", "autocomplete", "code completion"],
            &["code-generation"],
        ),
        IntentRule::new(
            &["sql", "database query", "query database", "natural language sql", "text to sql"],
            &["nl2sql", "text-to-sql", "natural language sql", "database", "query"],
            &["data-analytics"],
        ),
        // Writing & content
        IntentRule::new(
            &["write email", "email assistant", "draft email", "email template"],
            &["email assistant", "writing assistant", "email", "draft", "content generation"],
            &["ai-writing"],
        ),
        IntentRule::new(
            &["summarize", "summary", "summarise", "tldr", "shorten", "compress text", "long article", "abstract"],
            &["summarization", "summarize", "text", "content", "abstract", "tldr"],
            &["ai-writing"],
        ),
        IntentRule::new(
            &["write blog", "blog post", "article", "content creation", "copywriting", "marketing copy"],
            &["writing assistant", "content generation", "copywriting", "blog", "marketing"],
            &["ai-writing"],
        ),
        IntentRule::new(
            &["translate", "translation", "multilingual", "convert language", "language translation"],
            &["translation", "multilingual", "language", "translate"],
            &["llm-models"],
        ),
        IntentRule::new(
            &["grammar", "grammar check", "proofread", "spell check", "writing errors"],
            &["grammar", "proofreading", "spell check", "grammarly", "writing assistant"],
            &["ai-writing"],
        ),
        // Search & knowledge
        IntentRule::new(
            &["search documents", "find information", "knowledge base", "ask questions about", "chat with documents", "document search"],
            &["rag", "retrieval", "semantic search", "knowledge base", "document qa", "chat with"],
            &["rag-search"],
        ),
        IntentRule::new(
            &["chatbot", "chat with", "talk to ai", "ai assistant", "conversation", "customer support bot"],
            &["chatbot", "assistant", "llm", "chat", "conversational", "customer support"],
            &["ai-agents"],
        ),
        IntentRule::new(
            &["research", "research assistant", "find papers", "literature review", "academic search"],
            &["research", "papers", "academic", "semantic search", "knowledge"],
            &["rag-search"],
        ),
        // Automation & agents
        IntentRule::new(
            &["automate", "automation", "workflow", "no code automation", "task automation", "ai workflow"],
            &["automation", "workflow", "agent", "langchain", "no-code", "zapier", "n8n"],
            &["ai-agents"],
        ),
        IntentRule::new(
            &["ai agent", "autonomous agent", "ai that does tasks", "browser automation", "web scraping ai"],
            &["agent", "autonomous", "browser", "computer use", "web scraping", "task"],
            &["ai-agents"],
        ),
        // Data & analytics
        IntentRule::new(
            &["analyze data", "data analysis", "csv analysis", "spreadsheet ai", "chart from data", "visualize data", "excel ai"],
            &["data analysis", "pandas", "csv", "spreadsheet", "visualization", "chart", "analytics"],
            &["data-analytics"],
        ),
        // Local & private
        IntentRule::new(
            &["local", "offline", "private", "no internet", "on device", "run locally", "own computer", "privacy"],
            &["local llm", "offline", "on-device", "privacy", "self-hosted", "llama.cpp"],
            &["local-ai"],
        ),
        // Faces & avatars
        IntentRule::new(
            &["avatar", "ai avatar", "virtual human", "face swap", "deepfake", "talking head", "digital human"],
            &["avatar", "face", "deepfake", "talking", "virtual human", "digital human"],
            &["image-video"],
        ),
        // Presentation & design
        IntentRule::new(
            &["presentation", "slides", "powerpoint", "pitch deck", "ai slides"],
            &["presentation", "slides", "powerpoint", "design", "deck"],
            &["ai-writing"],
        ),
        IntentRule::new(
            &["design", "ui design", "web design", "logo", "brand", "graphic design"],
            &["design", "ui", "logo", "brand", "graphic", "image generation"],
            &["image-video"],
        ),
        // Meetings & productivity
        IntentRule::new(
            &["meeting notes", "meeting summary", "zoom notes", "meeting transcript", "record meeting"],
            &["meeting", "transcription", "notes", "summary", "productivity"],
            &["voice-audio", "ai-writing"],
        ),
        IntentRule::new(
            &["productivity", "task management", "to do", "planner", "calendar ai"],
            &["productivity", "task", "planner", "assistant", "workflow"],
            &["ai-agents"],
        ),
        // Embeddings & vectors
        IntentRule::new(
            &["embedding", "vector search", "similarity search", "vector database", "semantic"],
            &["embedding", "vector database", "semantic search", "similarity", "faiss", "pinecone"],
            &["rag-search"],
        ),
    ]
}
