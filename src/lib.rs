//! Query understanding and fuzzy ranking over a small corpus of AI tools.
//!
//! Two kinds of queries come in. Short lookups ("whisper", "pdf") go straight
//! to a weighted fuzzy index. Sentences ("I need a tool that transcribes
//! meetings") are stripped of conversational filler, expanded through an intent
//! catalog into domain vocabulary, matched, and topped up with records from
//! the matched categories when the fuzzy results come back thin.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  corpus.rs   │────▶│  engine.rs   │────▶│  search/     │
//! │ (load JSON,  │     │ (SearchEngine│     │ (assemble,   │
//! │  unique ids) │     │  owns index) │     │  dedup)      │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!                             │                    │
//!                             ▼                    ▼
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  query/      │     │  index.rs    │────▶│  scoring/    │
//! │ (classify,   │     │ (FuzzyIndex) │     │  fuzzy/      │
//! │  strip,      │     │              │     │ (distances)  │
//! │  expand)     │     └──────────────┘     └──────────────┘
//! └──────────────┘
//!        │
//!        ▼
//! ┌──────────────┐
//! │  catalog.rs  │
//! │ (IntentRule  │
//! │  table)      │
//! └──────────────┘
//! ```
//!
//! | Module      | Role                                           |
//! |-------------|------------------------------------------------|
//! | `query`     | Keyword vs. natural language, filler, intents  |
//! | `index`     | Normalized field text, weighted fuzzy ranking  |
//! | `search`    | Result assembly, category fallback, dedup      |
//! | `engine`    | Owns corpus, catalog, config and index         |
//! | `facets`    | Category/type filters, trending                |
//! | `sanitize`  | http(s)-only links, trusted thumbnail hosts    |
//! | `corpus`    | JSON loading for records, catalogs, configs    |
//!
//! # Usage
//!
//! ```ignore
//! use toolscout::{load_corpus, SearchEngine};
//!
//! let records = load_corpus("data/index.json")?;
//! let engine = SearchEngine::with_defaults(records);
//!
//! let results = engine.search("I need a tool that transcribes meetings");
//! println!("{} ({} results)", results.intent, results.len());
//! ```

pub mod catalog;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod facets;
pub mod fuzzy;
pub mod index;
pub mod query;
pub mod sanitize;
pub mod scoring;
pub mod search;
pub mod testing;
mod types;
mod utils;

pub use catalog::{builtin_rules, IntentCatalog};
pub use config::{EngineConfig, SearchProfile};
pub use corpus::{load_catalog, load_config, load_corpus, parse_catalog, parse_config, parse_corpus};
pub use engine::SearchEngine;
pub use error::{CatalogError, ConfigError, LoadError, LoadResult};
pub use fuzzy::{best_word_distance, max_edits, prefix_distance};
pub use index::{FuzzyIndex, Hit};
pub use query::{classify, expand, strip, Expansion};
pub use sanitize::{safe_thumbnail_url, safe_url};
pub use scoring::{FieldKind, FieldWeights};
pub use types::{
    IntentRule, MatchSource, QueryMode, RankedTool, SearchResults, Source, ToolRecord, ToolType,
};
pub use utils::{normalize, query_terms, truncate_chars};
