// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the toolscout command-line interface.
//!
//! Four subcommands: `search` to query a corpus file, `classify` to see how a
//! query is understood without touching any corpus, `trending` for the
//! dashboard's top list, and `inspect` for corpus statistics.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toolscout::ToolType;

#[derive(Parser)]
#[command(
    name = "toolscout",
    about = "Natural-language and fuzzy search over a catalog of AI tools",
    version
)]
pub struct Cli {
    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which query path to take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Classify the query and pick a path
    Auto,
    /// Direct fuzzy lookup
    Keyword,
    /// Strip, expand, match, fall back on categories
    Natural,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked results
    Search {
        /// Corpus JSON (bare array or {"items": [...]})
        corpus: PathBuf,

        /// Search query (remaining words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        #[arg(short, long, value_enum, default_value = "auto")]
        mode: ModeArg,

        /// Maximum number of results to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Only show results in this category slug
        #[arg(long)]
        category: Option<String>,

        /// Only show results of this tool type (app, library, model, unknown)
        #[arg(long)]
        tool_type: Option<ToolType>,

        /// Custom intent catalog (JSON array of rules)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Engine config JSON; missing fields keep their defaults
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the match threshold of both profiles (0 = exact, 1 = anything)
        #[arg(long)]
        threshold: Option<f64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show how a query is classified, stripped and expanded
    Classify {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Custom intent catalog (JSON array of rules)
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[arg(long)]
        json: bool,
    },

    /// List records with the highest trending score
    Trending {
        corpus: PathBuf,

        #[arg(short, long, default_value = "12")]
        limit: usize,

        #[arg(long)]
        json: bool,
    },

    /// Show corpus statistics
    Inspect {
        corpus: PathBuf,
    },
}
