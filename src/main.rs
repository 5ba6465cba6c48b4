// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use toolscout::facets::{self, category_label};
use toolscout::{
    classify, expand, load_catalog, load_config, load_corpus, safe_url, strip, truncate_chars,
    EngineConfig, IntentCatalog, SearchEngine, SearchResults, ToolRecord, ToolType,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, ModeArg};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "toolscout=debug" } else { "toolscout=info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Search {
            corpus,
            query,
            mode,
            limit,
            category,
            tool_type,
            catalog,
            config,
            threshold,
            json,
        } => {
            let options = SearchOptions {
                mode,
                limit,
                category,
                tool_type,
                threshold,
                json,
            };
            run_search(&corpus, &query.join(" "), catalog.as_deref(), config.as_deref(), options)
        }
        Commands::Classify {
            query,
            catalog,
            json,
        } => run_classify(&query.join(" "), catalog.as_deref(), json),
        Commands::Trending {
            corpus,
            limit,
            json,
        } => run_trending(&corpus, limit, json),
        Commands::Inspect { corpus } => run_inspect(&corpus),
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

struct SearchOptions {
    mode: ModeArg,
    limit: Option<usize>,
    category: Option<String>,
    tool_type: Option<ToolType>,
    threshold: Option<f64>,
    json: bool,
}

fn run_search(
    corpus: &Path,
    query: &str,
    catalog: Option<&Path>,
    config: Option<&Path>,
    options: SearchOptions,
) -> Result<()> {
    let records = load_corpus(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    let catalog = resolve_catalog(catalog)?;
    let config = resolve_config(config, options.threshold, options.limit)?;

    let engine = SearchEngine::new(records, catalog, config);
    let mut results = match options.mode {
        ModeArg::Auto => engine.search(query),
        ModeArg::Keyword => engine.keyword_search(query),
        ModeArg::Natural => engine.natural_language_search(query),
    };

    if let Some(slug) = &options.category {
        results.items = facets::filter_by_category(std::mem::take(&mut results.items), slug);
    }
    if let Some(tool_type) = options.tool_type {
        results.items = facets::filter_by_tool_type(std::mem::take(&mut results.items), tool_type);
    }
    if let Some(limit) = options.limit {
        results.items.truncate(limit);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(&results);
    }
    Ok(())
}

fn resolve_catalog(path: Option<&Path>) -> Result<IntentCatalog> {
    match path {
        Some(path) => {
            load_catalog(path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => Ok(IntentCatalog::default()),
    }
}

fn resolve_config(
    path: Option<&Path>,
    threshold: Option<f64>,
    limit: Option<usize>,
) -> Result<EngineConfig> {
    let mut config = match path {
        Some(path) => {
            load_config(path).with_context(|| format!("loading config {}", path.display()))?
        }
        None => EngineConfig::default(),
    };
    if let Some(threshold) = threshold {
        config.natural_language.threshold = threshold;
        config.keyword.threshold = threshold;
    }
    if let Some(limit) = limit {
        config.keyword_limit = limit;
    }
    config.validate().context("invalid search options")?;
    Ok(config)
}

fn print_results(results: &SearchResults<'_>) {
    banner("TOOLSCOUT");
    section_top("QUERY");
    row(&format!("  {} {}", mode_badge(results.mode), themed(WHITE, &[BOLD], &results.intent)));
    if !results.keywords.is_empty() {
        let chips: Vec<String> = results
            .keywords
            .iter()
            .map(|k| themed(CYAN, &[], k))
            .collect();
        row(&format!("  {}", chips.join(themed(GRAY, &[], " · ").as_str())));
    }

    section_mid(&format!("RESULTS ({})", results.len()));
    if results.is_empty() {
        row(&themed(GRAY, &[DIM], "  No matching tools."));
    }
    for (rank, item) in results.items.iter().enumerate() {
        print_tool_row(rank + 1, item.record, &match_label(item.source, item.distance));
    }
    section_bot();
}

fn print_tool_row(rank: usize, record: &ToolRecord, trailer: &str) {
    let head = format!(
        "  {} {} {} {} {}",
        themed(GRAY, &[], &format!("{:>2}.", rank)),
        pad_right(&themed(WHITE, &[BOLD], &truncate_text(&record.title, 28)), 28),
        pad_right(&source_badge(record.source), 14),
        pad_right(&tool_type_label(record.tool_type), 8),
        pad_right(&popularity_label(record), 9),
    );
    row(&format!("{}{}", pad_right(&head, 70), trailer));
    if let Some(description) = &record.description {
        row(&format!("      {}", themed(GRAY, &[], &truncate_text(description, 72))));
    }
    row(&format!(
        "      {} {}",
        themed(BLUE, &[], &truncate_text(safe_url(&record.url), 52)),
        themed(GRAY, &[DIM], category_label(&record.category)),
    ));
}

// ═══════════════════════════════════════════════════════════════════════════
// CLASSIFY
// ═══════════════════════════════════════════════════════════════════════════

fn run_classify(query: &str, catalog: Option<&Path>, json: bool) -> Result<()> {
    let catalog = resolve_catalog(catalog)?;
    let config = EngineConfig::default();
    let query = truncate_chars(query, config.max_query_chars);

    let mode = classify(query);
    let core = strip(query);
    let expansion = expand(&catalog, &core);
    let search_string = expansion.search_string(config.expansion_keyword_cap);

    if json {
        let value = serde_json::json!({
            "mode": mode,
            "core": core,
            "matched_rules": expansion.matched_rules,
            "keywords": expansion.display_keywords(config.display_keyword_cap),
            "categories": expansion.categories,
            "search_string": search_string,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    section_top("CLASSIFY");
    row(&format!("  {:<14}{}", "mode", mode_badge(mode)));
    row(&format!("  {:<14}{}", "core", themed(WHITE, &[BOLD], &core)));
    row(&format!("  {:<14}{}", "rules", expansion.matched_rules.len()));
    row(&format!(
        "  {:<14}{}",
        "categories",
        themed(CYAN, &[], &expansion.categories.join(", "))
    ));
    section_mid("EXPANDED QUERY");
    for line in wrap(&search_string, BOX_WIDTH - 4) {
        row(&format!("  {}", line));
    }
    section_bot();
    Ok(())
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// TRENDING / INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_trending(corpus: &Path, limit: usize, json: bool) -> Result<()> {
    let records = load_corpus(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;
    let top = facets::trending(&records, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&top)?);
        return Ok(());
    }

    section_top(&format!("TRENDING ({})", top.len()));
    if top.is_empty() {
        row(&themed(GRAY, &[DIM], "  No records carry a trending score."));
    }
    for (rank, record) in top.iter().enumerate() {
        let trend = format!(
            "{} {}",
            themed(GRAY, &[DIM], "trend"),
            themed(YELLOW, &[], &format_number(record.trending_score))
        );
        print_tool_row(rank + 1, record, &trend);
    }
    section_bot();
    Ok(())
}

fn run_inspect(corpus: &Path) -> Result<()> {
    let records = load_corpus(corpus)
        .with_context(|| format!("loading corpus {}", corpus.display()))?;

    banner(&format!("{} records", records.len()));

    section_top("CATEGORIES");
    for (slug, count) in facets::category_counts(&records) {
        row(&format!(
            "  {} {:>6}  {}",
            pad_right(&themed(WHITE, &[], category_label(&slug)), 28),
            count,
            themed(GRAY, &[DIM], &slug)
        ));
    }

    section_mid("TOOL TYPES");
    for (tool_type, count) in facets::tool_type_counts(&records) {
        row(&format!("  {} {:>6}", pad_right(&tool_type_label(tool_type), 28), count));
    }

    section_mid("SOURCES");
    for (source, count) in facets::source_counts(&records) {
        row(&format!("  {} {:>6}", pad_right(&source_badge(source), 28), count));
    }

    let trending = records.iter().filter(|r| r.trending_score.is_some()).count();
    let fresh = records.iter().filter(|r| r.is_new).count();
    section_mid("SIGNALS");
    row(&format!("  {} {:>6}", pad_right("trending score", 28), trending));
    row(&format!("  {} {:>6}", pad_right("new", 28), fresh));
    section_bot();
    Ok(())
}
