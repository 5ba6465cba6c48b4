// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display for the toolscout CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `TOOLSCOUT_THEME`
//! ("dark" or "light") wins, then the `COLORFGBG` background hint, else dark.
//! `NO_COLOR` and non-TTY stdout turn color off entirely, so piping into a
//! file gives plain boxes.

use std::sync::OnceLock;
use toolscout::{MatchSource, QueryMode, Source, ToolRecord, ToolType};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TOOLSCOUT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", where bg 7 and up (except 8) is a light background
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117);
    pub const GREEN: (u8, u8, u8) = (152, 195, 121);
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123);
    pub const BLUE: (u8, u8, u8) = (97, 175, 239);
    pub const MAGENTA: (u8, u8, u8) = (198, 120, 221);
    pub const CYAN: (u8, u8, u8) = (86, 182, 194);
    pub const WHITE: (u8, u8, u8) = (171, 178, 191);
    pub const GRAY: (u8, u8, u8) = (92, 99, 112);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (166, 226, 46);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (102, 217, 239);
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73);
    pub const GREEN: (u8, u8, u8) = (80, 161, 79);
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1);
    pub const BLUE: (u8, u8, u8) = (64, 120, 242);
    pub const MAGENTA: (u8, u8, u8) = (166, 38, 164);
    pub const CYAN: (u8, u8, u8) = (1, 132, 188);
    pub const WHITE: (u8, u8, u8) = (56, 58, 66);
    pub const GRAY: (u8, u8, u8) = (160, 161, 167);
    pub const BRIGHT_GREEN: (u8, u8, u8) = (68, 140, 39);
    pub const BRIGHT_CYAN: (u8, u8, u8) = (1, 112, 158);
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(MAGENTA);
theme_color!(CYAN);
theme_color!(WHITE);
theme_color!(GRAY);
theme_color!(BRIGHT_GREEN);
theme_color!(BRIGHT_CYAN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers, or nothing when color is off.
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Visible length, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn border(color_fn: fn() -> String) -> String {
    if use_colors() {
        color_fn()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(content: &str) {
    let b = border(GRAY);
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{b}│{r}{}{}{b}│{r}", content, " ".repeat(pad), r = reset());
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let b = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}┌{r}{}{b}{}┐{r}", label_part, "─".repeat(remaining), r = reset());
}

/// ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    let b = border(GRAY);
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!("{b}├{r}{}{b}{}┤{r}", label_part, "─".repeat(remaining), r = reset());
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}└{}┘{}", border(GRAY), "─".repeat(BOX_WIDTH), reset());
}

/// ╔══════════════════╗ then a centered bold title then ╚══════════════════╝
pub fn banner(text: &str) {
    let b = border(BLUE);
    let colored = themed(BRIGHT_CYAN, &[BOLD], text);
    let total_pad = BOX_WIDTH.saturating_sub(visible_len(&colored));
    let left_pad = total_pad / 2;
    println!("{b}╔{}╗{r}", "═".repeat(BOX_WIDTH), r = reset());
    println!(
        "{b}║{r}{}{}{}{b}║{r}",
        " ".repeat(left_pad),
        colored,
        " ".repeat(total_pad - left_pad),
        r = reset()
    );
    println!("{b}╚{}╝{r}", "═".repeat(BOX_WIDTH), r = reset());
}

/// Right-pad a styled string to a fixed visible width.
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

/// Cut plain text to `max` visible characters, ending in "…" when cut.
pub fn truncate_text(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

pub fn mode_badge(mode: QueryMode) -> String {
    match mode {
        QueryMode::Keyword => themed(BLUE, &[BOLD], "[keyword]"),
        QueryMode::NaturalLanguage => themed(MAGENTA, &[BOLD], "[natural language]"),
    }
}

pub fn source_badge(source: Source) -> String {
    let color: fn() -> String = match source {
        Source::Github => WHITE,
        Source::Hackernews => YELLOW,
        Source::Producthunt => RED,
        Source::Ycombinator => YELLOW,
        Source::Twitter => BLUE,
    };
    themed(color, &[], &format!("[{}]", source))
}

pub fn tool_type_label(tool_type: ToolType) -> String {
    match tool_type {
        ToolType::App => themed(GREEN, &[], "app"),
        ToolType::Library => themed(CYAN, &[], "library"),
        ToolType::Model => themed(MAGENTA, &[], "model"),
        ToolType::Unknown => themed(GRAY, &[], "unknown"),
    }
}

/// Fuzzy distance (green=close, yellow=loose, gray=barely), or "fallback".
pub fn match_label(source: MatchSource, distance: Option<f64>) -> String {
    match (source, distance) {
        (MatchSource::Fuzzy, Some(d)) => {
            let color: fn() -> String = if d < 0.1 {
                BRIGHT_GREEN
            } else if d < 0.5 {
                GREEN
            } else if d < 0.9 {
                YELLOW
            } else {
                GRAY
            };
            themed(color, &[], &format!("{:.3}", d))
        }
        _ => themed(GRAY, &[DIM], "fallback"),
    }
}

/// Compact number: 54200 → "54.2k", 1234 → "1.2k", 800 → "800", none → "—".
pub fn format_number(n: Option<f64>) -> String {
    match n {
        None => "—".to_string(),
        Some(n) if n >= 1000.0 => format!("{:.1}k", n / 1000.0),
        Some(n) if n.fract() == 0.0 => format!("{}", n as i64),
        Some(n) => format!("{:.1}", n),
    }
}

/// The record's popularity figure: GitHub stars (★) when present, else
/// community points (▲).
pub fn popularity(record: &ToolRecord) -> Option<(&'static str, u64)> {
    match (record.stars, record.score) {
        (Some(stars), _) => Some(("★", stars)),
        (None, Some(score)) => Some(("▲", score)),
        (None, None) => None,
    }
}

/// `popularity` as "★ 54.2k", or blank when the record has neither signal.
pub fn popularity_label(record: &ToolRecord) -> String {
    match popularity(record) {
        Some((icon, n)) => {
            themed(YELLOW, &[], &format!("{} {}", icon, format_number(Some(n as f64))))
        }
        None => String::new(),
    }
}
