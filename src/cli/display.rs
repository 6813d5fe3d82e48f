// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the termrank CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `TERMRANK_THEME` first, then `COLORFGBG`, then defaults to dark. Colors are
//! off when stdout is not a TTY or `NO_COLOR` is set, and in that case result
//! lines are exactly `weight<TAB>text` so output stays pipeable.

use std::sync::OnceLock;
use termrank::Entry;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("TERMRANK_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
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

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
}

mod onelight {
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
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

theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);
theme_color!(GREEN);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
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

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!("┌{}{}┐", label_part, themed(GRAY, &[], &"─".repeat(remaining)))
}

/// Content line: │ content          │
pub fn row(content: &str) -> String {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    format!("│{}{}│", content, " ".repeat(pad))
}

/// Section footer: └──────────────────┘
pub fn section_bot() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH))
}

/// `label ........ value` row body
pub fn stat(label: &str, value: &str) -> String {
    let width = BOX_WIDTH.saturating_sub(2);
    let gap = width.saturating_sub(label.chars().count() + visible_len(value));
    format!(" {}{}{} ", label, " ".repeat(gap), value)
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// `N matches`
pub fn match_count(count: usize) -> String {
    format!("{} matches", themed(GREEN, &[BOLD], &count.to_string()))
}

/// One result: `weight<TAB>text`, with the matched prefix highlighted on a TTY.
pub fn result_line(entry: &Entry, prefix: &str) -> String {
    if !use_colors() {
        return entry.to_string();
    }
    let weight = themed(YELLOW, &[], &entry.weight().to_string());
    let text = entry.text();
    match text.strip_prefix(prefix) {
        Some(rest) if !prefix.is_empty() => {
            format!("{}\t{}{}", weight, themed(CYAN, &[BOLD], prefix), rest)
        }
        _ => format!("{}\t{}", weight, text),
    }
}
