// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the gimatria CLI.
//!
//! OneDark on dark terminals, One Light on light ones. `GIMATRIA_THEME`
//! (`dark`/`light`) wins, then the background half of `COLORFGBG`. Color is
//! dropped entirely under `NO_COLOR` or when stdout is not a TTY, so piped
//! output is plain tab-separated text.

use std::sync::OnceLock;

/// Inner width of a report box, between the two `│` borders.
pub const BOX_WIDTH: usize = 56;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

type Rgb = (u8, u8, u8);

/// The five colors the CLI uses.
struct Palette {
    accept: Rgb,
    reject: Rgb,
    numeral: Rgb,
    heading: Rgb,
    muted: Rgb,
}

const ONE_DARK: Palette = Palette {
    accept: (152, 195, 121),  // #98c379
    reject: (224, 108, 117),  // #e06c75
    numeral: (229, 192, 123), // #e5c07b
    heading: (86, 182, 194),  // #56b6c2
    muted: (92, 99, 112),     // #5c6370
};

const ONE_LIGHT: Palette = Palette {
    accept: (80, 161, 79),   // #50a14f
    reject: (228, 86, 73),   // #e45649
    numeral: (193, 132, 1),  // #c18401
    heading: (1, 132, 188),  // #0184bc
    muted: (160, 161, 167),  // #a0a1a7
};

static PALETTE: OnceLock<&'static Palette> = OnceLock::new();

fn palette() -> &'static Palette {
    PALETTE.get_or_init(|| if light_background() { &ONE_LIGHT } else { &ONE_DARK })
}

fn light_background() -> bool {
    let requested = std::env::var("GIMATRIA_THEME").map(|t| t.to_lowercase());
    match requested.as_deref() {
        Ok("light" | "l") => return true,
        Ok("dark" | "d") => return false,
        _ => {}
    }

    // COLORFGBG is "fg;bg" (sometimes "fg;default;bg"); 7 and 9..=15 are light
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
}

fn paint(color: fn(&Palette) -> Rgb, style: &str, text: &str) -> String {
    if !use_colors() {
        return text.to_string();
    }
    let (r, g, b) = color(palette());
    format!("{}\x1b[38;2;{};{};{}m{}{}", style, r, g, b, text, RESET)
}

/// Number of terminal columns `s` takes, ignoring SGR escape sequences.
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    s.chars()
        .filter(|&c| match (in_escape, c) {
            (false, '\x1b') => {
                in_escape = true;
                false
            }
            (true, 'm') => {
                in_escape = false;
                false
            }
            (escaped, _) => !escaped,
        })
        .count()
}

fn border(text: &str) -> String {
    paint(|p| p.muted, "", text)
}

/// `┌─ LABEL ───┐`
pub fn section_top(label: &str) {
    let title = format!("─ {} ", paint(|p| p.heading, BOLD, label));
    let fill = BOX_WIDTH.saturating_sub(visible_len(&title));
    println!("{}{}{}", border("┌"), title, border(&format!("{}┐", "─".repeat(fill))));
}

/// `│ content   │`, padded to the box width.
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border("│"), content, " ".repeat(pad), border("│"));
}

/// `└───────────┘`
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

/// ✓ for a canonical word, ✗ otherwise.
pub fn status_mark(canonical: bool) -> String {
    if canonical {
        paint(|p| p.accept, BOLD, "✓")
    } else {
        paint(|p| p.reject, "", "✗")
    }
}

/// A numeral, or a dim placeholder when there is none.
pub fn numeral(text: &str) -> String {
    if text.is_empty() {
        paint(|p| p.muted, DIM, "(none)")
    } else {
        paint(|p| p.numeral, BOLD, text)
    }
}

/// Right-aligned count.
pub fn count(value: u64, width: usize) -> String {
    format!("{:>width$}", value, width = width)
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", paint(|p| p.reject, BOLD, "error:"), message);
}
