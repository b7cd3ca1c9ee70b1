// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for preparing tokens before a canonical check.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::letters::{GERESH, GERSHAYIM};

/// Hebrew punctuation geresh (U+05F3).
const HEBREW_GERESH: char = '\u{05F3}';
/// Hebrew punctuation gershayim (U+05F4).
const HEBREW_GERSHAYIM: char = '\u{05F4}';

/// Normalize a token: strip points and cantillation, and fold the Hebrew
/// punctuation geresh/gershayim to the ASCII marks the codec expects.
///
/// - "תרי״ג" → "תרי\"ג"
/// - "שָׁנָה" → "שנה"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (splits presentation forms like שׁ into base + mark)
/// 2. Filter out Hebrew combining marks
/// 3. Fold punctuation
///
/// # Algorithm (without unicode-normalization)
///
/// Steps 2 and 3 only. Precomposed presentation forms are left alone.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_token(token: &str) -> String {
    token
        .nfd()
        .filter(|c| !is_hebrew_mark(*c))
        .map(fold_punctuation)
        .collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| !is_hebrew_mark(*c))
        .map(fold_punctuation)
        .collect()
}

fn fold_punctuation(c: char) -> char {
    match c {
        HEBREW_GERESH => GERESH,
        HEBREW_GERSHAYIM => GERSHAYIM,
        _ => c,
    }
}

/// Points (niqqud) and cantillation marks, Unicode category Mn in the
/// Hebrew block.
fn is_hebrew_mark(c: char) -> bool {
    matches!(c,
        '\u{0591}'..='\u{05BD}' |  // Cantillation and vowel points
        '\u{05BF}' |               // Rafe
        '\u{05C1}'..='\u{05C2}' |  // Shin and sin dots
        '\u{05C4}'..='\u{05C5}' |  // Upper and lower dots
        '\u{05C7}'                 // Qamats qatan
    )
}

/// Left-to-right and right-to-left marks (U+200E, U+200F).
const DIRECTION_MARKS: [char; 2] = ['\u{200E}', '\u{200F}'];

/// Split text into candidate tokens on whitespace (NBSP included),
/// direction marks and sentence punctuation.
///
/// Apostrophes and double quotes stay attached because they are part of the
/// numeral.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        c.is_whitespace()
            || DIRECTION_MARKS.contains(&c)
            || matches!(c, ',' | '.' | ';' | ':' | '(' | ')' | '?' | '!')
    })
    .filter(|t| !t.is_empty())
}
