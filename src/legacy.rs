// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! ISO-8859-8 (Latin/Hebrew) conversions.
//!
//! Older Hebrew word lists and dictionaries are stored one byte per
//! character. The low half is ASCII and 0x80..=0x9F are the C1 controls.
//! The high half carries the 27 Hebrew letters at 0xE0..=0xFA in alphabet
//! order (finals before their regular form), a handful of Latin-1 symbols,
//! and the LRM/RLM direction marks that often surround numbers.
//!
//! Unassigned bytes (0xA1, 0xBF..=0xDE, 0xFB, 0xFC, 0xFF) become U+FFFD.
//! They carry no numeric value, so they can never make a word canonical.

use crate::canonical::canonical_value;

const HEBREW_FIRST_BYTE: u8 = 0xE0;
const HEBREW_LAST_BYTE: u8 = 0xFA;
const ALEF: u32 = 0x05D0;
const TAV: u32 = 0x05EA;

/// High-half bytes that do not map to the same Latin-1 code point.
const REMAPPED: [(u8, char); 5] = [
    (0xAA, '\u{00D7}'), // multiplication sign
    (0xBA, '\u{00F7}'), // division sign
    (0xDF, '\u{2017}'), // double low line
    (0xFD, '\u{200E}'), // left-to-right mark
    (0xFE, '\u{200F}'), // right-to-left mark
];

/// Decode ISO-8859-8 bytes into a `String`.
pub fn from_latin_hebrew(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| latin_hebrew_char(b)).collect()
}

/// Encode `text` as ISO-8859-8, or `None` if any character has no byte in
/// the code page.
pub fn to_latin_hebrew(text: &str) -> Option<Vec<u8>> {
    text.chars().map(latin_hebrew_byte).collect()
}

/// [`crate::is_canonical_gimatria`] for an ISO-8859-8 word.
pub fn is_canonical_gimatria_bytes(word: &[u8]) -> u64 {
    canonical_value(&from_latin_hebrew(word), false)
}

fn latin_hebrew_char(b: u8) -> char {
    match b {
        // ASCII, C1 controls, NBSP and the symbols kept from Latin-1
        0x00..=0xA0 | 0xA2..=0xA9 | 0xAB..=0xB9 | 0xBB..=0xBE => char::from(b),
        HEBREW_FIRST_BYTE..=HEBREW_LAST_BYTE => char::from_u32(ALEF + u32::from(b - HEBREW_FIRST_BYTE))
            .unwrap_or(char::REPLACEMENT_CHARACTER),
        _ => REMAPPED
            .iter()
            .find(|&&(byte, _)| byte == b)
            .map_or(char::REPLACEMENT_CHARACTER, |&(_, c)| c),
    }
}

fn latin_hebrew_byte(c: char) -> Option<u8> {
    let code = u32::from(c);
    match code {
        0x00..=0xA0 | 0xA2..=0xA9 | 0xAB..=0xB9 | 0xBB..=0xBE => Some(code as u8),
        ALEF..=TAV => Some(HEBREW_FIRST_BYTE + (code - ALEF) as u8),
        _ => REMAPPED
            .iter()
            .find(|&&(_, mapped)| mapped == c)
            .map(|&(byte, _)| byte),
    }
}
