// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Letter-value tables for Hebrew numerals.
//!
//! Two tables, kept apart. Decoding is many-to-one: the regular
//! and final forms of כ מ נ פ צ carry the same value, so `ך` and `כ` both
//! read as 20. Encoding is one-to-one: each (place, digit) pair has exactly
//! one canonical spelling, and final forms only appear through
//! [`final_form`] once the whole numeral is assembled.
//!
//! # Tables
//!
//! ```text
//! place      1   2   3   4   5    6    7    8    9
//! units      א   ב   ג   ד   ה    ו    ז    ח    ט
//! tens       י   כ   ל   מ   נ    ס    ע    פ    צ
//! hundreds   ק   ר   ש   ת   תק   תר   תש   תת   תתק
//! ```
//!
//! Hundreds past 400 are spelled by repeating ת. There is no letter for
//! 1000; thousands are marked with a geresh (see [`GERESH`]).

/// Thousands separator. Marks single-letter numerals when trailing.
pub const GERESH: char = '\'';

/// Quote mark placed before the last letter of a multi-letter numeral.
pub const GERSHAYIM: char = '"';

/// Digit position within a thousands group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Place {
    Units,
    Tens,
    Hundreds,
}

impl Place {
    /// The next place in the cycle, or `None` once the group is complete.
    pub fn next(self) -> Option<Place> {
        match self {
            Place::Units => Some(Place::Tens),
            Place::Tens => Some(Place::Hundreds),
            Place::Hundreds => None,
        }
    }

    fn row(self) -> usize {
        match self {
            Place::Units => 0,
            Place::Tens => 1,
            Place::Hundreds => 2,
        }
    }
}

/// Canonical spellings, in reading order, indexed by `[place][digit - 1]`.
const CANONICAL: [[&str; 9]; 3] = [
    ["א", "ב", "ג", "ד", "ה", "ו", "ז", "ח", "ט"],
    ["י", "כ", "ל", "מ", "נ", "ס", "ע", "פ", "צ"],
    ["ק", "ר", "ש", "ת", "תק", "תר", "תש", "תת", "תתק"],
];

/// ט״ו and ט״ז replace י״ה and י״ו, which spell a divine name.
const FIFTEEN: &str = "טו";
const SIXTEEN: &str = "טז";

/// Numeric value of a single letter.
///
/// Anything outside the numeral alphabet, punctuation included, is worth 0.
pub fn letter_value(c: char) -> u32 {
    match c {
        'א' => 1,
        'ב' => 2,
        'ג' => 3,
        'ד' => 4,
        'ה' => 5,
        'ו' => 6,
        'ז' => 7,
        'ח' => 8,
        'ט' => 9,
        'י' => 10,
        'כ' | 'ך' => 20,
        'ל' => 30,
        'מ' | 'ם' => 40,
        'נ' | 'ן' => 50,
        'ס' => 60,
        'ע' => 70,
        'פ' | 'ף' => 80,
        'צ' | 'ץ' => 90,
        'ק' => 100,
        'ר' => 200,
        'ש' => 300,
        'ת' => 400,
        _ => 0,
    }
}

/// Whether `c` carries a numeric value.
pub fn is_numeral_letter(c: char) -> bool {
    letter_value(c) != 0
}

/// Canonical letters for `digit` (1..=9) at `place`, in reading order.
///
/// Returns an empty string for digit 0 or anything above 9.
pub fn canonical_letters(place: Place, digit: u64) -> &'static str {
    match digit {
        1..=9 => CANONICAL[place.row()][digit as usize - 1],
        _ => "",
    }
}

/// The reserved spelling for 15 or 16, in reading order.
pub fn idiom(value: u64) -> Option<&'static str> {
    match value {
        15 => Some(FIFTEEN),
        16 => Some(SIXTEEN),
        _ => None,
    }
}

/// End-of-word form of `c`, if it has one.
pub fn final_form(c: char) -> Option<char> {
    match c {
        'כ' => Some('ך'),
        'מ' => Some('ם'),
        'נ' => Some('ן'),
        'פ' => Some('ף'),
        'צ' => Some('ץ'),
        _ => None,
    }
}
