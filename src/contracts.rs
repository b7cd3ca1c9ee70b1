// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the numeral codec.
//!
//! Debug-mode assertions over encoder output. They compile to nothing in
//! release builds and catch table or punctuation regressions early in
//! development and under the fuzzers.
//!
//! | Contract                | Property                                         |
//! |-------------------------|--------------------------------------------------|
//! | `check_marked`          | every non-empty numeral carries ' or "            |
//! | `check_round_trip`      | decode(encode(n)) == n unless n is exact thousands |
//! | `check_final_form`      | the last letter is in final form where it has one |
//!
//! # Usage
//!
//! ```ignore
//! let numeral = encode_numeral(n, false);
//! check_round_trip(n, &numeral);
//! ```

use crate::decode::decode_numeral;
use crate::letters::{final_form, GERESH, GERSHAYIM};

/// Non-empty numerals always carry punctuation. The validator's fast path
/// depends on this.
#[inline]
pub fn check_marked(numeral: &str) {
    debug_assert!(
        numeral.is_empty() || numeral.contains(&[GERESH, GERSHAYIM][..]),
        "Contract violation: numeral {:?} has no geresh or gershayim",
        numeral
    );
}

/// `numeral` decodes back to `n`.
///
/// Exact multiples of 1000 are exempt: their numeral ends in a geresh, which
/// the decoder reads as a marker rather than a multiplier.
#[inline]
pub fn check_round_trip(n: i64, numeral: &str) {
    if n <= 0 || n % 1000 == 0 {
        return;
    }
    debug_assert_eq!(
        decode_numeral(numeral, false),
        n as u64,
        "Contract violation: {:?} does not decode back to {}",
        numeral,
        n
    );
}

/// The last letter is never one that has a final form.
///
/// Exact multiples of 1000 are exempt: their last letter closes the
/// thousands group and stays regular, as in `כ'` for 20,000.
#[inline]
pub fn check_final_form(n: i64, numeral: &str) {
    if n > 0 && n % 1000 == 0 {
        return;
    }
    let last_letter = numeral.chars().rev().find(|&c| c != GERESH && c != GERSHAYIM);
    debug_assert!(
        last_letter.and_then(final_form).is_none(),
        "Contract violation: numeral {:?} ends in a regular-form letter",
        numeral
    );
}

/// All encoder contracts at once.
#[inline]
pub fn check_encoded(n: i64, numeral: &str) {
    check_marked(numeral);
    check_round_trip(n, numeral);
    check_final_form(n, numeral);
}
