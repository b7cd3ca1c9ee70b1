// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Canonical-form check.
//!
//! There is no grammar here. A string is canonical exactly when decoding it
//! and encoding the result gives the same string back, so the encoder is the
//! grammar. Before doing the round trip we take a quick look: every canonical
//! numeral carries a geresh or gershayim and at least one numeral letter.

use crate::decode::decode_numeral;
use crate::encode::encode_numeral;
use crate::letters::{is_numeral_letter, GERESH, GERSHAYIM};

/// Value of `word` if it is the canonical numeral for that value, else 0.
pub(crate) fn canonical_value(word: &str, trace: bool) -> u64 {
    if !word.contains(&[GERESH, GERSHAYIM][..]) || !word.chars().any(is_numeral_letter) {
        return 0;
    }

    let value = decode_numeral(word, trace);
    let Ok(signed) = i64::try_from(value) else {
        return 0;
    };
    if encode_numeral(signed, trace) == word {
        value
    } else {
        0
    }
}
