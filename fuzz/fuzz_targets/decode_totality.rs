// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the decoder and validator on arbitrary strings.
//!
//! Both are total. Any string must produce a value without panicking, and a
//! nonzero validator answer must mean the string is exactly the encoder's
//! output for that value.

#![no_main]

use gimatria::{decode, encode, is_canonical_gimatria};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|word: &str| {
    let decoded = decode(word);
    let value = is_canonical_gimatria(word);

    if value > 0 {
        assert_eq!(value, decoded, "validator and decoder disagree on {:?}", word);
        assert_eq!(
            encode(value as i64),
            word,
            "accepted {:?} is not the canonical numeral for {}",
            word,
            value
        );
    }
});
