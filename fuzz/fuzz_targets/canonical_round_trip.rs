// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for encode → decode → validate.
//!
//! Runs with debug assertions, so the encoder contracts in
//! `gimatria::contracts` are checked on every input too.

#![no_main]

use gimatria::{decode, encode, is_canonical_gimatria};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|n: i64| {
    let numeral = encode(n);

    if n <= 0 {
        assert!(numeral.is_empty(), "encode({}) = {:?}", n, numeral);
        return;
    }

    // Exact thousands collapse to their leading group.
    if n % 1000 == 0 {
        assert!(numeral.ends_with('\''), "encode({}) = {:?}", n, numeral);
        return;
    }

    assert_eq!(decode(&numeral), n as u64, "encode({}) = {:?}", n, numeral);
    assert_eq!(is_canonical_gimatria(&numeral), n as u64, "{:?}", numeral);
});
