// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ISO-8859-8 input.
//!
//! Byte input must agree with the UTF-8 path after conversion, and anything
//! that converts cleanly must convert back to the same bytes.

#![no_main]

use gimatria::is_canonical_gimatria;
use gimatria::is_canonical_gimatria_bytes;
use gimatria::legacy::{from_latin_hebrew, to_latin_hebrew};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = from_latin_hebrew(data);
    assert_eq!(
        is_canonical_gimatria_bytes(data),
        is_canonical_gimatria(&text)
    );

    if let Some(bytes) = to_latin_hebrew(&text) {
        assert_eq!(bytes, data);
    }
});
