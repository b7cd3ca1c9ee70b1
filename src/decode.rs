// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Numeral string → integer.
//!
//! A single left-to-right pass with an accumulator. Letters add their value,
//! a geresh with something after it multiplies everything so far by 1000,
//! and everything else is skipped. There is no failure path: garbage decodes
//! to whatever letters it happens to contain, often 0.
//!
//! A trailing geresh is ignored. `ג'` is 3, not 3000, so that a word like
//! `תריג'` is never read as 613,000.

use crate::letters::{letter_value, GERESH};

/// Decode a numeral string. Saturates at `u64::MAX` rather than wrapping.
pub(crate) fn decode_numeral(numeral: &str, trace: bool) -> u64 {
    if trace {
        tracing::debug!(target: "gimatria", input = numeral, "decode");
    }

    let mut value: u64 = 0;
    let mut chars = numeral.chars().peekable();
    while let Some(c) = chars.next() {
        if c == GERESH {
            if chars.peek().is_some() {
                value = value.saturating_mul(1000);
            }
        } else {
            value = value.saturating_add(u64::from(letter_value(c)));
        }
    }

    if trace {
        tracing::debug!(target: "gimatria", value, "decode returning");
    }
    value
}
