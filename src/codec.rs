// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `Gimatria` handle: the three numeral operations plus a trace switch.
//!
//! Tracing is a property of the handle rather than process-wide state. A
//! traced handle emits `tracing` debug events (target `gimatria`) for every
//! intermediate step; an untraced one emits nothing. Results are identical
//! either way.

use crate::canonical::canonical_value;
use crate::contracts::check_encoded;
use crate::decode::decode_numeral;
use crate::encode::encode_numeral;

/// Hebrew numeral codec.
///
/// Cheap to copy and free of shared state, so one handle can be used from
/// any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gimatria {
    trace: bool,
}

impl Gimatria {
    /// An untraced codec.
    pub const fn new() -> Self {
        Self { trace: false }
    }

    /// A codec that traces intermediate state when `trace` is set.
    pub const fn with_trace(trace: bool) -> Self {
        Self { trace }
    }

    pub const fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// Decode a numeral string into its value.
    ///
    /// Total: unknown characters are skipped, and a geresh multiplies by
    /// 1000 only when something follows it.
    ///
    /// ```
    /// use gimatria::Gimatria;
    ///
    /// assert_eq!(Gimatria::new().decode("ה'תשפ\"ד"), 5784);
    /// ```
    pub fn decode(&self, numeral: &str) -> u64 {
        decode_numeral(numeral, self.trace)
    }

    /// Encode `n` as its canonical numeral. `n <= 0` yields `""`.
    ///
    /// ```
    /// use gimatria::Gimatria;
    ///
    /// assert_eq!(Gimatria::new().encode(613), "תרי\"ג");
    /// assert_eq!(Gimatria::new().encode(0), "");
    /// ```
    pub fn encode(&self, n: i64) -> String {
        let numeral = encode_numeral(n, self.trace);
        check_encoded(n, &numeral);
        numeral
    }

    /// The value of `word` if it is written exactly as [`Gimatria::encode`]
    /// would write it, otherwise 0.
    ///
    /// ```
    /// use gimatria::Gimatria;
    ///
    /// let codec = Gimatria::new();
    /// assert_eq!(codec.is_canonical("תרי\"ג"), 613);
    /// assert_eq!(codec.is_canonical("תריג"), 0);
    /// ```
    pub fn is_canonical(&self, word: &str) -> u64 {
        canonical_value(word, self.trace)
    }
}
