// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hebrew numerals (gematria): encode, decode, and check canonical form.
//!
//! A spell checker meets tokens like `תרי"ג` or `ה'תשפ"ד` that are numbers,
//! not words. This crate tells it which tokens are numbers written the one
//! accepted way, and what they are worth.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌─────────────┐     ┌──────────────┐
//! │  letters.rs  │────▶│  decode.rs  │────▶│ canonical.rs │
//! │ (value maps, │     │ (numeral →  │     │ (decode, re- │
//! │  idioms,     │     │   integer)  │     │  encode,     │
//! │  finals)     │────▶│  encode.rs  │────▶│  compare)    │
//! └──────────────┘     │ (integer →  │     └──────────────┘
//!                      │   numeral)  │            │
//!                      └─────────────┘            ▼
//!                                          ┌──────────────┐
//!                                          │   codec.rs   │
//!                                          │  (Gimatria,  │
//!                                          │ trace switch)│
//!                                          └──────────────┘
//! ```
//!
//! # Notation
//!
//! | Value  | Numeral     | Notes                                    |
//! |--------|-------------|------------------------------------------|
//! | 3      | `ג'`        | single letter takes a geresh             |
//! | 15     | `ט"ו`       | not `י"ה`                                |
//! | 613    | `תרי"ג`     | gershayim before the last letter         |
//! | 780    | `תש"ף`      | last letter in final form                |
//! | 5784   | `ה'תשפ"ד`   | inner geresh multiplies by 1000          |
//! | 5001   | `ה'א'`      | group boundary right before last letter  |
//!
//! # Usage
//!
//! ```
//! use gimatria::{decode, encode, is_canonical_gimatria};
//!
//! assert_eq!(encode(613), "תרי\"ג");
//! assert_eq!(decode("תרי\"ג"), 613);
//! assert_eq!(is_canonical_gimatria("תרי\"ג"), 613);
//! assert_eq!(is_canonical_gimatria("תריג"), 0);
//! ```
//!
//! For tracing, build a handle with [`Gimatria::with_trace`].

mod canonical;
mod codec;
pub mod contracts;
mod decode;
mod encode;
pub mod legacy;
pub mod letters;
pub mod utils;
pub mod verify;

pub use codec::Gimatria;
pub use legacy::is_canonical_gimatria_bytes;
pub use letters::{GERESH, GERSHAYIM};
pub use utils::normalize_token;
pub use verify::{sweep, SweepReport};

/// Decode a numeral string. See [`Gimatria::decode`].
pub fn decode(numeral: &str) -> u64 {
    Gimatria::new().decode(numeral)
}

/// Encode `n` as its canonical numeral. See [`Gimatria::encode`].
pub fn encode(n: i64) -> String {
    Gimatria::new().encode(n)
}

/// Value of `word` if it is a canonical numeral, otherwise 0.
///
/// 0 also means "not a numeral"; there is no numeral for zero.
pub fn is_canonical_gimatria(word: &str) -> u64 {
    Gimatria::new().is_canonical(word)
}
