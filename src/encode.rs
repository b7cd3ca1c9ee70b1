// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Integer → canonical numeral string.
//!
//! The value is consumed from the least significant digit upward while a
//! place cursor cycles units → tens → hundreds. Each completed cycle emits a
//! geresh before the next thousands group starts. Letters are collected
//! least-significant first and reversed once at the end.
//!
//! # Place cycle
//!
//! ```text
//!            15/16 idiom (consumes two digits)
//!        ┌─────────────────────────────────┐
//!        │                                 ▼
//!     ┌───────┐      ┌──────┐      ┌──────────┐
//! ──▶ │ UNITS │ ───▶ │ TENS │ ───▶ │ HUNDREDS │ ──┐
//!     └───────┘      └──────┘      └──────────┘   │
//!        ▲                                        │
//!        └────────────── emit ' ──────────────────┘
//! ```
//!
//! After reversal the last letter takes its final form, then punctuation is
//! placed:
//!
//! | Shape                         | Example | Rule                     |
//! |-------------------------------|---------|--------------------------|
//! | one letter                    | `ג'`    | append geresh            |
//! | geresh right before last      | `ה'א'`  | append geresh            |
//! | ends in geresh                | `א'`    | leave as is              |
//! | anything else                 | `תרי"ג` | gershayim before last    |

use crate::letters::{canonical_letters, final_form, idiom, Place, GERESH, GERSHAYIM};

/// Encode `n` as a canonical numeral. Non-positive values have no numeral.
pub(crate) fn encode_numeral(n: i64, trace: bool) -> String {
    if trace {
        tracing::debug!(target: "gimatria", input = n, "encode");
    }

    let Ok(remaining) = u64::try_from(n) else {
        return String::new();
    };
    let mut letters = collect_letters(remaining);

    if trace {
        let before: String = letters.iter().collect();
        tracing::debug!(target: "gimatria", letters = %before, "before reversal");
    }

    letters.reverse();

    if trace {
        let after: String = letters.iter().collect();
        tracing::debug!(target: "gimatria", letters = %after, "after reversal");
    }

    if let Some(last) = letters.last_mut() {
        if let Some(fin) = final_form(*last) {
            *last = fin;
        }
    }
    punctuate(&mut letters);

    let numeral: String = letters.into_iter().collect();
    if trace {
        tracing::debug!(target: "gimatria", numeral = %numeral, "encode returning");
    }
    numeral
}

/// Letters of `n`, least significant first.
fn collect_letters(mut n: u64) -> Vec<char> {
    let mut letters = Vec::new();
    // None marks a finished group that still needs its geresh.
    let mut place = Some(Place::Units);

    while n > 0 {
        let current = match place {
            Some(current) => current,
            None => {
                letters.push(GERESH);
                Place::Units
            }
        };

        let special = match current {
            Place::Units => idiom(n % 100),
            _ => None,
        };
        if let Some(spelling) = special {
            letters.extend(spelling.chars().rev());
            n /= 100;
            place = Some(Place::Hundreds);
        } else {
            letters.extend(canonical_letters(current, n % 10).chars().rev());
            n /= 10;
            place = current.next();
        }
    }

    letters
}

/// Apply the geresh/gershayim rules to a reversed, final-formed numeral.
fn punctuate(letters: &mut Vec<char>) {
    let len = letters.len();
    match len {
        0 => {}
        1 => letters.push(GERESH),
        _ => {
            let last = letters[len - 1];
            if last == GERESH {
                return;
            }
            if letters[len - 2] == GERESH {
                letters.push(GERESH);
            } else {
                letters.insert(len - 1, GERSHAYIM);
            }
        }
    }
}
