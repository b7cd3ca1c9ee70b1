// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exhaustive round-trip sweeps.
//!
//! For every value in `1..=max`, encode it, then check that the numeral
//! decodes back to the value and that the validator accepts it. Exact
//! multiples of 1000 are counted separately: their numeral ends in a geresh
//! that the decoder treats as a marker, so they are expected to miss.
//!
//! With the `parallel` feature the sweep runs on rayon and can drive an
//! indicatif progress bar.

use serde::Serialize;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::codec::Gimatria;

/// Failures kept in a report. The count keeps going past this.
pub const MAX_REPORTED_FAILURES: usize = 32;

/// How a single value fared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Decodes back to itself and validates as canonical.
    FixedPoint,
    /// An exact multiple of 1000 whose numeral does not round-trip.
    ExactThousands,
}

/// A value whose numeral broke the round trip unexpectedly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepFailure {
    pub value: i64,
    pub numeral: String,
    pub decoded: u64,
    pub canonical: u64,
}

/// Totals for a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub checked: u64,
    pub fixed_points: u64,
    pub exact_thousands: u64,
    pub failure_count: u64,
    pub failures: Vec<SweepFailure>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.failure_count == 0
    }

    fn record(mut self, result: Result<Outcome, SweepFailure>) -> Self {
        self.checked += 1;
        match result {
            Ok(Outcome::FixedPoint) => self.fixed_points += 1,
            Ok(Outcome::ExactThousands) => self.exact_thousands += 1,
            Err(failure) => {
                self.failure_count += 1;
                if self.failures.len() < MAX_REPORTED_FAILURES {
                    self.failures.push(failure);
                }
            }
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.checked += other.checked;
        self.fixed_points += other.fixed_points;
        self.exact_thousands += other.exact_thousands;
        self.failure_count += other.failure_count;
        self.failures.extend(other.failures);
        self.failures.sort_by_key(|f| f.value);
        self.failures.truncate(MAX_REPORTED_FAILURES);
        self
    }
}

/// Check one value.
pub fn check_value(codec: &Gimatria, n: i64) -> Result<Outcome, SweepFailure> {
    let numeral = codec.encode(n);
    let decoded = codec.decode(&numeral);
    let canonical = codec.is_canonical(&numeral);

    if n > 0 && decoded == n as u64 && canonical == n as u64 {
        Ok(Outcome::FixedPoint)
    } else if n > 0 && n % 1000 == 0 {
        Ok(Outcome::ExactThousands)
    } else {
        Err(SweepFailure {
            value: n,
            numeral,
            decoded,
            canonical,
        })
    }
}

/// Sweep `1..=max`.
#[cfg(feature = "parallel")]
pub fn sweep(codec: &Gimatria, max: i64) -> SweepReport {
    (1..max.saturating_add(1))
        .into_par_iter()
        .map(|n| check_value(codec, n))
        .fold(SweepReport::default, SweepReport::record)
        .reduce(SweepReport::default, SweepReport::merge)
}

/// Sweep `1..=max`.
#[cfg(not(feature = "parallel"))]
pub fn sweep(codec: &Gimatria, max: i64) -> SweepReport {
    (1..max.saturating_add(1))
        .map(|n| check_value(codec, n))
        .fold(SweepReport::default(), SweepReport::record)
}

/// Sweep `1..=max`, advancing `progress` once per value.
#[cfg(feature = "parallel")]
pub fn sweep_with_progress(codec: &Gimatria, max: i64, progress: &ProgressBar) -> SweepReport {
    let report = (1..max.saturating_add(1))
        .into_par_iter()
        .map(|n| {
            let result = check_value(codec, n);
            progress.inc(1);
            result
        })
        .fold(SweepReport::default, SweepReport::record)
        .reduce(SweepReport::default, SweepReport::merge);
    progress.finish_with_message(format!("checked {}", report.checked));
    report
}
