// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the gimatria command-line interface.
//!
//! Four subcommands: `encode` and `decode` convert between integers and
//! numerals, `check` picks canonical numerals out of words or text on stdin,
//! and `verify` sweeps a range of values through the round trip. `--trace`
//! turns on the codec's debug events for any of them.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "gimatria",
    about = "Hebrew numeral (gematria) encoder, decoder and validator",
    version
)]
pub struct Cli {
    /// Print codec trace events to stderr
    #[arg(long, global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Byte encoding of text read from stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum InputEncoding {
    #[default]
    Utf8,
    /// ISO-8859-8, one byte per Hebrew letter
    #[value(name = "iso-8859-8")]
    Iso88598,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the canonical numeral for each integer
    Encode {
        /// Integers to encode (zero and negatives have no numeral)
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Print the value of each numeral string
    Decode {
        /// Numeral strings, e.g. ה'תשפ"ד
        #[arg(required = true)]
        numerals: Vec<String>,
    },

    /// Report which words are canonical numerals
    ///
    /// With no words on the command line, reads text from stdin and checks
    /// every token in it.
    Check {
        /// Words to check
        words: Vec<String>,

        /// Also list words that are not canonical numerals
        #[arg(long)]
        all: bool,

        /// Emit one JSON object per word
        #[arg(long)]
        json: bool,

        /// Strip points and fold Hebrew geresh/gershayim before checking
        #[arg(long)]
        strip_marks: bool,

        /// Encoding of stdin
        #[arg(long, value_enum, default_value_t = InputEncoding::Utf8)]
        encoding: InputEncoding,
    },

    /// Round-trip every value from 1 to MAX through the codec
    Verify {
        /// Largest value to check
        #[arg(long, default_value = "100000")]
        max: i64,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },
}
