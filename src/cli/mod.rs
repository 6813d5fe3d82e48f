// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the termrank command-line interface.
//!
//! Three subcommands: `search` answers one prefix, `interactive` reads prefixes
//! from stdin until EOF (one `N matches` line plus the top results per prefix),
//! and `inspect` summarizes a term file.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};
use termrank::load::Format;

#[derive(Parser)]
#[command(
    name = "termrank",
    about = "Ranked prefix completion over weighted terms",
    version
)]
pub struct Cli {
    /// Input file format (default: detected from the file extension)
    #[arg(long, global = true, value_enum)]
    pub format: Option<InputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the heaviest terms starting with a prefix
    Search {
        /// Path to a terms file (count line, then weight<TAB>text lines) or JSON
        file: String,

        /// Prefix to complete (may be empty)
        prefix: String,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Read prefixes from stdin, one per line, and answer each
    Interactive {
        /// Path to a terms file or JSON
        file: String,

        /// Maximum number of results to print per prefix
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Summarize a terms file
    Inspect {
        /// Path to a terms file or JSON
        file: String,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InputFormat {
    /// Count line followed by weight<TAB>text lines
    Terms,
    /// Array of {"text": ..., "weight": ...} objects
    Json,
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Terms => Format::Terms,
            InputFormat::Json => Format::Json,
        }
    }
}
