// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the engine and the loader.
//!
//! Everything here is a caller error: bad weights, bad prefix lengths, or
//! malformed input files. Nothing is retried. Construction either succeeds
//! completely or returns one of these before any index exists.

use std::path::PathBuf;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A weight below zero was supplied for an entry.
    ///
    /// `position` is the index of the offending pair when the entry came from
    /// a collection, and `None` for a standalone construction.
    #[error("negative weight {weight}{}", fmt_position(.position))]
    NegativeWeight {
        weight: i64,
        position: Option<usize>,
    },

    /// A prefix comparator was requested with a negative length.
    #[error("negative prefix length {0}")]
    NegativePrefixLength(i64),

    /// A vector claimed to be sorted was not in natural order.
    #[error("entries not in natural order at position {position}")]
    Unsorted { position: usize },

    /// Reading an input file failed.
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of a weighted-term file could not be parsed.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The header announced more entries than the file holds.
    #[error("expected {expected} entries, found {found}")]
    CountMismatch { expected: usize, found: usize },

    /// A JSON entry list could not be decoded.
    #[error("invalid entry JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(position) => format!(" at entry {}", position),
        None => String::new(),
    }
}
