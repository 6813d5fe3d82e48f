// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reading entries from files.
//!
//! Two formats are understood:
//!
//! - **terms**: a count line followed by `weight<TAB>text` lines (see [`terms`]).
//! - **json**: an array of `{ "text": ..., "weight": ... }` objects.
//!
//! The loader only produces a `Vec<Entry>`. Sorting and indexing happen in
//! [`crate::PrefixIndex::build`].

pub mod terms;

use crate::error::{Error, Result};
use crate::types::Entry;
use std::fs;
use std::path::Path;
use tracing::debug;

pub use terms::parse_terms;

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Terms,
    Json,
}

impl Format {
    /// Guess the format from the file extension. Anything but `.json` is terms.
    pub fn detect(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Terms,
        }
    }
}

/// Parse a JSON entry list.
pub fn parse_json(input: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(input)?)
}

/// Parse `input` in the given format.
pub fn parse_str(input: &str, format: Format) -> Result<Vec<Entry>> {
    match format {
        Format::Terms => parse_terms(input),
        Format::Json => parse_json(input),
    }
}

/// Read and parse a file. `format` defaults to [`Format::detect`].
pub fn load_path(path: impl AsRef<Path>, format: Option<Format>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    let format = format.unwrap_or_else(|| Format::detect(path));
    let input = fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_str(&input, format)?;
    debug!(path = %path.display(), ?format, entries = entries.len(), "loaded entries");
    Ok(entries)
}
