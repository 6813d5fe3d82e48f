// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The weighted-terms text format.
//!
//! ```text
//! 4
//!      0	bear
//!      2	bearish
//!      1	beat
//!      5	cat
//! ```
//!
//! The first non-empty line is the number of entries. Each entry line holds a
//! weight, one tab, and the text. Whitespace before the weight is ignored; the
//! text is everything after the tab, verbatim. Empty lines are skipped. Lines
//! after the announced count are ignored.

use crate::error::{Error, Result};
use crate::types::Entry;
use tracing::warn;

/// Parse a weighted-terms document.
pub fn parse_terms(input: &str) -> Result<Vec<Entry>> {
    // Line numbers are 1-based for error messages.
    let mut lines = input
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.is_empty());

    let Some((header_line, header)) = lines.next() else {
        return Ok(Vec::new());
    };
    let expected: usize = header.trim().parse().map_err(|_| Error::Parse {
        line: header_line,
        reason: format!("invalid entry count '{}'", header.trim()),
    })?;

    // The header is untrusted; don't let it size the allocation outright.
    let mut entries = Vec::with_capacity(expected.min(1 << 16));
    for (line, raw) in lines.by_ref().take(expected) {
        entries.push(parse_line(line, raw, entries.len())?);
    }

    if entries.len() < expected {
        return Err(Error::CountMismatch {
            expected,
            found: entries.len(),
        });
    }

    let ignored = lines.count();
    if ignored > 0 {
        warn!(ignored, "lines after the announced entry count were ignored");
    }

    Ok(entries)
}

fn parse_line(line: usize, raw: &str, position: usize) -> Result<Entry> {
    let (weight, text) = raw.trim_start().split_once('\t').ok_or_else(|| Error::Parse {
        line,
        reason: "missing tab between weight and text".to_string(),
    })?;

    let weight: i64 = weight.trim_end().parse().map_err(|_| Error::Parse {
        line,
        reason: format!("invalid weight '{}'", weight.trim_end()),
    })?;

    Entry::try_new(text, weight).map_err(|_| Error::NegativeWeight {
        weight,
        position: Some(position),
    })
}
