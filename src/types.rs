// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types.
//!
//! An [`Entry`] is one completable item: a piece of text and the weight used to
//! rank it. Entries are immutable once built. The natural order (`Ord`) looks at
//! the text only, which is the order the index keeps its master array in.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A weighted completion candidate.
///
/// Equality and ordering consider `text` only. Two entries with the same text
/// and different weights are equal under the natural order, exactly like they
/// would sit next to each other in the index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    text: String,
    weight: u64,
}

impl Entry {
    /// Create an entry from an unsigned weight. Cannot fail.
    pub fn new(text: impl Into<String>, weight: u64) -> Self {
        Self {
            text: text.into(),
            weight,
        }
    }

    /// Create an entry from a signed weight, rejecting negatives.
    pub fn try_new(text: impl Into<String>, weight: i64) -> Result<Self> {
        let weight = u64::try_from(weight).map_err(|_| Error::NegativeWeight {
            weight,
            position: None,
        })?;
        Ok(Self::new(text, weight))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Number of characters (not bytes) in the text.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

/// `weight<TAB>text`, the line format of weighted-term files.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.weight, self.text)
    }
}

impl From<(&str, u64)> for Entry {
    fn from((text, weight): (&str, u64)) -> Self {
        Self::new(text, weight)
    }
}

impl From<(String, u64)> for Entry {
    fn from((text, weight): (String, u64)) -> Self {
        Self::new(text, weight)
    }
}
