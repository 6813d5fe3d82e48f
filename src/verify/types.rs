// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A vector of entries that is known to be in natural order.
//!
//! Binary search over the master array is only correct if the array is sorted.
//! Rather than trusting every caller to remember, the index stores a
//! [`SortedEntries`], and the only ways to get one are to sort or to validate.

use crate::error::{Error, Result};
use crate::types::Entry;

/// Entries sorted by text.
///
/// # Invariants (enforced at construction)
/// - For all `i < j`: `entries[i].text() <= entries[j].text()`
/// - No mutable access is handed out, so the order cannot be broken later
#[derive(Debug, Clone, Default)]
pub struct SortedEntries {
    entries: Vec<Entry>,
}

impl SortedEntries {
    /// Take ownership of `entries` and sort them.
    ///
    /// The sort is stable: entries with identical text keep their input order.
    pub fn sort(mut entries: Vec<Entry>) -> Self {
        entries.sort();
        Self { entries }
    }

    /// Accept an already-sorted vector, verifying the order in O(n).
    pub fn from_sorted(entries: Vec<Entry>) -> Result<Self> {
        if let Some(position) = first_unsorted(&entries) {
            return Err(Error::Unsorted { position });
        }
        Ok(Self { entries })
    }

    pub fn as_slice(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Give the entries back, dropping the guarantee.
    pub fn into_inner(self) -> Vec<Entry> {
        self.entries
    }
}

impl AsRef<[Entry]> for SortedEntries {
    fn as_ref(&self) -> &[Entry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a SortedEntries {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Position of the first entry that sorts before its predecessor.
fn first_unsorted(entries: &[Entry]) -> Option<usize> {
    entries
        .windows(2)
        .position(|pair| pair[0] > pair[1])
        .map(|i| i + 1)
}

/// True if `entries` is in natural order.
pub fn is_naturally_sorted(entries: &[Entry]) -> bool {
    first_unsorted(entries).is_none()
}
