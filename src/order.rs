// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The three orders over entries.
//!
//! | Order                 | Compares                         | Used for                  |
//! |-----------------------|----------------------------------|---------------------------|
//! | [`NaturalOrder`]      | full text                        | sorting the master array  |
//! | [`ReverseWeightOrder`]| weight, highest first            | ranking a match slice     |
//! | [`PrefixOrder`]       | first `r` characters of the text | finding a match slice     |
//!
//! `PrefixOrder(r)` is a coarsening of the natural order: any two entries in
//! natural order are also in (non-strict) prefix order. That is why one sort
//! serves both, and why every entry sharing a prefix forms one contiguous run.
//!
//! Characters past the end of a text read as `'\0'`, the lowest `char`. So a
//! short text sorts before longer texts it diverges from inside the window, and
//! two texts that agree on their first `r` padded characters compare equal.

use crate::error::Error;
use crate::search::Comparator;
use crate::types::Entry;
use std::cmp::Ordering;
use std::iter;

/// Lexicographic order on `text`, weight ignored. Same as `Entry: Ord`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalOrder;

impl Comparator<Entry> for NaturalOrder {
    #[inline]
    fn compare(&self, element: &Entry, key: &Entry) -> Ordering {
        element.text().cmp(key.text())
    }
}

/// Weight only, descending. Equal weights compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReverseWeightOrder;

impl Comparator<Entry> for ReverseWeightOrder {
    #[inline]
    fn compare(&self, element: &Entry, key: &Entry) -> Ordering {
        key.weight().cmp(&element.weight())
    }
}

/// Lexicographic order limited to the first `len` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixOrder {
    len: usize,
}

impl PrefixOrder {
    pub fn new(len: usize) -> Self {
        Self { len }
    }

    /// Number of characters compared.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Compare two strings on their first `len` characters, padding with `'\0'`.
    pub fn compare_str(&self, a: &str, b: &str) -> Ordering {
        padded(a, self.len).cmp(padded(b, self.len))
    }
}

fn padded(text: &str, len: usize) -> impl Iterator<Item = char> + '_ {
    text.chars().chain(iter::repeat('\0')).take(len)
}

impl TryFrom<i64> for PrefixOrder {
    type Error = Error;

    fn try_from(len: i64) -> Result<Self, Self::Error> {
        usize::try_from(len)
            .map(Self::new)
            .map_err(|_| Error::NegativePrefixLength(len))
    }
}

impl Comparator<Entry> for PrefixOrder {
    #[inline]
    fn compare(&self, element: &Entry, key: &Entry) -> Ordering {
        self.compare_str(element.text(), key.text())
    }
}

impl Comparator<Entry, str> for PrefixOrder {
    #[inline]
    fn compare(&self, element: &Entry, key: &str) -> Ordering {
        self.compare_str(element.text(), key)
    }
}
