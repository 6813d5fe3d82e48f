// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The prefix index: one sort at build time, two binary searches per query.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **MASTER_SORTED**: the master array is in natural (text) order for the
//!    lifetime of the index. Held by [`SortedEntries`].
//! 2. **OWNED**: the index never aliases caller storage. `build` consumes or
//!    clones its input.
//! 3. **READ_ONLY_QUERIES**: queries take `&self` and allocate their own result
//!    buffers. The master array is never reordered after `build`.
//!
//! # Query pipeline
//!
//! ```text
//! prefix ─▶ key entry + PrefixOrder(chars(prefix))
//!        ─▶ equal_range over master array  (two O(log n) searches)
//!        ─▶ clone slice [first..=last]
//!        ─▶ stable sort by ReverseWeightOrder
//! ```

use crate::error::{Error, Result};
use crate::order::{PrefixOrder, ReverseWeightOrder};
use crate::search::{equal_range, Comparator};
use crate::types::Entry;
use crate::verify::contracts::{check_equal_range, check_prefix_sound, check_rank_order, check_sorted};
use crate::verify::SortedEntries;
use std::ops::RangeInclusive;
use tracing::debug;

/// Ranked prefix completion over a fixed set of entries.
#[derive(Debug, Clone, Default)]
pub struct PrefixIndex {
    entries: SortedEntries,
}

impl PrefixIndex {
    /// Build an index, taking ownership of the entries and sorting them.
    pub fn build<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Entry>,
    {
        let entries = SortedEntries::sort(entries.into_iter().collect());
        check_sorted(entries.as_slice());
        debug!(entries = entries.len(), "built prefix index");
        Self { entries }
    }

    /// Build from `(text, weight)` pairs with signed weights.
    ///
    /// Fails on the first negative weight, reporting its position. No index is
    /// produced on failure.
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<String>,
    {
        let entries = pairs
            .into_iter()
            .enumerate()
            .map(|(position, (text, weight))| {
                Entry::try_new(text, weight).map_err(|_| Error::NegativeWeight {
                    weight,
                    position: Some(position),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::build(entries))
    }

    /// Number of entries in the index.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in natural order.
    pub fn entries(&self) -> &[Entry] {
        self.entries.as_slice()
    }

    /// All entries whose text starts with `prefix`, heaviest first.
    ///
    /// Equal weights keep their natural (text) order. The empty prefix matches
    /// every entry.
    pub fn matches(&self, prefix: &str) -> Vec<Entry> {
        let Some(range) = self.match_range(prefix) else {
            return Vec::new();
        };

        let mut results = self.entries.as_slice()[range].to_vec();
        results.sort_by(|a, b| ReverseWeightOrder.compare(a, b));

        check_rank_order(&results);
        check_prefix_sound(&results, prefix);
        results
    }

    /// The `k` heaviest entries starting with `prefix`.
    pub fn top_matches(&self, prefix: &str, k: usize) -> Vec<Entry> {
        let mut results = self.matches(prefix);
        results.truncate(k);
        results
    }

    /// How many entries start with `prefix`. Always equals `matches(prefix).len()`.
    pub fn count(&self, prefix: &str) -> usize {
        self.match_range(prefix)
            .map_or(0, |range| range.end() - range.start() + 1)
    }

    /// Inclusive index range of the matches in the master array.
    fn match_range(&self, prefix: &str) -> Option<RangeInclusive<usize>> {
        let key = Entry::new(prefix, 0);
        let order = PrefixOrder::new(key.char_len());
        let entries = self.entries.as_slice();

        let range = equal_range(entries, &key, &order);
        check_equal_range(entries, &key, &order, range.as_ref());

        debug!(prefix, range = ?range, "prefix lookup");
        range
    }
}

impl FromIterator<Entry> for PrefixIndex {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl From<SortedEntries> for PrefixIndex {
    fn from(entries: SortedEntries) -> Self {
        Self { entries }
    }
}
