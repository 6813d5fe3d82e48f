// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! The linear oracles are the reference the binary searches are checked against.

#![doc(hidden)]

use crate::search::Comparator;
use crate::types::Entry;
use std::cmp::Ordering;

/// Create an entry.
pub fn entry(text: &str, weight: u64) -> Entry {
    Entry::new(text, weight)
}

/// The four-entry set used throughout the docs and tests.
pub fn sample_entries() -> Vec<Entry> {
    vec![
        entry("bear", 0),
        entry("bearish", 2),
        entry("beat", 1),
        entry("cat", 5),
    ]
}

/// First index equal to `key`, found by scanning from the front.
pub fn linear_first_index_of<T, K, C>(a: &[T], key: &K, cmp: &C) -> Option<usize>
where
    K: ?Sized,
    C: Comparator<T, K> + ?Sized,
{
    a.iter()
        .position(|element| cmp.compare(element, key) == Ordering::Equal)
}

/// Last index equal to `key`, found by scanning from the back.
pub fn linear_last_index_of<T, K, C>(a: &[T], key: &K, cmp: &C) -> Option<usize>
where
    K: ?Sized,
    C: Comparator<T, K> + ?Sized,
{
    a.iter()
        .rposition(|element| cmp.compare(element, key) == Ordering::Equal)
}

/// Every entry starting with `prefix`, in input order.
pub fn linear_matches<'a>(entries: &'a [Entry], prefix: &str) -> Vec<&'a Entry> {
    entries
        .iter()
        .filter(|e| e.text().starts_with(prefix))
        .collect()
}

/// `(text, weight)` pairs for readable assertions.
pub fn as_pairs(entries: &[Entry]) -> Vec<(String, u64)> {
    entries
        .iter()
        .map(|e| (e.text().to_string(), e.weight()))
        .collect()
}
