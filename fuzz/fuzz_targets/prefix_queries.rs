// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for prefix queries against a built index.
//!
//! Arbitrary texts (NUL bytes, combining marks, emoji) and arbitrary
//! prefixes. The index must return exactly the entries a linear filter finds,
//! heaviest first.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termrank::{Entry, PrefixIndex};

#[derive(Debug, Arbitrary)]
struct Input {
    entries: Vec<(String, u64)>,
    prefix: String,
}

fuzz_target!(|input: Input| {
    // A NUL in the prefix also matches the padding past a shorter text, so
    // `starts_with` stops being the right oracle.
    if input.prefix.contains('\0') {
        return;
    }

    let entries: Vec<Entry> = input
        .entries
        .into_iter()
        .take(256)
        .map(|(text, weight)| Entry::new(text, weight))
        .collect();
    let index = PrefixIndex::build(entries.clone());
    let prefix = &input.prefix;

    let results = index.matches(prefix);

    // INVARIANT 1: count agrees with matches
    assert_eq!(index.count(prefix), results.len());

    // INVARIANT 2: every result starts with the prefix
    for entry in &results {
        assert!(
            entry.text().starts_with(prefix.as_str()),
            "{:?} does not start with {:?}",
            entry.text(),
            prefix
        );
    }

    // INVARIANT 3: nothing is missed
    let expected = entries
        .iter()
        .filter(|e| e.text().starts_with(prefix.as_str()))
        .count();
    assert_eq!(results.len(), expected);

    // INVARIANT 4: heaviest first
    for pair in results.windows(2) {
        assert!(pair[0].weight() >= pair[1].weight());
    }
});
