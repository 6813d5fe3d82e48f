// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the boundary-finding binary searches.
//!
//! Sorted inputs must agree with a linear scan. Unsorted inputs may give any
//! answer, but must never panic or point outside the slice.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use termrank::{equal_range, first_index_of, last_index_of};

#[derive(Debug, Arbitrary)]
struct Input {
    values: Vec<u8>,
    key: u8,
    sort: bool,
}

fuzz_target!(|input: Input| {
    let mut values = input.values;
    if input.sort {
        values.sort_unstable();
    }
    let key = input.key;
    let cmp = |a: &u8, b: &u8| a.cmp(b);

    let first = first_index_of(&values, &key, &cmp);
    let last = last_index_of(&values, &key, &cmp);

    // INVARIANT 1: any returned index is in bounds
    for index in first.into_iter().chain(last) {
        assert!(index < values.len(), "index {} out of bounds", index);
    }

    if !input.sort {
        let _ = equal_range(&values, &key, &cmp);
        return;
    }

    // INVARIANT 2: sorted input agrees with a linear scan
    assert_eq!(first, values.iter().position(|&v| v == key));
    assert_eq!(last, values.iter().rposition(|&v| v == key));

    // INVARIANT 3: equal_range covers exactly the matching run
    let range = equal_range(&values, &key, &cmp);
    assert_eq!(range, first.zip(last).map(|(f, l)| f..=l));
});
