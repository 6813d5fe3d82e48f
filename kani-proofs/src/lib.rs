// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the boundary-finding binary searches.
//!
//! The searches are copied from `src/search.rs` and specialised to `u8`
//! slices compared with `Ord::cmp`. Small symbolic arrays are enough to reach
//! every branch, including the two-element window in `last_index_of`.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: neither search indexes out of bounds on any input,
//!    sorted or not
//! 2. **Agreement**: on sorted input, both searches return exactly what a
//!    linear scan returns
//! 3. **Consistency**: `first` and `last` are both `None` or both `Some`,
//!    with `first <= last`

use std::cmp::Ordering;

/// Largest symbolic array the proofs explore.
pub const MAX_LEN: usize = 6;

// ============================================================================
// BOUNDARY SEARCHES (copied from src/search.rs)
// ============================================================================

pub fn first_index_of(a: &[u8], key: u8) -> Option<usize> {
    if a.is_empty() {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = a.len() - 1;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match a[mid].cmp(&key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == lo {
                    return None;
                }
                hi = mid - 1;
            }
            Ordering::Equal => hi = mid,
        }
    }

    (a[lo] == key).then_some(lo)
}

pub fn last_index_of(a: &[u8], key: u8) -> Option<usize> {
    if a.is_empty() {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = a.len() - 1;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match a[mid].cmp(&key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == lo {
                    return None;
                }
                hi = mid - 1;
            }
            Ordering::Equal => {
                lo = mid;
                if hi - lo == 1 {
                    return Some(if a[hi] == key { hi } else { lo });
                }
            }
        }
    }

    (a[lo] == key).then_some(lo)
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// A symbolic sorted array of length `0..=MAX_LEN`, as (buffer, len).
    fn any_sorted() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        for i in 0..MAX_LEN {
            a[i] = kani::any();
        }
        for i in 1..len {
            kani::assume(a[i - 1] <= a[i]);
        }
        (a, len)
    }

    /// Neither search panics, whatever the array holds.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_no_panic_on_any_input() {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut a = [0u8; MAX_LEN];
        for i in 0..MAX_LEN {
            a[i] = kani::any();
        }
        let key: u8 = kani::any();

        if let Some(i) = first_index_of(&a[..len], key) {
            kani::assert(i < len, "first index out of bounds");
        }
        if let Some(i) = last_index_of(&a[..len], key) {
            kani::assert(i < len, "last index out of bounds");
        }
    }

    /// On sorted input the searches agree with a linear scan.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_matches_linear_scan() {
        let (a, len) = any_sorted();
        let a = &a[..len];
        let key: u8 = kani::any();

        let expected_first = a.iter().position(|&x| x == key);
        let expected_last = a.iter().rposition(|&x| x == key);

        kani::assert(
            first_index_of(a, key) == expected_first,
            "first_index_of disagrees with linear scan",
        );
        kani::assert(
            last_index_of(a, key) == expected_last,
            "last_index_of disagrees with linear scan",
        );
    }

    /// Both present or both absent, and ordered when present.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_first_last_consistent() {
        let (a, len) = any_sorted();
        let a = &a[..len];
        let key: u8 = kani::any();

        match (first_index_of(a, key), last_index_of(a, key)) {
            (Some(first), Some(last)) => kani::assert(first <= last, "first after last"),
            (None, None) => {}
            _ => kani::assert(false, "first and last disagree on presence"),
        }
    }

    /// Two equal elements: the window where `mid == lo` never moves.
    #[kani::proof]
    fn verify_adjacent_pair() {
        let x: u8 = kani::any();
        let a = [x, x];
        kani::assert(first_index_of(&a, x) == Some(0), "pair first");
        kani::assert(last_index_of(&a, x) == Some(1), "pair last");
    }
}
