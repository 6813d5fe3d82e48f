// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for search and ranking.
//!
//! Debug-mode assertions over the postconditions of the engine. They are
//! compiled out of release builds (each function returns immediately when
//! `debug_assertions` is off) and catch algorithmic regressions whenever the
//! test suite runs.
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract                 | Property                                         |
//! |--------------------------|--------------------------------------------------|
//! | `check_sorted`           | master array is in natural order                 |
//! | `check_equal_range`      | range bounds match and are minimal / maximal     |
//! | `check_rank_order`       | weights never increase along a result list       |
//! | `check_prefix_sound`     | every result agrees with the prefix              |

use crate::order::PrefixOrder;
use crate::search::Comparator;
use crate::types::Entry;
use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// Check that entries are in natural order.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair out of order.
#[inline]
pub fn check_sorted(entries: &[Entry]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for i in 1..entries.len() {
        debug_assert!(
            entries[i - 1] <= entries[i],
            "Contract violation: Sorted - entries[{}] ('{}') > entries[{}] ('{}')",
            i - 1,
            entries[i - 1].text(),
            i,
            entries[i].text()
        );
    }
}

/// Check a bounded-search result.
///
/// When `range` is `Some(first..=last)`: both ends compare equal to `key`, the
/// element before `first` and the element after `last` do not. When `range` is
/// `None`, the neighbourhood is not scanned (that would be O(n)).
///
/// # Panics (debug builds only)
#[inline]
pub fn check_equal_range<T, K, C>(a: &[T], key: &K, cmp: &C, range: Option<&RangeInclusive<usize>>)
where
    K: ?Sized,
    C: Comparator<T, K> + ?Sized,
{
    if !cfg!(debug_assertions) {
        return;
    }
    let Some(range) = range else {
        return;
    };
    let (first, last) = (*range.start(), *range.end());

    debug_assert!(
        first <= last && last < a.len(),
        "Contract violation: EqualRange - {}..={} out of bounds for len {}",
        first,
        last,
        a.len()
    );
    debug_assert_eq!(
        cmp.compare(&a[first], key),
        Ordering::Equal,
        "Contract violation: EqualRange - a[{}] is not equal to key",
        first
    );
    debug_assert_eq!(
        cmp.compare(&a[last], key),
        Ordering::Equal,
        "Contract violation: EqualRange - a[{}] is not equal to key",
        last
    );
    if first > 0 {
        debug_assert_ne!(
            cmp.compare(&a[first - 1], key),
            Ordering::Equal,
            "Contract violation: EqualRange - first bound {} is not minimal",
            first
        );
    }
    if last + 1 < a.len() {
        debug_assert_ne!(
            cmp.compare(&a[last + 1], key),
            Ordering::Equal,
            "Contract violation: EqualRange - last bound {} is not maximal",
            last
        );
    }
}

/// Check that weights are non-increasing.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_rank_order(results: &[Entry]) {
    if !cfg!(debug_assertions) {
        return;
    }
    for i in 1..results.len() {
        debug_assert!(
            results[i - 1].weight() >= results[i].weight(),
            "Contract violation: RankOrder - results[{}] weight {} < results[{}] weight {}",
            i - 1,
            results[i - 1].weight(),
            i,
            results[i].weight()
        );
    }
}

/// Check that every result agrees with `prefix` on its first characters.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_prefix_sound(results: &[Entry], prefix: &str) {
    if !cfg!(debug_assertions) {
        return;
    }
    let order = PrefixOrder::new(prefix.chars().count());
    for (i, entry) in results.iter().enumerate() {
        debug_assert_eq!(
            order.compare_str(entry.text(), prefix),
            Ordering::Equal,
            "Contract violation: PrefixSound - results[{}] ('{}') does not start with '{}'",
            i,
            entry.text(),
            prefix
        );
    }
}
