// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Boundary-finding binary search over an arbitrary comparator.
//!
//! `slice::binary_search_by` answers "is it here, and roughly where". Prefix
//! completion needs more: the *first* and *last* positions of a whole
//! equivalence class, where "equal" is whatever the caller's comparator says.
//! Everything sharing a prefix is one such class once the array is sorted.
//!
//! The functions here know nothing about entries or prefixes. They take a
//! slice, a key, and a [`Comparator`], and they are tested on plain integers.
//!
//! # Preconditions
//!
//! The slice must be sorted ascending under the same comparator. This is not
//! checked (it would cost O(n)); on an unsorted slice the result is unspecified
//! but the functions still never panic.
//!
//! # The adjacent-pair case
//!
//! Narrowing towards the *last* equal element moves `lo = mid` on a match. With
//! `mid = lo + (hi - lo) / 2`, a window of two (`hi - lo == 1`) gives
//! `mid == lo` forever. [`last_index_of`] resolves that window explicitly: if
//! `a[hi]` also matches it is the answer, otherwise `a[lo]` is.

use std::cmp::Ordering;
use std::ops::RangeInclusive;

/// A comparison strategy between slice elements and a search key.
///
/// Implemented for every `Fn(&T, &K) -> Ordering`, so closures and function
/// items such as `Ord::cmp` work directly. The orders in [`crate::order`]
/// implement it for [`crate::Entry`].
pub trait Comparator<T: ?Sized, K: ?Sized = T> {
    /// Compare a slice element against the key.
    fn compare(&self, element: &T, key: &K) -> Ordering;
}

impl<T: ?Sized, K: ?Sized, F> Comparator<T, K> for F
where
    F: Fn(&T, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, element: &T, key: &K) -> Ordering {
        self(element, key)
    }
}

/// Index of the first element equal to `key` under `cmp`, or `None`.
///
/// O(log n) comparisons.
pub fn first_index_of<T, K, C>(a: &[T], key: &K, cmp: &C) -> Option<usize>
where
    K: ?Sized,
    C: Comparator<T, K> + ?Sized,
{
    if a.is_empty() {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = a.len() - 1;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp.compare(&a[mid], key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                // Everything from lo onwards is already past the key.
                if mid == lo {
                    return None;
                }
                hi = mid - 1;
            }
            // Keep mid in the window, the first match may be further left.
            Ordering::Equal => hi = mid,
        }
    }

    (cmp.compare(&a[lo], key) == Ordering::Equal).then_some(lo)
}

/// Index of the last element equal to `key` under `cmp`, or `None`.
///
/// O(log n) comparisons. `None` exactly when [`first_index_of`] returns `None`
/// for the same inputs.
pub fn last_index_of<T, K, C>(a: &[T], key: &K, cmp: &C) -> Option<usize>
where
    K: ?Sized,
    C: Comparator<T, K> + ?Sized,
{
    if a.is_empty() {
        return None;
    }

    let mut lo = 0usize;
    let mut hi = a.len() - 1;

    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp.compare(&a[mid], key) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => {
                if mid == lo {
                    return None;
                }
                hi = mid - 1;
            }
            Ordering::Equal => {
                lo = mid;
                // Two candidates left and mid == lo would never move again.
                // a[lo] is a known match, so the answer is one of the two.
                if hi - lo == 1 {
                    let last = if cmp.compare(&a[hi], key) == Ordering::Equal {
                        hi
                    } else {
                        lo
                    };
                    return Some(last);
                }
            }
        }
    }

    (cmp.compare(&a[lo], key) == Ordering::Equal).then_some(lo)
}

/// Inclusive range of all elements equal to `key`, or `None` if there are none.
///
/// The upper bound is searched only to the right of the lower bound.
pub fn equal_range<T, K, C>(a: &[T], key: &K, cmp: &C) -> Option<RangeInclusive<usize>>
where
    K: ?Sized,
    C: Comparator<T, K> + ?Sized,
{
    let first = first_index_of(a, key, cmp)?;
    let last = first + last_index_of(&a[first..], key, cmp)?;
    Some(first..=last)
}
