// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: type-level invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Type-level wrapper** (`SortedEntries`) that can only be obtained by
//!    sorting or by validating sortedness. The index holds one, so "the master
//!    array is in natural order" is true by construction.
//!
//! 2. **Runtime contracts** that panic in debug builds when a search or ranking
//!    result breaks its postcondition. Zero-cost in release.

mod types;
pub mod contracts;

pub use types::*;
