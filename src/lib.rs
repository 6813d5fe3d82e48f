// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranked prefix completion over a static set of weighted terms.
//!
//! Give it `(text, weight)` pairs once; ask it for every entry starting with a
//! prefix, heaviest first, as often as you like. One sort at build time, two
//! binary searches per query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  order.rs    │────▶│  index.rs    │
//! │  (Entry)    │     │ (Natural,    │     │ (PrefixIndex │
//! │             │     │  ReverseWt,  │     │  matches,    │
//! │             │     │  Prefix(r))  │     │  count)      │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  search.rs   │     │  verify/     │
//!                     │ (first/last  │     │ (SortedEntries,
//!                     │  index_of)   │     │  contracts)  │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! `search` is generic and knows nothing about entries. `order` supplies the
//! comparators that turn "shares this prefix" into an equivalence class of a
//! sorted array, and `index` glues the two together.
//!
//! # Usage
//!
//! ```
//! use termrank::{Entry, PrefixIndex};
//!
//! let index = PrefixIndex::build(vec![
//!     Entry::new("bear", 0),
//!     Entry::new("bearish", 2),
//!     Entry::new("beat", 1),
//!     Entry::new("cat", 5),
//! ]);
//!
//! let matches = index.matches("bea");
//! let texts: Vec<&str> = matches.iter().map(Entry::text).collect();
//! assert_eq!(texts, ["bearish", "beat", "bear"]);
//! assert_eq!(index.count("bea"), 3);
//! ```

mod error;
mod index;
pub mod load;
pub mod order;
pub mod search;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use error::{Error, Result};
pub use index::PrefixIndex;
pub use order::{NaturalOrder, PrefixOrder, ReverseWeightOrder};
pub use search::{equal_range, first_index_of, last_index_of, Comparator};
pub use types::Entry;
pub use verify::SortedEntries;
