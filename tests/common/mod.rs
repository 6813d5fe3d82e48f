//! Shared test utilities and fixtures.

#![allow(dead_code)]

use proptest::prelude::*;
use termrank::{Entry, PrefixIndex};

// Re-export canonical test utilities from termrank::testing
pub use termrank::testing::{as_pairs, entry, sample_entries};

/// Index over the four-entry sample set.
pub fn sample_index() -> PrefixIndex {
    PrefixIndex::build(sample_entries())
}

/// `(text, weight)` pairs with string literals, for `assert_eq!` against results.
pub fn pairs(items: &[(&str, u64)]) -> Vec<(String, u64)> {
    items.iter().map(|(t, w)| (t.to_string(), *w)).collect()
}

// ============================================================================
// STRATEGIES
// ============================================================================

/// Short texts over a tiny alphabet so prefixes collide often.
pub fn text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ab]{0,5}").unwrap()
}

/// Texts mixing ASCII, multi-byte characters and the NUL character.
pub fn unicode_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec!['a', 'b', 'é', 'ž', '\u{0}', 'テ']),
        0..5,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

pub fn entry_strategy() -> impl Strategy<Value = Entry> {
    (text_strategy(), 0u64..20).prop_map(|(text, weight)| Entry::new(text, weight))
}

pub fn unicode_entry_strategy() -> impl Strategy<Value = Entry> {
    (unicode_text_strategy(), any::<u64>()).prop_map(|(text, weight)| Entry::new(text, weight))
}

pub fn entries_strategy() -> impl Strategy<Value = Vec<Entry>> {
    prop::collection::vec(entry_strategy(), 0..40)
}

pub fn prefix_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[abc]{0,4}").unwrap()
}
