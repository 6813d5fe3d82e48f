//! Ranking of match slices.

use super::common::{as_pairs, entry, pairs};
use termrank::PrefixIndex;

#[test]
fn heavier_entries_come_first_regardless_of_text() {
    let index = PrefixIndex::build(vec![
        entry("apple", 10),
        entry("application", 300),
        entry("apply", 50),
        entry("apt", 1),
        entry("banana", 1000),
    ]);

    assert_eq!(
        as_pairs(&index.matches("ap")),
        pairs(&[("application", 300), ("apply", 50), ("apple", 10), ("apt", 1)])
    );
    assert_eq!(
        as_pairs(&index.matches("appl")),
        pairs(&[("application", 300), ("apply", 50), ("apple", 10)])
    );
}

#[test]
fn ties_are_broken_by_text() {
    let index = PrefixIndex::build(vec![
        entry("tc", 7),
        entry("ta", 7),
        entry("tb", 9),
        entry("td", 7),
    ]);
    assert_eq!(
        as_pairs(&index.matches("t")),
        pairs(&[("tb", 9), ("ta", 7), ("tc", 7), ("td", 7)])
    );
}

#[test]
fn top_matches_is_a_prefix_of_matches() {
    let index = PrefixIndex::build((0..50u64).map(|i| entry(&format!("w{:02}", i), i * 7 % 13)));
    let all = index.matches("w");
    for k in [0, 1, 5, 50, 100] {
        let top = index.top_matches("w", k);
        assert_eq!(as_pairs(&top), as_pairs(&all[..k.min(all.len())]));
    }
}

#[test]
fn extreme_weights() {
    let index = PrefixIndex::build(vec![entry("a", 0), entry("ab", u64::MAX), entry("abc", 1)]);
    assert_eq!(
        as_pairs(&index.matches("a")),
        pairs(&[("ab", u64::MAX), ("abc", 1), ("a", 0)])
    );
}
