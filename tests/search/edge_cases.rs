//! Boundary cases: empty texts, duplicates, prefixes longer than entries,
//! multi-byte characters and NUL padding.

use super::common::{as_pairs, entry, pairs};
use termrank::PrefixIndex;

#[test]
fn empty_index_answers_everything_with_nothing() {
    let index = PrefixIndex::build(Vec::new());
    assert!(index.matches("").is_empty());
    assert!(index.matches("a").is_empty());
    assert_eq!(index.count(""), 0);
}

#[test]
fn empty_text_only_matches_empty_prefix() {
    let index = PrefixIndex::build(vec![entry("", 4), entry("a", 1)]);
    assert_eq!(as_pairs(&index.matches("")), pairs(&[("", 4), ("a", 1)]));
    assert_eq!(as_pairs(&index.matches("a")), pairs(&[("a", 1)]));
}

#[test]
fn duplicate_texts_are_all_returned() {
    let index = PrefixIndex::build(vec![entry("dup", 1), entry("dup", 3), entry("dupe", 2)]);
    assert_eq!(index.count("dup"), 3);
    assert_eq!(
        as_pairs(&index.matches("dup")),
        pairs(&[("dup", 3), ("dupe", 2), ("dup", 1)])
    );
}

#[test]
fn prefix_longer_than_every_entry() {
    let index = PrefixIndex::build(vec![entry("a", 1), entry("ab", 2), entry("b", 3)]);
    assert!(index.matches("abc").is_empty());
    assert_eq!(index.count("abc"), 0);
}

#[test]
fn shorter_entry_is_not_a_match_for_longer_prefix() {
    // "bea" padded to four characters is "bea\0", which is not "bear".
    let index = PrefixIndex::build(vec![entry("bea", 1), entry("bear", 2), entry("beard", 3)]);
    assert_eq!(as_pairs(&index.matches("bear")), pairs(&[("beard", 3), ("bear", 2)]));
}

#[test]
fn prefix_at_start_and_end_of_array() {
    let index = PrefixIndex::build(vec![
        entry("aa", 1),
        entry("ab", 2),
        entry("m", 0),
        entry("zy", 4),
        entry("zz", 3),
    ]);
    assert_eq!(index.count("a"), 2);
    assert_eq!(index.count("z"), 2);
    assert_eq!(as_pairs(&index.matches("z")), pairs(&[("zy", 4), ("zz", 3)]));
}

#[test]
fn multibyte_characters() {
    let index = PrefixIndex::build(vec![
        entry("日本", 5),
        entry("日本語", 9),
        entry("日曜日", 2),
        entry("にほん", 1),
    ]);
    assert_eq!(index.count("日"), 3);
    assert_eq!(as_pairs(&index.matches("日本")), pairs(&[("日本語", 9), ("日本", 5)]));
    assert!(index.matches("本").is_empty());
}

#[test]
fn nul_characters_in_text() {
    // A literal NUL is indistinguishable from padding, exactly like the
    // padded comparison defines it; it still must not break the range.
    let index = PrefixIndex::build(vec![entry("a", 1), entry("a\0", 2), entry("a\0b", 3), entry("ab", 4)]);
    assert_eq!(index.count("a"), 4);
    assert_eq!(index.count("ab"), 1);
    assert_eq!(index.count("a\0b"), 1);
}

#[test]
fn every_single_entry_is_findable_by_its_own_text() {
    let words = ["", "a", "aa", "ab", "b", "ba", "bab", "c"];
    let index = PrefixIndex::build(words.iter().enumerate().map(|(i, w)| entry(w, i as u64)));
    for word in words {
        let expected = words.iter().filter(|w| w.starts_with(word)).count();
        assert_eq!(index.count(word), expected, "prefix {:?}", word);
    }
}
