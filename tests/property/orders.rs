//! Order properties the index relies on.
//!
//! The single sort only works because prefix order is a coarsening of natural
//! order: sorted by text implies sorted under every `PrefixOrder(r)`.

use super::common::{text_strategy, unicode_text_strategy};
use proptest::prelude::*;
use std::cmp::Ordering;
use termrank::{Comparator, Entry, NaturalOrder, PrefixOrder, ReverseWeightOrder};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn prop_prefix_order_coarsens_natural(
        a in unicode_text_strategy(),
        b in unicode_text_strategy(),
        r in 0usize..7
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert_ne!(PrefixOrder::new(r).compare_str(&lo, &hi), Ordering::Greater);
    }

    #[test]
    fn prop_prefix_order_antisymmetric(a in text_strategy(), b in text_strategy(), r in 0usize..7) {
        let order = PrefixOrder::new(r);
        prop_assert_eq!(order.compare_str(&a, &b), order.compare_str(&b, &a).reverse());
    }

    #[test]
    fn prop_long_window_is_natural_order(a in text_strategy(), b in text_strategy()) {
        // With a window past both lengths, the orders agree unless the texts
        // differ only by trailing NULs, which the text strategy never produces.
        let order = PrefixOrder::new(16);
        let x = Entry::new(a, 0);
        let y = Entry::new(b, 0);
        prop_assert_eq!(order.compare(&x, &y), NaturalOrder.compare(&x, &y));
    }

    #[test]
    fn prop_reverse_weight_is_reversed(wa in any::<u64>(), wb in any::<u64>()) {
        let x = Entry::new("x", wa);
        let y = Entry::new("y", wb);
        prop_assert_eq!(ReverseWeightOrder.compare(&x, &y), wb.cmp(&wa));
    }
}
