//! Property-based tests for spec §8's universal properties (P1-P5, P7).
//!
//! P6 (structural invariants I1-I6) is checked by `#[cfg(test)]` unit
//! tests inside the crate, since it requires access to private internals
//! that a black-box integration test can't reach. P8 (concurrent safety)
//! lives in `concurrent.rs`.

use std::collections::HashMap;

use hitcounter::HitCounter;
use proptest::prelude::*;

fn domain_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["a", "b", "c", "d", "e"]).prop_map(String::from)
}

proptest! {
    /// P1 + P5: every observed domain shows up in `top_count(i64::MAX)`
    /// with a count equal to the number of `add` calls it received, and
    /// it is present after the very first call.
    #[test]
    fn p1_p5_counts_match_add_calls(domains in prop::collection::vec(domain_strategy(), 0..200)) {
        let counter = HitCounter::new();
        let mut expected: HashMap<String, u64> = HashMap::new();
        for domain in &domains {
            counter.add(domain);
            *expected.entry(domain.clone()).or_insert(0) += 1;
            // P5: immediately observable with count >= 1.
            let all = counter.top_count(i64::MAX).unwrap();
            let found = all.iter().find(|(d, _)| d.as_ref() == domain.as_str());
            prop_assert!(found.is_some());
            prop_assert!(found.unwrap().1 >= 1);
        }

        let all = counter.top_count(i64::MAX).unwrap();
        prop_assert_eq!(all.len(), expected.len());
        for (domain, count) in &all {
            prop_assert_eq!(expected.get(domain.as_ref()).copied(), Some(*count));
        }
    }

    /// P2 + P3: `top_count(n)` returns at most `n` entries, and is a
    /// non-increasing-count prefix of the full ranking.
    #[test]
    fn p2_p3_bounded_and_non_increasing(
        domains in prop::collection::vec(domain_strategy(), 0..200),
        n in 0i64..10,
    ) {
        let counter = HitCounter::new();
        for domain in &domains {
            counter.add(domain);
        }

        let result = counter.top_count(n).unwrap();
        prop_assert!(result.len() <= n as usize);

        for window in result.windows(2) {
            prop_assert!(window[0].1 >= window[1].1);
        }

        let full = counter.top_count(i64::MAX).unwrap();
        prop_assert_eq!(&result[..], &full[..result.len()]);
    }

    /// P4: `top(n)` is exactly the keys of `top_count(n)`, in order.
    #[test]
    fn p4_top_matches_top_count_keys(
        domains in prop::collection::vec(domain_strategy(), 0..200),
        n in 0i64..10,
    ) {
        let counter = HitCounter::new();
        for domain in &domains {
            counter.add(domain);
        }

        let top = counter.top(n).unwrap();
        let top_count = counter.top_count(n).unwrap();
        let keys: Vec<Box<str>> = top_count.into_iter().map(|(d, _)| d).collect();
        prop_assert_eq!(top, keys);
    }

    /// P7: replaying the same `add` sequence into a fresh counter yields
    /// the same set of (domain, count) pairs (order among equal counts
    /// may differ, so we compare as sets).
    #[test]
    fn p7_round_trip(domains in prop::collection::vec(domain_strategy(), 0..200)) {
        let first = HitCounter::new();
        let second = HitCounter::new();
        for domain in &domains {
            first.add(domain);
            second.add(domain);
        }

        let mut a: Vec<(Box<str>, u64)> = first.top_count(i64::MAX).unwrap();
        let mut b: Vec<(Box<str>, u64)> = second.top_count(i64::MAX).unwrap();
        a.sort();
        b.sort();
        prop_assert_eq!(a, b);
    }
}
