//! P8: under `K` concurrent writers issuing distinct `add` streams, the
//! final counts match the multiset union of issued calls.

use std::collections::HashMap;
use std::sync::Arc;

use hitcounter::HitCounter;

#[test]
fn concurrent_writers_lose_no_updates() {
    const WRITERS: usize = 8;
    const ADDS_PER_WRITER: usize = 2_000;
    const DOMAINS: &[&str] = &["a.com", "b.com", "c.com", "d.com"];

    let counter = Arc::new(HitCounter::new());

    std::thread::scope(|scope| {
        for writer_id in 0..WRITERS {
            let counter = Arc::clone(&counter);
            scope.spawn(move || {
                for i in 0..ADDS_PER_WRITER {
                    let domain = DOMAINS[(writer_id + i) % DOMAINS.len()];
                    counter.add(domain);
                }
            });
        }
    });

    let observed: HashMap<Box<str>, u64> =
        counter.top_count(i64::MAX).unwrap().into_iter().collect();

    let mut expected: HashMap<&str, u64> = HashMap::new();
    for writer_id in 0..WRITERS {
        for i in 0..ADDS_PER_WRITER {
            *expected
                .entry(DOMAINS[(writer_id + i) % DOMAINS.len()])
                .or_insert(0) += 1;
        }
    }

    assert_eq!(observed.len(), expected.len());
    for (domain, count) in expected {
        assert_eq!(observed.get(domain), Some(&count));
    }
}

#[test]
fn concurrent_readers_and_writers_observe_consistent_snapshots() {
    let counter = Arc::new(HitCounter::new());
    for i in 0..100 {
        counter.add(&format!("seed{}", i % 10));
    }

    std::thread::scope(|scope| {
        for _ in 0..4 {
            let counter = Arc::clone(&counter);
            scope.spawn(move || {
                for i in 0..500 {
                    counter.add(&format!("writer{}", i % 5));
                }
            });
        }
        for _ in 0..4 {
            let counter = Arc::clone(&counter);
            scope.spawn(move || {
                for _ in 0..500 {
                    // A reader must never observe a torn/partial update:
                    // every count returned is a real, whole number of
                    // completed `add` calls, and the ranking it returns
                    // is internally consistent (non-increasing).
                    let snapshot = counter.top_count(i64::MAX).unwrap();
                    for window in snapshot.windows(2) {
                        assert!(window[0].1 >= window[1].1);
                    }
                }
            });
        }
    });
}
