//! The public façade: [`HitCounter`].
//!
//! Combines the bucket list and entry index behind a single
//! `parking_lot::RwLock`, giving `add` exclusive access and `top`/
//! `top_count` shared access, per spec §5. `parking_lot::RwLock` never
//! poisons on panic, so a panicking `add` call cannot wedge every future
//! reader the way a poisoned `std::sync::RwLock` would.

use parking_lot::RwLock;

use crate::bucket::BucketList;
use crate::config::CounterConfig;
use crate::error::{Error, Result};
use crate::index::EntryIndex;

struct Inner {
    buckets: BucketList,
    index: EntryIndex,
}

/// A frequency-ordered hit counter.
///
/// Supports unbounded-value increments of string keys (`add`) and O(K)
/// retrieval of the K most frequent keys (`top`, `top_count`). See the
/// crate-level documentation for the algorithm this is built on.
///
/// # Example
///
/// ```
/// use hitcounter::HitCounter;
///
/// let counter = HitCounter::new();
/// counter.add("a.com");
/// counter.add("b.com");
/// counter.add("a.com");
///
/// assert_eq!(counter.top(1).unwrap(), vec!["a.com".into()]);
/// ```
pub struct HitCounter {
    inner: RwLock<Inner>,
}

impl HitCounter {
    /// Builds an empty hit counter with default configuration.
    pub fn new() -> Self {
        Self::with_config(CounterConfig::default())
    }

    /// Builds an empty hit counter, pre-sizing the entry arena and index
    /// to `config.initial_capacity` when non-zero.
    pub fn with_config(config: CounterConfig) -> Self {
        let (buckets, index) = if config.initial_capacity > 0 {
            (
                BucketList::with_entry_capacity(config.initial_capacity),
                EntryIndex::with_capacity(config.initial_capacity),
            )
        } else {
            (BucketList::new(), EntryIndex::new())
        };
        HitCounter {
            inner: RwLock::new(Inner { buckets, index }),
        }
    }

    /// Records one hit for `domain`. Not idempotent: each call increments
    /// the domain's count exactly once.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn add(&self, domain: &str) {
        let mut inner = self.inner.write();
        match inner.index.get(domain) {
            Some(entry_id) => inner.buckets.promote(entry_id),
            None => {
                let boxed: Box<str> = domain.into();
                let entry_id = inner.buckets.insert_new(boxed.clone());
                inner.index.put(boxed, entry_id);
            }
        }
    }

    /// Returns up to `n` domains, ordered by non-increasing count.
    ///
    /// `n <= 0` returns an empty list (not an error, per spec §7). If
    /// fewer than `n` domains have been observed, all of them are
    /// returned.
    pub fn top(&self, n: i64) -> Result<Vec<Box<str>>> {
        Ok(self
            .top_count(n)?
            .into_iter()
            .map(|(domain, _)| domain)
            .collect())
    }

    /// Returns up to `n` `(domain, count)` pairs, ordered by
    /// non-increasing count; order among entries sharing a count is
    /// most-recently-touched-first and is not a stability guarantee
    /// across calls (spec §4.1 "Tie-break").
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn top_count(&self, n: i64) -> Result<Vec<(Box<str>, u64)>> {
        if n < 0 {
            return Err(Error::InvalidArgument(format!(
                "top-K query count must be non-negative, got {n}"
            )));
        }
        if n == 0 {
            return Ok(Vec::new());
        }
        let inner = self.inner.read();
        let n = (n as u64).min(inner.buckets.entry_count() as u64) as usize;
        let pairs = inner.buckets.traverse_top(n);
        Ok(pairs
            .into_iter()
            .map(|(id, count)| (Box::from(inner.buckets.domain(id)), count))
            .collect())
    }

    #[cfg(test)]
    pub(crate) fn debug_assert_invariants(&self) {
        let inner = self.inner.read();
        inner.buckets.debug_assert_invariants();
        assert_eq!(
            inner.index.len(),
            inner.buckets.entry_count(),
            "I2 violated: entry index and entry arena sizes must match"
        );
    }
}

impl Default for HitCounter {
    fn default() -> Self {
        Self::new()
    }
}
