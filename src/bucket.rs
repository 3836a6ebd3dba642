//! The frequency-ordered bucket list.
//!
//! `BucketList` is a doubly-linked list of [`CountBucket`]s, strictly
//! increasing in `count` from the floor (lowest, `count == 1`) to the top
//! (highest). Each bucket owns a doubly-linked list of [`DomainEntry`]
//! nodes sharing that count.
//!
//! Both lists are modeled as slot arenas addressed by stable indices
//! (`BucketId`, `EntryId`) rather than as a graph of owned pointers, per
//! the design note on cyclic structures without a tracing GC: entries are
//! never destroyed, so the entry arena only ever grows; buckets come and
//! go, so the bucket arena keeps a free list of reclaimed slots.

use crate::entry::{DomainEntry, EntryId};

/// Stable index of a [`CountBucket`] inside the bucket arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BucketId(pub(crate) usize);

/// A node in the bucket list: all entries here share `count` hits.
#[derive(Debug)]
pub struct CountBucket {
    pub(crate) count: u64,
    pub(crate) prev: Option<BucketId>,
    pub(crate) next: Option<BucketId>,
    pub(crate) entries_head: Option<EntryId>,
}

enum BucketSlot {
    Occupied(CountBucket),
    /// Reclaimed slot; carries the index of the next free slot.
    Free(Option<usize>),
}

/// Arena-backed bucket list plus the entry arena it owns.
///
/// This type is crate-private: [`crate::counter::HitCounter`] is the only
/// public entry point, and owns the single `parking_lot::RwLock` that
/// serializes all access to it.
pub(crate) struct BucketList {
    buckets: Vec<BucketSlot>,
    free_head: Option<usize>,
    entries: Vec<DomainEntry>,
    floor: BucketId,
    top: BucketId,
}

impl BucketList {
    /// Builds a fresh bucket list with only the permanent floor bucket
    /// (`count = 1`, no entries).
    pub(crate) fn new() -> Self {
        let floor_bucket = CountBucket {
            count: 1,
            prev: None,
            next: None,
            entries_head: None,
        };
        BucketList {
            buckets: vec![BucketSlot::Occupied(floor_bucket)],
            free_head: None,
            entries: Vec::new(),
            floor: BucketId(0),
            top: BucketId(0),
        }
    }

    pub(crate) fn with_entry_capacity(capacity: usize) -> Self {
        let mut list = Self::new();
        list.entries.reserve(capacity);
        list
    }

    /// Attaches a fresh entry at the head of the floor bucket's entry
    /// list. The floor bucket always exists, so this never allocates a
    /// bucket.
    pub(crate) fn insert_new(&mut self, domain: Box<str>) -> EntryId {
        let id = EntryId(self.entries.len());
        self.entries.push(DomainEntry::new(domain, self.floor));
        self.attach_entry_head(self.floor, id);
        id
    }

    /// Advances `entry_id` to `count + 1`, creating or reusing the
    /// destination bucket as needed. See spec §4.1 for the six-step
    /// algorithm this implements verbatim.
    pub(crate) fn promote(&mut self, entry_id: EntryId) {
        let b = self.entries[entry_id.0].bucket;
        let c = self.bucket(b).count;
        let b_next = self.bucket(b).next;
        let b_is_floor = b == self.floor;

        // Capture the current top's count before any bucket is freed --
        // once `b` is unlinked, reading through a stale `self.top` that
        // pointed at it would touch a reclaimed slot.
        let top_count_before = self.bucket(self.top).count;

        // 1. Detach the entry from its current bucket's entry list.
        self.detach_entry(entry_id);

        // 2. Decide whether `b` becomes empty and non-floor.
        let unlink_b = !b_is_floor && self.bucket(b).entries_head.is_none();

        // 3. Determine the destination bucket.
        let dest = match b_next {
            Some(bn) if self.bucket(bn).count == c + 1 => bn,
            _ => self.splice_new_bucket(b, b_next, c + 1),
        };

        // 4. Attach the entry at the destination's head.
        self.attach_entry_head(dest, entry_id);

        // 5. Unlink `b` only after the destination splice, so a freshly
        //    created destination is never orphaned by an earlier unlink.
        let top_invalidated = unlink_b && self.top == b;
        if unlink_b {
            self.unlink_bucket(b);
        }

        // 6. `top` moves to `dest` if it's now the highest bucket, or if
        //    the old `top` bucket was just reclaimed out from under it.
        if top_invalidated || self.bucket(dest).count > top_count_before {
            self.top = dest;
        }
    }

    /// Walks buckets from `top` toward `floor`, and within each bucket
    /// from `entries_head` forward, collecting up to `n` (entry, count)
    /// pairs. Cost is O(total domains visited), not O(n).
    pub(crate) fn traverse_top(&self, n: usize) -> Vec<(EntryId, u64)> {
        let mut out = Vec::with_capacity(n.min(self.entries.len()));
        let mut bucket_id = Some(self.top);
        while let Some(bid) = bucket_id {
            if out.len() >= n {
                break;
            }
            let bucket = self.bucket(bid);
            let mut entry_id = bucket.entries_head;
            while let Some(eid) = entry_id {
                if out.len() >= n {
                    break;
                }
                out.push((eid, bucket.count));
                entry_id = self.entries[eid.0].next;
            }
            bucket_id = bucket.prev;
        }
        out
    }

    pub(crate) fn domain(&self, id: EntryId) -> &str {
        self.entries[id.0].domain()
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.entries.len()
    }

    fn bucket(&self, id: BucketId) -> &CountBucket {
        match &self.buckets[id.0] {
            BucketSlot::Occupied(b) => b,
            BucketSlot::Free(_) => unreachable!("access to a reclaimed bucket slot"),
        }
    }

    fn bucket_mut(&mut self, id: BucketId) -> &mut CountBucket {
        match &mut self.buckets[id.0] {
            BucketSlot::Occupied(b) => b,
            BucketSlot::Free(_) => unreachable!("access to a reclaimed bucket slot"),
        }
    }

    fn alloc_bucket(&mut self, count: u64, prev: Option<BucketId>, next: Option<BucketId>) -> BucketId {
        let bucket = CountBucket {
            count,
            prev,
            next,
            entries_head: None,
        };
        if let Some(free_idx) = self.free_head {
            let next_free = match &self.buckets[free_idx] {
                BucketSlot::Free(nf) => *nf,
                BucketSlot::Occupied(_) => unreachable!("free list points at an occupied slot"),
            };
            self.buckets[free_idx] = BucketSlot::Occupied(bucket);
            self.free_head = next_free;
            BucketId(free_idx)
        } else {
            self.buckets.push(BucketSlot::Occupied(bucket));
            BucketId(self.buckets.len() - 1)
        }
    }

    fn free_bucket(&mut self, id: BucketId) {
        self.buckets[id.0] = BucketSlot::Free(self.free_head);
        self.free_head = Some(id.0);
    }

    fn splice_new_bucket(
        &mut self,
        prev_id: BucketId,
        next_id: Option<BucketId>,
        count: u64,
    ) -> BucketId {
        let new_id = self.alloc_bucket(count, Some(prev_id), next_id);
        self.bucket_mut(prev_id).next = Some(new_id);
        if let Some(nid) = next_id {
            self.bucket_mut(nid).prev = Some(new_id);
        }
        tracing::trace!(count, "created count bucket");
        new_id
    }

    fn unlink_bucket(&mut self, id: BucketId) {
        tracing::trace!(count = self.bucket(id).count, "reclaiming empty count bucket");
        let (prev, next) = {
            let b = self.bucket(id);
            (b.prev, b.next)
        };
        if let Some(p) = prev {
            self.bucket_mut(p).next = next;
        }
        if let Some(n) = next {
            self.bucket_mut(n).prev = prev;
        }
        self.free_bucket(id);
    }

    fn detach_entry(&mut self, entry_id: EntryId) {
        let (prev, next, bucket) = {
            let e = &self.entries[entry_id.0];
            (e.prev, e.next, e.bucket)
        };
        match prev {
            Some(p) => self.entries[p.0].next = next,
            None => self.bucket_mut(bucket).entries_head = next,
        }
        if let Some(n) = next {
            self.entries[n.0].prev = prev;
        }
    }

    fn attach_entry_head(&mut self, bucket_id: BucketId, entry_id: EntryId) {
        let old_head = self.bucket(bucket_id).entries_head;
        {
            let e = &mut self.entries[entry_id.0];
            e.prev = None;
            e.next = old_head;
            e.bucket = bucket_id;
        }
        if let Some(h) = old_head {
            self.entries[h.0].prev = Some(entry_id);
        }
        self.bucket_mut(bucket_id).entries_head = Some(entry_id);
    }

    /// Checks invariants I1, I4, I5 (I2/I3/I6 require the entry index and
    /// are checked alongside it in `counter.rs`'s tests). Only compiled
    /// into test builds.
    #[cfg(test)]
    pub(crate) fn debug_assert_invariants(&self) {
        let mut bucket_id = Some(self.floor);
        let mut prev_count = 0u64;
        let mut max_count = 0u64;
        let mut seen_floor = false;
        while let Some(bid) = bucket_id {
            let bucket = self.bucket(bid);
            assert!(
                bucket.count > prev_count,
                "I1 violated: counts must strictly increase toward top"
            );
            prev_count = bucket.count;
            max_count = bucket.count;
            if bid != self.floor {
                assert!(
                    bucket.entries_head.is_some(),
                    "I4 violated: non-floor bucket with no entries"
                );
            } else {
                seen_floor = true;
            }
            bucket_id = bucket.next;
        }
        assert!(seen_floor, "floor bucket must always be reachable");
        assert_eq!(
            self.bucket(self.top).count,
            max_count,
            "I5 violated: top must be the maximum-count bucket"
        );
    }
}
