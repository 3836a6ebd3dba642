//! Domain entries: the nodes of a bucket's entry list.

use crate::bucket::BucketId;

/// Stable index of a [`DomainEntry`] inside the entry arena.
///
/// Indices are never reused while an entry is reachable from
/// [`crate::index::EntryIndex`] — per spec, entries are never destroyed,
/// only moved between buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(pub(crate) usize);

/// A single counted domain, living in exactly one bucket's entry list.
///
/// `domain` is immutable once created. `prev`/`next` link this entry
/// within its current bucket's entry list; `bucket` is a back-reference
/// to that bucket, updated on every promotion.
#[derive(Debug)]
pub struct DomainEntry {
    pub(crate) domain: Box<str>,
    pub(crate) prev: Option<EntryId>,
    pub(crate) next: Option<EntryId>,
    pub(crate) bucket: BucketId,
}

impl DomainEntry {
    pub(crate) fn new(domain: Box<str>, bucket: BucketId) -> Self {
        DomainEntry {
            domain,
            prev: None,
            next: None,
            bucket,
        }
    }

    /// The domain string this entry counts hits for.
    pub fn domain(&self) -> &str {
        &self.domain
    }
}
