//! # hitcounter
//!
//! A frequency-ordered hit counter: an in-memory structure that records
//! unbounded-value increments of string keys and serves top-K queries by
//! frequency in O(K), with O(1) amortized increments.
//!
//! This is the in-process core of a domain-hit-counting service. Parsing
//! URLs into domains, the HTTP surface, wire serialization, and cross-node
//! sharding/merging all live outside this crate (spec §6) — `HitCounter`
//! only ever sees already-validated domain strings and returns in-memory
//! values.
//!
//! # Quick Start
//!
//! ```
//! use hitcounter::HitCounter;
//!
//! let counter = HitCounter::new();
//! counter.add("a.com");
//! counter.add("b.com");
//! counter.add("a.com");
//!
//! assert_eq!(counter.top(1).unwrap(), vec!["a.com".into()]);
//! assert_eq!(
//!     counter.top_count(2).unwrap(),
//!     vec![("a.com".into(), 2), ("b.com".into(), 1)]
//! );
//! ```
//!
//! # Algorithm
//!
//! The counter is a doubly-linked list of count buckets, strictly
//! increasing from a permanent floor bucket (`count == 1`) toward a top
//! bucket (the current maximum), each holding a doubly-linked list of
//! domain entries sharing that count. Incrementing a domain's count
//! walks its entry to the next bucket in O(1) amortized time, creating
//! that bucket on demand and reclaiming the old one if it emptied out.
//! Top-K queries walk the bucket list from the top down, which is O(K)
//! rather than the O(N log N) a hash-map-plus-sort approach would cost
//! per query.
//!
//! # Concurrency
//!
//! [`HitCounter`] serializes access with a single `parking_lot::RwLock`:
//! `add` takes the writer lock, `top`/`top_count` take the reader lock.
//! [`AsyncHitCounter`] submits operations to a worker pool and hands back
//! a completion handle for callers that want to offload the call from an
//! async context.

mod async_adapter;
mod bucket;
mod config;
mod counter;
mod entry;
mod error;
mod index;

pub use async_adapter::AsyncHitCounter;
pub use config::CounterConfig;
pub use counter::HitCounter;
pub use error::{Error, Result};
