//! Error types for the hit counter.
//!
//! We use `thiserror` for automatic `Display` and `std::error::Error`
//! implementations, matching the rest of this workspace's error style.

use thiserror::Error;

/// Result type alias for hit counter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types surfaced by the hit counter's public operations.
///
/// Only two kinds are reachable from normal operation (spec §7):
/// an out-of-range query argument, or an allocation failure while
/// growing the bucket/entry arenas. `PoisonedLock` exists for interface
/// symmetry with code built around a poisonable lock; this crate itself
/// uses `parking_lot::RwLock`, which cannot be poisoned, so that variant
/// is never constructed by the code in this repository.
#[derive(Debug, Error)]
pub enum Error {
    /// A top-K query argument was invalid (e.g. an out-of-range count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A new bucket or entry could not be allocated.
    ///
    /// State is left unchanged: the operation is aborted before any
    /// structural link is mutated.
    #[error("allocation failure while growing the hit counter")]
    AllocationFailure,

    /// The internal lock was poisoned by a panicking holder.
    #[error("internal lock poisoned")]
    PoisonedLock,
}
