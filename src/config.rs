//! Construction-time configuration.
//!
//! This is a library, not a service: there is no runtime-reloadable
//! configuration, only the handful of knobs that matter when a
//! [`crate::counter::HitCounter`] or [`crate::async_adapter::AsyncHitCounter`]
//! is built.

/// Configuration for a [`crate::counter::HitCounter`] /
/// [`crate::async_adapter::AsyncHitCounter`].
#[derive(Debug, Clone)]
pub struct CounterConfig {
    /// Hint for the initial capacity of the entry index and arena, to
    /// avoid early reallocation when the approximate domain cardinality
    /// is known ahead of time. `0` means "no hint".
    pub initial_capacity: usize,

    /// Number of worker threads the async adapter's blocking pool uses.
    /// Defaults to the number of available hardware execution contexts,
    /// per spec §4.4 ("sized to the number of hardware execution
    /// contexts").
    pub worker_threads: usize,
}

impl Default for CounterConfig {
    fn default() -> Self {
        CounterConfig {
            initial_capacity: 0,
            worker_threads: std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1),
        }
    }
}
