//! The async adapter: [`AsyncHitCounter`].
//!
//! Wraps a [`HitCounter`] so callers can submit operations to a worker
//! pool and receive an awaitable completion handle, per spec §4.4. The
//! façade's critical sections are short and make no blocking calls of
//! their own, so dispatching them onto Tokio's blocking-thread pool via
//! `spawn_blocking` is sufficient — no bespoke worker-pool/channel
//! plumbing is needed, matching how `strata-executor` wraps the
//! database substrate as a stateless dispatcher.

use std::sync::Arc;

use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

use crate::config::CounterConfig;
use crate::counter::HitCounter;
use crate::error::{Error, Result};

/// Async wrapper around [`HitCounter`], stateless over the façade it
/// wraps: no ordering is guaranteed across concurrently submitted
/// operations beyond what `HitCounter` itself provides.
pub struct AsyncHitCounter {
    counter: Arc<HitCounter>,
    handle: Handle,
    // Present only when this adapter built (and therefore owns) its own
    // runtime; `None` when attached to an ambient one via `from_handle`.
    _owned_runtime: Option<Runtime>,
}

impl AsyncHitCounter {
    /// Wraps a fresh [`HitCounter`] with its own dedicated Tokio runtime,
    /// whose blocking-thread pool is capped at `config.worker_threads`
    /// (hardware execution contexts by default, per spec §4.4).
    pub fn new(config: CounterConfig) -> Result<Self> {
        let worker_threads = config.worker_threads;
        let counter = Arc::new(HitCounter::with_config(config));
        // No I/O or timer driver needed: every operation dispatched
        // through this adapter is a short, synchronous lock-guarded call
        // submitted via `spawn_blocking`, never an I/O future.
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .max_blocking_threads(worker_threads)
            .build()
            .map_err(|_| Error::AllocationFailure)?;
        let handle = runtime.handle().clone();
        Ok(AsyncHitCounter {
            counter,
            handle,
            _owned_runtime: Some(runtime),
        })
    }

    /// Attaches to an already-running Tokio runtime instead of building
    /// a dedicated one. The worker pool's size is then whatever that
    /// ambient runtime was configured with.
    pub fn from_handle(handle: Handle, counter: Arc<HitCounter>) -> Self {
        AsyncHitCounter {
            counter,
            handle,
            _owned_runtime: None,
        }
    }

    /// The Tokio runtime handle this adapter dispatches work onto, for
    /// callers that need to `block_on` a completion handle from
    /// non-async code.
    pub fn handle(&self) -> &Handle {
        &self.handle
    }

    /// Submits `add(domain)` to the worker pool.
    pub fn add(&self, domain: impl Into<String>) -> JoinHandle<()> {
        let counter = Arc::clone(&self.counter);
        let domain = domain.into();
        self.handle
            .spawn_blocking(move || counter.add(&domain))
    }

    /// Submits `top(n)` to the worker pool.
    pub fn top(&self, n: i64) -> JoinHandle<Result<Vec<Box<str>>>> {
        let counter = Arc::clone(&self.counter);
        self.handle.spawn_blocking(move || counter.top(n))
    }

    /// Submits `top_count(n)` to the worker pool.
    pub fn top_count(&self, n: i64) -> JoinHandle<Result<Vec<(Box<str>, u64)>>> {
        let counter = Arc::clone(&self.counter);
        self.handle.spawn_blocking(move || counter.top_count(n))
    }
}
