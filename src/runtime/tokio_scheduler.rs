//! Tokio-backed expiry scheduler.

use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

use crate::core::Schedule;

/// Runs each expiry as a tokio task that sleeps until its deadline.
/// Cancelling aborts the task.
#[derive(Clone)]
pub struct TokioExpiryScheduler {
    handle: Handle,
    /// Keeps an owned runtime alive for as long as any clone exists.
    _runtime: Option<Arc<Runtime>>,
}

impl TokioExpiryScheduler {
    /// Schedule onto an existing runtime.
    #[must_use]
    pub const fn new(handle: Handle) -> Self {
        Self {
            handle,
            _runtime: None,
        }
    }

    /// Schedule onto the runtime the caller is running in.
    ///
    /// # Errors
    ///
    /// Fails when called outside a tokio runtime.
    pub fn current() -> Result<Self, tokio::runtime::TryCurrentError> {
        Handle::try_current().map(Self::new)
    }

    /// Own a dedicated multi-threaded runtime with `worker_threads` workers.
    ///
    /// For hosts without a runtime of their own. The last clone must be dropped
    /// outside any async context.
    ///
    /// # Errors
    ///
    /// Propagates runtime construction failures.
    pub fn with_worker_threads(worker_threads: usize) -> Result<Self, std::io::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(worker_threads.max(1))
            .thread_name("seat-expiry")
            .enable_time()
            .build()?;
        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(runtime)),
        })
    }

    /// Dedicated runtime sized to the number of CPUs.
    ///
    /// # Errors
    ///
    /// Propagates runtime construction failures.
    pub fn dedicated() -> Result<Self, std::io::Error> {
        Self::with_worker_threads(num_cpus::get())
    }
}

impl Schedule for TokioExpiryScheduler {
    type Handle = JoinHandle<()>;

    fn schedule_at<F>(&self, deadline: Instant, action: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let deadline = tokio::time::Instant::from_std(deadline);
        self.handle.spawn(async move {
            tokio::time::sleep_until(deadline).await;
            action();
        })
    }

    fn cancel(&self, handle: Self::Handle) {
        handle.abort();
    }
}
