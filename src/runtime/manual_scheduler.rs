//! Scheduler whose actions run only when the caller fires them.
//!
//! Useful for deterministic tests and for hosts that drive time from their own loop.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::core::Schedule;

type Action = Box<dyn FnOnce() + Send>;

struct Pending {
    deadline: Instant,
    action: Action,
}

#[derive(Default)]
struct ManualState {
    next_id: u64,
    pending: BTreeMap<u64, Pending>,
}

/// Cancellation token issued by [`ManualScheduler`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualHandle(u64);

/// Holds scheduled actions until [`ManualScheduler::fire_due`] or
/// [`ManualScheduler::fire_all`] runs them. Clones share the same queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of actions scheduled and not yet fired or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Run every action whose deadline is at or before `now`, in scheduling order.
    /// Returns how many ran.
    pub fn fire_due(&self, now: Instant) -> usize {
        let mut state = self.state.lock();
        let ids: Vec<u64> = state
            .pending
            .iter()
            .filter(|(_, p)| p.deadline <= now)
            .map(|(id, _)| *id)
            .collect();
        let due: Vec<Action> = ids
            .into_iter()
            .filter_map(|id| state.pending.remove(&id))
            .map(|p| p.action)
            .collect();
        drop(state);
        Self::run(due)
    }

    /// Run every pending action regardless of deadline. Returns how many ran.
    pub fn fire_all(&self) -> usize {
        let pending = std::mem::take(&mut self.state.lock().pending);
        Self::run(pending.into_values().map(|p| p.action).collect())
    }

    // Actions take seat locks, so they must run with our own lock released.
    fn run(actions: Vec<Action>) -> usize {
        let count = actions.len();
        for action in actions {
            action();
        }
        count
    }
}

impl Schedule for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule_at<F>(&self, deadline: Instant, action: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut state = self.state.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.pending.insert(
            id,
            Pending {
                deadline,
                action: Box::new(action),
            },
        );
        ManualHandle(id)
    }

    fn cancel(&self, handle: Self::Handle) {
        self.state.lock().pending.remove(&handle.0);
    }
}
