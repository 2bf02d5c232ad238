//! Expiry scheduling seam between the ledger and a timer facility.

use std::time::Instant;

/// Timer facility the ledger uses to revert unconfirmed holds.
///
/// The ledger calls [`Schedule::schedule_at`] while it holds the seat's lock,
/// so implementations must never run `action` synchronously from inside
/// `schedule_at`; the action takes that same lock when it fires.
pub trait Schedule: Send + Sync + 'static {
    /// Cancellation token for one scheduled action.
    type Handle: Send + 'static;

    /// Run `action` once, no earlier than `deadline`.
    fn schedule_at<F>(&self, deadline: Instant, action: F) -> Self::Handle
    where
        F: FnOnce() + Send + 'static;

    /// Prevent a scheduled action from running if it has not started yet.
    fn cancel(&self, handle: Self::Handle);
}
