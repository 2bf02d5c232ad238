//! Scheduler implementations and the transport-agnostic request surface.

pub mod api;
pub mod manual_scheduler;
#[cfg(feature = "tokio-runtime")]
pub mod tokio_scheduler;

pub use api::{
    confirm_seat, list_seats, lock_seat, resolve_claimant, unlock_seat, ApiResponse, MessageBody,
    SeatView,
};
pub use manual_scheduler::{ManualHandle, ManualScheduler};
#[cfg(feature = "tokio-runtime")]
pub use tokio_scheduler::TokioExpiryScheduler;
