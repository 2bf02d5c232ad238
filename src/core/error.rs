//! Error types for ledger operations.

use thiserror::Error;

use crate::core::SeatSnapshot;
use crate::util::serde::SeatId;

/// Errors produced by the seat ledger.
///
/// The first four variants are expected outcomes of contention and carry the
/// unchanged state of the seat where one exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The seat id is outside the configured pool.
    #[error("seat {0} does not exist")]
    UnknownSeat(SeatId),
    /// Hold attempted on a seat that is held or booked.
    #[error("seat {} is not available ({})", .0.id, .0.status)]
    NotAvailable(SeatSnapshot),
    /// Confirm or release attempted on a seat that is not held.
    #[error("seat {} is not held ({})", .0.id, .0.status)]
    NotHeld(SeatSnapshot),
    /// Confirm attempted by someone other than the current holder.
    #[error("seat {} is held by another claimant", .0.id)]
    ClaimantMismatch(SeatSnapshot),
    /// Startup configuration was rejected.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LedgerError {
    /// The unchanged seat state attached to a rejection, if any.
    #[must_use]
    pub const fn snapshot(&self) -> Option<&SeatSnapshot> {
        match self {
            Self::NotAvailable(s) | Self::NotHeld(s) | Self::ClaimantMismatch(s) => Some(s),
            Self::UnknownSeat(_) | Self::InvalidConfig(_) => None,
        }
    }
}

/// Result of a ledger operation.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Application-facing result using anyhow for bootstrap code.
pub type AppResult<T> = Result<T, anyhow::Error>;
