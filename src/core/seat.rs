//! Seat records and their public projection.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::util::serde::{Holder, SeatId};

/// Externally visible status of a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    /// Free to be held.
    Available,
    /// Temporarily held by one claimant until confirmed, released or expired.
    Held,
    /// Permanently booked.
    Booked,
}

impl SeatStatus {
    /// Status string used by the HTTP request layer.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Held => "locked",
            Self::Booked => "booked",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Available => "available",
            Self::Held => "held",
            Self::Booked => "booked",
        };
        f.write_str(s)
    }
}

/// Immutable view of one seat. Never exposes the expiry handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSnapshot {
    /// Seat identifier.
    pub id: SeatId,
    /// Current status.
    pub status: SeatStatus,
    /// Current holder; `Some` only while held.
    pub holder: Option<Holder>,
    /// When the current hold was taken (ms since epoch); `Some` only while held.
    pub held_at_ms: Option<u64>,
}

impl SeatSnapshot {
    /// Whether hold fields are present exactly when the seat is held.
    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        let held = matches!(self.status, SeatStatus::Held);
        held == self.holder.is_some() && held == self.held_at_ms.is_some()
    }
}

/// A live hold. Holder, timestamp and expiry handle exist together or not at all.
#[derive(Debug)]
pub(crate) struct Hold<H> {
    pub(crate) holder: Holder,
    pub(crate) held_at_ms: u64,
    /// Distinguishes this hold from earlier holds on the same seat.
    pub(crate) generation: u64,
    pub(crate) expiry: H,
}

#[derive(Debug)]
pub(crate) enum SeatState<H> {
    Available,
    Held(Hold<H>),
    Booked,
}

/// Authoritative record for one seat, guarded by its own mutex in the ledger.
#[derive(Debug)]
pub(crate) struct SeatRecord<H> {
    id: SeatId,
    pub(crate) state: SeatState<H>,
    holds_granted: u64,
}

impl<H> SeatRecord<H> {
    pub(crate) const fn new(id: SeatId) -> Self {
        Self {
            id,
            state: SeatState::Available,
            holds_granted: 0,
        }
    }

    pub(crate) const fn id(&self) -> SeatId {
        self.id
    }

    pub(crate) fn status(&self) -> SeatStatus {
        match self.state {
            SeatState::Available => SeatStatus::Available,
            SeatState::Held(_) => SeatStatus::Held,
            SeatState::Booked => SeatStatus::Booked,
        }
    }

    pub(crate) fn holder(&self) -> Option<&Holder> {
        match &self.state {
            SeatState::Held(hold) => Some(&hold.holder),
            SeatState::Available | SeatState::Booked => None,
        }
    }

    pub(crate) fn held_generation(&self) -> Option<u64> {
        match &self.state {
            SeatState::Held(hold) => Some(hold.generation),
            SeatState::Available | SeatState::Booked => None,
        }
    }

    /// Allocate the generation for the next hold.
    pub(crate) fn next_generation(&mut self) -> u64 {
        self.holds_granted += 1;
        self.holds_granted
    }

    /// End the current hold, moving the seat to `next`. Leaves non-held seats untouched.
    pub(crate) fn take_hold(&mut self, next: SeatState<H>) -> Option<Hold<H>> {
        match std::mem::replace(&mut self.state, next) {
            SeatState::Held(hold) => Some(hold),
            other => {
                self.state = other;
                None
            }
        }
    }

    pub(crate) fn snapshot(&self) -> SeatSnapshot {
        match &self.state {
            SeatState::Held(hold) => SeatSnapshot {
                id: self.id,
                status: SeatStatus::Held,
                holder: Some(hold.holder.clone()),
                held_at_ms: Some(hold.held_at_ms),
            },
            SeatState::Available | SeatState::Booked => SeatSnapshot {
                id: self.id,
                status: self.status(),
                holder: None,
                held_at_ms: None,
            },
        }
    }
}
