//! Audit trail for seat transitions.
//!
//! The ledger records one event per transition or rejection into an optional sink.
//! Sinks are shared by every seat and are called from inside a seat's critical
//! section, so they synchronise themselves and must not hold one lock across calls
//! for different seats.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::clock::now_ms;
use crate::util::serde::{ClaimantId, SeatId};

/// What happened to a seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    /// Seat moved to held.
    Hold,
    /// Hold finalized into a booking.
    Confirm,
    /// Hold ended manually.
    Release,
    /// Hold reverted by its expiry action.
    Expire,
    /// Operation refused without mutating the seat.
    Reject,
}

/// Audit event structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Event identifier (UUID v4).
    pub event_id: String,
    /// Affected seat.
    pub seat_id: SeatId,
    /// Claimant involved, when known.
    pub claimant: Option<String>,
    /// Action taken.
    pub action: AuditAction,
    /// Timestamp milliseconds.
    pub created_at_ms: u64,
    /// Additional context, such as the rejection reason.
    pub detail: Option<String>,
}

/// Audit sink abstraction.
pub trait AuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: AuditEvent);
}

/// Bounded in-memory sink. Clones share the same buffer, so a caller can keep
/// one clone for inspection after handing another to the ledger.
#[derive(Debug, Clone)]
pub struct InMemoryAuditSink {
    events: Arc<Mutex<VecDeque<AuditEvent>>>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink holding at most `max_events`, oldest dropped first.
    #[must_use]
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Arc::new(Mutex::new(VecDeque::with_capacity(max_events.min(1024)))),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.lock().iter().cloned().collect()
    }

    /// Events recorded for one seat, oldest first.
    #[must_use]
    pub fn events_for(&self, seat_id: SeatId) -> Vec<AuditEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.seat_id == seat_id)
            .cloned()
            .collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&self, event: AuditEvent) {
        if self.max_events == 0 {
            return;
        }
        let mut events = self.events.lock();
        if events.len() >= self.max_events {
            events.pop_front();
        }
        events.push_back(event);
    }
}

/// Build an audit event stamped with a fresh id and the current time.
#[must_use]
pub fn build_audit_event(
    seat_id: SeatId,
    claimant: Option<&ClaimantId>,
    action: AuditAction,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: Uuid::new_v4().to_string(),
        seat_id,
        claimant: claimant.map(ToString::to_string),
        action,
        created_at_ms: now_ms(),
        detail,
    }
}
