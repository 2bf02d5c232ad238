//! The seat ledger: a fixed registry of seats with race-free hold/confirm/release.
//!
//! Every seat sits behind its own `parking_lot::Mutex`, so the read-decide-mutate
//! step of each transition is atomic per seat while unrelated seats never contend.
//! The registry map is built once and never mutated, which lets lookups proceed
//! without any registry-wide lock.
//!
//! Expiry actions capture only the seat they guard and the generation of the hold
//! that scheduled them. When one fires it takes the seat lock and reverts the seat
//! only if that exact hold is still live; a confirm, release, or newer hold makes
//! it a no-op even if it fired before it could be cancelled.
//!
//! An attached audit sink is shared by all seats without a lock of its own here;
//! each seat records its events in transition order under its seat lock.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::audit::{build_audit_event, AuditAction, AuditSink};
use crate::core::seat::{Hold, SeatRecord, SeatState};
use crate::core::{LedgerError, LedgerResult, Schedule, SeatSnapshot, SeatStatus};
use crate::util::clock::now_ms;
use crate::util::serde::{ClaimantId, Holder, SeatId};

type SharedAudit = Arc<dyn AuditSink>;
type SharedRecord<H> = Arc<Mutex<SeatRecord<H>>>;

/// Per-status seat counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerStats {
    /// Number of seats in the pool.
    pub total: usize,
    /// Seats free to be held.
    pub available: usize,
    /// Seats under a live hold.
    pub held: usize,
    /// Seats permanently booked.
    pub booked: usize,
}

/// In-memory authority over a fixed pool of seats.
pub struct SeatLedger<S: Schedule> {
    seats: BTreeMap<SeatId, SharedRecord<S::Handle>>,
    hold_ttl: Duration,
    scheduler: S,
    audit: Option<SharedAudit>,
}

impl<S: Schedule> SeatLedger<S> {
    /// Create a ledger with seats `1..=seat_count`, all available.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::InvalidConfig`] if the pool is empty, the TTL is zero,
    /// or the TTL is too large to compute a deadline from.
    pub fn new(seat_count: u32, hold_ttl: Duration, scheduler: S) -> LedgerResult<Self> {
        if seat_count == 0 {
            return Err(LedgerError::InvalidConfig(
                "seat_count must be greater than 0".into(),
            ));
        }
        if hold_ttl.is_zero() {
            return Err(LedgerError::InvalidConfig(
                "hold_ttl must be greater than 0".into(),
            ));
        }
        if Instant::now().checked_add(hold_ttl).is_none() {
            return Err(LedgerError::InvalidConfig(format!(
                "hold_ttl of {hold_ttl:?} is too large"
            )));
        }

        let seats = (1..=seat_count)
            .map(|id| (id, Arc::new(Mutex::new(SeatRecord::new(id)))))
            .collect();
        tracing::info!(seat_count, hold_ttl_ms = %hold_ttl.as_millis(), "seat ledger ready");

        Ok(Self {
            seats,
            hold_ttl,
            scheduler,
            audit: None,
        })
    }

    /// Attach an audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(Arc::from(audit));
        self
    }

    /// How long a hold lives before it expires.
    #[must_use]
    pub const fn hold_ttl(&self) -> Duration {
        self.hold_ttl
    }

    /// Number of seats in the pool.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// The scheduler driving hold expiry.
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn record(&self, id: SeatId) -> LedgerResult<&SharedRecord<S::Handle>> {
        self.seats.get(&id).ok_or_else(|| {
            tracing::debug!(seat = id, "unknown seat");
            LedgerError::UnknownSeat(id)
        })
    }

    /// Place a hold on an available seat for `holder`, either a [`ClaimantId`]
    /// or [`Holder::Anonymous`].
    ///
    /// The hold reverts to available after [`Self::hold_ttl`] unless confirmed
    /// or released first.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UnknownSeat`] for ids outside the pool and
    /// [`LedgerError::NotAvailable`] if the seat is held or booked.
    pub fn hold(&self, id: SeatId, holder: impl Into<Holder>) -> LedgerResult<SeatSnapshot> {
        let holder = holder.into();
        let record = self.record(id)?;
        let mut seat = record.lock();

        if seat.status() != SeatStatus::Available {
            let snapshot = seat.snapshot();
            tracing::debug!(seat = id, status = %snapshot.status, claimant = %holder, "hold rejected");
            record_audit(
                self.audit.as_ref(),
                id,
                holder.claimant(),
                AuditAction::Reject,
                Some(format!("hold: seat {}", snapshot.status)),
            );
            return Err(LedgerError::NotAvailable(snapshot));
        }

        let Some(deadline) = Instant::now().checked_add(self.hold_ttl) else {
            return Err(LedgerError::InvalidConfig(format!(
                "hold_ttl of {:?} is too large",
                self.hold_ttl
            )));
        };
        let generation = seat.next_generation();
        let expiry = {
            let record = Arc::clone(record);
            let audit = self.audit.clone();
            self.scheduler.schedule_at(deadline, move || {
                expire_hold(&record, generation, audit.as_ref());
            })
        };

        seat.state = SeatState::Held(Hold {
            holder,
            held_at_ms: now_ms(),
            generation,
            expiry,
        });
        let snapshot = seat.snapshot();
        if let Some(holder) = &snapshot.holder {
            record_audit(self.audit.as_ref(), id, holder.claimant(), AuditAction::Hold, None);
            tracing::info!(seat = id, claimant = %holder, "seat held");
        }
        Ok(snapshot)
    }

    /// Turn a live hold into a booking.
    ///
    /// With `claimant` set, it must match the holder unless the hold is
    /// [`Holder::Anonymous`]. With `None`, any live hold is confirmed.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UnknownSeat`], [`LedgerError::NotHeld`] if there is no live
    /// hold, or [`LedgerError::ClaimantMismatch`] if someone else holds the seat.
    pub fn confirm(&self, id: SeatId, claimant: Option<&ClaimantId>) -> LedgerResult<SeatSnapshot> {
        let record = self.record(id)?;
        let mut seat = record.lock();

        let Some(holder) = seat.holder() else {
            let snapshot = seat.snapshot();
            tracing::debug!(seat = id, status = %snapshot.status, "confirm rejected: not held");
            record_audit(
                self.audit.as_ref(),
                id,
                claimant,
                AuditAction::Reject,
                Some(format!("confirm: seat {}", snapshot.status)),
            );
            return Err(LedgerError::NotHeld(snapshot));
        };

        if let Some(claimant) = claimant {
            if !holder.admits(claimant) {
                let snapshot = seat.snapshot();
                tracing::debug!(seat = id, holder = %holder, claimant = %claimant, "confirm rejected: claimant mismatch");
                record_audit(
                    self.audit.as_ref(),
                    id,
                    Some(claimant),
                    AuditAction::Reject,
                    Some("confirm: claimant mismatch".into()),
                );
                return Err(LedgerError::ClaimantMismatch(snapshot));
            }
        }

        if let Some(hold) = seat.take_hold(SeatState::Booked) {
            self.scheduler.cancel(hold.expiry);
            record_audit(
                self.audit.as_ref(),
                id,
                hold.holder.claimant(),
                AuditAction::Confirm,
                None,
            );
            tracing::info!(seat = id, holder = %hold.holder, "seat booked");
        }
        Ok(seat.snapshot())
    }

    /// End a live hold early and make the seat available again.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UnknownSeat`] or [`LedgerError::NotHeld`].
    pub fn release(&self, id: SeatId) -> LedgerResult<SeatSnapshot> {
        let record = self.record(id)?;
        let mut seat = record.lock();

        let Some(hold) = seat.take_hold(SeatState::Available) else {
            let snapshot = seat.snapshot();
            tracing::debug!(seat = id, status = %snapshot.status, "release rejected: not held");
            record_audit(
                self.audit.as_ref(),
                id,
                None,
                AuditAction::Reject,
                Some(format!("release: seat {}", snapshot.status)),
            );
            return Err(LedgerError::NotHeld(snapshot));
        };

        self.scheduler.cancel(hold.expiry);
        record_audit(
            self.audit.as_ref(),
            id,
            hold.holder.claimant(),
            AuditAction::Release,
            None,
        );
        tracing::info!(seat = id, holder = %hold.holder, "hold released");
        Ok(seat.snapshot())
    }

    /// Current state of one seat.
    ///
    /// # Errors
    ///
    /// [`LedgerError::UnknownSeat`] for ids outside the pool.
    pub fn seat(&self, id: SeatId) -> LedgerResult<SeatSnapshot> {
        Ok(self.record(id)?.lock().snapshot())
    }

    /// Every seat, ordered by id. Each entry is consistent on its own; seats are
    /// read one at a time, so the list is not a single atomic cut across seats.
    #[must_use]
    pub fn list_seats(&self) -> Vec<SeatSnapshot> {
        self.seats.values().map(|r| r.lock().snapshot()).collect()
    }

    /// Count seats by status.
    #[must_use]
    pub fn stats(&self) -> LedgerStats {
        self.seats.values().fold(
            LedgerStats {
                total: self.seats.len(),
                ..LedgerStats::default()
            },
            |mut stats, record| {
                match record.lock().status() {
                    SeatStatus::Available => stats.available += 1,
                    SeatStatus::Held => stats.held += 1,
                    SeatStatus::Booked => stats.booked += 1,
                }
                stats
            },
        )
    }
}

/// Body of a scheduled expiry. Reverts the seat only if the hold identified by
/// `generation` is still live. Returns whether it reverted anything.
fn expire_hold<H>(
    record: &Mutex<SeatRecord<H>>,
    generation: u64,
    audit: Option<&SharedAudit>,
) -> bool {
    let mut seat = record.lock();
    let id = seat.id();

    if seat.held_generation() != Some(generation) {
        tracing::debug!(seat = id, generation, "stale expiry ignored");
        return false;
    }

    match seat.take_hold(SeatState::Available) {
        Some(hold) => {
            record_audit(audit, id, hold.holder.claimant(), AuditAction::Expire, None);
            tracing::info!(seat = id, holder = %hold.holder, "hold expired, seat available");
            true
        }
        None => false,
    }
}

fn record_audit(
    audit: Option<&SharedAudit>,
    seat_id: SeatId,
    claimant: Option<&ClaimantId>,
    action: AuditAction,
    detail: Option<String>,
) {
    if let Some(sink) = audit {
        sink.record(build_audit_event(seat_id, claimant, action, detail));
    }
}
