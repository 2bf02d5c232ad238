//! Tests for error types

use seat_ledger::core::{LedgerError, SeatSnapshot, SeatStatus};
use seat_ledger::util::{ClaimantId, Holder};

fn held_by(who: &str) -> SeatSnapshot {
    SeatSnapshot {
        id: 4,
        status: SeatStatus::Held,
        holder: Some(Holder::Claimant(ClaimantId::new(who))),
        held_at_ms: Some(1_000),
    }
}

#[test]
fn test_unknown_seat_error() {
    let err = LedgerError::UnknownSeat(9999);
    assert_eq!(format!("{}", err), "seat 9999 does not exist");
    assert!(err.snapshot().is_none());
}

#[test]
fn test_not_available_error() {
    let err = LedgerError::NotAvailable(held_by("alice"));
    assert_eq!(format!("{}", err), "seat 4 is not available (held)");
    assert_eq!(err.snapshot(), Some(&held_by("alice")));
}

#[test]
fn test_not_held_error() {
    let booked = SeatSnapshot {
        id: 3,
        status: SeatStatus::Booked,
        holder: None,
        held_at_ms: None,
    };
    let err = LedgerError::NotHeld(booked.clone());
    assert_eq!(format!("{}", err), "seat 3 is not held (booked)");
    assert_eq!(err.snapshot(), Some(&booked));
}

#[test]
fn test_claimant_mismatch_error() {
    let err = LedgerError::ClaimantMismatch(held_by("alice"));
    assert_eq!(format!("{}", err), "seat 4 is held by another claimant");
}

#[test]
fn test_invalid_config_error() {
    let err = LedgerError::InvalidConfig("seat_count must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid configuration: seat_count must be greater than 0"
    );
    assert!(err.snapshot().is_none());
}
