//! Tests for utility functions

use seat_ledger::util::{now_ms, ClaimantId, Holder, SeatId};

#[test]
fn test_claimant_id() {
    let id = ClaimantId::new("user-1");
    assert_eq!(id.as_str(), "user-1");
    assert_eq!(id.to_string(), "user-1");
    assert_eq!(ClaimantId::from("user-1"), id);
}

#[test]
fn test_holder_from_optional_claimant() {
    assert_eq!(Holder::from(None::<ClaimantId>), Holder::Anonymous);
    assert_eq!(
        Holder::from(Some(ClaimantId::new("ann"))),
        Holder::Claimant(ClaimantId::new("ann"))
    );
}

#[test]
fn test_anonymous_holder_admits_anyone() {
    assert!(Holder::Anonymous.admits(&ClaimantId::new("mallory")));
    assert_eq!(Holder::Anonymous.claimant(), None);
    assert_eq!(Holder::Anonymous.to_string(), "anonymous");
}

#[test]
fn test_claimant_spelled_anonymous_is_not_anonymous() {
    let holder = Holder::from(ClaimantId::new("anonymous"));
    assert_ne!(holder, Holder::Anonymous);
    assert!(holder.admits(&ClaimantId::new("anonymous")));
    assert!(!holder.admits(&ClaimantId::new("mallory")));
}

#[test]
fn test_claimant_serializes_as_plain_string() {
    let json = serde_json::to_string(&ClaimantId::new("bob")).unwrap();
    assert_eq!(json, "\"bob\"");
}

#[test]
fn test_seat_id() {
    let id: SeatId = 12;
    assert_eq!(id, 12);
}

#[test]
fn test_now_ms_is_monotone_enough() {
    let a = now_ms();
    let b = now_ms();
    assert!(a > 0);
    assert!(b >= a);
}
