//! Tests for audit sink

use seat_ledger::core::{build_audit_event, AuditAction, AuditSink, InMemoryAuditSink};
use seat_ledger::util::ClaimantId;

#[test]
fn test_in_memory_audit_sink() {
    let sink = InMemoryAuditSink::new(10);
    let alice = ClaimantId::new("alice");

    sink.record(build_audit_event(1, Some(&alice), AuditAction::Hold, None));
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].seat_id, 1);
    assert_eq!(events[0].claimant.as_deref(), Some("alice"));
    assert_eq!(events[0].action, AuditAction::Hold);
}

#[test]
fn test_audit_sink_overflow() {
    let sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event(1, None, AuditAction::Hold, None));
    sink.record(build_audit_event(2, None, AuditAction::Hold, None));
    sink.record(build_audit_event(3, None, AuditAction::Hold, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].seat_id, 2); // First one popped
    assert_eq!(events[1].seat_id, 3);
}

#[test]
fn test_clones_share_buffer() {
    let sink = InMemoryAuditSink::new(8);
    let writer = sink.clone();
    writer.record(build_audit_event(5, None, AuditAction::Release, None));
    writer.record(build_audit_event(6, None, AuditAction::Expire, None));

    assert_eq!(sink.events().len(), 2);
    assert_eq!(sink.events_for(6)[0].action, AuditAction::Expire);
}

#[test]
fn test_sink_records_from_many_threads() {
    let sink = InMemoryAuditSink::new(64);
    std::thread::scope(|s| {
        for seat in 1..=4 {
            let sink = &sink;
            s.spawn(move || {
                for _ in 0..8 {
                    sink.record(build_audit_event(seat, None, AuditAction::Hold, None));
                }
            });
        }
    });

    assert_eq!(sink.events().len(), 32);
    assert_eq!(sink.events_for(3).len(), 8);
}

#[test]
fn test_build_audit_event() {
    let bob = ClaimantId::new("bob");
    let event = build_audit_event(
        7,
        Some(&bob),
        AuditAction::Reject,
        Some("confirm: claimant mismatch".to_string()),
    );

    assert_eq!(event.seat_id, 7);
    assert_eq!(event.action, AuditAction::Reject);
    assert_eq!(event.detail.as_deref(), Some("confirm: claimant mismatch"));
    assert!(event.created_at_ms > 0);
    assert_eq!(event.event_id.len(), 36);

    let other = build_audit_event(7, None, AuditAction::Reject, None);
    assert_ne!(event.event_id, other.event_id);
}

#[test]
fn test_action_serializes_snake_case() {
    let json = serde_json::to_string(&AuditAction::Expire).unwrap();
    assert_eq!(json, "\"expire\"");
}
