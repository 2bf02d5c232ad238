//! Tests for builder modules

use seat_ledger::builders::{build_ledger, LedgerBuilder};
use seat_ledger::config::LedgerConfig;
use seat_ledger::core::{AuditAction, InMemoryAuditSink, LedgerError};
use seat_ledger::runtime::ManualScheduler;
use seat_ledger::util::ClaimantId;

#[test]
fn test_ledger_builder_config() {
    let config = LedgerConfig {
        seat_count: 4,
        hold_ttl_ms: 250,
        port: 0,
    };
    let builder = LedgerBuilder::new(config.clone());
    assert_eq!(builder.config(), &config);

    let ledger = builder.build(ManualScheduler::new()).unwrap();
    assert_eq!(ledger.seat_count(), 4);
    assert_eq!(ledger.hold_ttl().as_millis(), 250);
}

#[test]
fn test_build_ledger_rejects_invalid_config() {
    let config = LedgerConfig {
        seat_count: 0,
        ..LedgerConfig::default()
    };
    let err = build_ledger(&config, ManualScheduler::new()).err().unwrap();
    assert!(matches!(err, LedgerError::InvalidConfig(_)));
}

#[test]
fn test_builder_attaches_audit() {
    let sink = InMemoryAuditSink::new(8);
    let ledger = LedgerBuilder::new(LedgerConfig::default())
        .with_audit(Box::new(sink.clone()))
        .build(ManualScheduler::new())
        .unwrap();

    ledger.hold(1, ClaimantId::new("alice")).unwrap();
    assert_eq!(sink.events()[0].action, AuditAction::Hold);
}
