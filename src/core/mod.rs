//! Seat state machine, expiry scheduling seam, and audit trail.

pub mod audit;
pub mod error;
pub mod ledger;
pub mod scheduler;
pub mod seat;

pub use audit::{build_audit_event, AuditAction, AuditEvent, AuditSink, InMemoryAuditSink};
pub use error::{AppResult, LedgerError, LedgerResult};
pub use ledger::{LedgerStats, SeatLedger};
pub use scheduler::Schedule;
pub use seat::{SeatSnapshot, SeatStatus};
