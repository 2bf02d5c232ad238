//! # Seat Ledger
//!
//! An in-memory seat-reservation arbitration engine.
//!
//! A fixed pool of seats is created at startup. Each seat moves independently
//! between **available**, **held** by one claimant, and **booked**. A hold that
//! is not confirmed within the configured time-to-live reverts to available on
//! its own.
//!
//! ## Guarantees
//!
//! - **At most one live hold and one booking per seat**: every transition is a
//!   read-decide-mutate step under that seat's own mutex.
//! - **No cross-seat contention**: operations on different seats never block each other.
//! - **Race-safe expiry**: an expiry action re-checks its hold under the seat lock
//!   and does nothing if the hold was confirmed, released, or replaced.
//! - **Typed rejections**: contention outcomes come back as [`core::LedgerError`]
//!   carrying the unchanged seat snapshot, never as panics.
//!
//! ## Example
//!
//! ```rust,ignore
//! use seat_ledger::config::LedgerConfig;
//! use seat_ledger::builders::build_ledger;
//! use seat_ledger::runtime::TokioExpiryScheduler;
//! use seat_ledger::util::ClaimantId;
//!
//! let cfg = LedgerConfig::from_env()?;
//! let ledger = build_ledger(&cfg, TokioExpiryScheduler::current()?)?;
//!
//! let alice = ClaimantId::new("alice");
//! ledger.hold(1, alice.clone())?;
//! ledger.confirm(1, Some(&alice))?;
//! ```
//!
//! The `runtime::api` module maps these results onto the HTTP shape a request
//! layer serves (`GET /seats`, `POST /lock/:id`, `POST /confirm/:id`,
//! `POST /unlock/:id`).

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Seat state machine, expiry scheduling seam, and audit trail.
pub mod core;
/// Configuration models for the ledger.
pub mod config;
/// Builders to construct a ledger from configuration.
pub mod builders;
/// Scheduler implementations and request/response mapping.
pub mod runtime;
/// Shared utilities.
pub mod util;
