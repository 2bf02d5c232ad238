//! Startup configuration for the ledger and its request layer.

pub mod ledger;

pub use ledger::LedgerConfig;
