//! Builders to construct a ledger from configuration.

pub mod ledger_builder;

#[cfg(feature = "tokio-runtime")]
pub use ledger_builder::ledger_from_env;
pub use ledger_builder::{build_ledger, LedgerBuilder};
