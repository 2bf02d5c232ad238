//! Builders to construct a seat ledger from configuration.

use crate::config::LedgerConfig;
use crate::core::{AuditSink, LedgerError, Schedule, SeatLedger};

/// Fluent builder for [`SeatLedger`].
pub struct LedgerBuilder {
    config: LedgerConfig,
    audit: Option<Box<dyn AuditSink>>,
}

impl LedgerBuilder {
    /// Start from a configuration.
    #[must_use]
    pub const fn new(config: LedgerConfig) -> Self {
        Self {
            config,
            audit: None,
        }
    }

    /// Configuration the ledger will be built from.
    #[must_use]
    pub const fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Record every transition into `audit`.
    #[must_use]
    pub fn with_audit(mut self, audit: Box<dyn AuditSink>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Validate the configuration and build the ledger on `scheduler`.
    ///
    /// # Errors
    ///
    /// [`LedgerError::InvalidConfig`] when validation fails.
    pub fn build<S: Schedule>(self, scheduler: S) -> Result<SeatLedger<S>, LedgerError> {
        self.config.validate().map_err(LedgerError::InvalidConfig)?;
        let ledger = SeatLedger::new(self.config.seat_count, self.config.hold_ttl(), scheduler)?;
        Ok(match self.audit {
            Some(audit) => ledger.with_audit(audit),
            None => ledger,
        })
    }
}

/// Build a ledger from configuration on the given scheduler.
///
/// # Errors
///
/// [`LedgerError::InvalidConfig`] when validation fails.
pub fn build_ledger<S: Schedule>(
    cfg: &LedgerConfig,
    scheduler: S,
) -> Result<SeatLedger<S>, LedgerError> {
    LedgerBuilder::new(cfg.clone()).build(scheduler)
}

/// Load configuration from the environment and build a ledger on the current
/// tokio runtime. Intended for process bootstrap.
///
/// # Errors
///
/// Configuration, runtime lookup, or validation failures, with context.
#[cfg(feature = "tokio-runtime")]
pub fn ledger_from_env(
) -> crate::core::AppResult<(LedgerConfig, SeatLedger<crate::runtime::TokioExpiryScheduler>)> {
    use anyhow::Context;

    let cfg = LedgerConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("loading ledger configuration")?;
    let scheduler = crate::runtime::TokioExpiryScheduler::current()
        .context("seat ledger requires a tokio runtime")?;
    let ledger = build_ledger(&cfg, scheduler).context("building seat ledger")?;
    Ok((cfg, ledger))
}
