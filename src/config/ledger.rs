//! Ledger configuration: pool size, hold TTL, listening port.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Environment variable for the seat pool size.
pub const SEAT_COUNT_ENV: &str = "SEAT_COUNT";
/// Environment variable for the hold time-to-live in milliseconds.
pub const HOLD_TTL_MS_ENV: &str = "HOLD_TTL_MS";
/// Environment variable for the request layer's listening port.
pub const PORT_ENV: &str = "PORT";

/// Ledger configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Number of seats, numbered from 1.
    pub seat_count: u32,
    /// Hold time-to-live in milliseconds.
    pub hold_ttl_ms: u64,
    /// Port the request layer listens on. Not used by the ledger itself.
    pub port: u16,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            seat_count: 10,
            hold_ttl_ms: 60_000,
            port: 3000,
        }
    }
}

impl LedgerConfig {
    /// Hold time-to-live as a duration.
    #[must_use]
    pub const fn hold_ttl(&self) -> Duration {
        Duration::from_millis(self.hold_ttl_ms)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Describes the first invalid field.
    pub fn validate(&self) -> Result<(), String> {
        if self.seat_count == 0 {
            return Err("seat_count must be greater than 0".into());
        }
        if self.hold_ttl_ms == 0 {
            return Err("hold_ttl_ms must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Parse or validation failure.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from the process environment, reading a `.env` file first if present.
    ///
    /// # Errors
    ///
    /// A variable that is set but unparsable, or a value that fails validation.
    pub fn from_env() -> Result<Self, String> {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
            Err(e) if e.not_found() => tracing::debug!("no .env file"),
            Err(e) => return Err(format!("failed to read .env: {e}")),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset keys take defaults.
    ///
    /// # Errors
    ///
    /// Same as [`Self::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let cfg = Self {
            seat_count: parse_var(&lookup, SEAT_COUNT_ENV, defaults.seat_count)?,
            hold_ttl_ms: parse_var(&lookup, HOLD_TTL_MS_ENV, defaults.hold_ttl_ms)?,
            port: parse_var(&lookup, PORT_ENV, defaults.port)?,
        };
        cfg.validate()?;
        tracing::info!(
            seat_count = cfg.seat_count,
            hold_ttl_ms = cfg.hold_ttl_ms,
            port = cfg.port,
            "ledger configuration loaded"
        );
        Ok(cfg)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str, default: T) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| format!("{key}={raw:?} is invalid: {e}")),
    }
}
