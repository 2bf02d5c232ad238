//! Serializable identifiers shared across the ledger and its request layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Seat identifier. Seats are numbered `1..=seat_count`.
pub type SeatId = u32;

/// Opaque identifier of the party requesting or holding a seat.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimantId(String);

impl ClaimantId {
    /// Wrap a caller-supplied identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClaimantId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ClaimantId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Whoever owns a live hold.
///
/// A hold taken without any identifier is `Anonymous`, which no claimant string can
/// spell. Any claimant may confirm an anonymous hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Holder {
    /// Hold placed without a claimant.
    Anonymous,
    /// Hold placed by an identified claimant.
    Claimant(ClaimantId),
}

impl Holder {
    /// The identified claimant, if any.
    #[must_use]
    pub const fn claimant(&self) -> Option<&ClaimantId> {
        match self {
            Self::Anonymous => None,
            Self::Claimant(id) => Some(id),
        }
    }

    /// Whether `claimant` may confirm a hold owned by `self`.
    #[must_use]
    pub fn admits(&self, claimant: &ClaimantId) -> bool {
        match self {
            Self::Anonymous => true,
            Self::Claimant(id) => id == claimant,
        }
    }
}

impl fmt::Display for Holder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Anonymous => f.write_str("anonymous"),
            Self::Claimant(id) => id.fmt(f),
        }
    }
}

impl From<ClaimantId> for Holder {
    fn from(value: ClaimantId) -> Self {
        Self::Claimant(value)
    }
}

impl From<Option<ClaimantId>> for Holder {
    fn from(value: Option<ClaimantId>) -> Self {
        value.map_or(Self::Anonymous, Self::Claimant)
    }
}
