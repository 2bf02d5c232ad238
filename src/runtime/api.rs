//! API-facing request/response models.
//!
//! Maps ledger results onto the status codes and messages the HTTP layer
//! serves. Routing and transport stay with the caller.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{LedgerError, Schedule, SeatLedger, SeatSnapshot};
use crate::util::serde::{ClaimantId, Holder, SeatId};

/// HTTP 200.
pub const STATUS_OK: u16 = 200;
/// HTTP 400.
pub const STATUS_BAD_REQUEST: u16 = 400;
/// HTTP 404.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Status code plus JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: T,
}

impl<T> ApiResponse<T> {
    const fn new(status: u16, body: T) -> Self {
        Self { status, body }
    }

    /// Whether the status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// `{ "message": ... }` body returned by the mutating calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    /// Human-readable outcome.
    pub message: String,
}

impl MessageBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One entry of the `GET /seats` map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    /// `available`, `locked` or `booked`.
    pub status: String,
    /// Current holder, or null.
    pub holder: Option<String>,
    /// Hold timestamp in ms since epoch, or null.
    pub held_at: Option<u64>,
}

impl From<&SeatSnapshot> for SeatView {
    fn from(s: &SeatSnapshot) -> Self {
        Self {
            status: s.status.wire_name().to_string(),
            holder: s.holder.as_ref().map(ToString::to_string),
            held_at: s.held_at_ms,
        }
    }
}

/// Pick the claimant from the first non-empty source: header, then body, then query.
#[must_use]
pub fn resolve_claimant(
    header: Option<&str>,
    body: Option<&str>,
    query: Option<&str>,
) -> Option<ClaimantId> {
    [header, body, query]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .map(ClaimantId::from)
}

/// Seat ids are plain decimal digits without sign, padding or leading zeros.
fn parse_seat_id(raw: &str) -> Option<SeatId> {
    let canonical = !raw.is_empty()
        && raw.bytes().all(|b| b.is_ascii_digit())
        && (raw.len() == 1 || !raw.starts_with('0'));
    if canonical {
        raw.parse().ok()
    } else {
        None
    }
}

fn unknown_seat(raw: &str) -> MessageBody {
    MessageBody::new(format!("Seat {raw} does not exist."))
}

/// `GET /seats`: every seat keyed by id, in id order.
#[must_use]
pub fn list_seats<S: Schedule>(ledger: &SeatLedger<S>) -> ApiResponse<BTreeMap<SeatId, SeatView>> {
    let view = ledger
        .list_seats()
        .iter()
        .map(|s| (s.id, SeatView::from(s)))
        .collect();
    ApiResponse::new(STATUS_OK, view)
}

/// `POST /lock/:id`. A missing claimant holds the seat anonymously.
#[must_use]
pub fn lock_seat<S: Schedule>(
    ledger: &SeatLedger<S>,
    raw_id: &str,
    claimant: Option<ClaimantId>,
) -> ApiResponse<MessageBody> {
    let Some(id) = parse_seat_id(raw_id) else {
        return ApiResponse::new(STATUS_BAD_REQUEST, unknown_seat(raw_id));
    };
    match ledger.hold(id, Holder::from(claimant)) {
        Ok(_) => ApiResponse::new(
            STATUS_OK,
            MessageBody::new(format!(
                "Seat {id} locked successfully. Confirm within {} seconds.",
                ledger.hold_ttl().as_secs_f64()
            )),
        ),
        Err(LedgerError::NotAvailable(snapshot)) => {
            let message = match snapshot.holder {
                Some(Holder::Claimant(holder)) => {
                    format!("Seat {id} is currently locked by {holder}.")
                }
                Some(Holder::Anonymous) => {
                    format!("Seat {id} is currently locked by another user.")
                }
                None => format!("Seat {id} is already booked."),
            };
            ApiResponse::new(STATUS_BAD_REQUEST, MessageBody::new(message))
        }
        Err(err) => rejection(raw_id, &err),
    }
}

/// `POST /confirm/:id`.
#[must_use]
pub fn confirm_seat<S: Schedule>(
    ledger: &SeatLedger<S>,
    raw_id: &str,
    claimant: Option<ClaimantId>,
) -> ApiResponse<MessageBody> {
    let Some(id) = parse_seat_id(raw_id) else {
        return ApiResponse::new(STATUS_BAD_REQUEST, unknown_seat(raw_id));
    };

    match ledger.confirm(id, claimant.as_ref()) {
        Ok(_) => ApiResponse::new(
            STATUS_OK,
            MessageBody::new(format!("Seat {id} booked successfully!")),
        ),
        Err(LedgerError::NotHeld(_)) => ApiResponse::new(
            STATUS_BAD_REQUEST,
            MessageBody::new("Seat is not locked and cannot be booked"),
        ),
        Err(LedgerError::ClaimantMismatch(_)) => ApiResponse::new(
            STATUS_BAD_REQUEST,
            MessageBody::new("Seat locked by another user and cannot be confirmed by you."),
        ),
        Err(err) => rejection(raw_id, &err),
    }
}

/// `POST /unlock/:id`. Unknown seats answer 404.
#[must_use]
pub fn unlock_seat<S: Schedule>(ledger: &SeatLedger<S>, raw_id: &str) -> ApiResponse<MessageBody> {
    let Some(id) = parse_seat_id(raw_id) else {
        return ApiResponse::new(STATUS_NOT_FOUND, unknown_seat(raw_id));
    };

    match ledger.release(id) {
        Ok(_) => ApiResponse::new(
            STATUS_OK,
            MessageBody::new(format!("Seat {id} unlocked and returned to available.")),
        ),
        Err(LedgerError::UnknownSeat(_)) => {
            ApiResponse::new(STATUS_NOT_FOUND, unknown_seat(raw_id))
        }
        Err(LedgerError::NotHeld(_)) => ApiResponse::new(
            STATUS_BAD_REQUEST,
            MessageBody::new(format!("Seat {id} is not locked.")),
        ),
        Err(err) => rejection(raw_id, &err),
    }
}

fn rejection(raw_id: &str, err: &LedgerError) -> ApiResponse<MessageBody> {
    let body = match err {
        LedgerError::UnknownSeat(_) => unknown_seat(raw_id),
        other => MessageBody::new(other.to_string()),
    };
    ApiResponse::new(STATUS_BAD_REQUEST, body)
}
