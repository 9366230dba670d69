//! Shift and check-in models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

// ---------------------------------------------------------------------------
// ShiftCheckin
// ---------------------------------------------------------------------------

/// A single timestamped clock event, stored as one database row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ShiftCheckin {
    pub id: i64,
    /// Calendar day the event belongs to
    pub checkin_date: NaiveDate,
    /// Absolute instant of the clock event
    pub checkin_ts: DateTime<Utc>,
    /// Event tag, typically "in" or "out"
    pub checkin_type: String,
    /// Owning user
    pub user_id: i32,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create check-in request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateShiftCheckin {
    /// Calendar day (YYYY-MM-DD)
    pub checkin_date: String,
    /// Event instant (RFC 3339)
    pub checkin_ts: String,
    /// Event tag, typically "in" or "out"
    pub checkin_type: String,
    /// Owning user
    pub user_id: i32,
}

/// Update check-in request
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateShiftCheckin {
    /// Calendar day (YYYY-MM-DD)
    pub checkin_date: Option<String>,
    /// Event instant (RFC 3339)
    pub checkin_ts: Option<String>,
    /// Event tag
    pub checkin_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Shift
// ---------------------------------------------------------------------------

/// A reconstructed work period for one calendar day.
///
/// Shifts are never stored; they are rebuilt from check-in rows on every
/// read. The `id` is a synthetic per-response index and carries no meaning
/// across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Shift {
    pub id: i64,
    /// Day covered by the shift; every check-in below shares it
    pub date: NaiveDate,
    /// Seconds worked, summed over consecutive in/out pairs
    pub worked_seconds: i64,
    /// Check-ins sorted ascending by timestamp
    pub checkins: Vec<ShiftCheckin>,
}

/// Query parameters for shifts scoped to one user
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct ShiftMonthQuery {
    /// Owning user
    pub user_id: i32,
}
