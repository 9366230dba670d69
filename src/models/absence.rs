//! Absence models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A day (or partial day) of leave. Absences are not aggregated; a NULL
/// user_id marks a global absence visible to every user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Absence {
    pub id: i64,
    /// Day of the absence
    pub absence_date: NaiveDate,
    /// Kind of leave (vacation, sick, ...)
    pub absence_type: String,
    /// Hours of leave taken on that day
    pub hours: f64,
    pub comment: Option<String>,
    /// Owning user; NULL means the absence applies to everyone
    pub user_id: Option<i32>,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create absence request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAbsence {
    /// Day of the absence (YYYY-MM-DD)
    pub absence_date: String,
    /// Kind of leave (vacation, sick, ...)
    pub absence_type: String,
    /// Hours of leave taken on that day
    pub hours: f64,
    pub comment: Option<String>,
    /// Owning user
    pub user_id: i32,
}

/// Query parameters for listing absences
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AbsenceQuery {
    /// User whose absences to list (global absences are always included)
    pub user_id: i32,
}
