//! Shift check-ins repository

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::shift::{CreateShiftCheckin, ShiftCheckin, UpdateShiftCheckin},
};

/// Parse a YYYY-MM-DD day, surfacing a validation error to the caller
fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation(format!("Invalid checkin_date '{}' (use YYYY-MM-DD)", value)))
}

/// Parse an RFC 3339 instant, surfacing a validation error to the caller
fn parse_ts(value: &str) -> AppResult<DateTime<Utc>> {
    value
        .parse::<DateTime<Utc>>()
        .map_err(|_| AppError::Validation(format!("Invalid checkin_ts '{}' (use RFC 3339)", value)))
}

#[derive(Clone)]
pub struct ShiftsRepository {
    pool: Pool<Postgres>,
}

impl ShiftsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List every check-in row, ordered by date then timestamp
    pub async fn list_all(&self) -> AppResult<Vec<ShiftCheckin>> {
        let rows = sqlx::query_as::<_, ShiftCheckin>(
            "SELECT * FROM shift_checkins ORDER BY checkin_date, checkin_ts",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// List a user's check-ins for one calendar month (YYYY-MM)
    pub async fn list_by_month(&self, month: &str, user_id: i32) -> AppResult<Vec<ShiftCheckin>> {
        // Validate the month tag before it reaches the query
        NaiveDate::parse_from_str(&format!("{}-01", month), "%Y-%m-%d")
            .map_err(|_| AppError::Validation(format!("Invalid month '{}' (use YYYY-MM)", month)))?;

        let rows = sqlx::query_as::<_, ShiftCheckin>(
            r#"
            SELECT * FROM shift_checkins
            WHERE to_char(checkin_date, 'YYYY-MM') = $1 AND user_id = $2
            ORDER BY checkin_ts
            "#,
        )
        .bind(month)
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get a check-in by ID
    pub async fn get(&self, id: i64) -> AppResult<ShiftCheckin> {
        sqlx::query_as::<_, ShiftCheckin>("SELECT * FROM shift_checkins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Check-in {} not found", id)))
    }

    /// Create a check-in row
    pub async fn create(&self, data: &CreateShiftCheckin) -> AppResult<ShiftCheckin> {
        let date = parse_date(&data.checkin_date)?;
        let ts = parse_ts(&data.checkin_ts)?;

        let row = sqlx::query_as::<_, ShiftCheckin>(
            r#"
            INSERT INTO shift_checkins (checkin_date, checkin_ts, checkin_type, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(ts)
        .bind(&data.checkin_type)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(action = "insert", entity = "checkin", id = row.id, "Created check-in");
        Ok(row)
    }

    /// Update a check-in row
    pub async fn update(&self, id: i64, data: &UpdateShiftCheckin) -> AppResult<ShiftCheckin> {
        let date = data.checkin_date.as_deref().map(parse_date).transpose()?;
        let ts = data.checkin_ts.as_deref().map(parse_ts).transpose()?;

        let mut sets = Vec::new();
        let mut idx = 1;

        if date.is_some() { sets.push(format!("checkin_date = ${}", idx)); idx += 1; }
        if ts.is_some() { sets.push(format!("checkin_ts = ${}", idx)); idx += 1; }
        if data.checkin_type.is_some() { sets.push(format!("checkin_type = ${}", idx)); idx += 1; }

        if sets.is_empty() {
            // Nothing to change; return the row as-is (or NotFound)
            return self.get(id).await;
        }

        let query = format!(
            "UPDATE shift_checkins SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, ShiftCheckin>(&query);
        if let Some(d) = date { builder = builder.bind(d); }
        if let Some(t) = ts { builder = builder.bind(t); }
        if let Some(ref tag) = data.checkin_type { builder = builder.bind(tag); }

        let row = builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Check-in {} not found", id)))?;

        tracing::info!(action = "update", entity = "checkin", id, "Modified check-in");
        Ok(row)
    }

    /// Delete a check-in row
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM shift_checkins WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Check-in {} not found", id)));
        }

        tracing::info!(action = "delete", entity = "checkin", id, "Deleted check-in");
        Ok(())
    }
}
