//! Absences repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::absence::{Absence, CreateAbsence},
};

#[derive(Clone)]
pub struct AbsencesRepository {
    pool: Pool<Postgres>,
}

impl AbsencesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List a user's absences plus the global ones (NULL user_id)
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Absence>> {
        let rows = sqlx::query_as::<_, Absence>(
            r#"
            SELECT * FROM absences
            WHERE user_id = $1 OR user_id IS NULL
            ORDER BY absence_date
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create an absence row
    pub async fn create(&self, data: &CreateAbsence) -> AppResult<Absence> {
        let date = NaiveDate::parse_from_str(&data.absence_date, "%Y-%m-%d")
            .map_err(|_| AppError::Validation("Invalid absence_date (use YYYY-MM-DD)".to_string()))?;

        let row = sqlx::query_as::<_, Absence>(
            r#"
            INSERT INTO absences (absence_date, absence_type, hours, comment, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(date)
        .bind(&data.absence_type)
        .bind(data.hours)
        .bind(&data.comment)
        .bind(data.user_id)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(action = "insert", entity = "absence", id = row.id, "Created absence");
        Ok(row)
    }

    /// Delete an absence row
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM absences WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Absence {} not found", id)));
        }

        tracing::info!(action = "delete", entity = "absence", id, "Deleted absence");
        Ok(())
    }
}
