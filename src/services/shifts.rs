//! Shifts service
//!
//! Read paths always go through [`aggregate_shifts`] so callers see derived
//! Shift objects, never raw check-in rows.

use crate::{
    aggregate::aggregate_shifts,
    error::{AppError, AppResult},
    models::shift::{CreateShiftCheckin, Shift, ShiftCheckin, UpdateShiftCheckin},
    repository::Repository,
};

#[derive(Clone)]
pub struct ShiftsService {
    repository: Repository,
}

impl ShiftsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All shifts for all users, rebuilt from every stored check-in
    pub async fn list_all(&self) -> AppResult<Vec<Shift>> {
        let checkins = self.repository.shifts.list_all().await?;
        Ok(aggregate_shifts(checkins))
    }

    /// One user's shifts for a calendar month (YYYY-MM)
    pub async fn list_by_month(&self, month: &str, user_id: i32) -> AppResult<Vec<Shift>> {
        let checkins = self.repository.shifts.list_by_month(month, user_id).await?;
        Ok(aggregate_shifts(checkins))
    }

    /// The shift containing one check-in: fetch the row, then rebuild the
    /// whole day it belongs to
    pub async fn get_by_checkin(&self, id: i64) -> AppResult<Shift> {
        let checkin = self.repository.shifts.get(id).await?;
        self.shift_for_day(checkin).await
    }

    /// Create a check-in and return the aggregated shift for its day
    pub async fn create_checkin(&self, data: &CreateShiftCheckin) -> AppResult<Shift> {
        let checkin = self.repository.shifts.create(data).await?;
        self.shift_for_day(checkin).await
    }

    /// Update a check-in and return the aggregated shift for its (possibly
    /// new) day
    pub async fn update_checkin(&self, id: i64, data: &UpdateShiftCheckin) -> AppResult<Shift> {
        let checkin = self.repository.shifts.update(id, data).await?;
        self.shift_for_day(checkin).await
    }

    pub async fn delete_checkin(&self, id: i64) -> AppResult<()> {
        self.repository.shifts.delete(id).await
    }

    /// Rebuild the shift for the day and user of a known check-in
    async fn shift_for_day(&self, checkin: ShiftCheckin) -> AppResult<Shift> {
        let month = checkin.checkin_date.format("%Y-%m").to_string();
        let siblings = self
            .repository
            .shifts
            .list_by_month(&month, checkin.user_id)
            .await?;

        let date = checkin.checkin_date;
        aggregate_shifts(siblings)
            .into_iter()
            .find(|shift| shift.date == date)
            .ok_or_else(|| {
                AppError::Internal(format!("Check-in {} vanished during aggregation", checkin.id))
            })
    }
}
