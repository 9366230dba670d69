//! Absences service

use crate::{
    error::AppResult,
    models::absence::{Absence, CreateAbsence},
    repository::Repository,
};

#[derive(Clone)]
pub struct AbsencesService {
    repository: Repository,
}

impl AbsencesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Absence>> {
        self.repository.absences.list_for_user(user_id).await
    }

    pub async fn create(&self, data: &CreateAbsence) -> AppResult<Absence> {
        self.repository.absences.create(data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.absences.delete(id).await
    }
}
