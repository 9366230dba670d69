//! Business logic services

pub mod absences;
pub mod shifts;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub shifts: shifts::ShiftsService,
    pub absences: absences::AbsencesService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            shifts: shifts::ShiftsService::new(repository.clone()),
            absences: absences::AbsencesService::new(repository),
        }
    }
}
