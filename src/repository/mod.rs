//! Repository layer for database operations

pub mod absences;
pub mod shifts;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub shifts: shifts::ShiftsRepository,
    pub absences: absences::AbsencesRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            shifts: shifts::ShiftsRepository::new(pool.clone()),
            absences: absences::AbsencesRepository::new(pool.clone()),
            pool,
        }
    }
}
