//! API handlers for ShiftDesk REST endpoints

pub mod absences;
pub mod health;
pub mod openapi;
pub mod shifts;
