//! Data models for the ShiftDesk API

pub mod absence;
pub mod shift;
