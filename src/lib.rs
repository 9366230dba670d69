//! ShiftDesk Shift Tracking Server
//!
//! A Rust implementation of the ShiftDesk backend, providing a REST JSON API
//! for tracking employee work shifts (paired clock-in/clock-out events) and
//! absences.

use std::sync::Arc;

pub mod aggregate;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
