//! Mediparc Field Service Management System
//!
//! A Rust implementation of the Mediparc field-service server, providing a
//! REST JSON API for managing client practices, installed medical equipment,
//! maintenance schedules, service reports and checklists.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod maintenance;
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
