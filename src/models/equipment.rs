//! Equipment catalog model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Catalog entry: a model of equipment the company installs and services
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct CatalogEquipment {
    pub id: i64,
    pub name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    /// Free-form category (sterilizer, compressor, imaging, ...)
    pub category: Option<String>,
    /// Default maintenance interval in years for new installations
    pub default_interval_years: Option<i64>,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create catalog entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCatalogEquipment {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, max = 20))]
    pub default_interval_years: Option<i64>,
    pub notes: Option<String>,
}

/// Update catalog entry request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCatalogEquipment {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 1, max = 20))]
    pub default_interval_years: Option<i64>,
    pub notes: Option<String>,
}
