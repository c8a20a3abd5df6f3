//! Service report model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Service report record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Report {
    pub id: i64,
    pub client_id: i64,
    /// User who wrote the report
    pub author_id: Option<i64>,
    pub title: String,
    pub report_date: Option<NaiveDate>,
    pub content: Option<String>,
    /// Path of the annotated PDF produced by the front-end, if any
    pub pdf_file: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create report request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReport {
    pub client_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    pub report_date: Option<NaiveDate>,
    pub content: Option<String>,
    pub pdf_file: Option<String>,
}

/// Update report request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateReport {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,
    pub report_date: Option<NaiveDate>,
    pub content: Option<String>,
    pub pdf_file: Option<String>,
}
