//! Checklist template model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Checklist template record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Checklist {
    pub id: i64,
    pub name: String,
    pub crea_date: Option<DateTime<Utc>>,
}

/// One line of a checklist template
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ChecklistItem {
    pub id: i64,
    pub checklist_id: i64,
    pub label: String,
    pub position: i64,
}

/// Checklist with its items
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChecklistDetails {
    #[serde(flatten)]
    pub checklist: Checklist,
    pub items: Vec<ChecklistItem>,
}

/// Create checklist request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChecklist {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Initial items, in order
    #[serde(default)]
    pub items: Vec<String>,
}

/// Update checklist request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateChecklist {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

/// Add checklist item request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateChecklistItem {
    #[validate(length(min = 1, max = 512))]
    pub label: String,
    /// Appended at the end when omitted
    pub position: Option<i64>,
}
