//! Equipment installation model (one physical unit at one client site)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::maintenance::Tier;

/// Equipment installation record, as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Installation {
    pub id: i64,
    pub client_id: i64,
    /// Reference into the equipment catalog
    pub equipment_id: i64,
    pub serial_number: Option<String>,
    pub installed_at: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    /// Years between scheduled services
    pub maintenance_interval: i64,
    /// Derived from last_maintenance_date + maintenance_interval; stored
    /// denormalized, recomputed on read paths where freshness matters
    pub next_maintenance_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Installation joined with its catalog entry and classified against a
/// reference date (detail and list views)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InstallationDetails {
    pub id: i64,
    pub client_id: i64,
    pub equipment_id: i64,
    pub equipment_name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub installed_at: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: i64,
    pub next_maintenance_date: Option<NaiveDate>,
    pub status: Tier,
    /// Days overdue when expired, days remaining otherwise
    pub days_delta: Option<i64>,
    pub notes: Option<String>,
}

/// Installation row joined with catalog fields, before classification
#[derive(Debug, Clone, FromRow)]
pub struct InstallationRow {
    pub id: i64,
    pub client_id: i64,
    pub equipment_id: i64,
    pub equipment_name: String,
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub installed_at: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    pub maintenance_interval: i64,
    pub next_maintenance_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Create installation request (attach catalog equipment to a client)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateInstallation {
    pub equipment_id: i64,
    pub serial_number: Option<String>,
    pub installed_at: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    /// Defaults to the catalog entry's interval, then 1 year
    #[validate(range(min = 1, max = 20))]
    pub maintenance_interval: Option<i64>,
    pub notes: Option<String>,
}

/// Update installation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateInstallation {
    pub serial_number: Option<String>,
    pub installed_at: Option<NaiveDate>,
    pub warranty_until: Option<NaiveDate>,
    pub last_maintenance_date: Option<NaiveDate>,
    #[validate(range(min = 1, max = 20))]
    pub maintenance_interval: Option<i64>,
    pub notes: Option<String>,
}

/// Record a performed maintenance visit
#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordMaintenance {
    /// Date the service was performed; defaults to today
    pub date: Option<NaiveDate>,
}
