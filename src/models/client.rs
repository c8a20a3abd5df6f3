//! Client (practice / cabinet) model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::maintenance::Tier;

use super::installation::InstallationDetails;

/// Client record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: i64,
    /// Practice name
    pub name: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    /// Map coordinates
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    /// Client-level maintenance schedule, distinct from per-equipment dates
    pub maintenance_due_date: Option<NaiveDate>,
    pub notes: Option<String>,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Client with its aggregate maintenance status (list views)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientSummary {
    #[serde(flatten)]
    pub client: Client,
    /// Worst-case tier across the client's equipment
    pub status: Tier,
    /// Number of equipment installations
    pub equipment_count: i64,
}

/// Client detail with per-equipment classification
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientDetails {
    #[serde(flatten)]
    pub client: Client,
    pub status: Tier,
    pub equipment: Vec<InstallationDetails>,
}

/// Map marker for one client
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClientMapMarker {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Drives marker coloring: ok=green, warning=amber, expired=red
    pub status: Tier,
}

/// Create client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClient {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub contact_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub maintenance_due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}

/// Update client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClient {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    pub contact_name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub maintenance_due_date: Option<NaiveDate>,
    pub notes: Option<String>,
}
