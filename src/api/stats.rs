//! Dashboard statistics endpoint

use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, AppState};

use super::AuthenticatedUser;

/// Dashboard counters
#[derive(Serialize, ToSchema)]
pub struct DashboardStats {
    /// Clients whose client-level maintenance date is strictly in the past
    pub expired_clients: i64,
    /// Clients for which every installation classifies ok (zero-equipment
    /// clients excluded)
    pub clients_up_to_date: i64,
    /// Appointments from today on, not done yet
    pub upcoming_appointments: i64,
    /// Installed units across all clients
    pub total_equipment_installed: i64,
    /// All clients
    pub total_clients: i64,
    /// Catalog entries
    pub total_catalog_entries: i64,
    /// Reports dated in the current month
    pub reports_this_month: i64,
}

/// Get dashboard statistics
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = DashboardStats)
    )
)]
pub async fn get_stats(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> AppResult<Json<DashboardStats>> {
    let reference_date = Utc::now().date_naive();
    let stats = state.services.stats.dashboard(reference_date).await?;
    Ok(Json(stats))
}
