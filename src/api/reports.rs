//! Service report endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::report::{CreateReport, Report, UpdateReport},
    AppState,
};

use super::AuthenticatedUser;

/// Query parameters for listing reports
#[derive(Debug, Deserialize, IntoParams)]
pub struct ReportsQuery {
    /// Restrict to one client
    pub client_id: Option<i64>,
}

/// List reports, most recent first
#[utoipa::path(
    get,
    path = "/reports",
    tag = "reports",
    security(("session_token" = [])),
    params(ReportsQuery),
    responses(
        (status = 200, description = "Report list", body = Vec<Report>)
    )
)]
pub async fn list_reports(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<ReportsQuery>,
) -> AppResult<Json<Vec<Report>>> {
    let reports = state.services.reports.list(query.client_id).await?;
    Ok(Json(reports))
}

/// Get report by ID
#[utoipa::path(
    get,
    path = "/reports/{id}",
    tag = "reports",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report details", body = Report)
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Report>> {
    let report = state.services.reports.get_by_id(id).await?;
    Ok(Json(report))
}

/// Create a report authored by the current user
#[utoipa::path(
    post,
    path = "/reports",
    tag = "reports",
    security(("session_token" = [])),
    request_body = CreateReport,
    responses(
        (status = 201, description = "Report created", body = Report)
    )
)]
pub async fn create_report(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Json(data): Json<CreateReport>,
) -> AppResult<(StatusCode, Json<Report>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let report = state.services.reports.create(auth.user.id, &data).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

/// Update a report
#[utoipa::path(
    put,
    path = "/reports/{id}",
    tag = "reports",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Report ID")),
    request_body = UpdateReport,
    responses(
        (status = 200, description = "Report updated", body = Report)
    )
)]
pub async fn update_report(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateReport>,
) -> AppResult<Json<Report>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let report = state.services.reports.update(id, &data).await?;
    Ok(Json(report))
}

/// Delete a report
#[utoipa::path(
    delete,
    path = "/reports/{id}",
    tag = "reports",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Report ID")),
    responses(
        (status = 204, description = "Report deleted")
    )
)]
pub async fn delete_report(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.reports.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
