//! Equipment installation endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::installation::{
        CreateInstallation, Installation, InstallationDetails, RecordMaintenance,
        UpdateInstallation,
    },
    AppState,
};

use super::AuthenticatedUser;

/// List a client's installed equipment, classified against today
#[utoipa::path(
    get,
    path = "/clients/{id}/equipment",
    tag = "installations",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Installed equipment", body = Vec<InstallationDetails>)
    )
)]
pub async fn list_client_equipment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<InstallationDetails>>> {
    let reference_date = Utc::now().date_naive();
    let items = state
        .services
        .installations
        .list_for_client(id, reference_date)
        .await?;
    Ok(Json(items))
}

/// Attach catalog equipment to a client
#[utoipa::path(
    post,
    path = "/clients/{id}/equipment",
    tag = "installations",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    request_body = CreateInstallation,
    responses(
        (status = 201, description = "Installation created", body = Installation)
    )
)]
pub async fn create_installation(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<CreateInstallation>,
) -> AppResult<(StatusCode, Json<Installation>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let installation = state.services.installations.create(id, &data).await?;
    Ok((StatusCode::CREATED, Json(installation)))
}

/// Update an installation
#[utoipa::path(
    put,
    path = "/equipment/{id}",
    tag = "installations",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Installation ID")),
    request_body = UpdateInstallation,
    responses(
        (status = 200, description = "Installation updated", body = Installation)
    )
)]
pub async fn update_installation(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateInstallation>,
) -> AppResult<Json<Installation>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let installation = state.services.installations.update(id, &data).await?;
    Ok(Json(installation))
}

/// Record a performed maintenance visit
#[utoipa::path(
    post,
    path = "/equipment/{id}/maintenance",
    tag = "installations",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Installation ID")),
    request_body = RecordMaintenance,
    responses(
        (status = 200, description = "Maintenance recorded", body = Installation)
    )
)]
pub async fn record_maintenance(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<RecordMaintenance>,
) -> AppResult<Json<Installation>> {
    let reference_date = Utc::now().date_naive();
    let installation = state
        .services
        .installations
        .record_maintenance(id, &data, reference_date)
        .await?;
    Ok(Json(installation))
}

/// Detach an installation from its client
#[utoipa::path(
    delete,
    path = "/equipment/{id}",
    tag = "installations",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Installation ID")),
    responses(
        (status = 204, description = "Installation deleted")
    )
)]
pub async fn delete_installation(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.installations.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
