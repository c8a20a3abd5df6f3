//! Client endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::client::{
        Client, ClientDetails, ClientMapMarker, ClientSummary, CreateClient, UpdateClient,
    },
    AppState,
};

use super::AuthenticatedUser;

/// List all clients with aggregate maintenance status
#[utoipa::path(
    get,
    path = "/clients",
    tag = "clients",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Client list", body = Vec<ClientSummary>)
    )
)]
pub async fn list_clients(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> AppResult<Json<Vec<ClientSummary>>> {
    // One reference date for the whole batch of classifications
    let reference_date = Utc::now().date_naive();
    let clients = state.services.clients.list_with_status(reference_date).await?;
    Ok(Json(clients))
}

/// Map markers for all geolocated clients
#[utoipa::path(
    get,
    path = "/clients/map",
    tag = "clients",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Map markers", body = Vec<ClientMapMarker>)
    )
)]
pub async fn map_clients(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> AppResult<Json<Vec<ClientMapMarker>>> {
    let reference_date = Utc::now().date_naive();
    let markers = state.services.clients.map_markers(reference_date).await?;
    Ok(Json(markers))
}

/// Get client by ID with per-equipment classification
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "clients",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ClientDetails)
    )
)]
pub async fn get_client(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ClientDetails>> {
    let reference_date = Utc::now().date_naive();
    let details = state.services.clients.get_details(id, reference_date).await?;
    Ok(Json(details))
}

/// Create a client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "clients",
    security(("session_token" = [])),
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client created", body = Client)
    )
)]
pub async fn create_client(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(data): Json<CreateClient>,
) -> AppResult<(StatusCode, Json<Client>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let client = state.services.clients.create(&data).await?;
    Ok((StatusCode::CREATED, Json(client)))
}

/// Update a client
#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "clients",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated", body = Client)
    )
)]
pub async fn update_client(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateClient>,
) -> AppResult<Json<Client>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let client = state.services.clients.update(id, &data).await?;
    Ok(Json(client))
}

/// Delete a client (cascade deletes equipment, reports, appointments)
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "clients",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Client ID")),
    responses(
        (status = 204, description = "Client deleted")
    )
)]
pub async fn delete_client(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.clients.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
