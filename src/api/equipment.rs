//! Equipment catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CatalogEquipment, CreateCatalogEquipment, UpdateCatalogEquipment},
    AppState,
};

use super::AuthenticatedUser;

/// List the equipment catalog
#[utoipa::path(
    get,
    path = "/catalog",
    tag = "catalog",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Catalog list", body = Vec<CatalogEquipment>)
    )
)]
pub async fn list_catalog(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> AppResult<Json<Vec<CatalogEquipment>>> {
    let entries = state.services.equipment.list().await?;
    Ok(Json(entries))
}

/// Get catalog entry by ID
#[utoipa::path(
    get,
    path = "/catalog/{id}",
    tag = "catalog",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Catalog equipment ID")),
    responses(
        (status = 200, description = "Catalog entry", body = CatalogEquipment)
    )
)]
pub async fn get_catalog_equipment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<CatalogEquipment>> {
    let entry = state.services.equipment.get_by_id(id).await?;
    Ok(Json(entry))
}

/// Create a catalog entry
#[utoipa::path(
    post,
    path = "/catalog",
    tag = "catalog",
    security(("session_token" = [])),
    request_body = CreateCatalogEquipment,
    responses(
        (status = 201, description = "Catalog entry created", body = CatalogEquipment)
    )
)]
pub async fn create_catalog_equipment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(data): Json<CreateCatalogEquipment>,
) -> AppResult<(StatusCode, Json<CatalogEquipment>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let entry = state.services.equipment.create(&data).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// Update a catalog entry
#[utoipa::path(
    put,
    path = "/catalog/{id}",
    tag = "catalog",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Catalog equipment ID")),
    request_body = UpdateCatalogEquipment,
    responses(
        (status = 200, description = "Catalog entry updated", body = CatalogEquipment)
    )
)]
pub async fn update_catalog_equipment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateCatalogEquipment>,
) -> AppResult<Json<CatalogEquipment>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let entry = state.services.equipment.update(id, &data).await?;
    Ok(Json(entry))
}

/// Delete a catalog entry (cascade deletes its installations)
#[utoipa::path(
    delete,
    path = "/catalog/{id}",
    tag = "catalog",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Catalog equipment ID")),
    responses(
        (status = 204, description = "Catalog entry deleted")
    )
)]
pub async fn delete_catalog_equipment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.equipment.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
