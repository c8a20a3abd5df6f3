//! Checklist endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::checklist::{
        Checklist, ChecklistDetails, ChecklistItem, CreateChecklist, CreateChecklistItem,
        UpdateChecklist,
    },
    AppState,
};

use super::AuthenticatedUser;

/// List all checklists
#[utoipa::path(
    get,
    path = "/checklists",
    tag = "checklists",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Checklist list", body = Vec<Checklist>)
    )
)]
pub async fn list_checklists(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
) -> AppResult<Json<Vec<Checklist>>> {
    let checklists = state.services.checklists.list().await?;
    Ok(Json(checklists))
}

/// Get checklist with items
#[utoipa::path(
    get,
    path = "/checklists/{id}",
    tag = "checklists",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Checklist ID")),
    responses(
        (status = 200, description = "Checklist details", body = ChecklistDetails)
    )
)]
pub async fn get_checklist(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<ChecklistDetails>> {
    let details = state.services.checklists.get_details(id).await?;
    Ok(Json(details))
}

/// Create a checklist with its initial items
#[utoipa::path(
    post,
    path = "/checklists",
    tag = "checklists",
    security(("session_token" = [])),
    request_body = CreateChecklist,
    responses(
        (status = 201, description = "Checklist created", body = ChecklistDetails)
    )
)]
pub async fn create_checklist(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(data): Json<CreateChecklist>,
) -> AppResult<(StatusCode, Json<ChecklistDetails>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let details = state.services.checklists.create(&data).await?;
    Ok((StatusCode::CREATED, Json(details)))
}

/// Rename a checklist
#[utoipa::path(
    put,
    path = "/checklists/{id}",
    tag = "checklists",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Checklist ID")),
    request_body = UpdateChecklist,
    responses(
        (status = 200, description = "Checklist updated", body = Checklist)
    )
)]
pub async fn update_checklist(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateChecklist>,
) -> AppResult<Json<Checklist>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let checklist = state.services.checklists.update(id, &data).await?;
    Ok(Json(checklist))
}

/// Delete a checklist (cascade deletes its items)
#[utoipa::path(
    delete,
    path = "/checklists/{id}",
    tag = "checklists",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Checklist ID")),
    responses(
        (status = 204, description = "Checklist deleted")
    )
)]
pub async fn delete_checklist(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.checklists.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add an item to a checklist
#[utoipa::path(
    post,
    path = "/checklists/{id}/items",
    tag = "checklists",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Checklist ID")),
    request_body = CreateChecklistItem,
    responses(
        (status = 201, description = "Item added", body = ChecklistItem)
    )
)]
pub async fn create_checklist_item(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<CreateChecklistItem>,
) -> AppResult<(StatusCode, Json<ChecklistItem>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let item = state.services.checklists.add_item(id, &data).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Delete a checklist item
#[utoipa::path(
    delete,
    path = "/checklist-items/{id}",
    tag = "checklists",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Checklist item ID")),
    responses(
        (status = 204, description = "Item deleted")
    )
)]
pub async fn delete_checklist_item(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.checklists.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
