//! User management endpoints (admin only)

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UpdateUser, User, UserInfo},
    AppState,
};

use super::AuthenticatedUser;

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "User list", body = Vec<UserInfo>)
    )
)]
pub async fn list_users(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<UserInfo>>> {
    auth.require_admin()?;
    let users = state.services.auth.list_users().await?;
    Ok(Json(users.iter().map(UserInfo::from).collect()))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserInfo)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<UserInfo>> {
    auth.require_admin()?;
    let user = state.services.auth.get_user(id).await?;
    Ok(Json(UserInfo::from(&user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("session_token" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = UserInfo)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Json(data): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<UserInfo>)> {
    auth.require_admin()?;
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let user: User = state.services.auth.create_user(&data).await?;
    Ok((StatusCode::CREATED, Json(UserInfo::from(&user))))
}

/// Update a user
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "User ID")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserInfo)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateUser>,
) -> AppResult<Json<UserInfo>> {
    auth.require_admin()?;
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let user = state.services.auth.update_user(id, &data).await?;
    Ok(Json(UserInfo::from(&user)))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    auth.require_admin()?;
    if auth.user.id == id {
        return Err(AppError::BadRequest("Cannot delete your own account".to_string()));
    }
    state.services.auth.delete_user(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
