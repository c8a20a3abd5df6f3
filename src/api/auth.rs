//! Authentication endpoints (session login/logout)

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::user::UserInfo,
    AppState,
};

use super::AuthenticatedUser;

/// Login request
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(serde::Serialize, ToSchema)]
pub struct LoginResponse {
    /// Opaque session token, also set as a cookie
    pub token: String,
    pub token_type: String,
    pub user: UserInfo,
}

/// Authenticate and open a session
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session opened", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(data): Json<LoginRequest>,
) -> AppResult<(CookieJar, Json<LoginResponse>)> {
    let (token, user) = state.services.auth.login(&data.username, &data.password).await?;

    let cookie = Cookie::build((state.config.auth.session_cookie.clone(), token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();

    let response = LoginResponse {
        token,
        token_type: "Bearer".to_string(),
        user: UserInfo::from(&user),
    };

    Ok((jar.add(cookie), Json(response)))
}

/// Close the current session
#[utoipa::path(
    post,
    path = "/auth/logout",
    tag = "auth",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Session closed")
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthenticatedUser,
    jar: CookieJar,
) -> AppResult<CookieJar> {
    state.services.auth.logout(&auth.token).await?;
    let jar = jar.remove(Cookie::from(state.config.auth.session_cookie.clone()));
    Ok(jar)
}

/// Current user
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("session_token" = [])),
    responses(
        (status = 200, description = "Current user", body = UserInfo)
    )
)]
pub async fn me(auth: AuthenticatedUser) -> Json<UserInfo> {
    Json(UserInfo::from(&auth.user))
}
