//! API handlers for Mediparc REST endpoints

pub mod appointments;
pub mod auth;
pub mod checklists;
pub mod clients;
pub mod equipment;
pub mod health;
pub mod installations;
pub mod openapi;
pub mod reports;
pub mod stats;
pub mod users;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use axum_extra::extract::cookie::CookieJar;
use chrono::Utc;

use crate::{
    error::AppError,
    models::user::{Role, User},
    AppState,
};

/// Extractor for the authenticated user behind a session token.
///
/// The token is taken from the session cookie, or from an
/// `Authorization: Bearer` header for non-browser clients.
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl AuthenticatedUser {
    /// Only admins may manage users and catalog-wide settings
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.user.role != Role::Admin {
            return Err(AppError::Authorization("Admin role required".to_string()));
        }
        Ok(())
    }
}

/// Pull the session token out of the request, cookie first
fn extract_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(cookie_name) {
        return Some(cookie.value().to_string());
    }

    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts, &state.config.auth.session_cookie)
            .ok_or_else(|| AppError::Authentication("Missing session token".to_string()))?;

        let user = state
            .services
            .auth
            .validate_session(&token, Utc::now())
            .await?;

        Ok(AuthenticatedUser { user, token })
    }
}
