//! Appointment endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, CreateAppointment, UpdateAppointment},
    AppState,
};

use super::AuthenticatedUser;

/// Query parameters for listing appointments
#[derive(Debug, Deserialize, IntoParams)]
pub struct AppointmentsQuery {
    /// Restrict to one client
    pub client_id: Option<i64>,
    /// Only appointments from today on that are not done yet
    #[serde(default)]
    pub upcoming: bool,
}

/// List appointments
#[utoipa::path(
    get,
    path = "/appointments",
    tag = "appointments",
    security(("session_token" = [])),
    params(AppointmentsQuery),
    responses(
        (status = 200, description = "Appointment list", body = Vec<Appointment>)
    )
)]
pub async fn list_appointments(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Query(query): Query<AppointmentsQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    let upcoming_from = query.upcoming.then(|| Utc::now().date_naive());
    let appointments = state
        .services
        .appointments
        .list(query.client_id, upcoming_from)
        .await?;
    Ok(Json(appointments))
}

/// Get appointment by ID
#[utoipa::path(
    get,
    path = "/appointments/{id}",
    tag = "appointments",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Appointment ID")),
    responses(
        (status = 200, description = "Appointment details", body = Appointment)
    )
)]
pub async fn get_appointment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<Json<Appointment>> {
    let appointment = state.services.appointments.get_by_id(id).await?;
    Ok(Json(appointment))
}

/// Create an appointment
#[utoipa::path(
    post,
    path = "/appointments",
    tag = "appointments",
    security(("session_token" = [])),
    request_body = CreateAppointment,
    responses(
        (status = 201, description = "Appointment created", body = Appointment)
    )
)]
pub async fn create_appointment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Json(data): Json<CreateAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let appointment = state.services.appointments.create(&data).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

/// Update an appointment (reschedule / mark done)
#[utoipa::path(
    put,
    path = "/appointments/{id}",
    tag = "appointments",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Appointment ID")),
    request_body = UpdateAppointment,
    responses(
        (status = 200, description = "Appointment updated", body = Appointment)
    )
)]
pub async fn update_appointment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
    Json(data): Json<UpdateAppointment>,
) -> AppResult<Json<Appointment>> {
    data.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;
    let appointment = state.services.appointments.update(id, &data).await?;
    Ok(Json(appointment))
}

/// Delete an appointment
#[utoipa::path(
    delete,
    path = "/appointments/{id}",
    tag = "appointments",
    security(("session_token" = [])),
    params(("id" = i64, Path, description = "Appointment ID")),
    responses(
        (status = 204, description = "Appointment deleted")
    )
)]
pub async fn delete_appointment(
    State(state): State<AppState>,
    _auth: AuthenticatedUser,
    Path(id): Path<i64>,
) -> AppResult<StatusCode> {
    state.services.appointments.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
