//! Appointment model (scheduled interventions)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Appointment record
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Appointment {
    pub id: i64,
    pub client_id: i64,
    pub scheduled_date: NaiveDate,
    pub reason: Option<String>,
    pub done: bool,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create appointment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAppointment {
    pub client_id: i64,
    pub scheduled_date: NaiveDate,
    #[validate(length(max = 512))]
    pub reason: Option<String>,
}

/// Update appointment request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAppointment {
    pub scheduled_date: Option<NaiveDate>,
    #[validate(length(max = 512))]
    pub reason: Option<String>,
    pub done: Option<bool>,
}
