//! Appointments service

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    models::appointment::{Appointment, CreateAppointment, UpdateAppointment},
    repository::Repository,
};

#[derive(Clone)]
pub struct AppointmentsService {
    repository: Repository,
}

impl AppointmentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List appointments, optionally for one client and/or only upcoming
    pub async fn list(
        &self,
        client_id: Option<i64>,
        upcoming_from: Option<NaiveDate>,
    ) -> AppResult<Vec<Appointment>> {
        self.repository.appointments.list(client_id, upcoming_from).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Appointment> {
        self.repository.appointments.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment> {
        // Verify client exists
        self.repository.clients.get_by_id(data.client_id).await?;
        self.repository.appointments.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateAppointment) -> AppResult<Appointment> {
        self.repository.appointments.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.appointments.delete(id).await
    }
}
