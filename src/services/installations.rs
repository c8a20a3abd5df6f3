//! Equipment installations service
//!
//! Owns the invariant that the stored `next_maintenance_date` always equals
//! the value derived from `last_maintenance_date` and the interval: every
//! mutation of those source fields recomputes and writes the derived date.

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    maintenance::compute_next_maintenance,
    models::installation::{
        CreateInstallation, Installation, InstallationDetails, RecordMaintenance,
        UpdateInstallation,
    },
    repository::Repository,
};

use super::clients::classify_row;

const DEFAULT_INTERVAL_YEARS: i64 = 1;

#[derive(Clone)]
pub struct InstallationsService {
    repository: Repository,
}

impl InstallationsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List a client's installations, each classified against the reference date
    pub async fn list_for_client(
        &self,
        client_id: i64,
        reference_date: NaiveDate,
    ) -> AppResult<Vec<InstallationDetails>> {
        // Verify client exists
        self.repository.clients.get_by_id(client_id).await?;
        let rows = self.repository.installations.list_for_client(client_id).await?;
        Ok(rows
            .into_iter()
            .map(|row| classify_row(row, reference_date))
            .collect())
    }

    /// Attach catalog equipment to a client.
    ///
    /// The interval defaults to the catalog entry's interval, then one year.
    pub async fn create(&self, client_id: i64, data: &CreateInstallation) -> AppResult<Installation> {
        // Verify both ends of the link exist
        self.repository.clients.get_by_id(client_id).await?;
        let catalog = self.repository.equipment.get_by_id(data.equipment_id).await?;

        let interval = data
            .maintenance_interval
            .or(catalog.default_interval_years)
            .unwrap_or(DEFAULT_INTERVAL_YEARS);
        let next = compute_next_maintenance(data.last_maintenance_date, interval as i32);

        self.repository
            .installations
            .create(client_id, data, interval, next)
            .await
    }

    /// Update an installation, recomputing the derived due date from the
    /// effective (post-update) source fields.
    pub async fn update(&self, id: i64, data: &UpdateInstallation) -> AppResult<Installation> {
        let existing = self.repository.installations.get_by_id(id).await?;

        let last = data.last_maintenance_date.or(existing.last_maintenance_date);
        let interval = data.maintenance_interval.unwrap_or(existing.maintenance_interval);
        let next = compute_next_maintenance(last, interval as i32);

        self.repository.installations.update(id, data, next).await
    }

    /// Record a performed maintenance visit: sets the last-service date and
    /// rolls the due date forward by the installation's interval.
    pub async fn record_maintenance(
        &self,
        id: i64,
        data: &RecordMaintenance,
        reference_date: NaiveDate,
    ) -> AppResult<Installation> {
        let existing = self.repository.installations.get_by_id(id).await?;
        let performed_on = data.date.unwrap_or(reference_date);
        let next = compute_next_maintenance(Some(performed_on), existing.maintenance_interval as i32);

        self.repository
            .installations
            .record_maintenance(id, performed_on, next)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Installation> {
        self.repository.installations.get_by_id(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.installations.delete(id).await
    }
}
