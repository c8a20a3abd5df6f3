//! Dashboard statistics service

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    api::stats::DashboardStats,
    error::AppResult,
    maintenance::{classify_maintenance, Tier},
    repository::Repository,
};

use super::clients::due_date_of;

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Dashboard counters, all evaluated against one reference date.
    ///
    /// Two counters intentionally use different status semantics:
    /// `expired_clients` reads the client-level maintenance date directly,
    /// while `clients_up_to_date` requires every installation to classify
    /// `ok`. They can disagree with the map's per-equipment aggregate for
    /// the same client; both behaviors are preserved as the dashboard has
    /// always counted them.
    pub async fn dashboard(&self, reference_date: NaiveDate) -> AppResult<DashboardStats> {
        let expired_clients = self.repository.clients.count_expired(reference_date).await?;
        let clients_up_to_date = self.count_clients_fully_up_to_date(reference_date).await?;
        let upcoming_appointments = self
            .repository
            .appointments
            .count_upcoming(reference_date)
            .await?;
        let total_equipment_installed = self.repository.installations.count().await?;
        let total_clients = self.repository.clients.count().await?;
        let total_catalog_entries = self.repository.equipment.count().await?;
        let reports_this_month = self
            .repository
            .reports
            .count_for_month(reference_date)
            .await?;

        Ok(DashboardStats {
            expired_clients,
            clients_up_to_date,
            upcoming_appointments,
            total_equipment_installed,
            total_clients,
            total_catalog_entries,
            reports_this_month,
        })
    }

    /// Clients for which every installation classifies `ok`. A client with
    /// zero installations does not count as up to date here, even though the
    /// aggregate status of such a client may be `ok`.
    async fn count_clients_fully_up_to_date(&self, reference_date: NaiveDate) -> AppResult<i64> {
        let installations = self.repository.installations.list_all().await?;

        let mut all_ok: HashMap<i64, bool> = HashMap::new();
        for row in &installations {
            let tier = classify_maintenance(due_date_of(row), reference_date).tier;
            let entry = all_ok.entry(row.client_id).or_insert(true);
            if tier != Tier::Ok {
                *entry = false;
            }
        }

        Ok(all_ok.values().filter(|ok| **ok).count() as i64)
    }
}
