//! Clients service: CRUD plus maintenance status aggregation

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::{
    error::AppResult,
    maintenance::{aggregate_client_status, classify_maintenance, compute_next_maintenance},
    models::{
        client::{Client, ClientDetails, ClientMapMarker, ClientSummary, CreateClient, UpdateClient},
        installation::{InstallationDetails, InstallationRow},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all clients with their aggregate maintenance status, evaluated
    /// against one reference date for the whole batch.
    pub async fn list_with_status(&self, reference_date: NaiveDate) -> AppResult<Vec<ClientSummary>> {
        let clients = self.repository.clients.list().await?;
        let installations = self.repository.installations.list_all().await?;

        let mut by_client: HashMap<i64, Vec<Option<NaiveDate>>> = HashMap::new();
        for row in &installations {
            by_client
                .entry(row.client_id)
                .or_default()
                .push(due_date_of(row));
        }

        let summaries = clients
            .into_iter()
            .map(|client| {
                let dues = by_client.get(&client.id).map(Vec::as_slice).unwrap_or(&[]);
                let status =
                    aggregate_client_status(dues, client.maintenance_due_date, reference_date);
                ClientSummary {
                    equipment_count: dues.len() as i64,
                    status,
                    client,
                }
            })
            .collect();
        Ok(summaries)
    }

    /// Map markers: clients with coordinates, colored by aggregate status
    pub async fn map_markers(&self, reference_date: NaiveDate) -> AppResult<Vec<ClientMapMarker>> {
        let summaries = self.list_with_status(reference_date).await?;
        let markers = summaries
            .into_iter()
            .filter_map(|s| match (s.client.latitude, s.client.longitude) {
                (Some(lat), Some(lng)) => Some(ClientMapMarker {
                    id: s.client.id,
                    name: s.client.name,
                    latitude: lat,
                    longitude: lng,
                    status: s.status,
                }),
                _ => None,
            })
            .collect();
        Ok(markers)
    }

    /// Client detail with each installation classified
    pub async fn get_details(&self, id: i64, reference_date: NaiveDate) -> AppResult<ClientDetails> {
        let client = self.repository.clients.get_by_id(id).await?;
        let rows = self.repository.installations.list_for_client(id).await?;

        let dues: Vec<Option<NaiveDate>> = rows.iter().map(due_date_of).collect();
        let status = aggregate_client_status(&dues, client.maintenance_due_date, reference_date);

        let equipment = rows
            .into_iter()
            .map(|row| classify_row(row, reference_date))
            .collect();

        Ok(ClientDetails {
            client,
            status,
            equipment,
        })
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateClient) -> AppResult<Client> {
        self.repository.clients.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateClient) -> AppResult<Client> {
        self.repository.clients.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.clients.delete(id).await
    }
}

/// Due date of one installation, recomputed from its source fields rather
/// than the stored denormalized value.
pub(crate) fn due_date_of(row: &InstallationRow) -> Option<NaiveDate> {
    compute_next_maintenance(row.last_maintenance_date, row.maintenance_interval as i32)
}

/// Join row plus classification into the API representation
pub(crate) fn classify_row(row: InstallationRow, reference_date: NaiveDate) -> InstallationDetails {
    let due = due_date_of(&row);
    let status = classify_maintenance(due, reference_date);
    InstallationDetails {
        id: row.id,
        client_id: row.client_id,
        equipment_id: row.equipment_id,
        equipment_name: row.equipment_name,
        manufacturer: row.manufacturer,
        model: row.model,
        serial_number: row.serial_number,
        installed_at: row.installed_at,
        warranty_until: row.warranty_until,
        last_maintenance_date: row.last_maintenance_date,
        maintenance_interval: row.maintenance_interval,
        next_maintenance_date: due,
        status: status.tier,
        days_delta: status.days_delta,
        notes: row.notes,
    }
}
