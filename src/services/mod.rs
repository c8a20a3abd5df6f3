//! Business logic services

pub mod appointments;
pub mod auth;
pub mod checklists;
pub mod clients;
pub mod equipment;
pub mod installations;
pub mod reports;
pub mod stats;

use crate::{config::AuthConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    repository: Repository,
    pub auth: auth::AuthService,
    pub clients: clients::ClientsService,
    pub equipment: equipment::EquipmentService,
    pub installations: installations::InstallationsService,
    pub reports: reports::ReportsService,
    pub checklists: checklists::ChecklistsService,
    pub appointments: appointments::AppointmentsService,
    pub stats: stats::StatsService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> AppResult<Self> {
        Ok(Self {
            auth: auth::AuthService::new(repository.clone(), auth_config),
            clients: clients::ClientsService::new(repository.clone()),
            equipment: equipment::EquipmentService::new(repository.clone()),
            installations: installations::InstallationsService::new(repository.clone()),
            reports: reports::ReportsService::new(repository.clone()),
            checklists: checklists::ChecklistsService::new(repository.clone()),
            appointments: appointments::AppointmentsService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            repository,
        })
    }

    /// Verify the database behind the services is reachable
    pub async fn ping_database(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
