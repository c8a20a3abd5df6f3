//! Repository layer for database operations

pub mod appointments;
pub mod checklists;
pub mod clients;
pub mod equipment;
pub mod installations;
pub mod reports;
pub mod users;

use sqlx::{Pool, Sqlite};

use crate::error::AppResult;

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Sqlite>,
    pub users: users::UsersRepository,
    pub clients: clients::ClientsRepository,
    pub equipment: equipment::EquipmentRepository,
    pub installations: installations::InstallationsRepository,
    pub reports: reports::ReportsRepository,
    pub checklists: checklists::ChecklistsRepository,
    pub appointments: appointments::AppointmentsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            clients: clients::ClientsRepository::new(pool.clone()),
            equipment: equipment::EquipmentRepository::new(pool.clone()),
            installations: installations::InstallationsRepository::new(pool.clone()),
            reports: reports::ReportsRepository::new(pool.clone()),
            checklists: checklists::ChecklistsRepository::new(pool.clone()),
            appointments: appointments::AppointmentsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip a trivial query to verify the database is reachable
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}
