//! Service reports service

use crate::{
    error::AppResult,
    models::report::{CreateReport, Report, UpdateReport},
    repository::Repository,
};

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List reports, optionally for one client
    pub async fn list(&self, client_id: Option<i64>) -> AppResult<Vec<Report>> {
        if let Some(id) = client_id {
            // Verify client exists
            self.repository.clients.get_by_id(id).await?;
        }
        self.repository.reports.list(client_id).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Report> {
        self.repository.reports.get_by_id(id).await
    }

    /// Create a report authored by the given user
    pub async fn create(&self, author_id: i64, data: &CreateReport) -> AppResult<Report> {
        // Verify client exists
        self.repository.clients.get_by_id(data.client_id).await?;
        self.repository.reports.create(author_id, data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateReport) -> AppResult<Report> {
        self.repository.reports.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.reports.delete(id).await
    }
}
