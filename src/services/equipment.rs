//! Equipment catalog service

use crate::{
    error::AppResult,
    models::equipment::{CatalogEquipment, CreateCatalogEquipment, UpdateCatalogEquipment},
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
}

impl EquipmentService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<CatalogEquipment>> {
        self.repository.equipment.list().await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<CatalogEquipment> {
        self.repository.equipment.get_by_id(id).await
    }

    pub async fn create(&self, data: &CreateCatalogEquipment) -> AppResult<CatalogEquipment> {
        self.repository.equipment.create(data).await
    }

    pub async fn update(&self, id: i64, data: &UpdateCatalogEquipment) -> AppResult<CatalogEquipment> {
        self.repository.equipment.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.equipment.delete(id).await
    }
}
