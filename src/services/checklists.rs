//! Checklists service

use crate::{
    error::AppResult,
    models::checklist::{
        Checklist, ChecklistDetails, ChecklistItem, CreateChecklist, CreateChecklistItem,
        UpdateChecklist,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct ChecklistsService {
    repository: Repository,
}

impl ChecklistsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Checklist>> {
        self.repository.checklists.list().await
    }

    /// Checklist with its items
    pub async fn get_details(&self, id: i64) -> AppResult<ChecklistDetails> {
        let checklist = self.repository.checklists.get_by_id(id).await?;
        let items = self.repository.checklists.list_items(id).await?;
        Ok(ChecklistDetails { checklist, items })
    }

    pub async fn create(&self, data: &CreateChecklist) -> AppResult<ChecklistDetails> {
        let checklist = self.repository.checklists.create(data).await?;
        let items = self.repository.checklists.list_items(checklist.id).await?;
        Ok(ChecklistDetails { checklist, items })
    }

    pub async fn update(&self, id: i64, data: &UpdateChecklist) -> AppResult<Checklist> {
        self.repository.checklists.update(id, data).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.repository.checklists.delete(id).await
    }

    pub async fn add_item(&self, checklist_id: i64, data: &CreateChecklistItem) -> AppResult<ChecklistItem> {
        // Verify checklist exists
        self.repository.checklists.get_by_id(checklist_id).await?;
        self.repository
            .checklists
            .add_item(checklist_id, &data.label, data.position)
            .await
    }

    pub async fn delete_item(&self, item_id: i64) -> AppResult<()> {
        self.repository.checklists.delete_item(item_id).await
    }
}
