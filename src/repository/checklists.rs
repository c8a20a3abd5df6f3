//! Checklists repository

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::checklist::{Checklist, ChecklistItem, CreateChecklist, UpdateChecklist},
};

#[derive(Clone)]
pub struct ChecklistsRepository {
    pool: Pool<Sqlite>,
}

impl ChecklistsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all checklists
    pub async fn list(&self) -> AppResult<Vec<Checklist>> {
        let rows = sqlx::query_as::<_, Checklist>("SELECT * FROM checklists ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get checklist by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Checklist> {
        sqlx::query_as::<_, Checklist>("SELECT * FROM checklists WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Checklist {} not found", id)))
    }

    /// List items of a checklist, in order
    pub async fn list_items(&self, checklist_id: i64) -> AppResult<Vec<ChecklistItem>> {
        let rows = sqlx::query_as::<_, ChecklistItem>(
            "SELECT * FROM checklist_items WHERE checklist_id = $1 ORDER BY position, id",
        )
        .bind(checklist_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Create a checklist with its initial items, atomically
    pub async fn create(&self, data: &CreateChecklist) -> AppResult<Checklist> {
        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        let checklist = sqlx::query_as::<_, Checklist>(
            "INSERT INTO checklists (name, crea_date) VALUES ($1, $2) RETURNING *",
        )
        .bind(&data.name)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        for (position, label) in data.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO checklist_items (checklist_id, label, position) VALUES ($1, $2, $3)",
            )
            .bind(checklist.id)
            .bind(label)
            .bind(position as i64)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(checklist)
    }

    /// Rename a checklist
    pub async fn update(&self, id: i64, data: &UpdateChecklist) -> AppResult<Checklist> {
        match &data.name {
            Some(name) => sqlx::query_as::<_, Checklist>(
                "UPDATE checklists SET name = $1 WHERE id = $2 RETURNING *",
            )
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Checklist {} not found", id))),
            None => self.get_by_id(id).await,
        }
    }

    /// Delete a checklist (cascade deletes its items)
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM checklists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Checklist {} not found", id)));
        }
        Ok(())
    }

    /// Append or insert an item
    pub async fn add_item(
        &self,
        checklist_id: i64,
        label: &str,
        position: Option<i64>,
    ) -> AppResult<ChecklistItem> {
        let position = match position {
            Some(p) => p,
            None => {
                let max: Option<i64> = sqlx::query_scalar(
                    "SELECT MAX(position) FROM checklist_items WHERE checklist_id = $1",
                )
                .bind(checklist_id)
                .fetch_one(&self.pool)
                .await?;
                max.map(|m| m + 1).unwrap_or(0)
            }
        };

        let row = sqlx::query_as::<_, ChecklistItem>(
            r#"
            INSERT INTO checklist_items (checklist_id, label, position)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(checklist_id)
        .bind(label)
        .bind(position)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Delete an item
    pub async fn delete_item(&self, item_id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM checklist_items WHERE id = $1")
            .bind(item_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Checklist item {} not found", item_id)));
        }
        Ok(())
    }
}
