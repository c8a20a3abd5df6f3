//! Equipment catalog repository

use chrono::Utc;
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::equipment::{CatalogEquipment, CreateCatalogEquipment, UpdateCatalogEquipment},
};

#[derive(Clone)]
pub struct EquipmentRepository {
    pool: Pool<Sqlite>,
}

impl EquipmentRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all catalog entries
    pub async fn list(&self) -> AppResult<Vec<CatalogEquipment>> {
        let rows = sqlx::query_as::<_, CatalogEquipment>(
            "SELECT * FROM equipment_catalog ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get catalog entry by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<CatalogEquipment> {
        sqlx::query_as::<_, CatalogEquipment>("SELECT * FROM equipment_catalog WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Catalog equipment {} not found", id)))
    }

    /// Create a catalog entry
    pub async fn create(&self, data: &CreateCatalogEquipment) -> AppResult<CatalogEquipment> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, CatalogEquipment>(
            r#"
            INSERT INTO equipment_catalog (name, manufacturer, model, category,
                                           default_interval_years, notes, crea_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.manufacturer)
        .bind(&data.model)
        .bind(&data.category)
        .bind(data.default_interval_years)
        .bind(&data.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a catalog entry
    pub async fn update(
        &self,
        id: i64,
        data: &UpdateCatalogEquipment,
    ) -> AppResult<CatalogEquipment> {
        let now = Utc::now();
        let mut sets = vec!["modif_date = $1".to_string()];
        let mut idx = 2;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.name, "name");
        add_field!(data.manufacturer, "manufacturer");
        add_field!(data.model, "model");
        add_field!(data.category, "category");
        add_field!(data.default_interval_years, "default_interval_years");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE equipment_catalog SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, CatalogEquipment>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.manufacturer);
        bind_field!(data.model);
        bind_field!(data.category);
        bind_field!(data.default_interval_years);
        bind_field!(data.notes);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Catalog equipment {} not found", id)))
    }

    /// Delete a catalog entry (cascade deletes its installations)
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM equipment_catalog WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Catalog equipment {} not found", id)));
        }
        Ok(())
    }

    /// Count catalog entries (for stats)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM equipment_catalog")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
