//! Equipment installations repository (client_equipment)

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::installation::{CreateInstallation, Installation, InstallationRow, UpdateInstallation},
};

const ROW_SELECT: &str = r#"
    SELECT ce.id, ce.client_id, ce.equipment_id, ec.name AS equipment_name,
           ec.manufacturer, ec.model, ce.serial_number, ce.installed_at,
           ce.warranty_until, ce.last_maintenance_date, ce.maintenance_interval,
           ce.next_maintenance_date, ce.notes
    FROM client_equipment ce
    JOIN equipment_catalog ec ON ce.equipment_id = ec.id
"#;

#[derive(Clone)]
pub struct InstallationsRepository {
    pool: Pool<Sqlite>,
}

impl InstallationsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get installation by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Installation> {
        sqlx::query_as::<_, Installation>("SELECT * FROM client_equipment WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Installation {} not found", id)))
    }

    /// List installations for one client, joined with catalog fields
    pub async fn list_for_client(&self, client_id: i64) -> AppResult<Vec<InstallationRow>> {
        let query = format!("{} WHERE ce.client_id = $1 ORDER BY ec.name", ROW_SELECT);
        let rows = sqlx::query_as::<_, InstallationRow>(&query)
            .bind(client_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// List all installations across clients, joined with catalog fields.
    /// Used when computing aggregate statuses for a whole client list in one
    /// pass instead of one query per client.
    pub async fn list_all(&self) -> AppResult<Vec<InstallationRow>> {
        let query = format!("{} ORDER BY ce.client_id, ec.name", ROW_SELECT);
        let rows = sqlx::query_as::<_, InstallationRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create an installation. `next_maintenance_date` is the caller's
    /// already-derived value.
    pub async fn create(
        &self,
        client_id: i64,
        data: &CreateInstallation,
        maintenance_interval: i64,
        next_maintenance_date: Option<NaiveDate>,
    ) -> AppResult<Installation> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Installation>(
            r#"
            INSERT INTO client_equipment (client_id, equipment_id, serial_number,
                                          installed_at, warranty_until,
                                          last_maintenance_date, maintenance_interval,
                                          next_maintenance_date, notes, crea_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(client_id)
        .bind(data.equipment_id)
        .bind(&data.serial_number)
        .bind(data.installed_at)
        .bind(data.warranty_until)
        .bind(data.last_maintenance_date)
        .bind(maintenance_interval)
        .bind(next_maintenance_date)
        .bind(&data.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an installation. The derived `next_maintenance_date` is always
    /// written so it stays consistent with its source fields.
    pub async fn update(
        &self,
        id: i64,
        data: &UpdateInstallation,
        next_maintenance_date: Option<NaiveDate>,
    ) -> AppResult<Installation> {
        let now = Utc::now();
        let mut sets = vec![
            "modif_date = $1".to_string(),
            "next_maintenance_date = $2".to_string(),
        ];
        let mut idx = 3;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.serial_number, "serial_number");
        add_field!(data.installed_at, "installed_at");
        add_field!(data.warranty_until, "warranty_until");
        add_field!(data.last_maintenance_date, "last_maintenance_date");
        add_field!(data.maintenance_interval, "maintenance_interval");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE client_equipment SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Installation>(&query)
            .bind(now)
            .bind(next_maintenance_date);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.serial_number);
        bind_field!(data.installed_at);
        bind_field!(data.warranty_until);
        bind_field!(data.last_maintenance_date);
        bind_field!(data.maintenance_interval);
        bind_field!(data.notes);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Installation {} not found", id)))
    }

    /// Record a performed maintenance: set the last-service date and the
    /// freshly derived next due date.
    pub async fn record_maintenance(
        &self,
        id: i64,
        performed_on: NaiveDate,
        next_maintenance_date: Option<NaiveDate>,
    ) -> AppResult<Installation> {
        let now = Utc::now();
        sqlx::query_as::<_, Installation>(
            r#"
            UPDATE client_equipment
            SET last_maintenance_date = $1, next_maintenance_date = $2, modif_date = $3
            WHERE id = $4
            RETURNING *
            "#,
        )
        .bind(performed_on)
        .bind(next_maintenance_date)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Installation {} not found", id)))
    }

    /// Delete an installation
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM client_equipment WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Installation {} not found", id)));
        }
        Ok(())
    }

    /// Count installed units across all clients (for stats)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM client_equipment")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
