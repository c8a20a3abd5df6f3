//! Clients repository

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, CreateClient, UpdateClient},
};

#[derive(Clone)]
pub struct ClientsRepository {
    pool: Pool<Sqlite>,
}

impl ClientsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all clients, ordered by name
    pub async fn list(&self) -> AppResult<Vec<Client>> {
        let rows = sqlx::query_as::<_, Client>("SELECT * FROM clients ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get client by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Client> {
        sqlx::query_as::<_, Client>("SELECT * FROM clients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }

    /// Create a client
    pub async fn create(&self, data: &CreateClient) -> AppResult<Client> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Client>(
            r#"
            INSERT INTO clients (name, contact_name, email, phone, address, city,
                                 postal_code, latitude, longitude, maintenance_due_date,
                                 notes, crea_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.contact_name)
        .bind(&data.email)
        .bind(&data.phone)
        .bind(&data.address)
        .bind(&data.city)
        .bind(&data.postal_code)
        .bind(data.latitude)
        .bind(data.longitude)
        .bind(data.maintenance_due_date)
        .bind(&data.notes)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a client
    pub async fn update(&self, id: i64, data: &UpdateClient) -> AppResult<Client> {
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
        add_field!(data.contact_name, "contact_name");
        add_field!(data.email, "email");
        add_field!(data.phone, "phone");
        add_field!(data.address, "address");
        add_field!(data.city, "city");
        add_field!(data.postal_code, "postal_code");
        add_field!(data.latitude, "latitude");
        add_field!(data.longitude, "longitude");
        add_field!(data.maintenance_due_date, "maintenance_due_date");
        add_field!(data.notes, "notes");

        let query = format!(
            "UPDATE clients SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Client>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.name);
        bind_field!(data.contact_name);
        bind_field!(data.email);
        bind_field!(data.phone);
        bind_field!(data.address);
        bind_field!(data.city);
        bind_field!(data.postal_code);
        bind_field!(data.latitude);
        bind_field!(data.longitude);
        bind_field!(data.maintenance_due_date);
        bind_field!(data.notes);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Client {} not found", id)))
    }

    /// Delete a client (cascade deletes equipment, reports, appointments)
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Client {} not found", id)));
        }
        Ok(())
    }

    /// Count all clients (for stats)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clients")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count clients whose client-level maintenance date is strictly in the
    /// past (for stats). Reads the client-level date directly, not the
    /// per-equipment aggregate.
    pub async fn count_expired(&self, reference_date: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM clients WHERE maintenance_due_date IS NOT NULL AND maintenance_due_date < $1"
        )
        .bind(reference_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
