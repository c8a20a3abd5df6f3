//! Appointments repository

use chrono::{NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::appointment::{Appointment, CreateAppointment, UpdateAppointment},
};

#[derive(Clone)]
pub struct AppointmentsRepository {
    pool: Pool<Sqlite>,
}

impl AppointmentsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List appointments, optionally only the upcoming ones
    pub async fn list(
        &self,
        client_id: Option<i64>,
        upcoming_from: Option<NaiveDate>,
    ) -> AppResult<Vec<Appointment>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if client_id.is_some() {
            conditions.push(format!("client_id = ${}", idx));
            idx += 1;
        }
        if upcoming_from.is_some() {
            conditions.push(format!("scheduled_date >= ${} AND done = 0", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM appointments {} ORDER BY scheduled_date",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Appointment>(&query);
        if let Some(id) = client_id {
            builder = builder.bind(id);
        }
        if let Some(from) = upcoming_from {
            builder = builder.bind(from);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Get appointment by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Appointment> {
        sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Create an appointment
    pub async fn create(&self, data: &CreateAppointment) -> AppResult<Appointment> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (client_id, scheduled_date, reason, done, crea_date)
            VALUES ($1, $2, $3, 0, $4)
            RETURNING *
            "#,
        )
        .bind(data.client_id)
        .bind(data.scheduled_date)
        .bind(&data.reason)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update an appointment
    pub async fn update(&self, id: i64, data: &UpdateAppointment) -> AppResult<Appointment> {
        let mut sets = Vec::new();
        let mut idx = 1;

        if data.scheduled_date.is_some() {
            sets.push(format!("scheduled_date = ${}", idx));
            idx += 1;
        }
        if data.reason.is_some() {
            sets.push(format!("reason = ${}", idx));
            idx += 1;
        }
        if data.done.is_some() {
            sets.push(format!("done = ${}", idx));
            idx += 1;
        }
        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE appointments SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Appointment>(&query);
        if let Some(d) = data.scheduled_date {
            builder = builder.bind(d);
        }
        if let Some(ref r) = data.reason {
            builder = builder.bind(r);
        }
        if let Some(done) = data.done {
            builder = builder.bind(done);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Appointment {} not found", id)))
    }

    /// Delete an appointment
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Appointment {} not found", id)));
        }
        Ok(())
    }

    /// Count upcoming, not-yet-done appointments (for stats)
    pub async fn count_upcoming(&self, reference_date: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM appointments WHERE scheduled_date >= $1 AND done = 0",
        )
        .bind(reference_date)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
