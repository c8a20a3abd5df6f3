//! Service reports repository

use chrono::{Datelike, NaiveDate, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::report::{CreateReport, Report, UpdateReport},
};

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Sqlite>,
}

impl ReportsRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List reports, optionally restricted to one client, most recent first
    pub async fn list(&self, client_id: Option<i64>) -> AppResult<Vec<Report>> {
        let rows = match client_id {
            Some(id) => {
                sqlx::query_as::<_, Report>(
                    "SELECT * FROM reports WHERE client_id = $1 ORDER BY report_date DESC, id DESC",
                )
                .bind(id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Report>(
                    "SELECT * FROM reports ORDER BY report_date DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(rows)
    }

    /// Get report by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Report> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Create a report
    pub async fn create(&self, author_id: i64, data: &CreateReport) -> AppResult<Report> {
        let now = Utc::now();
        let report_date = data.report_date.unwrap_or_else(|| now.date_naive());
        let row = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (client_id, author_id, title, report_date, content,
                                 pdf_file, crea_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(data.client_id)
        .bind(author_id)
        .bind(&data.title)
        .bind(report_date)
        .bind(&data.content)
        .bind(&data.pdf_file)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a report
    pub async fn update(&self, id: i64, data: &UpdateReport) -> AppResult<Report> {
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

        add_field!(data.title, "title");
        add_field!(data.report_date, "report_date");
        add_field!(data.content, "content");
        add_field!(data.pdf_file, "pdf_file");

        let query = format!(
            "UPDATE reports SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, Report>(&query).bind(now);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.title);
        bind_field!(data.report_date);
        bind_field!(data.content);
        bind_field!(data.pdf_file);

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", id)))
    }

    /// Delete a report
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }
        Ok(())
    }

    /// Count reports written in the month of the reference date (for stats)
    pub async fn count_for_month(&self, reference_date: NaiveDate) -> AppResult<i64> {
        let month_start =
            NaiveDate::from_ymd_opt(reference_date.year(), reference_date.month(), 1).unwrap();
        let next_month = if reference_date.month() == 12 {
            NaiveDate::from_ymd_opt(reference_date.year() + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(reference_date.year(), reference_date.month() + 1, 1).unwrap()
        };
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reports WHERE report_date >= $1 AND report_date < $2",
        )
        .bind(month_start)
        .bind(next_month)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}
