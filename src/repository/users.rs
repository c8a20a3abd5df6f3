//! Users and sessions repository

use chrono::{DateTime, Utc};
use sqlx::{Pool, Sqlite};

use crate::{
    error::{AppError, AppResult},
    models::user::{Role, Session, User},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Sqlite>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<User> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get user by username, if any
    pub async fn get_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Count users (used to detect an empty install)
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Create a user with an already-hashed password
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        display_name: Option<&str>,
        role: Role,
    ) -> AppResult<User> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, display_name, role, crea_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(display_name)
        .bind(role)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                AppError::Conflict(format!("Username {} already exists", username))
            }
            other => AppError::Database(other),
        })?;
        Ok(row)
    }

    /// Update a user's password hash
    pub async fn update_password(&self, id: i64, password_hash: &str) -> AppResult<()> {
        let result = sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    /// Update display name / role
    pub async fn update(
        &self,
        id: i64,
        display_name: Option<&str>,
        role: Option<Role>,
    ) -> AppResult<User> {
        let mut sets = Vec::new();
        let mut idx = 1;

        if display_name.is_some() {
            sets.push(format!("display_name = ${}", idx));
            idx += 1;
        }
        if role.is_some() {
            sets.push(format!("role = ${}", idx));
            idx += 1;
        }
        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE users SET {} WHERE id = ${} RETURNING *",
            sets.join(", "),
            idx
        );

        let mut builder = sqlx::query_as::<_, User>(&query);
        if let Some(name) = display_name {
            builder = builder.bind(name);
        }
        if let Some(r) = role {
            builder = builder.bind(r);
        }

        builder
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Delete a user (cascade deletes their sessions)
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    // ---- Sessions ----

    /// Create a session for a user
    pub async fn session_create(
        &self,
        token: &str,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> AppResult<Session> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, Session>(
            r#"
            INSERT INTO sessions (token, user_id, created_at, expires_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(token)
        .bind(user_id)
        .bind(now)
        .bind(expires_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Get a session by token, if any
    pub async fn session_get(&self, token: &str) -> AppResult<Option<Session>> {
        let session = sqlx::query_as::<_, Session>("SELECT * FROM sessions WHERE token = $1")
            .bind(token)
            .fetch_optional(&self.pool)
            .await?;
        Ok(session)
    }

    /// Delete a session (logout)
    pub async fn session_delete(&self, token: &str) -> AppResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Drop sessions past their expiry
    pub async fn session_purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
