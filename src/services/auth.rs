//! Authentication service: argon2 password hashing and DB-backed sessions

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::{DateTime, Duration, Utc};
use rand::RngCore;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::user::{CreateUser, Role, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
    config: AuthConfig,
}

impl AuthService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate by username and password, creating a new session.
    /// Returns the opaque session token and the user.
    pub async fn login(&self, username: &str, password: &str) -> AppResult<(String, User)> {
        let user = self
            .repository
            .users
            .get_by_username(username)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid username or password".to_string()))?;

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication("Invalid username or password".to_string()));
        }

        let token = generate_token();
        let expires_at = Utc::now() + Duration::hours(self.config.session_ttl_hours as i64);
        self.repository
            .users
            .session_create(&token, user.id, expires_at)
            .await?;

        Ok((token, user))
    }

    /// Resolve a session token to its user, rejecting expired sessions
    pub async fn validate_session(&self, token: &str, now: DateTime<Utc>) -> AppResult<User> {
        let session = self
            .repository
            .users
            .session_get(token)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid session".to_string()))?;

        if session.expires_at <= now {
            self.repository.users.session_delete(token).await?;
            return Err(AppError::Authentication("Session expired".to_string()));
        }

        self.repository.users.get_by_id(session.user_id).await
    }

    /// Destroy a session
    pub async fn logout(&self, token: &str) -> AppResult<()> {
        self.repository.users.session_delete(token).await
    }

    /// Drop all expired sessions
    pub async fn purge_expired_sessions(&self) -> AppResult<u64> {
        self.repository.users.session_purge_expired(Utc::now()).await
    }

    /// List all users
    pub async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.users.list().await
    }

    /// Get one user
    pub async fn get_user(&self, id: i64) -> AppResult<User> {
        self.repository.users.get_by_id(id).await
    }

    /// Create a user
    pub async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        let hash = self.hash_password(&data.password)?;
        self.repository
            .users
            .create(&data.username, &hash, data.display_name.as_deref(), data.role)
            .await
    }

    /// Update a user, rehashing the password when one is supplied
    pub async fn update_user(&self, id: i64, data: &UpdateUser) -> AppResult<User> {
        if let Some(ref password) = data.password {
            let hash = self.hash_password(password)?;
            self.repository.users.update_password(id, &hash).await?;
        }
        self.repository
            .users
            .update(id, data.display_name.as_deref(), data.role)
            .await
    }

    /// Delete a user
    pub async fn delete_user(&self, id: i64) -> AppResult<()> {
        self.repository.users.delete(id).await
    }

    /// Seed a default admin account on an empty install
    pub async fn ensure_default_admin(&self) -> AppResult<()> {
        if self.repository.users.count().await? > 0 {
            return Ok(());
        }
        let hash = self.hash_password("admin")?;
        self.repository
            .users
            .create("admin", &hash, Some("Administrator"), Role::Admin)
            .await?;
        tracing::warn!("Created default admin account (admin/admin), change the password");
        Ok(())
    }

    /// Verify a password against the stored argon2 hash
    fn verify_password(&self, user: &User, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::Internal(format!("Invalid stored password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Hash a password using Argon2
    fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;
        Ok(hash.to_string())
    }
}

/// Generate an opaque 256-bit session token, hex encoded
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
