//! User persistence behind an injected trait so handlers never touch the
//! driver directly and tests can swap in an in-memory store.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

pub mod memory;
pub mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // Argon2 hash, not exposed in JSON
    pub name: Option<String>,
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("email already taken")]
    DuplicateEmail,

    #[error("{0}")]
    Backend(String),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user. The store enforces email uniqueness; a duplicate
    /// insert fails with [`StoreError::DuplicateEmail`] even when a
    /// concurrent registration slipped past the caller's pre-check.
    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;
}
