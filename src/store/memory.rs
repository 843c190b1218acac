use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{StoreError, User, UserStore};

/// In-memory store for tests. Enforces the same email uniqueness the
/// Postgres unique index does.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().expect("store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().expect("store lock poisoned");
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.lock().expect("store lock poisoned");
        if users.iter().any(|u| u.email == email) {
            return Err(StoreError::DuplicateEmail);
        }
        let user = User {
            id: Uuid::new_v4(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            name: None,
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn create_and_find_roundtrip() {
        let store = MemoryUserStore::new();
        let created = store.create("a@b.com", "$argon2-hash").await.expect("create");
        let found = store
            .find_by_email("a@b.com")
            .await
            .expect("find")
            .expect("user present");
        assert_eq!(found.id, created.id);
        assert!(store.find_by_email("x@y.com").await.expect("find").is_none());
    }

    #[tokio::test]
    async fn duplicate_insert_rejected() {
        let store = MemoryUserStore::new();
        store.create("a@b.com", "h1").await.expect("first create");
        let err = store.create("a@b.com", "h2").await.unwrap_err();
        assert!(matches!(err, StoreError::DuplicateEmail));
        assert_eq!(store.len(), 1);
    }
}
