//! In-memory user storage implementation

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::User;
use super::repository::UserRepository;
use crate::{Error, Result};

#[derive(Default)]
struct MemoryState {
    users: Vec<User>,
    next_id: i64,
}

/// Vec-backed user store enforcing email uniqueness at save time
#[derive(Default)]
pub struct InMemoryUserStore {
    state: RwLock<MemoryState>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn save(&self, mut user: User) -> Result<User> {
        if user.id != 0 {
            return Err(Error::Storage(format!(
                "user {} already has an id",
                user.id
            )));
        }
        let mut state = self.state.write().await;
        if state.users.iter().any(|existing| existing.email == user.email) {
            return Err(Error::Conflict(format!(
                "email '{}' already registered",
                user.email
            )));
        }
        state.next_id += 1;
        user.id = state.next_id;
        state.users.push(user.clone());
        Ok(user)
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|user| user.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let state = self.state.read().await;
        Ok(state.users.iter().find(|user| user.email == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let state = self.state.read().await;
        Ok(state.users.clone())
    }
}
