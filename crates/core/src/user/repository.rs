//! User repository trait

use async_trait::async_trait;

use super::model::User;
use crate::Result;

/// Repository interface for user storage
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user, assigning its unique id.
    ///
    /// Fails with a conflict error when the email is already registered;
    /// email uniqueness is enforced here, at save time.
    async fn save(&self, user: User) -> Result<User>;

    /// Get a user by id
    async fn get(&self, id: i64) -> Result<Option<User>>;

    /// Get a user by (normalized) email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Get all users in registration order
    async fn list_all(&self) -> Result<Vec<User>>;
}
