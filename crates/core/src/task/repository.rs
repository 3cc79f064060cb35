//! Task repository trait
//!
//! Defines the interface for task storage operations. Implementations are
//! selected at construction time and injected into the service.

use async_trait::async_trait;

use super::model::Task;
use crate::Result;

/// Repository interface for task storage
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Persist a new task, assigning its unique id.
    ///
    /// Must be called at most once per logical task; there are no upsert
    /// semantics.
    async fn save(&self, task: Task) -> Result<Task>;

    /// Get all tasks in insertion order
    async fn list_all(&self) -> Result<Vec<Task>>;

    /// Get a task by id
    async fn get(&self, id: i64) -> Result<Option<Task>>;

    /// Update an existing task
    async fn update(&self, task: Task) -> Result<Task>;

    /// Delete a task by id, returning whether it existed
    async fn delete(&self, id: i64) -> Result<bool>;
}
