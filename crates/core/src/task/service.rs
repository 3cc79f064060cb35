//! Task service
//!
//! Enforces the business rules on top of the repository contract. The
//! service holds no state beyond the injected repository reference.

use std::sync::Arc;

use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, Result};

/// Partial update for an existing task
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub name: Option<String>,
    pub completed: Option<bool>,
}

/// Service for task management
pub struct TaskService {
    repo: Arc<dyn TaskRepository>,
}

impl TaskService {
    pub fn new(repo: Arc<dyn TaskRepository>) -> Self {
        Self { repo }
    }

    /// Create a task from a raw name.
    ///
    /// Fails with a validation error when the name is empty or
    /// whitespace-only; nothing is persisted in that case.
    pub async fn create(&self, name: &str) -> Result<Task> {
        let name = validate_name(name)?;
        self.repo.save(Task::new(name)).await
    }

    /// All tasks in creation order
    pub async fn list(&self) -> Result<Vec<Task>> {
        self.repo.list_all().await
    }

    pub async fn get(&self, id: i64) -> Result<Task> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("task {id}")))
    }

    /// Apply a partial update; only the provided fields change
    pub async fn update(&self, id: i64, changes: TaskUpdate) -> Result<Task> {
        let mut task = self.get(id).await?;
        if let Some(name) = changes.name {
            task.name = validate_name(&name)?.to_string();
        }
        if let Some(completed) = changes.completed {
            task.completed = completed;
        }
        self.repo.update(task).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        if self.repo.delete(id).await? {
            Ok(())
        } else {
            Err(Error::NotFound(format!("task {id}")))
        }
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation("task name cannot be empty".to_string()));
    }
    Ok(trimmed)
}
