//! In-memory task storage implementation
//!
//! Backs the repository contract with an ordered `Vec` and an
//! auto-incrementing counter. State is owned by the store instance and lives
//! until it is dropped; tests get isolation by constructing their own store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::Task;
use super::repository::TaskRepository;
use crate::{Error, Result};

#[derive(Default)]
struct MemoryState {
    tasks: Vec<Task>,
    next_id: i64,
}

/// Vec-backed task store with a monotonically increasing id counter
#[derive(Default)]
pub struct InMemoryTaskStore {
    state: RwLock<MemoryState>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskStore {
    async fn save(&self, mut task: Task) -> Result<Task> {
        if task.is_persisted() {
            return Err(Error::Storage(format!(
                "task {} already has an id",
                task.id
            )));
        }
        let mut state = self.state.write().await;
        state.next_id += 1;
        task.id = state.next_id;
        state.tasks.push(task.clone());
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Task>> {
        let state = self.state.read().await;
        Ok(state.tasks.iter().find(|task| task.id == id).cloned())
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let mut state = self.state.write().await;
        match state.tasks.iter_mut().find(|slot| slot.id == task.id) {
            Some(slot) => {
                *slot = task.clone();
                Ok(task)
            }
            None => Err(Error::NotFound(format!("task {}", task.id))),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let mut state = self.state.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != id);
        Ok(state.tasks.len() != before)
    }
}
