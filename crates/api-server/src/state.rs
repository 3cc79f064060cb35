//! Application state

use std::sync::Arc;

use tareas_core::auth::TokenSigner;
use tareas_core::task::{InMemoryTaskStore, SqliteTaskStore, TaskRepository, TaskService};
use tareas_core::user::{InMemoryUserStore, SqliteUserStore, UserRepository, UserService};

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    tasks: TaskService,
    users: UserService,
    backend: &'static str,
    api_key: Option<String>,
}

impl AppState {
    /// Build the services with the storage backend selected by configuration
    pub fn new(config: &Config) -> tareas_core::Result<Self> {
        let signer = TokenSigner::new(config.jwt_secret.clone(), config.token_ttl_seconds);

        let (task_repo, user_repo, backend): (
            Arc<dyn TaskRepository>,
            Arc<dyn UserRepository>,
            &'static str,
        ) = match &config.database_path {
            Some(path) => (
                Arc::new(SqliteTaskStore::open(path)?),
                Arc::new(SqliteUserStore::open(path)?),
                "sqlite",
            ),
            None => (
                Arc::new(InMemoryTaskStore::new()),
                Arc::new(InMemoryUserStore::new()),
                "memory",
            ),
        };

        Ok(Self {
            inner: Arc::new(AppStateInner {
                tasks: TaskService::new(task_repo),
                users: UserService::new(user_repo, signer),
                backend,
                api_key: config.api_key.clone(),
            }),
        })
    }

    pub fn tasks(&self) -> &TaskService {
        &self.inner.tasks
    }

    pub fn users(&self) -> &UserService {
        &self.inner.users
    }

    pub fn backend(&self) -> &'static str {
        self.inner.backend
    }

    pub fn api_key(&self) -> Option<&str> {
        self.inner.api_key.as_deref()
    }
}

#[cfg(test)]
impl AppState {
    /// Memory-backed state for route tests
    pub(crate) fn in_memory(api_key: Option<&str>) -> Self {
        let signer = TokenSigner::new("test-secret", 3600);
        Self {
            inner: Arc::new(AppStateInner {
                tasks: TaskService::new(Arc::new(InMemoryTaskStore::new())),
                users: UserService::new(Arc::new(InMemoryUserStore::new()), signer),
                backend: "memory",
                api_key: api_key.map(str::to_string),
            }),
        }
    }
}
