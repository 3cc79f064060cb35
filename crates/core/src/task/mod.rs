//! Task module
//!
//! This module contains the task entity, the repository contract, both
//! storage backends and the task service.

mod memory_store;
mod model;
mod repository;
mod service;
mod sqlite_store;

pub use memory_store::InMemoryTaskStore;
pub use model::Task;
pub use repository::TaskRepository;
pub use service::{TaskService, TaskUpdate};
pub use sqlite_store::SqliteTaskStore;
