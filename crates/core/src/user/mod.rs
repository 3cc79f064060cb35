//! User module
//!
//! Parallel structure to the task module: entity, repository contract,
//! storage backends and the registration/login service.

mod memory_store;
mod model;
mod repository;
mod service;
mod sqlite_store;

pub use memory_store::InMemoryUserStore;
pub use model::{User, UserSummary};
pub use repository::UserRepository;
pub use service::{AccessToken, UserService};
pub use sqlite_store::SqliteUserStore;
