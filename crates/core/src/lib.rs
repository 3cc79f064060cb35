//! Core library for the tareas API
//!
//! This crate contains the storage-agnostic business logic, including:
//! - Task entity, repository contract and storage backends
//! - User entity, repository contract and storage backends
//! - Password hashing and token signing

pub mod auth;
mod db;
pub mod error;
pub mod task;
pub mod user;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
