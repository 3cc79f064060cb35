//! Error types for the core library

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed input, rejected before reaching storage.
    #[error("validation error: {0}")]
    Validation(String),

    /// Uniqueness constraint violated at the storage layer.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad credentials or an invalid/expired token. Carries no detail about
    /// which part of the credentials was wrong.
    #[error("invalid credentials")]
    Authentication,

    #[error("not found: {0}")]
    NotFound(String),

    /// Storage unreachable.
    #[error("storage unavailable: {0}")]
    Connectivity(String),

    #[error("storage error: {0}")]
    Storage(String),
}
