//! Shared SQLite error mapping for the database-backed stores.

use rusqlite::ErrorCode;

use crate::Error;

/// Map a rusqlite error onto the crate taxonomy.
///
/// Constraint violations become [`Error::Conflict`]; errors that indicate an
/// unreachable or busy database become [`Error::Connectivity`].
pub(crate) fn map_sqlite_err(err: rusqlite::Error) -> Error {
    match err.sqlite_error_code() {
        Some(ErrorCode::ConstraintViolation) => Error::Conflict(err.to_string()),
        Some(ErrorCode::CannotOpen)
        | Some(ErrorCode::DatabaseBusy)
        | Some(ErrorCode::DatabaseLocked)
        | Some(ErrorCode::DiskFull) => Error::Connectivity(err.to_string()),
        _ => Error::Storage(err.to_string()),
    }
}

/// Map an open-time rusqlite error; here everything counts as connectivity.
pub(crate) fn map_open_err(err: rusqlite::Error) -> Error {
    Error::Connectivity(err.to_string())
}
