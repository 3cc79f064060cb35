//! SQLite-backed user storage implementation
//!
//! Email uniqueness is enforced by a UNIQUE constraint on the table; a
//! violation surfaces as a conflict error.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use super::model::User;
use super::repository::UserRepository;
use crate::db::{map_open_err, map_sqlite_err};
use crate::{Error, Result};

/// User store backed by a SQLite table
pub struct SqliteUserStore {
    conn: Mutex<Connection>,
}

impl SqliteUserStore {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref()).map_err(map_open_err)?;
        tracing::debug!("Opened user store at {:?}", path.as_ref());
        Self::with_connection(conn)
    }

    /// Open a private in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(map_open_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS usuarios (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                email TEXT NOT NULL UNIQUE,
                password_hash TEXT NOT NULL
            )",
            [],
        )
        .map_err(map_sqlite_err)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        email: row.get(1)?,
        password_hash: row.get(2)?,
    })
}

#[async_trait]
impl UserRepository for SqliteUserStore {
    async fn save(&self, mut user: User) -> Result<User> {
        if user.id != 0 {
            return Err(Error::Storage(format!(
                "user {} already has an id",
                user.id
            )));
        }
        let conn = self.lock();
        let inserted = conn.execute(
            "INSERT INTO usuarios (email, password_hash) VALUES (?1, ?2)",
            params![user.email, user.password_hash],
        );
        match inserted {
            Ok(_) => {
                user.id = conn.last_insert_rowid();
                Ok(user)
            }
            Err(err) if err.sqlite_error_code() == Some(ErrorCode::ConstraintViolation) => {
                Err(Error::Conflict(format!(
                    "email '{}' already registered",
                    user.email
                )))
            }
            Err(err) => Err(map_sqlite_err(err)),
        }
    }

    async fn get(&self, id: i64) -> Result<Option<User>> {
        let conn = self.lock();
        conn.query_row(
            "SELECT id, email, password_hash FROM usuarios WHERE id = ?1",
            params![id],
            row_to_user,
        )
        .optional()
        .map_err(map_sqlite_err)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.lock();
        conn.query_row(
            "SELECT id, email, password_hash FROM usuarios WHERE email = ?1",
            params![email],
            row_to_user,
        )
        .optional()
        .map_err(map_sqlite_err)
    }

    async fn list_all(&self) -> Result<Vec<User>> {
        let conn = self.lock();
        let mut stmt = conn
            .prepare("SELECT id, email, password_hash FROM usuarios ORDER BY id")
            .map_err(map_sqlite_err)?;
        let rows = stmt.query_map([], row_to_user).map_err(map_sqlite_err)?;
        rows.collect::<rusqlite::Result<Vec<User>>>()
            .map_err(map_sqlite_err)
    }
}
