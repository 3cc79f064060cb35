//! SQLite-backed task storage implementation
//!
//! Same contract as the in-memory store, persisted to a relational table.
//! The store relies on SQLite to assign primary keys and leaves transaction
//! discipline to the engine; each call runs in its own implicit transaction.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};

use super::model::Task;
use super::repository::TaskRepository;
use crate::db::{map_open_err, map_sqlite_err};
use crate::{Error, Result};

/// Task store backed by a SQLite table
pub struct SqliteTaskStore {
    conn: Mutex<Connection>,
}

impl SqliteTaskStore {
    /// Open (or create) the database at `path` and ensure the schema exists
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path.as_ref()).map_err(map_open_err)?;
        tracing::debug!("Opened task store at {:?}", path.as_ref());
        Self::with_connection(conn)
    }

    /// Open a private in-memory database, mainly for tests
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(map_open_err)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tareas (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                nombre TEXT NOT NULL,
                completada INTEGER NOT NULL DEFAULT 0
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

#[async_trait]
impl TaskRepository for SqliteTaskStore {
    async fn save(&self, mut task: Task) -> Result<Task> {
        if task.is_persisted() {
            return Err(Error::Storage(format!(
                "task {} already has an id",
                task.id
            )));
        }
        let conn = self.lock();
        conn.execute(
            "INSERT INTO tareas (nombre, completada) VALUES (?1, ?2)",
            params![task.name, task.completed],
        )
        .map_err(map_sqlite_err)?;
        task.id = conn.last_insert_rowid();
        Ok(task)
    }

    async fn list_all(&self) -> Result<Vec<Task>> {
        let conn = self.lock();
        let mut stmt = conn
            .prepare("SELECT id, nombre, completada FROM tareas ORDER BY id")
            .map_err(map_sqlite_err)?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Task {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    completed: row.get(2)?,
                })
            })
            .map_err(map_sqlite_err)?;
        rows.collect::<rusqlite::Result<Vec<Task>>>()
            .map_err(map_sqlite_err)
    }

    async fn get(&self, id: i64) -> Result<Option<Task>> {
        let conn = self.lock();
        conn.query_row(
            "SELECT id, nombre, completada FROM tareas WHERE id = ?1",
            params![id],
            |row| {
                Ok(Task {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    completed: row.get(2)?,
                })
            },
        )
        .optional()
        .map_err(map_sqlite_err)
    }

    async fn update(&self, task: Task) -> Result<Task> {
        let conn = self.lock();
        let changed = conn
            .execute(
                "UPDATE tareas SET nombre = ?2, completada = ?3 WHERE id = ?1",
                params![task.id, task.name, task.completed],
            )
            .map_err(map_sqlite_err)?;
        if changed == 0 {
            return Err(Error::NotFound(format!("task {}", task.id)));
        }
        Ok(task)
    }

    async fn delete(&self, id: i64) -> Result<bool> {
        let conn = self.lock();
        let changed = conn
            .execute("DELETE FROM tareas WHERE id = ?1", params![id])
            .map_err(map_sqlite_err)?;
        Ok(changed > 0)
    }
}
