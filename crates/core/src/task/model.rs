//! Task model definitions

use serde::{Deserialize, Serialize};

/// A task in the list
///
/// `id` is `0` until the task has been saved; the repository assigns the
/// definitive id, which never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub completed: bool,
}

impl Task {
    /// Create an unsaved task with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            completed: false,
        }
    }

    /// Whether the repository has assigned an id yet
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }
}
