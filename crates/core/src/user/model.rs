//! User model definitions

use serde::Serialize;

/// A registered user
///
/// The password is stored only as a salted hash; this type deliberately has
/// no serde derives so the hash can never leak through a response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
}

/// Public view of a user, safe to serialize
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
}

impl User {
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            email: self.email.clone(),
        }
    }
}
