pub mod store;

pub use store::SessionStore;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Storage keys, identical to the localStorage layout of the web build so a
/// future shared frontend finds the session where it expects it.
pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Storage failure: {0}")]
    Storage(#[from] crate::storage::StorageError),
    #[error("Failed to serialize user record: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SessionError>;

/// Immutable identity snapshot assigned at login time.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

/// The two-state session machine. There is no automatic expiry; only an
/// explicit logout returns to Unauthenticated.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SessionState {
    Unauthenticated,
    Authenticated { user: User, token: String },
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated { .. })
    }

    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::Authenticated { user, .. } => Some(user),
            SessionState::Unauthenticated => None,
        }
    }
}
