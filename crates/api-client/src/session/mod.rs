//! Session state and errors
//!
//! The session types shared by the [`SessionManager`]: the authenticated
//! session record, the observable auth state, and the error taxonomy
//! callers branch on.

use crate::auth::User;
use crate::http::ApiError;
use serde::{Deserialize, Serialize};
use storage::KvError;
use thiserror::Error;

mod manager;

pub use manager::{SessionConfig, SessionManager};

/// Storage key holding the raw bearer token
pub const TOKEN_KEY: &str = "token";

/// Storage key holding the cached user record as JSON
pub const USER_KEY: &str = "user";

/// An authenticated session
///
/// User and token live in one struct so they are present together or
/// absent together; there is no state where only one of them exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// The authenticated user
    pub user: User,
    /// Bearer token for API requests
    pub token: String,
}

/// Observable authentication state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    /// Startup state, before stored credentials have been examined
    Unknown,
    /// A session is active
    Authenticated,
    /// No session; credentials are absent or were rejected
    Unauthenticated,
}

/// Errors surfaced by session operations
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend rejected the credentials or token
    #[error("invalid credentials")]
    InvalidCredentials,

    /// A request was rejected for reasons the user can fix
    #[error("{0}")]
    Validation(String),

    /// The backend could not be reached or answered with a server error
    #[error("network error: {0}")]
    Network(String),

    /// Local storage failed
    #[error("storage error: {0}")]
    Storage(#[from] KvError),

    /// The operation requires an active session
    #[error("not authenticated")]
    NotAuthenticated,
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err.status() {
            401 | 403 => AuthError::InvalidCredentials,
            _ if err.is_network_error() => AuthError::Network(err.message().to_string()),
            _ => AuthError::Validation(err.message().to_string()),
        }
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, AuthError>;
