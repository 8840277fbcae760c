//! HTTP API client and session management for Belajar
//!
//! This crate talks to the Belajar backend: typed wrappers over the REST
//! endpoints (auth, quiz, progress) plus the [`SessionManager`] that keeps
//! the authenticated session in sync between memory and local storage.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod auth;
pub mod http;
pub mod quiz;
pub mod session;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest, User};
pub use http::{ApiClient, ApiClientConfig, ApiError};
pub use quiz::{ProgressUpdate, QuizProgress, QuizResult, QuizStats, QuizSubmission};
pub use session::{AuthError, AuthState, Session, SessionConfig, SessionManager};
