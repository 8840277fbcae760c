//! Authentication endpoints
//!
//! Typed wrappers over `/api/auth/*` plus the local credential checks the
//! app runs before touching the network.

use crate::http::{ApiClient, ApiError};
use serde::{Deserialize, Serialize};

/// Minimum accepted password length
pub const MIN_PASSWORD_LEN: usize = 6;

/// An authenticated user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend-assigned user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
}

/// Body for `POST /api/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Body for `POST /api/auth/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Password
    pub password: String,
}

/// Response from a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    /// The authenticated user
    pub user: User,
    /// Bearer token for subsequent requests
    pub token: String,
}

/// Envelope used by endpoints that return a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEnvelope {
    /// The wrapped user
    pub user: User,
}

/// Check credentials locally before a login attempt
///
/// Mirrors the client-side guards of the app's login form. Returns the
/// message to show the user on the first failed check.
pub fn validate_login(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Please fill in all fields".to_string());
    }
    if !email.contains('@') {
        return Err("Please enter a valid email address".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Err(format!("Password must be at least {MIN_PASSWORD_LEN} characters"));
    }
    Ok(())
}

/// Check registration fields locally before a register attempt
pub fn validate_registration(name: &str, email: &str, password: &str) -> Result<(), String> {
    if name.trim().is_empty() {
        return Err("Please enter your name".to_string());
    }
    validate_login(email, password)
}

impl ApiClient {
    /// `POST /api/auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/api/auth/login", None, &body).await
    }

    /// `POST /api/auth/register`
    ///
    /// Creates the account but does not authenticate; callers log in
    /// afterwards with the same credentials.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ApiError> {
        let body = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let envelope: UserEnvelope = self.post_json("/api/auth/register", None, &body).await?;
        Ok(envelope.user)
    }

    /// `GET /api/auth/me`
    pub async fn me(&self, token: &str) -> Result<User, ApiError> {
        let envelope: UserEnvelope = self.get_json("/api/auth/me", Some(token)).await?;
        Ok(envelope.user)
    }

    /// `POST /api/auth/logout`
    pub async fn logout(&self, token: &str) -> Result<(), ApiError> {
        self.post_unit("/api/auth/logout", Some(token)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_login_accepts_good_credentials() {
        assert!(validate_login("user@example.com", "secret123").is_ok());
    }

    #[test]
    fn test_validate_login_rejects_empty_fields() {
        assert!(validate_login("", "secret123").is_err());
        assert!(validate_login("user@example.com", "").is_err());
        assert!(validate_login("   ", "secret123").is_err());
    }

    #[test]
    fn test_validate_login_rejects_bad_email() {
        let err = validate_login("not-an-email", "secret123").unwrap_err();
        assert!(err.contains("valid email"));
    }

    #[test]
    fn test_validate_login_rejects_short_password() {
        let err = validate_login("user@example.com", "12345").unwrap_err();
        assert!(err.contains("at least 6"));
    }

    #[test]
    fn test_validate_registration_requires_name() {
        assert!(validate_registration("", "user@example.com", "secret123").is_err());
        assert!(validate_registration("Sam", "user@example.com", "secret123").is_ok());
    }

    #[test]
    fn test_user_wire_format() {
        let json = r#"{"id":"u1","name":"Sam","email":"sam@example.com"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, "u1");
        assert_eq!(user.name, "Sam");
    }
}
