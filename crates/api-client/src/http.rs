//! HTTP transport for the Belajar backend
//!
//! The backend is a plain JSON REST API. Errors come back as an
//! `{"error": "..."}` envelope with a non-2xx status; this module turns
//! those into [`ApiError`] values carrying the status and message.

use reqwest::{Client as ReqwestClient, RequestBuilder, Response as ReqwestResponse};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// API error with HTTP status and message
///
/// Status 0 marks a transport-level failure (connection refused, timeout,
/// unreadable body) where no HTTP status was received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: u16,
    message: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    /// Create a transport-level error with no HTTP status
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(0, message)
    }

    /// Get the HTTP status code (0 for transport failures)
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check if this is a network-related error rather than a rejection
    /// of the request itself
    pub fn is_network_error(&self) -> bool {
        matches!(self.status, 0 | 408 | 425 | 429 | 500 | 502 | 503 | 504 | 522 | 524)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.status == 0 {
            write!(f, "network error: {}", self.message)
        } else {
            write!(f, "API error {}: {}", self.status, self.message)
        }
    }
}

impl std::error::Error for ApiError {}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;

/// Error envelope returned by the backend on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiClientConfig {
    /// Base service URL (e.g., "https://api.belajar.app")
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("Belajar/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiClientConfig {
    /// Create a new config with a base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// HTTP client for the Belajar backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: ReqwestClient,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(config: ApiClientConfig) -> Result<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Get the client configuration
    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET a JSON resource
    pub async fn get_json<T>(&self, path: &str, token: Option<&str>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "GET");

        let req = self.with_auth(self.client.get(&url), token);
        let response = req
            .send()
            .await
            .map_err(|e| ApiError::network(format!("request failed: {e}")))?;

        self.parse_json(response).await
    }

    /// POST a JSON body and parse a JSON response
    pub async fn post_json<B, T>(&self, path: &str, token: Option<&str>, body: &B) -> Result<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "POST");

        let req = self.with_auth(self.client.post(&url), token).json(body);
        let response = req
            .send()
            .await
            .map_err(|e| ApiError::network(format!("request failed: {e}")))?;

        self.parse_json(response).await
    }

    /// POST with no body, checking only the response status
    pub async fn post_unit(&self, path: &str, token: Option<&str>) -> Result<()> {
        let url = format!("{}{}", self.config.base_url, path);
        debug!(%url, "POST");

        let req = self.with_auth(self.client.post(&url), token);
        let response = req
            .send()
            .await
            .map_err(|e| ApiError::network(format!("request failed: {e}")))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    fn with_auth(&self, req: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token {
            Some(token) => req.header("Authorization", format!("Bearer {token}")),
            None => req,
        }
    }

    async fn parse_json<T>(&self, response: ReqwestResponse) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(format!("failed to read response: {e}")))?;

        serde_json::from_str(&body)
            .map_err(|e| ApiError::network(format!("failed to parse JSON: {e}")))
    }

    async fn error_from_response(response: ReqwestResponse) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        match serde_json::from_str::<ErrorEnvelope>(&body) {
            Ok(envelope) => ApiError::new(status, envelope.error),
            Err(_) => ApiError::new(status, format!("HTTP {status}: {body}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_network_classification() {
        assert!(ApiError::network("connection refused").is_network_error());
        assert!(ApiError::new(503, "down").is_network_error());
        assert!(ApiError::new(429, "slow down").is_network_error());
        assert!(!ApiError::new(401, "bad token").is_network_error());
        assert!(!ApiError::new(400, "bad input").is_network_error());
    }

    #[test]
    fn test_api_error_display() {
        let error = ApiError::new(404, "Not found");
        assert_eq!(format!("{error}"), "API error 404: Not found");

        let error = ApiError::network("connection refused");
        assert_eq!(format!("{error}"), "network error: connection refused");
    }

    #[test]
    fn test_config_default() {
        let config = ApiClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("Belajar/"));
    }

    #[test]
    fn test_config_builder() {
        let config = ApiClientConfig::new("https://api.example.com")
            .with_timeout(Duration::from_secs(60))
            .with_user_agent("TestAgent/1.0");

        assert_eq!(config.base_url, "https://api.example.com");
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.user_agent, "TestAgent/1.0");
    }

    #[test]
    fn test_client_construction() {
        let client = ApiClient::new(ApiClientConfig::new("https://api.example.com")).unwrap();
        assert_eq!(client.base_url(), "https://api.example.com");
    }
}
