//! Session manager
//!
//! Owns the authenticated session: rehydrates it from local storage at
//! startup, runs login/register/logout against the backend, and keeps the
//! persisted copy ahead of the in-memory one so a crash between the two
//! never leaves storage claiming less than memory does.
//!
//! # Example
//!
//! ```rust,no_run
//! use api_client::{ApiClient, ApiClientConfig, SessionManager};
//! use std::sync::Arc;
//! use storage::{KvConfig, KvStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(ApiClientConfig::new("https://api.belajar.app"))?;
//!     let store = Arc::new(KvStore::new(KvConfig::new("belajar_kv.db"))?);
//!     let manager = SessionManager::new(client, store);
//!
//!     manager.load().await;
//!     if !manager.is_authenticated() {
//!         manager.login("user@example.com", "password123").await?;
//!     }
//!     Ok(())
//! }
//! ```

use crate::auth::{self, User};
use crate::http::ApiClient;
use crate::session::{AuthError, AuthState, Result, Session, TOKEN_KEY, USER_KEY};
use std::sync::{Arc, RwLock};
use storage::{KeyValue, KvError};
use tracing::{debug, warn};

/// Session manager configuration
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Validate rehydrated credentials against `GET /api/auth/me` during
    /// [`SessionManager::load`]. Off by default so startup works offline.
    pub validate_on_load: bool,
}

impl SessionConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable startup validation
    pub fn validate_on_load(mut self, enabled: bool) -> Self {
        self.validate_on_load = enabled;
        self
    }
}

/// Manages the authenticated session for the app
///
/// Persistence ordering: credentials are written to storage before the
/// in-memory session is published, and cleared from storage before the
/// in-memory session is dropped on failure paths. Operations take no
/// cross-operation lock; concurrent login and logout may interleave, and
/// the last writer wins. Callers serialize these at the UI layer.
pub struct SessionManager {
    client: ApiClient,
    store: Arc<dyn KeyValue>,
    config: SessionConfig,
    session: RwLock<Option<Session>>,
    state: RwLock<AuthState>,
}

impl SessionManager {
    /// Create a session manager with default configuration
    pub fn new(client: ApiClient, store: Arc<dyn KeyValue>) -> Self {
        Self::with_config(client, store, SessionConfig::default())
    }

    /// Create a session manager with explicit configuration
    pub fn with_config(client: ApiClient, store: Arc<dyn KeyValue>, config: SessionConfig) -> Self {
        Self {
            client,
            store,
            config,
            session: RwLock::new(None),
            state: RwLock::new(AuthState::Unknown),
        }
    }

    /// Rehydrate the session from storage
    ///
    /// Resolves the startup `Unknown` state. Both keys present and intact
    /// publishes `Authenticated` (after an optional remote check when
    /// `validate_on_load` is set); anything else, including storage read
    /// failures, lands on `Unauthenticated`. Never fails: a session that
    /// cannot be restored is simply not restored.
    pub async fn load(&self) -> AuthState {
        let restored = match (self.store.get(TOKEN_KEY), self.store.get(USER_KEY)) {
            (Ok(Some(token)), Ok(Some(user_json))) => {
                match serde_json::from_str::<User>(&user_json) {
                    Ok(user) => Some(Session { user, token }),
                    Err(e) => {
                        warn!(error = %e, "stored user record is corrupt, discarding session");
                        self.purge_storage();
                        None
                    }
                }
            }
            (Ok(None), Ok(None)) => None,
            (Ok(_), Ok(_)) => {
                // One key without the other is leftover partial state.
                warn!("found partial credentials in storage, discarding");
                self.purge_storage();
                None
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "failed to read stored credentials");
                None
            }
        };

        let restored = match restored {
            Some(session) if self.config.validate_on_load => {
                match self.client.me(&session.token).await {
                    Ok(user) => {
                        debug!(user = %user.email, "restored session validated");
                        Some(Session { user, token: session.token })
                    }
                    Err(e) => {
                        warn!(error = %e, "restored session failed validation, discarding");
                        self.purge_storage();
                        None
                    }
                }
            }
            other => other,
        };

        let state = if restored.is_some() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        };
        self.publish(restored, state);
        state
    }

    /// Log in with email and password
    ///
    /// Credentials are checked locally first; a request only goes out when
    /// they pass. On success the session is persisted before it becomes
    /// visible through the read methods.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        auth::validate_login(email, password).map_err(AuthError::Validation)?;

        let response = self.client.login(email, password).await?;
        let user_json = serde_json::to_string(&response.user)
            .map_err(|_| AuthError::Storage(KvError::InvalidValue(USER_KEY.to_string())))?;

        self.store.set(TOKEN_KEY, &response.token)?;
        if let Err(e) = self.store.set(USER_KEY, &user_json) {
            // Half-written credentials must not survive.
            if let Err(rollback) = self.store.remove(TOKEN_KEY) {
                warn!(error = %rollback, "failed to roll back token after user write failure");
            }
            return Err(e.into());
        }

        debug!(user = %response.user.email, "logged in");
        let session = Session {
            user: response.user.clone(),
            token: response.token,
        };
        self.publish(Some(session), AuthState::Authenticated);

        Ok(response.user)
    }

    /// Register a new account
    ///
    /// Does not authenticate; callers log in with the new credentials
    /// afterwards.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        auth::validate_registration(name, email, password).map_err(AuthError::Validation)?;

        let user = self.client.register(name, email, password).await?;
        debug!(user = %user.email, "registered");
        Ok(user)
    }

    /// Log out, clearing the session everywhere
    ///
    /// Remote invalidation is best-effort; local credentials are cleared
    /// regardless. Idempotent, and never fails.
    pub async fn logout(&self) {
        if let Some(token) = self.token() {
            if let Err(e) = self.client.logout(&token).await {
                warn!(error = %e, "remote logout failed, clearing local session anyway");
            }
        }

        self.purge_storage();
        self.publish(None, AuthState::Unauthenticated);
        debug!("logged out");
    }

    /// Re-fetch the current user from the backend
    ///
    /// Overwrites the stored and cached user record on success. Any
    /// failure of the remote check discards the session: a token the
    /// backend no longer honors must not keep serving a cached user.
    pub async fn refresh_user(&self) -> Result<User> {
        let token = self.token().ok_or(AuthError::NotAuthenticated)?;

        let user = match self.client.me(&token).await {
            Ok(user) => user,
            Err(e) => {
                warn!(error = %e, "session rejected during refresh, discarding");
                self.purge_storage();
                self.publish(None, AuthState::Unauthenticated);
                return Err(e.into());
            }
        };

        let user_json = serde_json::to_string(&user)
            .map_err(|_| AuthError::Storage(KvError::InvalidValue(USER_KEY.to_string())))?;
        self.store.set(USER_KEY, &user_json)?;

        self.publish(Some(Session { user: user.clone(), token }), AuthState::Authenticated);
        Ok(user)
    }

    /// Current authentication state
    pub fn auth_state(&self) -> AuthState {
        *self.state.read().unwrap()
    }

    /// Whether a session is active
    pub fn is_authenticated(&self) -> bool {
        self.auth_state() == AuthState::Authenticated
    }

    /// The current user, if authenticated
    pub fn current_user(&self) -> Option<User> {
        self.session.read().unwrap().as_ref().map(|s| s.user.clone())
    }

    /// The current bearer token, if authenticated
    pub fn token(&self) -> Option<String> {
        self.session.read().unwrap().as_ref().map(|s| s.token.clone())
    }

    /// The API client this manager talks through
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Replace the in-memory session and state together
    fn publish(&self, session: Option<Session>, state: AuthState) {
        *self.session.write().unwrap() = session;
        *self.state.write().unwrap() = state;
    }

    /// Remove both credential keys from storage
    fn purge_storage(&self) {
        if let Err(e) = self.store.multi_remove(&[TOKEN_KEY, USER_KEY]) {
            warn!(error = %e, "failed to clear stored credentials");
        }
    }
}
