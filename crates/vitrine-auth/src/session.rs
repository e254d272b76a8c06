//! The session store.

use crate::error::AuthError;
use crate::gateway::AuthGateway;
use crate::navigate::{Navigator, Route};
use crate::user::User;
use std::sync::Arc;
use vitrine_data::api::auth::{ProfileUpdate, RegisterUser};
use vitrine_data::credentials::CredentialStore;
use vitrine_data::ApiError;

/// Session lifecycle states.
///
/// `Loading` exists only between construction and the first `initialize`;
/// the other two are terminal until the next operation. Authenticated
/// state carries both the user and the token, so "authenticated iff user
/// and token present" holds by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SessionState {
    /// Initial state, before the persisted credential has been checked.
    #[default]
    Loading,
    /// No authenticated user.
    Anonymous,
    /// Authenticated user with its bearer token.
    Authenticated { user: User, token: String },
}

/// The authentication session store.
///
/// All mutations run through the operation set below and take `&mut
/// self`, so no two of them can overlap from safe code; network calls via
/// the gateway are the only suspension points.
pub struct SessionStore {
    state: SessionState,
    gateway: Arc<dyn AuthGateway>,
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

impl SessionStore {
    /// Create a store in the `Loading` state.
    pub fn new(
        gateway: Arc<dyn AuthGateway>,
        credentials: Arc<dyn CredentialStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            state: SessionState::Loading,
            gateway,
            credentials,
            navigator,
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Check if the persisted credential has not been resolved yet.
    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading)
    }

    /// Check if a user is authenticated.
    pub fn is_authenticated(&self) -> bool {
        matches!(self.state, SessionState::Authenticated { .. })
    }

    /// Check if the authenticated user is an administrator.
    pub fn is_admin(&self) -> bool {
        match &self.state {
            SessionState::Authenticated { user, .. } => user.is_admin(),
            _ => false,
        }
    }

    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&User> {
        match &self.state {
            SessionState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// The bearer token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }

    /// Resolve the persisted credential into a terminal state.
    ///
    /// Never fails: a missing credential resolves to `Anonymous`, and a
    /// credential the API rejects is cleared and also resolves to
    /// `Anonymous`.
    pub async fn initialize(&mut self) {
        let Some(token) = self.credentials.load() else {
            self.state = SessionState::Anonymous;
            return;
        };

        match self.gateway.current_user().await {
            Ok(user) => {
                self.state = SessionState::Authenticated { user, token };
            }
            Err(err) => {
                log::warn!("stored credential rejected: {}", err);
                self.credentials.clear();
                self.state = SessionState::Anonymous;
            }
        }
    }

    /// Authenticate with email and password.
    ///
    /// On success the token is persisted, the user is fetched, and the
    /// role-based landing route is both navigated to and returned. On
    /// failure the state is left as it was and the error carries the
    /// user-facing message.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Route, AuthError> {
        let token = self.gateway.login(email, password).await?;
        self.credentials.store(&token.access_token);

        match self.gateway.current_user().await {
            Ok(user) => {
                let route = if user.is_admin() {
                    Route::Admin
                } else {
                    Route::Home
                };
                self.state = SessionState::Authenticated {
                    user,
                    token: token.access_token,
                };
                self.navigator.navigate(route);
                Ok(route)
            }
            Err(err) => {
                // The token was accepted but the user fetch failed; drop
                // the credential so storage and state stay consistent.
                self.credentials.clear();
                Err(err.into())
            }
        }
    }

    /// Register a new account. Does not authenticate it.
    pub async fn register(&self, data: &RegisterUser) -> Result<(), AuthError> {
        self.gateway.register(data).await?;
        Ok(())
    }

    /// Clear the credential, reset to `Anonymous`, and navigate to login.
    pub fn logout(&mut self) {
        self.credentials.clear();
        self.state = SessionState::Anonymous;
        self.navigator.navigate(Route::Login);
    }

    /// React to an API error observed elsewhere in the app.
    ///
    /// An authentication failure (HTTP 401) means the credential expired
    /// or was revoked: the session is torn down and the user sent to the
    /// login page. Every other error is left to the caller.
    pub fn observe_api_error(&mut self, error: &ApiError) {
        if error.is_auth_failure() {
            log::warn!("credential no longer valid: {}", error);
            self.logout();
        }
    }

    /// Update the current user's profile and refresh the held user.
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<(), AuthError> {
        if !self.is_authenticated() {
            return Err(AuthError::NotAuthenticated);
        }

        let refreshed = self.gateway.update_profile(update).await?;
        if let SessionState::Authenticated { user, .. } = &mut self.state {
            *user = refreshed;
        }
        Ok(())
    }
}
