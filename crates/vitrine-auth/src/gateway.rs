//! The session store's seam over the HTTP client.
//!
//! Everything the session store needs from the network sits behind this
//! trait, so its state machine is testable with a stub instead of a
//! browser.

use crate::user::User;
use async_trait::async_trait;
use vitrine_data::api::auth::{ProfileUpdate, RegisterUser, TokenResponse};
use vitrine_data::api::ApiClient;
use vitrine_data::ApiError;

/// Authentication calls the session store depends on.
#[async_trait(?Send)]
pub trait AuthGateway {
    /// Exchange credentials for a token.
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError>;

    /// Register a new account.
    async fn register(&self, user: &RegisterUser) -> Result<(), ApiError>;

    /// Fetch the currently authenticated user.
    async fn current_user(&self) -> Result<User, ApiError>;

    /// Update the current user's profile.
    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError>;
}

/// The production gateway: delegates to the API client's auth group.
pub struct ApiAuthGateway {
    client: ApiClient,
}

impl ApiAuthGateway {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl AuthGateway for ApiAuthGateway {
    async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        self.client.auth().login(email, password).await
    }

    async fn register(&self, user: &RegisterUser) -> Result<(), ApiError> {
        self.client.auth().register(user).await
    }

    async fn current_user(&self) -> Result<User, ApiError> {
        self.client.auth().current_user().await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        self.client.auth().update_profile(update).await
    }
}
