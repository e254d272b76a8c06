//! Authentication and profile endpoints.

use crate::api::ApiClient;
use crate::error::raw_detail;
use crate::{ApiError, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use vitrine_commerce::checkout::Address;

/// Fallback message for the login path.
const LOGIN_ERROR: &str = "Authentication error";

/// The token the authentication endpoint issues.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token.
    pub access_token: String,
    /// Token type, nominally "bearer".
    #[serde(default)]
    pub token_type: Option<String>,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterUser {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Partial profile update for `PATCH /users/me`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Authentication endpoint group.
pub struct AuthApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl AuthApi<'_> {
    /// Exchange credentials for a token.
    ///
    /// This endpoint takes form-encoded credentials, not JSON, so the
    /// request is built on the transport layer directly; errors carry the
    /// raw `detail` field rather than the normalized message.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let response = self
            .client
            .transport()
            .request(Method::Post, "/auth/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .form(&[("username", email), ("password", password)])
            .send()
            .await
            .map_err(|e| {
                log::error!("login request failed: {}", e);
                ApiError::from(e)
            })?;

        if !response.is_success() {
            return Err(ApiError::Api {
                status: response.status,
                message: raw_detail(response.bytes(), LOGIN_ERROR),
            });
        }

        Ok(response.json()?)
    }

    /// Register a new account. Does not authenticate it.
    pub async fn register(&self, user: &RegisterUser) -> Result<(), ApiError> {
        self.client
            .post("/auth/register")
            .public()
            .json(user)?
            .execute()
            .await
    }

    /// Fetch the currently authenticated user.
    pub async fn current_user<U: DeserializeOwned>(&self) -> Result<U, ApiError> {
        self.client.get("/users/me").fetch().await
    }

    /// Update the current user's profile.
    pub async fn update_profile<U: DeserializeOwned>(
        &self,
        update: &ProfileUpdate,
    ) -> Result<U, ApiError> {
        self.client
            .patch("/users/me")
            .json(update)?
            .fetch()
            .await
    }
}
