//! Authentication errors.

use thiserror::Error;
use vitrine_data::ApiError;

/// Session operation errors.
///
/// These are returned, never panicked; the Display form is the
/// user-facing message.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The API rejected the operation; carries its message.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The operation requires an authenticated session.
    #[error("Not authenticated")]
    NotAuthenticated,
}

impl AuthError {
    /// Check if this is an authentication failure (expired or invalid
    /// credential).
    pub fn is_auth_failure(&self) -> bool {
        match self {
            AuthError::Api(api) => api.is_auth_failure(),
            AuthError::NotAuthenticated => true,
        }
    }
}
