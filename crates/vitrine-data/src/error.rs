//! HTTP client error types.
//!
//! Transport faults and application errors are distinct types: a
//! [`FetchError`] means no usable response was obtained, while
//! [`ApiError::Api`] carries the status and normalized message of a
//! non-success response. Reacting to either (e.g. logging out on a 401)
//! is the caller's decision; nothing here touches credentials or
//! navigation.

use serde::Deserialize;
use thiserror::Error;

/// Fallback message when the error body carries no usable detail.
pub const GENERIC_ERROR: &str = "Unknown error";

/// Errors raised by the transport layer.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::JsonError(e.to_string())
    }
}

/// Errors surfaced to API callers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// No response was obtained (network failure, serialization fault).
    #[error(transparent)]
    Transport(#[from] FetchError),

    /// The API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A body was required but the API returned none.
    #[error("Expected a response body")]
    NoContent,
}

impl ApiError {
    /// Check if this is an authentication failure (HTTP 401).
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Api { status: 401, .. })
    }
}

/// The error body shape the API serves: `{"detail": ...}` where detail is
/// either a message string or a list of field-level validation errors.
#[derive(Debug, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub detail: Option<ErrorDetail>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Message(String),
    Fields(Vec<FieldError>),
}

/// One field-level validation error.
#[derive(Debug, Deserialize)]
pub struct FieldError {
    /// Location path of the offending field; segments may be strings or
    /// array indices.
    pub loc: Vec<serde_json::Value>,
    /// Human-readable message.
    pub msg: String,
}

impl FieldError {
    fn dotted_loc(&self) -> String {
        self.loc
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

/// Normalize a non-success response body into a single message.
///
/// A string detail is used verbatim; a validation-error list is joined as
/// `"<dotted.path>: <message>"` comma-separated; anything else (including
/// an unparseable body) falls back to [`GENERIC_ERROR`].
pub fn normalize_error_body(body: &[u8]) -> String {
    let payload: ErrorPayload = match serde_json::from_slice(body) {
        Ok(payload) => payload,
        Err(_) => return GENERIC_ERROR.to_string(),
    };

    match payload.detail {
        Some(ErrorDetail::Message(message)) => message,
        Some(ErrorDetail::Fields(fields)) => fields
            .iter()
            .map(|f| format!("{}: {}", f.dotted_loc(), f.msg))
            .collect::<Vec<_>>()
            .join(", "),
        None => GENERIC_ERROR.to_string(),
    }
}

/// Extract the raw `detail` string of an error body, falling back to the
/// given message. The login and upload paths use this instead of
/// [`normalize_error_body`].
pub fn raw_detail(body: &[u8], fallback: &str) -> String {
    match serde_json::from_slice::<ErrorPayload>(body) {
        Ok(ErrorPayload {
            detail: Some(ErrorDetail::Message(message)),
        }) => message,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_string_detail_verbatim() {
        let body = br#"{"detail": "Product not found"}"#;
        assert_eq!(normalize_error_body(body), "Product not found");
    }

    #[test]
    fn test_normalize_validation_errors() {
        let body = br#"{"detail": [{"loc": ["body", "price"], "msg": "required"}]}"#;
        assert_eq!(normalize_error_body(body), "body.price: required");
    }

    #[test]
    fn test_normalize_joins_multiple_validation_errors() {
        let body = br#"{"detail": [
            {"loc": ["body", "price"], "msg": "required"},
            {"loc": ["body", "items", 0, "quantity"], "msg": "must be positive"}
        ]}"#;
        assert_eq!(
            normalize_error_body(body),
            "body.price: required, body.items.0.quantity: must be positive"
        );
    }

    #[test]
    fn test_normalize_unparseable_body_falls_back() {
        assert_eq!(normalize_error_body(b"<html>502</html>"), GENERIC_ERROR);
    }

    #[test]
    fn test_normalize_missing_detail_falls_back() {
        assert_eq!(normalize_error_body(br#"{"error": "nope"}"#), GENERIC_ERROR);
    }

    #[test]
    fn test_raw_detail() {
        assert_eq!(
            raw_detail(br#"{"detail": "Bad credentials"}"#, "Authentication error"),
            "Bad credentials"
        );
        assert_eq!(
            raw_detail(b"not json", "Authentication error"),
            "Authentication error"
        );
        // Validation lists are not flattened on this path
        assert_eq!(
            raw_detail(
                br#"{"detail": [{"loc": ["body"], "msg": "x"}]}"#,
                "Authentication error"
            ),
            "Authentication error"
        );
    }

    #[test]
    fn test_auth_failure_is_status_based() {
        let err = ApiError::Api {
            status: 401,
            message: "Could not validate credentials".to_string(),
        };
        assert!(err.is_auth_failure());

        let err = ApiError::Api {
            status: 403,
            message: "Forbidden".to_string(),
        };
        assert!(!err.is_auth_failure());

        let err = ApiError::Transport(FetchError::RequestError("refused".to_string()));
        assert!(!err.is_auth_failure());
    }
}
