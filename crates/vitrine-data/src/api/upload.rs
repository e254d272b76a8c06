//! Image upload endpoint.

use crate::api::ApiClient;
use crate::error::raw_detail;
use crate::{ApiError, Method};
use serde::Deserialize;

/// Fallback message for the upload path.
const UPLOAD_ERROR: &str = "Image upload failed";

/// The stored image the upload endpoint returns.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedImage {
    /// Public URL of the stored image.
    pub url: String,
}

/// Image upload endpoint group.
pub struct UploadApi<'a> {
    pub(crate) client: &'a ApiClient,
}

impl UploadApi<'_> {
    /// Upload an image (authenticated, multipart).
    ///
    /// Multipart bodies bypass the JSON client conventions; the bearer
    /// token is attached to the builder directly.
    pub async fn image(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadedImage, ApiError> {
        let mut request = self
            .client
            .transport()
            .request(Method::Post, "/upload/")
            .multipart_file("file", filename, content_type, bytes);

        if let Some(token) = self.client.credentials().load() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            log::error!("upload request failed: {}", e);
            ApiError::from(e)
        })?;

        if !response.is_success() {
            return Err(ApiError::Api {
                status: response.status,
                message: raw_detail(response.bytes(), UPLOAD_ERROR),
            });
        }

        Ok(response.json()?)
    }
}
