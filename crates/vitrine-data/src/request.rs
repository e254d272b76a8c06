//! HTTP request builder.

use crate::FetchError;
use serde::Serialize;
use std::collections::HashMap;

/// HTTP methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// A builder for constructing HTTP requests.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HashMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Set the request body as an `application/x-www-form-urlencoded` form.
    pub fn form(mut self, fields: &[(&str, &str)]) -> Self {
        let encoded = fields
            .iter()
            .map(|(key, value)| format!("{}={}", urlencode(key), urlencode(value)))
            .collect::<Vec<_>>()
            .join("&");
        self.headers.insert(
            "Content-Type".to_string(),
            "application/x-www-form-urlencoded".to_string(),
        );
        self.body = Some(encoded.into_bytes());
        self
    }

    /// Set the request body as a `multipart/form-data` form carrying a
    /// single file part.
    pub fn multipart_file(
        mut self,
        field: impl AsRef<str>,
        filename: impl AsRef<str>,
        content_type: impl AsRef<str>,
        bytes: Vec<u8>,
    ) -> Self {
        let boundary = multipart_boundary();

        let mut body = Vec::with_capacity(bytes.len() + 256);
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field.as_ref(),
                filename.as_ref()
            )
            .as_bytes(),
        );
        body.extend_from_slice(
            format!("Content-Type: {}\r\n\r\n", content_type.as_ref()).as_bytes(),
        );
        body.extend_from_slice(&bytes);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        self.headers.insert(
            "Content-Type".to_string(),
            format!("multipart/form-data; boundary={boundary}"),
        );
        self.body = Some(body);
        self
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }
}

/// Percent-encode a string for `application/x-www-form-urlencoded` bodies
/// and query strings.
pub(crate) fn urlencode(input: &str) -> String {
    let mut encoded = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            b' ' => encoded.push('+'),
            _ => encoded.push_str(&format!("%{byte:02X}")),
        }
    }
    encoded
}

/// Generate a per-request multipart boundary.
fn multipart_boundary() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("----vitrine-{n:016x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Payload {
            code: String,
        }

        let request = RequestBuilder::new(Method::Post, "/coupons/validate")
            .json(&Payload {
                code: "WELCOME".to_string(),
            })
            .unwrap();

        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(request.body.as_deref(), Some(br#"{"code":"WELCOME"}"# as &[u8]));
    }

    #[test]
    fn test_form_body_is_urlencoded() {
        let request = RequestBuilder::new(Method::Post, "/auth/login")
            .form(&[("username", "ana@example.com"), ("password", "p&ss word")]);

        assert_eq!(
            request.headers.get("Content-Type").map(String::as_str),
            Some("application/x-www-form-urlencoded")
        );
        let body = String::from_utf8(request.body.unwrap()).unwrap();
        assert_eq!(body, "username=ana%40example.com&password=p%26ss+word");
    }

    #[test]
    fn test_bearer_auth_header() {
        let request = RequestBuilder::new(Method::Get, "/users/me").bearer_auth("tok-123");
        assert_eq!(
            request.headers.get("Authorization").map(String::as_str),
            Some("Bearer tok-123")
        );
    }

    #[test]
    fn test_multipart_file_framing() {
        let request = RequestBuilder::new(Method::Post, "/upload/").multipart_file(
            "file",
            "photo.jpg",
            "image/jpeg",
            vec![1, 2, 3],
        );

        let content_type = request.headers.get("Content-Type").unwrap();
        let boundary = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap();

        let body = request.body.unwrap();
        let text = String::from_utf8_lossy(&body);
        assert!(text.starts_with(&format!("--{boundary}\r\n")));
        assert!(text.contains("Content-Disposition: form-data; name=\"file\"; filename=\"photo.jpg\""));
        assert!(text.contains("Content-Type: image/jpeg\r\n\r\n"));
        assert!(text.ends_with(&format!("\r\n--{boundary}--\r\n")));
        // The raw bytes are present between header block and closing boundary
        assert!(body.windows(3).any(|w| w == [1, 2, 3]));
    }

    #[test]
    fn test_multipart_boundaries_are_unique() {
        let a = RequestBuilder::new(Method::Post, "/upload/").multipart_file(
            "file",
            "a.jpg",
            "image/jpeg",
            Vec::new(),
        );
        let b = RequestBuilder::new(Method::Post, "/upload/").multipart_file(
            "file",
            "b.jpg",
            "image/jpeg",
            Vec::new(),
        );
        assert_ne!(
            a.headers.get("Content-Type"),
            b.headers.get("Content-Type")
        );
    }

    #[test]
    fn test_urlencode() {
        assert_eq!(urlencode("plain-text_1.0~"), "plain-text_1.0~");
        assert_eq!(urlencode("a b"), "a+b");
        assert_eq!(urlencode("ñ"), "%C3%B1");
    }
}
