//! Outgoing store requests.

use crate::StoreError;
use serde::Serialize;
use std::collections::BTreeMap;

/// HTTP methods the store API uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Convert to HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }

    /// Whether the method changes data.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Method::Get)
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => http::Method::GET,
            Method::Post => http::Method::POST,
            Method::Patch => http::Method::PATCH,
            Method::Delete => http::Method::DELETE,
        }
    }
}

/// A fully built request, ready for a [`crate::Transport`].
///
/// Headers are kept in a sorted map so recorded requests compare stably.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRequest {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl StoreRequest {
    /// Create a new request.
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the request body as JSON.
    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, StoreError> {
        let json = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(json);
        Ok(self)
    }

    /// Add a bearer token authorization header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Get a header value.
    pub fn header_value(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Decode the body as JSON, for inspecting recorded requests.
    pub fn body_json(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_slice(b).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Patch.as_str(), "PATCH");
        assert_eq!(http::Method::from(Method::Delete), http::Method::DELETE);
        assert!(!Method::Get.is_mutation());
        assert!(Method::Post.is_mutation());
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let req = StoreRequest::new(Method::Post, "https://x.test/rest/v1/profiles")
            .json(&serde_json::json!({"email": "a@b.com"}))
            .unwrap();
        assert_eq!(req.header_value("content-type"), Some("application/json"));
        assert_eq!(req.body_json().unwrap()["email"], "a@b.com");
    }

    #[test]
    fn test_bearer_auth() {
        let req = StoreRequest::new(Method::Get, "https://x.test").bearer_auth("tok");
        assert_eq!(req.header_value("Authorization"), Some("Bearer tok"));
    }
}
