//! Store responses.

use crate::StoreError;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// A response from the store.
#[derive(Debug, Clone)]
pub struct StoreResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl StoreResponse {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// A response carrying a JSON body.
    pub fn json_body(status: u16, value: &serde_json::Value) -> Self {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self::new(status, headers, value.to_string().into_bytes())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, StoreError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| StoreError::ParseError(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_slice(&self.body).map_err(|e| StoreError::ParseError(e.to_string()))
    }

    /// Get a header value.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning an error for non-2xx status codes.
    ///
    /// The store reports failures as `{"message": ...}` (data API) or
    /// `{"error_description": ...}` / `{"msg": ...}` (auth API); the first one
    /// present becomes the error message.
    pub fn error_for_status(self) -> Result<Self, StoreError> {
        if self.is_success() {
            return Ok(self);
        }
        let text = self.text().unwrap_or_else(|_| "Unknown error".to_string());
        let message = serde_json::from_str::<serde_json::Value>(&text)
            .ok()
            .and_then(|v| {
                ["message", "error_description", "msg"]
                    .iter()
                    .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(str::to_string))
            })
            .unwrap_or(text);
        Err(StoreError::HttpError {
            status: self.status,
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> StoreResponse {
        StoreResponse::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_response_is_success() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(201, b"").is_success());
        assert!(make_response(204, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(401, b"").is_success());
    }

    #[test]
    fn test_response_text_invalid_utf8() {
        let resp = make_response(200, &[0xff, 0xfe]);
        assert!(resp.text().is_err());
    }

    #[test]
    fn test_response_json() {
        let resp = make_response(200, br#"[{"id": 1}]"#);
        let rows: Vec<serde_json::Value> = resp.json().unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_response_header_case_insensitive() {
        let resp = StoreResponse::json_body(200, &serde_json::json!([]));
        assert_eq!(resp.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_error_for_status_extracts_message() {
        let resp = make_response(
            400,
            br#"{"code":"PGRST204","message":"Column 'nope' not found"}"#,
        );
        match resp.error_for_status() {
            Err(StoreError::HttpError { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "Column 'nope' not found");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_error_for_status_auth_message() {
        let resp = make_response(
            400,
            br#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#,
        );
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(err.to_string(), "HTTP 400: Invalid login credentials");
    }

    #[test]
    fn test_error_for_status_plain_text() {
        let resp = make_response(503, b"Service Unavailable");
        let err = resp.error_for_status().unwrap_err();
        assert_eq!(err.status(), Some(503));
        assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
    }
}
