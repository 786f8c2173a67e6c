//! The network seam.
//!
//! All store traffic goes through a [`Transport`]. [`HttpTransport`] sends it
//! over the network; [`MockTransport`] records requests and replays canned
//! responses for tests.

use crate::{Method, StoreError, StoreRequest, StoreResponse};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// Sends a request and returns the raw response.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send(&self, request: StoreRequest) -> Result<StoreResponse, StoreError>;
}

/// Transport over HTTPS.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a preconfigured client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: StoreRequest) -> Result<StoreResponse, StoreError> {
        let url = reqwest::Url::parse(&request.url)
            .map_err(|e| StoreError::InvalidUrl(format!("{}: {}", request.url, e)))?;

        let mut builder = self.client.request(request.method.into(), url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| StoreError::RequestError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response
            .bytes()
            .await
            .map_err(|e| StoreError::RequestError(e.to_string()))?
            .to_vec();

        Ok(StoreResponse::new(status, headers, body))
    }
}

/// In-memory transport that records every request.
///
/// Responses are replayed in the order they were queued. When the queue is
/// empty, reads answer `200 []` and mutations answer `201 []`.
#[derive(Debug, Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<StoreResponse>>,
    requests: Mutex<Vec<StoreRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a JSON response.
    pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.push(StoreResponse::json_body(status, &body));
        self
    }

    /// Queue a raw response.
    pub fn push(&self, response: StoreResponse) {
        if let Ok(mut queue) = self.responses.lock() {
            queue.push_back(response);
        }
    }

    /// Every request sent so far.
    pub fn requests(&self) -> Vec<StoreRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<StoreRequest> {
        self.requests().pop()
    }

    /// Number of requests sent so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: StoreRequest) -> Result<StoreResponse, StoreError> {
        let fallback = if request.method == Method::Get { 200 } else { 201 };
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        let queued = self
            .responses
            .lock()
            .map_err(|e| StoreError::RequestError(e.to_string()))?
            .pop_front();
        Ok(queued.unwrap_or_else(|| StoreResponse::json_body(fallback, &serde_json::json!([]))))
    }
}
