//! Typed client for the AyurCare hosted data store.
//!
//! Tables are addressed by their schema types, so the row, insert and update
//! shapes of every call are checked at compile time. Requests follow the
//! store's REST conventions and go out through a pluggable [`Transport`].
//!
//! # Example
//!
//! ```rust,ignore
//! use ayur_schema::public::{ChatMessages, ChatMessageInsert};
//! use ayur_store::{Direction, StoreClient, StoreConfig};
//!
//! let client = StoreClient::new(StoreConfig::from_env()?);
//!
//! let history = client
//!     .from::<ChatMessages>()
//!     .eq("session_id", session_id)
//!     .order("created_at", Direction::Ascending)
//!     .fetch()
//!     .await?;
//!
//! let sent = client
//!     .from::<ChatMessages>()
//!     .insert(&ChatMessageInsert::from_user(session_id, "Is triphala safe daily?"))
//!     .await?;
//! ```

mod config;
mod error;
mod query;
mod request;
mod response;
mod transport;

pub use config::{StoreConfig, ENV_ANON_KEY, ENV_URL};
pub use error::StoreError;
pub use query::{Direction, TableQuery};
pub use request::{Method, StoreRequest};
pub use response::StoreResponse;
pub use transport::{HttpTransport, MockTransport, Transport};

use ayur_schema::{DbFunction, Table};
use std::sync::Arc;

/// Client for one store project.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct StoreClient {
    config: StoreConfig,
    transport: Arc<dyn Transport>,
    access_token: Option<String>,
}

impl std::fmt::Debug for StoreClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreClient")
            .field("url", &self.config.url)
            .field("schema", &self.config.schema)
            .field("authenticated", &self.access_token.is_some())
            .finish()
    }
}

impl StoreClient {
    /// Create a client that talks HTTPS.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(config: StoreConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            transport,
            access_token: None,
        }
    }

    /// Act on behalf of a signed-in user.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Replace or drop the user token.
    pub fn set_access_token(&mut self, token: Option<String>) {
        self.access_token = token;
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Absolute URL for a path on the store.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// A request carrying the project key and the current bearer token.
    ///
    /// Without a user token the project key doubles as the bearer token.
    pub fn request(&self, method: Method, url: impl Into<String>) -> StoreRequest {
        let token = self
            .access_token
            .as_deref()
            .unwrap_or(self.config.anon_key.as_str());
        StoreRequest::new(method, url)
            .header("apikey", self.config.anon_key.clone())
            .header("Accept", "application/json")
            .bearer_auth(token)
    }

    /// Send a request and fail on a non-2xx status.
    pub async fn execute(&self, request: StoreRequest) -> Result<StoreResponse, StoreError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(method = method.as_str(), %url, "store request");

        let response = self.transport.send(request).await?;
        match response.error_for_status() {
            Ok(response) => Ok(response),
            Err(e) => {
                tracing::warn!(method = method.as_str(), %url, error = %e, "store request failed");
                Err(e)
            }
        }
    }

    /// Start a query against table `T`.
    pub fn from<T: Table>(&self) -> TableQuery<'_, T> {
        TableQuery::new(self)
    }

    /// Call a server function.
    pub async fn rpc<F: DbFunction>(&self, args: &F::Args) -> Result<F::Returns, StoreError> {
        let mut request = self
            .request(Method::Post, self.endpoint(&format!("/rest/v1/rpc/{}", F::NAME)))
            .json(args)?;
        if self.config.schema != "public" {
            request = request.header("Content-Profile", self.config.schema.clone());
        }
        self.execute(request).await?.json()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Direction, StoreClient, StoreConfig, StoreError, Transport};
}
