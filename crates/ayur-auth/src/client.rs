//! Auth service client.
//!
//! Wraps the store's `/auth/v1` endpoints and keeps an [`AuthState`] in sync
//! with every call.

use crate::session::TokenResponse;
use crate::state::{AuthEvent, AuthState};
use crate::{AuthError, AuthUser, Session};
use ayur_store::{Method, StoreClient, StoreError};
use serde::Deserialize;
use serde_json::json;

/// Result of a sign-up.
#[derive(Debug, Clone, PartialEq)]
pub enum SignUpOutcome {
    /// The account is active and a session was started.
    SignedIn(Session),
    /// The account exists but the email must be confirmed first.
    ConfirmationRequired(AuthUser),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(TokenResponse),
    User(AuthUser),
}

/// Client for the auth endpoints.
#[derive(Debug, Clone)]
pub struct AuthClient {
    store: StoreClient,
    state: AuthState,
}

impl AuthClient {
    pub fn new(store: StoreClient) -> Self {
        Self::with_state(store, AuthState::new())
    }

    /// Share an existing state, e.g. one the views already subscribe to.
    pub fn with_state(store: StoreClient, state: AuthState) -> Self {
        Self { store, state }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// A store client acting as the signed-in user, or anonymously.
    pub fn store(&self) -> StoreClient {
        let mut store = self.store.clone();
        store.set_access_token(self.state.get_session().map(|s| s.access_token));
        store
    }

    /// Sign in with email and password.
    ///
    /// On failure the state is left untouched.
    pub async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let url = self.store.endpoint("/auth/v1/token?grant_type=password");
        let request = self
            .store
            .request(Method::Post, url)
            .json(&json!({ "email": email, "password": password }))?;

        let response = match self.store.execute(request).await {
            Ok(response) => response,
            Err(StoreError::HttpError { status: 400, .. }) => {
                tracing::warn!(email, "sign-in rejected");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };

        let session = response.json::<TokenResponse>()?.into_session();
        self.state.set_session(session.clone(), AuthEvent::SignedIn);
        Ok(session)
    }

    /// Create an account. `full_name` is stored in the user metadata.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
    ) -> Result<SignUpOutcome, AuthError> {
        let request = self
            .store
            .request(Method::Post, self.store.endpoint("/auth/v1/signup"))
            .json(&json!({
                "email": email,
                "password": password,
                "data": { "full_name": full_name },
            }))?;

        let response = match self.store.execute(request).await {
            Ok(response) => response,
            Err(StoreError::HttpError { status, message }) if (400..500).contains(&status) => {
                return Err(AuthError::SignUpRejected(message));
            }
            Err(e) => return Err(e.into()),
        };

        match response.json::<SignUpResponse>()? {
            SignUpResponse::Session(token) => {
                let session = token.into_session();
                self.state.set_session(session.clone(), AuthEvent::SignedIn);
                Ok(SignUpOutcome::SignedIn(session))
            }
            SignUpResponse::User(user) => {
                tracing::info!(user = %user.id, "sign-up awaiting email confirmation");
                Ok(SignUpOutcome::ConfirmationRequired(user))
            }
        }
    }

    /// Exchange the refresh token for a new session.
    pub async fn refresh_session(&self) -> Result<Session, AuthError> {
        let current = self.current_raw().ok_or(AuthError::NotSignedIn)?;
        let request = self
            .store
            .request(
                Method::Post,
                self.store.endpoint("/auth/v1/token?grant_type=refresh_token"),
            )
            .json(&json!({ "refresh_token": current.refresh_token }))?;

        let session = self
            .store
            .execute(request)
            .await?
            .json::<TokenResponse>()?
            .into_session();
        self.state
            .set_session(session.clone(), AuthEvent::TokenRefreshed);
        Ok(session)
    }

    /// End the session.
    ///
    /// Local state is cleared even when the server call fails; the error is
    /// still returned.
    pub async fn sign_out(&self) -> Result<(), AuthError> {
        let Some(session) = self.state.get_session() else {
            self.state.clear();
            return Ok(());
        };
        let request = self
            .store
            .request(Method::Post, self.store.endpoint("/auth/v1/logout"))
            .bearer_auth(&session.access_token);
        let result = self.store.execute(request).await;
        self.state.clear();
        result.map(|_| ()).map_err(AuthError::from)
    }

    /// Session including an expired one, for refreshing.
    fn current_raw(&self) -> Option<Session> {
        self.state.raw_session()
    }
}
