//! Authentication for AyurCare.
//!
//! [`AuthClient`] talks to the hosted auth service; [`AuthState`] holds the
//! resulting session and tells subscribers about every change. Views get an
//! [`AuthContext`] snapshot rather than touching the state directly.

mod client;
mod context;
mod error;
mod session;
mod state;
mod user;

pub use client::{AuthClient, SignUpOutcome};
pub use context::AuthContext;
pub use error::AuthError;
pub use session::Session;
pub use state::{AuthEvent, AuthState, Subscription};
pub use user::AuthUser;
