//! Shared auth state and change notifications.
//!
//! [`AuthState`] holds the current session and a set of listeners. Every
//! transition (sign-in, sign-out, refresh) is announced to the listeners
//! with the session that is current after the change. A listener stays
//! registered for as long as its [`Subscription`] is alive.
//!
//! Changes and their announcements are serialized, so every listener sees
//! events in the order the changes happened. Listeners may read the state
//! but must not change it from inside the callback.

use crate::context::AuthContext;
use crate::session::Session;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, Weak};

/// Kinds of auth transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthEvent {
    /// Sent once to a new listener with the session at subscribe time.
    InitialSession,
    SignedIn,
    SignedOut,
    TokenRefreshed,
    UserUpdated,
}

impl AuthEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthEvent::InitialSession => "INITIAL_SESSION",
            AuthEvent::SignedIn => "SIGNED_IN",
            AuthEvent::SignedOut => "SIGNED_OUT",
            AuthEvent::TokenRefreshed => "TOKEN_REFRESHED",
            AuthEvent::UserUpdated => "USER_UPDATED",
        }
    }
}

impl std::fmt::Display for AuthEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

type Listener = Arc<dyn Fn(AuthEvent, Option<&Session>) + Send + Sync>;

#[derive(Default)]
struct Inner {
    session: Option<Session>,
    listeners: BTreeMap<u64, Listener>,
    next_id: u64,
}

/// The current session plus its listeners. Clones share state.
#[derive(Clone, Default)]
pub struct AuthState {
    inner: Arc<Mutex<Inner>>,
    dispatch: Arc<Mutex<()>>,
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.lock();
        f.debug_struct("AuthState")
            .field("signed_in", &inner.session.is_some())
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

fn lock_inner<T>(inner: &Mutex<T>) -> MutexGuard<'_, T> {
    // A listener that panicked must not take auth down with it.
    inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        lock_inner(&self.inner)
    }

    /// Held across a change and its delivery.
    fn turn(&self) -> MutexGuard<'_, ()> {
        lock_inner(&self.dispatch)
    }

    /// The current session. An expired session reads as `None`.
    pub fn get_session(&self) -> Option<Session> {
        self.lock()
            .session
            .as_ref()
            .filter(|s| !s.is_expired())
            .cloned()
    }

    /// The stored session even if expired.
    pub(crate) fn raw_session(&self) -> Option<Session> {
        self.lock().session.clone()
    }

    /// Whether a live session exists.
    pub fn is_authenticated(&self) -> bool {
        self.get_session().is_some()
    }

    /// Snapshot for views.
    pub fn context(&self) -> AuthContext {
        AuthContext::from_session(self.get_session().as_ref())
    }

    /// Replace the session and announce `event`.
    pub fn set_session(&self, session: Session, event: AuthEvent) {
        tracing::info!(event = %event, user = %session.user.id, "auth state changed");
        let _turn = self.turn();
        let (listeners, current) = {
            let mut inner = self.lock();
            inner.session = Some(session);
            (inner.listeners(), inner.session.clone())
        };
        deliver(&listeners, event, current.as_ref());
    }

    /// Drop the session. Announces `SignedOut` only if one was present.
    pub fn clear(&self) {
        let _turn = self.turn();
        let listeners = {
            let mut inner = self.lock();
            match inner.session.take() {
                Some(_) => inner.listeners(),
                None => return,
            }
        };
        tracing::info!(event = %AuthEvent::SignedOut, "auth state changed");
        deliver(&listeners, AuthEvent::SignedOut, None);
    }

    /// Register a listener.
    ///
    /// The listener is called right away with [`AuthEvent::InitialSession`],
    /// then on every change until the returned [`Subscription`] is dropped.
    pub fn on_auth_state_change<F>(&self, callback: F) -> Subscription
    where
        F: Fn(AuthEvent, Option<&Session>) + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(callback);
        let _turn = self.turn();
        let (id, current) = {
            let mut inner = self.lock();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.insert(id, listener.clone());
            let current = inner.session.clone().filter(|s| !s.is_expired());
            (id, current)
        };
        listener(AuthEvent::InitialSession, current.as_ref());
        Subscription {
            id,
            state: Arc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }

}

impl Inner {
    fn listeners(&self) -> Vec<Listener> {
        self.listeners.values().cloned().collect()
    }
}

// Runs without the state lock so listeners may read the state.
fn deliver(listeners: &[Listener], event: AuthEvent, session: Option<&Session>) {
    for listener in listeners {
        listener(event, session);
    }
}

/// Handle for a registered listener. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    state: Weak<Mutex<Inner>>,
}

impl Subscription {
    /// Unsubscribe now.
    pub fn unsubscribe(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.state.upgrade() {
            lock_inner(&inner).listeners.remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::current_timestamp;
    use crate::AuthUser;
    use uuid::Uuid;

    fn session(expires_in: i64) -> Session {
        Session {
            access_token: "at".into(),
            refresh_token: "rt".into(),
            expires_at: current_timestamp() + expires_in,
            user: AuthUser::new(Uuid::new_v4(), "a@b.com"),
        }
    }

    fn recorder(state: &AuthState) -> (Subscription, Arc<Mutex<Vec<(AuthEvent, bool)>>>) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let sink = log.clone();
        let sub = state.on_auth_state_change(move |event, session| {
            sink.lock().unwrap().push((event, session.is_some()));
        });
        (sub, log)
    }

    #[test]
    fn test_subscribe_receives_initial_session() {
        let state = AuthState::new();
        let (_sub, log) = recorder(&state);
        assert_eq!(*log.lock().unwrap(), vec![(AuthEvent::InitialSession, false)]);
    }

    #[test]
    fn test_sign_in_and_out_are_announced() {
        let state = AuthState::new();
        let (_sub, log) = recorder(&state);
        state.set_session(session(3600), AuthEvent::SignedIn);
        assert!(state.is_authenticated());
        state.clear();
        assert!(!state.is_authenticated());
        assert_eq!(
            *log.lock().unwrap(),
            vec![
                (AuthEvent::InitialSession, false),
                (AuthEvent::SignedIn, true),
                (AuthEvent::SignedOut, false),
            ]
        );
    }

    #[test]
    fn test_clear_without_session_is_silent() {
        let state = AuthState::new();
        let (_sub, log) = recorder(&state);
        state.clear();
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let state = AuthState::new();
        let (sub, log) = recorder(&state);
        assert_eq!(state.listener_count(), 1);
        drop(sub);
        assert_eq!(state.listener_count(), 0);
        state.set_session(session(3600), AuthEvent::SignedIn);
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_explicit_unsubscribe() {
        let state = AuthState::new();
        let (sub, _log) = recorder(&state);
        sub.unsubscribe();
        assert_eq!(state.listener_count(), 0);
    }

    #[test]
    fn test_expired_session_reads_as_logged_out() {
        let state = AuthState::new();
        state.set_session(session(-10), AuthEvent::SignedIn);
        assert!(state.get_session().is_none());
        assert!(!state.context().is_authenticated());
    }

    #[test]
    fn test_concurrent_sign_ins_each_announce_their_own_session() {
        let state = AuthState::new();
        let delivered = Arc::new(Mutex::new(Vec::new()));
        let sink = delivered.clone();
        let _sub = state.on_auth_state_change(move |event, session| {
            if event == AuthEvent::SignedIn {
                if let Some(s) = session {
                    sink.lock().unwrap().push(s.user.id);
                }
            }
        });

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let state = state.clone();
                std::thread::spawn(move || {
                    let mut ids = Vec::new();
                    for _ in 0..50 {
                        let s = session(3600);
                        ids.push(s.user.id);
                        state.set_session(s, AuthEvent::SignedIn);
                    }
                    ids
                })
            })
            .collect();
        let mut expected: Vec<Uuid> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        let mut seen = delivered.lock().unwrap().clone();
        expected.sort();
        seen.sort();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_initial_session_always_comes_first() {
        let state = AuthState::new();
        let writer = {
            let state = state.clone();
            std::thread::spawn(move || {
                for _ in 0..200 {
                    state.set_session(session(3600), AuthEvent::SignedIn);
                    state.clear();
                }
            })
        };

        let mut logs = Vec::new();
        for _ in 0..200 {
            logs.push(recorder(&state));
        }
        writer.join().unwrap();

        for (_sub, log) in &logs {
            let log = log.lock().unwrap();
            assert_eq!(log[0].0, AuthEvent::InitialSession);
            assert!(log[1..].iter().all(|(e, _)| *e != AuthEvent::InitialSession));
        }
    }

    #[test]
    fn test_listener_may_read_state() {
        let state = AuthState::new();
        let reader = state.clone();
        let seen = Arc::new(Mutex::new(None));
        let sink = seen.clone();
        let _sub = state.on_auth_state_change(move |_, _| {
            *sink.lock().unwrap() = Some(reader.is_authenticated());
        });
        state.set_session(session(3600), AuthEvent::SignedIn);
        assert_eq!(*seen.lock().unwrap(), Some(true));
    }
}
