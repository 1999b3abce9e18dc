//! Auth-session state facade for the current user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI reads `{user, is_authenticated, is_loading, error}` from here and
//! nowhere else; domain wrappers never touch this mirror. Imperative
//! operations delegate to `api::auth` and fold the outcome back into the
//! snapshot, with `is_loading` cleared on every exit path by a drop guard.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use crate::api;
use crate::error::ApiError;
use crate::net::ApiClient;
use crate::net::types::{AuthPayload, Credentials, RegisterData, User};

/// User-facing fallback wording when the server gives no message.
const LOGIN_ERROR: &str = "Une erreur est survenue lors de la connexion";
const LOGOUT_ERROR: &str = "Une erreur est survenue lors de la déconnexion";
const REGISTER_ERROR: &str = "Une erreur est survenue lors de l'inscription";

/// Snapshot of the authentication state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    /// The signed-in user, when there is one.
    pub user: Option<User>,
    /// Whether a session token is held.
    pub is_authenticated: bool,
    /// Whether an auth operation is in flight.
    pub is_loading: bool,
    /// Last operation's user-facing error, cleared when a new one starts.
    pub error: Option<String>,
}

/// Process-wide auth facade. Cheap to clone; clones share one state.
#[derive(Clone)]
pub struct Auth {
    client: ApiClient,
    state: Arc<RwLock<AuthState>>,
}

impl Auth {
    /// Wrap the shared client.
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self { client, state: Arc::new(RwLock::new(AuthState::default())) }
    }

    /// The client this facade authenticates through.
    #[must_use]
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Current snapshot.
    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Rehydrate the mirror from the session store.
    ///
    /// Meant to run once at shell startup; a no-op in contexts without
    /// durable storage. A corrupt stored user surfaces as signed-out (the
    /// store repairs itself underneath).
    pub fn init_auth(&self) {
        let session = self.client.session();
        if !session.is_available() {
            return;
        }
        // Read the user first: a corrupt entry clears the token too, and the
        // mirror must agree with what the store looks like afterwards.
        let user = session.user();
        let is_authenticated = session.token().is_some();
        let mut state = self.write();
        state.user = user;
        state.is_authenticated = is_authenticated;
    }

    /// Log in and mirror the result.
    ///
    /// # Errors
    ///
    /// Re-raises the underlying failure after recording a user-facing
    /// message (the server's own wording when it sent one).
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthPayload, ApiError> {
        let _loading = self.begin();
        match api::auth::login(&self.client, credentials).await {
            Ok(payload) => {
                let mut state = self.write();
                state.user = Some(payload.user.clone());
                state.is_authenticated = true;
                Ok(payload)
            }
            Err(error) => {
                self.write().error = Some(user_message(&error, LOGIN_ERROR));
                Err(error)
            }
        }
    }

    /// Register and mirror the result. Same contract as [`Auth::login`].
    ///
    /// # Errors
    ///
    /// Re-raises the underlying failure after recording a message.
    pub async fn register(&self, data: &RegisterData) -> Result<AuthPayload, ApiError> {
        let _loading = self.begin();
        match api::auth::register(&self.client, data).await {
            Ok(payload) => {
                let mut state = self.write();
                state.user = Some(payload.user.clone());
                state.is_authenticated = true;
                Ok(payload)
            }
            Err(error) => {
                self.write().error = Some(user_message(&error, REGISTER_ERROR));
                Err(error)
            }
        }
    }

    /// Log out. Never raises: the local session is cleared either way, and a
    /// server-side failure is only recorded in `error`.
    pub async fn logout(&self) {
        let _loading = self.begin();
        let outcome = api::auth::logout(&self.client).await;
        let mut state = self.write();
        state.user = None;
        state.is_authenticated = false;
        if outcome.is_err() {
            state.error = Some(LOGOUT_ERROR.to_owned());
        }
    }

    /// Enter an operation: loading on, previous error gone. The returned
    /// guard switches loading off when dropped, on success and failure alike.
    fn begin(&self) -> LoadingGuard {
        let mut state = self.write();
        state.is_loading = true;
        state.error = None;
        drop(state);
        LoadingGuard { state: Arc::clone(&self.state) }
    }

    fn write(&self) -> RwLockWriteGuard<'_, AuthState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth").field("state", &self.state()).finish()
    }
}

fn user_message(error: &ApiError, fallback: &str) -> String {
    error.server_message().map_or_else(|| fallback.to_owned(), str::to_owned)
}

struct LoadingGuard {
    state: Arc<RwLock<AuthState>>,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.state.write().unwrap_or_else(PoisonError::into_inner).is_loading = false;
    }
}
