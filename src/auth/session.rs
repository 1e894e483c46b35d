//! Login session state and the gate that moves it.
//!
//! A [`Session`] is owned by the interactive loop and handed to whatever
//! needs to know who is logged in. It lives for one process run and is
//! never written to disk.

use chrono::{DateTime, Utc};
use tracing::info;

use super::credential::UserCredential;
use super::repository::{AuthError, UserStore};

/// Authentication state of a session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AuthState {
    /// Nobody is logged in.
    #[default]
    LoggedOut,
    /// A user logged in or registered.
    LoggedIn {
        /// Username of the logged-in user.
        username: String,
        /// When the login happened.
        since: DateTime<Utc>,
    },
}

/// Per-run session context.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: AuthState,
}

impl Session {
    /// Create a logged-out session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current authentication state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Check if a user is logged in.
    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, AuthState::LoggedIn { .. })
    }

    /// Username of the logged-in user, if any.
    pub fn username(&self) -> Option<&str> {
        match &self.state {
            AuthState::LoggedIn { username, .. } => Some(username),
            AuthState::LoggedOut => None,
        }
    }

    fn sign_in(&mut self, user: &UserCredential) {
        self.state = AuthState::LoggedIn {
            username: user.username.clone(),
            since: Utc::now(),
        };
    }
}

/// Moves a [`Session`] from logged out to logged in.
///
/// There is no transition back; a session stays logged in until the
/// process exits.
#[derive(Debug, Clone, Copy)]
pub struct AuthGate<'a> {
    users: &'a UserStore,
}

impl<'a> AuthGate<'a> {
    /// Create a gate checking against the given user store.
    pub fn new(users: &'a UserStore) -> Self {
        Self { users }
    }

    /// Log in with existing credentials.
    ///
    /// On failure the session is left unchanged.
    pub fn login(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<UserCredential, AuthError> {
        if session.is_logged_in() {
            return Err(AuthError::AlreadyLoggedIn);
        }

        let user = self.users.authenticate(username, password)?;
        session.sign_in(&user);
        info!(username = %user.username, "Login successful");
        Ok(user)
    }

    /// Register a new user and log them in.
    ///
    /// On failure the session is left unchanged.
    pub fn register(
        &self,
        session: &mut Session,
        username: &str,
        password: &str,
    ) -> Result<UserCredential, AuthError> {
        if session.is_logged_in() {
            return Err(AuthError::AlreadyLoggedIn);
        }

        let user = self.users.register(username, password)?;
        session.sign_in(&user);
        Ok(user)
    }
}
