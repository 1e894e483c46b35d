//! Authentication module.
//!
//! This module provides the user credential store, the per-run session
//! context and the gate that logs a session in.

mod credential;
mod repository;
mod session;

pub use credential::UserCredential;
pub use repository::{AuthError, UserStore};
pub use session::{AuthGate, AuthState, Session};
