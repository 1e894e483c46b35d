//! User credential model.

use serde::{Deserialize, Serialize};

use crate::storage::Record;

/// A row of the user credentials table.
///
/// The password is stored as entered, in clear text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredential {
    /// Login name, unique across the table.
    #[serde(rename = "Username")]
    pub username: String,
    /// Clear-text password.
    #[serde(rename = "Password", default)]
    pub password: String,
}

impl Record for UserCredential {
    const HEADERS: &'static [&'static str] = &["Username", "Password"];
}

impl UserCredential {
    /// Create a new credential row.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
