//! User credential store.

use std::path::{Path, PathBuf};

use subtle::ConstantTimeEq;
use thiserror::Error;
use tracing::{info, warn};

use super::credential::UserCredential;
use crate::storage::CsvTable;
use crate::NoticeError;

/// Authentication and registration errors.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Username already exists.
    #[error("username already exists")]
    UsernameTaken,

    /// Invalid credentials (wrong username or password).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The session is already logged in.
    #[error("already logged in")]
    AlreadyLoggedIn,

    /// The credentials table could not be read or written.
    #[error(transparent)]
    Storage(#[from] NoticeError),
}

/// Store for the user credentials table.
#[derive(Debug, Clone)]
pub struct UserStore {
    table: CsvTable<UserCredential>,
}

impl UserStore {
    /// Create a store backed by the CSV file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            table: CsvTable::new(path),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        self.table.path()
    }

    /// Load all credentials in file order.
    ///
    /// A missing file yields an empty list.
    pub fn load(&self) -> crate::Result<Vec<UserCredential>> {
        self.table.load()
    }

    /// Find the first row whose username matches exactly.
    pub fn find(&self, username: &str) -> crate::Result<Option<UserCredential>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|user| user.username == username))
    }

    /// Check whether a username is already registered (exact match).
    pub fn username_exists(&self, username: &str) -> crate::Result<bool> {
        Ok(self.find(username)?.is_some())
    }

    /// Register a new user.
    ///
    /// Fails with [`AuthError::UsernameTaken`] when the exact username is
    /// already present. Otherwise the row is appended and persisted.
    pub fn register(&self, username: &str, password: &str) -> Result<UserCredential, AuthError> {
        let mut users = self.load()?;
        if users.iter().any(|user| user.username == username) {
            warn!(username = %username, "Registration rejected: username taken");
            return Err(AuthError::UsernameTaken);
        }

        let credential = UserCredential::new(username, password);
        users.push(credential.clone());
        self.table.save(&users)?;

        info!(username = %username, "New user registered");
        Ok(credential)
    }

    /// Check a username and password.
    ///
    /// The submitted username is trimmed before the lookup. The first row
    /// with that username is compared against the trimmed password.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<UserCredential, AuthError> {
        let username = username.trim();
        let Some(user) = self.find(username)? else {
            warn!(username = %username, "Login failed: user not found");
            return Err(AuthError::InvalidCredentials);
        };

        let stored = user.password.trim().as_bytes();
        let supplied = password.trim().as_bytes();
        if bool::from(stored.ct_eq(supplied)) {
            Ok(user)
        } else {
            warn!(username = %username, "Login failed: wrong password");
            Err(AuthError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, UserStore) {
        let dir = TempDir::new().unwrap();
        let store = UserStore::new(dir.path().join("user_data.csv"));
        (dir, store)
    }

    #[test]
    fn test_load_missing_file() {
        let (_dir, store) = setup();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_register_and_authenticate() {
        let (_dir, store) = setup();
        let user = store.register("alice", "secret").unwrap();
        assert_eq!(user.username, "alice");

        let user = store.authenticate("alice", "secret").unwrap();
        assert_eq!(user.username, "alice");
    }

    #[test]
    fn test_register_persists_header_and_row() {
        let (_dir, store) = setup();
        store.register("alice", "secret").unwrap();

        let content = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(content, "Username,Password\nalice,secret\n");
    }

    #[test]
    fn test_register_duplicate() {
        let (_dir, store) = setup();
        store.register("alice", "secret").unwrap();

        let result = store.register("alice", "other");
        assert!(matches!(result, Err(AuthError::UsernameTaken)));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn test_register_is_case_sensitive() {
        let (_dir, store) = setup();
        store.register("alice", "secret").unwrap();
        assert!(store.register("Alice", "secret").is_ok());
        assert!(store.username_exists("Alice").unwrap());
    }

    #[test]
    fn test_authenticate_wrong_password() {
        let (_dir, store) = setup();
        store.register("alice", "secret").unwrap();

        let result = store.authenticate("alice", "wrong");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_authenticate_unknown_user() {
        let (_dir, store) = setup();
        let result = store.authenticate("nobody", "secret");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_authenticate_trims_username_and_password() {
        let (_dir, store) = setup();
        store.register("alice", "secret").unwrap();

        assert!(store.authenticate("  alice\t", "secret").is_ok());
        assert!(store.authenticate("alice", " secret ").is_ok());
    }

    #[test]
    fn test_authenticate_trims_stored_password() {
        let (_dir, store) = setup();
        std::fs::write(store.path(), "Username,Password\nbob, 1234 \n").unwrap();

        assert!(store.authenticate("bob", "1234").is_ok());
    }

    #[test]
    fn test_authenticate_first_match_wins() {
        let (_dir, store) = setup();
        std::fs::write(
            store.path(),
            "Username,Password\ncarol,first\ncarol,second\n",
        )
        .unwrap();

        assert!(store.authenticate("carol", "first").is_ok());
        assert!(matches!(
            store.authenticate("carol", "second"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(AuthError::UsernameTaken.to_string(), "username already exists");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "invalid credentials");
    }
}
