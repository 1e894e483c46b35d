//! Test helpers for E2E tests.
//!
//! Provides TestBoard, which runs the application against scripted input
//! with its tables in a temporary directory.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::PathBuf;

use tempfile::TempDir;

use noticeboard::config::{Config, StorageConfig};
use noticeboard::{Announcement, AnnouncementStore, Application, UserStore};

/// A board with its tables in a temporary directory.
pub struct TestBoard {
    dir: TempDir,
    app: Application,
}

impl TestBoard {
    /// Create a board with empty tables.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let config = Config {
            storage: StorageConfig {
                announcements_path: dir
                    .path()
                    .join("announcements.csv")
                    .to_string_lossy()
                    .into_owned(),
                users_path: dir.path().join("user_data.csv").to_string_lossy().into_owned(),
            },
            ..Config::default()
        };
        let app = Application::new(config).expect("valid config");
        Self { dir, app }
    }

    /// The application under test.
    pub fn app(&self) -> &Application {
        &self.app
    }

    /// The announcement store.
    pub fn announcements(&self) -> &AnnouncementStore {
        self.app.announcements()
    }

    /// The user store.
    pub fn users(&self) -> &UserStore {
        self.app.users()
    }

    /// Path of the announcements file.
    pub fn announcements_path(&self) -> PathBuf {
        self.dir.path().join("announcements.csv")
    }

    /// Path of the user file.
    pub fn users_path(&self) -> PathBuf {
        self.dir.path().join("user_data.csv")
    }

    /// Run one session feeding `lines` as input; returns everything printed.
    pub fn run(&self, lines: &[&str]) -> String {
        let mut input = lines.join("\n");
        input.push('\n');
        self.run_bytes(input.as_bytes())
    }

    /// Run one session feeding raw bytes as input; returns everything printed.
    pub fn run_bytes(&self, input: &[u8]) -> String {
        let output = self
            .app
            .run(Cursor::new(input.to_vec()), Vec::new(), false)
            .expect("session runs");
        String::from_utf8(output).expect("utf-8 output")
    }
}

/// Register a user directly in the store.
pub fn create_test_user(board: &TestBoard, username: &str, password: &str) {
    board
        .users()
        .register(username, password)
        .expect("register test user");
}

/// Append an announcement directly to the store.
pub fn create_test_announcement(board: &TestBoard, date: &str, title: &str, content: &str) {
    let date = chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("valid date");
    board
        .announcements()
        .append(Announcement::new(date, title, content))
        .expect("append test announcement");
}

/// Input lines that log `username` in from the welcome menu.
pub fn login_lines<'a>(username: &'a str, password: &'a str) -> Vec<&'a str> {
    vec!["L", username, password]
}
