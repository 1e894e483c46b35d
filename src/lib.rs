//! noticeboard - Event and Announcement Board
//!
//! An interactive terminal board for posting, listing and editing
//! announcements, gated by a username/password login. Both announcements
//! and users are kept in CSV files.

pub mod app;
pub mod auth;
pub mod board;
pub mod config;
pub mod datetime;
pub mod error;
pub mod logging;
pub mod storage;

pub use app::{Application, MenuAction, SessionHandler};
pub use auth::{AuthError, AuthGate, AuthState, Session, UserCredential, UserStore};
pub use board::{Announcement, AnnouncementStore};
pub use config::Config;
pub use error::{NoticeError, Result};
pub use storage::{CsvTable, Record};
