//! Board module.
//!
//! Announcements and the store that persists them.

mod announcement;
mod repository;

pub use announcement::Announcement;
pub use repository::AnnouncementStore;
