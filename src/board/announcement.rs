//! Announcement model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::Record;

/// A single row of the announcements table.
///
/// The row's position in the table is its ordinal index. `id` is a stable
/// identifier that survives reordering; rows written by older versions of
/// the board may not have one yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Announcement date. Never changes after creation.
    #[serde(rename = "Date")]
    pub date: NaiveDate,
    /// Announcement title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Announcement body.
    #[serde(rename = "Content")]
    pub content: String,
    /// Stable identifier.
    #[serde(rename = "Id", default)]
    pub id: Option<Uuid>,
}

impl Record for Announcement {
    const HEADERS: &'static [&'static str] = &["Date", "Title", "Content", "Id"];
}

impl Announcement {
    /// Create a new announcement with a fresh identifier.
    pub fn new(date: NaiveDate, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            date,
            title: title.into(),
            content: content.into(),
            id: Some(Uuid::new_v4()),
        }
    }

    /// Assign an identifier if the row has none.
    pub fn ensure_id(&mut self) {
        self.id.get_or_insert_with(Uuid::new_v4);
    }

    /// First line of the content, for one-line listings.
    pub fn summary(&self) -> &str {
        self.content.lines().next().unwrap_or("")
    }
}
