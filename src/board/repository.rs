//! Announcement store.
//!
//! Read-modify-write access to the announcements table. Every mutation loads
//! the current file, applies the change and writes the whole table back.

use std::path::{Path, PathBuf};

use tracing::info;
use uuid::Uuid;

use super::announcement::Announcement;
use crate::storage::CsvTable;
use crate::{NoticeError, Result};

/// Store for the announcements table.
#[derive(Debug, Clone)]
pub struct AnnouncementStore {
    table: CsvTable<Announcement>,
}

impl AnnouncementStore {
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

    /// Load all announcements in insertion order.
    ///
    /// A missing file yields an empty list.
    pub fn load(&self) -> Result<Vec<Announcement>> {
        self.table.load()
    }

    /// Number of announcements.
    pub fn count(&self) -> Result<usize> {
        Ok(self.load()?.len())
    }

    /// Append an announcement as the last row.
    ///
    /// Returns the index of the new row.
    pub fn append(&self, announcement: Announcement) -> Result<usize> {
        let mut rows = self.load()?;
        rows.push(announcement);
        self.save(&mut rows)?;

        let index = rows.len() - 1;
        info!(
            index,
            date = %rows[index].date,
            title = %rows[index].title,
            "Announcement posted"
        );
        Ok(index)
    }

    /// Replace the title and content of the row at `index`.
    ///
    /// The date is left untouched. Returns the updated row.
    pub fn update(&self, index: usize, title: &str, content: &str) -> Result<Announcement> {
        let mut rows = self.load()?;
        let len = rows.len();
        let row = rows
            .get_mut(index)
            .ok_or(NoticeError::IndexOutOfRange { index, len })?;
        row.title = title.to_string();
        row.content = content.to_string();

        self.save(&mut rows)?;
        info!(index, title = %title, "Announcement updated");
        Ok(rows.swap_remove(index))
    }

    /// Replace the title and content of the row with the given identifier.
    pub fn update_by_id(&self, id: Uuid, title: &str, content: &str) -> Result<Announcement> {
        let rows = self.load()?;
        let index = rows
            .iter()
            .position(|row| row.id == Some(id))
            .ok_or_else(|| NoticeError::NotFound(format!("announcement {id}")))?;
        self.update(index, title, content)
    }

    /// Write rows back, giving any legacy row an identifier first.
    fn save(&self, rows: &mut [Announcement]) -> Result<()> {
        for row in rows.iter_mut() {
            row.ensure_id();
        }
        self.table.save(rows)
    }
}
