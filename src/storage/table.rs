//! Generic CSV-backed table.

use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::Result;

/// A row type that can be stored in a [`CsvTable`].
pub trait Record: Serialize + DeserializeOwned {
    /// Column names written as the header row, in field order.
    const HEADERS: &'static [&'static str];
}

/// A table persisted as a single CSV file with a header row.
///
/// A missing file reads as an empty table. Writes replace the whole file.
#[derive(Debug, Clone)]
pub struct CsvTable<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> CsvTable<R> {
    /// Create a table backed by the file at `path`.
    ///
    /// Nothing is touched on disk until the first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every row in file order.
    ///
    /// Only a missing file reads as empty. Any other read failure is an
    /// error.
    pub fn load(&self) -> Result<Vec<R>> {
        let data = match fs::read(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Table file missing, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_slice());

        let mut rows = Vec::new();
        for row in reader.deserialize::<R>() {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Replace the file contents with `rows`.
    ///
    /// The header row is always written, even for an empty table.
    pub fn save(&self, rows: &[R]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;
        writer.write_record(R::HEADERS)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;

        debug!(path = %self.path.display(), rows = rows.len(), "Table written");
        Ok(())
    }

    /// Append one row and write the table back.
    ///
    /// Returns the index of the new row.
    pub fn append(&self, row: R) -> Result<usize> {
        let mut rows = self.load()?;
        rows.push(row);
        self.save(&rows)?;
        Ok(rows.len() - 1)
    }
}
