//! Flat-file storage for the notice board.
//!
//! Both tables are CSV files with a header row. A table is read in full,
//! modified in memory and written back in full on every mutation.

mod table;

pub use table::{CsvTable, Record};
