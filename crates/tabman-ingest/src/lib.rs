//! CSV bridge for tabman: import with per-row validation, and export of
//! the visible columns.
//!
//! # Import rules
//!
//! - A header row is required. Recognized headers are `name`, `email`,
//!   `age`, `role`, `department` and `location`, each also accepted
//!   capitalized. Other columns are ignored.
//! - Every row gets a fresh record id.
//! - Issues from all rows are collected. Any issue rejects the whole file.
//! - A file that cannot be parsed yields one row-0 `file` issue.

pub mod csv;
mod error;
mod export;
mod import;

pub use error::{IngestError, Result};
pub use export::{DEFAULT_EXPORT_FILE_NAME, export_csv, read_import_file, write_export};
pub use import::{
    ImportOutcome, build_candidate, import_csv, import_csv_async, import_csv_bytes,
    import_csv_with,
};
