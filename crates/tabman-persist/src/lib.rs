//! Preference storage for tabman.
//!
//! Column definitions and the theme survive between runs in a small JSON
//! document:
//!
//! ```text
//! {
//!   "schema_version": 1,
//!   "saved_at": "2026-01-01T00:00:00+00:00",
//!   "columns": [ { "id": "name", "label": "Name", ... } ],
//!   "theme": "dark"
//! }
//! ```
//!
//! Writes are atomic (temp file + rename). A missing file loads the
//! defaults; a newer `schema_version` is refused.

mod error;
mod io;
mod types;

pub use error::{PersistError, Result};
pub use io::{
    load_preferences, load_preferences_async, parse_preferences, save_preferences,
    save_preferences_async,
};
pub use types::{CURRENT_SCHEMA_VERSION, Preferences};
