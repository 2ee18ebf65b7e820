//! In-memory table state for tabman.
//!
//! [`TableState`] owns the record store, column registry, view criteria,
//! open edit sessions and theme. The derived view (search, stable sort,
//! pagination) is recomputed eagerly after every mutation that can change
//! it. [`TableAction`] exposes the same operations as serializable values.

mod action;
mod columns;
mod config;
mod edit;
mod error;
mod state;
mod store;
pub mod view;

pub use action::{ActionOutcome, TableAction};
pub use columns::ColumnRegistry;
pub use config::{ROWS_PER_PAGE_OPTIONS, TableConfig};
pub use edit::{EditSession, EditSessions};
pub use error::{Result, TableError};
pub use state::TableState;
pub use store::RecordStore;
