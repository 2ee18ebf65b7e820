//! CSV parsing helpers.

pub mod header;
pub mod reader;

pub use header::{HeaderIndex, capitalize};
pub use reader::{ParsedCsv, parse_csv};
