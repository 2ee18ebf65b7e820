use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("record id must not be empty: {0:?}")]
    EmptyRecordId(String),
    #[error("column id must not be empty: {0:?}")]
    EmptyColumnId(String),
    #[error("Column name is required")]
    EmptyColumnLabel(String),
    #[error("rows per page must be greater than zero (got {0})")]
    InvalidRowsPerPage(usize),
}

pub type Result<T> = std::result::Result<T, ModelError>;
