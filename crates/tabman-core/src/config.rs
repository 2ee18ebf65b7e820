use serde::{Deserialize, Serialize};
use tabman_model::{DEFAULT_ROWS_PER_PAGE, ModelError};

/// Page sizes offered by the pager.
pub const ROWS_PER_PAGE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Paging defaults for a new [`TableState`](crate::TableState).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub rows_per_page: usize,
    pub rows_per_page_options: Vec<usize>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            rows_per_page_options: ROWS_PER_PAGE_OPTIONS.to_vec(),
        }
    }
}

impl TableConfig {
    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Self {
        self.rows_per_page = rows_per_page;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.rows_per_page == 0 {
            return Err(ModelError::InvalidRowsPerPage(0));
        }
        if self.rows_per_page_options.contains(&0) {
            return Err(ModelError::InvalidRowsPerPage(0));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_pager() {
        let config = TableConfig::default();
        assert_eq!(config.rows_per_page, 10);
        assert_eq!(config.rows_per_page_options, vec![5, 10, 25, 50]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_rows_is_invalid() {
        assert!(TableConfig::default().with_rows_per_page(0).validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: TableConfig = serde_json::from_str(r#"{"rows_per_page": 25}"#).unwrap();
        assert_eq!(config.rows_per_page, 25);
        assert_eq!(config.rows_per_page_options.len(), 4);
    }
}
