use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{ColumnId, ModelError};

pub const DEFAULT_ROWS_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    /// Orient an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Search, sort and paging inputs of the derived view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewCriteria {
    pub search_query: String,
    pub sort_field: Option<ColumnId>,
    pub sort_direction: SortDirection,
    pub page: usize,
    pub rows_per_page: usize,
}

impl Default for ViewCriteria {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            sort_field: None,
            sort_direction: SortDirection::Asc,
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

impl ViewCriteria {
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self
    }

    pub fn with_sort(mut self, field: ColumnId, direction: SortDirection) -> Self {
        self.sort_field = Some(field);
        self.sort_direction = direction;
        self
    }

    pub fn with_rows_per_page(mut self, rows_per_page: usize) -> Result<Self, ModelError> {
        if rows_per_page == 0 {
            return Err(ModelError::InvalidRowsPerPage(rows_per_page));
        }
        self.rows_per_page = rows_per_page;
        Ok(self)
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Start of the current page within the derived view.
    pub fn page_start(&self) -> usize {
        self.page.saturating_mul(self.rows_per_page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_orients_comparisons() {
        assert_eq!(SortDirection::Asc.apply(Ordering::Less), Ordering::Less);
        assert_eq!(SortDirection::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
    }

    #[test]
    fn rows_per_page_must_be_positive() {
        assert_eq!(
            ViewCriteria::default().with_rows_per_page(0),
            Err(ModelError::InvalidRowsPerPage(0))
        );
        let criteria = ViewCriteria::default()
            .with_rows_per_page(25)
            .unwrap()
            .with_page(2);
        assert_eq!(criteria.page_start(), 50);
    }

    #[test]
    fn theme_toggles_both_ways() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.as_str(), "dark");
    }
}
