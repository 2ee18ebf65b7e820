//! Derived view: search filter, stable sort and pagination.
//!
//! These are pure functions over a record slice. The view is a list of
//! indices into that slice so it can be recomputed without cloning records.

use std::cmp::Ordering;
use std::ops::Range;

use tabman_model::{ColumnId, Record, SortDirection, ViewCriteria};

/// True when any present field of `record`, lowercased, contains
/// `lowered_query`. The query must already be lowercase.
pub fn matches_query(record: &Record, lowered_query: &str) -> bool {
    lowered_query.is_empty()
        || record
            .values()
            .any(|value| value.render().to_lowercase().contains(lowered_query))
}

/// Ascending comparison of two records at `field`, oriented by `direction`.
pub fn compare_records(
    a: &Record,
    b: &Record,
    field: &ColumnId,
    direction: SortDirection,
) -> Ordering {
    let ordering = a.field(field.as_str()).compare(&b.field(field.as_str()));
    direction.apply(ordering)
}

/// Indices of the records matching `criteria`, in display order.
///
/// Sorting is stable: records with equal keys keep their store order.
pub fn derive(records: &[Record], criteria: &ViewCriteria) -> Vec<usize> {
    let query = criteria.search_query.to_lowercase();
    let mut view: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, record)| matches_query(record, &query))
        .map(|(idx, _)| idx)
        .collect();

    if let Some(field) = &criteria.sort_field {
        view.sort_by(|&a, &b| {
            compare_records(&records[a], &records[b], field, criteria.sort_direction)
        });
    }
    view
}

pub fn derive_records<'a>(records: &'a [Record], criteria: &ViewCriteria) -> Vec<&'a Record> {
    derive(records, criteria)
        .into_iter()
        .map(|idx| &records[idx])
        .collect()
}

/// Bounds of `page` within a view of `len` items, clamped to the view.
pub fn page_range(len: usize, page: usize, rows_per_page: usize) -> Range<usize> {
    let start = page.saturating_mul(rows_per_page).min(len);
    let end = start.saturating_add(rows_per_page).min(len);
    start..end
}

pub fn paginate<T>(view: &[T], page: usize, rows_per_page: usize) -> &[T] {
    &view[page_range(view.len(), page, rows_per_page)]
}

/// Number of pages needed for `len` items; zero rows per page gives zero.
pub fn page_count(len: usize, rows_per_page: usize) -> usize {
    if rows_per_page == 0 {
        0
    } else {
        len.div_ceil(rows_per_page)
    }
}
