//! Header lookup for import rows.

use std::collections::HashMap;

/// Position of each header name in the header row.
///
/// Lookups are exact. [`HeaderIndex::value`] tries the lowercase field name
/// first and falls back to the capitalized spelling (`name` then `Name`).
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    positions: HashMap<String, usize>,
}

impl HeaderIndex {
    pub fn new(headers: &[String]) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (idx, header) in headers.iter().enumerate() {
            // First occurrence wins on duplicate headers.
            positions.entry(normalize_header(header)).or_insert(idx);
        }
        Self { positions }
    }

    pub fn contains(&self, header: &str) -> bool {
        self.positions.contains_key(header)
    }

    fn cell<'r>(&self, row: &'r [String], header: &str) -> Option<&'r str> {
        let idx = *self.positions.get(header)?;
        row.get(idx).map(String::as_str)
    }

    /// Value for `field`, or `None` when neither spelling has a non-empty
    /// value.
    pub fn value<'r>(&self, row: &'r [String], field: &str) -> Option<&'r str> {
        let exact = self.cell(row, field).filter(|value| !value.is_empty());
        exact.or_else(|| {
            self.cell(row, &capitalize(field))
                .filter(|value| !value.is_empty())
        })
    }
}

/// Strip a leading byte-order mark. Other whitespace is kept; headers match
/// exactly.
fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

/// Uppercase the first character: `department` becomes `Department`.
pub fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn prefers_exact_lowercase_header() {
        let index = HeaderIndex::new(&headers(&["name", "Name"]));
        assert_eq!(index.value(&row(&["low", "Cap"]), "name"), Some("low"));
    }

    #[test]
    fn falls_back_to_capitalized_when_exact_is_empty() {
        let index = HeaderIndex::new(&headers(&["name", "Name"]));
        assert_eq!(index.value(&row(&["", "Cap"]), "name"), Some("Cap"));
    }

    #[test]
    fn other_spellings_are_not_recognized() {
        let index = HeaderIndex::new(&headers(&["NAME", " name"]));
        assert_eq!(index.value(&row(&["A", "B"]), "name"), None);
    }

    #[test]
    fn short_rows_read_as_missing() {
        let index = HeaderIndex::new(&headers(&["Name", "Email"]));
        assert_eq!(index.value(&row(&["Ann"]), "email"), None);
    }

    #[test]
    fn bom_is_stripped_from_first_header() {
        let index = HeaderIndex::new(&headers(&["\u{feff}Name", "Email"]));
        assert!(index.contains("Name"));
    }

    #[test]
    fn capitalize_handles_edges() {
        assert_eq!(capitalize("location"), "Location");
        assert_eq!(capitalize(""), "");
    }
}
