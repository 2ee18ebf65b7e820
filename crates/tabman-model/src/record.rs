use std::borrow::Cow;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::RecordId;

/// Names of the built-in record fields, in declaration order.
pub const RECORD_FIELDS: &[&str] = &[
    "id",
    "name",
    "email",
    "age",
    "role",
    "department",
    "location",
];

/// One row of the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub age: i64,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Values of columns added at runtime, keyed by column id.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom: BTreeMap<String, String>,
}

/// A borrowed view of one field value, used for searching, sorting and
/// rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
    Missing,
}

impl FieldValue<'_> {
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// String form of the value; missing values render as `""`.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::Number(number) => Cow::Owned(number.to_string()),
            FieldValue::Missing => Cow::Borrowed(""),
        }
    }

    /// Native ordering: numbers numerically, text by byte order.
    ///
    /// A missing value orders before any present one. Mixed number/text
    /// pairs fall back to comparing their rendered strings.
    pub fn compare(&self, other: &FieldValue<'_>) -> Ordering {
        match (self, other) {
            (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
            (FieldValue::Missing, _) => Ordering::Less,
            (_, FieldValue::Missing) => Ordering::Greater,
            (FieldValue::Number(a), FieldValue::Number(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (a, b) => a.render().cmp(&b.render()),
        }
    }
}

impl Record {
    pub fn new(
        id: RecordId,
        name: impl Into<String>,
        email: impl Into<String>,
        age: i64,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
            role: role.into(),
            department: None,
            location: None,
            custom: BTreeMap::new(),
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_custom(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom.insert(key.into(), value.into());
        self
    }

    /// Value of a built-in field or custom column.
    pub fn field(&self, name: &str) -> FieldValue<'_> {
        match name {
            "id" => FieldValue::Text(self.id.as_str()),
            "name" => FieldValue::Text(&self.name),
            "email" => FieldValue::Text(&self.email),
            "age" => FieldValue::Number(self.age),
            "role" => FieldValue::Text(&self.role),
            "department" => optional(self.department.as_deref()),
            "location" => optional(self.location.as_deref()),
            other => optional(self.custom.get(other).map(String::as_str)),
        }
    }

    /// Every present value, built-in fields first, then custom values.
    pub fn values(&self) -> impl Iterator<Item = FieldValue<'_>> {
        RECORD_FIELDS
            .iter()
            .map(move |name| self.field(name))
            .chain(self.custom.values().map(|value| FieldValue::Text(value)))
            .filter(|value| !value.is_missing())
    }

    /// Overwrite a field from user input.
    ///
    /// `age` takes the leading integer of the input, or 0. The id is
    /// immutable and is left untouched (returns `false`). Unknown names are
    /// stored as custom values.
    pub fn set_field(&mut self, name: &str, value: &str) -> bool {
        match name {
            "id" => return false,
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "age" => self.age = parse_leading_int(value).unwrap_or(0),
            "role" => self.role = value.to_string(),
            "department" => self.department = Some(value.to_string()),
            "location" => self.location = Some(value.to_string()),
            other => {
                self.custom.insert(other.to_string(), value.to_string());
            }
        }
        true
    }
}

fn optional(value: Option<&str>) -> FieldValue<'_> {
    match value {
        Some(text) => FieldValue::Text(text),
        None => FieldValue::Missing,
    }
}

/// Parse the integer prefix of `raw`, the way a browser form does.
///
/// Leading whitespace and one sign are accepted, parsing stops at the first
/// non-digit. `"30"`, `" 30 "`, `"30years"` and `"30.9"` all give 30; `"abc"`
/// and `""` give `None`. Values beyond `i64` saturate.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let mut value: i64 = 0;
    for b in digits[..end].bytes() {
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> Record {
        Record::new(RecordId::new("1").unwrap(), "John Doe", "john@example.com", 28, "Developer")
            .with_department("Engineering")
    }

    #[test]
    fn field_lookup_covers_builtins_and_custom() {
        let rec = record().with_custom("team", "Platform");
        assert_eq!(rec.field("name"), FieldValue::Text("John Doe"));
        assert_eq!(rec.field("age"), FieldValue::Number(28));
        assert_eq!(rec.field("department"), FieldValue::Text("Engineering"));
        assert_eq!(rec.field("location"), FieldValue::Missing);
        assert_eq!(rec.field("team"), FieldValue::Text("Platform"));
        assert_eq!(rec.field("unknown"), FieldValue::Missing);
    }

    #[test]
    fn values_skip_missing_fields() {
        let rendered: Vec<String> = record().values().map(|v| v.render().into_owned()).collect();
        assert_eq!(
            rendered,
            vec!["1", "John Doe", "john@example.com", "28", "Developer", "Engineering"]
        );
    }

    #[test]
    fn set_field_parses_age_and_keeps_id() {
        let mut rec = record();
        assert!(rec.set_field("age", "41 years"));
        assert_eq!(rec.age, 41);
        assert!(rec.set_field("age", "n/a"));
        assert_eq!(rec.age, 0);
        assert!(!rec.set_field("id", "99"));
        assert_eq!(rec.id.as_str(), "1");
        assert!(rec.set_field("team", "Core"));
        assert_eq!(rec.custom.get("team").map(String::as_str), Some("Core"));
    }

    #[test]
    fn compare_orders_missing_first() {
        assert_eq!(
            FieldValue::Missing.compare(&FieldValue::Text("a")),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Number(9).compare(&FieldValue::Number(10)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::Text("b").compare(&FieldValue::Text("a")),
            Ordering::Greater
        );
    }

    #[test]
    fn parse_leading_int_matches_form_input() {
        assert_eq!(parse_leading_int("30"), Some(30));
        assert_eq!(parse_leading_int("  30  "), Some(30));
        assert_eq!(parse_leading_int("30.9"), Some(30));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("+4x"), Some(4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn record_json_omits_absent_optionals() {
        let json = serde_json::to_value(record()).unwrap();
        assert_eq!(json["department"], "Engineering");
        assert!(json.get("location").is_none());
        assert!(json.get("custom").is_none());
    }
}
