#![deny(unsafe_code)]

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use sha2::Digest;

use crate::ModelError;

/// Stable identity of a record.
///
/// Any non-empty string is accepted so hand-written ids (`"1"`, `"2"`) and
/// generated hex ids can live in the same store.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyRecordId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub(crate) fn builtin(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for RecordId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Key of a column definition, matching a record field or a custom key.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ModelError::EmptyColumnId(value));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Derive a column id from a user-entered label.
    ///
    /// The label is lowercased and every whitespace character is removed, so
    /// `"Department"`, `"department "` and `" DEPART MENT"` all map to
    /// `department`.
    pub fn from_label(label: &str) -> Result<Self, ModelError> {
        let id: String = label
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        if id.is_empty() {
            return Err(ModelError::EmptyColumnLabel(label.to_string()));
        }
        Ok(Self(id))
    }

    pub(crate) fn builtin(id: &'static str) -> Self {
        Self(id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ColumnId {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnId> for String {
    fn from(value: ColumnId) -> Self {
        value.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates record ids for imported and manually added records.
///
/// Ids are the first 16 bytes of `sha256("<nonce>\0<sequence>")` rendered as
/// lowercase hex. The nonce is fixed per generator, the sequence increments
/// on every call.
#[derive(Debug, Clone)]
pub struct RecordIdGenerator {
    nonce: String,
    next: u64,
}

impl RecordIdGenerator {
    /// Create a generator seeded from the clock and process id.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        Self::with_nonce(format!("{}-{nanos}", std::process::id()))
    }

    /// Create a generator with a fixed nonce. Same nonce, same id sequence.
    pub fn with_nonce(nonce: impl Into<String>) -> Self {
        Self {
            nonce: nonce.into(),
            next: 1,
        }
    }

    pub fn next_id(&mut self) -> RecordId {
        let mut hasher = sha2::Sha256::new();
        hasher.update(self.nonce.as_bytes());
        hasher.update([0u8]);
        hasher.update(self.next.to_string().as_bytes());
        self.next += 1;
        let digest: [u8; 32] = hasher.finalize().into();
        RecordId(hex::encode(&digest[..16]))
    }

    /// Next id for which `taken` returns false.
    pub fn next_unused(&mut self, taken: impl Fn(&RecordId) -> bool) -> RecordId {
        loop {
            let id = self.next_id();
            if !taken(&id) {
                return id;
            }
        }
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_trims_and_rejects_blank() {
        assert_eq!(RecordId::new(" 7 ").unwrap().as_str(), "7");
        assert!(matches!(
            RecordId::new("   "),
            Err(ModelError::EmptyRecordId(_))
        ));
    }

    #[test]
    fn column_id_from_label_strips_all_whitespace() {
        assert_eq!(ColumnId::from_label(" Location ").unwrap().as_str(), "location");
        assert_eq!(ColumnId::from_label("Start Date").unwrap().as_str(), "startdate");
        assert_eq!(
            ColumnId::from_label("Department").unwrap(),
            ColumnId::from_label("department ").unwrap()
        );
        assert!(matches!(
            ColumnId::from_label(" \t "),
            Err(ModelError::EmptyColumnLabel(_))
        ));
    }

    #[test]
    fn generator_is_deterministic_per_nonce() {
        let mut a = RecordIdGenerator::with_nonce("session");
        let mut b = RecordIdGenerator::with_nonce("session");
        let mut c = RecordIdGenerator::with_nonce("other");

        let first = a.next_id();
        assert_eq!(first, b.next_id());
        assert_ne!(first, a.next_id());
        assert_ne!(first, c.next_id());
        assert_eq!(first.as_str().len(), 32);
    }

    #[test]
    fn next_unused_skips_taken_ids() {
        let mut probe = RecordIdGenerator::with_nonce("n");
        let taken = probe.next_id();

        let mut generator = RecordIdGenerator::with_nonce("n");
        let id = generator.next_unused(|candidate| candidate == &taken);
        assert_ne!(id, taken);
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = RecordId::new("abc").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let err = serde_json::from_str::<RecordId>("\"  \"");
        assert!(err.is_err());
    }
}
