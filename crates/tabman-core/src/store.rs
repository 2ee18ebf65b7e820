//! The full, unfiltered record collection.

use tabman_model::{Record, RecordId, RecordIdGenerator};

/// Owns every record and hands out unique ids.
///
/// The store does not validate field contents. It also does not derive the
/// view; [`TableState`](crate::TableState) recomputes after each mutation.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    ids: RecordIdGenerator,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_generator(ids: RecordIdGenerator) -> Self {
        Self {
            records: Vec::new(),
            ids,
        }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn get(&self, id: &RecordId) -> Option<&Record> {
        self.position(id).map(|idx| &self.records[idx])
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.records.iter().position(|record| &record.id == id)
    }

    /// An id no stored record uses.
    pub fn next_id(&mut self) -> RecordId {
        let records = &self.records;
        self.ids
            .next_unused(|candidate| records.iter().any(|record| &record.id == candidate))
    }

    pub fn id_generator_mut(&mut self) -> &mut RecordIdGenerator {
        &mut self.ids
    }

    /// Replace the whole collection.
    pub fn set_all(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    /// Append a record. A record whose id is already taken gets a fresh one.
    pub fn add(&mut self, mut record: Record) -> RecordId {
        if self.contains(&record.id) {
            record.id = self.next_id();
        }
        let id = record.id.clone();
        self.records.push(record);
        id
    }

    /// Replace the record with the same id. Unknown ids are ignored.
    pub fn update(&mut self, record: Record) -> bool {
        match self.position(&record.id) {
            Some(idx) => {
                self.records[idx] = record;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &RecordId) -> Option<Record> {
        self.position(id).map(|idx| self.records.remove(idx))
    }
}
