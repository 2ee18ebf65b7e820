//! Tracking of rows that are in edit mode.

use std::collections::BTreeSet;

use serde::{Serialize, Serializer};
use tabman_model::{Record, RecordId};

use crate::RecordStore;

/// One open edit: the record id and its working copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub id: RecordId,
    pub working: Record,
}

/// Open edit sessions in the order they were started.
///
/// Serializes as a JSON array of the open record ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSessions {
    sessions: Vec<EditSession>,
}

impl EditSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reopen sessions for `ids`, taking working copies from `store`.
    /// Ids the store does not hold are skipped.
    pub fn from_ids<I>(ids: I, store: &RecordStore) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        let mut sessions = Self::new();
        for id in ids {
            if let Some(record) = store.get(&id) {
                sessions.begin(record);
            }
        }
        sessions
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn is_editing(&self, id: &RecordId) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &RecordId> {
        self.sessions.iter().map(|session| &session.id)
    }

    pub fn to_id_set(&self) -> BTreeSet<RecordId> {
        self.ids().cloned().collect()
    }

    pub fn working_copy(&self, id: &RecordId) -> Option<&Record> {
        self.position(id).map(|idx| &self.sessions[idx].working)
    }

    fn position(&self, id: &RecordId) -> Option<usize> {
        self.sessions.iter().position(|session| &session.id == id)
    }

    /// Open a session for `record`. An already open session keeps its
    /// working copy and `false` is returned.
    pub fn begin(&mut self, record: &Record) -> bool {
        if self.is_editing(&record.id) {
            return false;
        }
        self.sessions.push(EditSession {
            id: record.id.clone(),
            working: record.clone(),
        });
        true
    }

    /// Change one field of the working copy.
    pub fn set_field(&mut self, id: &RecordId, field: &str, value: &str) -> bool {
        match self.position(id) {
            Some(idx) => self.sessions[idx].working.set_field(field, value),
            None => false,
        }
    }

    /// Close the session and hand back its working copy.
    pub fn close(&mut self, id: &RecordId) -> Option<Record> {
        self.position(id)
            .map(|idx| self.sessions.remove(idx).working)
    }

    /// Close every session, returning the working copies in session order.
    pub fn drain(&mut self) -> Vec<Record> {
        self.sessions
            .drain(..)
            .map(|session| session.working)
            .collect()
    }

    /// Close every session without keeping the working copies.
    pub fn clear_all(&mut self) -> usize {
        let closed = self.sessions.len();
        self.sessions.clear();
        closed
    }

    /// Drop sessions whose id no longer passes `keep`.
    pub fn retain(&mut self, mut keep: impl FnMut(&RecordId) -> bool) {
        self.sessions.retain(|session| keep(&session.id));
    }
}

impl Serialize for EditSessions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.ids())
    }
}
