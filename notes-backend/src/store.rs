//! NoteStore: the in-memory note collection
//!
//! All notes live in one ordered `Vec` behind a single mutex. Every operation
//! takes the lock for its whole duration, so id assignment and the append that
//! follows it can never interleave with another request. Nothing is persisted.

use notes_types::{Note, NotePayload};
use parking_lot::Mutex;

use crate::config::IdPolicy;

struct Inner {
    notes: Vec<Note>,
    /// Last id handed out under `IdPolicy::Monotonic`.
    last_id: u64,
}

pub struct NoteStore {
    inner: Mutex<Inner>,
    id_policy: IdPolicy,
}

impl NoteStore {
    pub fn new(id_policy: IdPolicy) -> Self {
        Self {
            inner: Mutex::new(Inner {
                notes: Vec::new(),
                last_id: 0,
            }),
            id_policy,
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    /// Snapshot of every note in insertion order
    pub fn list(&self) -> Vec<Note> {
        self.inner.lock().notes.clone()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append a new note and return it with its assigned id
    pub fn create(&self, payload: NotePayload) -> Note {
        let mut inner = self.inner.lock();

        let id = match self.id_policy {
            IdPolicy::Length => inner.notes.len() as u64 + 1,
            IdPolicy::Monotonic => {
                inner.last_id += 1;
                inner.last_id
            }
        };

        let note = Note::from_payload(id, payload);
        inner.notes.push(note.clone());
        log::debug!("[NoteStore] Created note {} ({} stored)", id, inner.notes.len());
        note
    }

    /// Replace the first note with this id. Returns `None` when no note matches.
    pub fn update(&self, id: u64, payload: NotePayload) -> Option<Note> {
        let mut inner = self.inner.lock();
        let slot = inner.notes.iter_mut().find(|note| note.id == id)?;
        *slot = Note::from_payload(id, payload);
        Some(slot.clone())
    }

    /// Remove every note with this id and return how many were removed.
    /// Under `IdPolicy::Length` more than one note can share an id.
    pub fn delete(&self, id: u64) -> usize {
        let mut inner = self.inner.lock();
        let before = inner.notes.len();
        inner.notes.retain(|note| note.id != id);
        before - inner.notes.len()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(IdPolicy::default())
    }
}
