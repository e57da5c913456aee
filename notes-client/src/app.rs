//! Client view state and the create / edit / delete flows.
//!
//! The local collection is a cache of the server's. It only changes after the
//! server has answered a mutation; a failed request is logged and leaves both
//! the collection and the form exactly as they were.

use notes_types::Note;

use crate::api::NoteService;
use crate::error::{ClientError, Result};
use crate::filter;
use crate::form::NoteForm;

pub struct NotesApp<S> {
    service: S,
    notes: Vec<Note>,
    form: NoteForm,
    search_query: String,
}

impl<S: NoteService> NotesApp<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            notes: Vec::new(),
            form: NoteForm::default(),
            search_query: String::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn form(&self) -> &NoteForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut NoteForm {
        &mut self.form
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Fetch the collection once. On failure the collection is left as is.
    pub async fn load(&mut self) -> Result<()> {
        match self.service.list_notes().await {
            Ok(notes) => {
                log::debug!("Loaded {} notes", notes.len());
                self.notes = notes;
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to load notes: {}", e);
                Err(e)
            }
        }
    }

    pub fn open_create(&mut self) {
        self.form.open_create();
    }

    /// Equivalent of clicking a card: fill the form and enter edit mode.
    pub fn select_note(&mut self, id: u64) -> Result<()> {
        let note = self
            .notes
            .iter()
            .find(|note| note.id == id)
            .ok_or(ClientError::UnknownNote(id))?;
        self.form.open_edit(note);
        Ok(())
    }

    /// Send the form to the create or update endpoint depending on its mode.
    pub async fn submit(&mut self) -> Result<Note> {
        if !self.form.is_visible() {
            return Err(ClientError::FormClosed);
        }
        let payload = self.form.validate()?;

        match self.form.selected() {
            None => match self.service.create_note(&payload).await {
                Ok(note) => {
                    self.notes.insert(0, note.clone());
                    self.form.reset();
                    Ok(note)
                }
                Err(e) => {
                    log::error!("Failed to add note: {}", e);
                    Err(e)
                }
            },
            Some(id) => match self.service.update_note(id, &payload).await {
                Ok(note) => {
                    for slot in self.notes.iter_mut().filter(|n| n.id == id) {
                        *slot = note.clone();
                    }
                    self.form.reset();
                    Ok(note)
                }
                Err(e) => {
                    log::error!("Failed to update note {}: {}", id, e);
                    Err(e)
                }
            },
        }
    }

    /// Delete a note without touching the form, even if it is being edited.
    pub async fn delete_note(&mut self, id: u64) -> Result<()> {
        match self.service.delete_note(id).await {
            Ok(()) => {
                self.notes.retain(|note| note.id != id);
                Ok(())
            }
            Err(e) => {
                log::error!("Failed to delete note {}: {}", id, e);
                Err(e)
            }
        }
    }

    /// Discard the form. No request is made.
    pub fn cancel(&mut self) {
        self.form.reset();
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// The collection as currently filtered by the search query.
    pub fn visible_notes(&self) -> Vec<&Note> {
        filter::filter_notes(&self.notes, &self.search_query)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use notes_types::{DEFAULT_COLOR, NotePayload};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// In-memory stand-in for the server. `fail` makes every call error out.
    #[derive(Default)]
    pub(crate) struct FakeService {
        pub notes: Mutex<Vec<Note>>,
        pub fail: AtomicBool,
        pub calls: AtomicUsize,
    }

    impl FakeService {
        pub fn with_notes(notes: Vec<Note>) -> Self {
            Self {
                notes: Mutex::new(notes),
                ..Default::default()
            }
        }

        fn check(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail.load(Ordering::SeqCst) {
                return Err(ClientError::Status {
                    status: 503,
                    message: "unavailable".to_string(),
                });
            }
            Ok(())
        }
    }

    #[async_trait]
    impl NoteService for FakeService {
        async fn list_notes(&self) -> Result<Vec<Note>> {
            self.check()?;
            Ok(self.notes.lock().unwrap().clone())
        }

        async fn create_note(&self, payload: &NotePayload) -> Result<Note> {
            self.check()?;
            let mut notes = self.notes.lock().unwrap();
            let note = Note::from_payload(notes.len() as u64 + 1, payload.clone());
            notes.push(note.clone());
            Ok(note)
        }

        async fn update_note(&self, id: u64, payload: &NotePayload) -> Result<Note> {
            self.check()?;
            let mut notes = self.notes.lock().unwrap();
            match notes.iter_mut().find(|n| n.id == id) {
                Some(slot) => {
                    *slot = Note::from_payload(id, payload.clone());
                    Ok(slot.clone())
                }
                None => Err(ClientError::Status {
                    status: 404,
                    message: "Note not found".to_string(),
                }),
            }
        }

        async fn delete_note(&self, id: u64) -> Result<()> {
            self.check()?;
            self.notes.lock().unwrap().retain(|n| n.id != id);
            Ok(())
        }
    }

    pub(crate) fn note(id: u64, title: &str, content: &str) -> Note {
        Note {
            id,
            title: Some(title.into()),
            content: Some(content.into()),
            color: Some(DEFAULT_COLOR.into()),
        }
    }

    async fn loaded_app(notes: Vec<Note>) -> NotesApp<FakeService> {
        let mut app = NotesApp::new(FakeService::with_notes(notes));
        app.load().await.unwrap();
        app
    }

    #[tokio::test]
    async fn test_load_populates_collection() {
        let app = loaded_app(vec![note(1, "A", "a"), note(2, "B", "b")]).await;
        assert_eq!(app.notes().len(), 2);
    }

    #[tokio::test]
    async fn test_load_failure_leaves_collection_empty() {
        let service = FakeService::with_notes(vec![note(1, "A", "a")]);
        service.fail.store(true, Ordering::SeqCst);
        let mut app = NotesApp::new(service);

        assert!(app.load().await.is_err());
        assert!(app.notes().is_empty());
    }

    #[tokio::test]
    async fn test_create_prepends_and_closes_form() {
        let mut app = loaded_app(vec![note(1, "Old", "x")]).await;

        app.open_create();
        app.form_mut().title = "New".to_string();
        app.form_mut().content = "body".to_string();
        app.form_mut().color = "#FF0000".to_string();
        let created = app.submit().await.unwrap();

        assert_eq!(created.id, 2);
        assert_eq!(app.notes()[0], created);
        assert_eq!(app.notes()[1].id, 1);
        assert!(!app.form().is_visible());
        assert_eq!(app.form().color, DEFAULT_COLOR);
    }

    #[tokio::test]
    async fn test_create_failure_keeps_form_data() {
        let mut app = loaded_app(vec![]).await;
        app.open_create();
        app.form_mut().title = "T".to_string();
        app.form_mut().content = "C".to_string();

        app.service().fail.store(true, Ordering::SeqCst);
        assert!(app.submit().await.is_err());

        assert!(app.form().is_visible());
        assert_eq!(app.form().title, "T");
        assert!(app.notes().is_empty());
    }

    #[tokio::test]
    async fn test_required_fields_block_the_request() {
        let mut app = loaded_app(vec![]).await;
        let calls = app.service().calls.load(Ordering::SeqCst);

        app.open_create();
        app.form_mut().content = "no title".to_string();
        let err = app.submit().await.unwrap_err();

        assert!(matches!(err, ClientError::MissingField("title")));
        assert_eq!(app.service().calls.load(Ordering::SeqCst), calls);
    }

    #[tokio::test]
    async fn test_submit_requires_open_form() {
        let mut app = loaded_app(vec![]).await;
        assert!(matches!(app.submit().await, Err(ClientError::FormClosed)));
    }

    #[tokio::test]
    async fn test_edit_replaces_note_in_place() {
        let mut app = loaded_app(vec![note(1, "A", "a"), note(2, "B", "b")]).await;

        app.select_note(2).unwrap();
        assert!(app.form().is_editing());
        assert_eq!(app.form().title, "B");

        app.form_mut().content = "changed".to_string();
        app.submit().await.unwrap();

        assert_eq!(app.notes()[1].content_str(), "changed");
        assert_eq!(app.notes()[0], note(1, "A", "a"));
        assert!(!app.form().is_visible());
        assert_eq!(app.form().selected(), None);
    }

    #[tokio::test]
    async fn test_edit_of_note_gone_on_server_keeps_form_open() {
        let mut app = loaded_app(vec![note(1, "A", "a")]).await;
        app.service().notes.lock().unwrap().clear();

        app.select_note(1).unwrap();
        app.form_mut().title = "A2".to_string();
        let err = app.submit().await.unwrap_err();

        assert!(matches!(err, ClientError::Status { status: 404, .. }));
        assert!(app.form().is_visible());
        assert_eq!(app.notes()[0].title_str(), "A");
    }

    #[tokio::test]
    async fn test_select_unknown_note() {
        let mut app = loaded_app(vec![]).await;
        assert!(matches!(app.select_note(5), Err(ClientError::UnknownNote(5))));
        assert!(!app.form().is_visible());
    }

    #[tokio::test]
    async fn test_delete_does_not_touch_the_form() {
        let mut app = loaded_app(vec![note(1, "A", "a"), note(2, "B", "b")]).await;
        app.select_note(1).unwrap();

        app.delete_note(2).await.unwrap();

        assert_eq!(app.notes(), &[note(1, "A", "a")]);
        assert_eq!(app.form().selected(), Some(1));
        assert!(app.form().is_visible());
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_local_state() {
        let mut app = loaded_app(vec![note(1, "A", "a")]).await;
        app.service().fail.store(true, Ordering::SeqCst);

        assert!(app.delete_note(1).await.is_err());
        assert_eq!(app.notes().len(), 1);
    }

    #[tokio::test]
    async fn test_cancel_makes_no_request() {
        let mut app = loaded_app(vec![note(1, "A", "a")]).await;
        let calls = app.service().calls.load(Ordering::SeqCst);

        app.select_note(1).unwrap();
        app.cancel();

        assert_eq!(app.form(), &NoteForm::default());
        assert_eq!(app.service().calls.load(Ordering::SeqCst), calls);
    }

    #[tokio::test]
    async fn test_search_filters_view_only() {
        let mut app = loaded_app(vec![
            note(1, "Groceries", "milk"),
            note(2, "Work", "email boss"),
        ])
        .await;

        app.set_search_query("bo");
        let ids: Vec<u64> = app.visible_notes().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![2]);
        assert_eq!(app.notes().len(), 2);

        app.set_search_query("");
        assert_eq!(app.visible_notes().len(), 2);
    }
}
