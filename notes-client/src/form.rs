//! The modal note form: field values plus create/edit mode.

use notes_types::{DEFAULT_COLOR, Note, NotePayload};

use crate::error::{ClientError, Result};

/// Submit button color while creating a note with the default color.
pub const NEUTRAL_SUBMIT_COLOR: &str = "#CCCCCC";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteForm {
    pub title: String,
    pub content: String,
    pub color: String,
    /// Id of the note being edited; `None` means create mode.
    selected: Option<u64>,
    visible: bool,
}

impl Default for NoteForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            color: DEFAULT_COLOR.to_string(),
            selected: None,
            visible: false,
        }
    }
}

impl NoteForm {
    /// Blank fields, default color, create mode, shown.
    pub fn open_create(&mut self) {
        *self = Self {
            visible: true,
            ..Self::default()
        };
    }

    /// Copy the note's fields in and switch to edit mode.
    pub fn open_edit(&mut self, note: &Note) {
        *self = Self {
            title: note.title_str().to_string(),
            content: note.content_str().to_string(),
            color: note.color_str().unwrap_or(DEFAULT_COLOR).to_string(),
            selected: Some(note.id),
            visible: true,
        };
    }

    /// Clear everything and hide the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn selected(&self) -> Option<u64> {
        self.selected
    }

    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    /// Enforce the required fields and build the request body. Whitespace
    /// counts as a value.
    pub fn validate(&self) -> Result<NotePayload> {
        if self.title.is_empty() {
            return Err(ClientError::MissingField("title"));
        }
        if self.content.is_empty() {
            return Err(ClientError::MissingField("content"));
        }
        Ok(NotePayload::new(&self.title, &self.content, &self.color))
    }

    pub fn heading(&self) -> &'static str {
        if self.is_editing() { "Edit note" } else { "Add a note" }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() { "Save" } else { "Add" }
    }

    /// The picked color, except for a fresh note still on the default color.
    pub fn submit_color(&self) -> &str {
        if self.is_editing() || !self.color.eq_ignore_ascii_case(DEFAULT_COLOR) {
            &self.color
        } else {
            NEUTRAL_SUBMIT_COLOR
        }
    }
}
