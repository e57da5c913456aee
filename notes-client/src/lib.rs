//! Notes client: talks to the notes service and keeps a local, searchable
//! view of its collection.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod filter;
pub mod form;
pub mod render;
pub mod repl;

pub use api::{HttpNoteService, NoteService};
pub use app::NotesApp;
pub use error::{ClientError, Result};
pub use form::NoteForm;
