//! Error types for the notes client.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("no note with id {0}")]
    UnknownNote(u64),

    #[error("the note form is not open\n  hint: use 'new' or 'edit <id>' first")]
    FormClosed,

    #[error("{0}\n  hint: type 'help' for the list of commands")]
    InvalidCommand(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
