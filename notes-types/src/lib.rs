//! Shared types for the notes service and its HTTP clients.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Color used by the client form when the user has not picked one.
pub const DEFAULT_COLOR: &str = "#FFFFFF";

pub const NOTE_NOT_FOUND: &str = "Note not found";
pub const NOTE_DELETED: &str = "Note deleted";

/// Keep an explicit `null` as `Some(Value::Null)`; only a missing key is `None`.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

fn as_text(field: &Option<Value>) -> Option<&str> {
    field.as_ref().and_then(Value::as_str)
}

// =====================================================
// Request Types
// =====================================================

/// Body of `POST /notes` and `PUT /notes/{id}`.
///
/// Every field is optional and kept exactly as sent, whatever its JSON type:
/// the service stores what it was given and a missing field stays missing on
/// the stored note. Any `id` sent by the caller is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePayload {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
}

impl NotePayload {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(Value::String(title.into())),
            content: Some(Value::String(content.into())),
            color: Some(Value::String(color.into())),
        }
    }
}

// =====================================================
// Response Types
// =====================================================

/// Acknowledgment body used by `DELETE` and by the 404 of `PUT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new(NOTE_NOT_FOUND)
    }

    pub fn deleted() -> Self {
        Self::new(NOTE_DELETED)
    }
}

// =====================================================
// Domain Types
// =====================================================

/// A stored note. The id is assigned by the service; the other fields hold
/// whatever JSON the caller sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub color: Option<Value>,
}

impl Note {
    /// Build a note from a payload, replacing every mutable field.
    pub fn from_payload(id: u64, payload: NotePayload) -> Self {
        Self {
            id,
            title: payload.title,
            content: payload.content,
            color: payload.color,
        }
    }

    /// Title as text. Missing or non-string titles read as empty.
    pub fn title_str(&self) -> &str {
        as_text(&self.title).unwrap_or_default()
    }

    /// Content as text. Missing or non-string content reads as empty.
    pub fn content_str(&self) -> &str {
        as_text(&self.content).unwrap_or_default()
    }

    /// `None` when the color is missing or not a string.
    pub fn color_str(&self) -> Option<&str> {
        as_text(&self.color)
    }
}
