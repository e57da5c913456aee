//! Typed HTTP client for the notes service API.

use async_trait::async_trait;
use notes_types::{MessageResponse, Note, NotePayload};
use serde::de::DeserializeOwned;

use crate::error::{ClientError, Result};

/// The operations the client application needs from the note store.
#[async_trait]
pub trait NoteService: Send + Sync {
    async fn list_notes(&self) -> Result<Vec<Note>>;

    async fn create_note(&self, payload: &NotePayload) -> Result<Note>;

    /// Any non-2xx answer, such as the 404 for an id the server no longer
    /// has, comes back as `ClientError::Status`. The app then keeps the form
    /// open with its data.
    async fn update_note(&self, id: u64, payload: &NotePayload) -> Result<Note>;

    /// Succeeds as soon as the server answers, whatever it answered.
    async fn delete_note(&self, id: u64) -> Result<()>;
}

/// [`NoteService`] over HTTP. No timeout and no retries are configured.
pub struct HttpNoteService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpNoteService {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: u64) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }
}

/// Decode a successful body, or turn an error status into `ClientError::Status`
/// carrying the server's `message` when it sent one.
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageResponse>(&body)
            .map(|m| m.message)
            .unwrap_or(body);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(resp.json::<T>().await?)
}

#[async_trait]
impl NoteService for HttpNoteService {
    async fn list_notes(&self) -> Result<Vec<Note>> {
        let resp = self.client.get(self.notes_url()).send().await?;
        read_json(resp).await
    }

    async fn create_note(&self, payload: &NotePayload) -> Result<Note> {
        let resp = self
            .client
            .post(self.notes_url())
            .json(payload)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn update_note(&self, id: u64, payload: &NotePayload) -> Result<Note> {
        let resp = self
            .client
            .put(self.note_url(id))
            .json(payload)
            .send()
            .await?;
        read_json(resp).await
    }

    async fn delete_note(&self, id: u64) -> Result<()> {
        let resp = self.client.delete(self.note_url(id)).send().await?;
        log::debug!("DELETE note {} answered {}", id, resp.status());
        Ok(())
    }
}
