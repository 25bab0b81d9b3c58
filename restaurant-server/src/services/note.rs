use super::{apply_update, find_or_not_found};
use crate::auth::CurrentUser;
use crate::db::{Collection, DocumentStore, Patch};
use crate::utils::{required, validate_payload};
use shared::models::{Note, NoteCreate, NoteUpdate};
use shared::query::{PageQuery, PaginatedResponse};
use shared::util::{new_object_id, now};
use shared::AppResult;
use std::sync::Arc;

#[derive(Clone)]
pub struct NoteService {
    notes: Collection<Note>,
}

impl NoteService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            notes: Collection::new(store),
        }
    }

    pub async fn list(&self, query: &PageQuery) -> AppResult<PaginatedResponse<Note>> {
        Ok(self.notes.list(query).await?)
    }

    pub async fn get(&self, note_id: &str) -> AppResult<Note> {
        find_or_not_found(&self.notes, note_id).await
    }

    pub async fn create(&self, payload: NoteCreate, actor: &CurrentUser) -> AppResult<Note> {
        validate_payload(&payload)?;

        let id = new_object_id();
        let now = now();
        let note = Note {
            id: id.clone(),
            note_id: id,
            title: required(payload.title, "title")?,
            text: required(payload.text, "text")?,
            created_at: now,
            updated_at: now,
        };
        self.notes.insert(&note).await?;

        tracing::info!(note_id = %note.note_id, uid = %actor.uid, "Note created");
        Ok(note)
    }

    pub async fn update(
        &self,
        note_id: &str,
        payload: NoteUpdate,
        actor: &CurrentUser,
    ) -> AppResult<Note> {
        validate_payload(&payload)?;

        let mut patch = Patch::new();
        patch
            .set_opt("title", payload.title)?
            .set_opt("text", payload.text)?;

        let note = apply_update(&self.notes, note_id, patch).await?;
        tracing::info!(note_id, uid = %actor.uid, "Note updated");
        Ok(note)
    }
}
