//! Note Model

use super::rules::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Free-form note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    #[serde(rename = "_id")]
    pub id: String,
    pub note_id: String,
    pub title: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create note payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NoteCreate {
    #[validate(required, length(min = 1, max = MAX_SHORT_TEXT_LEN))]
    pub title: Option<String>,
    #[validate(required, length(min = 1, max = MAX_NOTE_LEN))]
    pub text: Option<String>,
}

/// Update note payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NoteUpdate {
    #[validate(length(min = 1, max = MAX_SHORT_TEXT_LEN))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = MAX_NOTE_LEN))]
    pub text: Option<String>,
}
