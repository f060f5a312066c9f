//! Dictionary entry types shared by the server, the stores and the client.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// One persisted dictionary entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Word {
    pub id: i32,
    /// Toki Pona headword.
    pub word: String,
    /// Korean definition.
    pub meaning: String,
    pub english: Option<String>,
    pub is_official: bool,
    pub example: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Request body for create and update. Every field is optional on the wire;
/// `RequestValidator` decides what is acceptable.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct WordPayload {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub meaning: Option<String>,
    #[serde(default)]
    pub english: Option<String>,
    #[serde(default)]
    pub is_official: Option<bool>,
    #[serde(default)]
    pub example: Option<String>,
}

/// A validated payload: `word` and `meaning` are non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewWord {
    pub word: String,
    pub meaning: String,
    pub english: Option<String>,
    pub is_official: bool,
    pub example: Option<String>,
}

impl From<&Word> for WordPayload {
    fn from(w: &Word) -> Self {
        WordPayload {
            word: Some(w.word.clone()),
            meaning: Some(w.meaning.clone()),
            english: w.english.clone(),
            is_official: Some(w.is_official),
            example: w.example.clone(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}
