//! Request validation for word payloads.

use crate::error::AppError;
use crate::model::{NewWord, WordPayload};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Word and meaning are required";

/// Longest headword the `words.word VARCHAR(255)` column accepts, in characters.
pub const MAX_WORD_CHARS: usize = 255;

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create/update body. `word` and `meaning` must be present and
    /// non-blank; blank optional fields become `None`; `is_official` defaults to false.
    /// Accepted values are stored exactly as sent.
    pub fn validate(payload: WordPayload) -> Result<NewWord, AppError> {
        let word = non_blank(payload.word).ok_or_else(required_error)?;
        let meaning = non_blank(payload.meaning).ok_or_else(required_error)?;
        if word.chars().count() > MAX_WORD_CHARS {
            return Err(AppError::Validation(format!(
                "word must be at most {} characters",
                MAX_WORD_CHARS
            )));
        }
        Ok(NewWord {
            word,
            meaning,
            english: non_blank(payload.english),
            is_official: payload.is_official.unwrap_or(false),
            example: non_blank(payload.example),
        })
    }
}

fn required_error() -> AppError {
    AppError::Validation(REQUIRED_FIELDS_MESSAGE.into())
}

fn non_blank(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
