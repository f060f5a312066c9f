//! WordService: validation, not-found mapping and error context around a `WordStore`.

mod validation;
mod words;
pub use validation::{RequestValidator, MAX_WORD_CHARS, REQUIRED_FIELDS_MESSAGE};
pub use words::{WordService, DELETED_MESSAGE, NOT_FOUND_MESSAGE};
