//! Client side of the dictionary: pure list filtering, the view state built on
//! it, an HTTP client for the API, and the add/edit/delete flow.

mod api;
mod app;
mod filter;
mod view;

pub use api::{ClientError, WordsClient};
pub use app::{DictionaryApp, Notice, WordForm, CONFIRM_DELETE_PROMPT};
pub use filter::{filter_indices, filter_words, matches_query, OfficialFilter};
pub use view::DictionaryView;
