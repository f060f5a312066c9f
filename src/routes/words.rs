//! Words API routes.

use crate::handlers::words::{create_word, delete_word, list_words, update_word};
use crate::openapi::openapi_json;
use crate::state::AppState;
use axum::{routing::get, routing::put, Router};

pub fn word_routes(state: AppState) -> Router {
    Router::new()
        .route("/words", get(list_words).post(create_word))
        .route("/words/:id", put(update_word).delete(delete_word))
        .route("/openapi.json", get(openapi_json))
        .with_state(state)
}
