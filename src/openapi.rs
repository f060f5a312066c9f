//! OpenAPI document for the words API, served at `/api/openapi.json`.

use crate::error::ErrorBody;
use crate::handlers::words;
use crate::model::{MessageBody, Word, WordPayload};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(title = "toki-dict", description = "Toki Pona dictionary words API"),
    paths(
        words::list_words,
        words::create_word,
        words::update_word,
        words::delete_word
    ),
    components(schemas(Word, WordPayload, MessageBody, ErrorBody))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
