//! Word CRUD handlers: list, create, update, delete.

use crate::error::{AppError, ErrorBody};
use crate::model::{MessageBody, Word, WordPayload};
use crate::response;
use crate::service::{WordService, DELETED_MESSAGE};
use crate::state::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

fn parse_id(id: Result<Path<i32>, PathRejection>) -> Result<i32, AppError> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::BadRequest("invalid id".into()))
}

fn parse_body(body: Result<Json<WordPayload>, JsonRejection>) -> Result<WordPayload, AppError> {
    body.map(|Json(p)| p).map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(e.body_text())
        } else {
            AppError::BadRequest(e.body_text())
        }
    })
}

#[utoipa::path(
    get,
    path = "/api/words",
    responses(
        (status = 200, description = "All words ordered by headword", body = [Word]),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn list_words(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = WordService::list(state.store.as_ref()).await?;
    Ok(response::ok(rows))
}

#[utoipa::path(
    post,
    path = "/api/words",
    request_body = WordPayload,
    responses(
        (status = 201, description = "Created word", body = Word),
        (status = 400, description = "word or meaning missing", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn create_word(
    State(state): State<AppState>,
    body: Result<Json<WordPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = parse_body(body)?;
    let row = WordService::create(state.store.as_ref(), payload).await?;
    Ok(response::created(row))
}

#[utoipa::path(
    put,
    path = "/api/words/{id}",
    params(("id" = i32, Path, description = "Word id")),
    request_body = WordPayload,
    responses(
        (status = 200, description = "Updated word", body = Word),
        (status = 400, description = "word or meaning missing", body = ErrorBody),
        (status = 404, description = "No word with this id", body = ErrorBody),
        (status = 413, description = "Body over the size limit", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn update_word(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<WordPayload>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    let payload = parse_body(body)?;
    let row = WordService::update(state.store.as_ref(), id, payload).await?;
    Ok(response::ok(row))
}

#[utoipa::path(
    delete,
    path = "/api/words/{id}",
    params(("id" = i32, Path, description = "Word id")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
        (status = 404, description = "No word with this id", body = ErrorBody),
        (status = 500, description = "Store error", body = ErrorBody)
    )
)]
pub async fn delete_word(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(id)?;
    WordService::delete(state.store.as_ref(), id).await?;
    Ok(response::message(DELETED_MESSAGE))
}
