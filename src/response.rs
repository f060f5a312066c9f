//! Success response helpers. Bodies are bare JSON values, not enveloped.

use crate::model::MessageBody;
use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn message(message: &str) -> (StatusCode, Json<MessageBody>) {
    ok(MessageBody {
        message: message.to_string(),
    })
}
