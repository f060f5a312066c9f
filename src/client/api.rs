//! HTTP client for the words API.

use crate::error::ErrorBody;
use crate::model::{MessageBody, Word, WordPayload};
use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ClientError::Http(e) => e.status(),
            ClientError::Status { status, .. } => Some(*status),
        }
    }
}

#[derive(Clone, Debug)]
pub struct WordsClient {
    http: reqwest::Client,
    base_url: String,
}

impl WordsClient {
    /// `base_url` is the server origin, e.g. `http://127.0.0.1:5000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        WordsClient { http, base_url }
    }

    fn words_url(&self) -> String {
        format!("{}/api/words", self.base_url)
    }

    fn word_url(&self, id: i32) -> String {
        format!("{}/api/words/{}", self.base_url, id)
    }

    pub async fn list(&self) -> Result<Vec<Word>, ClientError> {
        let resp = self.http.get(self.words_url()).send().await?;
        decode(resp).await
    }

    pub async fn create(&self, payload: &WordPayload) -> Result<Word, ClientError> {
        let resp = self.http.post(self.words_url()).json(payload).send().await?;
        decode(resp).await
    }

    pub async fn update(&self, id: i32, payload: &WordPayload) -> Result<Word, ClientError> {
        let resp = self.http.put(self.word_url(id)).json(payload).send().await?;
        decode(resp).await
    }

    pub async fn delete(&self, id: i32) -> Result<MessageBody, ClientError> {
        let resp = self.http.delete(self.word_url(id)).send().await?;
        decode(resp).await
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp.json::<T>().await?);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status.canonical_reason().unwrap_or("request failed").to_string(),
    };
    tracing::debug!(%status, %message, "request failed");
    Err(ClientError::Status { status, message })
}
