//! Word CRUD against any `WordStore`.

use crate::error::AppError;
use crate::model::{Word, WordPayload};
use crate::service::RequestValidator;
use crate::store::WordStore;

pub const NOT_FOUND_MESSAGE: &str = "Word not found";
pub const DELETED_MESSAGE: &str = "Word deleted successfully";

pub struct WordService;

impl WordService {
    pub async fn list(store: &dyn WordStore) -> Result<Vec<Word>, AppError> {
        store
            .list()
            .await
            .map_err(|e| e.context("Failed to fetch words"))
    }

    /// Validate then insert. Nothing reaches the store when validation fails.
    pub async fn create(store: &dyn WordStore, payload: WordPayload) -> Result<Word, AppError> {
        let new_word = RequestValidator::validate(payload)?;
        let row = store
            .create(&new_word)
            .await
            .map_err(|e| e.context("Failed to add word"))?;
        tracing::info!(id = row.id, word = %row.word, "word added");
        Ok(row)
    }

    /// Full-row overwrite of `id`.
    pub async fn update(
        store: &dyn WordStore,
        id: i32,
        payload: WordPayload,
    ) -> Result<Word, AppError> {
        let new_word = RequestValidator::validate(payload)?;
        let row = store
            .update(id, &new_word)
            .await
            .map_err(|e| e.context("Failed to update word"))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.into()))?;
        tracing::info!(id, word = %row.word, "word updated");
        Ok(row)
    }

    pub async fn delete(store: &dyn WordStore, id: i32) -> Result<Word, AppError> {
        let row = store
            .delete(id)
            .await
            .map_err(|e| e.context("Failed to delete word"))?
            .ok_or_else(|| AppError::NotFound(NOT_FOUND_MESSAGE.into()))?;
        tracing::info!(id, word = %row.word, "word deleted");
        Ok(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryWordStore;

    fn payload(word: &str, meaning: &str) -> WordPayload {
        WordPayload {
            word: Some(word.into()),
            meaning: Some(meaning.into()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn invalid_create_persists_nothing() {
        let store = MemoryWordStore::new();
        let err = WordService::create(&store, payload("toki", "")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(WordService::list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found_and_creates_nothing() {
        let store = MemoryWordStore::new();
        let err = WordService::update(&store, 42, payload("toki", "말하다"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(WordService::list(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_removes_row() {
        let store = MemoryWordStore::new();
        let w = WordService::create(&store, payload("toki", "말하다")).await.unwrap();
        WordService::delete(&store, w.id).await.unwrap();
        assert!(WordService::list(&store).await.unwrap().is_empty());
        assert!(matches!(
            WordService::delete(&store, w.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
