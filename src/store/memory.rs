use super::WordStore;
use crate::error::AppError;
use crate::model::{NewWord, Word};
use async_trait::async_trait;
use tokio::sync::RwLock;

/// In-process store with the same ordering and id semantics as the table.
#[derive(Default)]
pub struct MemoryWordStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i32,
    rows: Vec<Word>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Word>, AppError> {
        let inner = self.inner.read().await;
        let mut rows = inner.rows.clone();
        rows.sort_by(|a, b| a.word.cmp(&b.word).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn create(&self, word: &NewWord) -> Result<Word, AppError> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let row = Word {
            id: inner.last_id,
            word: word.word.clone(),
            meaning: word.meaning.clone(),
            english: word.english.clone(),
            is_official: word.is_official,
            example: word.example.clone(),
            created_at: chrono::Utc::now().naive_utc(),
        };
        inner.rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: i32, word: &NewWord) -> Result<Option<Word>, AppError> {
        let mut inner = self.inner.write().await;
        let Some(row) = inner.rows.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };
        row.word = word.word.clone();
        row.meaning = word.meaning.clone();
        row.english = word.english.clone();
        row.is_official = word.is_official;
        row.example = word.example.clone();
        Ok(Some(row.clone()))
    }

    async fn delete(&self, id: i32) -> Result<Option<Word>, AppError> {
        let mut inner = self.inner.write().await;
        let pos = inner.rows.iter().position(|r| r.id == id);
        Ok(pos.map(|i| inner.rows.remove(i)))
    }
}
