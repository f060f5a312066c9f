//! Word persistence. `WordStore` is the seam handlers talk to; `PgWordStore`
//! backs it with PostgreSQL and `MemoryWordStore` keeps rows in process.

mod memory;
mod postgres;

pub use memory::MemoryWordStore;
pub use postgres::{ensure_database_exists, PgWordStore};

use crate::error::AppError;
use crate::model::{NewWord, Word};
use async_trait::async_trait;

/// Table DDL. `example` is part of the canonical schema; `ADD_EXAMPLE_COLUMN`
/// upgrades tables created without it.
pub const CREATE_WORDS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS words (
    id SERIAL PRIMARY KEY,
    word VARCHAR(255) NOT NULL,
    meaning TEXT NOT NULL,
    english TEXT,
    is_official BOOLEAN DEFAULT false,
    example TEXT,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)
"#;

pub const ADD_EXAMPLE_COLUMN: &str = "ALTER TABLE words ADD COLUMN IF NOT EXISTS example TEXT";

#[async_trait]
pub trait WordStore: Send + Sync {
    /// Create the table if absent. Idempotent.
    async fn init(&self) -> Result<(), AppError>;

    /// Cheap round trip used by `/ready`.
    async fn ping(&self) -> Result<(), AppError>;

    /// All words, ascending by `word` (then `id`).
    async fn list(&self) -> Result<Vec<Word>, AppError>;

    /// Insert a row; the store assigns `id` and `created_at`.
    async fn create(&self, word: &NewWord) -> Result<Word, AppError>;

    /// Overwrite every mutable field of row `id`. `None` when no such row.
    async fn update(&self, id: i32, word: &NewWord) -> Result<Option<Word>, AppError>;

    /// Remove row `id`, returning it. `None` when no such row.
    async fn delete(&self, id: i32) -> Result<Option<Word>, AppError>;
}
