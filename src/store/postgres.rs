use super::{WordStore, ADD_EXAMPLE_COLUMN, CREATE_WORDS_TABLE};
use crate::error::{AppError, ConfigError};
use crate::model::{NewWord, Word};
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Selected columns. `is_official` is nullable in the table, rows never expose null.
const COLUMNS: &str =
    "id, word, meaning, english, COALESCE(is_official, false) AS is_official, example, created_at";

#[derive(Clone)]
pub struct PgWordStore {
    pool: PgPool,
}

impl PgWordStore {
    pub fn new(pool: PgPool) -> Self {
        PgWordStore { pool }
    }
}

#[async_trait]
impl WordStore for PgWordStore {
    async fn init(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_WORDS_TABLE).execute(&self.pool).await?;
        sqlx::query(ADD_EXAMPLE_COLUMN).execute(&self.pool).await?;
        tracing::info!("words table ready");
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Word>, AppError> {
        let sql = format!("SELECT {} FROM words ORDER BY word ASC, id ASC", COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Word>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn create(&self, word: &NewWord) -> Result<Word, AppError> {
        let sql = format!(
            "INSERT INTO words (word, meaning, english, is_official, example) \
             VALUES ($1, $2, $3, $4, $5) RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, word = %word.word, "query");
        let row = sqlx::query_as::<_, Word>(&sql)
            .bind(&word.word)
            .bind(&word.meaning)
            .bind(&word.english)
            .bind(word.is_official)
            .bind(&word.example)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: i32, word: &NewWord) -> Result<Option<Word>, AppError> {
        let sql = format!(
            "UPDATE words SET word = $1, meaning = $2, english = $3, is_official = $4, example = $5 \
             WHERE id = $6 RETURNING {}",
            COLUMNS
        );
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Word>(&sql)
            .bind(&word.word)
            .bind(&word.meaning)
            .bind(&word.english)
            .bind(word.is_official)
            .bind(&word.example)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<Option<Word>, AppError> {
        let sql = format!("DELETE FROM words WHERE id = $1 RETURNING {}", COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Word>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

/// Ensure the database named in `database_url` exists, creating it if not.
/// Connects to the `postgres` maintenance database to run CREATE DATABASE.
/// Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        key: "DATABASE_URL",
        value: database_url.to_string(),
        reason: e.to_string(),
    })?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(()),
    };
    let mut conn = opts.database("postgres").connect().await?;
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("toki"), "\"toki\"");
        assert_eq!(quote_ident("a\"b"), "\"a\"\"b\"");
    }

    #[tokio::test]
    async fn unparseable_database_url_is_a_config_error() {
        let err = ensure_database_exists("not a database url").await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Config(ConfigError::Invalid { key: "DATABASE_URL", .. })
        ));
    }
}
