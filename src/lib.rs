//! toki-dict: a Toki Pona dictionary served as a small REST API over PostgreSQL,
//! with a static browser UI and a Rust client library.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod server;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use model::{NewWord, Word, WordPayload};
pub use routes::{api_router, app};
pub use service::WordService;
pub use state::AppState;
pub use store::{ensure_database_exists, MemoryWordStore, PgWordStore, WordStore};
