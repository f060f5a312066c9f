//! toki-dict server: loads `.env`, reads configuration, serves the API and browser UI.

use toki_dict::{server, Config};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("toki_dict=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;
    server::run(config).await
}
