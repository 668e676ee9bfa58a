use anyhow::Result;
use person_api::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(
        max_upload_bytes = config.uploads.max_bytes,
        "starting person-api v{}",
        env!("CARGO_PKG_VERSION")
    );

    ServerBuilder::new().with_config(config).serve().await
}
