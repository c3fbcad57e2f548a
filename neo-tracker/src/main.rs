use neo_tracker::config::TrackerConfig;
use neo_tracker::module::neo::{Catalog, NasaFeedClient};
use neo_tracker::service::AsteroidService;
use neo_tracker::{logging, page, server};

use anyhow::{Context, Result};
use std::sync::Arc;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = TrackerConfig::load(&config_path)?;

    // Initialize logging
    let _logging_guard = logging::init_logging(
        &config.log_dir,
        "neo-tracker",
        &config.log_level,
        config.log_retention_days,
    )?;

    tracing::info!("Asteroid tracker starting...");
    tracing::info!(
        "Config: {} (listen {}, feed {}, timeout {}s)",
        config_path,
        config.server_address(),
        config.nasa.feed_url,
        config.nasa.timeout_secs
    );
    if config.nasa.api_key == "DEMO_KEY" {
        tracing::warn!("Using DEMO_KEY; set NASA_API_KEY for higher upstream rate limits");
    }

    // The page has to be on disk before the listener accepts requests
    let index_page = page::write_index_page(&config.template_dir).await?;

    let feed = NasaFeedClient::new(&config.nasa).context("Failed to build NEO feed client")?;
    let service = AsteroidService::new(Catalog::bundled(), Arc::new(feed));

    let router = server::build_router(service, index_page);
    server::serve(&config, router).await
}
