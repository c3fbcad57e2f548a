//! NASA NeoWs feed client
use async_trait::async_trait;
use neo_common::AsteroidRecord;
use reqwest::Client;
use std::time::Duration;

use super::error::FetchError;
use super::normalizer::flatten_feed;
use super::types::{DateRange, FeedResponse};
use crate::config::NasaConfig;

/// Source of live NEO records for a date range
#[async_trait]
pub trait NeoFeed: Send + Sync {
    async fn fetch(&self, range: &DateRange) -> Result<Vec<AsteroidRecord>, FetchError>;
}

/// Single-request client for `GET /neo/rest/v1/feed`
pub struct NasaFeedClient {
    client: Client,
    feed_url: String,
    api_key: String,
}

impl NasaFeedClient {
    pub fn new(config: &NasaConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("neo-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            feed_url: config.feed_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn feed_url(&self) -> &str {
        &self.feed_url
    }
}

#[async_trait]
impl NeoFeed for NasaFeedClient {
    async fn fetch(&self, range: &DateRange) -> Result<Vec<AsteroidRecord>, FetchError> {
        tracing::info!(
            "Fetching NEO feed {} .. {} from {}",
            range.start_date,
            range.end_date,
            self.feed_url
        );

        let response = self
            .client
            .get(&self.feed_url)
            .query(&[
                ("start_date", range.start_date.as_str()),
                ("end_date", range.end_date.as_str()),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let feed: FeedResponse = serde_json::from_str(&body)?;
        if let Some(count) = feed.element_count {
            tracing::debug!("Feed reports {} elements", count);
        }

        let records = flatten_feed(feed);
        tracing::info!("Normalized {} feed records", records.len());
        Ok(records)
    }
}
