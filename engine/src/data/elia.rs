// HTTP client for the Elia day-ahead auction results endpoint.
use super::PriceFeed;
use crate::config::EngineSettings;
use crate::error::EngineError;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use shared::models::RawPricePoint;
use std::time::Duration;

pub struct EliaFeed {
    client: Client,
    base_url: String,
}

impl EliaFeed {
    pub fn new(settings: &EngineSettings) -> Result<Self, EngineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: settings.feed_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn day_url(&self, date: NaiveDate) -> String {
        format!("{}/{}", self.base_url, date.format("%Y-%m-%d"))
    }
}

#[async_trait]
impl PriceFeed for EliaFeed {
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<RawPricePoint>, EngineError> {
        let url = self.day_url(date);
        tracing::debug!(%date, %url, "Fetching day-ahead prices");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::error!(%date, status = status.as_u16(), "Feed returned an error status");
            return Err(EngineError::FeedStatusError { date, status: status.as_u16() });
        }

        let body = response.text().await?;
        let points = parse_feed_body(date, &body)?;
        tracing::debug!(%date, count = points.len(), "Fetched day-ahead prices");
        Ok(points)
    }
}

/// Parses a feed response body.
///
/// Valid JSON that is not an array is treated as a day without data. Any
/// record that fails to parse fails the whole day.
pub fn parse_feed_body(date: NaiveDate, body: &str) -> Result<Vec<RawPricePoint>, EngineError> {
    let value: serde_json::Value =
        serde_json::from_str(body).map_err(|source| EngineError::FeedFormatError { date, source })?;
    if !value.is_array() {
        tracing::warn!(%date, "Feed body is not a list of prices, treating the day as empty");
        return Ok(Vec::new());
    }
    serde_json::from_value(value).map_err(|source| EngineError::FeedFormatError { date, source })
}
