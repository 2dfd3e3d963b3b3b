// engine/src/services/price_service/mod.rs
// PriceService owns the feed handle; each operation lives in its own
// sibling module.
use crate::data::PriceFeed;
use crate::error::EngineError;
use chrono::{NaiveDate, NaiveDateTime};
use shared::models::DailyPrices;
use std::sync::Arc;

pub mod helpers;
pub mod refresh_prices;
pub mod render_report;
pub mod scheduler;

pub struct PriceService {
    feed: Arc<dyn PriceFeed>,
}

impl PriceService {
    pub fn new(feed: Arc<dyn PriceFeed>) -> Self {
        PriceService { feed }
    }

    /// One refresh cycle for the three days around `today`.
    pub async fn refresh(&self, today: NaiveDate, fetched_at: NaiveDateTime) -> Result<DailyPrices, EngineError> {
        tracing::info!(%today, "Refreshing day-ahead prices");
        refresh_prices::handle_refresh(self.feed.as_ref(), today, fetched_at).await
    }
}
