// Day-ahead price feed access
pub mod elia;

use crate::error::EngineError;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::models::RawPricePoint;

pub use elia::EliaFeed;

/// Source of raw quarter-hour prices, addressed by calendar day.
#[async_trait]
pub trait PriceFeed: Send + Sync {
    async fn fetch_day(&self, date: NaiveDate) -> Result<Vec<RawPricePoint>, EngineError>;
}
