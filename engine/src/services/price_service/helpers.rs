// Helper functions shared by the price_service operations
use crate::pricing::{normalize_all, to_hourly};
use shared::models::{PricePoint, RawPricePoint};

/// Raw feed day -> hourly series.
pub fn hourly_series(raw: &[RawPricePoint]) -> Vec<PricePoint> {
    to_hourly(&normalize_all(raw))
}

pub fn day_title(label: &str, date: chrono::NaiveDate) -> String {
    format!("{} ({})", label, date.format("%a %d %b %Y"))
}
