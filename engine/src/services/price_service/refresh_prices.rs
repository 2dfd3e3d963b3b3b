// Handler for one refresh cycle: fetch yesterday/today/tomorrow and derive
// their hourly series.
use super::helpers::hourly_series;
use crate::data::PriceFeed;
use crate::error::EngineError;
use chrono::{Days, NaiveDate, NaiveDateTime};
use shared::models::DailyPrices;

pub async fn handle_refresh(
    feed: &dyn PriceFeed,
    today: NaiveDate,
    fetched_at: NaiveDateTime,
) -> Result<DailyPrices, EngineError> {
    let yesterday = today.checked_sub_days(Days::new(1)).ok_or_else(|| {
        EngineError::ConfigError(format!("No calendar day before {}", today))
    })?;
    let tomorrow = today.checked_add_days(Days::new(1)).ok_or_else(|| {
        EngineError::ConfigError(format!("No calendar day after {}", today))
    })?;

    // The three days fail as a unit.
    let (yesterday_raw, today_raw, tomorrow_raw) = tokio::try_join!(
        feed.fetch_day(yesterday),
        feed.fetch_day(today),
        feed.fetch_day(tomorrow),
    )
    .map_err(|e| {
        tracing::error!(%today, error = %e, "Refresh failed");
        e
    })?;

    let prices = DailyPrices {
        today_date: today,
        yesterday: hourly_series(&yesterday_raw),
        today: hourly_series(&today_raw),
        tomorrow: hourly_series(&tomorrow_raw),
        fetched_at,
    };

    for (label, series) in [("yesterday", &prices.yesterday), ("today", &prices.today), ("tomorrow", &prices.tomorrow)] {
        if series.is_empty() {
            tracing::warn!(%today, day = label, "No prices published");
        }
    }
    tracing::info!(
        %today,
        yesterday = prices.yesterday.len(),
        today_hours = prices.today.len(),
        tomorrow = prices.tomorrow.len(),
        "Refresh complete"
    );
    Ok(prices)
}
