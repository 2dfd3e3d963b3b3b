// Price change between two points, and per-row changes for a day table.
use super::stats::stats;
use shared::models::{Direction, PricePoint, PriceRow, TrendIndicator};

/// Change from `from` to `to`, absent when either side is missing.
///
/// A zero delta is reported as `Down`. When `from` is priced at exactly zero
/// the percentage is `None` instead of an infinite or NaN value.
pub fn change_indicator(from: Option<&PricePoint>, to: Option<&PricePoint>) -> Option<TrendIndicator> {
    let (from, to) = (from?, to?);
    let delta = to.price - from.price;
    let direction = if delta > 0.0 { Direction::Up } else { Direction::Down };
    let percentage = if from.price == 0.0 {
        None
    } else {
        Some((delta / from.price * 100.0).abs())
    };
    Some(TrendIndicator {
        direction,
        difference: delta.abs(),
        percentage,
    })
}

/// Table rows for one day's hourly series.
///
/// Each row carries its change against the previous row (none for the first
/// row). Every row priced at the day's min or max is flagged, and the row
/// whose timestamp equals `current` is marked current.
pub fn price_rows(series: &[PricePoint], current: Option<&PricePoint>) -> Vec<PriceRow> {
    let day_stats = stats(series);
    series
        .iter()
        .enumerate()
        .map(|(idx, point)| {
            let previous = idx.checked_sub(1).and_then(|i| series.get(i));
            PriceRow {
                point: point.clone(),
                change: change_indicator(previous, Some(point)),
                is_current: current.is_some_and(|c| c.date_time == point.date_time),
                is_min: day_stats.as_ref().is_some_and(|s| s.min.price == point.price),
                is_max: day_stats.as_ref().is_some_and(|s| s.max.price == point.price),
            }
        })
        .collect()
}
