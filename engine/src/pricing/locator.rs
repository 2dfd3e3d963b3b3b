// Current / next hour lookups.
//
// Matching is on hour-of-day only; the caller decides which day's series to
// search. `now` is read once per call.
use chrono::Timelike;
use shared::models::PricePoint;

fn find_hour(series: &[PricePoint], hour: u32) -> Option<&PricePoint> {
    series.iter().find(|p| p.date_time.hour() == hour)
}

pub fn current_price(series: &[PricePoint], now: impl Timelike) -> Option<&PricePoint> {
    find_hour(series, now.hour())
}

/// Point for the hour after `now`.
///
/// At 23:00 the next price belongs to tomorrow: when `fallback` holds
/// tomorrow's series and is non-empty, its first point is returned and
/// `series` is not searched for 00:00.
pub fn next_price<'a>(
    series: &'a [PricePoint],
    fallback: Option<&'a [PricePoint]>,
    now: impl Timelike,
) -> Option<&'a PricePoint> {
    let hour = now.hour();
    if hour == 23 {
        if let Some(first) = fallback.and_then(|f| f.first()) {
            return Some(first);
        }
    }
    find_hour(series, (hour + 1) % 24)
}

/// Whole minutes left until the price changes, 1..=60.
pub fn minutes_until_next_hour(now: impl Timelike) -> u32 {
    60 - now.minute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use shared::models::feed_datetime;

    fn point(ts: &str, price: f64) -> PricePoint {
        PricePoint { date_time: feed_datetime::parse(ts).unwrap(), price }
    }

    fn day(date: &str, offset: f64) -> Vec<PricePoint> {
        (0..24)
            .map(|h| point(&format!("{}T{:02}:00:00", date, h), offset + h as f64))
            .collect()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap().and_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_current_price_empty_series() {
        assert!(current_price(&[], at(12, 0)).is_none());
    }

    #[test]
    fn test_current_price_matches_hour_only() {
        let today = day("2024-03-10", 100.0);
        for h in 0..24 {
            let found = current_price(&today, at(h, 37)).unwrap();
            assert_eq!(found.date_time.hour(), h);
            assert_eq!(found.price, 100.0 + h as f64);
            assert_eq!(today.iter().filter(|p| p.date_time.hour() == h).count(), 1);
        }
    }

    #[test]
    fn test_current_price_missing_hour() {
        let partial = vec![point("2024-03-10T00:00:00", 1.0), point("2024-03-10T01:00:00", 2.0)];
        assert!(current_price(&partial, at(5, 0)).is_none());
    }

    #[test]
    fn test_next_price_same_day() {
        let today = day("2024-03-10", 0.0);
        let tomorrow = day("2024-03-11", 50.0);
        let next = next_price(&today, Some(tomorrow.as_slice()), at(14, 59)).unwrap();
        assert_eq!(next.date_time, at(15, 0));
    }

    #[test]
    fn test_next_price_rolls_over_to_tomorrow() {
        let today = day("2024-03-10", 0.0);
        let tomorrow = day("2024-03-11", 50.0);
        let next = next_price(&today, Some(tomorrow.as_slice()), at(23, 10)).unwrap();
        assert_eq!(next, &tomorrow[0]);
        assert_ne!(next, &today[0]);
    }

    #[test]
    fn test_next_price_at_23_without_tomorrow_uses_series() {
        let today = day("2024-03-10", 0.0);
        assert_eq!(next_price(&today, None, at(23, 0)), Some(&today[0]));
        assert_eq!(next_price(&today, Some(&[][..]), at(23, 0)), Some(&today[0]));
    }

    #[test]
    fn test_next_price_empty() {
        assert!(next_price(&[], None, at(10, 0)).is_none());
    }

    #[test]
    fn test_minutes_until_next_hour() {
        assert_eq!(minutes_until_next_hour(at(10, 0)), 60);
        assert_eq!(minutes_until_next_hour(at(10, 59)), 1);
        assert_eq!(minutes_until_next_hour(at(10, 15)), 45);
    }
}
