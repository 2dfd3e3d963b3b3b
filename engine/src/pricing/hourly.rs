// Collapses 15-minute feed intervals into one point per hour.
//
// The first point seen for an hour is kept and later quarter-hours are
// dropped, not averaged.
use chrono::{NaiveDate, Timelike};
use shared::models::PricePoint;
use std::collections::HashSet;

fn hour_key(point: &PricePoint) -> (NaiveDate, u32) {
    (point.date_time.date(), point.date_time.hour())
}

pub fn to_hourly(points: &[PricePoint]) -> Vec<PricePoint> {
    let mut seen = HashSet::with_capacity(24);
    points
        .iter()
        .filter(|p| seen.insert(hour_key(p)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::feed_datetime;

    fn point(ts: &str, price: f64) -> PricePoint {
        PricePoint { date_time: feed_datetime::parse(ts).unwrap(), price }
    }

    #[test]
    fn test_quarter_hours_collapse_to_first() {
        let points = vec![
            point("2024-03-10T00:00:00", 10.0),
            point("2024-03-10T00:15:00", 12.0),
            point("2024-03-10T00:30:00", 9.0),
            point("2024-03-10T01:00:00", 20.0),
        ];
        let hourly = to_hourly(&points);
        assert_eq!(hourly, vec![point("2024-03-10T00:00:00", 10.0), point("2024-03-10T01:00:00", 20.0)]);
    }

    #[test]
    fn test_empty_input() {
        assert!(to_hourly(&[]).is_empty());
    }

    #[test]
    fn test_hourly_input_is_identity() {
        let points: Vec<PricePoint> = (0..24)
            .map(|h| point(&format!("2024-03-10T{:02}:00:00", h), h as f64 * 1.5))
            .collect();
        assert_eq!(to_hourly(&points), points);
    }

    #[test]
    fn test_first_seen_wins_even_out_of_order() {
        // A later-minute record arriving first is still the one kept.
        let points = vec![
            point("2024-03-10T05:30:00", 7.0),
            point("2024-03-10T04:00:00", 3.0),
            point("2024-03-10T05:00:00", 8.0),
        ];
        let hourly = to_hourly(&points);
        assert_eq!(hourly, vec![point("2024-03-10T05:30:00", 7.0), point("2024-03-10T04:00:00", 3.0)]);
    }

    #[test]
    fn test_same_hour_on_different_days_is_distinct() {
        let points = vec![point("2024-03-10T23:00:00", 1.0), point("2024-03-11T23:00:00", 2.0)];
        assert_eq!(to_hourly(&points).len(), 2);
    }

    #[test]
    fn test_full_day_of_quarter_hours() {
        let points: Vec<PricePoint> = (0..96)
            .map(|i| point(&format!("2024-03-10T{:02}:{:02}:00", i / 4, (i % 4) * 15), i as f64))
            .collect();
        let hourly = to_hourly(&points);
        assert_eq!(hourly.len(), 24);
        for (h, p) in hourly.iter().enumerate() {
            assert_eq!(p.date_time.hour() as usize, h);
            assert_eq!(p.date_time.minute(), 0);
            assert_eq!(p.price, (h * 4) as f64);
        }
    }
}
