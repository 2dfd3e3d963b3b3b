use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One record of the day-ahead feed, one per 15-minute interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPricePoint {
    #[serde(with = "feed_datetime")]
    pub date_time: NaiveDateTime,
    /// EUR per MWh.
    pub price: f64,
    pub is_visible: bool,
}

/// Canonical price point used by every derivation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    #[serde(with = "feed_datetime")]
    pub date_time: NaiveDateTime,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Up => "▲",
            Direction::Down => "▼",
        }
    }

    pub fn verb(self) -> &'static str {
        match self {
            Direction::Up => "increases",
            Direction::Down => "decreases",
        }
    }
}

/// Change between two price points.
///
/// `percentage` is `None` when the reference price is zero, since the
/// relative change is undefined there. `direction` and `difference` are
/// always available.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendIndicator {
    pub direction: Direction,
    pub difference: f64,
    pub percentage: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    pub min: PricePoint,
    pub max: PricePoint,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum PriceUnit {
    #[default]
    #[serde(rename = "MWh", alias = "mwh")]
    MWh,
    #[serde(rename = "kWh", alias = "kwh")]
    KWh,
}

impl PriceUnit {
    pub fn label(self) -> &'static str {
        match self {
            PriceUnit::MWh => "€/MWh",
            PriceUnit::KWh => "€/kWh",
        }
    }
}

impl fmt::Display for PriceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriceUnit::MWh => write!(f, "MWh"),
            PriceUnit::KWh => write!(f, "kWh"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown price unit '{0}', expected MWh or kWh")]
pub struct ParseUnitError(pub String);

impl FromStr for PriceUnit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mwh" => Ok(PriceUnit::MWh),
            "kwh" => Ok(PriceUnit::KWh),
            _ => Err(ParseUnitError(s.to_string())),
        }
    }
}

/// One row of a day table: the point, its change versus the previous row
/// and the highlight flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub point: PricePoint,
    pub change: Option<TrendIndicator>,
    pub is_current: bool,
    pub is_min: bool,
    pub is_max: bool,
}

/// Hourly series for the three days shown, produced by one refresh cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPrices {
    pub today_date: NaiveDate,
    pub yesterday: Vec<PricePoint>,
    pub today: Vec<PricePoint>,
    pub tomorrow: Vec<PricePoint>,
    pub fetched_at: NaiveDateTime,
}

/// Feed timestamps are local wall-clock time. A stamp carrying an offset
/// (`+01:00`, `Z`) is converted to the local zone first, so every hour key
/// refers to the same local day.
pub mod feed_datetime {
    use chrono::{DateTime, Local, NaiveDateTime};
    use serde::{Deserialize, Deserializer, Serializer};

    const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn parse(s: &str) -> Result<NaiveDateTime, chrono::ParseError> {
        let s = s.trim();
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(s) {
            return Ok(with_offset.with_timezone(&Local).naive_local());
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
    }

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format(OUTPUT_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Local, Timelike};

    #[test]
    fn test_raw_point_from_feed_json() {
        let json = r#"{"dateTime":"2024-03-10T13:15:00","price":87.52,"isVisible":true}"#;
        let raw: RawPricePoint = serde_json::from_str(json).unwrap();
        assert_eq!(raw.date_time.hour(), 13);
        assert_eq!(raw.date_time.minute(), 15);
        assert_eq!(raw.price, 87.52);
        assert!(raw.is_visible);
    }

    #[test]
    fn test_zoned_stamps_convert_to_local_time() {
        let brussels = feed_datetime::parse("2024-03-10T23:00:00+01:00").unwrap();
        let utc = feed_datetime::parse("2024-03-10T22:00:00Z").unwrap();
        assert_eq!(brussels, utc);

        let expected = DateTime::parse_from_rfc3339("2024-03-10T22:00:00Z")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(utc, expected);
    }

    #[test]
    fn test_naive_stamp_is_kept_as_written() {
        let dt = feed_datetime::parse("2024-03-10T05:45:00").unwrap();
        assert_eq!(dt.hour(), 5);
        assert_eq!(dt.minute(), 45);
    }

    #[test]
    fn test_missing_visibility_flag_is_rejected() {
        let json = r#"{"dateTime":"2024-03-10T13:15:00","price":87.52}"#;
        let err = serde_json::from_str::<RawPricePoint>(json).unwrap_err();
        assert!(err.to_string().contains("isVisible"));
    }

    #[test]
    fn test_invalid_datetime_is_rejected() {
        let json = r#"{"dateTime":"yesterday noon","price":1.0,"isVisible":true}"#;
        assert!(serde_json::from_str::<RawPricePoint>(json).is_err());
    }

    #[test]
    fn test_price_point_serializes_camel_case() {
        let point = PricePoint {
            date_time: feed_datetime::parse("2024-03-10T01:00:00").unwrap(),
            price: 42.0,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(json, r#"{"dateTime":"2024-03-10T01:00:00","price":42.0}"#);
    }

    #[test]
    fn test_unit_parsing() {
        assert_eq!("kWh".parse::<PriceUnit>(), Ok(PriceUnit::KWh));
        assert_eq!(" MWH ".parse::<PriceUnit>(), Ok(PriceUnit::MWh));
        assert!("GJ".parse::<PriceUnit>().is_err());
        assert_eq!(PriceUnit::default(), PriceUnit::MWh);
        let unit: PriceUnit = serde_json::from_str(r#""kWh""#).unwrap();
        assert_eq!(unit, PriceUnit::KWh);
    }
}
