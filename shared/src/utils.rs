// Display helpers shared by the engine report and any other front end.
use crate::models::{PriceUnit, TrendIndicator};
use chrono::NaiveDateTime;

/// Rescales a EUR/MWh price into the requested unit.
pub fn convert_price(price: f64, unit: PriceUnit) -> f64 {
    match unit {
        PriceUnit::MWh => price,
        PriceUnit::KWh => price / 1000.0,
    }
}

/// kWh prices are sub-cent, so they get four decimals instead of two.
pub fn format_price(price: f64, unit: PriceUnit) -> String {
    let converted = convert_price(price, unit);
    match unit {
        PriceUnit::MWh => format!("€{:.2}", converted),
        PriceUnit::KWh => format!("€{:.4}", converted),
    }
}

pub fn format_time(date_time: &NaiveDateTime) -> String {
    date_time.format("%H:%M").to_string()
}

pub fn format_percentage(percentage: Option<f64>) -> String {
    match percentage {
        Some(p) => format!("{:.1}%", p),
        None => "n/a".to_string(),
    }
}

// e.g. "▲ 40.0%"
pub fn format_trend(trend: &TrendIndicator) -> String {
    format!("{} {}", trend.direction.arrow(), format_percentage(trend.percentage))
}
