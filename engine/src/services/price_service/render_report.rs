// Plain-text report of one refresh: current / next price and a table per day.
use super::helpers::day_title;
use crate::pricing::{change_indicator, current_price, minutes_until_next_hour, next_price, price_rows, stats};
use chrono::{Days, NaiveDateTime, Timelike};
use shared::models::{DailyPrices, PricePoint, PriceUnit};
use shared::utils::{format_price, format_time, format_trend};

pub fn render_report(prices: &DailyPrices, now: NaiveDateTime, unit: PriceUnit) -> String {
    let mut lines = Vec::new();
    lines.extend(current_section(prices, now, unit));

    let today = prices.today_date;
    let current = current_price(&prices.today, now);
    // Only today's table can contain the current hour.
    let days = [
        ("Yesterday's Prices", today.checked_sub_days(Days::new(1)), prices.yesterday.as_slice(), None),
        ("Today's Prices", Some(today), prices.today.as_slice(), current),
        ("Tomorrow's Prices", today.checked_add_days(Days::new(1)), prices.tomorrow.as_slice(), None),
    ];
    for (label, date, series, current) in days {
        lines.push(String::new());
        lines.push(match date {
            Some(date) => day_title(label, date),
            None => label.to_string(),
        });
        lines.extend(day_table(series, current, unit));
    }

    lines.push(String::new());
    lines.push(format!("Prices in {} (fetched {})", unit.label(), prices.fetched_at.format("%Y-%m-%d %H:%M")));
    lines.join("\n")
}

fn current_section(prices: &DailyPrices, now: NaiveDateTime, unit: PriceUnit) -> Vec<String> {
    let current = current_price(&prices.today, now);
    // After 23:00 the next price is tomorrow's first hour. Without tomorrow's
    // data, today's 00:00 would be a stale price, so nothing is shown.
    let next = if now.hour() == 23 && prices.tomorrow.is_empty() {
        None
    } else {
        next_price(&prices.today, Some(prices.tomorrow.as_slice()), now)
    };

    let mut lines = vec![format!(
        "Current Price: {}",
        current.map_or_else(|| "N/A".to_string(), |p| format_price(p.price, unit))
    )];

    if let (Some(next), Some(trend)) = (next, change_indicator(current, next)) {
        let minutes = minutes_until_next_hour(now);
        lines.push(format!(
            "Next hour ({}): {} {}",
            format_time(&next.date_time),
            format_price(next.price, unit),
            format_trend(&trend)
        ));
        lines.push(format!(
            "Price {} in {} minute{}",
            trend.direction.verb(),
            minutes,
            if minutes == 1 { "" } else { "s" }
        ));
    }
    lines
}

fn day_table(series: &[PricePoint], current: Option<&PricePoint>, unit: PriceUnit) -> Vec<String> {
    let Some(day_stats) = stats(series) else {
        return vec!["  No data available".to_string()];
    };

    let mut lines = vec![format!("  {:<6} {:>12} {:>10}", "Time", "Price", "Change")];
    for row in price_rows(series, current) {
        let change = row.change.as_ref().map(format_trend).unwrap_or_default();
        let mut markers = Vec::new();
        if row.is_current {
            markers.push("now");
        }
        if row.is_min {
            markers.push("min");
        }
        if row.is_max {
            markers.push("max");
        }
        let line = format!(
            "  {:<6} {:>12} {:>10} {}",
            format_time(&row.point.date_time),
            format_price(row.point.price, unit),
            change,
            markers.join(" ")
        );
        lines.push(line.trim_end().to_string());
    }
    lines.push(format!(
        "  Min {} at {}, max {} at {}",
        format_price(day_stats.min.price, unit),
        format_time(&day_stats.min.date_time),
        format_price(day_stats.max.price, unit),
        format_time(&day_stats.max.date_time)
    ));
    lines
}
