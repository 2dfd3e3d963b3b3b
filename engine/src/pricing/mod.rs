// Price derivations over the day-ahead feed
pub mod hourly;
pub mod locator;
pub mod normalize;
pub mod stats;
pub mod trend;

pub use hourly::to_hourly;
pub use locator::{current_price, minutes_until_next_hour, next_price};
pub use normalize::{normalize, normalize_all};
pub use stats::stats;
pub use trend::{change_indicator, price_rows};
