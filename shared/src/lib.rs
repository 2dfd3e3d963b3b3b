pub mod models;
pub mod utils;

pub use models::{
    DailyPrices, Direction, PricePoint, PriceRow, PriceStats, PriceUnit, RawPricePoint, TrendIndicator,
};
