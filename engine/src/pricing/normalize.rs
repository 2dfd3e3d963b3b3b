// Raw feed record -> canonical price point
use shared::models::{PricePoint, RawPricePoint};

pub fn normalize(raw: &RawPricePoint) -> PricePoint {
    PricePoint {
        date_time: raw.date_time,
        price: raw.price,
    }
}

pub fn normalize_all(raw: &[RawPricePoint]) -> Vec<PricePoint> {
    raw.iter().map(normalize).collect()
}
