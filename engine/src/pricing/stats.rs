// Daily min / max. Ties go to the earliest point.
use shared::models::{PricePoint, PriceStats};

pub fn stats(series: &[PricePoint]) -> Option<PriceStats> {
    let first = series.first()?;
    let (min, max) = series.iter().skip(1).fold((first, first), |(min, max), p| {
        let min = if p.price < min.price { p } else { min };
        let max = if p.price > max.price { p } else { max };
        (min, max)
    });
    Some(PriceStats { min: min.clone(), max: max.clone() })
}
