use super::{monthly_dates, pick, rng_from_seed};
use crate::error::Result;
use crate::models::TradeObservation;
use chrono::NaiveDate;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

pub const EXPORT_PRODUCTS: [&str; 6] =
    ["Textile", "Sugar", "Fish", "Flowers", "Jewellery", "Pharmaceuticals"];
pub const IMPORT_PRODUCTS: [&str; 5] = ["Petroleum", "Machinery", "Vehicles", "Rice", "Chemicals"];
pub const PARTNERS: [&str; 6] = ["EU", "USA", "South Africa", "India", "China", "Madagascar"];

pub const EXPORTS_RANGE: RangeInclusive<f64> = 0.4..=0.8;
pub const IMPORTS_RANGE: RangeInclusive<f64> = 0.6..=1.0;

pub fn generate_trade_series(
    start: NaiveDate,
    end: NaiveDate,
    seed: Option<u64>,
) -> Result<Vec<TradeObservation>> {
    trade_series_with_rng(start, end, &mut rng_from_seed(seed))
}

pub fn trade_series_with_rng<R: Rng>(
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Result<Vec<TradeObservation>> {
    let dates = monthly_dates(start, end)?;
    let mut series = Vec::with_capacity(dates.len());

    for date in dates {
        let exports_bn = rng.gen_range(EXPORTS_RANGE);
        let imports_bn = rng.gen_range(IMPORTS_RANGE);

        series.push(TradeObservation {
            date,
            exports_bn,
            imports_bn,
            balance_bn: exports_bn - imports_bn,
            top_export: pick(rng, &EXPORT_PRODUCTS).to_string(),
            top_import: pick(rng, &IMPORT_PRODUCTS).to_string(),
            top_partner: pick(rng, &PARTNERS).to_string(),
        });
    }

    debug!("Generated {} trade observations", series.len());
    Ok(series)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
