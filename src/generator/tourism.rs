use super::{monthly_dates, pick, rng_from_seed};
use crate::error::Result;
use crate::models::TourismObservation;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

pub const SOURCE_MARKETS: [&str; 4] = ["France", "United Kingdom", "Germany", "South Africa"];

pub const SPEND_PER_VISITOR_RANGE: RangeInclusive<f64> = 1200.0..=1800.0;
pub const BASE_OCCUPANCY_RANGE: RangeInclusive<f64> = 0.6..=0.9;
pub const STAY_NIGHTS_RANGE: RangeInclusive<f64> = 8.0..=12.0;

/// Baseline monthly arrivals by season.
pub fn seasonal_base(month: u32) -> f64 {
    match month {
        12 | 1 | 2 | 7 | 8 => 150_000.0, // peak
        3 | 4 | 9 | 10 => 100_000.0,     // shoulder
        _ => 70_000.0,                   // off
    }
}

/// Multiplier on normal demand for the travel regime of a given month.
pub fn era_factor_range(year: i32, month: u32) -> RangeInclusive<f64> {
    match (year, month) {
        (2020, _) | (2021, 1..=6) => 0.05..=0.15, // borders closed
        (2021, _) => 0.3..=0.6,
        (2022, _) => 0.7..=0.9,
        _ => 1.0..=1.2,
    }
}

pub fn generate_tourism_series(
    start: NaiveDate,
    end: NaiveDate,
    seed: Option<u64>,
) -> Result<Vec<TourismObservation>> {
    tourism_series_with_rng(start, end, &mut rng_from_seed(seed))
}

pub fn tourism_series_with_rng<R: Rng>(
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Result<Vec<TourismObservation>> {
    let dates = monthly_dates(start, end)?;
    let mut series = Vec::with_capacity(dates.len());

    for date in dates {
        let factor = rng.gen_range(era_factor_range(date.year(), date.month()));
        let arrivals = (seasonal_base(date.month()) * factor).round() as u64;
        let receipts = arrivals as f64 * rng.gen_range(SPEND_PER_VISITOR_RANGE);

        series.push(TourismObservation {
            date,
            arrivals,
            receipts,
            avg_stay_nights: rng.gen_range(STAY_NIGHTS_RANGE),
            hotel_occupancy: rng.gen_range(BASE_OCCUPANCY_RANGE) * factor,
            source_market: pick(rng, &SOURCE_MARKETS).to_string(),
        });
    }

    debug!("Generated {} tourism observations", series.len());
    Ok(series)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
