use super::{monthly_dates, rng_from_seed};
use crate::error::Result;
use crate::models::MacroObservation;
use chrono::{Datelike, NaiveDate};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

/// GDP level of the first generated month, USD billions.
pub const GDP_BASE_BN: f64 = 15.0;
/// Trend growth, % per year. GDP compounds monthly at the equivalent rate.
pub const BASE_GROWTH_PCT: f64 = 3.5;

pub const INFLATION_RANGE: RangeInclusive<f64> = 2.0..=6.5;
pub const UNEMPLOYMENT_RANGE: RangeInclusive<f64> = 6.0..=9.5;
pub const EXCHANGE_RATE_RANGE: RangeInclusive<f64> = 35.0..=45.0;
pub const RESERVES_RANGE: RangeInclusive<f64> = 5.0..=8.0;
pub const PUBLIC_DEBT_RANGE: RangeInclusive<f64> = 60.0..=75.0;

/// Additive adjustment to trend growth, in percentage points.
///
/// 2020 is the recession year, 2021 a partial recovery, anything else a
/// typical year.
pub fn era_adjustment_range(year: i32) -> RangeInclusive<f64> {
    match year {
        2020 => -15.0..=-5.0,
        2021 => -2.0..=3.0,
        _ => 2.0..=8.0,
    }
}

/// GDP after `months` of compounding at the trend rate.
pub fn gdp_level(months: u32) -> f64 {
    GDP_BASE_BN * (1.0 + BASE_GROWTH_PCT / 100.0).powf(months as f64 / 12.0)
}

pub fn generate_macro_series(
    start: NaiveDate,
    end: NaiveDate,
    seed: Option<u64>,
) -> Result<Vec<MacroObservation>> {
    macro_series_with_rng(start, end, &mut rng_from_seed(seed))
}

pub fn macro_series_with_rng<R: Rng>(
    start: NaiveDate,
    end: NaiveDate,
    rng: &mut R,
) -> Result<Vec<MacroObservation>> {
    let dates = monthly_dates(start, end)?;

    let series: Vec<MacroObservation> = dates
        .into_iter()
        .zip(0u32..)
        .map(|(date, i)| MacroObservation {
            date,
            gdp_bn: gdp_level(i),
            gdp_growth_pct: BASE_GROWTH_PCT + rng.gen_range(era_adjustment_range(date.year())),
            inflation_pct: rng.gen_range(INFLATION_RANGE),
            unemployment_pct: rng.gen_range(UNEMPLOYMENT_RANGE),
            exchange_rate: rng.gen_range(EXCHANGE_RATE_RANGE),
            reserves_bn: rng.gen_range(RESERVES_RANGE),
            public_debt_pct: rng.gen_range(PUBLIC_DEBT_RANGE),
        })
        .collect();

    debug!("Generated {} macro observations ({} → {})", series.len(), start, end);
    Ok(series)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::month_count;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_length_matches_month_count() {
        for (start, end) in [
            (d(2014, 1, 1), d(2024, 6, 1)),
            (d(2020, 2, 15), d(2020, 2, 20)),
            (d(2019, 11, 30), d(2021, 3, 1)),
        ] {
            let series = generate_macro_series(start, end, Some(3)).unwrap();
            assert_eq!(series.len(), month_count(start, end).unwrap());
        }
    }

    #[test]
    fn test_fields_within_bounds() {
        let series = generate_macro_series(d(2014, 1, 1), d(2025, 12, 1), Some(11)).unwrap();
        for obs in &series {
            assert!(INFLATION_RANGE.contains(&obs.inflation_pct));
            assert!(UNEMPLOYMENT_RANGE.contains(&obs.unemployment_pct));
            assert!(EXCHANGE_RATE_RANGE.contains(&obs.exchange_rate));
            assert!(RESERVES_RANGE.contains(&obs.reserves_bn));
            assert!(PUBLIC_DEBT_RANGE.contains(&obs.public_debt_pct));

            let adj = obs.gdp_growth_pct - BASE_GROWTH_PCT;
            let range = era_adjustment_range(obs.date.year());
            assert!(
                adj >= range.start() - 1e-9 && adj <= range.end() + 1e-9,
                "{}: adjustment {adj} outside {range:?}",
                obs.date
            );
        }
    }

    #[test]
    fn test_recession_year_is_negative() {
        let series = generate_macro_series(d(2020, 1, 1), d(2020, 12, 1), Some(5)).unwrap();
        assert!(series.iter().all(|o| o.gdp_growth_pct < 0.0));
    }

    #[test]
    fn test_gdp_compounds_and_dates_increase() {
        let series = generate_macro_series(d(2014, 1, 1), d(2016, 1, 1), Some(8)).unwrap();
        assert_eq!(series[0].gdp_bn, GDP_BASE_BN);
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
        assert!(series.windows(2).all(|w| w[0].gdp_bn < w[1].gdp_bn));
        let after_year = series[12].gdp_bn;
        assert!((after_year - GDP_BASE_BN * 1.035).abs() < 1e-9);
    }

    #[test]
    fn test_seeded_output_is_reproducible() {
        let a = generate_macro_series(d(2018, 1, 1), d(2022, 1, 1), Some(42)).unwrap();
        let b = generate_macro_series(d(2018, 1, 1), d(2022, 1, 1), Some(42)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_range() {
        assert!(generate_macro_series(d(2022, 1, 1), d(2021, 1, 1), None).is_err());
    }
}
