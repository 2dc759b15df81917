//! Live-update step: extends the macro series by one observation once the
//! latest observation has aged past the threshold.
//!
//! The step is guarded on the date gap, not on how often it is called, so
//! calling it repeatedly at the same instant appends at most one row.

use crate::error::{GeneratorError, Result};
use crate::generator::rng_from_seed;
use crate::models::MacroObservation;
use chrono::NaiveDateTime;
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::{debug, info};

pub const DEFAULT_THRESHOLD_DAYS: i64 = 30;

/// Month-to-month drift applied to the previous growth rate, in points.
pub const GROWTH_DRIFT_RANGE: RangeInclusive<f64> = -0.1..=0.1;

// Steady-state bounds, narrower than the historical generator's.
pub const INFLATION_RANGE: RangeInclusive<f64> = 2.5..=5.5;
pub const UNEMPLOYMENT_RANGE: RangeInclusive<f64> = 6.5..=8.5;
pub const EXCHANGE_RATE_RANGE: RangeInclusive<f64> = 38.0..=42.0;
pub const RESERVES_RANGE: RangeInclusive<f64> = 6.0..=7.5;
pub const PUBLIC_DEBT_RANGE: RangeInclusive<f64> = 65.0..=72.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiveUpdate {
    Appended,
    /// The latest observation is only `days_since_last` days old.
    Skipped { days_since_last: i64 },
}

impl LiveUpdate {
    pub fn appended(&self) -> bool {
        matches!(self, LiveUpdate::Appended)
    }
}

/// Convenience entry point with the default 30-day threshold and its own RNG.
pub fn apply_live_update(
    series: &mut Vec<MacroObservation>,
    now: NaiveDateTime,
    seed: Option<u64>,
) -> Result<LiveUpdate> {
    apply_live_update_with_rng(series, now, DEFAULT_THRESHOLD_DAYS, &mut rng_from_seed(seed))
}

/// Append one observation dated `now` if `now - last.date >= threshold_days`.
///
/// The new row is stamped with `now`'s date rather than `last + threshold`,
/// which keeps the gap check false until another full threshold has elapsed.
pub fn apply_live_update_with_rng<R: Rng>(
    series: &mut Vec<MacroObservation>,
    now: NaiveDateTime,
    threshold_days: i64,
    rng: &mut R,
) -> Result<LiveUpdate> {
    let last = series.last().ok_or(GeneratorError::EmptySeries)?;
    let today = now.date();
    let days_since_last = (today - last.date).num_days();

    // A zero threshold would stamp a second row on the same date.
    if days_since_last < threshold_days.max(1) {
        debug!(
            "Live update skipped: last observation {} is {} days old",
            last.date, days_since_last
        );
        return Ok(LiveUpdate::Skipped { days_since_last });
    }

    let growth = last.gdp_growth_pct + rng.gen_range(GROWTH_DRIFT_RANGE);
    let months = days_since_last as f64 / 30.0;
    let next = MacroObservation {
        date: today,
        gdp_bn: last.gdp_bn * (1.0 + growth / 100.0).powf(months / 12.0),
        gdp_growth_pct: growth,
        inflation_pct: rng.gen_range(INFLATION_RANGE),
        unemployment_pct: rng.gen_range(UNEMPLOYMENT_RANGE),
        exchange_rate: rng.gen_range(EXCHANGE_RATE_RANGE),
        reserves_bn: rng.gen_range(RESERVES_RANGE),
        public_debt_pct: rng.gen_range(PUBLIC_DEBT_RANGE),
    };

    info!("Live update: appended {} (growth {:.2}%)", next.date, next.gdp_growth_pct);
    series.push(next);
    Ok(LiveUpdate::Appended)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_macro_series;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn at(date: NaiveDate) -> NaiveDateTime {
        date.and_hms_opt(12, 0, 0).unwrap()
    }

    fn series_ending(end: NaiveDate) -> Vec<MacroObservation> {
        generate_macro_series(d(2023, 1, 1), end, Some(1)).unwrap()
    }

    #[test]
    fn test_noop_below_threshold() {
        let mut series = series_ending(d(2024, 1, 1));
        let before = series.clone();
        let outcome = apply_live_update(&mut series, at(d(2024, 1, 30)), Some(2)).unwrap();
        assert_eq!(outcome, LiveUpdate::Skipped { days_since_last: 29 });
        assert_eq!(series, before);
    }

    #[test]
    fn test_appends_at_threshold() {
        let mut series = series_ending(d(2024, 1, 1));
        let len = series.len();
        let outcome = apply_live_update(&mut series, at(d(2024, 1, 31)), Some(2)).unwrap();
        assert!(outcome.appended());
        assert_eq!(series.len(), len + 1);
        assert_eq!(series.last().unwrap().date, d(2024, 1, 31));
    }

    #[test]
    fn test_second_call_without_time_advance_is_noop() {
        let mut series = series_ending(d(2024, 1, 1));
        let len = series.len();
        let now = at(d(2024, 9, 1));
        assert!(apply_live_update(&mut series, now, Some(3)).unwrap().appended());
        assert!(!apply_live_update(&mut series, now, Some(3)).unwrap().appended());
        assert_eq!(series.len(), len + 1);
    }

    #[test]
    fn test_new_row_drifts_from_previous_growth() {
        let mut series = series_ending(d(2024, 1, 1));
        let prev = series.last().unwrap().clone();
        apply_live_update(&mut series, at(d(2024, 2, 15)), Some(4)).unwrap();
        let new = series.last().unwrap();

        assert!((new.gdp_growth_pct - prev.gdp_growth_pct).abs() <= 0.1 + 1e-12);
        assert!(INFLATION_RANGE.contains(&new.inflation_pct));
        assert!(UNEMPLOYMENT_RANGE.contains(&new.unemployment_pct));
        assert!(EXCHANGE_RATE_RANGE.contains(&new.exchange_rate));
        assert!(RESERVES_RANGE.contains(&new.reserves_bn));
        assert!(PUBLIC_DEBT_RANGE.contains(&new.public_debt_pct));
        assert!(new.date > prev.date);
    }

    #[test]
    fn test_dates_stay_strictly_increasing_over_many_refreshes() {
        let mut series = series_ending(d(2024, 1, 1));
        let mut rng = rng_from_seed(Some(5));
        let mut now = at(d(2024, 1, 1));
        for _ in 0..120 {
            now += chrono::Duration::days(7);
            apply_live_update_with_rng(&mut series, now, DEFAULT_THRESHOLD_DAYS, &mut rng).unwrap();
        }
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_custom_threshold() {
        let mut series = series_ending(d(2024, 1, 1));
        let mut rng = rng_from_seed(Some(6));
        let outcome =
            apply_live_update_with_rng(&mut series, at(d(2024, 1, 8)), 7, &mut rng).unwrap();
        assert!(outcome.appended());
    }

    #[test]
    fn test_empty_series_is_an_error() {
        let mut series = Vec::new();
        let err = apply_live_update(&mut series, at(d(2024, 1, 1)), None).unwrap_err();
        assert_eq!(err, GeneratorError::EmptySeries);
        assert!(series.is_empty());
    }
}
