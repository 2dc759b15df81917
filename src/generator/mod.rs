//! Synthetic series generators.
//!
//! Every generator comes in two flavours:
//!   * `generate_*(…, seed)`: builds its own `StdRng` (seeded or from entropy)
//!   * `*_with_rng(…, &mut rng)`: draws from a caller-owned RNG, which is how
//!     `DashboardSession` keeps a whole session reproducible from one seed.

pub mod investment;
pub mod macro_series;
pub mod tourism;
pub mod trade;

pub use investment::{
    generate_investment_projects, investment_projects_with_rng, InvestmentWindow,
    DEFAULT_PROJECT_COUNT,
};
pub use macro_series::{generate_macro_series, macro_series_with_rng};
pub use tourism::{generate_tourism_series, tourism_series_with_rng};
pub use trade::{generate_trade_series, trade_series_with_rng};

use crate::error::{GeneratorError, Result};
use chrono::{Months, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG when a seed is given, OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

// ── Calendar ──────────────────────────────────────────────────────────────────

/// One date per month from `start` to `end` inclusive.
///
/// Each date is `start + i months` (clamped to month end), so a Jan 31 start
/// yields Feb 28/29, Mar 31, … and the sequence stays strictly increasing.
pub fn monthly_dates(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
    if end < start {
        return Err(GeneratorError::InvalidRange { start, end });
    }

    let mut dates = Vec::new();
    for i in 0u32.. {
        match start.checked_add_months(Months::new(i)) {
            Some(d) if d <= end => dates.push(d),
            _ => break,
        }
    }
    Ok(dates)
}

/// Number of observations a monthly generator produces for `[start, end]`.
pub fn month_count(start: NaiveDate, end: NaiveDate) -> Result<usize> {
    monthly_dates(start, end).map(|d| d.len())
}

// ── Sampling helpers ──────────────────────────────────────────────────────────

/// Uniform pick from a fixed, non-empty list.
pub(crate) fn pick<'a, R: Rng, const N: usize>(rng: &mut R, items: &[&'a str; N]) -> &'a str {
    items[rng.gen_range(0..N)]
}

/// Weighted pick; weights need not sum to one.
pub(crate) fn weighted_pick<T: Copy, R: Rng, const N: usize>(
    rng: &mut R,
    table: &[(T, f64); N],
) -> T {
    let total: f64 = table.iter().map(|(_, w)| w).sum();
    let mut roll = rng.gen_range(0.0..total);
    for (item, weight) in table {
        if roll < *weight {
            return *item;
        }
        roll -= weight;
    }
    table[N - 1].0
}

// ── Tests ─────────────────────────────────────────────────────────────────────
