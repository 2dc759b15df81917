use super::{pick, rng_from_seed, weighted_pick};
use crate::error::{GeneratorError, Result};
use crate::models::{InvestmentProject, InvestmentType, ProjectStatus};
use crate::sectors::get_sectors;
use chrono::{Days, NaiveDate};
use rand::Rng;
use std::ops::RangeInclusive;
use tracing::debug;

pub const DEFAULT_PROJECT_COUNT: usize = 200;

pub const INVESTOR_COUNTRIES: [&str; 6] =
    ["France", "China", "South Africa", "India", "United Kingdom", "USA"];

pub const AMOUNT_RANGE_MN: RangeInclusive<f64> = 1.0..=100.0;
/// Jobs created per USD million invested.
pub const JOBS_PER_MN_RANGE: RangeInclusive<f64> = 2.0..=10.0;

/// Approval dates fall in `[start, start + days]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvestmentWindow {
    pub start: NaiveDate,
    pub days: u64,
}

impl Default for InvestmentWindow {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2014, 1, 1).unwrap_or(NaiveDate::MIN),
            days: 3650,
        }
    }
}

impl InvestmentWindow {
    pub fn end(&self) -> Result<NaiveDate> {
        self.start
            .checked_add_days(Days::new(self.days))
            .ok_or(GeneratorError::InvalidWindow { start: self.start, days: self.days })
    }
}

pub fn generate_investment_projects(
    count: usize,
    seed: Option<u64>,
) -> Result<Vec<InvestmentProject>> {
    investment_projects_with_rng(count, InvestmentWindow::default(), &mut rng_from_seed(seed))
}

/// Projects come back ordered by approval date with ids `1..=count`.
pub fn investment_projects_with_rng<R: Rng>(
    count: usize,
    window: InvestmentWindow,
    rng: &mut R,
) -> Result<Vec<InvestmentProject>> {
    if count == 0 {
        return Err(GeneratorError::InvalidCount(count));
    }
    let end = window.end()?;

    let sector_ids = get_sectors().ids();
    let kinds = InvestmentType::ALL;

    let mut projects: Vec<InvestmentProject> = (0..count)
        .map(|_| {
            let approved_on = window
                .start
                .checked_add_days(Days::new(rng.gen_range(0..=window.days)))
                .unwrap_or(end);
            let kind = kinds[rng.gen_range(0..kinds.len())];
            let amount_mn = rng.gen_range(AMOUNT_RANGE_MN);
            let origin_country = pick(rng, &INVESTOR_COUNTRIES).to_string();
            let jobs_created = (amount_mn * rng.gen_range(JOBS_PER_MN_RANGE)).round() as u64;
            let sector = sector_ids[rng.gen_range(0..sector_ids.len())].clone();
            let status = weighted_pick(rng, &ProjectStatus::WEIGHTS);

            InvestmentProject {
                id: 0,
                approved_on,
                kind,
                amount_mn,
                origin_country,
                jobs_created,
                sector,
                status,
            }
        })
        .collect();

    projects.sort_by_key(|p| p.approved_on);
    for (i, p) in projects.iter_mut().enumerate() {
        p.id = i as u32 + 1;
    }

    debug!("Generated {} investment projects ({} → {})", projects.len(), window.start, end);
    Ok(projects)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
