//! Dashboard session: owns the generated series for one viewer.
//!
//! ## Lifecycle
//!
//! `generate()`: run once per session:
//!   1. Build the sector registry
//!   2. Generate macro, tourism and trade series over `[start, end]`
//!   3. Generate the investment project set
//!   All four draw from one `StdRng`, so a seeded session is reproducible.
//!
//! `refresh(now)`: run on every refresh cycle. Only the macro series is
//! extended (live-update step); tourism, trade and projects stay as generated.
//! Derived views are recomputed on demand through `crate::aggregate`.

use crate::error::Result;
use crate::generator::{
    investment_projects_with_rng, macro_series_with_rng, rng_from_seed, tourism_series_with_rng,
    trade_series_with_rng, InvestmentWindow, DEFAULT_PROJECT_COUNT,
};
use crate::live::{apply_live_update_with_rng, LiveUpdate, DEFAULT_THRESHOLD_DAYS};
use crate::models::{
    InvestmentProject, MacroObservation, Sector, TourismObservation, TradeObservation,
};
use crate::sectors::{get_sectors, SectorRegistry};
use chrono::{NaiveDate, NaiveDateTime};
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::info;

/// Everything needed to build a session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSettings {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub seed: Option<u64>,
    pub project_count: usize,
    pub project_window: InvestmentWindow,
    pub live_threshold_days: i64,
}

impl SessionSettings {
    /// Defaults for a history running from 2014-01-01 to `end`.
    pub fn until(end: NaiveDate) -> Self {
        let project_window = InvestmentWindow::default();
        Self {
            start: project_window.start,
            end,
            seed: None,
            project_count: DEFAULT_PROJECT_COUNT,
            project_window,
            live_threshold_days: DEFAULT_THRESHOLD_DAYS,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

pub struct DashboardSession {
    settings: SessionSettings,
    rng: StdRng,
    sectors: SectorRegistry,
    macro_series: Vec<MacroObservation>,
    tourism: Vec<TourismObservation>,
    trade: Vec<TradeObservation>,
    projects: Vec<InvestmentProject>,
    live_appends: usize,
}

impl DashboardSession {
    pub fn generate(settings: SessionSettings) -> Result<Self> {
        let mut rng = rng_from_seed(settings.seed);
        let sectors = get_sectors();

        let macro_series = macro_series_with_rng(settings.start, settings.end, &mut rng)?;
        let tourism = tourism_series_with_rng(settings.start, settings.end, &mut rng)?;
        let trade = trade_series_with_rng(settings.start, settings.end, &mut rng)?;
        let projects = investment_projects_with_rng(
            settings.project_count,
            settings.project_window,
            &mut rng,
        )?;

        info!(
            "Session generated: {} months ({} → {}), {} projects, seed={:?}",
            macro_series.len(),
            settings.start,
            settings.end,
            projects.len(),
            settings.seed,
        );

        Ok(Self {
            settings,
            rng,
            sectors,
            macro_series,
            tourism,
            trade,
            projects,
            live_appends: 0,
        })
    }

    /// One refresh cycle: the live-update step and nothing else.
    pub fn refresh(&mut self, now: NaiveDateTime) -> Result<LiveUpdate> {
        let outcome = apply_live_update_with_rng(
            &mut self.macro_series,
            now,
            self.settings.live_threshold_days,
            &mut self.rng,
        )?;
        if outcome.appended() {
            self.live_appends += 1;
        }
        Ok(outcome)
    }

    // ── Read-only queries ─────────────────────────────────────────────────────

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn sectors(&self) -> &SectorRegistry {
        &self.sectors
    }

    pub fn macro_series(&self) -> &[MacroObservation] {
        &self.macro_series
    }

    pub fn tourism(&self) -> &[TourismObservation] {
        &self.tourism
    }

    pub fn trade(&self) -> &[TradeObservation] {
        &self.trade
    }

    pub fn projects(&self) -> &[InvestmentProject] {
        &self.projects
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            macro_rows: self.macro_series.len(),
            tourism_rows: self.tourism.len(),
            trade_rows: self.trade.len(),
            projects: self.projects.len(),
            live_appends: self.live_appends,
        }
    }

    /// Headline figures with the change since the previous observation.
    pub fn key_metrics(&self) -> Option<KeyMetrics> {
        let (macro_now, macro_prev) = last_two(&self.macro_series)?;
        let (tour_now, tour_prev) = last_two(&self.tourism)?;
        let (trade_now, _) = last_two(&self.trade)?;

        Some(KeyMetrics {
            as_of: macro_now.date,
            gdp_growth_pct: macro_now.gdp_growth_pct,
            gdp_growth_change: macro_prev.map(|p| macro_now.gdp_growth_pct - p.gdp_growth_pct),
            inflation_pct: macro_now.inflation_pct,
            inflation_change: macro_prev.map(|p| macro_now.inflation_pct - p.inflation_pct),
            arrivals: tour_now.arrivals,
            arrivals_change: tour_prev.map(|p| tour_now.arrivals as i64 - p.arrivals as i64),
            trade_balance_bn: trade_now.balance_bn,
            trade_stance: TradeStance::from_balance(trade_now.balance_bn),
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            sectors: self.sectors.iter().collect(),
            macro_series: &self.macro_series,
            tourism: &self.tourism,
            trade: &self.trade,
            projects: &self.projects,
        }
    }
}

fn last_two<T>(series: &[T]) -> Option<(&T, Option<&T>)> {
    let (last, rest) = series.split_last()?;
    Some((last, rest.last()))
}

// ── Derived views ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TradeStance {
    Surplus,
    Deficit,
}

impl TradeStance {
    pub fn from_balance(balance: f64) -> Self {
        if balance > 0.0 {
            TradeStance::Surplus
        } else {
            TradeStance::Deficit
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeyMetrics {
    pub as_of: NaiveDate,
    pub gdp_growth_pct: f64,
    pub gdp_growth_change: Option<f64>,
    pub inflation_pct: f64,
    pub inflation_change: Option<f64>,
    pub arrivals: u64,
    pub arrivals_change: Option<i64>,
    pub trade_balance_bn: f64,
    pub trade_stance: TradeStance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub macro_rows: usize,
    pub tourism_rows: usize,
    pub trade_rows: usize,
    pub projects: usize,
    pub live_appends: usize,
}

#[derive(Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub sectors: Vec<&'a Sector>,
    pub macro_series: &'a [MacroObservation],
    pub tourism: &'a [TourismObservation],
    pub trade: &'a [TradeObservation],
    pub projects: &'a [InvestmentProject],
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn settings() -> SessionSettings {
        SessionSettings::until(d(2024, 6, 1)).with_seed(2024)
    }

    #[test]
    fn test_generate_sizes() {
        let session = DashboardSession::generate(settings()).unwrap();
        let stats = session.stats();
        assert_eq!(stats.macro_rows, 126);
        assert_eq!(stats.tourism_rows, 126);
        assert_eq!(stats.trade_rows, 126);
        assert_eq!(stats.projects, 200);
        assert_eq!(stats.live_appends, 0);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let a = DashboardSession::generate(settings()).unwrap();
        let b = DashboardSession::generate(settings()).unwrap();
        assert_eq!(a.macro_series(), b.macro_series());
        assert_eq!(a.tourism(), b.tourism());
        assert_eq!(a.trade(), b.trade());
        assert_eq!(a.projects(), b.projects());
    }

    #[test]
    fn test_refresh_only_touches_macro_series() {
        let mut session = DashboardSession::generate(settings()).unwrap();
        let tourism = session.tourism().to_vec();
        let trade = session.trade().to_vec();
        let projects = session.projects().to_vec();

        let now = d(2024, 8, 1).and_hms_opt(9, 0, 0).unwrap();
        assert!(session.refresh(now).unwrap().appended());
        assert!(!session.refresh(now).unwrap().appended());

        assert_eq!(session.stats().macro_rows, 127);
        assert_eq!(session.stats().live_appends, 1);
        assert_eq!(session.tourism(), tourism.as_slice());
        assert_eq!(session.trade(), trade.as_slice());
        assert_eq!(session.projects(), projects.as_slice());
    }

    #[test]
    fn test_key_metrics() {
        let session = DashboardSession::generate(settings()).unwrap();
        let m = session.key_metrics().unwrap();
        let last = session.macro_series().last().unwrap();
        let prev = &session.macro_series()[session.macro_series().len() - 2];
        assert_eq!(m.as_of, d(2024, 6, 1));
        assert_eq!(m.gdp_growth_change, Some(last.gdp_growth_pct - prev.gdp_growth_pct));
        assert_eq!(
            m.trade_stance,
            TradeStance::from_balance(session.trade().last().unwrap().balance_bn)
        );
    }

    #[test]
    fn test_single_month_has_no_deltas() {
        let mut s = SessionSettings::until(d(2014, 1, 1));
        s.seed = Some(1);
        let session = DashboardSession::generate(s).unwrap();
        let m = session.key_metrics().unwrap();
        assert_eq!(m.gdp_growth_change, None);
        assert_eq!(m.arrivals_change, None);
    }

    #[test]
    fn test_invalid_settings_surface_errors() {
        let mut s = settings();
        s.project_count = 0;
        assert!(DashboardSession::generate(s).is_err());

        let mut s = settings();
        s.end = d(2013, 1, 1);
        assert!(DashboardSession::generate(s).is_err());
    }

    #[test]
    fn test_trade_stance() {
        assert_eq!(TradeStance::from_balance(0.1), TradeStance::Surplus);
        assert_eq!(TradeStance::from_balance(0.0), TradeStance::Deficit);
        assert_eq!(TradeStance::from_balance(-0.2), TradeStance::Deficit);
    }

    #[test]
    fn test_snapshot_serializes() {
        let session = DashboardSession::generate(settings()).unwrap();
        let json = serde_json::to_value(session.snapshot()).unwrap();
        assert_eq!(json["sectors"].as_array().unwrap().len(), 8);
        assert_eq!(json["projects"].as_array().unwrap().len(), 200);
    }
}
