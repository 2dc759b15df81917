//! Pure aggregation helpers over the generated series.
//!
//! Nothing here holds state or touches an RNG: the same input always gives
//! the same output. Grouped results come back as `BTreeMap`s so iteration
//! order is stable; registry-shaped results keep registry order.

use crate::error::{GeneratorError, Result};
use crate::models::{
    InvestmentProject, InvestmentType, MacroObservation, ProjectStatus, Region, SectorId,
    TourismObservation, TradeObservation,
};
use crate::sectors::SectorRegistry;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

// ── Generic helpers ───────────────────────────────────────────────────────────

pub fn sum_by<'a, T, K, I, F, V>(items: I, key: F, value: V) -> BTreeMap<K, f64>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
    V: Fn(&T) -> f64,
{
    let mut totals = BTreeMap::new();
    for item in items {
        *totals.entry(key(item)).or_insert(0.0) += value(item);
    }
    totals
}

pub fn count_by<'a, T, K, I, F>(items: I, key: F) -> BTreeMap<K, usize>
where
    T: 'a,
    K: Ord,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> K,
{
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(item)).or_insert(0) += 1;
    }
    counts
}

/// Each value as a percentage of the grand total. A zero total yields zeros.
pub fn share_of_total<K: Ord + Clone>(totals: &BTreeMap<K, f64>) -> BTreeMap<K, f64> {
    let grand: f64 = totals.values().sum();
    totals
        .iter()
        .map(|(k, v)| {
            let share = if grand == 0.0 { 0.0 } else { v / grand * 100.0 };
            (k.clone(), share)
        })
        .collect()
}

/// The `n` items with the largest metric, descending. Ties keep input order.
pub fn top_n_by<'a, T, I, F>(items: I, n: usize, metric: F) -> Vec<&'a T>
where
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> f64,
{
    let mut ranked: Vec<&T> = items.into_iter().collect();
    ranked.sort_by(|a, b| metric(b).total_cmp(&metric(a)));
    ranked.truncate(n);
    ranked
}

/// Sum of `value` per calendar year of `date`.
pub fn sum_by_year<'a, T, I, D, V>(items: I, date: D, value: V) -> BTreeMap<i32, f64>
where
    T: 'a,
    I: IntoIterator<Item = &'a T>,
    D: Fn(&T) -> NaiveDate,
    V: Fn(&T) -> f64,
{
    sum_by(items, |t| date(t).year(), value)
}

/// Sub-slice of a date-ordered series falling inside `[from, to]`.
pub fn within_window<T, D>(series: &[T], from: NaiveDate, to: NaiveDate, date: D) -> Result<&[T]>
where
    D: Fn(&T) -> NaiveDate,
{
    if to < from {
        return Err(GeneratorError::InvalidRange { start: from, end: to });
    }
    let lo = series.partition_point(|t| date(t) < from);
    let hi = series.partition_point(|t| date(t) <= to);
    Ok(&series[lo..hi])
}

/// `within_window` with open ends: a missing bound keeps that side of the series.
pub fn within_period<T, D>(
    series: &[T],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    date: D,
) -> Result<&[T]>
where
    D: Fn(&T) -> NaiveDate,
{
    within_window(series, from.unwrap_or(NaiveDate::MIN), to.unwrap_or(NaiveDate::MAX), date)
}

// ── Macro ─────────────────────────────────────────────────────────────────────

/// Yearly means of the rate indicators plus the last GDP level seen that year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnnualMacro {
    pub months: usize,
    pub gdp_bn: f64,
    pub gdp_growth_pct: f64,
    pub inflation_pct: f64,
    pub unemployment_pct: f64,
}

pub fn annual_macro(series: &[MacroObservation]) -> BTreeMap<i32, AnnualMacro> {
    let months = count_by(series, |o| o.date.year());
    let growth = sum_by_year(series, |o| o.date, |o| o.gdp_growth_pct);
    let inflation = sum_by_year(series, |o| o.date, |o| o.inflation_pct);
    let unemployment = sum_by_year(series, |o| o.date, |o| o.unemployment_pct);
    let gdp_level: BTreeMap<i32, f64> = series.iter().map(|o| (o.date.year(), o.gdp_bn)).collect();

    months
        .into_iter()
        .map(|(year, n)| {
            let mean = |totals: &BTreeMap<i32, f64>| {
                totals.get(&year).copied().unwrap_or(0.0) / n as f64
            };
            let row = AnnualMacro {
                months: n,
                gdp_bn: gdp_level.get(&year).copied().unwrap_or(0.0),
                gdp_growth_pct: mean(&growth),
                inflation_pct: mean(&inflation),
                unemployment_pct: mean(&unemployment),
            };
            (year, row)
        })
        .collect()
}

// ── Sectors ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorEmployment {
    pub sector: SectorId,
    pub employment: u64,
    pub share_pct: f64,
}

/// Employment and share of total employment per sector, in registry order.
pub fn sector_employment(registry: &SectorRegistry) -> Vec<SectorEmployment> {
    let total = registry.total_employment();
    registry
        .iter()
        .map(|s| SectorEmployment {
            sector: s.id.clone(),
            employment: s.employment,
            share_pct: if total == 0 {
                0.0
            } else {
                s.employment as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// `(sector, gdp share %, growth %)` in registry order.
pub fn sector_performance(registry: &SectorRegistry) -> Vec<(SectorId, f64, f64)> {
    registry
        .iter()
        .map(|s| (s.id.clone(), s.gdp_share_pct, s.growth_rate_pct))
        .collect()
}

// ── Investment ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InvestmentTotals {
    pub amount_mn: f64,
    pub jobs: u64,
    pub projects: usize,
}

pub fn investment_totals_by<'a, K, I, F>(projects: I, key: F) -> BTreeMap<K, InvestmentTotals>
where
    K: Ord,
    I: IntoIterator<Item = &'a InvestmentProject>,
    F: Fn(&InvestmentProject) -> K,
{
    let mut totals: BTreeMap<K, InvestmentTotals> = BTreeMap::new();
    for p in projects {
        let entry = totals.entry(key(p)).or_default();
        entry.amount_mn += p.amount_mn;
        entry.jobs += p.jobs_created;
        entry.projects += 1;
    }
    totals
}

pub fn investment_by_type<'a, I>(projects: I) -> BTreeMap<InvestmentType, InvestmentTotals>
where
    I: IntoIterator<Item = &'a InvestmentProject>,
{
    investment_totals_by(projects, |p| p.kind)
}

pub fn investment_by_country<'a, I>(projects: I) -> BTreeMap<String, InvestmentTotals>
where
    I: IntoIterator<Item = &'a InvestmentProject>,
{
    investment_totals_by(projects, |p| p.origin_country.clone())
}

pub fn investment_by_sector<'a, I>(projects: I) -> BTreeMap<SectorId, InvestmentTotals>
where
    I: IntoIterator<Item = &'a InvestmentProject>,
{
    investment_totals_by(projects, |p| p.sector.clone())
}

pub fn annual_investment<'a, I>(projects: I) -> BTreeMap<i32, f64>
where
    I: IntoIterator<Item = &'a InvestmentProject>,
{
    sum_by_year(projects, |p| p.approved_on, |p| p.amount_mn)
}

pub fn largest_projects<'a, I>(projects: I, n: usize) -> Vec<&'a InvestmentProject>
where
    I: IntoIterator<Item = &'a InvestmentProject>,
{
    top_n_by(projects, n, |p| p.amount_mn)
}

pub fn status_counts<'a, I>(projects: I) -> BTreeMap<ProjectStatus, usize>
where
    I: IntoIterator<Item = &'a InvestmentProject>,
{
    count_by(projects, |p| p.status)
}

/// Projects whose sector is one of `selected`.
pub fn in_sectors<'a>(
    projects: &'a [InvestmentProject],
    selected: &[SectorId],
) -> Vec<&'a InvestmentProject> {
    projects.iter().filter(|p| selected.contains(&p.sector)).collect()
}

// ── Tourism & trade ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AnnualTourism {
    pub arrivals: u64,
    pub receipts: f64,
}

pub fn annual_tourism(series: &[TourismObservation]) -> BTreeMap<i32, AnnualTourism> {
    let mut years: BTreeMap<i32, AnnualTourism> = BTreeMap::new();
    for obs in series {
        let y = years.entry(obs.date.year()).or_default();
        y.arrivals += obs.arrivals;
        y.receipts += obs.receipts;
    }
    years
}

pub fn source_market_counts(series: &[TourismObservation]) -> BTreeMap<String, usize> {
    count_by(series, |o| o.source_market.clone())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AnnualTrade {
    pub exports_bn: f64,
    pub imports_bn: f64,
    pub balance_bn: f64,
}

pub fn annual_trade(series: &[TradeObservation]) -> BTreeMap<i32, AnnualTrade> {
    let mut years: BTreeMap<i32, AnnualTrade> = BTreeMap::new();
    for obs in series {
        let y = years.entry(obs.date.year()).or_default();
        y.exports_bn += obs.exports_bn;
        y.imports_bn += obs.imports_bn;
        y.balance_bn += obs.balance_bn;
    }
    years
}

pub fn partner_counts(series: &[TradeObservation]) -> BTreeMap<String, usize> {
    count_by(series, |o| o.top_partner.clone())
}

// ── Regions ───────────────────────────────────────────────────────────────────

pub fn population_share(regions: &[Region]) -> BTreeMap<String, f64> {
    share_of_total(&sum_by(regions, |r| r.name.clone(), |r| r.population as f64))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
