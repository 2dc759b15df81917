//! Plain-text tables for the CLI host.

use crate::aggregate::{
    annual_investment, annual_macro, annual_tourism, annual_trade, investment_by_country,
    investment_by_sector, investment_by_type, largest_projects, partner_counts,
    population_share, sector_employment, sector_performance, source_market_counts,
    status_counts, InvestmentTotals,
};
use crate::models::{
    InvestmentProject, MacroObservation, Region, TourismObservation, TradeObservation,
};
use crate::sectors::{company_directory, SectorRegistry};
use crate::session::{KeyMetrics, TradeStance};
use crate::utils::{fmt_delta, fmt_number, fmt_pp_change};
use std::collections::BTreeMap;
use std::fmt::Display;

const RULE: &str = "─────────────────────────────────────────────────────────";

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(RULE.to_string());
    lines.push(format!("  {}", title));
    lines.push(RULE.to_string());
}

fn totals_table<K: Display>(
    lines: &mut Vec<String>,
    title: &str,
    rows: &BTreeMap<K, InvestmentTotals>,
) {
    lines.push(format!("  {}", title));
    for (k, t) in rows {
        lines.push(format!(
            "    {:<20} {:>9.1} M USD  {:>7} jobs  {:>4} projects",
            k.to_string(),
            t.amount_mn,
            fmt_number(t.jobs as i64),
            t.projects
        ));
    }
}

pub fn render_key_metrics(m: &KeyMetrics) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, &format!("Key indicators — as of {}", m.as_of));
    lines.push(format!(
        "  GDP growth      : {:>6.1}%   ({})",
        m.gdp_growth_pct,
        fmt_pp_change(m.gdp_growth_change)
    ));
    lines.push(format!(
        "  Inflation       : {:>6.1}%   ({})",
        m.inflation_pct,
        fmt_pp_change(m.inflation_change)
    ));
    lines.push(format!(
        "  Monthly arrivals: {:>8}  ({})",
        fmt_number(m.arrivals as i64),
        m.arrivals_change.map_or_else(|| "—".to_string(), fmt_delta)
    ));
    let stance = match m.trade_stance {
        TradeStance::Surplus => "surplus",
        TradeStance::Deficit => "deficit",
    };
    lines.push(format!("  Trade balance   : {:>6.2} bn USD ({})", m.trade_balance_bn, stance));
    lines.push(RULE.to_string());
    lines.join("\n")
}

pub fn render_sectors(registry: &SectorRegistry) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "Economic sectors");
    let employment = sector_employment(registry);
    let performance = sector_performance(registry);
    for ((s, e), (id, gdp_share, growth)) in registry.iter().zip(&employment).zip(&performance) {
        lines.push(format!(
            "  {:<20} GDP {:>5.1}%  growth {:>+5.1}%  jobs {:>7} ({:>4.1}%)  outlook: {}",
            id.as_str(),
            gdp_share,
            growth,
            fmt_number(e.employment as i64),
            e.share_pct,
            s.outlook
        ));
    }
    lines.push(format!("  Total employment: {}", fmt_number(registry.total_employment() as i64)));
    lines.push(String::new());
    lines.push("  Key companies".to_string());
    for c in company_directory(registry) {
        lines.push(format!("    {:<20} {}", c.company, c.sector));
    }
    lines.join("\n")
}

/// Every section is computed over `projects`, so a sector filter applies throughout.
pub fn render_investments<'a, I>(projects: I, top: usize) -> String
where
    I: IntoIterator<Item = &'a InvestmentProject> + Clone,
{
    let mut lines = Vec::new();
    heading(&mut lines, "Investment projects");
    totals_table(&mut lines, "By type", &investment_by_type(projects.clone()));
    totals_table(&mut lines, "By origin country", &investment_by_country(projects.clone()));
    totals_table(&mut lines, "By sector", &investment_by_sector(projects.clone()));

    lines.push("  By approval year".to_string());
    for (year, amount) in annual_investment(projects.clone()) {
        lines.push(format!("    {}  {:>9.1} M USD", year, amount));
    }

    lines.push("  By status".to_string());
    for (status, n) in status_counts(projects.clone()) {
        lines.push(format!("    {:<12} {:>4}", status.label(), n));
    }

    lines.push(format!("  Top {} projects", top));
    for p in largest_projects(projects, top) {
        lines.push(format!(
            "    #{:<4} {:<14} {:>6.1} M USD  {:<15} {:<20} {}",
            p.id,
            p.kind.label(),
            p.amount_mn,
            p.origin_country,
            p.sector.as_str(),
            p.approved_on
        ));
    }
    lines.join("\n")
}

pub fn render_macro(series: &[MacroObservation]) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "Macro indicators (annual averages)");
    lines.push("  Year  Months  GDP (bn, last)  Growth %  Inflation %  Unemployment %".to_string());
    for (year, m) in annual_macro(series) {
        lines.push(format!(
            "  {}  {:>6}  {:>14.2}  {:>8.2}  {:>11.2}  {:>14.2}",
            year, m.months, m.gdp_bn, m.gdp_growth_pct, m.inflation_pct, m.unemployment_pct
        ));
    }
    lines.join("\n")
}

pub fn render_tourism(series: &[TourismObservation]) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "Tourism");
    for (year, t) in annual_tourism(series) {
        lines.push(format!(
            "  {}  arrivals {:>10}  receipts {:>8.1} M USD",
            year,
            fmt_number(t.arrivals as i64),
            t.receipts / 1_000_000.0
        ));
    }
    lines.push("  Leading source market (months)".to_string());
    for (market, n) in source_market_counts(series) {
        lines.push(format!("    {:<16} {:>4}", market, n));
    }
    lines.join("\n")
}

pub fn render_trade(series: &[TradeObservation]) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "Foreign trade (bn USD)");
    for (year, t) in annual_trade(series) {
        lines.push(format!(
            "  {}  exports {:>6.2}  imports {:>6.2}  balance {:>+6.2}",
            year, t.exports_bn, t.imports_bn, t.balance_bn
        ));
    }
    lines.push("  Leading partner (months)".to_string());
    for (partner, n) in partner_counts(series) {
        lines.push(format!("    {:<16} {:>4}", partner, n));
    }
    lines.join("\n")
}

pub fn render_regions(regions: &[Region]) -> String {
    let mut lines = Vec::new();
    heading(&mut lines, "Regions");
    let shares = population_share(regions);
    for r in regions {
        lines.push(format!(
            "  {:<16} pop {:>8} ({:>4.1}%)  GDP {:>4.1} bn  unemployment {:>4.1}%  recent inv. {:>6.0} M",
            r.name,
            fmt_number(r.population as i64),
            shares.get(&r.name).copied().unwrap_or(0.0),
            r.gdp_bn,
            r.unemployment_pct,
            r.recent_investment_mn
        ));
    }
    lines.join("\n")
}

// ── Tests ─────────────────────────────────────────────────────────────────────
