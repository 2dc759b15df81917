use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

// ── Sector ────────────────────────────────────────────────────────────────────

/// Registry key of an economic sector, e.g. `"Tourism"`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectorId(pub String);

impl SectorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SectorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sector {
    pub id: SectorId,
    pub display_name: String,
    pub gdp_share_pct: f64,
    pub growth_rate_pct: f64,
    pub employment: u64,
    pub color: String,  // hex, "#EA2839"
    pub description: String,
    pub key_companies: Vec<String>,
    pub outlook: String,
}

// ── Region ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Region {
    pub name: String,
    pub population: u64,
    pub gdp_bn: f64,
    pub unemployment_pct: f64,
    pub recent_investment_mn: f64,
}

// ── Macro indicators ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroObservation {
    pub date: NaiveDate,
    pub gdp_bn: f64,
    pub gdp_growth_pct: f64,
    pub inflation_pct: f64,
    pub unemployment_pct: f64,
    pub exchange_rate: f64,       // local currency per USD
    pub reserves_bn: f64,
    pub public_debt_pct: f64,     // % of GDP
}

// ── Tourism ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TourismObservation {
    pub date: NaiveDate,
    pub arrivals: u64,
    pub receipts: f64,
    pub avg_stay_nights: f64,
    pub hotel_occupancy: f64,     // 0.0 ..= 1.0
    pub source_market: String,
}

// ── Foreign trade ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeObservation {
    pub date: NaiveDate,
    pub exports_bn: f64,
    pub imports_bn: f64,
    /// Always `exports_bn - imports_bn`.
    pub balance_bn: f64,
    pub top_export: String,
    pub top_import: String,
    pub top_partner: String,
}

// ── Investment projects ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum InvestmentType {
    #[serde(rename = "IRS")]
    Irs,
    #[serde(rename = "REIS")]
    Reis,
    #[serde(rename = "PDS")]
    Pds,
    Fintech,
    Manufacturing,
    Tourism,
    RealEstate,
}

impl InvestmentType {
    pub const ALL: [InvestmentType; 7] = [
        InvestmentType::Irs,
        InvestmentType::Reis,
        InvestmentType::Pds,
        InvestmentType::Fintech,
        InvestmentType::Manufacturing,
        InvestmentType::Tourism,
        InvestmentType::RealEstate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            InvestmentType::Irs => "IRS",
            InvestmentType::Reis => "REIS",
            InvestmentType::Pds => "PDS",
            InvestmentType::Fintech => "Fintech",
            InvestmentType::Manufacturing => "Manufacturing",
            InvestmentType::Tourism => "Tourism",
            InvestmentType::RealEstate => "Real Estate",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Approved,
    #[serde(rename = "In-Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    /// Sampling weights: Approved 30%, In-Progress 50%, Completed 20%.
    pub const WEIGHTS: [(ProjectStatus, f64); 3] = [
        (ProjectStatus::Approved, 0.3),
        (ProjectStatus::InProgress, 0.5),
        (ProjectStatus::Completed, 0.2),
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Approved => "Approved",
            ProjectStatus::InProgress => "In-Progress",
            ProjectStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentProject {
    pub id: u32,
    pub approved_on: NaiveDate,
    pub kind: InvestmentType,
    pub amount_mn: f64,           // USD millions
    pub origin_country: String,
    pub jobs_created: u64,
    pub sector: SectorId,
    pub status: ProjectStatus,
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_weights_sum_to_one() {
        let total: f64 = ProjectStatus::WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_labels_serialize_as_display() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::InProgress).unwrap(),
            "\"In-Progress\""
        );
        assert_eq!(serde_json::to_string(&InvestmentType::Irs).unwrap(), "\"IRS\"");
        assert_eq!(InvestmentType::RealEstate.to_string(), "Real Estate");
    }

    #[test]
    fn test_sector_id_is_transparent() {
        let id = SectorId::from("Tourism");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"Tourism\"");
        assert_eq!(id.as_str(), "Tourism");
    }
}
