//! Static registry of the island's economic sectors and regions.
//!
//! Content is fixed at compile time. `get_sectors()` always returns the same
//! eight sectors in the same order; nothing here can fail.

use crate::models::{Region, Sector, SectorId};

// ── Registry ──────────────────────────────────────────────────────────────────

/// Ordered mapping `SectorId -> Sector`, in registry order.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorRegistry {
    sectors: Vec<Sector>,
}

impl SectorRegistry {
    pub fn get(&self, id: &SectorId) -> Option<&Sector> {
        self.sectors.iter().find(|s| &s.id == id)
    }

    pub fn contains(&self, id: &SectorId) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<SectorId> {
        self.sectors.iter().map(|s| s.id.clone()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.iter()
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }

    pub fn total_employment(&self) -> u64 {
        self.sectors.iter().map(|s| s.employment).sum()
    }
}

impl<'a> IntoIterator for &'a SectorRegistry {
    type Item = &'a Sector;
    type IntoIter = std::slice::Iter<'a, Sector>;

    fn into_iter(self) -> Self::IntoIter {
        self.sectors.iter()
    }
}

#[allow(clippy::too_many_arguments)]
fn sector(
    id: &str,
    display_name: &str,
    gdp_share_pct: f64,
    growth_rate_pct: f64,
    employment: u64,
    color: &str,
    description: &str,
    key_companies: &[&str],
    outlook: &str,
) -> Sector {
    Sector {
        id: SectorId::from(id),
        display_name: display_name.to_string(),
        gdp_share_pct,
        growth_rate_pct,
        employment,
        color: color.to_string(),
        description: description.to_string(),
        key_companies: key_companies.iter().map(|c| c.to_string()).collect(),
        outlook: outlook.to_string(),
    }
}

pub fn get_sectors() -> SectorRegistry {
    SectorRegistry {
        sectors: vec![
            sector(
                "Tourism",
                "Tourism and Hospitality",
                24.3,
                8.7,
                75_000,
                "#EA2839",
                "Leading sector of the economy",
                &["Beachcomber", "Sun Resorts", "Veranda", "LUX*"],
                "Very positive",
            ),
            sector(
                "Financial Services",
                "Financial and Banking Services",
                12.8,
                5.2,
                15_000,
                "#1A206D",
                "International financial centre",
                &["MCB", "SBM", "MUA", "CIM"],
                "Stable",
            ),
            sector(
                "Textile",
                "Textile and Apparel Industry",
                8.5,
                3.1,
                45_000,
                "#FF6B00",
                "Exports to the EU and USA",
                &["CIEL Textile", "Floreal", "Made in Moris"],
                "Moderate growth",
            ),
            sector(
                "Sugar",
                "Sugar Industry",
                6.2,
                -2.1,
                15_000,
                "#FFD100",
                "Historic industry in transition",
                &["Omnicane", "Alteo", "Terra"],
                "Restructuring",
            ),
            sector(
                "Technology",
                "Information Technology",
                7.3,
                15.4,
                12_000,
                "#00A3E0",
                "Fast-growing sector",
                &["Accenture", "CERNE", "IFSS", "Cim"],
                "Very positive",
            ),
            sector(
                "Real Estate",
                "Real Estate and Construction",
                9.1,
                6.8,
                35_000,
                "#8B4513",
                "Very active IRS/REIS programme",
                &["Rogers", "IBL", "Gamma Civic"],
                "Positive",
            ),
            sector(
                "Commerce",
                "Retail and Distribution",
                11.2,
                4.3,
                55_000,
                "#6f42c1",
                "Well-developed distribution networks",
                &["Jumbo", "Super U", "Winner's", "Shoprite"],
                "Stable",
            ),
            sector(
                "Fishing",
                "Fishing and Aquaculture",
                4.1,
                7.2,
                12_000,
                "#0066CC",
                "Tuna and seafood products",
                &["Mormai", "Seafood Hub", "Fishing Co"],
                "Growing",
            ),
        ],
    }
}

// ── Companies ─────────────────────────────────────────────────────────────────

/// One row of the flattened company directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyListing {
    pub company: String,
    pub sector: SectorId,
}

/// Every notable company, in registry order then listing order.
pub fn company_directory(registry: &SectorRegistry) -> Vec<CompanyListing> {
    registry
        .iter()
        .flat_map(|s| {
            s.key_companies.iter().map(move |c| CompanyListing {
                company: c.clone(),
                sector: s.id.clone(),
            })
        })
        .collect()
}

// ── Regions ───────────────────────────────────────────────────────────────────

pub fn get_regions() -> Vec<Region> {
    [
        ("Port-Louis", 150_000, 4.5, 8.2, 1200.0),
        ("Plaines Wilhems", 400_000, 6.2, 7.1, 800.0),
        ("North", 120_000, 1.8, 9.5, 350.0),
        ("South", 110_000, 1.5, 10.2, 280.0),
        ("East", 100_000, 1.2, 11.1, 320.0),
        ("West", 130_000, 2.1, 8.8, 450.0),
        ("Outer Islands", 5_000, 0.1, 12.5, 50.0),
    ]
    .into_iter()
    .map(|(name, population, gdp_bn, unemployment_pct, recent_investment_mn)| Region {
        name: name.to_string(),
        population,
        gdp_bn,
        unemployment_pct,
        recent_investment_mn,
    })
    .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
