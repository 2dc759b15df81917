//! Synthetic economy dashboard core.
//!
//! Generates mock macro, tourism, trade and investment datasets for a small
//! island economy, keeps them in a per-viewer [`session::DashboardSession`],
//! and derives the views a dashboard renders through pure aggregation.
//! All figures are simulated.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;
pub mod live;
pub mod models;
pub mod refresh;
pub mod report;
pub mod sectors;
pub mod session;
pub mod utils;

pub use error::GeneratorError;
pub use generator::{
    generate_investment_projects, generate_macro_series, generate_tourism_series,
    generate_trade_series,
};
pub use live::{apply_live_update, LiveUpdate};
pub use sectors::get_sectors;
pub use session::{DashboardSession, SessionSettings};
