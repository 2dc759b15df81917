use crate::generator::{InvestmentWindow, DEFAULT_PROJECT_COUNT};
use crate::live::DEFAULT_THRESHOLD_DAYS;
use crate::session::SessionSettings;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub live: LiveConfig,
    #[serde(default)]
    pub refresh: RefreshConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// Synthetic history settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    #[serde(default = "default_start_date")]
    pub start_date: NaiveDate,

    /// Last month to generate; today when absent.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    /// Fixed seed for reproducible sessions; OS entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,

    #[serde(default = "default_project_count")]
    pub project_count: usize,

    #[serde(default = "default_start_date")]
    pub project_window_start: NaiveDate,

    #[serde(default = "default_project_window_days")]
    pub project_window_days: u64,
}

/// Live-update settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveConfig {
    #[serde(default = "default_threshold_days")]
    pub threshold_days: i64,
}

/// Auto-refresh settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RefreshConfig {
    #[serde(default = "default_true")]
    pub auto_refresh: bool,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
}

/// Export settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,
}

// ── Defaults ─────────────────────────────────────────────────────────────────

fn default_start_date() -> NaiveDate {
    InvestmentWindow::default().start
}
fn default_project_count() -> usize {
    DEFAULT_PROJECT_COUNT
}
fn default_project_window_days() -> u64 {
    InvestmentWindow::default().days
}
fn default_threshold_days() -> i64 {
    DEFAULT_THRESHOLD_DAYS
}
fn default_true() -> bool {
    true
}
fn default_interval_secs() -> u64 {
    30
}
fn default_out_dir() -> PathBuf {
    PathBuf::from("exports")
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: None,
            seed: None,
            project_count: default_project_count(),
            project_window_start: default_start_date(),
            project_window_days: default_project_window_days(),
        }
    }
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self { threshold_days: default_threshold_days() }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            auto_refresh: true,
            interval_secs: default_interval_secs(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { out_dir: default_out_dir() }
    }
}

// ── Loader ───────────────────────────────────────────────────────────────────

impl AppConfig {
    /// Load configuration from file + environment overrides
    pub fn load() -> Result<Self> {
        dotenv::dotenv().ok();

        let cfg = config::Config::builder()
            .add_source(
                config::File::with_name("config/default")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(
                config::File::with_name("config/local")
                    .required(false)
                    .format(config::FileFormat::Toml),
            )
            .add_source(config::Environment::with_prefix("ECON").separator("__"))
            .build()
            .context("Failed to read configuration sources")?;

        cfg.try_deserialize().context("Invalid configuration")
    }

    /// Session settings for a history ending at `end_date`, or `today`.
    pub fn session_settings(&self, today: NaiveDate) -> SessionSettings {
        let g = &self.generation;
        SessionSettings {
            start: g.start_date,
            end: g.end_date.unwrap_or(today),
            seed: g.seed,
            project_count: g.project_count,
            project_window: InvestmentWindow {
                start: g.project_window_start,
                days: g.project_window_days,
            },
            live_threshold_days: self.live.threshold_days,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
