use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use econ_dashboard::aggregate::{in_sectors, within_period};
use econ_dashboard::config::AppConfig;
use econ_dashboard::export::export_session;
use econ_dashboard::models::SectorId;
use econ_dashboard::refresh::{RefreshLoop, SystemClock};
use econ_dashboard::report;
use econ_dashboard::sectors::get_regions;
use econ_dashboard::session::DashboardSession;
use econ_dashboard::utils::Timer;

#[derive(Parser)]
#[command(
    name = "econ-dashboard",
    about = "Synthetic island-economy dashboard (simulated data)",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Fixed RNG seed (overrides config)
    #[arg(long, global = true, env = "ECON_SEED")]
    seed: Option<u64>,

    /// First month of generated history, YYYY-MM-DD (overrides config)
    #[arg(long, global = true)]
    start: Option<NaiveDate>,

    /// Last month of generated history, YYYY-MM-DD (default: today)
    #[arg(long, global = true)]
    end: Option<NaiveDate>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Display period; either bound may be left open.
#[derive(Args)]
struct Period {
    /// First month to show, YYYY-MM-DD
    #[arg(long)]
    from: Option<NaiveDate>,

    /// Last month to show, YYYY-MM-DD
    #[arg(long)]
    to: Option<NaiveDate>,
}

#[derive(Subcommand)]
enum Command {
    /// Headline indicators (latest month vs previous)
    Summary,

    /// GDP, growth, inflation and unemployment per year
    Macro {
        #[command(flatten)]
        period: Period,
    },

    /// Sector registry, employment shares and key companies
    Sectors,

    /// Investment project breakdowns
    Investments {
        /// Number of largest projects to list
        #[arg(long, default_value_t = 10)]
        top: usize,

        /// Restrict breakdowns to these sectors (repeatable)
        #[arg(long = "sector")]
        sectors: Vec<String>,
    },

    /// Annual tourism figures and source markets
    Tourism {
        #[command(flatten)]
        period: Period,
    },

    /// Annual trade figures and partners
    Trade {
        #[command(flatten)]
        period: Period,
    },

    /// Regional profiles
    Regions,

    /// Auto-refresh loop: re-run the live update on a timer until Ctrl-C
    Watch {
        /// Refresh interval in seconds (overrides config)
        #[arg(long)]
        interval: Option<u64>,

        /// Stop after this many cycles
        #[arg(long)]
        cycles: Option<u64>,
    },

    /// Write every series to CSV
    Export {
        /// Output directory (overrides config)
        #[arg(short, long)]
        dir: Option<PathBuf>,
    },

    /// Dump the whole session as JSON to stdout
    Snapshot,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "econ_dashboard=info,warn",
        1 => "econ_dashboard=debug,info",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::new(filter))
        .init();

    let mut config = AppConfig::load()?;
    if cli.seed.is_some() {
        config.generation.seed = cli.seed;
    }
    if let Some(start) = cli.start {
        config.generation.start_date = start;
    }
    if cli.end.is_some() {
        config.generation.end_date = cli.end;
    }

    let today = Local::now().date_naive();
    let mut session = DashboardSession::generate(config.session_settings(today))
        .context("Failed to generate dashboard data")?;

    // Every render cycle starts with the live-update step.
    session.refresh(Local::now().naive_local())?;

    match cli.command {
        Command::Summary => {
            let metrics = session.key_metrics().context("No observations generated")?;
            println!("{}", report::render_key_metrics(&metrics));
        }

        Command::Macro { period } => {
            let rows = within_period(session.macro_series(), period.from, period.to, |o| o.date)?;
            println!("{}", report::render_macro(rows));
        }

        Command::Sectors => {
            println!("{}", report::render_sectors(session.sectors()));
        }

        Command::Investments { top, sectors } => {
            let all = session.projects();
            if sectors.is_empty() {
                println!("{}", report::render_investments(all, top));
            } else {
                let selected: Vec<SectorId> =
                    sectors.iter().map(|s| SectorId::from(s.as_str())).collect();
                for id in selected.iter().filter(|id| !session.sectors().contains(id)) {
                    warn!("Unknown sector {:?}, ignored", id.as_str());
                }
                let filtered = in_sectors(all, &selected);
                println!("{}", report::render_investments(filtered.iter().copied(), top));
            }
        }

        Command::Tourism { period } => {
            let rows = within_period(session.tourism(), period.from, period.to, |o| o.date)?;
            println!("{}", report::render_tourism(rows));
        }

        Command::Trade { period } => {
            let rows = within_period(session.trade(), period.from, period.to, |o| o.date)?;
            println!("{}", report::render_trade(rows));
        }

        Command::Regions => {
            println!("{}", report::render_regions(&get_regions()));
        }

        Command::Watch { interval, cycles } => {
            if !config.refresh.auto_refresh && cycles.is_none() {
                warn!("refresh.auto_refresh is off; running a single cycle");
            }
            let secs = interval.unwrap_or(config.refresh.interval_secs).max(1);
            let mut refresh = RefreshLoop::new(Duration::from_secs(secs));
            if let Some(n) = cycles.or((!config.refresh.auto_refresh).then_some(1)) {
                refresh = refresh.with_max_cycles(n);
            }

            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    warn!("Could not listen for Ctrl-C ({}), stopping auto-refresh", e);
                }
            };
            let stats = refresh
                .run(&mut session, &SystemClock, shutdown, |s, _| {
                    if let Some(m) = s.key_metrics() {
                        println!("{}", report::render_key_metrics(&m));
                    }
                })
                .await?;
            info!("Done: {} cycles, {} live observations", stats.cycles, stats.appended);
        }

        Command::Export { dir } => {
            let _t = Timer::start("CSV export");
            let dir = dir.unwrap_or_else(|| config.export.out_dir.clone());
            let paths = export_session(&session, &dir)?;
            info!("Done: {} files in {:?}", paths.len(), dir);
        }

        Command::Snapshot => {
            let json = serde_json::to_string_pretty(&session.snapshot())
                .context("Failed to serialize session")?;
            println!("{}", json);
        }
    }

    Ok(())
}
