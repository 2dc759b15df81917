//! CSV export of a session's series, one file per dataset.

use crate::session::DashboardSession;
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Could not create {:?}", path))?;

    for (i, row) in rows.iter().enumerate() {
        writer
            .serialize(row)
            .with_context(|| format!("Row {} of {:?}", i + 1, path))?;
    }
    writer.flush().with_context(|| format!("Flush {:?}", path))?;

    debug!("{:?}: {} rows", path, rows.len());
    Ok(rows.len())
}

/// Writes `macro.csv`, `tourism.csv`, `trade.csv` and `investments.csv`
/// into `dir`, creating it if needed. Returns the written paths.
pub fn export_session(session: &DashboardSession, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir).with_context(|| format!("Could not create dir {:?}", dir))?;

    let files = [
        ("macro.csv", write_csv(&dir.join("macro.csv"), session.macro_series())?),
        ("tourism.csv", write_csv(&dir.join("tourism.csv"), session.tourism())?),
        ("trade.csv", write_csv(&dir.join("trade.csv"), session.trade())?),
        ("investments.csv", write_csv(&dir.join("investments.csv"), session.projects())?),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (name, rows) in files {
        info!("Exported {} rows to {}", rows, name);
        written.push(dir.join(name));
    }
    Ok(written)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionSettings;
    use chrono::NaiveDate;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("econ-dashboard-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_export_writes_all_files() {
        let end = NaiveDate::from_ymd_opt(2015, 12, 1).unwrap();
        let session = DashboardSession::generate(SessionSettings::until(end).with_seed(1)).unwrap();
        let dir = scratch_dir("export");

        let paths = export_session(&session, &dir).unwrap();
        assert_eq!(paths.len(), 4);

        let mut reader = csv::Reader::from_path(dir.join("trade.csv")).unwrap();
        let headers = reader.headers().unwrap().clone();
        assert_eq!(&headers[0], "date");
        assert!(headers.iter().any(|h| h == "balance_bn"));
        assert_eq!(reader.records().count(), 24);

        let mut reader = csv::Reader::from_path(dir.join("investments.csv")).unwrap();
        let first = reader.records().next().unwrap().unwrap();
        assert_eq!(&first[0], "1");
        assert_eq!(reader.records().count(), 199);

        std::fs::remove_dir_all(&dir).ok();
    }
}
