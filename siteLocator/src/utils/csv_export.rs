use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use csv::Writer;
use serde::Serialize;

use crate::config::constants::{REPORT_FILE_PREFIX, TIMESTAMP_FORMAT};
use crate::core::placement::PlacementReport;
use crate::utils::logging::{self, OperationCategory, FileIOType};

#[derive(Debug, Serialize)]
struct PointRow {
    index: usize,
    x: i64,
    y: i64,
    total_distance: f64,
    facility: bool,
    facility_rank: Option<usize>,
}

/// Writes one row per input point, in input order, flagging the facilities.
pub fn write_report_csv<W: Write>(report: &PlacementReport, writer: W) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    let indices = report.selection.indices();

    for (index, point) in report.points.iter().enumerate() {
        let facility_rank = indices.iter().position(|&i| i == index).map(|rank| rank + 1);
        csv_writer.serialize(PointRow {
            index,
            x: point.x,
            y: point.y,
            total_distance: report.total_distances.get(index).copied().unwrap_or_default(),
            facility: facility_rank.is_some(),
            facility_rank,
        })?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Timestamped file path inside `dir`, e.g. `placement_3_20260101_120000.csv`.
pub fn timestamped_path(dir: &Path, label: &str, extension: &str) -> PathBuf {
    let timestamp = Local::now().format(TIMESTAMP_FORMAT);
    dir.join(format!("{}_{}_{}.{}", REPORT_FILE_PREFIX, label, timestamp, extension))
}

pub fn export_report_csv(report: &PlacementReport, dir: &Path, label: &str) -> Result<PathBuf> {
    let _timing = logging::start_timing("export_report_csv",
        OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = timestamped_path(dir, label, "csv");
    let file = std::fs::File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    write_report_csv(report, file)?;
    Ok(path)
}
