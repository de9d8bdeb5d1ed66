use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::placement::PlacementReport;
use crate::utils::csv_export::timestamped_path;
use crate::utils::logging::{self, OperationCategory, FileIOType};

pub fn print_placement_summary(label: &str, report: &PlacementReport) {
    println!("\nPlacement Summary: {}", label);
    println!("----------------------------------------");
    println!("Strategy: {}", report.strategy);
    println!("Points: {}", report.points.len());
    println!("Facilities:");
    for (rank, (&index, point)) in report
        .selection
        .indices()
        .iter()
        .zip(report.selection.points())
        .enumerate()
    {
        match report.total_distances.get(index) {
            Some(total) => println!(
                "  {}. {} (input #{}, total distance {:.2})",
                rank + 1, point, index, total
            ),
            None => println!("  {}. {} (input #{}, no total recorded)", rank + 1, point, index),
        }
    }
    println!("----------------------------------------");
}

pub fn print_point_totals(report: &PlacementReport) {
    println!("\nTotal Distance by Point:");
    println!("----------------------------------------");
    for (index, (point, total)) in report.points.iter().zip(&report.total_distances).enumerate() {
        let marker = if report.selection.indices().contains(&index) { " *" } else { "" };
        println!("{:>3}: {:<12} {:>10.2}{}", index, point.to_string(), total, marker);
    }
    println!("----------------------------------------");
}

pub fn save_report_json(report: &PlacementReport, dir: &Path, label: &str) -> Result<PathBuf> {
    let _timing = logging::start_timing("save_report_json",
        OperationCategory::FileIO { subcategory: FileIOType::ResultsSave });

    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = timestamped_path(dir, label, "json");
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::placement_config::PlacementConfig;
    use crate::core::placement::place;
    use crate::data::reference::reference_points;

    #[test]
    fn test_json_report_round_trips() {
        let report = place(&reference_points(), &PlacementConfig::default()).unwrap();
        let dir = std::env::temp_dir().join(format!("facility_siting_report_{}", std::process::id()));

        let path = save_report_json(&report, &dir, "reference").unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let loaded: PlacementReport = serde_json::from_str(&content).unwrap();
        assert_eq!(loaded.selection, report.selection);
        assert_eq!(loaded.strategy, "total-distance");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_summary_tolerates_inconsistent_loaded_report() {
        let json = r#"{
            "strategy": "total-distance",
            "points": [[0, 0]],
            "selection": {"indices": [7], "points": [[5, 5]]},
            "total_distances": []
        }"#;
        let report: PlacementReport = serde_json::from_str(json).unwrap();
        print_placement_summary("loaded", &report);
        print_point_totals(&report);
    }
}
