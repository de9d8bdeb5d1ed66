use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::{error, info};

use facility_siting::analysis::reporting;
use facility_siting::cli::cli::Args;
use facility_siting::config::placement_config::PlacementConfig;
use facility_siting::core::batch::place_many;
use facility_siting::core::strategy::TotalDistanceStrategy;
use facility_siting::data::{points_loader, reference};
use facility_siting::models::point::Point;
use facility_siting::utils::csv_export;
use facility_siting::utils::logging::{self, OperationCategory, FileIOType};
use facility_siting::utils::traits::Visualizer;
use facility_siting::viz::ascii_plot::AsciiPlot;
use facility_siting::viz::svg_plot::SvgPlot;

fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_logging(args.enable_timing(), args.debug_logging());

    let config = build_config(&args)?;
    info!(
        expected_count = config.expected_count,
        facility_count = config.facility_count,
        "Placement configuration"
    );

    let (labels, point_sets) = collect_point_sets(&args, &config)?;
    let results = place_many(&point_sets, &config, &TotalDistanceStrategy, args.parallel());

    let mut failures = 0;
    let mut svg_written = false;
    for (label, result) in labels.iter().zip(&results) {
        match result {
            Ok(report) => {
                reporting::print_placement_summary(label, report);
                if args.debug_logging() {
                    reporting::print_point_totals(report);
                }
                if args.plot() {
                    println!("{}", AsciiPlot::default().render(&report.points, &report.selection));
                }
                if let (Some(svg_path), false) = (args.svg(), svg_written) {
                    let svg = SvgPlot::default().render(&report.points, &report.selection);
                    std::fs::write(svg_path, svg)
                        .with_context(|| format!("Failed to write SVG plot to {}", svg_path))?;
                    info!(path = svg_path, "Wrote SVG plot");
                    svg_written = true;
                }
                if let Some(dir) = args.output_dir() {
                    let file_label = sanitize_label(label);
                    let json_path = reporting::save_report_json(report, Path::new(dir), &file_label)?;
                    let csv_path = csv_export::export_report_csv(report, Path::new(dir), &file_label)?;
                    info!(json = %json_path.display(), csv = %csv_path.display(), "Saved reports");
                }
            }
            Err(e) => {
                failures += 1;
                error!(set = %label, "Placement failed: {}", e);
            }
        }
    }

    logging::print_timing_report();

    if failures > 0 {
        bail!("{} of {} point sets failed placement", failures, results.len());
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<PlacementConfig> {
    let mut config = match args.config() {
        Some(path) => {
            let _timing = logging::start_timing("load_config",
                OperationCategory::FileIO { subcategory: FileIOType::ConfigLoad });
            PlacementConfig::from_json_file(path)?
        }
        None => PlacementConfig::default(),
    };

    if let Some(n) = args.expected_count() {
        config.expected_count = n;
    }
    if let Some(k) = args.facility_count() {
        config.facility_count = k;
    }
    Ok(config)
}

fn collect_point_sets(args: &Args, config: &PlacementConfig) -> Result<(Vec<String>, Vec<Vec<Point>>)> {
    if let Some(count) = args.random() {
        let sets = reference::random_point_sets(config, count, args.seed());
        if sets.len() != count {
            bail!(
                "Bounds [{}, {}] cannot hold {} distinct points",
                config.bounds.min, config.bounds.max, config.expected_count
            );
        }
        let labels = (1..=count).map(|i| format!("random-{}", i)).collect();
        return Ok((labels, sets));
    }

    if args.input().is_empty() {
        info!("No input given, using the reference configuration");
        return Ok((vec!["reference".to_string()], vec![reference::reference_points()]));
    }

    let mut labels = Vec::with_capacity(args.input().len());
    let mut sets = Vec::with_capacity(args.input().len());
    for path in args.input() {
        let points = points_loader::load_points(path)
            .with_context(|| format!("Failed to load points from {}", path))?;
        labels.push(path.clone());
        sets.push(points);
    }
    Ok((labels, sets))
}

fn sanitize_label(label: &str) -> String {
    let stem = Path::new(label)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(label);
    stem.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}
