use serde::{Deserialize, Serialize};
use tracing::info;

use super::distance_matrix;
use super::strategy::{SelectionStrategy, TotalDistanceStrategy};
use super::validator::{validate, validate_facility_count};
use crate::config::placement_config::PlacementConfig;
use crate::models::facility_selection::FacilitySelection;
use crate::models::placement_error::PlacementError;
use crate::models::point::Point;

/// Result of one placement run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub strategy: String,
    pub points: Vec<Point>,
    pub selection: FacilitySelection,
    /// Total distance from each input point to every other, by input index.
    pub total_distances: Vec<f64>,
}

impl PlacementReport {
    pub fn facilities(&self) -> &[Point] {
        self.selection.points()
    }
}

/// Runs validate -> build matrix -> locate with the greedy total-distance rule.
pub fn place(points: &[Point], config: &PlacementConfig) -> Result<PlacementReport, PlacementError> {
    place_with(points, config, &TotalDistanceStrategy)
}

/// Same pipeline with a caller-supplied strategy. All input errors surface
/// before the distance matrix is built; past that point nothing can fail.
pub fn place_with(
    points: &[Point],
    config: &PlacementConfig,
    strategy: &dyn SelectionStrategy,
) -> Result<PlacementReport, PlacementError> {
    config.bounds.check()?;
    validate(points, config)?;
    validate_facility_count(config.facility_count, points.len())?;

    let matrix = distance_matrix::build(points);
    let selection = strategy.select(points, &matrix, config.facility_count);
    debug_assert_eq!(selection.len(), config.facility_count, "strategy {} broke cardinality", strategy.name());

    info!(
        strategy = strategy.name(),
        points = points.len(),
        facilities = %format_points(selection.points()),
        "Placement complete"
    );

    Ok(PlacementReport {
        strategy: strategy.name().to_string(),
        points: points.to_vec(),
        total_distances: matrix.row_totals(),
        selection,
    })
}

pub fn format_points(points: &[Point]) -> String {
    let parts: Vec<String> = points.iter().map(|p| p.to_string()).collect();
    format!("[{}]", parts.join(", "))
}
