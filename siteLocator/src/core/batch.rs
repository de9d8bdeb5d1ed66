use rayon::prelude::*;
use tracing::{info, warn};

use super::placement::{place_with, PlacementReport};
use super::strategy::SelectionStrategy;
use crate::config::placement_config::PlacementConfig;
use crate::models::placement_error::PlacementError;
use crate::models::point::Point;
use crate::utils::logging::{self, OperationCategory, PlacementStepType};

/// Places facilities on several independent point sets.
///
/// Runs on the rayon pool when `parallel` is set. Results are returned in
/// input order either way, one per set.
pub fn place_many(
    point_sets: &[Vec<Point>],
    config: &PlacementConfig,
    strategy: &dyn SelectionStrategy,
    parallel: bool,
) -> Vec<Result<PlacementReport, PlacementError>> {
    let _timing = logging::start_timing("place_many",
        OperationCategory::Placement { subcategory: PlacementStepType::Batch });

    let results: Vec<_> = if parallel {
        point_sets
            .par_iter()
            .map(|points| place_with(points, config, strategy))
            .collect()
    } else {
        point_sets
            .iter()
            .map(|points| place_with(points, config, strategy))
            .collect()
    };

    let failed = results.iter().filter(|r| r.is_err()).count();
    if failed > 0 {
        warn!(failed, total = results.len(), "Some point sets failed placement");
    } else {
        info!(total = results.len(), "All point sets placed");
    }

    results
}
