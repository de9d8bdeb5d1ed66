use tracing::debug;

use super::distance_matrix::DistanceMatrix;
use crate::models::facility_selection::FacilitySelection;
use crate::models::point::Point;
use crate::utils::logging::{self, OperationCategory, PlacementStepType};

/// Picks the `k` points with the smallest total distance to all points.
///
/// Indices are ordered with a stable sort on the totals, so equal totals keep
/// input order and the lower index wins. Selected facilities do not influence
/// each other: this is a single greedy pass, not a k-median solver.
///
/// `points` and `matrix` must describe the same set and `1 <= k <= n`; the
/// placement pipeline checks both before calling in.
pub fn locate(points: &[Point], matrix: &DistanceMatrix, k: usize) -> FacilitySelection {
    let _timing = logging::start_timing("locate",
        OperationCategory::Placement { subcategory: PlacementStepType::Selection });

    let totals = matrix.row_totals();
    let mut order: Vec<usize> = (0..matrix.len()).collect();
    // Must stay a stable sort.
    order.sort_by(|&a, &b| totals[a].total_cmp(&totals[b]));
    order.truncate(k);

    debug!(selected = ?order, "Selected facility indices");
    FacilitySelection::from_indices(points, order)
}
