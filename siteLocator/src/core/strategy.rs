// Selection strategies applied to a validated point set and its distance matrix

use super::distance_matrix::DistanceMatrix;
use super::facility_locator;
use crate::models::facility_selection::FacilitySelection;
use crate::models::point::Point;

pub trait SelectionStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Chooses `k` facilities. Callers guarantee `1 <= k <= points.len()` and
    /// that `matrix` was built from `points`.
    fn select(&self, points: &[Point], matrix: &DistanceMatrix, k: usize) -> FacilitySelection;
}

/// Greedy rule: the `k` points with the smallest total distance to all others.
#[derive(Debug, Clone, Copy, Default)]
pub struct TotalDistanceStrategy;

impl SelectionStrategy for TotalDistanceStrategy {
    fn name(&self) -> &'static str {
        "total-distance"
    }

    fn select(&self, points: &[Point], matrix: &DistanceMatrix, k: usize) -> FacilitySelection {
        facility_locator::locate(points, matrix, k)
    }
}
