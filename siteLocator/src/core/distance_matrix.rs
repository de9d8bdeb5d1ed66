use crate::models::point::Point;
use crate::utils::logging::{self, OperationCategory, PlacementStepType};

/// Dense symmetric matrix of pairwise Euclidean distances, row-major.
///
/// Only [`build`] constructs one, so `D[i][j] == D[j][i]` and `D[i][i] == 0`
/// hold for every instance.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    distances: Vec<f64>,
}

impl DistanceMatrix {
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.distances[i * self.size + j]
    }

    pub fn row(&self, i: usize) -> &[f64] {
        &self.distances[i * self.size..(i + 1) * self.size]
    }

    /// Sum of each row, i.e. each point's total distance to every point.
    pub fn row_totals(&self) -> Vec<f64> {
        (0..self.size).map(|i| self.row(i).iter().sum()).collect()
    }
}

/// Computes every unordered pair once and mirrors it. The diagonal keeps its
/// zero initialisation.
pub fn build(points: &[Point]) -> DistanceMatrix {
    let _timing = logging::start_timing("build_distance_matrix",
        OperationCategory::Placement { subcategory: PlacementStepType::DistanceMatrix });

    let n = points.len();
    let mut distances = vec![0.0; n * n];
    for i in 0..n {
        for j in (i + 1)..n {
            let d = points[i].distance_to(&points[j]);
            distances[i * n + j] = d;
            distances[j * n + i] = d;
        }
    }

    DistanceMatrix { size: n, distances }
}
