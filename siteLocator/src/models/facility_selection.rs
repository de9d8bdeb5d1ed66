use serde::{Deserialize, Serialize};

use super::point::Point;

/// The chosen facility sites, in selection order.
///
/// Every entry is one of the input points; `indices[i]` is the input position
/// of `points[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySelection {
    indices: Vec<usize>,
    points: Vec<Point>,
}

impl FacilitySelection {
    pub(crate) fn from_indices(source: &[Point], indices: Vec<usize>) -> Self {
        let points = indices.iter().map(|&i| source[i]).collect();
        Self { indices, points }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.points.contains(point)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}
