use super::point::Point;
use crate::config::constants::COORDINATE_LIMIT;

/// Input rejected before any distance computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    CountError { expected: usize, actual: usize },
    DuplicateError { point: Point, first: usize, second: usize },
    RangeError { point: Point, index: usize, min: i64, max: i64 },
    ParameterError { facility_count: usize, point_count: usize },
    BoundsError { min: i64, max: i64 },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::CountError { expected, actual } => {
                write!(f, "Expected exactly {} points, got {}", expected, actual)
            }
            PlacementError::DuplicateError { point, first, second } => write!(
                f,
                "Point coordinates must be unique: {} appears at index {} and {}",
                point, first, second
            ),
            PlacementError::RangeError { point, index, min, max } => write!(
                f,
                "Point {} at index {} is outside ({}, {}) to ({}, {})",
                point, index, min, min, max, max
            ),
            PlacementError::ParameterError { facility_count, point_count } => write!(
                f,
                "Facility count must be between 1 and {}, got {}",
                point_count, facility_count
            ),
            PlacementError::BoundsError { min, max } => write!(
                f,
                "Coordinate bounds [{}, {}] must be ordered and within +/-{}",
                min, max, COORDINATE_LIMIT
            ),
        }
    }
}

impl std::error::Error for PlacementError {}
