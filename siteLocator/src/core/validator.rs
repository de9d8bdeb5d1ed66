use std::collections::HashMap;

use tracing::debug;

use crate::config::placement_config::PlacementConfig;
use crate::models::placement_error::PlacementError;
use crate::models::point::Point;
use crate::utils::logging::{self, OperationCategory, PlacementStepType};

/// Checks a candidate point set against the structural preconditions of a
/// placement run and reports the first violation.
///
/// Checks run in order: count, uniqueness over the whole set, then bounds.
/// Nothing is repaired; out-of-range points are never clamped.
pub fn validate(points: &[Point], config: &PlacementConfig) -> Result<(), PlacementError> {
    let _timing = logging::start_timing("validate",
        OperationCategory::Placement { subcategory: PlacementStepType::Validation });

    if points.len() != config.expected_count {
        return Err(PlacementError::CountError {
            expected: config.expected_count,
            actual: points.len(),
        });
    }

    let mut seen: HashMap<Point, usize> = HashMap::with_capacity(points.len());
    for (index, point) in points.iter().enumerate() {
        if let Some(&first) = seen.get(point) {
            return Err(PlacementError::DuplicateError {
                point: *point,
                first,
                second: index,
            });
        }
        seen.insert(*point, index);
    }

    let bounds = config.bounds;
    if let Some((index, point)) = points
        .iter()
        .enumerate()
        .find(|(_, p)| !bounds.contains(p.x) || !bounds.contains(p.y))
    {
        return Err(PlacementError::RangeError {
            point: *point,
            index,
            min: bounds.min,
            max: bounds.max,
        });
    }

    debug!(count = points.len(), "Point set passed validation");
    Ok(())
}

/// Checks that `facility_count` lies in `[1, point_count]`.
pub fn validate_facility_count(facility_count: usize, point_count: usize) -> Result<(), PlacementError> {
    if facility_count == 0 || facility_count > point_count {
        return Err(PlacementError::ParameterError { facility_count, point_count });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::reference::reference_points;

    #[test]
    fn test_reference_set_is_valid() {
        assert!(validate(&reference_points(), &PlacementConfig::default()).is_ok());
    }

    #[test]
    fn test_wrong_count() {
        let mut points = reference_points();
        points.pop();
        let err = validate(&points, &PlacementConfig::default()).unwrap_err();
        assert_eq!(err, PlacementError::CountError { expected: 10, actual: 9 });

        let err = validate(&[], &PlacementConfig::default()).unwrap_err();
        assert_eq!(err, PlacementError::CountError { expected: 10, actual: 0 });
    }

    #[test]
    fn test_count_checked_before_other_rules() {
        // Both duplicated and out of range, but the wrong size wins.
        let points = vec![Point::new(5000, 5000), Point::new(5000, 5000)];
        let err = validate(&points, &PlacementConfig::default()).unwrap_err();
        assert!(matches!(err, PlacementError::CountError { .. }));
    }

    #[test]
    fn test_non_adjacent_duplicate() {
        let mut points = reference_points();
        points[7] = points[1];
        let err = validate(&points, &PlacementConfig::default()).unwrap_err();
        assert_eq!(err, PlacementError::DuplicateError {
            point: Point::new(350, 123),
            first: 1,
            second: 7,
        });
    }

    #[test]
    fn test_out_of_range_on_either_axis() {
        for bad in [Point::new(1000, 998), Point::new(5, -1), Point::new(-3, 4), Point::new(0, 1000)] {
            let mut points = reference_points();
            points[8] = bad;
            let err = validate(&points, &PlacementConfig::default()).unwrap_err();
            assert_eq!(err, PlacementError::RangeError { point: bad, index: 8, min: 0, max: 999 });
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let points = vec![Point::new(0, 0), Point::new(999, 999), Point::new(0, 999)];
        assert!(validate(&points, &PlacementConfig::new(3, 1)).is_ok());
    }

    #[test]
    fn test_custom_bounds() {
        let points = vec![Point::new(-10, 20), Point::new(30, 40)];
        let config = PlacementConfig::new(2, 1).with_bounds(-50, 50);
        assert!(validate(&points, &config).is_ok());
    }

    #[test]
    fn test_facility_count_range() {
        assert!(validate_facility_count(1, 10).is_ok());
        assert!(validate_facility_count(10, 10).is_ok());
        assert_eq!(
            validate_facility_count(0, 10).unwrap_err(),
            PlacementError::ParameterError { facility_count: 0, point_count: 10 }
        );
        assert_eq!(
            validate_facility_count(11, 10).unwrap_err(),
            PlacementError::ParameterError { facility_count: 11, point_count: 10 }
        );
    }
}
