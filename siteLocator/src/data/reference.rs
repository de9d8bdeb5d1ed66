use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::placement_config::PlacementConfig;
use crate::models::point::Point;

const REFERENCE_COORDINATES: [(i64, i64); 10] = [
    (400, 150), (350, 123), (432, 322), (400, 400), (500, 500),
    (600, 600), (700, 700), (800, 800), (999, 998), (999, 999),
];

/// The ten-city reference configuration.
pub fn reference_points() -> Vec<Point> {
    REFERENCE_COORDINATES.iter().copied().map(Point::from).collect()
}

/// Generates `count` point sets that pass validation under `config`.
///
/// With a seed the output is reproducible; without one it comes from entropy.
/// Returns an empty list if the bounds are invalid or cannot hold
/// `expected_count` distinct points.
pub fn random_point_sets(config: &PlacementConfig, count: usize, seed: Option<u64>) -> Vec<Vec<Point>> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    if config.bounds.check().is_err() {
        return Vec::new();
    }
    let side = config.bounds.span() as u128;
    if side * side < config.expected_count as u128 {
        return Vec::new();
    }

    (0..count)
        .map(|_| random_point_set(&mut rng, config))
        .collect()
}

fn random_point_set(rng: &mut StdRng, config: &PlacementConfig) -> Vec<Point> {
    let bounds = config.bounds;
    let mut seen = HashSet::with_capacity(config.expected_count);
    let mut points = Vec::with_capacity(config.expected_count);

    while points.len() < config.expected_count {
        let point = Point::new(
            rng.gen_range(bounds.min..=bounds.max),
            rng.gen_range(bounds.min..=bounds.max),
        );
        if seen.insert(point) {
            points.push(point);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::validate;

    #[test]
    fn test_reference_points() {
        let points = reference_points();
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], Point::new(400, 150));
        assert_eq!(points[9], Point::new(999, 999));
    }

    #[test]
    fn test_random_sets_validate() {
        let config = PlacementConfig::default();
        let sets = random_point_sets(&config, 20, Some(7));
        assert_eq!(sets.len(), 20);
        for set in &sets {
            assert!(validate(set, &config).is_ok());
        }
    }

    #[test]
    fn test_seed_is_deterministic() {
        let config = PlacementConfig::new(25, 3);
        assert_eq!(
            random_point_sets(&config, 3, Some(42)),
            random_point_sets(&config, 3, Some(42))
        );
    }

    #[test]
    fn test_tiny_bounds_fill_grid() {
        let config = PlacementConfig::new(4, 1).with_bounds(0, 1);
        let sets = random_point_sets(&config, 1, Some(1));
        assert_eq!(sets[0].len(), 4);

        let too_many = PlacementConfig::new(5, 1).with_bounds(0, 1);
        assert!(random_point_sets(&too_many, 1, Some(1)).is_empty());
    }

    #[test]
    fn test_unsupported_bounds_yield_nothing() {
        let wide = PlacementConfig::new(2, 1).with_bounds(i64::MIN, i64::MAX);
        assert!(random_point_sets(&wide, 1, Some(1)).is_empty());

        let reversed = PlacementConfig::new(2, 1).with_bounds(10, 0);
        assert!(random_point_sets(&reversed, 1, Some(1)).is_empty());
    }
}
