use std::fmt;

use serde::{Deserialize, Serialize};

/// A candidate site on the integer grid.
///
/// Coordinates are signed so that out-of-range input survives loading and is
/// rejected by validation rather than clamped. Serialized as an `[x, y]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(i64, i64)", into = "(i64, i64)")]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<(i64, i64)> for Point {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (i64, i64) {
    fn from(point: Point) -> Self {
        (point.x, point.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Builds a point list from coordinate pairs.
pub fn points_from_pairs(pairs: &[(i64, i64)]) -> Vec<Point> {
    pairs.iter().copied().map(Point::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_345() {
        let a = Point::new(0, 0);
        let b = Point::new(3, 4);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-9);
        assert!((b.distance_to(&a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_at_i64_extremes() {
        let a = Point::new(i64::MIN, 0);
        let b = Point::new(i64::MAX, 0);
        let expected = i64::MAX as f64 - i64::MIN as f64;
        assert_eq!(a.distance_to(&b), expected);
        assert!(a.distance_to(&b).is_finite());
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&Point::new(400, 150)).unwrap();
        assert_eq!(json, "[400,150]");
        let back: Point = serde_json::from_str("[999,998]").unwrap();
        assert_eq!(back, Point::new(999, 998));
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new(10, -2).to_string(), "(10, -2)");
    }
}
