use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::constants::{
    COORDINATE_LIMIT, COORDINATE_MAX, COORDINATE_MIN, DEFAULT_EXPECTED_COUNT, DEFAULT_FACILITY_COUNT,
};
use crate::models::placement_error::PlacementError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateBounds {
    pub min: i64,
    pub max: i64,
}

impl CoordinateBounds {
    pub fn contains(&self, value: i64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Bounds must be ordered and within `[-COORDINATE_LIMIT, COORDINATE_LIMIT]`
    /// so that spans and plot padding never overflow.
    pub fn check(&self) -> Result<(), PlacementError> {
        let limit = -COORDINATE_LIMIT..=COORDINATE_LIMIT;
        if self.min > self.max || !limit.contains(&self.min) || !limit.contains(&self.max) {
            return Err(PlacementError::BoundsError { min: self.min, max: self.max });
        }
        Ok(())
    }

    /// Number of grid values on one axis.
    pub fn span(&self) -> u64 {
        (self.max as i128 - self.min as i128 + 1).clamp(0, u64::MAX as i128) as u64
    }
}

impl Default for CoordinateBounds {
    fn default() -> Self {
        Self {
            min: COORDINATE_MIN,
            max: COORDINATE_MAX,
        }
    }
}

/// Parameters of one placement run.
///
/// The defaults reproduce the reference behaviour: ten candidate points in
/// `[0, 999]` on both axes, two facilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    pub expected_count: usize,
    pub facility_count: usize,
    pub bounds: CoordinateBounds,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            expected_count: DEFAULT_EXPECTED_COUNT,
            facility_count: DEFAULT_FACILITY_COUNT,
            bounds: CoordinateBounds::default(),
        }
    }
}

impl PlacementConfig {
    pub fn new(expected_count: usize, facility_count: usize) -> Self {
        Self {
            expected_count,
            facility_count,
            ..Self::default()
        }
    }

    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.bounds = CoordinateBounds { min, max };
        self
    }

    /// Loads a config from a JSON file. Missing fields fall back to defaults;
    /// bounds outside the supported range are rejected.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open config file {}", path.display()))?;
        let config: Self = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.bounds.check()
            .with_context(|| format!("Invalid bounds in config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_reference() {
        let config = PlacementConfig::default();
        assert_eq!(config.expected_count, 10);
        assert_eq!(config.facility_count, 2);
        assert_eq!(config.bounds, CoordinateBounds { min: 0, max: 999 });
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PlacementConfig = serde_json::from_str(r#"{"facility_count": 3}"#).unwrap();
        assert_eq!(config.expected_count, 10);
        assert_eq!(config.facility_count, 3);
        assert_eq!(config.bounds.max, 999);
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = CoordinateBounds::default();
        assert!(bounds.contains(0));
        assert!(bounds.contains(999));
        assert!(!bounds.contains(-1));
        assert!(!bounds.contains(1000));
    }

    #[test]
    fn test_bounds_check() {
        assert!(CoordinateBounds::default().check().is_ok());
        assert!(CoordinateBounds { min: -COORDINATE_LIMIT, max: COORDINATE_LIMIT }.check().is_ok());
        assert!(CoordinateBounds { min: 5, max: 5 }.check().is_ok());

        for (min, max) in [(10, 0), (i64::MIN, i64::MAX), (0, COORDINATE_LIMIT + 1), (-COORDINATE_LIMIT - 1, 0)] {
            assert_eq!(
                CoordinateBounds { min, max }.check().unwrap_err(),
                PlacementError::BoundsError { min, max }
            );
        }
    }

    #[test]
    fn test_demo_config_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos").join("square_config.json");
        let config = PlacementConfig::from_json_file(path).unwrap();
        assert_eq!(config, PlacementConfig::new(4, 2));
    }

    #[test]
    fn test_span() {
        assert_eq!(CoordinateBounds::default().span(), 1000);
        assert_eq!(CoordinateBounds { min: 3, max: 2 }.span(), 0);
        assert_eq!(CoordinateBounds { min: i64::MIN, max: i64::MAX }.span(), u64::MAX);
    }

    #[test]
    fn test_json_file_with_extreme_bounds_rejected() {
        let dir = std::env::temp_dir().join(format!("facility_siting_config_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("wide.json");
        let json = format!(
            r#"{{"expected_count": 2, "facility_count": 1, "bounds": {{"min": {}, "max": {}}}}}"#,
            i64::MIN, i64::MAX
        );
        std::fs::write(&path, json).unwrap();
        assert!(PlacementConfig::from_json_file(&path).is_err());

        let good = dir.join("square.json");
        std::fs::write(&good, r#"{"expected_count": 4, "bounds": {"min": 0, "max": 10}}"#).unwrap();
        let config = PlacementConfig::from_json_file(&good).unwrap();
        assert_eq!(config.expected_count, 4);
        assert_eq!(config.bounds, CoordinateBounds { min: 0, max: 10 });

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
