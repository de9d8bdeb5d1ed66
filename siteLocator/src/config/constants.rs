// Reference configuration
pub const DEFAULT_EXPECTED_COUNT: usize = 10;     // Number of candidate points per set
pub const DEFAULT_FACILITY_COUNT: usize = 2;      // Number of facilities to place

// Coordinate Bounds (inclusive on both axes)
pub const COORDINATE_MIN: i64 = 0;
pub const COORDINATE_MAX: i64 = 999;
pub const COORDINATE_LIMIT: i64 = i32::MAX as i64;   // Largest magnitude a configured bound may take

// Plot Constants
pub const PLOT_AXIS_PADDING: i64 = 50;            // Padding around the data extent
pub const ASCII_PLOT_WIDTH: usize = 60;
pub const ASCII_PLOT_HEIGHT: usize = 30;
pub const SVG_PLOT_SIZE: f64 = 600.0;             // Square canvas in px
pub const SVG_MARGIN: f64 = 40.0;

// Export Constants
pub const REPORT_FILE_PREFIX: &str = "placement";
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
