// Seam for renderers that consume a placement result

use crate::config::constants::PLOT_AXIS_PADDING;
use crate::models::facility_selection::FacilitySelection;
use crate::models::point::Point;

pub trait Visualizer {
    /// Renders all candidate points with the selected facilities highlighted.
    fn render(&self, points: &[Point], selection: &FacilitySelection) -> String;
}

/// Axis limits of a plot: the data extent padded on every side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotExtent {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl PlotExtent {
    pub fn around(points: &[Point]) -> Self {
        let min_x = points.iter().map(|p| p.x).min().unwrap_or(0);
        let max_x = points.iter().map(|p| p.x).max().unwrap_or(0);
        let min_y = points.iter().map(|p| p.y).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.y).max().unwrap_or(0);

        Self {
            min_x: min_x as f64 - PLOT_AXIS_PADDING as f64,
            max_x: max_x as f64 + PLOT_AXIS_PADDING as f64,
            min_y: min_y as f64 - PLOT_AXIS_PADDING as f64,
            max_y: max_y as f64 + PLOT_AXIS_PADDING as f64,
        }
    }

    /// Position of `point` as fractions in `[0, 1]` of the extent, y upwards.
    pub fn normalize(&self, point: &Point) -> (f64, f64) {
        let fx = (point.x as f64 - self.min_x) / (self.max_x - self.min_x);
        let fy = (point.y as f64 - self.min_y) / (self.max_y - self.min_y);
        (fx, fy)
    }
}
