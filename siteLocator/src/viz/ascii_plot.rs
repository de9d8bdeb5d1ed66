use std::fmt::Write;

use crate::config::constants::{ASCII_PLOT_HEIGHT, ASCII_PLOT_WIDTH};
use crate::models::facility_selection::FacilitySelection;
use crate::models::point::Point;
use crate::utils::logging::{self, OperationCategory};
use crate::utils::traits::{PlotExtent, Visualizer};

const POINT_MARK: char = 'o';
const FACILITY_MARK: char = '*';

/// Terminal scatter plot. Candidate points are `o`, facilities `*`.
#[derive(Debug, Clone, Copy)]
pub struct AsciiPlot {
    pub width: usize,
    pub height: usize,
}

impl Default for AsciiPlot {
    fn default() -> Self {
        Self {
            width: ASCII_PLOT_WIDTH,
            height: ASCII_PLOT_HEIGHT,
        }
    }
}

impl AsciiPlot {
    fn cell(&self, extent: &PlotExtent, point: &Point) -> (usize, usize) {
        let (fx, fy) = extent.normalize(point);
        let col = (fx * (self.width - 1) as f64).round() as usize;
        let row = ((1.0 - fy) * (self.height - 1) as f64).round() as usize;
        (row.min(self.height - 1), col.min(self.width - 1))
    }
}

impl Visualizer for AsciiPlot {
    fn render(&self, points: &[Point], selection: &FacilitySelection) -> String {
        let _timing = logging::start_timing("ascii_plot", OperationCategory::Rendering);

        let width = self.width.max(2);
        let height = self.height.max(2);
        let plot = AsciiPlot { width, height };
        let extent = PlotExtent::around(points);
        let mut grid = vec![vec![' '; width]; height];

        for point in points {
            let (row, col) = plot.cell(&extent, point);
            if grid[row][col] != FACILITY_MARK {
                grid[row][col] = POINT_MARK;
            }
        }
        for point in selection.points() {
            let (row, col) = plot.cell(&extent, point);
            grid[row][col] = FACILITY_MARK;
        }

        let mut out = String::new();
        let _ = writeln!(out, "Candidate Sites with Facilities");
        let _ = writeln!(out, "+{}+", "-".repeat(width));
        for line in grid {
            let _ = writeln!(out, "|{}|", line.into_iter().collect::<String>());
        }
        let _ = writeln!(out, "+{}+", "-".repeat(width));
        let _ = writeln!(out, "x: {} to {}, y: {} to {}", extent.min_x, extent.max_x, extent.min_y, extent.max_y);
        let _ = writeln!(out, "{} point  {} facility", POINT_MARK, FACILITY_MARK);
        for (i, point) in selection.points().iter().enumerate() {
            let _ = writeln!(out, "Facility {}: {}", i + 1, point);
        }
        out
    }
}
