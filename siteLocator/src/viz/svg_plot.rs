use std::fmt::Write;

use crate::config::constants::{SVG_MARGIN, SVG_PLOT_SIZE};
use crate::models::facility_selection::FacilitySelection;
use crate::models::point::Point;
use crate::utils::logging::{self, OperationCategory};
use crate::utils::traits::{PlotExtent, Visualizer};

const POINT_COLOR: &str = "blue";
const FACILITY_COLOR: &str = "red";
const STAR_OUTER_RADIUS: f64 = 9.0;
const STAR_INNER_RADIUS: f64 = 4.0;

/// Scatter plot as a standalone SVG document: blue dots for candidate points,
/// red labelled stars for facilities.
#[derive(Debug, Clone, Copy)]
pub struct SvgPlot {
    pub size: f64,
    pub margin: f64,
}

impl Default for SvgPlot {
    fn default() -> Self {
        Self {
            size: SVG_PLOT_SIZE,
            margin: SVG_MARGIN,
        }
    }
}

impl SvgPlot {
    fn to_canvas(&self, extent: &PlotExtent, point: &Point) -> (f64, f64) {
        let (fx, fy) = extent.normalize(point);
        let inner = self.size - 2.0 * self.margin;
        (self.margin + fx * inner, self.margin + (1.0 - fy) * inner)
    }

    fn star_path(cx: f64, cy: f64) -> String {
        let vertices: Vec<String> = (0..10)
            .map(|i| {
                let radius = if i % 2 == 0 { STAR_OUTER_RADIUS } else { STAR_INNER_RADIUS };
                let angle = std::f64::consts::PI / 5.0 * i as f64 - std::f64::consts::FRAC_PI_2;
                format!("{:.2},{:.2}", cx + radius * angle.cos(), cy + radius * angle.sin())
            })
            .collect();
        vertices.join(" ")
    }
}

impl Visualizer for SvgPlot {
    fn render(&self, points: &[Point], selection: &FacilitySelection) -> String {
        let _timing = logging::start_timing("svg_plot", OperationCategory::Rendering);

        let extent = PlotExtent::around(points);
        let mut out = String::new();

        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{0}" height="{0}" viewBox="0 0 {0} {0}">"#,
            self.size
        );
        let _ = writeln!(out, r#"  <rect width="100%" height="100%" fill="white"/>"#);
        let _ = writeln!(
            out,
            r#"  <rect x="{0}" y="{0}" width="{1}" height="{1}" fill="none" stroke="lightgray"/>"#,
            self.margin,
            self.size - 2.0 * self.margin
        );
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{}" font-size="14" text-anchor="middle">Candidate Sites with Facilities</text>"#,
            self.size / 2.0,
            self.margin / 2.0
        );

        for point in points {
            let (cx, cy) = self.to_canvas(&extent, point);
            let _ = writeln!(
                out,
                r#"  <circle cx="{:.2}" cy="{:.2}" r="4" fill="{}"><title>{}</title></circle>"#,
                cx, cy, POINT_COLOR, point
            );
        }

        for (i, point) in selection.points().iter().enumerate() {
            let (cx, cy) = self.to_canvas(&extent, point);
            let _ = writeln!(
                out,
                r#"  <polygon class="facility" points="{}" fill="{}"/>"#,
                Self::star_path(cx, cy),
                FACILITY_COLOR
            );
            let _ = writeln!(
                out,
                r#"  <text x="{:.2}" y="{:.2}" font-size="8" text-anchor="middle" fill="{}">Facility {}</text>"#,
                cx,
                cy - STAR_OUTER_RADIUS - 2.0,
                FACILITY_COLOR,
                i + 1
            );
        }

        let _ = writeln!(out, "</svg>");
        out
    }
}
