// Module declarations for the facility siting crate

// Placement pipeline: validation, distance matrix, selection
pub mod core {
    pub mod validator;
    pub mod distance_matrix;
    pub mod facility_locator;
    pub mod strategy;
    pub mod placement;
    pub mod batch;
}

// Configuration modules
pub mod config {
    pub mod constants;
    pub mod placement_config;
}

// Model definitions
pub mod models {
    pub mod point;
    pub mod facility_selection;
    pub mod placement_error;
}

// Data loaders
pub mod data {
    pub mod points_loader;
    pub mod reference;
}

// Reporting
pub mod analysis {
    pub mod reporting;
}

// Utility functions
pub mod utils {
    pub mod logging;
    pub mod csv_export;
    pub mod traits;
}

// Renderers for the Visualizer collaborator
pub mod viz {
    pub mod ascii_plot;
    pub mod svg_plot;
}

// CLI interface
pub mod cli {
    pub mod cli;
}

// Re-export commonly used items
pub use crate::config::placement_config::PlacementConfig;
pub use crate::core::placement::{place, place_with, PlacementReport};
pub use crate::core::strategy::{SelectionStrategy, TotalDistanceStrategy};
pub use crate::models::facility_selection::FacilitySelection;
pub use crate::models::placement_error::PlacementError;
pub use crate::models::point::Point;
