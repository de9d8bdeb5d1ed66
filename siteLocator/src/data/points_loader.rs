use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;
use serde::Deserialize;
use tracing::info;

use crate::models::point::Point;
use crate::utils::logging::{self, OperationCategory, FileIOType};

#[derive(Debug)]
pub enum PointsLoadError {
    IoError(std::io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
    UnsupportedFormat(String),
    InvalidRow(String),
}

impl From<std::io::Error> for PointsLoadError {
    fn from(err: std::io::Error) -> Self {
        PointsLoadError::IoError(err)
    }
}

impl From<csv::Error> for PointsLoadError {
    fn from(err: csv::Error) -> Self {
        PointsLoadError::CsvError(err)
    }
}

impl From<serde_json::Error> for PointsLoadError {
    fn from(err: serde_json::Error) -> Self {
        PointsLoadError::JsonError(err)
    }
}

impl std::fmt::Display for PointsLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PointsLoadError::IoError(e) => write!(f, "IO error: {}", e),
            PointsLoadError::CsvError(e) => write!(f, "CSV error: {}", e),
            PointsLoadError::JsonError(e) => write!(f, "JSON error: {}", e),
            PointsLoadError::UnsupportedFormat(s) => write!(f, "Unsupported points file format: {}", s),
            PointsLoadError::InvalidRow(s) => write!(f, "Invalid point row: {}", s),
        }
    }
}

impl std::error::Error for PointsLoadError {}

#[derive(Debug, Deserialize)]
struct PointRecord {
    x: i64,
    y: i64,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PointsDocument {
    Bare(Vec<Point>),
    Wrapped { points: Vec<Point> },
}

/// Loads points from `.csv` or `.json`, chosen by extension.
pub fn load_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, PointsLoadError> {
    let _timing = logging::start_timing("load_points",
        OperationCategory::FileIO { subcategory: FileIOType::PointsLoad });

    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    let points = match extension.as_str() {
        "csv" => read_points_csv(File::open(path)?)?,
        "json" => read_points_json(BufReader::new(File::open(path)?))?,
        other => return Err(PointsLoadError::UnsupportedFormat(
            if other.is_empty() { path.display().to_string() } else { other.to_string() }
        )),
    };

    info!(path = %path.display(), count = points.len(), "Loaded points");
    Ok(points)
}

/// Reads an `x,y` CSV with a header row. Row order is preserved.
pub fn read_points_csv<R: Read>(reader: R) -> Result<Vec<Point>, PointsLoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut points = Vec::new();
    for (row, result) in csv_reader.deserialize::<PointRecord>().enumerate() {
        let record = result.map_err(|e| {
            PointsLoadError::InvalidRow(format!("row {}: {}", row + 1, e))
        })?;
        points.push(Point::new(record.x, record.y));
    }
    Ok(points)
}

/// Accepts `[[x, y], ...]` or `{"points": [[x, y], ...]}`.
pub fn read_points_json<R: Read>(reader: R) -> Result<Vec<Point>, PointsLoadError> {
    let document: PointsDocument = serde_json::from_reader(reader)?;
    Ok(match document {
        PointsDocument::Bare(points) => points,
        PointsDocument::Wrapped { points } => points,
    })
}
