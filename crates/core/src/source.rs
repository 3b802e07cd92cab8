//! Report-fetch seam between the data-access layer and the heat map.
//!
//! The heat map never talks to a backend itself. Callers hand it whatever a
//! [`ReportSource`] returns; backend failures surface here as [`CivicError`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::Result;
use crate::report::{Category, GeoReport, ReportId, ReportStatus};

/// Anything that can produce the current set of geotagged reports.
pub trait ReportSource {
    /// Fetch every report the source knows about, including resolved ones.
    fn fetch_reports(&self) -> Result<Vec<GeoReport>>;

    /// Reports suitable for the heat map: active status, usable coordinates.
    fn fetch_heatmap_reports(&self) -> Result<Vec<GeoReport>> {
        let all = self.fetch_reports()?;
        let total = all.len();
        let eligible: Vec<GeoReport> = all.into_iter().filter(GeoReport::is_eligible).collect();
        debug!(total, eligible = eligible.len(), "filtered heatmap reports");
        Ok(eligible)
    }
}

/// Row shape as exported by the backend: coordinates may be null.
#[derive(Debug, Deserialize)]
struct ReportRow {
    id: ReportId,
    latitude: Option<f64>,
    longitude: Option<f64>,
    category: Category,
    created_at: DateTime<Utc>,
    status: ReportStatus,
    #[serde(default)]
    upvotes: u32,
    #[serde(default)]
    downvotes: u32,
}

impl ReportRow {
    fn into_report(self) -> Option<GeoReport> {
        Some(GeoReport {
            id: self.id,
            latitude: self.latitude?,
            longitude: self.longitude?,
            category: self.category,
            created_at: self.created_at,
            status: self.status,
            upvotes: self.upvotes,
            downvotes: self.downvotes,
        })
    }
}

/// Parse a JSON array of report rows, dropping rows without coordinates.
pub fn parse_reports_json(json: &str) -> Result<Vec<GeoReport>> {
    let rows: Vec<ReportRow> = serde_json::from_str(json)?;
    let total = rows.len();
    let reports: Vec<GeoReport> = rows.into_iter().filter_map(ReportRow::into_report).collect();
    if reports.len() < total {
        debug!(dropped = total - reports.len(), "dropped reports without coordinates");
    }
    Ok(reports)
}

/// Reads a JSON export of the reports table from disk on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSource for JsonFileSource {
    fn fetch_reports(&self) -> Result<Vec<GeoReport>> {
        let raw = fs::read_to_string(&self.path)?;
        let reports = parse_reports_json(&raw)?;
        info!(path = %self.path.display(), count = reports.len(), "loaded reports");
        Ok(reports)
    }
}
