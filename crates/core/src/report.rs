use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ReportId = Uuid;

/// Issue category a citizen can file a report under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Pothole,
    Garbage,
    Streetlight,
    Drainage,
    Water,
    Noise,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Pothole,
        Category::Garbage,
        Category::Streetlight,
        Category::Drainage,
        Category::Water,
        Category::Noise,
        Category::Other,
    ];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Pothole => write!(f, "pothole"),
            Category::Garbage => write!(f, "garbage"),
            Category::Streetlight => write!(f, "streetlight"),
            Category::Drainage => write!(f, "drainage"),
            Category::Water => write!(f, "water"),
            Category::Noise => write!(f, "noise"),
            Category::Other => write!(f, "other"),
        }
    }
}

/// Lifecycle state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Pending,
    InProgress,
    Resolved,
    Rejected,
}

impl ReportStatus {
    /// Pending and in-progress reports are still open on the ground.
    pub fn is_active(self) -> bool {
        matches!(self, ReportStatus::Pending | ReportStatus::InProgress)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Pending => write!(f, "pending"),
            ReportStatus::InProgress => write!(f, "in_progress"),
            ReportStatus::Resolved => write!(f, "resolved"),
            ReportStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A geotagged issue report as delivered by the data-access layer.
///
/// Coordinates are decimal degrees. Reports without coordinates never reach
/// this type; the source drops them while decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoReport {
    pub id: ReportId,
    pub latitude: f64,
    pub longitude: f64,
    pub category: Category,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
    #[serde(default)]
    pub upvotes: u32,
    #[serde(default)]
    pub downvotes: u32,
}

impl GeoReport {
    /// Build a fresh pending report with no votes.
    pub fn new(category: Category, latitude: f64, longitude: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            latitude,
            longitude,
            category,
            created_at: Utc::now(),
            status: ReportStatus::Pending,
            upvotes: 0,
            downvotes: 0,
        }
    }

    pub fn with_status(mut self, status: ReportStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_votes(mut self, upvotes: u32, downvotes: u32) -> Self {
        self.upvotes = upvotes;
        self.downvotes = downvotes;
        self
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Finite coordinates inside latitude [-90, 90] and longitude [-180, 180].
    pub fn has_valid_coordinates(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Active and geographically valid: the only reports the heat map considers.
    pub fn is_eligible(&self) -> bool {
        self.is_active() && self.has_valid_coordinates()
    }
}
