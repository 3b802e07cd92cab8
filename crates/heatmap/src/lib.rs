//! Spatial clustering of geotagged issue reports for the heat map.
//!
//! All distances are meters. Every function here is pure: it reads the
//! reports it is given and returns a freshly derived view.

pub mod algorithms;
pub mod engine;
pub mod hotspots;
pub mod stats;

pub use algorithms::cluster::{cluster_reports, cluster_reports_with, Cluster, ClusterParams};
pub use algorithms::duplicates::{count_duplicates, find_nearby_duplicates};
pub use algorithms::geo::{distance_meters, EARTH_RADIUS_M};
pub use algorithms::intensity::intensity;
pub use engine::{HeatmapEngine, HeatmapSnapshot};
pub use hotspots::{heat_points, rank_hotspots, HeatPoint};
pub use stats::{calculate_heatmap_stats, calculate_heatmap_stats_with, HeatmapStats};
