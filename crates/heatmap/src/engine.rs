use std::time::Instant;

use civic_core::config::HeatmapConfig;
use civic_core::GeoReport;
use serde::Serialize;
use tracing::info;

use crate::algorithms::cluster::{cluster_reports_with, Cluster, ClusterParams};
use crate::hotspots::{heat_points, HeatPoint};
use crate::stats::{stats_from_clusters, HeatmapStats};

/// Everything the heat-map view needs from one refresh.
#[derive(Debug, Clone, Serialize)]
pub struct HeatmapSnapshot {
    pub clusters: Vec<Cluster>,
    pub heat_points: Vec<HeatPoint>,
    pub stats: HeatmapStats,
}

/// Holds heat-map settings; each `run` derives a fresh snapshot.
#[derive(Debug, Clone, Default)]
pub struct HeatmapEngine {
    config: HeatmapConfig,
}

impl HeatmapEngine {
    pub fn new(config: HeatmapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HeatmapConfig {
        &self.config
    }

    /// Cluster once and derive heat points and stats from the same clusters.
    pub fn run(&self, reports: &[GeoReport]) -> HeatmapSnapshot {
        let start = Instant::now();

        let clusters = cluster_reports_with(reports, &ClusterParams::from(&self.config));
        let stats = stats_from_clusters(reports, &clusters, &self.config);
        let heat_points = heat_points(&clusters);

        info!(
            reports = stats.total_reports,
            clusters = stats.total_clusters,
            high_priority = stats.high_priority_areas.len(),
            "heatmap refreshed in {:.1}ms",
            start.elapsed().as_secs_f64() * 1000.0
        );

        HeatmapSnapshot {
            clusters,
            heat_points,
            stats,
        }
    }
}
