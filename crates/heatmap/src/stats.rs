use std::collections::BTreeMap;

use civic_core::config::HeatmapConfig;
use civic_core::Category;
use civic_core::GeoReport;
use serde::{Deserialize, Serialize};

use crate::algorithms::cluster::{cluster_reports_with, Cluster, ClusterParams};
use crate::algorithms::eligible_reports;
use crate::hotspots::rank_hotspots;

/// Summary panel figures for the heat map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapStats {
    pub total_reports: usize,
    pub category_breakdown: BTreeMap<Category, usize>,
    /// Clusters above the high-priority intensity, hottest first.
    pub high_priority_areas: Vec<Cluster>,
    pub total_clusters: usize,
    /// Reports per cluster to one decimal place, `"0"` when there are no clusters.
    pub avg_reports_per_cluster: String,
}

impl HeatmapStats {
    pub fn empty() -> Self {
        Self {
            total_reports: 0,
            category_breakdown: BTreeMap::new(),
            high_priority_areas: Vec::new(),
            total_clusters: 0,
            avg_reports_per_cluster: "0".to_string(),
        }
    }
}

/// Heat-map statistics with the default radii and thresholds.
pub fn calculate_heatmap_stats(reports: &[GeoReport]) -> HeatmapStats {
    calculate_heatmap_stats_with(reports, &HeatmapConfig::default())
}

/// Heat-map statistics over the eligible subset of `reports`.
pub fn calculate_heatmap_stats_with(reports: &[GeoReport], cfg: &HeatmapConfig) -> HeatmapStats {
    let clusters = cluster_reports_with(reports, &ClusterParams::from(cfg));
    stats_from_clusters(reports, &clusters, cfg)
}

/// Build stats from clusters already computed over the same `reports`.
pub(crate) fn stats_from_clusters(
    reports: &[GeoReport],
    clusters: &[Cluster],
    cfg: &HeatmapConfig,
) -> HeatmapStats {
    let eligible = eligible_reports(reports);
    if eligible.is_empty() {
        return HeatmapStats::empty();
    }

    let mut category_breakdown = BTreeMap::new();
    for report in &eligible {
        *category_breakdown.entry(report.category).or_insert(0) += 1;
    }

    let hot: Vec<Cluster> = clusters
        .iter()
        .filter(|c| c.intensity > cfg.high_priority_intensity)
        .cloned()
        .collect();
    let high_priority_areas = rank_hotspots(&hot, cfg.high_priority_limit);

    let avg_reports_per_cluster = if clusters.is_empty() {
        "0".to_string()
    } else {
        // Ties round away from zero, as the app's one-decimal display does.
        let avg = eligible.len() as f64 / clusters.len() as f64;
        format!("{:.1}", (avg * 10.0).round() / 10.0)
    };

    HeatmapStats {
        total_reports: eligible.len(),
        category_breakdown,
        high_priority_areas,
        total_clusters: clusters.len(),
        avg_reports_per_cluster,
    }
}
