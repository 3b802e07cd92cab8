use serde::{Deserialize, Serialize};

use crate::algorithms::cluster::Cluster;

/// A weighted point for a heat-layer renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatPoint {
    pub latitude: f64,
    pub longitude: f64,
    /// Cluster intensity, in [0, 1].
    pub weight: f64,
}

/// One heat point per cluster, placed at the cluster center.
pub fn heat_points(clusters: &[Cluster]) -> Vec<HeatPoint> {
    clusters
        .iter()
        .map(|c| HeatPoint {
            latitude: c.center_latitude,
            longitude: c.center_longitude,
            weight: c.intensity,
        })
        .collect()
}

/// Clusters ordered hottest first, truncated to `limit`.
///
/// Ties on intensity go to the larger cluster, then to input order.
pub fn rank_hotspots(clusters: &[Cluster], limit: usize) -> Vec<Cluster> {
    let mut ranked: Vec<&Cluster> = clusters.iter().collect();
    // sort_by is stable, so equal keys keep input order.
    ranked.sort_by(|a, b| {
        b.intensity
            .total_cmp(&a.intensity)
            .then_with(|| b.len().cmp(&a.len()))
    });
    ranked.into_iter().take(limit).cloned().collect()
}
