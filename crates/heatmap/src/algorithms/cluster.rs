use civic_core::config::HeatmapConfig;
use civic_core::{Category, GeoReport};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::duplicates::count_duplicates;
use super::eligible_reports;
use super::geo::distance_meters;
use super::intensity::intensity;

/// Radii used when partitioning reports, in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterParams {
    /// A report joins a seed's cluster when within this distance of the seed.
    pub cluster_radius_m: f64,
    /// Same-category reports within this distance count as duplicates.
    pub duplicate_radius_m: f64,
}

impl Default for ClusterParams {
    fn default() -> Self {
        Self {
            cluster_radius_m: 20.0,
            duplicate_radius_m: 10.0,
        }
    }
}

impl From<&HeatmapConfig> for ClusterParams {
    fn from(cfg: &HeatmapConfig) -> Self {
        Self {
            cluster_radius_m: cfg.cluster_radius_m,
            duplicate_radius_m: cfg.duplicate_radius_m,
        }
    }
}

/// A group of same-category reports around a seed report.
///
/// Derived fresh on every clustering run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    /// Arithmetic mean of member latitudes.
    pub center_latitude: f64,
    /// Arithmetic mean of member longitudes.
    pub center_longitude: f64,
    pub category: Category,
    /// Seed first, then joiners in input order.
    pub members: Vec<GeoReport>,
    /// Mean upvotes across members.
    pub average_upvotes: f64,
    /// Sum of every member's duplicate count.
    pub duplicate_count: usize,
    /// Priority score in [0, 1].
    pub intensity: f64,
}

impl Cluster {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn from_members(members: Vec<GeoReport>, duplicate_count: usize) -> Self {
        let n = members.len() as f64;
        let category = members[0].category;
        let center_latitude = members.iter().map(|r| r.latitude).sum::<f64>() / n;
        let center_longitude = members.iter().map(|r| r.longitude).sum::<f64>() / n;
        let average_upvotes = members.iter().map(|r| r.upvotes as f64).sum::<f64>() / n;
        let intensity = intensity(members.len(), average_upvotes, duplicate_count);

        Self {
            center_latitude,
            center_longitude,
            category,
            members,
            average_upvotes,
            duplicate_count,
            intensity,
        }
    }
}

/// Cluster reports with the given cluster radius and the default duplicate radius.
pub fn cluster_reports(reports: &[GeoReport], cluster_radius_m: f64) -> Vec<Cluster> {
    cluster_reports_with(
        reports,
        &ClusterParams {
            cluster_radius_m,
            ..ClusterParams::default()
        },
    )
}

/// Partition eligible reports into clusters with a single greedy pass.
///
/// Reports are visited in input order. Each report not yet assigned becomes
/// a seed, and every other unassigned report of the same category within
/// `cluster_radius_m` of *the seed* joins it. Clusters are never revisited,
/// so a report close to a member but not to the seed starts its own cluster,
/// and results near cluster boundaries depend on input order. Isolated
/// reports come out as singleton clusters.
///
/// Inactive reports and reports with invalid coordinates are skipped.
/// Duplicate counts are taken over the whole eligible set before grouping.
pub fn cluster_reports_with(reports: &[GeoReport], params: &ClusterParams) -> Vec<Cluster> {
    let eligible = eligible_reports(reports);
    let n = eligible.len();
    if n == 0 {
        return Vec::new();
    }

    let duplicates = count_duplicates(&eligible, params.duplicate_radius_m);

    let mut processed = vec![false; n];
    let mut clusters = Vec::new();

    for seed in 0..n {
        if processed[seed] {
            continue;
        }
        processed[seed] = true;

        let s = eligible[seed];
        let mut member_idx = vec![seed];
        for j in 0..n {
            if processed[j] {
                continue;
            }
            let r = eligible[j];
            if r.category == s.category
                && distance_meters(s.latitude, s.longitude, r.latitude, r.longitude)
                    <= params.cluster_radius_m
            {
                processed[j] = true;
                member_idx.push(j);
            }
        }

        let duplicate_count = member_idx.iter().map(|&i| duplicates[i]).sum();
        let members = member_idx.iter().map(|&i| eligible[i].clone()).collect();
        clusters.push(Cluster::from_members(members, duplicate_count));
    }

    debug!(
        reports = n,
        clusters = clusters.len(),
        radius_m = params.cluster_radius_m,
        "clustered reports"
    );

    clusters
}
