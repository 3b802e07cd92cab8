use std::borrow::Borrow;

use civic_core::GeoReport;
use rayon::prelude::*;

use super::geo::distance_meters;

/// Whether two reports describe the same kind of issue within `radius_m`.
#[inline]
fn is_duplicate_pair(a: &GeoReport, b: &GeoReport, radius_m: f64) -> bool {
    a.category == b.category
        && distance_meters(a.latitude, a.longitude, b.latitude, b.longitude) <= radius_m
}

#[inline]
fn as_report<R: Borrow<GeoReport>>(r: &R) -> &GeoReport {
    <R as Borrow<GeoReport>>::borrow(r)
}

/// For each report, count the *other* reports of the same category within
/// `radius_m` meters.
///
/// The output is index-aligned with `reports`. The pairwise scan is O(n²)
/// and runs on the rayon pool; ordering of the result does not depend on
/// scheduling.
pub fn count_duplicates<R>(reports: &[R], radius_m: f64) -> Vec<usize>
where
    R: Borrow<GeoReport> + Sync,
{
    reports
        .par_iter()
        .enumerate()
        .map(|(i, report)| {
            let report = as_report(report);
            reports
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && is_duplicate_pair(report, as_report(other), radius_m))
                .count()
        })
        .collect()
}

/// Existing active reports that a prospective new report would duplicate.
///
/// Used at submission time to warn the reporter before a near-identical
/// issue is filed. Results are sorted nearest first.
pub fn find_nearby_duplicates<'a>(
    candidate: &GeoReport,
    reports: &'a [GeoReport],
    radius_m: f64,
) -> Vec<&'a GeoReport> {
    if !candidate.has_valid_coordinates() {
        return Vec::new();
    }

    let mut nearby: Vec<(f64, &GeoReport)> = reports
        .iter()
        .filter(|r| r.id != candidate.id && r.is_eligible() && r.category == candidate.category)
        .map(|r| {
            let d = distance_meters(candidate.latitude, candidate.longitude, r.latitude, r.longitude);
            (d, r)
        })
        .filter(|(d, _)| *d <= radius_m)
        .collect();

    nearby.sort_by(|a, b| a.0.total_cmp(&b.0));
    nearby.into_iter().map(|(_, r)| r).collect()
}
