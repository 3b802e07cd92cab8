pub mod cluster;
pub mod duplicates;
pub mod geo;
pub mod intensity;

use civic_core::GeoReport;
use tracing::warn;

/// Keep active reports with usable coordinates, in input order.
///
/// Malformed coordinates should have been filtered upstream; anything that
/// slips through is dropped here so NaN never reaches the distance math.
pub fn eligible_reports(reports: &[GeoReport]) -> Vec<&GeoReport> {
    reports
        .iter()
        .filter(|r| {
            if !r.has_valid_coordinates() {
                warn!(
                    report_id = %r.id,
                    latitude = r.latitude,
                    longitude = r.longitude,
                    "dropping report with invalid coordinates"
                );
                return false;
            }
            r.is_active()
        })
        .collect()
}
