use chrono::{TimeZone, Utc};
use uuid::Uuid;

use civic_core::{Category, GeoReport, ReportStatus};

/// Report with a fixed id so assertions can name it.
pub fn report(n: u128, category: Category, lat: f64, lon: f64) -> GeoReport {
    GeoReport {
        id: Uuid::from_u128(n),
        latitude: lat,
        longitude: lon,
        category,
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
        status: ReportStatus::Pending,
        upvotes: 0,
        downvotes: 0,
    }
}

/// Deterministic scatter of reports around a city center.
///
/// Small linear congruential generator; no randomness between runs.
pub fn scatter(count: usize, seed: u64) -> Vec<GeoReport> {
    let mut state = seed;
    let mut next = move || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let statuses = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Pending,
        ReportStatus::Resolved,
    ];

    (0..count)
        .map(|i| {
            let category = Category::ALL[(next() * 3.0) as usize % 3];
            // ~0.0005 degrees is ~55 m, so neighbours overlap often.
            let lat = 12.97 + next() * 0.0005;
            let lon = 77.59 + next() * 0.0005;
            let mut r = report(i as u128 + 1, category, lat, lon);
            r.status = statuses[(next() * 4.0) as usize % 4];
            r.upvotes = (next() * 8.0) as u32;
            r
        })
        .collect()
}
