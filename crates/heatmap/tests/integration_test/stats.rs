use civic_core::config::HeatmapConfig;
use civic_core::Category;
use civic_heatmap::{calculate_heatmap_stats, calculate_heatmap_stats_with, HeatmapEngine};

use crate::helpers::{report, scatter};

#[test]
fn empty_report_list_yields_zeroed_stats() {
    let stats = calculate_heatmap_stats(&[]);
    assert_eq!(stats.total_reports, 0);
    assert_eq!(stats.total_clusters, 0);
    assert_eq!(stats.avg_reports_per_cluster, "0");
    assert!(stats.category_breakdown.is_empty());
    assert!(stats.high_priority_areas.is_empty());
}

#[test]
fn breakdown_sums_to_total() {
    let reports = scatter(80, 11);
    let stats = calculate_heatmap_stats(&reports);
    let sum: usize = stats.category_breakdown.values().sum();
    assert_eq!(sum, stats.total_reports);
    assert_eq!(
        stats.total_reports,
        reports.iter().filter(|r| r.is_eligible()).count()
    );
}

#[test]
fn hotspot_surfaces_in_high_priority_areas() {
    let mut reports: Vec<_> = (0..10u128)
        .map(|n| {
            let mut r = report(n + 1, Category::Drainage, 12.9716, 77.5946);
            r.upvotes = 6;
            r
        })
        .collect();
    reports.push(report(100, Category::Noise, 13.5, 77.0));

    let stats = calculate_heatmap_stats(&reports);
    assert_eq!(stats.high_priority_areas.len(), 1);
    assert_eq!(stats.high_priority_areas[0].category, Category::Drainage);
    assert_eq!(stats.high_priority_areas[0].intensity, 1.0);
    assert_eq!(stats.avg_reports_per_cluster, "5.5");
}

#[test]
fn stats_serialize_with_category_keys() {
    let reports = vec![report(1, Category::Streetlight, 12.0, 77.0)];
    let stats = calculate_heatmap_stats(&reports);
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["category_breakdown"]["streetlight"], 1);
    assert_eq!(json["avg_reports_per_cluster"], "1.0");
}

#[test]
fn engine_snapshot_uses_configured_threshold() {
    let reports: Vec<_> = (0..4u128)
        .map(|n| report(n + 1, Category::Water, 12.0, 77.0))
        .collect();
    // 4 members, 12 duplicates: 0.5 * 0.4 + 0.2 * 1.0 = 0.4
    let cfg = HeatmapConfig {
        high_priority_intensity: 0.3,
        ..HeatmapConfig::default()
    };
    let snapshot = HeatmapEngine::new(cfg.clone()).run(&reports);
    assert_eq!(snapshot.stats.high_priority_areas.len(), 1);
    assert_eq!(snapshot.stats, calculate_heatmap_stats_with(&reports, &cfg));
    assert!(calculate_heatmap_stats(&reports).high_priority_areas.is_empty());
}
