use std::collections::HashSet;

use civic_core::Category;
use civic_heatmap::{cluster_reports, distance_meters};

use crate::helpers::{report, scatter};

#[test]
fn pothole_pair_and_distant_singleton() {
    let reports = vec![
        report(1, Category::Pothole, 12.9716, 77.5946),
        report(2, Category::Pothole, 12.97161, 77.59461),
        report(3, Category::Pothole, 13.0, 77.6),
    ];

    let clusters = cluster_reports(&reports, 20.0);

    assert_eq!(clusters.len(), 2);
    assert_eq!(clusters[0].members, vec![reports[0].clone(), reports[1].clone()]);
    assert_eq!(clusters[1].members, vec![reports[2].clone()]);
    assert!(distance_meters(12.9716, 77.5946, 13.0, 77.6) > 3_000.0);
}

#[test]
fn clusters_partition_the_eligible_reports() {
    for seed in [1, 7, 42, 2025] {
        let reports = scatter(120, seed);
        let eligible: HashSet<_> = reports
            .iter()
            .filter(|r| r.is_eligible())
            .map(|r| r.id)
            .collect();

        let clusters = cluster_reports(&reports, 20.0);

        let mut seen = HashSet::new();
        for cluster in &clusters {
            for member in &cluster.members {
                assert!(seen.insert(member.id), "report {} in two clusters", member.id);
            }
        }
        assert_eq!(seen, eligible, "seed {seed}");
    }
}

#[test]
fn every_cluster_is_category_pure() {
    let clusters = cluster_reports(&scatter(150, 99), 20.0);
    assert!(!clusters.is_empty());
    for cluster in &clusters {
        assert!(cluster.members.iter().all(|m| m.category == cluster.category));
    }
}

#[test]
fn members_lie_within_radius_of_the_seed() {
    let clusters = cluster_reports(&scatter(150, 5), 20.0);
    for cluster in &clusters {
        let seed = &cluster.members[0];
        for m in &cluster.members[1..] {
            let d = distance_meters(seed.latitude, seed.longitude, m.latitude, m.longitude);
            assert!(d <= 20.0, "member {d:.2} m from seed");
        }
    }
}

#[test]
fn intensity_stays_in_unit_interval() {
    let mut reports = scatter(200, 3);
    for r in reports.iter_mut() {
        r.upvotes *= 50;
    }
    for cluster in cluster_reports(&reports, 20.0) {
        assert!((0.0..=1.0).contains(&cluster.intensity));
    }
}

#[test]
fn adding_a_member_never_lowers_intensity() {
    let mut reports = vec![report(1, Category::Garbage, 12.0, 77.0)];
    let mut prev = cluster_reports(&reports, 20.0)[0].intensity;
    for n in 2..15u128 {
        reports.push(report(n, Category::Garbage, 12.0, 77.0));
        let clusters = cluster_reports(&reports, 20.0);
        assert_eq!(clusters.len(), 1);
        assert!(clusters[0].intensity >= prev);
        prev = clusters[0].intensity;
    }
    assert_eq!(prev, 0.5 + 0.2);
}
