use std::fs;

use civic_core::config::IntentConfig;
use civic_intent::{
    CorrectionRule, CorrectionTable, IntentResolver, MatchedField, Resolution, ResolverConfig,
};
use tempfile::TempDir;

use crate::helpers::{fixture_resolver, FIXTURE_YAML};

#[test]
fn verbatim_keyword_matches_fixture_intent() {
    let r = fixture_resolver();
    let m = r.resolve_intent("water tanker").expect("match");
    assert_eq!(m.intent.id, "water_tanker");
    assert_eq!(m.intent.route(), Some("/water/tanker"));
    assert_eq!(m.confidence, 100);
    assert_eq!(m.matched_field, MatchedField::Keywords);
}

#[test]
fn weak_match_is_ambiguous_not_committed() {
    let r = fixture_resolver();
    // Three edits over eleven characters: score sqrt(3/11) ~ 0.52.
    assert!(r.resolve_intent("water bunkr").is_none());

    match r.resolve("water bunkr") {
        Resolution::Ambiguous { candidates } => {
            assert_eq!(candidates.len(), 1);
            assert_eq!(candidates[0].intent.id, "water_tanker");
            assert_eq!(candidates[0].confidence, 48);
        }
        other => panic!("expected ambiguous, got {other:?}"),
    }
}

#[test]
fn lower_floor_commits_weak_match() {
    let r = fixture_resolver().with_config(ResolverConfig {
        confidence_floor: 40,
        ..ResolverConfig::default()
    });
    let m = r.resolve_intent("water bunkr").expect("match");
    assert_eq!(m.intent.id, "water_tanker");
}

#[test]
fn injected_corrections_replace_builtin_table() {
    let r = fixture_resolver().with_corrections(CorrectionTable::new(vec![
        CorrectionRule::new("tank", "water tanker"),
    ]));
    assert_eq!(r.normalize("Tank"), "water tanker");
    assert_eq!(r.resolve_intent("TANK").unwrap().intent.id, "water_tanker");
}

#[test]
fn resolution_serializes_with_kind_tag() {
    let r = fixture_resolver();
    let json = serde_json::to_value(r.resolve("helpline")).unwrap();
    assert_eq!(json["kind"], "matched");
    assert_eq!(json["intent"]["id"], "helpline");
    assert_eq!(json["intent"]["action"], "call_helpline");
    assert_eq!(json["confidence"], 100);

    let json = serde_json::to_value(r.resolve("")).unwrap();
    assert_eq!(json["kind"], "no_match");
}

#[test]
fn from_config_loads_catalog_path() {
    let dir = TempDir::new().expect("create tempdir");
    let path = dir.path().join("intents.yaml");
    fs::write(&path, FIXTURE_YAML).unwrap();

    let cfg = IntentConfig {
        catalog_path: Some(path),
        suggestion_limit: 1,
        ..IntentConfig::default()
    };
    let r = IntentResolver::from_config(&cfg).unwrap();
    assert_eq!(r.catalog().len(), 3);
    assert_eq!(r.config().suggestion_limit, 1);
    assert!(r.catalog().get("pay_tax").is_some());
}

#[test]
fn from_config_without_path_uses_builtin() {
    let r = IntentResolver::from_config(&IntentConfig::default()).unwrap();
    assert!(r.catalog().get("report_issue").is_some());
}
