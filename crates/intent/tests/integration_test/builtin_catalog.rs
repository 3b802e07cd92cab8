use civic_intent::{IntentEffect, Resolution};

use crate::helpers::builtin_resolver;

#[test]
fn nonsense_is_rejected() {
    let r = builtin_resolver();
    assert!(r.resolve_intent("asdkjhasdkjh nonsense").is_none());
}

#[test]
fn empty_transcript_is_rejected() {
    let r = builtin_resolver();
    assert!(r.resolve_intent("").is_none());
    assert_eq!(r.resolve("  "), Resolution::NoMatch);
}

#[test]
fn every_keyword_resolves_to_its_own_intent() {
    let r = builtin_resolver();
    for intent in r.catalog().intents() {
        for kw in &intent.keywords {
            assert_eq!(r.normalize(kw), *kw, "keyword '{kw}' is rewritten by normalization");
            let m = r
                .resolve_intent(kw)
                .unwrap_or_else(|| panic!("keyword '{kw}' did not resolve"));
            assert_eq!(m.intent.id, intent.id, "keyword '{kw}'");
            assert!(m.confidence >= 65);
        }
    }
}

#[test]
fn take_me_to_safety_chains_through_navigate() {
    let r = builtin_resolver();
    assert_eq!(r.normalize("Take me to safety"), "safety");

    let m = r.resolve_intent("Take me to safety").expect("match");
    assert_eq!(m.intent.id, "safety");
    assert_eq!(m.intent.effect, IntentEffect::Route("/safety".into()));
    assert_eq!(m.normalized_transcript, "safety");
}

#[test]
fn navigation_prefix_does_not_hide_the_target() {
    let r = builtin_resolver();
    let m = r.resolve_intent("take me to the heat map").expect("match");
    assert_eq!(m.normalized_transcript, "navigate heat map");
    assert_eq!(m.intent.id, "heatmap");
}

#[test]
fn keyword_inside_another_word_is_not_a_match() {
    let r = builtin_resolver();
    assert!(r.resolve_intent("homework help").is_none());
    assert!(r
        .rank_candidates("homework help", 3)
        .iter()
        .all(|m| m.intent.id != "home" || m.confidence < 65));

    // The same keyword spoken as its own word still commits.
    let m = r.resolve_intent("go home").expect("match");
    assert_eq!(m.intent.id, "home");
    assert_eq!(m.confidence, 100);
}

#[test]
fn misheard_words_are_corrected() {
    let r = builtin_resolver();
    assert_eq!(r.resolve_intent("Report a pot hole").unwrap().intent.id, "report_issue");
    assert_eq!(r.resolve_intent("pay my electric city bill").unwrap().intent.id, "bill_payment");
    assert_eq!(r.resolve_intent("S O S").unwrap().intent.id, "sos");
    assert_eq!(r.resolve_intent("is this a skam").unwrap().intent.id, "scam_check");
}

#[test]
fn small_typos_still_resolve() {
    let r = builtin_resolver();
    let m = r.resolve_intent("governmant schemes").expect("match");
    assert_eq!(m.intent.id, "schemes");
    assert!(m.confidence >= 65 && m.confidence < 100);

    let m = r.resolve_intent("electricty bill").expect("match");
    assert_eq!(m.intent.id, "bill_payment");
}

#[test]
fn actions_and_inform_intents() {
    let r = builtin_resolver();
    let sos = r.resolve_intent("this is an emergency").unwrap();
    assert_eq!(sos.intent.action(), Some("trigger_sos"));

    let help = r.resolve_intent("list voice commands").unwrap();
    assert_eq!(help.intent.effect, IntentEffect::Inform);
}

#[test]
fn ranked_candidates_are_sorted_and_capped() {
    let r = builtin_resolver();
    let ranked = r.rank_candidates("bill", 3);
    assert!(!ranked.is_empty() && ranked.len() <= 3);
    assert_eq!(ranked[0].intent.id, "bill_payment");
    assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    assert!(ranked.iter().all(|m| m.score < 0.6 && m.confidence > 40));
    assert!(r.rank_candidates("bill", 1).len() == 1);
}

#[test]
fn resolver_is_shareable_across_threads() {
    let r = builtin_resolver();
    let phrases = ["take me to safety", "pay bill", "report a pothole", "nonsense words"];
    let expected: Vec<Option<String>> = phrases
        .iter()
        .map(|p| r.resolve_intent(p).map(|m| m.intent.id.clone()))
        .collect();

    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                let got: Vec<Option<String>> = phrases
                    .iter()
                    .map(|p| r.resolve_intent(p).map(|m| m.intent.id.clone()))
                    .collect();
                assert_eq!(got, expected);
            });
        }
    });
}
