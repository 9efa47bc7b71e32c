//! Property checks for plan composition over a fixed corpus of inputs.

use std::collections::HashSet;

use clipplan_core::{
    MAX_HASHTAGS, PlanRequest, catalog, compose_plan, default_tone, resolve_tone,
    select_hashtags, title_case,
};

const NICHES: &[&str] = &[
    "fitness",
    "Home Fitness",
    "beauty routine",
    "tech",
    "foodtech",
    "Travel Europa",
    "street food",
    "fashion",
    "business coaching",
    "educazione finanziaria",
    "giardinaggio",
    "ab",
    "Cucina vegana",
    "MUSICA_LIVE",
];

const TRENDS: &[Option<&str>] = &[
    None,
    Some(""),
    Some("AI Boom"),
    Some("capcut"),
    Some("  Sigma   Grindset "),
    Some("perte"),
];

const TONES: &[Option<&str>] = &[
    None,
    Some("ironico"),
    Some("motivazionale"),
    Some("educativo"),
    Some("dinamico"),
    Some("boh"),
];

fn all_requests() -> Vec<PlanRequest> {
    let mut out = Vec::new();
    for niche in NICHES {
        for trend in TRENDS {
            for tone in TONES {
                out.push(
                    PlanRequest::new(niche, *trend, Some("engagement"), *tone)
                        .expect("corpus niches are valid"),
                );
            }
        }
    }
    out
}

#[test]
fn composition_is_deterministic() {
    for req in all_requests() {
        let a = serde_json::to_vec(&compose_plan(&req)).unwrap();
        let b = serde_json::to_vec(&compose_plan(&req)).unwrap();
        assert_eq!(a, b, "plan differs between runs for {req:?}");
    }
}

#[test]
fn hashtags_are_capped_and_unique() {
    for req in all_requests() {
        let tags = compose_plan(&req).copy.hashtags;
        assert!(tags.len() <= MAX_HASHTAGS, "{} tags for {req:?}", tags.len());
        let unique: HashSet<&String> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len(), "duplicate tags for {req:?}: {tags:?}");
    }
}

#[test]
fn unmatched_niches_use_default_category() {
    let cat = catalog();
    let default_tags = &cat.niche(&cat.default_niche).unwrap().hashtags;
    for niche in ["giardinaggio", "MUSICA_LIVE", "ab", "Cucina vegana"] {
        let tags = select_hashtags(niche, None);
        for tag in default_tags {
            assert!(tags.contains(tag), "{niche:?} should include {tag}");
        }
    }
}

#[test]
fn trend_tags_are_compact_and_lowercase() {
    for trend in ["AI Boom", "  Sigma   Grindset ", "Cap Cut\tEdit", "X"] {
        let tags = select_hashtags("fitness", Some(trend));
        let body: String = trend
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        let plain = format!("#{body}");
        let suffixed = format!("#{body}trend");
        assert!(tags.contains(&plain), "missing {plain} in {tags:?}");
        assert!(tags.contains(&suffixed), "missing {suffixed} in {tags:?}");
        for tag in [&plain, &suffixed] {
            assert!(!tag.chars().any(char::is_whitespace));
            assert_eq!(*tag, tag.to_lowercase());
        }
    }
}

#[test]
fn no_trend_means_no_trend_tags() {
    let cat = catalog();
    let known: HashSet<&String> = cat
        .niches()
        .iter()
        .flat_map(|n| n.hashtags.iter())
        .chain(cat.base_hashtags.iter())
        .collect();
    for niche in NICHES {
        for trend in [None, Some(""), Some("   ")] {
            for tag in select_hashtags(niche, trend) {
                assert!(known.contains(&tag), "unexpected tag {tag} for {niche:?}");
                assert!(!tag.ends_with("trend"), "trend tag {tag} for {niche:?}");
            }
        }
    }
}

#[test]
fn unknown_tones_resolve_to_default() {
    for tone in [None, Some(""), Some("boh"), Some("IRONIC"), Some("serio")] {
        assert_eq!(resolve_tone(tone), default_tone());
    }
}

#[test]
fn title_case_idempotent_over_corpus() {
    for input in NICHES.iter().chain(["AI Boom", "più_follower  oggi", "  ", "ßport", "ﬁtness"].iter()) {
        let once = title_case(input);
        assert_eq!(title_case(&once), once, "input {input:?}");
    }
}

#[test]
fn plan_shape_is_fixed() {
    for req in all_requests() {
        let plan = compose_plan(&req);
        assert_eq!(plan.script.movements.len(), 3);
        assert_eq!(plan.script.on_screen_text.len(), 3);
        assert_eq!(plan.script.audio, "pop/whip SFX + beat bounce");
        assert!(
            plan.publish.title.ends_with(" in 10s: trucco che funziona"),
            "title {:?}",
            plan.publish.title
        );
    }
}
