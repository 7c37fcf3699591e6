use matchplan_core::{config::RecommendationThresholds, Recommendation};

#[test]
fn step_function_boundaries() {
    let t = RecommendationThresholds::default();
    assert_eq!(Recommendation::classify(95, &t), Recommendation::HighlyRecommended);
    assert_eq!(Recommendation::classify(81, &t), Recommendation::HighlyRecommended);
    assert_eq!(Recommendation::classify(80, &t), Recommendation::Recommended);
    assert_eq!(Recommendation::classify(66, &t), Recommendation::Recommended);
    assert_eq!(Recommendation::classify(65, &t), Recommendation::Neutral);
    assert_eq!(Recommendation::classify(51, &t), Recommendation::Neutral);
    assert_eq!(Recommendation::classify(50, &t), Recommendation::NotRecommended);
    assert_eq!(Recommendation::classify(30, &t), Recommendation::NotRecommended);
}

#[test]
fn classification_is_monotonic() {
    let t = RecommendationThresholds::default();
    let tiers: Vec<Recommendation> = (0..=100).map(|r| Recommendation::classify(r, &t)).collect();
    assert!(tiers.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn custom_thresholds_are_honoured() {
    let t = RecommendationThresholds {
        highly_recommended: 90,
        recommended: 70,
        neutral: 40,
    };
    assert_eq!(Recommendation::classify(85, &t), Recommendation::Recommended);
    assert_eq!(Recommendation::classify(45, &t), Recommendation::Neutral);
}

#[test]
fn wire_names_are_kebab_case() {
    assert_eq!(
        serde_json::to_string(&Recommendation::HighlyRecommended).unwrap(),
        "\"highly-recommended\""
    );
    let parsed: Recommendation = serde_json::from_str("\"not-recommended\"").unwrap();
    assert_eq!(parsed, Recommendation::NotRecommended);
    assert_eq!(Recommendation::Neutral.to_string(), "neutral");
}

#[test]
fn labels_and_guidance() {
    assert_eq!(Recommendation::HighlyRecommended.label(), "Highly Recommended Match");
    assert_eq!(Recommendation::NotRecommended.label(), "Not Recommended");
    assert_eq!(
        Recommendation::Neutral.guidance()[2],
        "Consider pairing with a senior team member"
    );
    for tier in [
        Recommendation::HighlyRecommended,
        Recommendation::Recommended,
        Recommendation::Neutral,
        Recommendation::NotRecommended,
    ] {
        assert!(tier.guidance().iter().all(|line| !line.is_empty()));
    }
}
