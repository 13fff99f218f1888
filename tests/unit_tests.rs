// Unit tests for Relo Leads

use chrono::{TimeZone, Utc};
use relo_leads::core::{
    budget_level, calculate_lead_score, days_until_start, distance_km, duration_months,
    income_value, preference_item_count, safety_level,
};
use relo_leads::models::{FactorWeights, Lifestyle, RawPreference};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn test_income_normalization() {
    assert_eq!(income_value(Some("0-30000")), 15_000.0);
    assert_eq!(income_value(Some("100000+")), 150_000.0);
    assert_eq!(income_value(Some("72000")), 72_000.0);
    // Unrecognized text degrades to the lowest bucket representative
    assert_eq!(income_value(Some("a decent amount")), 15_000.0);
    assert_eq!(income_value(None), 15_000.0);
}

#[test]
fn test_level_normalization() {
    assert_eq!(budget_level(Some("low")), 1.0);
    assert_eq!(budget_level(Some("high")), 3.0);
    assert_eq!(safety_level(Some("medium")), 2.0);
    assert_eq!(budget_level(Some("unbounded")), 0.0);
    assert_eq!(safety_level(None), 0.0);
}

#[test]
fn test_duration_normalization() {
    assert_eq!(duration_months(Some("0-3 months")), 1.5);
    assert_eq!(duration_months(Some("permanent")), 24.0);
    assert_eq!(duration_months(Some("until further notice")), 0.0);
}

#[test]
fn test_distance_normalization() {
    assert_eq!(distance_km(Some("0-100")), 0.0);
    assert_eq!(distance_km(Some("300-500")), 300.0);
    assert_eq!(distance_km(Some("1000+")), 1000.0);
    assert_eq!(distance_km(Some("other side of the world")), 1000.0);
}

#[test]
fn test_start_date_parsing() {
    let now = fixed_now();
    assert_eq!(days_until_start(Some("2025-06-08"), now), Some(7.0));
    assert_eq!(days_until_start(Some("2024-12-31"), now), Some(0.0));
    assert_eq!(days_until_start(Some("tomorrow-ish"), now), None);
}

#[test]
fn test_preference_counting_spans_all_set_fields() {
    let record = RawPreference {
        food_preferences: vec!["Vegetarian".to_string()],
        transport_type: vec!["Public Transport".to_string(), "Private Vehicle".to_string()],
        accommodation_type: vec!["Apartment".to_string()],
        lifestyle: Some(Lifestyle::One("balanced".to_string())),
        ..RawPreference::default()
    };
    assert_eq!(preference_item_count(&record), 5);
}

#[test]
fn test_score_within_valid_range() {
    let weights = FactorWeights::default();
    let samples = [
        RawPreference::default(),
        RawPreference {
            email: "max@example.com".to_string(),
            income: Some("100000+".to_string()),
            budget: Some("high".to_string()),
            duration: Some("permanent".to_string()),
            safety: Some("high".to_string()),
            distance: Some("0-100".to_string()),
            start_date: Some("2025-06-01".to_string()),
            food_preferences: (0..20).map(|i| format!("f{}", i)).collect(),
            ..RawPreference::default()
        },
        RawPreference {
            income: Some("garbage".to_string()),
            budget: Some("garbage".to_string()),
            distance: Some("garbage".to_string()),
            ..RawPreference::default()
        },
    ];

    for record in &samples {
        let score = calculate_lead_score(record, fixed_now(), &weights);
        assert!(score >= 0.0 && score <= 100.0, "score {} out of range", score);
    }
}

#[test]
fn test_budget_raises_score() {
    let weights = FactorWeights::default();
    let base = RawPreference {
        email: "t@example.com".to_string(),
        budget: Some("low".to_string()),
        ..RawPreference::default()
    };
    let richer = RawPreference {
        budget: Some("high".to_string()),
        ..base.clone()
    };

    let low = calculate_lead_score(&base, fixed_now(), &weights);
    let high = calculate_lead_score(&richer, fixed_now(), &weights);
    assert!(high > low, "higher budget should raise the score");
}
