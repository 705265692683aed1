// Integration tests for Lender Match

use lender_match::config::{Settings, ValidationSettings};
use lender_match::core::{score_lenders, CriteriaBreakdown, LenderMatcher};
use lender_match::models::{parse_catalog, Filters, LenderProfile, LenderWithScore, PreferenceScope};

const CATALOG: &str = r#"[
    {
        "id": "atlas",
        "name": "Atlas Capital",
        "assetTypes": ["Office"],
        "dealTypes": ["Bridge"],
        "capitalTypes": ["Senior Debt"],
        "locations": ["nationwide"],
        "minDealSize": 1000000,
        "maxDealSize": 10000000,
        "preferenceScope": {"assetTypes": 0.5, "dealTypes": 0.3, "capitalTypes": 0.2, "locations": 0.1, "dealSize": 0.4}
    },
    {
        "id": "harbor",
        "name": "Harbor Lending",
        "assetTypes": ["Multifamily", "Retail"],
        "dealTypes": ["Acquisition", "Bridge"],
        "capitalTypes": ["Mezzanine"],
        "locations": ["West Coast"],
        "debtRanges": ["$5M - $25M", "$25M to $100M"],
        "preferenceScope": {"assetTypes": 1.0, "dealTypes": 0.5, "capitalTypes": 0.5, "locations": 0.9, "dealSize": 0.2}
    },
    {
        "id": "granite",
        "name": "Granite Street Bank",
        "assetTypes": ["Industrial"],
        "dealTypes": ["Construction"],
        "capitalTypes": ["Senior Debt"],
        "locations": ["Northeast"],
        "debtRanges": ["$100M+"],
        "preferenceScope": {"assetTypes": 0.6, "dealTypes": 0.6, "capitalTypes": 0.6, "locations": 0.6, "dealSize": 0.6}
    }
]"#;

fn load_catalog() -> Vec<LenderProfile> {
    parse_catalog(CATALOG, &ValidationSettings::default()).expect("catalog should be valid")
}

fn score_of<'a>(scored: &'a [LenderWithScore], id: &str) -> &'a LenderWithScore {
    scored
        .iter()
        .find(|entry| entry.lender.id == id)
        .unwrap_or_else(|| panic!("lender {id} missing"))
}

#[test]
fn test_integration_end_to_end_scenario() {
    let lenders = load_catalog();
    let filters: Filters = serde_json::from_str(
        r#"{
            "assetTypes": ["Retail"],
            "dealTypes": ["Bridge"],
            "capitalTypes": [],
            "debtRanges": [],
            "locations": ["West Coast"]
        }"#,
    )
    .unwrap();

    let scored = score_lenders(&lenders, &filters);

    // Atlas: asset mismatch only, nationwide covers West Coast
    assert!((score_of(&scored, "atlas").match_score - 0.5).abs() < 1e-9);
    // Harbor matches everything selected
    assert_eq!(score_of(&scored, "harbor").match_score, 1.0);
    // Granite misses asset, deal and location: 0.4^3
    assert!((score_of(&scored, "granite").match_score - 0.064).abs() < 1e-9);
}

#[test]
fn test_integration_empty_filters_score_one() {
    let lenders = load_catalog();
    let filters: Filters = serde_json::from_str("{}").unwrap();

    let scored = score_lenders(&lenders, &filters);

    assert_eq!(scored.len(), lenders.len());
    assert!(scored.iter().all(|entry| entry.match_score == 1.0));
}

#[test]
fn test_integration_idempotent_and_input_untouched() {
    let lenders = load_catalog();
    let snapshot = lenders.clone();
    let filters = Filters {
        asset_types: vec!["Industrial".to_string()],
        debt_ranges: vec!["$25M - $100M".to_string()],
        ..Filters::default()
    };

    let first = score_lenders(&lenders, &filters);
    let second = score_lenders(&lenders, &filters);

    assert_eq!(first, second);
    assert_eq!(lenders, snapshot);
    let ids: Vec<&str> = first.iter().map(|entry| entry.lender.id.as_str()).collect();
    assert_eq!(ids, vec!["atlas", "harbor", "granite"]);
}

#[test]
fn test_integration_elimination_weight() {
    let lenders = load_catalog();
    let filters = Filters {
        asset_types: vec!["Office".to_string()],
        ..Filters::default()
    };

    let scored = score_lenders(&lenders, &filters);

    assert_eq!(score_of(&scored, "harbor").match_score, 0.0);
    assert_eq!(score_of(&scored, "atlas").match_score, 1.0);
}

#[test]
fn test_integration_empty_catalog() {
    let mut matcher = LenderMatcher::default();

    let result = matcher.find_matches(&[], &Filters::default(), None);

    assert!(result.lenders.is_empty());
    assert_eq!(result.total_candidates, 0);
}

#[test]
fn test_integration_ranking_and_breakdown() {
    let settings = Settings::from_toml_str(
        r#"
        [ranking]
        default_limit = 2

        [cache]
        range_cache_size = 16
        "#,
    )
    .unwrap();
    let mut matcher = LenderMatcher::new(&settings);
    let lenders = load_catalog();
    let filters = Filters {
        asset_types: vec!["Multifamily".to_string(), "Office".to_string()],
        locations: vec!["Northeast".to_string()],
        debt_ranges: vec!["$0 - $5M".to_string()],
        ..Filters::default()
    };

    let result = matcher.find_matches(&lenders, &filters, None);

    assert_eq!(result.total_candidates, 3);
    assert_eq!(result.lenders.len(), 2);
    // Atlas 1.0; Granite 0.4 * 0.4 = 0.16; Harbor misses location only: 0.1
    assert_eq!(result.lenders[0].lender.id, "atlas");
    assert_eq!(result.lenders[1].lender.id, "granite");

    let breakdown: CriteriaBreakdown = matcher.breakdown(&result.lenders[1].lender, &filters);
    assert_eq!(breakdown.asset_types, Some(false));
    assert_eq!(breakdown.deal_types, None);
    assert_eq!(breakdown.locations, Some(true));
    assert_eq!(breakdown.deal_size, Some(false));
}

#[test]
fn test_integration_scored_lender_serializes_flat() {
    let lender = LenderProfile {
        id: "flat".to_string(),
        name: "Flat Lender".to_string(),
        description: None,
        asset_types: vec![],
        deal_types: vec![],
        capital_types: vec![],
        locations: vec!["nationwide".to_string()],
        debt_ranges: vec![],
        min_deal_size: 0.0,
        max_deal_size: 0.0,
        preference_scope: PreferenceScope::default(),
    };

    let scored = score_lenders(std::slice::from_ref(&lender), &Filters::default());
    let json = serde_json::to_value(&scored[0]).unwrap();

    assert_eq!(json["id"], "flat");
    assert_eq!(json["matchScore"], 1.0);
    assert_eq!(json["locations"][0], "nationwide");
}
