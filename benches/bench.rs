// Criterion benchmarks for Lender Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lender_match::core::{parse_range, score_lenders, LenderMatcher};
use lender_match::models::{Filters, LenderProfile, PreferenceScope};

const ASSET_TYPES: [&str; 4] = ["Multifamily", "Office", "Retail", "Industrial"];
const DEBT_RANGES: [&str; 4] = ["$0 - $5M", "$5M - $25M", "$25M to $100M", "$100M+"];

fn create_lender(id: usize) -> LenderProfile {
    LenderProfile {
        id: id.to_string(),
        name: format!("Lender {}", id),
        description: None,
        asset_types: vec![ASSET_TYPES[id % 4].to_string()],
        deal_types: vec!["Acquisition".to_string(), "Bridge".to_string()],
        capital_types: vec!["Senior Debt".to_string()],
        locations: if id % 5 == 0 {
            vec!["nationwide".to_string()]
        } else {
            vec!["Northeast".to_string()]
        },
        // Every third lender relies on the min/max fallback
        debt_ranges: if id % 3 == 0 {
            vec![]
        } else {
            vec![DEBT_RANGES[id % 4].to_string()]
        },
        min_deal_size: 1_000_000.0 * (id % 10) as f64,
        max_deal_size: 10_000_000.0 * (id % 10 + 1) as f64,
        preference_scope: PreferenceScope {
            asset_types: 0.5,
            deal_types: 0.3,
            capital_types: 0.2,
            locations: 0.4,
            deal_size: 0.6,
        },
    }
}

fn create_filters() -> Filters {
    Filters {
        asset_types: vec!["Office".to_string(), "Retail".to_string()],
        deal_types: vec!["Bridge".to_string()],
        capital_types: vec![],
        debt_ranges: vec!["$5M - $25M".to_string()],
        locations: vec!["West Coast".to_string()],
        requested_amount: None,
    }
}

fn bench_parse_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_range");

    for text in DEBT_RANGES {
        group.bench_with_input(BenchmarkId::from_parameter(text), &text, |b, text| {
            b.iter(|| parse_range(black_box(text)));
        });
    }

    group.finish();
}

fn bench_scoring(c: &mut Criterion) {
    let filters = create_filters();
    let mut group = c.benchmark_group("scoring");

    for lender_count in [10, 100, 1000, 5000].iter() {
        let lenders: Vec<LenderProfile> = (0..*lender_count).map(create_lender).collect();

        group.bench_with_input(BenchmarkId::new("uncached", lender_count), &lenders, |b, lenders| {
            b.iter(|| score_lenders(black_box(lenders), black_box(&filters)));
        });

        let mut matcher = LenderMatcher::default();
        group.bench_with_input(BenchmarkId::new("cached", lender_count), &lenders, |b, lenders| {
            b.iter(|| matcher.score(black_box(lenders), black_box(&filters)));
        });
    }

    group.finish();
}

fn bench_find_matches(c: &mut Criterion) {
    let filters = create_filters();
    let lenders: Vec<LenderProfile> = (0..1000).map(create_lender).collect();
    let mut matcher = LenderMatcher::default();

    c.bench_function("find_matches_1000", |b| {
        b.iter(|| matcher.find_matches(black_box(&lenders), black_box(&filters), Some(20)));
    });
}

criterion_group!(benches, bench_parse_range, bench_scoring, bench_find_matches);
criterion_main!(benches);
