use crate::core::filters::check_dimension;
use crate::core::range::{parse_range, parse_ranges};
use crate::models::{Dimension, Filters, LenderProfile, LenderWithScore, NumericRange};

/// Score every lender against the borrower filters
///
/// Returns one entry per lender in input order. Each lender starts at 1.0 and
/// every mismatched dimension multiplies the score by
/// `1 - preference_scope[dimension]`:
///
/// ```text
/// score = max(0, (1 - w_asset?) * (1 - w_deal?) * (1 - w_capital?)
///                * (1 - w_location?) * (1 - w_size?))
/// ```
///
/// where a factor only applies when that dimension was selected and missed.
pub fn score_lenders(lenders: &[LenderProfile], filters: &Filters) -> Vec<LenderWithScore> {
    score_lenders_with(lenders, filters, parse_range)
}

/// Same as [`score_lenders`], parsing range strings through `parse`
pub fn score_lenders_with<P>(
    lenders: &[LenderProfile],
    filters: &Filters,
    mut parse: P,
) -> Vec<LenderWithScore>
where
    P: FnMut(&str) -> Option<NumericRange>,
{
    let filter_ranges: Vec<NumericRange> = filters
        .debt_ranges
        .iter()
        .filter_map(|text| parse(text.as_str()))
        .collect();

    let scored: Vec<LenderWithScore> = lenders
        .iter()
        .map(|lender| LenderWithScore {
            lender: lender.clone(),
            match_score: score_lender(lender, filters, &filter_ranges, &mut parse),
        })
        .collect();

    tracing::debug!("Scored {} lenders", scored.len());

    scored
}

/// Calculate the match score (0-1) for a single lender
pub fn calculate_match_score(lender: &LenderProfile, filters: &Filters) -> f64 {
    let filter_ranges = parse_ranges(&filters.debt_ranges);
    let mut parse = parse_range;

    score_lender(lender, filters, &filter_ranges, &mut parse)
}

fn score_lender<P>(
    lender: &LenderProfile,
    filters: &Filters,
    filter_ranges: &[NumericRange],
    parse: &mut P,
) -> f64
where
    P: FnMut(&str) -> Option<NumericRange>,
{
    let mut match_score: f64 = 1.0;

    for dimension in Dimension::ALL {
        let check = check_dimension(dimension, lender, filters, filter_ranges, parse);
        if check.is_mismatch() {
            let weight = lender.preference_scope.weight(dimension);
            match_score *= 1.0 - weight;
            tracing::trace!("Lender {} mismatched on {} (weight {})", lender.id, dimension, weight);
        }
    }

    let match_score = match_score.max(0.0);
    tracing::debug!("Lender {} scored {:.3}", lender.id, match_score);

    match_score
}
