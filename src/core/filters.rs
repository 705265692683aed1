use crate::core::range::{parse_range, parse_ranges};
use crate::models::{Dimension, Filters, LenderProfile, NumericRange, NATIONWIDE};

/// Outcome of checking one dimension for one lender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionCheck {
    /// Borrower selected nothing on this dimension
    Skipped,
    Matched,
    Mismatched,
}

impl DimensionCheck {
    #[inline]
    fn from_match(matched: bool) -> Self {
        if matched {
            Self::Matched
        } else {
            Self::Mismatched
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Mismatched)
    }

    /// Tri-state form used for badges: `None` when skipped
    pub fn as_badge(&self) -> Option<bool> {
        match self {
            Self::Skipped => None,
            Self::Matched => Some(true),
            Self::Mismatched => Some(false),
        }
    }
}

/// True when the two value sets share at least one element
#[inline]
pub fn matches_any(lender_values: &[String], filter_values: &[String]) -> bool {
    filter_values.iter().any(|value| lender_values.contains(value))
}

/// Location match, with `"nationwide"` satisfying any requested location
#[inline]
pub fn matches_location(lender_locations: &[String], filter_locations: &[String]) -> bool {
    lender_locations.iter().any(|location| location == NATIONWIDE)
        || matches_any(lender_locations, filter_locations)
}

/// True when any filter band overlaps any lender band
#[inline]
pub fn matches_debt_range(filter_ranges: &[NumericRange], lender_ranges: &[NumericRange]) -> bool {
    filter_ranges
        .iter()
        .any(|filter| lender_ranges.iter().any(|lender| filter.overlaps(lender)))
}

/// Check a lender against the borrower filters on a single dimension
///
/// `filter_ranges` are the already-parsed filter debt ranges and `parse` turns
/// the lender's range strings into intervals, so callers can share parsing
/// work across a whole catalog.
pub fn check_dimension<P>(
    dimension: Dimension,
    lender: &LenderProfile,
    filters: &Filters,
    filter_ranges: &[NumericRange],
    parse: &mut P,
) -> DimensionCheck
where
    P: FnMut(&str) -> Option<NumericRange>,
{
    let selected = filters.values_for(dimension);
    if selected.is_empty() {
        return DimensionCheck::Skipped;
    }

    let matched = match dimension {
        Dimension::AssetTypes => matches_any(&lender.asset_types, selected),
        Dimension::DealTypes => matches_any(&lender.deal_types, selected),
        Dimension::CapitalTypes => matches_any(&lender.capital_types, selected),
        Dimension::Locations => matches_location(&lender.locations, selected),
        Dimension::DealSize => {
            let lender_ranges: Vec<NumericRange> = lender
                .effective_debt_ranges()
                .iter()
                .filter_map(|text| parse(text.as_str()))
                .collect();
            matches_debt_range(filter_ranges, &lender_ranges)
        }
    };

    DimensionCheck::from_match(matched)
}

/// Check all five dimensions, in `Dimension::ALL` order
pub fn check_all_dimensions(lender: &LenderProfile, filters: &Filters) -> [(Dimension, DimensionCheck); 5] {
    let filter_ranges = parse_ranges(&filters.debt_ranges);
    let mut parse = parse_range;

    Dimension::ALL.map(|dimension| {
        (
            dimension,
            check_dimension(dimension, lender, filters, &filter_ranges, &mut parse),
        )
    })
}
