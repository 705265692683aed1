use serde::{Deserialize, Serialize};

use crate::core::filters::{check_dimension, matches_any};
use crate::core::range::{parse_range, parse_ranges};
use crate::models::{Dimension, Filters, LenderProfile, NATIONWIDE};

/// Compare one lender criterion against the borrower's selection
///
/// Returns `None` when the borrower selected nothing for this dimension (show
/// raw values instead of a badge), otherwise whether any selected value is
/// offered by the lender. A nationwide lender always matches on locations.
///
/// Display only: no preference weighting, no effect on `match_score`.
pub fn compare_criterion(
    lender_values: &[String],
    filter_values: &[String],
    dimension: Dimension,
) -> Option<bool> {
    if filter_values.is_empty() {
        return None;
    }

    if dimension == Dimension::Locations && lender_values.iter().any(|value| value == NATIONWIDE) {
        return Some(true);
    }

    Some(matches_any(lender_values, filter_values))
}

/// Per-dimension badges for a lender detail view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriteriaBreakdown {
    #[serde(rename = "assetTypes")]
    pub asset_types: Option<bool>,
    #[serde(rename = "dealTypes")]
    pub deal_types: Option<bool>,
    #[serde(rename = "capitalTypes")]
    pub capital_types: Option<bool>,
    pub locations: Option<bool>,
    #[serde(rename = "dealSize")]
    pub deal_size: Option<bool>,
}

impl CriteriaBreakdown {
    /// Build every badge for one lender
    ///
    /// Set dimensions go through [`compare_criterion`]. Deal size uses the
    /// same interval overlap as scoring, since range strings rarely match
    /// verbatim. That badge therefore differs from `compare_criterion` on
    /// debt ranges: a lender with empty `debt_ranges` is judged on its
    /// min/max deal size band and can show `Some(true)`.
    pub fn for_lender(lender: &LenderProfile, filters: &Filters) -> Self {
        let badge = |dimension: Dimension| {
            compare_criterion(
                &lender.values_for(dimension),
                filters.values_for(dimension),
                dimension,
            )
        };
        let filter_ranges = parse_ranges(&filters.debt_ranges);
        let mut parse = parse_range;
        let deal_size = check_dimension(Dimension::DealSize, lender, filters, &filter_ranges, &mut parse);

        Self {
            asset_types: badge(Dimension::AssetTypes),
            deal_types: badge(Dimension::DealTypes),
            capital_types: badge(Dimension::CapitalTypes),
            locations: badge(Dimension::Locations),
            deal_size: deal_size.as_badge(),
        }
    }

    pub fn get(&self, dimension: Dimension) -> Option<bool> {
        match dimension {
            Dimension::AssetTypes => self.asset_types,
            Dimension::DealTypes => self.deal_types,
            Dimension::CapitalTypes => self.capital_types,
            Dimension::Locations => self.locations,
            Dimension::DealSize => self.deal_size,
        }
    }

    /// Dimensions the borrower selected that this lender misses
    pub fn mismatches(&self) -> Vec<Dimension> {
        Dimension::ALL
            .into_iter()
            .filter(|dimension| self.get(*dimension) == Some(false))
            .collect()
    }
}
