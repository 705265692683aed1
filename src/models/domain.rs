use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::Validate;

/// Location value that satisfies any requested location
pub const NATIONWIDE: &str = "nationwide";

/// Lender profile as supplied by the lender catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct LenderProfile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "assetTypes", alias = "asset_types", default)]
    pub asset_types: Vec<String>,
    #[serde(rename = "dealTypes", alias = "deal_types", default)]
    pub deal_types: Vec<String>,
    #[serde(rename = "capitalTypes", alias = "capital_types", default)]
    pub capital_types: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(rename = "debtRanges", alias = "debt_ranges", default)]
    pub debt_ranges: Vec<String>,
    #[validate(range(min = 0.0))]
    #[serde(rename = "minDealSize", alias = "min_deal_size", default)]
    pub min_deal_size: f64,
    #[validate(range(min = 0.0))]
    #[serde(rename = "maxDealSize", alias = "max_deal_size", default)]
    pub max_deal_size: f64,
    #[validate(nested)]
    #[serde(rename = "preferenceScope", alias = "preference_scope", default)]
    pub preference_scope: PreferenceScope,
}

impl LenderProfile {
    /// Debt range strings used for deal-size matching
    ///
    /// Explicit `debt_ranges` win; otherwise a single band is synthesized from
    /// the min/max deal size in whole millions, e.g. `"$2M - $50M"`.
    /// Half millions round up, so 2.5M becomes `$3M`.
    pub fn effective_debt_ranges(&self) -> Vec<String> {
        if !self.debt_ranges.is_empty() {
            return self.debt_ranges.clone();
        }

        // `{:.0}` alone rounds halves to even; round first
        let min_millions = (self.min_deal_size / 1_000_000.0).round();
        let max_millions = (self.max_deal_size / 1_000_000.0).round();

        vec![format!("${:.0}M - ${:.0}M", min_millions, max_millions)]
    }

    /// Values this lender holds for a set-valued dimension
    ///
    /// `DealSize` returns the effective debt range strings.
    pub fn values_for(&self, dimension: Dimension) -> Cow<'_, [String]> {
        match dimension {
            Dimension::AssetTypes => Cow::Borrowed(&self.asset_types),
            Dimension::DealTypes => Cow::Borrowed(&self.deal_types),
            Dimension::CapitalTypes => Cow::Borrowed(&self.capital_types),
            Dimension::Locations => Cow::Borrowed(&self.locations),
            Dimension::DealSize => Cow::Owned(self.effective_debt_ranges()),
        }
    }
}

/// Per-dimension penalty weights in [0, 1]
///
/// 1.0 eliminates the lender on a mismatch, 0.0 never penalizes.
/// Missing keys deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct PreferenceScope {
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(rename = "assetTypes", alias = "asset_types", default)]
    pub asset_types: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(rename = "dealTypes", alias = "deal_types", default)]
    pub deal_types: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(rename = "capitalTypes", alias = "capital_types", default)]
    pub capital_types: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default)]
    pub locations: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(rename = "dealSize", alias = "deal_size", default)]
    pub deal_size: f64,
}

impl PreferenceScope {
    pub fn weight(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::AssetTypes => self.asset_types,
            Dimension::DealTypes => self.deal_types,
            Dimension::CapitalTypes => self.capital_types,
            Dimension::Locations => self.locations,
            Dimension::DealSize => self.deal_size,
        }
    }
}

/// Borrower's selected financing criteria
///
/// An empty dimension means "no constraint" and is skipped during scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    #[serde(rename = "assetTypes", alias = "asset_types", default)]
    pub asset_types: Vec<String>,
    #[serde(rename = "dealTypes", alias = "deal_types", default)]
    pub deal_types: Vec<String>,
    #[serde(rename = "capitalTypes", alias = "capital_types", default)]
    pub capital_types: Vec<String>,
    #[serde(rename = "debtRanges", alias = "debt_ranges", default)]
    pub debt_ranges: Vec<String>,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Not used for scoring yet
    #[serde(rename = "requestedAmount", alias = "requested_amount", default)]
    pub requested_amount: Option<f64>,
}

impl Filters {
    pub fn values_for(&self, dimension: Dimension) -> &[String] {
        match dimension {
            Dimension::AssetTypes => &self.asset_types,
            Dimension::DealTypes => &self.deal_types,
            Dimension::CapitalTypes => &self.capital_types,
            Dimension::Locations => &self.locations,
            Dimension::DealSize => &self.debt_ranges,
        }
    }

    /// True when no dimension carries a selection
    pub fn is_unconstrained(&self) -> bool {
        Dimension::ALL
            .iter()
            .all(|dimension| self.values_for(*dimension).is_empty())
    }
}

/// Canonical loan-size interval; `max` is `f64::INFINITY` for "$X+" bands
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub min: f64,
    pub max: f64,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn is_open_ended(&self) -> bool {
        self.max == f64::INFINITY
    }

    /// Closed-interval overlap; any NaN bound never overlaps
    #[inline]
    pub fn overlaps(&self, other: &NumericRange) -> bool {
        self.min <= other.max && self.max >= other.min
    }
}

/// Lender paired with its match score in [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LenderWithScore {
    #[serde(flatten)]
    pub lender: LenderProfile,
    #[serde(rename = "matchScore")]
    pub match_score: f64,
}

/// One of the five matching axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    AssetTypes,
    DealTypes,
    CapitalTypes,
    Locations,
    #[serde(alias = "debtRanges")]
    DealSize,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::AssetTypes,
        Dimension::DealTypes,
        Dimension::CapitalTypes,
        Dimension::Locations,
        Dimension::DealSize,
    ];

    /// Preference scope key for this dimension
    pub fn key(&self) -> &'static str {
        match self {
            Dimension::AssetTypes => "asset_types",
            Dimension::DealTypes => "deal_types",
            Dimension::CapitalTypes => "capital_types",
            Dimension::Locations => "locations",
            Dimension::DealSize => "deal_size",
        }
    }
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
