// Core algorithm exports
pub mod criteria;
pub mod filters;
pub mod matcher;
pub mod range;
pub mod scoring;

pub use criteria::{compare_criterion, CriteriaBreakdown};
pub use filters::{check_all_dimensions, check_dimension, matches_any, matches_debt_range, matches_location, DimensionCheck};
pub use matcher::{LenderMatcher, RankedLenders};
pub use range::{parse_range, parse_ranges};
pub use scoring::{calculate_match_score, score_lenders, score_lenders_with};
