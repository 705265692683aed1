//! Lender Match - lender-borrower matching and scoring engine
//!
//! Scores a catalog of lender profiles against a borrower's selected
//! financing criteria and derives per-criterion match badges for display.
//! Every engine operation is a pure, synchronous function over in-memory data.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod telemetry;

// Re-export commonly used types
pub use crate::core::{compare_criterion, parse_range, score_lenders, CriteriaBreakdown, LenderMatcher, RankedLenders};
pub use crate::models::{Dimension, Filters, LenderProfile, LenderWithScore, NumericRange, PreferenceScope};
