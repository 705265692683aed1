// Model exports
pub mod catalog;
pub mod domain;

pub use catalog::{parse_catalog, validate_catalog, CatalogError};
pub use domain::{Dimension, Filters, LenderProfile, LenderWithScore, NumericRange, PreferenceScope, NATIONWIDE};
