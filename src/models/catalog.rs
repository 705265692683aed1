use thiserror::Error;
use validator::Validate;

use crate::config::ValidationSettings;
use crate::models::domain::LenderProfile;

/// Errors raised while ingesting a lender catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid lender profile '{lender_id}': {source}")]
    InvalidProfile {
        lender_id: String,
        #[source]
        source: validator::ValidationErrors,
    },
}

/// Validate lender profiles before they reach the scorer
///
/// The scorer itself never validates; an out-of-range preference weight there
/// is only caught by the final clamp. With `reject_invalid_profiles` unset,
/// invalid profiles are kept and logged.
pub fn validate_catalog(
    lenders: Vec<LenderProfile>,
    settings: &ValidationSettings,
) -> Result<Vec<LenderProfile>, CatalogError> {
    for lender in &lenders {
        if let Err(errors) = lender.validate() {
            if settings.reject_invalid_profiles {
                return Err(CatalogError::InvalidProfile {
                    lender_id: lender.id.clone(),
                    source: errors,
                });
            }

            tracing::warn!("Keeping invalid lender profile {}: {}", lender.id, errors);
        }
    }

    tracing::debug!("Validated catalog of {} lenders", lenders.len());

    Ok(lenders)
}

/// Deserialize a JSON array of lender profiles and validate it
pub fn parse_catalog(
    json: &str,
    settings: &ValidationSettings,
) -> Result<Vec<LenderProfile>, CatalogError> {
    let lenders: Vec<LenderProfile> = serde_json::from_str(json)?;
    validate_catalog(lenders, settings)
}
