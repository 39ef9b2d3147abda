use crate::error::{Error, Result};
use crate::models::candidate::Candidate;

const DEFAULT_DATASET: &str = include_str!("seed.json");

/// The dataset written to a fresh medium on first access.
pub fn default_candidates() -> Result<Vec<Candidate>> {
    serde_json::from_str(DEFAULT_DATASET)
        .map_err(|e| Error::Internal(format!("Default candidate dataset is invalid: {}", e)))
}
