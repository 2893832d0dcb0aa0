use std::collections::HashSet;

use thiserror::Error;

use crate::models::CountryCapitalPair;

const ASIA_JSON: &str = include_str!("asia.json");

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid dataset: {reason}")]
    Invalid { reason: String },
}

/// The countries and capitals of Asia bundled with the binary.
pub fn asia_dataset() -> Result<Vec<CountryCapitalPair>, LoadError> {
    load_dataset_from_str(ASIA_JSON)
}

pub fn load_dataset_from_str(json: &str) -> Result<Vec<CountryCapitalPair>, LoadError> {
    let pairs: Vec<CountryCapitalPair> = serde_json::from_str(json)?;
    validate(&pairs)?;
    Ok(pairs)
}

// Distractors are excluded by value, so both columns must be unique.
fn validate(pairs: &[CountryCapitalPair]) -> Result<(), LoadError> {
    let mut countries = HashSet::with_capacity(pairs.len());
    let mut capitals = HashSet::with_capacity(pairs.len());

    for pair in pairs {
        if pair.country.trim().is_empty() || pair.capital.trim().is_empty() {
            return Err(invalid(format!("empty field in entry {:?}", pair)));
        }
        if !countries.insert(pair.country.as_str()) {
            return Err(invalid(format!("duplicate country {:?}", pair.country)));
        }
        if !capitals.insert(pair.capital.as_str()) {
            return Err(invalid(format!("duplicate capital {:?}", pair.capital)));
        }
    }

    Ok(())
}

fn invalid(reason: String) -> LoadError {
    LoadError::Invalid { reason }
}
