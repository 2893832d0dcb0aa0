use serde::Deserialize;

/// One entry of the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CountryCapitalPair {
    pub country: String,
    pub capital: String,
}

impl CountryCapitalPair {
    pub fn new(country: impl Into<String>, capital: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            capital: capital.into(),
        }
    }
}
