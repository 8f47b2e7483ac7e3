//! Fixed-shape scenario assumptions
//!
//! Everything the calculator does not ask the user for: carrying cost rates,
//! the SBA 504 financing split, and the depreciable share of the building.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Container for all non-user assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Assumptions {
    /// Annual property tax as a percent of purchase price
    pub property_tax_rate_pct: f64,

    /// Annual insurance as a percent of purchase price
    pub insurance_rate_pct: f64,

    /// First mortgage as a fraction of purchase price
    pub first_mortgage_share: f64,

    /// SBA/CDC loan as a fraction of purchase price
    pub sba_share: f64,

    /// SBA/CDC amortization term for real estate
    pub sba_term_years: u32,

    /// Fraction of the purchase price treated as depreciable building
    pub building_value_fraction: f64,
}

impl Assumptions {
    /// Standard SBA 504 structure: 50% bank, 40% CDC over 25 years
    pub fn default_sba504() -> Self {
        Self {
            property_tax_rate_pct: 1.1,
            insurance_rate_pct: 0.5,
            first_mortgage_share: 0.5,
            sba_share: 0.4,
            sba_term_years: 25,
            building_value_fraction: 0.8,
        }
    }

    /// Parse assumptions from JSON; missing fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load assumptions from a JSON file
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let assumptions = Self::from_json_str(&contents)?;
        log::debug!("Loaded assumptions from {}: {:?}", path.display(), assumptions);
        Ok(assumptions)
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_sba504()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_structure() {
        let a = Assumptions::default();
        assert_eq!(a.first_mortgage_share + a.sba_share, 0.9);
        assert_eq!(a.sba_term_years, 25);
        assert_eq!(a.building_value_fraction, 0.8);
    }

    #[test]
    fn test_partial_json_override() {
        let a = Assumptions::from_json_str(r#"{ "property_tax_rate_pct": 2.0 }"#).unwrap();
        assert_eq!(a.property_tax_rate_pct, 2.0);
        assert_eq!(a.insurance_rate_pct, 0.5);
        assert_eq!(a.sba_term_years, 25);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Assumptions::from_json_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, crate::error::CalculatorError::Io(_)));
    }
}
