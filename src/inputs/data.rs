//! User-facing calculator inputs and their derivation into a `Scenario`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::model::{PropertyScenario, RentScenario, Scenario, TaxProfile};
use crate::assumptions::Assumptions;
use crate::error::{CalculatorError, Result};
use crate::loan::LoanTerms;

/// Commercial property category (descriptive only, does not affect the math)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    #[default]
    Office,
    Retail,
    Industrial,
    MixedUse,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Office => "Office",
            PropertyType::Retail => "Retail",
            PropertyType::Industrial => "Industrial",
            PropertyType::MixedUse => "Mixed-Use",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PropertyType {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "office" => Ok(PropertyType::Office),
            "retail" => Ok(PropertyType::Retail),
            "industrial" => Ok(PropertyType::Industrial),
            "mixed-use" | "mixed_use" | "mixeduse" => Ok(PropertyType::MixedUse),
            _ => Err(CalculatorError::UnknownPropertyType(s.to_string())),
        }
    }
}

/// First mortgage terms offered by the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum MortgageTerm {
    SevenYears,
    #[default]
    TenYears,
    TwentyFiveYears,
}

impl MortgageTerm {
    pub fn years(&self) -> u32 {
        match self {
            MortgageTerm::SevenYears => 7,
            MortgageTerm::TenYears => 10,
            MortgageTerm::TwentyFiveYears => 25,
        }
    }
}

impl TryFrom<u32> for MortgageTerm {
    type Error = CalculatorError;

    fn try_from(years: u32) -> Result<Self> {
        match years {
            7 => Ok(MortgageTerm::SevenYears),
            10 => Ok(MortgageTerm::TenYears),
            25 => Ok(MortgageTerm::TwentyFiveYears),
            other => Err(CalculatorError::UnsupportedTerm(other)),
        }
    }
}

impl From<MortgageTerm> for u32 {
    fn from(term: MortgageTerm) -> u32 {
        term.years()
    }
}

/// Everything the user controls in the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorInputs {
    pub purchase_price: f64,
    pub property_type: PropertyType,
    /// Estimated annual appreciation in percent
    pub appreciation_rate_pct: f64,

    pub down_payment_pct: f64,
    pub first_mortgage_rate_pct: f64,
    pub sba_rate_pct: f64,
    pub first_mortgage_term: MortgageTerm,

    /// Current monthly rent for comparable space
    pub monthly_rent: f64,
    pub annual_rent_increase_pct: f64,

    /// Expected years in the building; bounds the chart series
    pub occupancy_years: u32,
    /// Marginal income tax bracket in percent
    pub tax_bracket_pct: f64,
}

impl Default for CalculatorInputs {
    fn default() -> Self {
        Self {
            purchase_price: 1_000_000.0,
            property_type: PropertyType::Office,
            appreciation_rate_pct: 2.0,
            down_payment_pct: 10.0,
            first_mortgage_rate_pct: 6.0,
            sba_rate_pct: 5.0,
            first_mortgage_term: MortgageTerm::TenYears,
            monthly_rent: 5_000.0,
            annual_rent_increase_pct: 3.0,
            occupancy_years: 10,
            tax_bracket_pct: 25.0,
        }
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<()> {
    // NaN fails both comparisons and is rejected too
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(CalculatorError::OutOfRange { field, value, min, max })
    }
}

impl CalculatorInputs {
    /// Check every input against the ranges the calculator accepts
    pub fn validate(&self) -> Result<()> {
        check_range("purchase_price", self.purchase_price, 100_000.0, 15_000_000.0)?;
        check_range("appreciation_rate_pct", self.appreciation_rate_pct, 0.0, 7.0)?;
        check_range("down_payment_pct", self.down_payment_pct, 10.0, 25.0)?;
        check_range("first_mortgage_rate_pct", self.first_mortgage_rate_pct, 3.0, 12.0)?;
        check_range("sba_rate_pct", self.sba_rate_pct, 2.0, 8.0)?;
        check_range("monthly_rent", self.monthly_rent, 1_000.0, 50_000.0)?;
        check_range("annual_rent_increase_pct", self.annual_rent_increase_pct, 0.0, 10.0)?;
        check_range("occupancy_years", self.occupancy_years as f64, 1.0, 30.0)?;
        check_range("tax_bracket_pct", self.tax_bracket_pct, 15.0, 37.0)?;
        Ok(())
    }

    pub fn down_payment(&self) -> f64 {
        self.purchase_price * (self.down_payment_pct / 100.0)
    }

    /// Build the engine scenario using the fixed SBA 504 structure
    pub fn to_scenario(&self, assumptions: &Assumptions) -> Scenario {
        Scenario {
            property: PropertyScenario {
                purchase_price: self.purchase_price,
                down_payment: self.down_payment(),
                appreciation_rate_pct: self.appreciation_rate_pct,
                property_tax_rate_pct: assumptions.property_tax_rate_pct,
                insurance_rate_pct: assumptions.insurance_rate_pct,
            },
            first_mortgage: LoanTerms::new(
                self.purchase_price * assumptions.first_mortgage_share,
                self.first_mortgage_rate_pct,
                self.first_mortgage_term.years(),
            ),
            sba_loan: LoanTerms::new(
                self.purchase_price * assumptions.sba_share,
                self.sba_rate_pct,
                assumptions.sba_term_years,
            ),
            rent: RentScenario {
                initial_monthly_rent: self.monthly_rent,
                annual_increase_pct: self.annual_rent_increase_pct,
            },
            tax: TaxProfile {
                income_tax_rate_pct: self.tax_bracket_pct,
                building_value_fraction: assumptions.building_value_fraction,
            },
        }
    }
}
