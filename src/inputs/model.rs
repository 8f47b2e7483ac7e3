//! Engine-level scenario description
//!
//! Plain values handed to the analysis functions. Nothing here is validated;
//! callers are expected to supply sensible ranges (see `CalculatorInputs`).

use serde::{Deserialize, Serialize};

use crate::loan::LoanTerms;

/// The property being purchased
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PropertyScenario {
    pub purchase_price: f64,

    /// Cash paid at closing (purchase price × down payment percent)
    pub down_payment: f64,

    /// Annual appreciation in percent
    pub appreciation_rate_pct: f64,

    /// Annual property tax in percent of purchase price
    pub property_tax_rate_pct: f64,

    /// Annual insurance in percent of purchase price
    pub insurance_rate_pct: f64,
}

impl PropertyScenario {
    pub fn monthly_property_tax(&self) -> f64 {
        self.purchase_price * (self.property_tax_rate_pct / 100.0) / 12.0
    }

    pub fn monthly_insurance(&self) -> f64 {
        self.purchase_price * (self.insurance_rate_pct / 100.0) / 12.0
    }

    /// Flat monthly share of first-year appreciation
    pub fn monthly_appreciation(&self) -> f64 {
        self.purchase_price * (self.appreciation_rate_pct / 100.0) / 12.0
    }
}

/// The lease that ownership is compared against
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentScenario {
    pub initial_monthly_rent: f64,

    /// Annual escalation in percent, applied on each lease anniversary
    pub annual_increase_pct: f64,
}

/// Owner's tax situation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxProfile {
    /// Marginal income tax rate in percent
    pub income_tax_rate_pct: f64,

    /// Depreciable fraction of the purchase price
    pub building_value_fraction: f64,
}

/// Complete two-loan buy-vs-rent scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub property: PropertyScenario,
    pub first_mortgage: LoanTerms,
    pub sba_loan: LoanTerms,
    pub rent: RentScenario,
    pub tax: TaxProfile,
}

impl Scenario {
    /// Depreciable building value
    pub fn building_value(&self) -> f64 {
        self.property.purchase_price * self.tax.building_value_fraction
    }

    /// Combined debt service of both loans
    pub fn monthly_debt_service(&self) -> f64 {
        self.first_mortgage.monthly_payment() + self.sba_loan.monthly_payment()
    }

    /// Debt service plus property tax and insurance, before tax benefits
    pub fn monthly_ownership_payment(&self) -> f64 {
        self.monthly_debt_service()
            + self.property.monthly_property_tax()
            + self.property.monthly_insurance()
    }
}
