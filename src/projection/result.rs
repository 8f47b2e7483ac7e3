//! Output structures for a calculator projection

use serde::{Deserialize, Serialize};

use crate::inputs::Scenario;

/// Monthly cost of owning, itemised
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub first_mortgage_payment: f64,
    pub sba_payment: f64,
    pub property_tax: f64,
    pub insurance: f64,
    /// Sum of the four items above
    pub total_payment: f64,
    /// Mean monthly tax benefit over the first year
    pub average_tax_benefit: f64,
    /// Total payment less the average tax benefit
    pub effective_payment: f64,
}

/// One point of the ownership-vs-rent payment series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentComparisonRow {
    pub month: u32,
    /// Total monthly payment less that month's tax benefit
    pub buy_payment: f64,
    pub rent_payment: f64,
}

/// Equity composition at the end of a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityRow {
    pub year: u32,
    pub down_payment: f64,
    pub principal_paid: f64,
    pub appreciation: f64,
}

impl EquityRow {
    pub fn total(&self) -> f64 {
        self.down_payment + self.principal_paid + self.appreciation
    }
}

/// Complete projection for one set of calculator inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub scenario: Scenario,
    pub payments: PaymentBreakdown,

    /// First month owning beats renting (None if never within the horizon)
    pub crossover_month: Option<u32>,

    /// Month at which `equity_at_milestone` is measured
    pub equity_milestone_month: u32,
    pub equity_at_milestone: f64,

    /// First month equity reaches twice the down payment
    pub equity_doubling_month: Option<u32>,

    pub payment_comparison: Vec<PaymentComparisonRow>,
    pub equity_building: Vec<EquityRow>,
}

impl ProjectionResult {
    /// Headline comparisons derived from the projection
    pub fn summary(&self) -> Insights {
        let payments = &self.payments;
        let initial_rent = self.scenario.rent.initial_monthly_rent;

        Insights {
            monthly_difference: payments.effective_payment - initial_rent,
            tax_benefit_share_pct: payments.average_tax_benefit / payments.effective_payment * 100.0,
            crossover: self.crossover_month.map(YearsMonths::from_months),
            equity_gain_at_milestone: self.equity_at_milestone - self.scenario.property.down_payment,
        }
    }
}

/// A month count split into whole years and leftover months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearsMonths {
    pub years: u32,
    pub months: u32,
}

impl YearsMonths {
    pub fn from_months(total: u32) -> Self {
        Self {
            years: total / 12,
            months: total % 12,
        }
    }
}

/// Summary comparisons for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Effective ownership payment minus current rent (positive = buying costs more)
    pub monthly_difference: f64,
    /// Average tax benefit as a percent of the effective payment
    pub tax_benefit_share_pct: f64,
    pub crossover: Option<YearsMonths>,
    /// Equity built beyond the down payment at the milestone month
    pub equity_gain_at_milestone: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_years_months_split() {
        assert_eq!(YearsMonths::from_months(33), YearsMonths { years: 2, months: 9 });
        assert_eq!(YearsMonths::from_months(12), YearsMonths { years: 1, months: 0 });
        assert_eq!(YearsMonths::from_months(1), YearsMonths { years: 0, months: 1 });
    }

    #[test]
    fn test_equity_row_total() {
        let row = EquityRow {
            year: 1,
            down_payment: 100.0,
            principal_paid: 20.0,
            appreciation: 5.0,
        };
        assert_eq!(row.total(), 125.0);
    }
}
