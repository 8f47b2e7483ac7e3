//! Owner equity: down payment, appreciation, and principal repaid

use serde::{Deserialize, Serialize};

use crate::inputs::Scenario;
use crate::loan::LoanTerms;

/// Market value gain after `months`, compounding annually at a fractional-year exponent
pub fn appreciation_at_month(purchase_price: f64, appreciation_rate_pct: f64, months: u32) -> f64 {
    let appreciated_value =
        purchase_price * (1.0 + appreciation_rate_pct / 100.0).powf(months as f64 / 12.0);
    appreciated_value - purchase_price
}

/// Total owner equity after `months`.
///
/// Appreciation is evaluated continuously (`months / 12` as a real exponent),
/// unlike rent which steps once a year.
pub fn equity_at_month(
    purchase_price: f64,
    down_payment: f64,
    first_mortgage: &LoanTerms,
    sba_loan: &LoanTerms,
    appreciation_rate_pct: f64,
    months: u32,
) -> f64 {
    let mut equity = down_payment;
    equity += appreciation_at_month(purchase_price, appreciation_rate_pct, months);
    equity += first_mortgage.principal_paid(months) + sba_loan.principal_paid(months);
    equity
}

/// [`equity_at_month`] for a full scenario
pub fn scenario_equity(scenario: &Scenario, months: u32) -> f64 {
    equity_at_month(
        scenario.property.purchase_price,
        scenario.property.down_payment,
        &scenario.first_mortgage,
        &scenario.sba_loan,
        scenario.property.appreciation_rate_pct,
        months,
    )
}

/// Equity split into its sources
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquityBreakdown {
    pub down_payment: f64,
    /// Principal repaid on both loans
    pub principal_paid: f64,
    pub appreciation: f64,
}

impl EquityBreakdown {
    pub fn total(&self) -> f64 {
        self.down_payment + self.principal_paid + self.appreciation
    }
}

pub fn equity_breakdown(scenario: &Scenario, months: u32) -> EquityBreakdown {
    EquityBreakdown {
        down_payment: scenario.property.down_payment,
        principal_paid: scenario.first_mortgage.principal_paid(months)
            + scenario.sba_loan.principal_paid(months),
        appreciation: appreciation_at_month(
            scenario.property.purchase_price,
            scenario.property.appreciation_rate_pct,
            months,
        ),
    }
}

/// First month in `1..=horizon_months` where equity reaches twice the down payment
pub fn equity_doubling_month(scenario: &Scenario, horizon_months: u32) -> Option<u32> {
    let target = scenario.property.down_payment * 2.0;
    (1..=horizon_months).find(|&month| scenario_equity(scenario, month) >= target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::inputs::CalculatorInputs;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn default_scenario() -> Scenario {
        CalculatorInputs::default().to_scenario(&Assumptions::default())
    }

    #[test]
    fn test_equity_at_purchase_is_down_payment() {
        let scenario = default_scenario();
        assert_eq!(scenario_equity(&scenario, 0), 100_000.0);
    }

    #[test]
    fn test_equity_after_five_years() {
        let scenario = default_scenario();
        assert_abs_diff_eq!(scenario_equity(&scenario, 60), 462_630.16, epsilon = 0.01);
    }

    #[test]
    fn test_breakdown_sums_to_equity() {
        let scenario = default_scenario();
        let breakdown = equity_breakdown(&scenario, 12);
        assert_abs_diff_eq!(breakdown.principal_paid, 45_883.74, epsilon = 0.01);
        assert_abs_diff_eq!(breakdown.appreciation, 20_000.0, epsilon = 1e-6);
        assert_relative_eq!(breakdown.total(), scenario_equity(&scenario, 12), max_relative = 1e-12);
    }

    #[test]
    fn test_appreciation_is_continuous() {
        // Half a year at 4% is sqrt(1.04) - 1, not zero
        let gain = appreciation_at_month(1_000_000.0, 4.0, 6);
        assert_abs_diff_eq!(gain, 1_000_000.0 * (1.04f64.sqrt() - 1.0), epsilon = 1e-6);
    }

    #[test]
    fn test_equity_doubling_month() {
        let scenario = default_scenario();
        assert_eq!(equity_doubling_month(&scenario, 360), Some(19));
        assert_eq!(equity_doubling_month(&scenario, 12), None);
    }
}
