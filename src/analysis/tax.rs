//! Deduction-based tax benefit estimate for an owner-occupant

use crate::inputs::Scenario;
use crate::loan::LoanTerms;

/// Straight-line recovery period for commercial buildings
pub const DEPRECIATION_YEARS: f64 = 39.0;

/// Monthly straight-line depreciation on the building value
pub fn monthly_depreciation(building_value: f64) -> f64 {
    building_value / DEPRECIATION_YEARS / 12.0
}

/// Tax saved in `month` from deducting mortgage interest on both loans,
/// depreciation, and property tax.
///
/// Interest uses the geometric-decay estimate from
/// [`LoanTerms::interest_for_month`], not the amortization schedule.
/// The deduction is not capped against actual tax liability.
pub fn monthly_tax_benefit(
    purchase_price: f64,
    building_value: f64,
    first_mortgage: &LoanTerms,
    sba_loan: &LoanTerms,
    property_tax_rate_pct: f64,
    income_tax_rate_pct: f64,
    month: u32,
) -> f64 {
    let first_mortgage_interest = first_mortgage.interest_for_month(month);
    let sba_interest = sba_loan.interest_for_month(month);

    let depreciation = monthly_depreciation(building_value);
    let property_tax = purchase_price * (property_tax_rate_pct / 100.0) / 12.0;

    let total_deductions = first_mortgage_interest + sba_interest + depreciation + property_tax;
    total_deductions * (income_tax_rate_pct / 100.0)
}

/// [`monthly_tax_benefit`] for a full scenario
pub fn scenario_tax_benefit(scenario: &Scenario, month: u32) -> f64 {
    monthly_tax_benefit(
        scenario.property.purchase_price,
        scenario.building_value(),
        &scenario.first_mortgage,
        &scenario.sba_loan,
        scenario.property.property_tax_rate_pct,
        scenario.tax.income_tax_rate_pct,
        month,
    )
}

/// Mean monthly tax benefit over months `1..=months`
pub fn average_tax_benefit(scenario: &Scenario, months: u32) -> f64 {
    if months == 0 {
        return 0.0;
    }
    let total: f64 = (1..=months).map(|m| scenario_tax_benefit(scenario, m)).sum();
    total / months as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::inputs::CalculatorInputs;
    use approx::assert_abs_diff_eq;

    fn default_scenario() -> Scenario {
        CalculatorInputs::default().to_scenario(&Assumptions::default())
    }

    #[test]
    fn test_first_month_benefit() {
        // (2500 + 1666.67 interest + 1709.40 depreciation + 916.67 property tax) * 25%
        let scenario = default_scenario();
        assert_abs_diff_eq!(scenario_tax_benefit(&scenario, 1), 1698.18, epsilon = 0.01);
    }

    #[test]
    fn test_benefit_declines_with_interest() {
        let scenario = default_scenario();
        assert_abs_diff_eq!(scenario_tax_benefit(&scenario, 13), 1641.34, epsilon = 0.01);
        assert!(scenario_tax_benefit(&scenario, 120) < scenario_tax_benefit(&scenario, 13));
    }

    #[test]
    fn test_first_year_average() {
        let scenario = default_scenario();
        assert_abs_diff_eq!(average_tax_benefit(&scenario, 12), 1671.86, epsilon = 0.01);
        assert_eq!(average_tax_benefit(&scenario, 0), 0.0);
    }

    #[test]
    fn test_zero_tax_rate_yields_no_benefit() {
        let loan = LoanTerms::new(500_000.0, 6.0, 10);
        let benefit = monthly_tax_benefit(1_000_000.0, 800_000.0, &loan, &loan, 1.1, 0.0, 1);
        assert_eq!(benefit, 0.0);
    }

    #[test]
    fn test_depreciation_only() {
        let no_debt = LoanTerms::new(0.0, 6.0, 10);
        let benefit = monthly_tax_benefit(1_000_000.0, 780_000.0, &no_debt, &no_debt, 0.0, 100.0, 1);
        assert_abs_diff_eq!(benefit, 780_000.0 / 39.0 / 12.0, epsilon = 1e-9);
    }
}
