//! Search for the month where owning becomes cheaper than renting

use super::rent::rent_at_month;
use super::tax::scenario_tax_benefit;
use crate::inputs::Scenario;

/// Default search horizon (30 years)
pub const CROSSOVER_HORIZON_MONTHS: u32 = 360;

/// First month at which cumulative net ownership cost drops below cumulative
/// rent, or `None` if that never happens within 30 years.
pub fn crossover_month(scenario: &Scenario) -> Option<u32> {
    crossover_month_within(scenario, CROSSOVER_HORIZON_MONTHS)
}

/// [`crossover_month`] with an explicit horizon.
///
/// Ownership starts at the down payment. Each month adds debt service, property
/// tax and insurance, less that month's tax benefit, then credits back equity:
/// the *average* monthly principal repaid so far (cumulative / month) and a flat
/// monthly share of first-year appreciation.
pub fn crossover_month_within(scenario: &Scenario, horizon_months: u32) -> Option<u32> {
    let property = &scenario.property;
    let ownership_payment = scenario.monthly_ownership_payment();
    let monthly_appreciation = property.monthly_appreciation();

    let mut cumulative_rent_cost = 0.0;
    let mut cumulative_ownership_cost = property.down_payment;

    for month in 1..=horizon_months {
        cumulative_rent_cost += rent_at_month(
            scenario.rent.initial_monthly_rent,
            scenario.rent.annual_increase_pct,
            month,
        );

        cumulative_ownership_cost += ownership_payment - scenario_tax_benefit(scenario, month);

        let average_principal_paid = (scenario.first_mortgage.principal_paid(month)
            + scenario.sba_loan.principal_paid(month))
            / month as f64;
        cumulative_ownership_cost -= average_principal_paid + monthly_appreciation;

        if cumulative_ownership_cost < cumulative_rent_cost {
            log::debug!(
                "Crossover at month {}: ownership {:.2} < rent {:.2}",
                month,
                cumulative_ownership_cost,
                cumulative_rent_cost
            );
            return Some(month);
        }
    }

    log::debug!("No crossover within {} months", horizon_months);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::inputs::{CalculatorInputs, PropertyScenario, RentScenario, TaxProfile};
    use crate::loan::LoanTerms;

    fn scenario_with(inputs: CalculatorInputs) -> Scenario {
        inputs.to_scenario(&Assumptions::default())
    }

    #[test]
    fn test_default_crossover() {
        let scenario = scenario_with(CalculatorInputs::default());
        assert_eq!(crossover_month(&scenario), Some(33));
    }

    #[test]
    fn test_higher_rent_crosses_sooner() {
        let expected = [(10_000.0, 13), (20_000.0, 6), (40_000.0, 3)];
        for &(rent, month) in &expected {
            let scenario = scenario_with(CalculatorInputs {
                monthly_rent: rent,
                ..Default::default()
            });
            assert_eq!(crossover_month(&scenario), Some(month), "rent {}", rent);
        }
    }

    #[test]
    fn test_flat_rent_delays_crossover() {
        let scenario = scenario_with(CalculatorInputs {
            annual_rent_increase_pct: 0.0,
            ..Default::default()
        });
        assert_eq!(crossover_month(&scenario), Some(34));
    }

    #[test]
    fn test_no_crossover_when_rent_is_cheap() {
        let scenario = scenario_with(CalculatorInputs {
            monthly_rent: 1_000.0,
            ..Default::default()
        });
        assert_eq!(crossover_month(&scenario), None);

        let flat = scenario_with(CalculatorInputs {
            monthly_rent: 1_000.0,
            annual_rent_increase_pct: 0.0,
            appreciation_rate_pct: 0.0,
            ..Default::default()
        });
        assert_eq!(crossover_month(&flat), None);
    }

    #[test]
    fn test_zero_rate_loans() {
        let mut scenario = scenario_with(CalculatorInputs::default());
        scenario.first_mortgage.annual_rate_pct = 0.0;
        scenario.sba_loan.annual_rate_pct = 0.0;
        assert_eq!(crossover_month(&scenario), Some(17));
    }

    fn all_cash_scenario(down_payment: f64) -> Scenario {
        Scenario {
            property: PropertyScenario {
                purchase_price: 100_000.0,
                down_payment,
                appreciation_rate_pct: 2.0,
                property_tax_rate_pct: 1.1,
                insurance_rate_pct: 0.5,
            },
            first_mortgage: LoanTerms::new(0.0, 6.0, 10),
            sba_loan: LoanTerms::new(0.0, 5.0, 25),
            rent: RentScenario {
                initial_monthly_rent: 5_000.0,
                annual_increase_pct: 3.0,
            },
            tax: TaxProfile {
                income_tax_rate_pct: 25.0,
                building_value_fraction: 0.8,
            },
        }
    }

    #[test]
    fn test_immediate_crossover() {
        assert_eq!(crossover_month(&all_cash_scenario(0.0)), Some(1));
    }

    #[test]
    fn test_all_cash_purchase_recovers_outlay() {
        assert_eq!(crossover_month(&all_cash_scenario(100_000.0)), Some(20));
    }

    #[test]
    fn test_horizon_bounds_search() {
        let scenario = scenario_with(CalculatorInputs::default());
        assert_eq!(crossover_month_within(&scenario, 32), None);
        assert_eq!(crossover_month_within(&scenario, 33), Some(33));
    }
}
