//! Projection engine: turns calculator inputs into the full buy-vs-rent report

use crate::analysis::{
    average_tax_benefit, crossover_month_within, equity_breakdown, equity_doubling_month,
    rent_at_month, scenario_equity, scenario_tax_benefit, CROSSOVER_HORIZON_MONTHS,
};
use crate::assumptions::Assumptions;
use crate::inputs::{CalculatorInputs, Scenario};
use super::result::{EquityRow, PaymentBreakdown, PaymentComparisonRow, ProjectionResult};

/// Shape of the projection output
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Spacing of the payment comparison series
    pub payment_step_months: u32,

    /// Month at which the headline equity figure is taken
    pub equity_milestone_months: u32,

    /// Cap on the charted occupancy period
    pub max_chart_years: u32,

    /// Horizon for the crossover and equity doubling searches
    pub horizon_months: u32,

    /// Months averaged for the headline tax benefit
    pub tax_benefit_average_months: u32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            payment_step_months: 6,
            equity_milestone_months: 60, // 5 years
            max_chart_years: 30,
            horizon_months: CROSSOVER_HORIZON_MONTHS,
            tax_benefit_average_months: 12,
        }
    }
}

/// Main projection engine
#[derive(Debug, Clone)]
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self { assumptions, config }
    }

    /// Project a set of calculator inputs
    pub fn project(&self, inputs: &CalculatorInputs) -> ProjectionResult {
        let scenario = inputs.to_scenario(&self.assumptions);
        self.project_scenario(scenario, inputs.occupancy_years)
    }

    /// Project an engine scenario, charting `occupancy_years` (capped)
    pub fn project_scenario(&self, scenario: Scenario, occupancy_years: u32) -> ProjectionResult {
        let chart_years = occupancy_years.min(self.config.max_chart_years);
        let payments = self.payment_breakdown(&scenario);

        let crossover_month = crossover_month_within(&scenario, self.config.horizon_months);
        let equity_at_milestone = scenario_equity(&scenario, self.config.equity_milestone_months);
        let equity_doubling_month = equity_doubling_month(&scenario, self.config.horizon_months);

        log::debug!(
            "Projected price={:.0} rent={:.0}: crossover={:?} equity@{}={:.2}",
            scenario.property.purchase_price,
            scenario.rent.initial_monthly_rent,
            crossover_month,
            self.config.equity_milestone_months,
            equity_at_milestone,
        );

        ProjectionResult {
            payment_comparison: self.payment_comparison(&scenario, &payments, chart_years),
            equity_building: self.equity_building(&scenario, chart_years),
            scenario,
            payments,
            crossover_month,
            equity_milestone_month: self.config.equity_milestone_months,
            equity_at_milestone,
            equity_doubling_month,
        }
    }

    fn payment_breakdown(&self, scenario: &Scenario) -> PaymentBreakdown {
        let first_mortgage_payment = scenario.first_mortgage.monthly_payment();
        let sba_payment = scenario.sba_loan.monthly_payment();
        let property_tax = scenario.property.monthly_property_tax();
        let insurance = scenario.property.monthly_insurance();
        let total_payment = scenario.monthly_ownership_payment();

        let average_tax_benefit =
            average_tax_benefit(scenario, self.config.tax_benefit_average_months);

        PaymentBreakdown {
            first_mortgage_payment,
            sba_payment,
            property_tax,
            insurance,
            total_payment,
            average_tax_benefit,
            effective_payment: total_payment - average_tax_benefit,
        }
    }

    /// Ownership vs rent every `payment_step_months`, from move-in through the chart horizon
    fn payment_comparison(
        &self,
        scenario: &Scenario,
        payments: &PaymentBreakdown,
        chart_years: u32,
    ) -> Vec<PaymentComparisonRow> {
        let step = self.config.payment_step_months.max(1) as usize;

        (0..=chart_years * 12)
            .step_by(step)
            .map(|month| {
                // No tax benefit accrues before the first payment
                let tax_benefit = if month == 0 {
                    0.0
                } else {
                    scenario_tax_benefit(scenario, month)
                };
                PaymentComparisonRow {
                    month,
                    buy_payment: payments.total_payment - tax_benefit,
                    rent_payment: rent_at_month(
                        scenario.rent.initial_monthly_rent,
                        scenario.rent.annual_increase_pct,
                        month,
                    ),
                }
            })
            .collect()
    }

    /// Year-end equity composition for years `0..=chart_years`
    fn equity_building(&self, scenario: &Scenario, chart_years: u32) -> Vec<EquityRow> {
        (0..=chart_years)
            .map(|year| {
                let breakdown = equity_breakdown(scenario, year * 12);
                EquityRow {
                    year,
                    down_payment: breakdown.down_payment,
                    principal_paid: breakdown.principal_paid,
                    appreciation: breakdown.appreciation,
                }
            })
            .collect()
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new(Assumptions::default(), ProjectionConfig::default())
    }
}
