//! Buy-vs-rent analysis built on the loan math
//!
//! - Rent projection with annual escalation
//! - Tax benefit from interest, depreciation, and property tax deductions
//! - Equity from down payment, appreciation, and principal repaid
//! - Crossover search comparing cumulative ownership and rent costs

mod crossover;
mod equity;
mod rent;
mod tax;

pub use crossover::{crossover_month, crossover_month_within, CROSSOVER_HORIZON_MONTHS};
pub use equity::{
    appreciation_at_month, equity_at_month, equity_breakdown, equity_doubling_month,
    scenario_equity, EquityBreakdown,
};
pub use rent::rent_at_month;
pub use tax::{
    average_tax_benefit, monthly_depreciation, monthly_tax_benefit, scenario_tax_benefit,
    DEPRECIATION_YEARS,
};
