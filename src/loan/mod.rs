//! Loan math: level payments, amortization schedules, interest estimates

mod amortization;
mod terms;

pub use amortization::{
    interest_for_month, monthly_payment, monthly_rate, principal_paid, AmortizationRow,
    AmortizationSchedule,
};
pub use terms::LoanTerms;
