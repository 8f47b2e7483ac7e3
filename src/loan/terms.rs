//! Terms of a single amortizing loan

use serde::{Deserialize, Serialize};

use super::amortization::{self, AmortizationSchedule};

/// One amortizing loan: the first mortgage or the SBA/CDC portion
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Loan amount at closing
    pub principal: f64,

    /// Annual interest rate in percent
    pub annual_rate_pct: f64,

    /// Amortization term in years
    pub term_years: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_pct: f64, term_years: u32) -> Self {
        Self {
            principal,
            annual_rate_pct,
            term_years,
        }
    }

    /// Number of scheduled monthly payments
    pub fn total_payments(&self) -> u32 {
        self.term_years * 12
    }

    pub fn monthly_payment(&self) -> f64 {
        amortization::monthly_payment(self.principal, self.annual_rate_pct, self.term_years)
    }

    /// Cumulative principal repaid after `months` payments
    pub fn principal_paid(&self, months: u32) -> f64 {
        amortization::principal_paid(self.principal, self.annual_rate_pct, self.term_years, months)
    }

    /// Approximate interest in `month_number`, see [`amortization::interest_for_month`]
    pub fn interest_for_month(&self, month_number: u32) -> f64 {
        amortization::interest_for_month(self.principal, self.annual_rate_pct, month_number)
    }

    pub fn schedule(&self) -> AmortizationSchedule {
        AmortizationSchedule::new(self.principal, self.annual_rate_pct, self.term_years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_loan_terms_delegate() {
        let loan = LoanTerms::new(400_000.0, 5.0, 25);
        assert_eq!(loan.total_payments(), 300);
        assert_abs_diff_eq!(loan.monthly_payment(), 2338.36, epsilon = 0.01);

        let from_schedule: f64 = loan.schedule().take(120).map(|row| row.principal).sum();
        assert_eq!(loan.principal_paid(120), from_schedule);
    }
}
