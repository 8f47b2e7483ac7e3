//! Fixed-rate amortization for a single loan
//!
//! Monthly compounding, level payments, payments in arrears. All rates are
//! annual percentages (6.0 means 6%).

use serde::{Deserialize, Serialize};

/// Convert an annual percentage rate into a monthly decimal rate
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Level monthly payment that fully amortizes `principal` over `term_years`.
///
/// A zero rate falls back to straight-line repayment (`principal / n`).
/// `term_years` must be non-zero; a zero term yields NaN/∞ rather than an error.
///
/// # Arguments
/// * `principal` - Loan amount
/// * `annual_rate_pct` - Annual interest rate in percent
/// * `term_years` - Amortization term in years
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, term_years: u32) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let total_payments = (term_years * 12) as f64;

    if rate == 0.0 {
        return principal / total_payments;
    }

    let growth = (1.0 + rate).powf(total_payments);
    principal * rate * growth / (growth - 1.0)
}

/// Cumulative principal repaid after `months` payments.
///
/// `months` is capped at the loan term. With a non-zero rate this walks the
/// amortization schedule month by month so the result matches the schedule
/// implied by [`monthly_payment`] exactly.
pub fn principal_paid(principal: f64, annual_rate_pct: f64, term_years: u32, months: u32) -> f64 {
    let total_payments = term_years * 12;
    let months_to_calculate = months.min(total_payments);

    if monthly_rate(annual_rate_pct) == 0.0 {
        return (principal / total_payments as f64) * months_to_calculate as f64;
    }

    AmortizationSchedule::new(principal, annual_rate_pct, term_years)
        .take(months_to_calculate as usize)
        .map(|row| row.principal)
        .sum()
}

/// Approximate interest portion of the payment in `month_number` (1-indexed).
///
/// Assumes the balance decays geometrically at the monthly rate:
/// `principal * (1 - r)^(month - 1) * r`. This is not the scheduled interest;
/// it drifts away from [`AmortizationSchedule`] over long horizons. Only the
/// tax benefit estimate uses it.
pub fn interest_for_month(principal: f64, annual_rate_pct: f64, month_number: u32) -> f64 {
    let rate = monthly_rate(annual_rate_pct);
    let remaining_principal = principal * (1.0 - rate).powf(month_number as f64 - 1.0);
    remaining_principal * rate
}

/// One month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    /// Payment number (1-indexed)
    pub month: u32,
    pub payment: f64,
    pub interest: f64,
    pub principal: f64,
    /// Balance after this month's payment
    pub remaining_balance: f64,
}

/// Month-by-month amortization schedule.
///
/// Yields one row per payment until the term is exhausted. This is the only
/// place the amortization recurrence is implemented.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    rate: f64,
    payment: f64,
    remaining: f64,
    month: u32,
    total_payments: u32,
}

impl AmortizationSchedule {
    pub fn new(principal: f64, annual_rate_pct: f64, term_years: u32) -> Self {
        Self {
            rate: monthly_rate(annual_rate_pct),
            payment: monthly_payment(principal, annual_rate_pct, term_years),
            remaining: principal,
            month: 0,
            total_payments: term_years * 12,
        }
    }

    /// Level payment used by every row
    pub fn payment(&self) -> f64 {
        self.payment
    }

    /// Outstanding balance before the next payment
    pub fn remaining_balance(&self) -> f64 {
        self.remaining
    }
}

impl Iterator for AmortizationSchedule {
    type Item = AmortizationRow;

    fn next(&mut self) -> Option<Self::Item> {
        if self.month >= self.total_payments {
            return None;
        }
        self.month += 1;

        let interest = self.remaining * self.rate;
        let principal = self.payment - interest;
        self.remaining -= principal;

        Some(AmortizationRow {
            month: self.month,
            payment: self.payment,
            interest,
            principal,
            remaining_balance: self.remaining,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.total_payments - self.month) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AmortizationSchedule {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_monthly_payment_standard_table() {
        // $400k at 6% over 10 years
        let payment = monthly_payment(400_000.0, 6.0, 10);
        assert_abs_diff_eq!(payment, 4440.82, epsilon = 0.01);
    }

    #[test]
    fn test_monthly_payment_zero_rate() {
        assert_eq!(monthly_payment(120_000.0, 0.0, 10), 1000.0);
    }

    #[test]
    fn test_payments_cover_principal() {
        for &(principal, rate, term) in &[
            (500_000.0, 6.0, 10),
            (400_000.0, 5.0, 25),
            (1_000.0, 0.125, 7),
            (2_500_000.0, 12.0, 25),
        ] {
            let total = monthly_payment(principal, rate, term) * (term * 12) as f64;
            assert!(total >= principal, "{} < {}", total, principal);
        }
    }

    #[test]
    fn test_principal_paid_boundaries() {
        assert_eq!(principal_paid(400_000.0, 6.0, 10, 0), 0.0);
        assert_relative_eq!(principal_paid(400_000.0, 6.0, 10, 120), 400_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_principal_paid_capped_at_term() {
        let at_term = principal_paid(400_000.0, 6.0, 10, 120);
        let beyond = principal_paid(400_000.0, 6.0, 10, 360);
        assert_eq!(at_term, beyond);
    }

    #[test]
    fn test_principal_paid_monotonic() {
        let mut prior = 0.0;
        for months in 0..=300 {
            let paid = principal_paid(400_000.0, 5.0, 25, months);
            assert!(paid >= prior, "month {}: {} < {}", months, paid, prior);
            prior = paid;
        }
    }

    #[test]
    fn test_principal_paid_zero_rate_is_linear() {
        assert_eq!(principal_paid(120_000.0, 0.0, 10, 60), 60_000.0);
        assert_eq!(principal_paid(120_000.0, 0.0, 10, 200), 120_000.0);
    }

    #[test]
    fn test_principal_paid_reference_values() {
        assert_abs_diff_eq!(principal_paid(500_000.0, 6.0, 10, 60), 212_870.11, epsilon = 0.01);
        assert_abs_diff_eq!(principal_paid(400_000.0, 5.0, 25, 120), 104_302.10, epsilon = 0.01);
    }

    #[test]
    fn test_schedule_rows() {
        let schedule = AmortizationSchedule::new(400_000.0, 6.0, 10);
        assert_eq!(schedule.len(), 120);

        let rows: Vec<_> = schedule.collect();
        let first = rows[0];
        assert_eq!(first.month, 1);
        assert_abs_diff_eq!(first.interest, 2000.0, epsilon = 1e-9);
        assert_abs_diff_eq!(first.principal, first.payment - 2000.0, epsilon = 1e-9);

        // Principal share grows as the balance falls
        assert!(rows[60].principal > rows[0].principal);
        assert_abs_diff_eq!(rows[119].remaining_balance, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_schedule_balance_before_payment() {
        let mut schedule = AmortizationSchedule::new(500_000.0, 6.0, 10);
        assert_abs_diff_eq!(schedule.payment(), monthly_payment(500_000.0, 6.0, 10));
        assert_eq!(schedule.remaining_balance(), 500_000.0);

        let paid: f64 = schedule.by_ref().take(60).map(|row| row.principal).sum();
        assert_abs_diff_eq!(schedule.remaining_balance(), 500_000.0 - paid, epsilon = 1e-6);
        assert_abs_diff_eq!(schedule.remaining_balance(), 500_000.0 - 212_870.11, epsilon = 0.01);

        let next = schedule.next().unwrap();
        assert_eq!(next.month, 61);
        assert_abs_diff_eq!(next.payment, schedule.payment());
    }

    #[test]
    fn test_interest_estimate_geometric_decay() {
        assert_abs_diff_eq!(interest_for_month(500_000.0, 6.0, 1), 2500.0, epsilon = 1e-9);
        assert_abs_diff_eq!(interest_for_month(500_000.0, 6.0, 13), 2354.06, epsilon = 0.01);
    }

    #[test]
    fn test_interest_estimate_differs_from_schedule() {
        // A 10-year loan sheds principal much faster than the decay estimate assumes
        let scheduled = AmortizationSchedule::new(500_000.0, 6.0, 10)
            .nth(59)
            .map(|row| row.interest)
            .unwrap();
        let estimated = interest_for_month(500_000.0, 6.0, 60);
        assert_abs_diff_eq!(scheduled, 1456.12, epsilon = 0.01);
        assert_abs_diff_eq!(estimated, 1859.95, epsilon = 0.01);
    }
}
