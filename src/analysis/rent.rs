//! Rent projection with annual lease escalation

/// Monthly rent after `months_passed` months.
///
/// Escalation is applied on each full lease year, so rent is constant for
/// months `12k..=12k+11`.
pub fn rent_at_month(initial_rent: f64, annual_increase_pct: f64, months_passed: u32) -> f64 {
    let years_passed = months_passed / 12;
    initial_rent * (1.0 + annual_increase_pct / 100.0).powi(years_passed as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_rent_after_first_anniversary() {
        assert_abs_diff_eq!(rent_at_month(5000.0, 3.0, 13), 5150.0, epsilon = 1e-9);
        assert_eq!(rent_at_month(5000.0, 3.0, 0), 5000.0);
    }

    #[test]
    fn test_rent_constant_within_year() {
        for year in 0..30 {
            let start = rent_at_month(5000.0, 3.0, year * 12);
            for month in year * 12..year * 12 + 12 {
                assert_eq!(rent_at_month(5000.0, 3.0, month), start);
            }
        }
    }

    #[test]
    fn test_rent_steps_up_each_year() {
        for year in 1..30 {
            let before = rent_at_month(5000.0, 2.5, year * 12 - 1);
            let after = rent_at_month(5000.0, 2.5, year * 12);
            assert!(after > before, "year {}: {} <= {}", year, after, before);
        }
    }

    #[test]
    fn test_zero_increase_is_flat() {
        assert_eq!(rent_at_month(7500.0, 0.0, 359), 7500.0);
    }
}
