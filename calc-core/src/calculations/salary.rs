//! Monthly take-home salary.
//!
//! Net pay is basic pay plus allowances (HRA, DA, ...) minus deductions
//! (tax, provident fund, ...). Missing fields are the caller's zeros, so this
//! calculator always produces a result.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::MONTHS_PER_YEAR;

/// Net monthly and yearly salary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResult {
    /// Basic pay plus allowances minus deductions, per month.
    pub net: Decimal,

    /// Twelve months of net pay.
    pub yearly: Decimal,
}

/// Calculates net monthly and yearly salary.
///
/// Arithmetic saturates at the limits of [`Decimal`] instead of panicking.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::calculate_salary;
///
/// let result = calculate_salary(dec!(5000), dec!(2000), dec!(500));
///
/// assert_eq!(result.net, dec!(6500));
/// assert_eq!(result.yearly, dec!(78000));
/// ```
pub fn calculate_salary(
    basic: Decimal,
    allowances: Decimal,
    deductions: Decimal,
) -> SalaryResult {
    let net = basic.saturating_add(allowances).saturating_sub(deductions);
    if net < Decimal::ZERO {
        warn!(
            basic = %basic,
            allowances = %allowances,
            deductions = %deductions,
            net = %net,
            "Deductions exceed gross pay; net salary is negative"
        );
    }

    SalaryResult {
        net,
        yearly: net.saturating_mul(MONTHS_PER_YEAR),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn calculate_salary_adds_allowances_and_subtracts_deductions() {
        let result = calculate_salary(dec!(5000), dec!(2000), dec!(500));

        assert_eq!(
            result,
            SalaryResult {
                net: dec!(6500),
                yearly: dec!(78000),
            }
        );
    }

    #[test]
    fn calculate_salary_handles_all_zero_inputs() {
        let result = calculate_salary(Decimal::ZERO, Decimal::ZERO, Decimal::ZERO);

        assert_eq!(result.net, Decimal::ZERO);
        assert_eq!(result.yearly, Decimal::ZERO);
    }

    #[test]
    fn calculate_salary_keeps_fractional_pay() {
        let result = calculate_salary(dec!(1234.56), dec!(0.44), dec!(0));

        assert_eq!(result.net, dec!(1235.00));
        assert_eq!(result.yearly, dec!(14820.00));
    }

    #[test]
    fn calculate_salary_allows_negative_net() {
        let result = calculate_salary(dec!(1000), dec!(0), dec!(1500));

        assert_eq!(result.net, dec!(-500));
        assert_eq!(result.yearly, dec!(-6000));
    }

    #[test]
    fn calculate_salary_saturates_instead_of_overflowing() {
        let result = calculate_salary(Decimal::MAX, Decimal::MAX, Decimal::ZERO);

        assert_eq!(result.net, Decimal::MAX);
        assert_eq!(result.yearly, Decimal::MAX);
    }
}
