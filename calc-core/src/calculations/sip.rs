//! Future value of a systematic investment plan (SIP).
//!
//! A fixed contribution is invested at the start of every month and grows
//! at a monthly compound rate:
//!
//! `FV = P × ((1 + r)^n − 1) / r × (1 + r)`
//!
//! where `r` is the annual rate ÷ 100 ÷ 12 and `n` is years × 12.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{MONTHS_PER_YEAR, round_to_unit};
use crate::calculations::loan::{growth_factor, monthly_rate};

/// Errors that can occur during SIP calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SipError {
    /// The monthly contribution must be greater than zero.
    #[error("monthly investment must be positive, got {0}")]
    InvalidContribution(Decimal),

    /// The expected annual return must be greater than zero.
    #[error("expected return rate must be positive, got {0}")]
    InvalidRate(Decimal),

    /// The investment period must be greater than zero.
    #[error("investment period must be positive, got {0}")]
    InvalidPeriod(Decimal),

    /// An intermediate value left the range of [`Decimal`].
    #[error("investment figures are too large to calculate")]
    Overflow,
}

/// Input values for a SIP calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipInput {
    /// Amount invested each month.
    pub monthly_investment: Decimal,

    /// Expected annual return as a percentage.
    pub annual_rate_percent: Decimal,

    /// Investment period in years.
    pub years: Decimal,
}

/// Result of a SIP calculation, rounded to whole currency units.
///
/// `gains` is always exactly `total_value - invested`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SipResult {
    pub invested: Decimal,
    pub total_value: Decimal,
    pub gains: Decimal,
}

/// Calculator for SIP maturity value.
#[derive(Debug, Clone, Copy, Default)]
pub struct SipCalculator;

impl SipCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculates the maturity value of a monthly investment.
    ///
    /// # Errors
    ///
    /// Returns [`SipError`] if the contribution, rate or period is zero or
    /// negative, or if an intermediate value overflows.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use calc_core::calculations::{SipCalculator, SipInput};
    ///
    /// let input = SipInput {
    ///     monthly_investment: dec!(500),
    ///     annual_rate_percent: dec!(12),
    ///     years: dec!(10),
    /// };
    ///
    /// let result = SipCalculator::new().calculate(&input).unwrap();
    ///
    /// assert_eq!(result.invested, dec!(60000));
    /// assert_eq!(result.total_value, dec!(116170));
    /// assert_eq!(result.gains, dec!(56170));
    /// ```
    pub fn calculate(
        &self,
        input: &SipInput,
    ) -> Result<SipResult, SipError> {
        if input.monthly_investment <= Decimal::ZERO {
            return Err(SipError::InvalidContribution(input.monthly_investment));
        }
        if input.annual_rate_percent <= Decimal::ZERO {
            return Err(SipError::InvalidRate(input.annual_rate_percent));
        }
        if input.years <= Decimal::ZERO {
            return Err(SipError::InvalidPeriod(input.years));
        }

        let rate = monthly_rate(input.annual_rate_percent);
        let months = input
            .years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or(SipError::Overflow)?;
        let growth = growth_factor(rate, months).ok_or(SipError::Overflow)?;

        let total = self
            .future_value(input.monthly_investment, rate, growth)
            .ok_or(SipError::Overflow)?;
        let invested = input
            .monthly_investment
            .checked_mul(months)
            .ok_or(SipError::Overflow)?;

        debug!(total = %total, invested = %invested, "SIP future value calculated");

        let total_value = round_to_unit(total);
        let invested = round_to_unit(invested);
        Ok(SipResult {
            invested,
            total_value,
            gains: total_value - invested,
        })
    }

    /// `P × (g − 1) / r × (1 + r)` where `g = (1 + r)^n`.
    fn future_value(
        &self,
        contribution: Decimal,
        rate: Decimal,
        growth: Decimal,
    ) -> Option<Decimal> {
        contribution
            .checked_mul(growth - Decimal::ONE)?
            .checked_div(rate)?
            .checked_mul(Decimal::ONE + rate)
    }
}
