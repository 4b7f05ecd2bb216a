//! Equated monthly installment (EMI) for an amortizing loan.
//!
//! The same formula backs both the "EMI" and the "Loan" tools; only the
//! labels differ (see [`LoanMode`]).
//!
//! # Formula
//!
//! | Symbol | Meaning |
//! |--------|---------|
//! | P | Principal |
//! | r | Monthly rate: annual rate ÷ 12 ÷ 100 |
//! | n | Number of months: tenure in years × 12 |
//!
//! `EMI = P × r × (1 + r)^n / ((1 + r)^n − 1)`, total paid is `EMI × n`
//! and total interest is total paid minus `P`. All three are rounded to the
//! nearest whole currency unit after computing with the unrounded EMI.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::{LoanCalculator, LoanInput, LoanMode};
//!
//! let input = LoanInput {
//!     principal: dec!(100000),
//!     annual_rate_percent: dec!(8.5),
//!     tenure_years: dec!(5),
//! };
//!
//! let result = LoanCalculator::new(LoanMode::Emi).calculate(&input).unwrap();
//!
//! assert_eq!(result.monthly_payment, dec!(2052));
//! assert_eq!(result.total_paid, dec!(123099));
//! assert_eq!(result.total_interest, dec!(23099));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::{MONTHS_PER_YEAR, round_to_unit};

/// Errors that can occur during loan calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoanError {
    /// The principal must be greater than zero.
    #[error("principal must be positive, got {0}")]
    InvalidPrincipal(Decimal),

    /// The annual interest rate must be greater than zero.
    #[error("annual interest rate must be positive, got {0}")]
    InvalidRate(Decimal),

    /// The tenure must be greater than zero.
    #[error("tenure must be positive, got {0}")]
    InvalidTenure(Decimal),

    /// An intermediate value left the range of [`Decimal`].
    #[error("loan figures are too large to calculate")]
    Overflow,
}

/// Which tool the calculation is presented under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoanMode {
    #[default]
    Emi,
    Loan,
}

impl LoanMode {
    /// Heading shown above the monthly payment.
    pub fn payment_label(&self) -> &'static str {
        match self {
            Self::Emi => "Monthly EMI",
            Self::Loan => "Monthly Payment",
        }
    }

    /// Label of the button that triggers the calculation.
    pub fn action_label(&self) -> &'static str {
        match self {
            Self::Emi => "Calculate EMI",
            Self::Loan => "Calculate Loan",
        }
    }
}

/// Input values for a loan calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    /// Amount borrowed.
    pub principal: Decimal,

    /// Annual interest rate as a percentage (8.5 means 8.5%).
    pub annual_rate_percent: Decimal,

    /// Loan tenure in years. Fractional years are allowed.
    pub tenure_years: Decimal,
}

/// Result of a loan calculation, rounded to whole currency units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Decimal,
    pub total_paid: Decimal,
    pub total_interest: Decimal,
}

/// Calculator for amortized loan payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanCalculator {
    mode: LoanMode,
}

impl LoanCalculator {
    pub fn new(mode: LoanMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> LoanMode {
        self.mode
    }

    /// Calculates the monthly installment, total paid and total interest.
    ///
    /// # Errors
    ///
    /// Returns [`LoanError`] if:
    /// - the principal, rate or tenure is zero or negative
    /// - an intermediate value overflows
    pub fn calculate(
        &self,
        input: &LoanInput,
    ) -> Result<LoanResult, LoanError> {
        if input.principal <= Decimal::ZERO {
            return Err(LoanError::InvalidPrincipal(input.principal));
        }
        if input.annual_rate_percent <= Decimal::ZERO {
            return Err(LoanError::InvalidRate(input.annual_rate_percent));
        }
        if input.tenure_years <= Decimal::ZERO {
            return Err(LoanError::InvalidTenure(input.tenure_years));
        }

        let rate = monthly_rate(input.annual_rate_percent);
        let months = input
            .tenure_years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or(LoanError::Overflow)?;
        let growth = growth_factor(rate, months).ok_or(LoanError::Overflow)?;

        let emi = self
            .monthly_payment(input.principal, rate, growth)
            .ok_or(LoanError::Overflow)?;
        let total = emi.checked_mul(months).ok_or(LoanError::Overflow)?;
        let interest = total - input.principal;

        debug!(
            mode = ?self.mode,
            emi = %emi,
            months = %months,
            "loan installment calculated"
        );

        Ok(LoanResult {
            monthly_payment: round_to_unit(emi),
            total_paid: round_to_unit(total),
            total_interest: round_to_unit(interest),
        })
    }

    /// `P × r × g / (g − 1)` where `g = (1 + r)^n`.
    fn monthly_payment(
        &self,
        principal: Decimal,
        rate: Decimal,
        growth: Decimal,
    ) -> Option<Decimal> {
        principal
            .checked_mul(rate)?
            .checked_mul(growth)?
            .checked_div(growth - Decimal::ONE)
    }
}

/// Converts an annual percentage rate to a monthly fraction.
pub(crate) fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / MONTHS_PER_YEAR / Decimal::ONE_HUNDRED
}

/// Computes `(1 + rate)^months`.
///
/// Whole month counts use exact integer powers; fractional counts fall back
/// to the decimal power. Returns `None` on overflow.
pub(crate) fn growth_factor(
    rate: Decimal,
    months: Decimal,
) -> Option<Decimal> {
    let base = Decimal::ONE + rate;
    if months.fract().is_zero() {
        base.checked_powu(months.to_u64()?)
    } else {
        base.checked_powd(months)
    }
}
