//! Goods and services tax (GST), added to or extracted from an amount.
//!
//! | Mode | Net | GST | Total |
//! |------|-----|-----|-------|
//! | Add | amount | amount × rate ÷ 100 | net + GST |
//! | Remove | amount × 100 ÷ (100 + rate) | amount − net | amount |
//!
//! Computed tax amounts are rounded to two decimal places; the net and GST
//! figures always add up to the total.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// The rates offered as one-tap presets. Any other rate may be entered as a
/// custom value.
pub const GST_PRESET_RATES: [Decimal; 4] = [
    Decimal::from_parts(5, 0, 0, false, 0),
    Decimal::from_parts(12, 0, 0, false, 0),
    Decimal::from_parts(18, 0, 0, false, 0),
    Decimal::from_parts(28, 0, 0, false, 0),
];

/// Rate selected when the GST tool opens.
pub const DEFAULT_GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 0);

/// Errors that can occur during GST calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GstError {
    /// There is nothing to tax.
    #[error("amount must not be zero")]
    ZeroAmount,

    /// Tax rates cannot be negative.
    #[error("GST rate must not be negative, got {0}")]
    NegativeRate(Decimal),

    /// An intermediate value left the range of [`Decimal`].
    #[error("amount is too large to calculate")]
    Overflow,
}

/// Whether the entered amount excludes or includes tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GstMode {
    /// The amount is net; tax is added on top.
    Add,
    /// The amount already includes tax; tax is extracted.
    Remove,
}

impl GstMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "add" | "exclusive" => Some(Self::Add),
            "remove" | "inclusive" => Some(Self::Remove),
            _ => None,
        }
    }
}

/// Net amount, tax and tax-inclusive total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstResult {
    pub net_amount: Decimal,
    pub gst_amount: Decimal,
    pub total_amount: Decimal,
}

/// Adds GST to, or removes GST from, an amount.
///
/// # Errors
///
/// Returns [`GstError`] if the amount is zero, the rate is negative, or the
/// amount is too large.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use calc_core::calculations::{GstMode, calculate_gst};
///
/// let added = calculate_gst(dec!(1000), dec!(18), GstMode::Add).unwrap();
/// assert_eq!(added.gst_amount, dec!(180));
/// assert_eq!(added.total_amount, dec!(1180));
///
/// let removed = calculate_gst(dec!(1180), dec!(18), GstMode::Remove).unwrap();
/// assert_eq!(removed.net_amount, dec!(1000));
/// assert_eq!(removed.gst_amount, dec!(180));
/// ```
pub fn calculate_gst(
    amount: Decimal,
    rate: Decimal,
    mode: GstMode,
) -> Result<GstResult, GstError> {
    if amount.is_zero() {
        return Err(GstError::ZeroAmount);
    }
    if rate < Decimal::ZERO {
        return Err(GstError::NegativeRate(rate));
    }

    match mode {
        GstMode::Add => {
            let gst = amount
                .checked_mul(rate)
                .map(|taxed| round_half_up(taxed / Decimal::ONE_HUNDRED))
                .ok_or(GstError::Overflow)?;
            let total = amount.checked_add(gst).ok_or(GstError::Overflow)?;
            Ok(GstResult {
                net_amount: amount,
                gst_amount: gst,
                total_amount: total,
            })
        }
        GstMode::Remove => {
            let divisor = Decimal::ONE_HUNDRED
                .checked_add(rate)
                .ok_or(GstError::Overflow)?;
            let net = amount
                .checked_mul(Decimal::ONE_HUNDRED)
                .and_then(|scaled| scaled.checked_div(divisor))
                .map(round_half_up)
                .ok_or(GstError::Overflow)?;
            let gst = amount.checked_sub(net).ok_or(GstError::Overflow)?;
            Ok(GstResult {
                net_amount: net,
                gst_amount: gst,
                total_amount: amount,
            })
        }
    }
}
