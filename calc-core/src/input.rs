//! Parsing of user-editable input fields.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a field cannot be read.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseInputError {
    #[error("field is empty")]
    Empty,

    #[error("invalid number '{0}'")]
    InvalidNumber(String),

    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
}

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_decimal_input(s: &str) -> String {
    s.trim().replace(',', "")
}

/// Parses a numeric field into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and scientific
/// notation (e.g. `"1e5"`).
///
/// # Errors
///
/// Returns [`ParseInputError::Empty`] for blank input and
/// [`ParseInputError::InvalidNumber`] for anything else that is not a number.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseInputError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Err(ParseInputError::Empty);
    }
    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .map_err(|_| ParseInputError::InvalidNumber(s.to_string()))
}

/// Parses a numeric field, treating blank or invalid input as zero.
///
/// Invalid (non-blank) input is logged as a warning.
pub fn parse_amount_or_zero(s: &str) -> Decimal {
    match parse_amount(s) {
        Ok(value) => value,
        Err(ParseInputError::Empty) => Decimal::ZERO,
        Err(e) => {
            tracing::warn!(input = %s, "treating invalid amount as zero: {}", e);
            Decimal::ZERO
        }
    }
}

/// Parses an ISO `YYYY-MM-DD` date field.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseInputError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseInputError::Empty);
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| ParseInputError::InvalidDate(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("1e5").unwrap(), dec!(100000));
    }

    #[test]
    fn parse_amount_empty_is_an_error() {
        assert_eq!(parse_amount(""), Err(ParseInputError::Empty));
        assert_eq!(parse_amount("   "), Err(ParseInputError::Empty));
    }

    #[test]
    fn parse_amount_invalid_returns_error() {
        assert_eq!(
            parse_amount("abc"),
            Err(ParseInputError::InvalidNumber("abc".to_string()))
        );
    }

    #[test]
    fn parse_amount_or_zero_defaults_blank_and_invalid() {
        assert_eq!(parse_amount_or_zero(""), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("twelve"), Decimal::ZERO);
        assert_eq!(parse_amount_or_zero("2,000"), dec!(2000));
    }

    #[test]
    fn parse_date_reads_iso_dates() {
        assert_eq!(
            parse_date("2000-01-01").unwrap(),
            NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
        );
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert_eq!(
            parse_date("01/02/2000"),
            Err(ParseInputError::InvalidDate("01/02/2000".to_string()))
        );
        assert_eq!(parse_date(""), Err(ParseInputError::Empty));
    }
}
