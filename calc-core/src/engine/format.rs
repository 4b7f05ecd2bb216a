//! Rendering of calculator operands.
//!
//! Operands are stored as plain numeral strings (`"1234.5"`). Two
//! conversions live here: turning an evaluated `f64` back into an operand
//! string, and grouping an operand's integer part with thousands separators
//! for display.

/// Converts an evaluation result into an operand string.
///
/// Uses the shortest representation that round-trips, renders negative zero
/// as `"0"`, and spells the non-finite values `"Infinity"`, `"-Infinity"`
/// and `"NaN"` so the operand can be parsed back.
///
/// # Examples
///
/// ```
/// use calc_core::engine::format::format_number;
///
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1.0 / 0.0), "Infinity");
/// assert_eq!(format_number(20.0), "20");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_negative() {
            "-Infinity".to_string()
        } else {
            "Infinity".to_string()
        }
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Groups the integer part of an operand with `,` separators.
///
/// The fractional part, when present, is kept verbatim: no grouping, no
/// rounding, trailing zeros and a bare trailing point preserved. Operands
/// whose integer part is not a plain digit run (such as `"Infinity"`) are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use calc_core::engine::format::group_operand;
///
/// assert_eq!(group_operand("1234567.8900"), "1,234,567.8900");
/// assert_eq!(group_operand("-1000"), "-1,000");
/// assert_eq!(group_operand("12."), "12.");
/// ```
pub fn group_operand(operand: &str) -> String {
    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return operand.to_string();
    }

    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() { "0" } else { significant };

    let mut out = format!("{sign}{}", group_digits(significant));
    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

fn group_digits(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // =========================================================================
    // format_number tests
    // =========================================================================

    #[test]
    fn format_number_drops_integral_fraction() {
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(-12.0), "-12");
    }

    #[test]
    fn format_number_keeps_fraction() {
        assert_eq!(format_number(0.05), "0.05");
        assert_eq!(format_number(2.5), "2.5");
    }

    #[test]
    fn format_number_normalizes_negative_zero() {
        assert_eq!(format_number(-0.0), "0");
    }

    #[test]
    fn format_number_spells_non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
    }

    #[test]
    fn format_number_never_uses_exponent() {
        assert_eq!(format_number(1e21), "1000000000000000000000");
    }

    // =========================================================================
    // group_operand tests
    // =========================================================================

    #[test]
    fn group_operand_leaves_short_integers_alone() {
        assert_eq!(group_operand("0"), "0");
        assert_eq!(group_operand("999"), "999");
    }

    #[test]
    fn group_operand_inserts_separators() {
        assert_eq!(group_operand("1000"), "1,000");
        assert_eq!(group_operand("1234567"), "1,234,567");
    }

    #[test]
    fn group_operand_does_not_group_fraction() {
        assert_eq!(group_operand("1234.56789"), "1,234.56789");
    }

    #[test]
    fn group_operand_keeps_trailing_point() {
        assert_eq!(group_operand("0."), "0.");
        assert_eq!(group_operand("1000."), "1,000.");
    }

    #[test]
    fn group_operand_handles_negative_values() {
        assert_eq!(group_operand("-1234.5"), "-1,234.5");
        assert_eq!(group_operand("-0.25"), "-0.25");
    }

    #[test]
    fn group_operand_passes_through_non_numeric_text() {
        assert_eq!(group_operand("Infinity"), "Infinity");
        assert_eq!(group_operand("NaN"), "NaN");
    }
}
