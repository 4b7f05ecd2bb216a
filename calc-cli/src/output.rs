//! Text and JSON rendering of command outcomes.

use std::fmt::Write;

use anyhow::{Context, Result};
use calc_core::calculations::LoanMode;
use calc_core::engine::format::group_operand;
use calc_core::{FinancialResult, Settings, TOOL_DISCLAIMER, ToolKind};
use rust_decimal::Decimal;

use crate::commands::Outcome;

/// Renders an outcome as pretty-printed JSON.
pub fn render_json(outcome: &Outcome) -> Result<String> {
    serde_json::to_string_pretty(outcome).context("Failed to serialize result")
}

/// Renders an outcome for the terminal.
pub fn render_text(
    outcome: &Outcome,
    settings: &Settings,
) -> String {
    match outcome {
        Outcome::Calculator {
            display,
            pending,
            last_calculation,
        } => match pending.as_ref().or(last_calculation.as_ref()) {
            Some(header) => format!("{header}\n{display}"),
            None => display.clone(),
        },
        Outcome::Calculated { tool, result } => {
            let mut out = format!("{}\n", tool.name());
            write_result(&mut out, *tool, result, &settings.currency_symbol);
            out.push('\n');
            out.push_str(TOOL_DISCLAIMER);
            out
        }
        Outcome::Declined { tool, reason } => {
            format!("{}\nNo result: {reason}", tool.name())
        }
        Outcome::Catalog { tools } => {
            let mut out = String::new();
            for entry in tools {
                let _ = writeln!(out, "{:<7} {:<18} {}", entry.id, entry.name, entry.description);
            }
            out.trim_end().to_string()
        }
    }
}

fn write_result(
    out: &mut String,
    tool: ToolKind,
    result: &FinancialResult,
    symbol: &str,
) {
    let money = |value: Decimal| format_money(symbol, value);
    // Writing to a String cannot fail.
    let _ = match result {
        FinancialResult::Salary(r) => writeln!(
            out,
            "Net Monthly Salary: {}\nYearly: {}",
            money(r.net),
            money(r.yearly)
        ),
        FinancialResult::Loan(r) => {
            let mode = if tool == ToolKind::Loan {
                LoanMode::Loan
            } else {
                LoanMode::Emi
            };
            writeln!(
                out,
                "{}: {}\nTotal Interest: {}\nTotal Amount: {}",
                mode.payment_label(),
                money(r.monthly_payment),
                money(r.total_interest),
                money(r.total_paid)
            )
        }
        FinancialResult::Gst(r) => writeln!(
            out,
            "Net Amount: {}\nGST Amount: {}\nTotal Amount: {}",
            money(r.net_amount),
            money(r.gst_amount),
            money(r.total_amount)
        ),
        FinancialResult::Sip(r) => writeln!(
            out,
            "Total Value: {}\nInvested Amount: {}\nEst. Returns: {}",
            money(r.total_value),
            money(r.invested),
            money(r.gains)
        ),
        FinancialResult::Age(r) => writeln!(
            out,
            "{} years, {} months, {} days",
            r.years, r.months, r.days
        ),
    };
}

/// Formats an amount with the currency symbol and thousands separators.
///
/// ```
/// use calc_cli::output::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money("$", Decimal::new(-123456, 2)), "-$1,234.56");
/// ```
pub fn format_money(
    symbol: &str,
    value: Decimal,
) -> String {
    let sign = if value.is_sign_negative() && !value.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{symbol}{}", group_operand(&value.abs().to_string()))
}
