//! Dispatch of CLI commands to the calculator core.

use anyhow::{Context, Result};
use calc_core::calculations::{
    GstMode, LoanCalculator, LoanInput, LoanMode, SipCalculator, SipInput, age_today,
    calculate_age, calculate_gst, calculate_salary,
};
use calc_core::input::{parse_amount, parse_amount_or_zero, parse_date};
use calc_core::{Calculator, FinancialResult, Settings, ToolKind};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::{Command, LoanArgs};

/// What a command produced, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// State of the basic calculator after a key sequence.
    Calculator {
        display: String,
        pending: Option<String>,
        last_calculation: Option<String>,
    },

    /// A financial tool produced a result.
    Calculated {
        tool: ToolKind,
        result: FinancialResult,
    },

    /// A financial tool declined its inputs.
    Declined { tool: ToolKind, reason: String },

    /// The tool catalog.
    Catalog { tools: Vec<ToolEntry> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

impl From<ToolKind> for ToolEntry {
    fn from(tool: ToolKind) -> Self {
        Self {
            id: tool.id(),
            name: tool.name(),
            description: tool.description(),
        }
    }
}

/// Runs a command. Invalid tool inputs become [`Outcome::Declined`].
pub fn execute(
    command: &Command,
    settings: &Settings,
) -> Outcome {
    let (tool, result) = match command {
        Command::Keys { sequence } => return run_keys(sequence),
        Command::Tools => {
            return Outcome::Catalog {
                tools: ToolKind::all().iter().copied().map(ToolEntry::from).collect(),
            };
        }
        Command::Salary {
            basic,
            allowances,
            deductions,
        } => (ToolKind::Salary, Ok(salary(basic, allowances, deductions))),
        Command::Emi(args) => (ToolKind::Emi, loan(LoanMode::Emi, args)),
        Command::Loan(args) => (ToolKind::Loan, loan(LoanMode::Loan, args)),
        Command::Gst { amount, mode, rate } => (
            ToolKind::Gst,
            gst(amount, *mode, rate.as_deref(), settings.default_gst_rate),
        ),
        Command::Sip {
            monthly,
            rate,
            years,
        } => (ToolKind::Sip, sip(monthly, rate, years)),
        Command::Age { birth, today } => (ToolKind::Age, age(birth, today.as_deref())),
    };

    match result {
        Ok(result) => {
            info!(tool = tool.id(), "calculation complete");
            Outcome::Calculated { tool, result }
        }
        Err(error) => {
            warn!(tool = tool.id(), "no result: {error:#}");
            Outcome::Declined {
                tool,
                reason: format!("{error:#}"),
            }
        }
    }
}

fn run_keys(sequence: &str) -> Outcome {
    let mut calc = Calculator::new();
    calc.feed(sequence);
    Outcome::Calculator {
        display: calc.display(),
        pending: calc.pending_display(),
        last_calculation: calc.last_calculation().map(str::to_string),
    }
}

fn salary(
    basic: &str,
    allowances: &str,
    deductions: &str,
) -> FinancialResult {
    calculate_salary(
        parse_amount_or_zero(basic),
        parse_amount_or_zero(allowances),
        parse_amount_or_zero(deductions),
    )
    .into()
}

fn loan(
    mode: LoanMode,
    args: &LoanArgs,
) -> Result<FinancialResult> {
    let input = LoanInput {
        principal: field("loan amount", &args.amount)?,
        annual_rate_percent: field("interest rate", &args.rate)?,
        tenure_years: field("tenure", &args.tenure)?,
    };
    let result = LoanCalculator::new(mode).calculate(&input)?;
    Ok(result.into())
}

fn gst(
    amount: &str,
    mode: GstMode,
    rate: Option<&str>,
    default_rate: Decimal,
) -> Result<FinancialResult> {
    let amount = field("amount", amount)?;
    let rate = match rate {
        Some(raw) => field("GST rate", raw)?,
        None => default_rate,
    };
    let result = calculate_gst(amount, rate, mode)?;
    Ok(result.into())
}

fn sip(
    monthly: &str,
    rate: &str,
    years: &str,
) -> Result<FinancialResult> {
    let input = SipInput {
        monthly_investment: field("monthly investment", monthly)?,
        annual_rate_percent: field("expected return rate", rate)?,
        years: field("time period", years)?,
    };
    let result = SipCalculator::new().calculate(&input)?;
    Ok(result.into())
}

fn age(
    birth: &str,
    today: Option<&str>,
) -> Result<FinancialResult> {
    let birth = parse_date(birth).context("date of birth")?;
    let result = match today {
        Some(raw) => calculate_age(birth, parse_date(raw).context("reference date")?)?,
        None => age_today(birth)?,
    };
    Ok(result.into())
}

fn field(
    name: &'static str,
    raw: &str,
) -> Result<Decimal> {
    parse_amount(raw).context(name)
}

#[cfg(test)]
mod tests {
    use calc_core::calculations::{AgeResult, GstResult, LoanResult};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn loan_args(
        amount: &str,
        rate: &str,
        tenure: &str,
    ) -> LoanArgs {
        LoanArgs {
            amount: amount.to_string(),
            rate: rate.to_string(),
            tenure: tenure.to_string(),
        }
    }

    #[test]
    fn keys_report_display_and_trace() {
        let command = Command::Keys {
            sequence: "2+3*4=".to_string(),
        };

        let outcome = execute(&command, &Settings::default());

        assert_eq!(
            outcome,
            Outcome::Calculator {
                display: "20".to_string(),
                pending: None,
                last_calculation: Some("5 * 4 =".to_string()),
            }
        );
    }

    #[test]
    fn emi_produces_loan_result() {
        let command = Command::Emi(loan_args("100,000", "8.5", "5"));

        let outcome = execute(&command, &Settings::default());

        assert_eq!(
            outcome,
            Outcome::Calculated {
                tool: ToolKind::Emi,
                result: FinancialResult::Loan(LoanResult {
                    monthly_payment: dec!(2052),
                    total_paid: dec!(123099),
                    total_interest: dec!(23099),
                }),
            }
        );
    }

    #[test]
    fn loan_with_unparsable_rate_is_declined() {
        let command = Command::Loan(loan_args("5000", "abc", "2"));

        let outcome = execute(&command, &Settings::default());

        match outcome {
            Outcome::Declined { tool, reason } => {
                assert_eq!(tool, ToolKind::Loan);
                assert!(reason.starts_with("interest rate"), "{reason}");
            }
            other => panic!("expected decline, got {other:?}"),
        }
    }

    #[test]
    fn gst_uses_configured_default_rate() {
        let settings = Settings {
            default_gst_rate: dec!(5),
            ..Settings::default()
        };
        let command = Command::Gst {
            amount: "200".to_string(),
            mode: GstMode::Add,
            rate: None,
        };

        let outcome = execute(&command, &settings);

        assert_eq!(
            outcome,
            Outcome::Calculated {
                tool: ToolKind::Gst,
                result: FinancialResult::Gst(GstResult {
                    net_amount: dec!(200),
                    gst_amount: dec!(10),
                    total_amount: dec!(210),
                }),
            }
        );
    }

    #[test]
    fn gst_with_zero_amount_is_declined() {
        let command = Command::Gst {
            amount: "0".to_string(),
            mode: GstMode::Remove,
            rate: Some("18".to_string()),
        };

        let outcome = execute(&command, &Settings::default());

        assert!(matches!(outcome, Outcome::Declined { tool: ToolKind::Gst, .. }));
    }

    #[test]
    fn gst_remove_with_huge_rate_is_declined() {
        let command = Command::Gst {
            amount: "100".to_string(),
            mode: GstMode::Remove,
            rate: Some("79228162514264337593543950335".to_string()),
        };

        let outcome = execute(&command, &Settings::default());

        assert!(matches!(outcome, Outcome::Declined { tool: ToolKind::Gst, .. }));
    }

    #[test]
    fn salary_never_declines() {
        let command = Command::Salary {
            basic: "garbage".to_string(),
            allowances: String::new(),
            deductions: String::new(),
        };

        let outcome = execute(&command, &Settings::default());

        assert!(matches!(outcome, Outcome::Calculated { tool: ToolKind::Salary, .. }));
    }

    #[test]
    fn age_with_explicit_today() {
        let command = Command::Age {
            birth: "2000-01-01".to_string(),
            today: Some("2024-06-15".to_string()),
        };

        let outcome = execute(&command, &Settings::default());

        assert_eq!(
            outcome,
            Outcome::Calculated {
                tool: ToolKind::Age,
                result: FinancialResult::Age(AgeResult {
                    years: 24,
                    months: 5,
                    days: 14,
                }),
            }
        );
    }

    #[test]
    fn age_without_birth_date_is_declined() {
        let command = Command::Age {
            birth: String::new(),
            today: None,
        };

        let outcome = execute(&command, &Settings::default());

        assert!(matches!(outcome, Outcome::Declined { tool: ToolKind::Age, .. }));
    }

    #[test]
    fn tools_lists_catalog() {
        let outcome = execute(&Command::Tools, &Settings::default());

        match outcome {
            Outcome::Catalog { tools } => {
                assert_eq!(tools.len(), 6);
                assert_eq!(tools[0].name, "Salary Calculator");
            }
            other => panic!("expected catalog, got {other:?}"),
        }
    }
}
