use std::path::PathBuf;

use calc_core::calculations::GstMode;
use clap::{Args, Parser, Subcommand};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Pocket calculator with financial tools.
///
/// Numeric arguments are taken as typed into a form field: thousands
/// separators are accepted, and a value that cannot be read produces no
/// result rather than a failure.
#[derive(Debug, Parser)]
#[command(name = "pocketcalc")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (TOML). Defaults to `pocketcalc.toml` when present.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true, default_value_t = false)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Feed key presses to the basic calculator, e.g. `2+3*4=`.
    ///
    /// Keys: 0-9 . + - * / = % (percent) ~ (toggle sign) < (delete) c (clear).
    Keys {
        /// Key sequence; spaces are ignored.
        #[arg(allow_hyphen_values = true)]
        sequence: String,
    },

    /// Net monthly and yearly salary.
    Salary {
        /// Basic pay.
        #[arg(long, default_value = "")]
        basic: String,

        /// Allowances (HRA, DA).
        #[arg(long, default_value = "")]
        allowances: String,

        /// Deductions (tax, PF).
        #[arg(long, default_value = "")]
        deductions: String,
    },

    /// Monthly EMI for a loan.
    Emi(LoanArgs),

    /// Monthly payment, total paid and total interest for a loan.
    Loan(LoanArgs),

    /// Add GST to, or remove GST from, an amount.
    Gst {
        /// Amount (net for `add`, tax-inclusive for `remove`).
        amount: String,

        /// `add` or `remove`.
        #[arg(long, default_value = "add", value_parser = parse_gst_mode)]
        mode: GstMode,

        /// GST rate in percent; presets are 5, 12, 18 and 28.
        /// Defaults to the configured rate.
        #[arg(long)]
        rate: Option<String>,
    },

    /// Future value of a monthly investment.
    Sip {
        /// Monthly investment.
        #[arg(long)]
        monthly: String,

        /// Expected annual return in percent.
        #[arg(long)]
        rate: String,

        /// Time period in years.
        #[arg(long)]
        years: String,
    },

    /// Exact age in years, months and days.
    Age {
        /// Date of birth, YYYY-MM-DD.
        birth: String,

        /// Reference date, YYYY-MM-DD. Defaults to today.
        #[arg(long)]
        today: Option<String>,
    },

    /// List the available tools.
    Tools,
}

#[derive(Debug, Args)]
pub struct LoanArgs {
    /// Loan amount.
    #[arg(long)]
    pub amount: String,

    /// Annual interest rate in percent.
    #[arg(long)]
    pub rate: String,

    /// Tenure in years.
    #[arg(long)]
    pub tenure: String,
}

fn parse_gst_mode(s: &str) -> Result<GstMode, String> {
    GstMode::parse(s).ok_or_else(|| format!("unknown GST mode '{s}', expected add or remove"))
}
