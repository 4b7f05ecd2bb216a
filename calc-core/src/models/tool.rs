use serde::{Deserialize, Serialize};

/// Shown beneath every financial tool.
pub const TOOL_DISCLAIMER: &str = "Use this tool to estimate values quickly. Actual figures may vary based on bank policies, tax laws, and market conditions.";

/// The financial tools offered alongside the basic calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolKind {
    Salary,
    Emi,
    Loan,
    Gst,
    Sip,
    Age,
}

impl ToolKind {
    pub fn all() -> &'static [ToolKind] {
        &[
            ToolKind::Salary,
            ToolKind::Emi,
            ToolKind::Loan,
            ToolKind::Gst,
            ToolKind::Sip,
            ToolKind::Age,
        ]
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Emi => "emi",
            Self::Loan => "loan",
            Self::Gst => "gst",
            Self::Sip => "sip",
            Self::Age => "age",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|tool| tool.id().eq_ignore_ascii_case(s))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Salary => "Salary Calculator",
            Self::Emi => "EMI Calculator",
            Self::Loan => "Loan Calculator",
            Self::Gst => "GST Calculator",
            Self::Sip => "SIP Calculator",
            Self::Age => "Age Calculator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Salary => "Calculate Net Pay",
            Self::Emi => "Plan your loans",
            Self::Loan => "Amortization & Interest",
            Self::Gst => "Tax Inclusive/Exclusive",
            Self::Sip => "Investment Returns",
            Self::Age => "Exact Age Counter",
        }
    }
}
