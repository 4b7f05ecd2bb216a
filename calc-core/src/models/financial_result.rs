use serde::{Deserialize, Serialize};

use crate::calculations::{AgeResult, GstResult, LoanResult, SalaryResult, SipResult};

/// The outcome of any financial tool, tagged by kind for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinancialResult {
    Salary(SalaryResult),
    Loan(LoanResult),
    Gst(GstResult),
    Sip(SipResult),
    Age(AgeResult),
}

impl From<SalaryResult> for FinancialResult {
    fn from(result: SalaryResult) -> Self {
        Self::Salary(result)
    }
}

impl From<LoanResult> for FinancialResult {
    fn from(result: LoanResult) -> Self {
        Self::Loan(result)
    }
}

impl From<GstResult> for FinancialResult {
    fn from(result: GstResult) -> Self {
        Self::Gst(result)
    }
}

impl From<SipResult> for FinancialResult {
    fn from(result: SipResult) -> Self {
        Self::Sip(result)
    }
}

impl From<AgeResult> for FinancialResult {
    fn from(result: AgeResult) -> Self {
        Self::Age(result)
    }
}
