//! Financial calculators.
//!
//! Each calculator is a pure function of already-parsed inputs. Invalid
//! inputs produce an error value rather than a result; callers keep showing
//! whatever they showed before.

pub mod age;
pub mod common;
pub mod gst;
pub mod loan;
pub mod salary;
pub mod sip;

pub use age::{AgeError, AgeResult, age_today, calculate_age};
pub use gst::{DEFAULT_GST_RATE, GST_PRESET_RATES, GstError, GstMode, GstResult, calculate_gst};
pub use loan::{LoanCalculator, LoanError, LoanInput, LoanMode, LoanResult};
pub use salary::{SalaryResult, calculate_salary};
pub use sip::{SipCalculator, SipError, SipInput, SipResult};
