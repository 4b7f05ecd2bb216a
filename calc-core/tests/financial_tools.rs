//! Reference values for the financial calculators, driven from raw field
//! text the way a presentation layer would.

use calc_core::calculations::{
    AgeResult, GstMode, LoanCalculator, LoanInput, LoanMode, SipCalculator, SipInput,
    calculate_age, calculate_gst, calculate_salary,
};
use calc_core::input::{parse_amount, parse_amount_or_zero, parse_date};
use calc_core::{FinancialResult, ToolKind};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[test]
fn salary_from_fields_defaults_blank_to_zero() {
    let result = calculate_salary(
        parse_amount_or_zero("5,000"),
        parse_amount_or_zero(""),
        parse_amount_or_zero("500"),
    );

    assert_eq!(result.net, dec!(4500));
    assert_eq!(result.yearly, dec!(54000));
}

#[test]
fn emi_from_fields() {
    let input = LoanInput {
        principal: parse_amount("100,000").unwrap(),
        annual_rate_percent: parse_amount("8.5").unwrap(),
        tenure_years: parse_amount("5").unwrap(),
    };

    let result = LoanCalculator::new(LoanMode::Emi).calculate(&input).unwrap();

    assert_eq!(result.monthly_payment, dec!(2052));
    assert_eq!(result.total_paid, dec!(123099));
    assert_eq!(result.total_interest, dec!(23099));
}

#[test]
fn emi_with_blank_tenure_produces_no_result() {
    assert!(parse_amount("").is_err());
}

#[test]
fn gst_add_and_remove_are_inverse_at_eighteen_percent() {
    let added = calculate_gst(dec!(1000), dec!(18), GstMode::Add).unwrap();
    let removed = calculate_gst(added.total_amount, dec!(18), GstMode::Remove).unwrap();

    assert_eq!(added.net_amount, dec!(1000));
    assert_eq!(added.gst_amount, dec!(180));
    assert_eq!(added.total_amount, dec!(1180));
    assert_eq!(removed.net_amount, dec!(1000));
    assert_eq!(removed.gst_amount, dec!(180));
    assert_eq!(removed.total_amount, dec!(1180));
}

#[test]
fn sip_reference_values() {
    let input = SipInput {
        monthly_investment: dec!(500),
        annual_rate_percent: dec!(12),
        years: dec!(10),
    };

    let result = SipCalculator::new().calculate(&input).unwrap();

    assert_eq!(result.invested, dec!(60000));
    assert!(result.total_value > result.invested);
    assert_eq!(result.gains, result.total_value - result.invested);
}

#[test]
fn age_from_date_field() {
    let birth = parse_date("2000-01-01").unwrap();
    let today = parse_date("2024-06-15").unwrap();

    let result = calculate_age(birth, today).unwrap();

    assert_eq!(
        result,
        AgeResult {
            years: 24,
            months: 5,
            days: 14,
        }
    );
}

#[test]
fn results_convert_into_tagged_union() {
    let age = calculate_age(
        parse_date("2020-02-02").unwrap(),
        parse_date("2021-02-02").unwrap(),
    )
    .unwrap();

    let result: FinancialResult = age.into();

    assert_eq!(
        result,
        FinancialResult::Age(AgeResult {
            years: 1,
            months: 0,
            days: 0,
        })
    );
}

#[test]
fn every_tool_has_catalog_entry() {
    let ids: Vec<&str> = ToolKind::all().iter().map(|t| t.id()).collect();

    assert_eq!(ids, vec!["salary", "emi", "loan", "gst", "sip", "age"]);
}
