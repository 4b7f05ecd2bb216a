//! Calendar-aware age between a birth date and today.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during age calculations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgeError {
    /// The birth date lies after the reference date.
    #[error("birth date {birth} is after {today}")]
    BirthAfterToday { birth: NaiveDate, today: NaiveDate },

    /// A month boundary fell outside the supported calendar range.
    #[error("date {0} is outside the supported calendar range")]
    OutOfRange(NaiveDate),
}

/// Elapsed whole years, months and days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

/// Calculates the age on `today` of someone born on `birth`.
///
/// Years, months and days are differenced field by field. A negative day
/// count borrows the length of the month before `today`'s month (and keeps
/// borrowing from earlier months while still negative); a negative month
/// count borrows twelve months from the years.
///
/// # Errors
///
/// Returns [`AgeError::BirthAfterToday`] if `birth` is later than `today`.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use calc_core::calculations::calculate_age;
///
/// let birth = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let age = calculate_age(birth, today).unwrap();
///
/// assert_eq!((age.years, age.months, age.days), (24, 5, 14));
/// ```
pub fn calculate_age(
    birth: NaiveDate,
    today: NaiveDate,
) -> Result<AgeResult, AgeError> {
    if birth > today {
        return Err(AgeError::BirthAfterToday { birth, today });
    }

    let mut years = today.year() - birth.year();
    let mut months = today.month() as i32 - birth.month() as i32;
    let mut days = today.day() as i32 - birth.day() as i32;

    let mut anchor = today;
    while days < 0 {
        months -= 1;
        let previous_month_end = last_day_of_previous_month(anchor)?;
        days += previous_month_end.day() as i32;
        anchor = previous_month_end;
    }
    while months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeResult {
        years: years.unsigned_abs(),
        months: months.unsigned_abs(),
        days: days.unsigned_abs(),
    })
}

/// Calculates the age as of the local current date.
pub fn age_today(birth: NaiveDate) -> Result<AgeResult, AgeError> {
    calculate_age(birth, Local::now().date_naive())
}

fn last_day_of_previous_month(date: NaiveDate) -> Result<NaiveDate, AgeError> {
    date.with_day(1)
        .and_then(|first| first.pred_opt())
        .ok_or(AgeError::OutOfRange(date))
}
