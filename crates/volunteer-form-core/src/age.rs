//! Birth date parsing and minimum-age validation

use chrono::{Datelike, Local, NaiveDate};

use crate::error::ValidationError;

/// Minimum age to register as a volunteer
pub const DEFAULT_MINIMUM_AGE: u32 = 16;

/// Format produced by an HTML `type="date"` input
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Today's date on the local clock (the browser clock on wasm32)
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_birth_date(value: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingBirthDate);
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| ValidationError::InvalidBirthDate(trimmed.to_string()))
}

/// Completed years between `birth` and `today`
///
/// Negative when `birth` lies in the future.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        age -= 1;
    }
    age
}

/// Validates that the birth date in `value` gives an age of at least `minimum` on `today`
///
/// Returns the computed age on success.
pub fn validate_minimum_age(
    value: &str,
    minimum: u32,
    today: NaiveDate,
) -> Result<i32, ValidationError> {
    let birth = parse_birth_date(value)?;
    let age = age_on(birth, today);

    if i64::from(age) >= i64::from(minimum) {
        Ok(age)
    } else {
        Err(ValidationError::Underage { minimum, age })
    }
}

pub fn meets_minimum_age(value: &str, minimum: u32, today: NaiveDate) -> bool {
    validate_minimum_age(value, minimum, today).is_ok()
}
