//! Age derivation from patient birthdates.
//!
//! Birthdates are carried as ISO calendar date strings and are only ever used
//! to show an age. Derivation is pure: callers pass the reference date, and
//! the convenience wrappers supply today's date for display code.

use crate::constants::AGE_PLACEHOLDER;
use chrono::{Datelike, NaiveDate, Utc};

/// Computes a whole-years age from a birthdate string.
///
/// The age is the calendar-year difference, reduced by one when the reference
/// date's (month, day) falls before the birth (month, day) - i.e. the
/// birthday has not yet been reached in the reference year.
///
/// Returns `None` when the birthdate is absent, empty, or not a valid
/// `YYYY-MM-DD` date, so display code shows a placeholder instead of a
/// spurious number.
pub fn age_in_years(birthdate: &str, on: NaiveDate) -> Option<i32> {
    let birthdate = birthdate.trim();
    if birthdate.is_empty() {
        return None;
    }
    let dob = NaiveDate::parse_from_str(birthdate, "%Y-%m-%d").ok()?;

    let mut age = on.year() - dob.year();
    if (on.month(), on.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    Some(age)
}

/// Display form of [`age_in_years`]: the number, or `--` when unknown.
pub fn age_display(birthdate: &str, on: NaiveDate) -> String {
    match age_in_years(birthdate, on) {
        Some(age) => age.to_string(),
        None => AGE_PLACEHOLDER.to_owned(),
    }
}

/// Today's date (UTC), for display-code callers.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}
