//! Age computation from date of birth.

use chrono::{Datelike, NaiveDate};

use crate::errors::{AppError, AppResult};

/// Compute age in whole years as of `today`.
///
/// Subtracts one year when today's ordinal day falls before the birthday's
/// ordinal day. The ordinal comparison is an approximation around leap years
/// and is kept intentionally.
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if today.ordinal() < dob.ordinal() {
        age -= 1;
    }
    age
}

/// Reject dates of birth that lie after `today`. A `dob` equal to `today`
/// is accepted.
pub fn ensure_not_future(dob: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if dob > today {
        return Err(AppError::validation(
            "date of birth cannot be in the future",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn age_after_birthday_in_year() {
        assert_eq!(age_on(date(2000, 1, 1), date(2024, 6, 15)), 24);
    }

    #[test]
    fn age_before_birthday_in_year() {
        assert_eq!(age_on(date(2000, 12, 31), date(2024, 6, 15)), 23);
    }

    #[test]
    fn age_on_exact_birthday() {
        assert_eq!(age_on(date(2000, 6, 15), date(2024, 6, 15)), 24);
    }

    #[test]
    fn age_zero_when_born_today() {
        let today = date(2024, 6, 15);
        assert_eq!(age_on(today, today), 0);
    }

    #[test]
    fn age_never_negative_for_past_dob() {
        let today = date(2024, 6, 15);
        let dob = date(2024, 6, 14);
        assert!(age_on(dob, today) >= 0);
    }

    #[test]
    fn age_non_decreasing_year_over_year() {
        let dob = date(1990, 3, 20);
        let mut previous = age_on(dob, date(1990, 3, 20));
        for year in 1991..=2030 {
            let current = age_on(dob, date(year, 3, 20));
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn future_dob_rejected() {
        let today = date(2024, 6, 15);
        let result = ensure_not_future(date(2024, 6, 16), today);
        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[test]
    fn dob_equal_to_today_accepted() {
        let today = date(2024, 6, 15);
        assert!(ensure_not_future(today, today).is_ok());
    }

    #[test]
    fn past_dob_accepted() {
        let today = date(2024, 6, 15);
        assert!(ensure_not_future(date(1950, 1, 1), today).is_ok());
    }
}
