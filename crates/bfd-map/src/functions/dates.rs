//! Date rendering for exported fields.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};

use crate::error::EvalError;

/// Export date layout, e.g. `14-Mar-1950`.
pub const DATE_FORMAT: &str = "%d-%b-%Y";

pub fn format_date(date: DateTime<Utc>) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// The first Friday strictly after `date`; a Friday maps to the following
/// week's Friday.
///
/// # Errors
///
/// [`EvalError::DateOutOfRange`] when the result does not fit the calendar.
pub fn next_friday(date: DateTime<Utc>) -> Result<DateTime<Utc>, EvalError> {
    let today = date.weekday().num_days_from_monday();
    let friday = Weekday::Fri.num_days_from_monday();
    let days = match (friday + 7 - today) % 7 {
        0 => 7,
        n => n,
    };
    date.checked_add_signed(Duration::days(i64::from(days)))
        .ok_or_else(|| EvalError::DateOutOfRange(date.to_rfc3339()))
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn formats_day_month_year() {
        assert_eq!(format_date(day(1950, 3, 14)), "14-Mar-1950");
        assert_eq!(format_date(day(2021, 12, 1)), "01-Dec-2021");
    }

    #[test]
    fn next_friday_is_strictly_after() {
        // 2021-06-01 is a Tuesday.
        assert_eq!(next_friday(day(2021, 6, 1)).unwrap(), day(2021, 6, 4));
        assert_eq!(next_friday(day(2021, 6, 3)).unwrap(), day(2021, 6, 4));
        assert_eq!(next_friday(day(2021, 6, 4)).unwrap(), day(2021, 6, 11));
        assert_eq!(next_friday(day(2021, 6, 5)).unwrap(), day(2021, 6, 11));
    }
}
