//! Business-day determination.
//!
//! A date counts as workable iff it is not a Saturday or Sunday and its date is
//! not present in the supplied holiday set. The holiday set is an exact-date
//! membership set for one country code; no jurisdiction filtering happens at
//! this layer. When the holiday source is unavailable the caller passes an
//! empty set and filtering degrades to weekends only.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::HolidaySet;

/// Determines whether a date is a business day.
///
/// # Arguments
///
/// * `date` - The date to check
/// * `holidays` - Exact-date holiday membership set for the relevant country
///
/// # Example
///
/// ```
/// use workload_engine::calculation::is_business_day;
/// use workload_engine::models::HolidaySet;
/// use chrono::NaiveDate;
///
/// let holidays = HolidaySet::default();
/// // 2024-03-13 is a Wednesday, 2024-03-16 a Saturday
/// assert!(is_business_day(NaiveDate::from_ymd_opt(2024, 3, 13).unwrap(), &holidays));
/// assert!(!is_business_day(NaiveDate::from_ymd_opt(2024, 3, 16).unwrap(), &holidays));
/// ```
pub fn is_business_day(date: NaiveDate, holidays: &HolidaySet) -> bool {
    if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    !holidays.contains(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_weekday_without_holidays_is_business_day() {
        // 2024-03-11 through 2024-03-15 are Monday..Friday
        let holidays = HolidaySet::default();
        for day in 11..=15 {
            let date = make_date(&format!("2024-03-{:02}", day));
            assert!(is_business_day(date, &holidays), "{} should be workable", date);
        }
    }

    #[test]
    fn test_saturday_is_not_business_day() {
        let holidays = HolidaySet::default();
        assert!(!is_business_day(make_date("2024-03-16"), &holidays));
    }

    #[test]
    fn test_sunday_is_not_business_day() {
        let holidays = HolidaySet::default();
        assert!(!is_business_day(make_date("2024-03-17"), &holidays));
    }

    #[test]
    fn test_holiday_weekday_is_not_business_day() {
        let holidays = HolidaySet::from_dates(vec![make_date("2024-03-13")]);
        assert!(!is_business_day(make_date("2024-03-13"), &holidays));
        assert!(is_business_day(make_date("2024-03-14"), &holidays));
    }

    #[test]
    fn test_holiday_on_weekend_stays_non_business() {
        // A gazetted Saturday changes nothing
        let holidays = HolidaySet::from_dates(vec![make_date("2024-03-16")]);
        assert!(!is_business_day(make_date("2024-03-16"), &holidays));
    }

    #[test]
    fn test_empty_set_degrades_to_weekend_filtering() {
        // The unavailable-holiday-source fallback: an empty set must never
        // exclude a weekday.
        let holidays = HolidaySet::default();
        let mut date = make_date("2024-03-04");
        let mut business_days = 0;
        while date <= make_date("2024-03-10") {
            if is_business_day(date, &holidays) {
                business_days += 1;
            }
            date += chrono::Duration::days(1);
        }
        assert_eq!(business_days, 5);
    }
}
