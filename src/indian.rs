//! The Indian national calendar, counting years of the Śaka era.
//!
//! A year begins on 22 March of Gregorian year `year + 78`, or on 21 March
//! when that Gregorian year is a leap year. Chaitra then has 31 days instead
//! of 30.

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::calendar::Calendar;
use crate::calendars::GREGORIAN;
use crate::consts::{GREGORIAN_CYCLE_DAYS, GREGORIAN_CYCLE_YEARS, SAKA_YEAR_OFFSET};
use crate::math::{floored_div_rem, floored_rem};
use crate::types::{CalendarDate, JulianDayNumber};

const MONTHS: i64 = 12;

/// The Indian national (Śaka) calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndianNational;

impl IndianNational {
    /// The leap rule follows the Gregorian one, which repeats every 400
    /// years, so the year is reduced first.
    fn is_leap(year: i64) -> Result<bool, CalendarError> {
        GREGORIAN.is_leap_year(floored_rem(year, GREGORIAN_CYCLE_YEARS) + SAKA_YEAR_OFFSET)
    }

    const fn month_length(leap: bool, month: i64) -> i64 {
        match month {
            1 if leap => 31,
            1 => 30,
            2..=6 => 31,
            7..=12 => 30,
            _ => 0,
        }
    }

    fn days_before_month(leap: bool, month: i64) -> i64 {
        (1..month).map(|month| Self::month_length(leap, month)).sum()
    }

    /// 1 Chaitra of `year`, for years close enough to the present that
    /// nothing overflows.
    fn new_year(year: i64) -> Result<JulianDayNumber, CalendarError> {
        let gregorian_year = year + SAKA_YEAR_OFFSET;
        let day = if Self::is_leap(year)? { 21 } else { 22 };
        GREGORIAN.julian_day_number_from(CalendarDate::new(gregorian_year, 3, day))
    }
}

impl Calendar for IndianNational {
    fn julian_day_number_from(&self, date: CalendarDate) -> Result<JulianDayNumber, CalendarError> {
        let (carry, month_index) =
            floored_div_rem(date.month.checked_sub(1).ok_or(CalendarError::Overflow)?, MONTHS);
        let year = date.year.checked_add(carry).ok_or(CalendarError::Overflow)?;
        let (cycles, year) = floored_div_rem(year, GREGORIAN_CYCLE_YEARS);

        let leap = Self::is_leap(year)?;
        let jdn = i128::from(Self::new_year(year)?)
            + i128::from(Self::days_before_month(leap, month_index + 1))
            + i128::from(date.day)
            - 1
            + i128::from(cycles) * i128::from(GREGORIAN_CYCLE_DAYS);
        JulianDayNumber::try_from(jdn).map_err(|_| CalendarError::Overflow)
    }

    fn date_from(&self, jdn: JulianDayNumber) -> Result<CalendarDate, CalendarError> {
        let (cycles, jdn) = floored_div_rem(jdn, GREGORIAN_CYCLE_DAYS);

        let mut year = GREGORIAN.date_from(jdn)?.year - SAKA_YEAR_OFFSET;
        let mut start = Self::new_year(year)?;
        if jdn < start {
            year -= 1;
            start = Self::new_year(year)?;
        }

        let leap = Self::is_leap(year)?;
        let mut remaining = jdn - start;
        let mut month = 1;
        while remaining >= Self::month_length(leap, month) {
            remaining -= Self::month_length(leap, month);
            month += 1;
        }

        let year = cycles
            .checked_mul(GREGORIAN_CYCLE_YEARS)
            .and_then(|years| years.checked_add(year))
            .ok_or(CalendarError::Overflow)?;
        Ok(CalendarDate::new(year, month, remaining + 1))
    }

    fn months_in_year(&self, _year: i64) -> i64 {
        MONTHS
    }

    fn is_leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        Self::is_leap(year)
    }

    fn days_in_month(&self, year: i64, month: i64) -> Result<i64, CalendarError> {
        Ok(Self::month_length(Self::is_leap(year)?, month))
    }

    fn days_in_year(&self, year: i64) -> Result<i64, CalendarError> {
        Ok(if Self::is_leap(year)? { 366 } else { 365 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_correspondence() {
        struct TestCase {
            saka: CalendarDate,
            gregorian: CalendarDate,
        }

        let cases = [
            TestCase {
                saka: CalendarDate::new(1891, 10, 12),
                gregorian: CalendarDate::new(1970, 1, 2),
            },
            TestCase {
                saka: CalendarDate::new(1921, 10, 11),
                gregorian: CalendarDate::new(2000, 1, 1),
            },
            TestCase {
                saka: CalendarDate::new(1946, 1, 1),
                gregorian: CalendarDate::new(2024, 3, 21),
            },
            TestCase {
                saka: CalendarDate::new(1945, 1, 1),
                gregorian: CalendarDate::new(2023, 3, 22),
            },
        ];

        for case in cases {
            let jdn = GREGORIAN.julian_day_number_from(case.gregorian).unwrap();
            assert_eq!(IndianNational.date_from(jdn), Ok(case.saka), "{}", case.gregorian);
            assert_eq!(IndianNational.julian_day_number_from(case.saka), Ok(jdn), "{}", case.saka);
        }
    }

    #[test]
    fn test_new_year_day_number() {
        assert_eq!(
            IndianNational.julian_day_number_from(CalendarDate::new(1946, 1, 1)),
            Ok(2_460_391)
        );
    }

    #[test]
    fn test_month_lengths() {
        assert_eq!(IndianNational.days_in_month(1946, 1), Ok(31));
        assert_eq!(IndianNational.days_in_month(1945, 1), Ok(30));
        assert_eq!(IndianNational.days_in_month(1945, 6), Ok(31));
        assert_eq!(IndianNational.days_in_month(1945, 7), Ok(30));
        assert_eq!(IndianNational.days_in_month(1945, 13), Ok(0));
        assert_eq!(IndianNational.days_in_year(1946), Ok(366));
        assert_eq!(IndianNational.days_in_year(1945), Ok(365));
    }

    #[test]
    fn test_month_overflow_carries_into_next_year() {
        assert_eq!(
            IndianNational.julian_day_number_from(CalendarDate::new(1945, 13, 1)),
            IndianNational.julian_day_number_from(CalendarDate::new(1946, 1, 1))
        );
        assert_eq!(
            IndianNational.julian_day_number_from(CalendarDate::new(1946, 0, 1)),
            IndianNational.julian_day_number_from(CalendarDate::new(1945, 12, 1))
        );
    }

    #[test]
    fn test_round_trip_around_the_era() {
        let start = GREGORIAN.julian_day_number_from(CalendarDate::new(70, 1, 1)).unwrap();
        for jdn in start..start + 5 * 366 {
            let date = IndianNational.date_from(jdn).unwrap();
            assert!(IndianNational.is_valid_date(date), "{date}");
            assert_eq!(IndianNational.julian_day_number_from(date), Ok(jdn), "{date}");
        }
    }

    #[test]
    fn test_extremes_round_trip() {
        for jdn in [i64::MIN, i64::MIN + 1, i64::MAX - 1, i64::MAX] {
            let date = IndianNational.date_from(jdn).unwrap();
            assert_eq!(IndianNational.julian_day_number_from(date), Ok(jdn), "{date}");
        }
        assert_eq!(
            IndianNational.date_from(i64::MAX),
            Ok(CalendarDate::new(25_252_734_927_761_764, 3, 30))
        );
        assert_eq!(
            IndianNational.julian_day_number_from(CalendarDate::new(i64::MAX, 1, 1)),
            Err(CalendarError::Overflow)
        );
    }
}
