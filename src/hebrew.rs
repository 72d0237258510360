//! The arithmetic Hebrew calendar.
//!
//! Months are numbered in fixed slots counted from Tishrei, so a month keeps
//! its number whether or not the year is leap:
//!
//! | slot | month |
//! |---|---|
//! | 1 | Tishrei |
//! | 2 | Heshvan |
//! | 3 | Kislev |
//! | 4 | Tevet |
//! | 5 | Shevat |
//! | 6 | Adar (Adar I in leap years) |
//! | 7 | Adar II, leap years only |
//! | 8 | Nisan |
//! | 9 | Iyar |
//! | 10 | Sivan |
//! | 11 | Tammuz |
//! | 12 | Av |
//! | 13 | Elul |
//!
//! Slot 7 has no days in a common year.

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::calendar::Calendar;
use crate::consts::{HEBREW_EPOCH, METONIC_MONTHS, METONIC_YEARS, PARTS_PER_DAY, PARTS_PER_HOUR};
use crate::math::{floored_div, floored_rem};
use crate::types::{CalendarDate, JulianDayNumber};

const MONTHS: i64 = 13;
const ADAR_II: i128 = 7;

/// Molad of Tishrei AM 1, in parts after the start of the evening before the
/// epoch.
const FIRST_MOLAD_PARTS: i128 = 11 * PARTS_PER_HOUR + 204;
/// A lunation is 29 days and this many parts.
const LUNATION_PARTS: i128 = 12 * PARTS_PER_HOUR + 793;

/// `MEAN_YEAR_DAYS / MEAN_YEAR_SCALE` is the mean year in days.
const MEAN_YEAR_DAYS: i128 = 35_975_351;
const MEAN_YEAR_SCALE: i128 = 98_496;

/// The Hebrew calendar with the fixed month slots described in the module
/// documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hebrew;

fn is_leap(year: i128) -> bool {
    floored_rem(7 * year + 1, METONIC_YEARS) < 7
}

/// Days from the epoch to the molad of Tishrei of `year`, moved to the next
/// day when the molad falls on Sunday, Wednesday or Friday.
fn elapsed_days(year: i128) -> i128 {
    let months = floored_div(METONIC_MONTHS * year - (METONIC_MONTHS - 1), METONIC_YEARS);
    let parts = FIRST_MOLAD_PARTS + LUNATION_PARTS * months;
    let days = 29 * months + floored_div(parts, PARTS_PER_DAY);
    if floored_rem(3 * (days + 1), 7) < 3 { days + 1 } else { days }
}

/// Postponement that keeps year lengths within 353..=355 and 383..=385.
fn year_length_correction(year: i128) -> i128 {
    let previous = elapsed_days(year - 1);
    let current = elapsed_days(year);
    let next = elapsed_days(year + 1);

    if next - current == 356 {
        2
    } else if current - previous == 382 {
        1
    } else {
        0
    }
}

fn new_year(year: i128) -> i128 {
    i128::from(HEBREW_EPOCH) + elapsed_days(year) + year_length_correction(year)
}

fn year_length(year: i128) -> i128 {
    new_year(year + 1) - new_year(year)
}

fn month_length(year: i128, month: i128) -> i128 {
    match month {
        1 | 5 | 8 | 10 | 12 => 30,
        4 | 9 | 11 | 13 => 29,
        // Heshvan is long in complete years, Kislev short in deficient ones.
        2 if year_length(year) % 10 == 5 => 30,
        2 => 29,
        3 if year_length(year) % 10 == 3 => 29,
        3 => 30,
        6 if is_leap(year) => 30,
        6 => 29,
        ADAR_II if is_leap(year) => 29,
        _ => 0,
    }
}

fn narrow(value: i128) -> Result<i64, CalendarError> {
    i64::try_from(value).map_err(|_| CalendarError::Overflow)
}

impl Calendar for Hebrew {
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a month outside `1..=13`;
    /// days are carried arithmetically as in the other calendars.
    fn julian_day_number_from(&self, date: CalendarDate) -> Result<JulianDayNumber, CalendarError> {
        if !(1..=MONTHS).contains(&date.month) {
            return Err(CalendarError::InvalidDate(date));
        }

        let year = i128::from(date.year);
        let days_before: i128 = (1..i128::from(date.month)).map(|month| month_length(year, month)).sum();
        narrow(new_year(year) + days_before + i128::from(date.day) - 1)
    }

    fn date_from(&self, jdn: JulianDayNumber) -> Result<CalendarDate, CalendarError> {
        let jdn = i128::from(jdn);

        // One year short of the likely answer, then corrected either way.
        let mut year = floored_div((jdn - i128::from(HEBREW_EPOCH)) * MEAN_YEAR_SCALE, MEAN_YEAR_DAYS);
        while new_year(year + 1) <= jdn {
            year += 1;
        }
        while new_year(year) > jdn {
            year -= 1;
        }

        let mut remaining = jdn - new_year(year);
        let mut month = 1;
        while remaining >= month_length(year, month) {
            remaining -= month_length(year, month);
            month += 1;
        }

        Ok(CalendarDate::new(narrow(year)?, narrow(month)?, narrow(remaining + 1)?))
    }

    fn months_in_year(&self, _year: i64) -> i64 {
        MONTHS
    }

    fn is_leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        Ok(is_leap(i128::from(year)))
    }

    fn days_in_month(&self, year: i64, month: i64) -> Result<i64, CalendarError> {
        narrow(month_length(i128::from(year), i128::from(month)))
    }

    fn days_in_year(&self, year: i64) -> Result<i64, CalendarError> {
        narrow(year_length(i128::from(year)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::GREGORIAN;

    const NISAN: i64 = 8;

    #[test]
    fn test_gregorian_correspondence() {
        struct TestCase {
            hebrew: CalendarDate,
            gregorian: CalendarDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                hebrew: CalendarDate::new(5785, 1, 1),
                gregorian: CalendarDate::new(2024, 10, 3),
                description: "Rosh Hashanah 5785",
            },
            TestCase {
                hebrew: CalendarDate::new(5784, NISAN, 15),
                gregorian: CalendarDate::new(2024, 4, 23),
                description: "Passover 5784",
            },
            TestCase {
                hebrew: CalendarDate::new(5784, ADAR_II as i64, 14),
                gregorian: CalendarDate::new(2024, 3, 24),
                description: "Purim in a leap year",
            },
        ];

        for case in cases {
            let jdn = GREGORIAN.julian_day_number_from(case.gregorian).unwrap();
            assert_eq!(Hebrew.julian_day_number_from(case.hebrew), Ok(jdn), "{}", case.description);
            assert_eq!(Hebrew.date_from(jdn), Ok(case.hebrew), "{}", case.description);
        }
    }

    #[test]
    fn test_epoch() {
        assert_eq!(Hebrew.julian_day_number_from(CalendarDate::new(1, 1, 1)), Ok(HEBREW_EPOCH));
        assert_eq!(Hebrew.date_from(HEBREW_EPOCH - 1), Ok(CalendarDate::new(0, 13, 29)));
    }

    #[test]
    fn test_year_lengths() {
        struct TestCase {
            year: i64,
            days: i64,
            leap: bool,
        }

        let cases = [
            TestCase {
                year: 5783,
                days: 355,
                leap: false,
            },
            TestCase {
                year: 5784,
                days: 383,
                leap: true,
            },
            TestCase {
                year: 5785,
                days: 355,
                leap: false,
            },
            TestCase {
                year: 5786,
                days: 354,
                leap: false,
            },
        ];

        for case in cases {
            assert_eq!(Hebrew.days_in_year(case.year), Ok(case.days), "{}", case.year);
            assert_eq!(Hebrew.is_leap_year(case.year), Ok(case.leap), "{}", case.year);
        }
    }

    #[test]
    fn test_year_lengths_are_legal() {
        for year in 5_000..5_400 {
            let days = Hebrew.days_in_year(year).unwrap();
            assert!(
                [353, 354, 355, 383, 384, 385].contains(&days),
                "year {year} has {days} days"
            );
            let months: i64 = (1..=MONTHS).map(|month| Hebrew.days_in_month(year, month).unwrap()).sum();
            assert_eq!(months, days, "{year}");
        }
    }

    #[test]
    fn test_adar_ii_only_in_leap_years() {
        assert_eq!(Hebrew.days_in_month(5784, 7), Ok(29));
        assert_eq!(Hebrew.days_in_month(5785, 7), Ok(0));
        assert!(!Hebrew.is_valid_date(CalendarDate::new(5785, 7, 1)));
        assert!(Hebrew.is_valid_date(CalendarDate::new(5784, 7, 1)));
        assert_eq!(Hebrew.days_in_month(5785, 6), Ok(29));
        assert_eq!(Hebrew.days_in_month(5784, 6), Ok(30));
    }

    #[test]
    fn test_month_out_of_range() {
        let date = CalendarDate::new(5785, 14, 1);
        assert_eq!(Hebrew.julian_day_number_from(date), Err(CalendarError::InvalidDate(date)));
        assert_eq!(Hebrew.days_in_month(5785, 0), Ok(0));
    }

    #[test]
    fn test_round_trip() {
        let start = GREGORIAN.julian_day_number_from(CalendarDate::new(2020, 1, 1)).unwrap();
        for jdn in (start..start + 3_000).chain([0, -1, i64::MIN, i64::MAX]) {
            let date = Hebrew.date_from(jdn).unwrap();
            assert_eq!(Hebrew.julian_day_number_from(date), Ok(jdn), "{date}");
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            Hebrew.date_from(i64::MAX),
            Ok(CalendarDate::new(25_252_436_095_537_018, 1, 24))
        );
        assert_eq!(
            Hebrew.julian_day_number_from(CalendarDate::new(i64::MAX, 1, 1)),
            Err(CalendarError::Overflow)
        );
    }
}
