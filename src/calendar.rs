//! The surface shared by every year/month/day calendar, and the arithmetic
//! calendars that are nothing but a set of parameters.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::parameters::{
    CalendarParameters, GregorianIntercalationAdjustment, IntercalationCycle, ParameterError,
};
use crate::translate;
use crate::types::{CalendarDate, JulianDayNumber};

/// A calendar whose dates are `(year, month, day)` triples on the Julian day
/// number axis.
///
/// Only the conversions, the month count and the leap rule are required; the
/// month and year lengths and date validation follow from them.
pub trait Calendar {
    /// Julian day number of `date`, extending the calendar proleptically.
    /// Months and days outside their usual ranges carry into neighbouring
    /// months and years, except where a calendar documents otherwise.
    ///
    /// # Errors
    /// Returns `CalendarError::Overflow` if the day number does not fit in an
    /// `i64`.
    fn julian_day_number_from(&self, date: CalendarDate) -> Result<JulianDayNumber, CalendarError>;

    /// The date falling on `jdn`.
    ///
    /// # Errors
    /// Returns `CalendarError::Overflow` if the year does not fit in an `i64`.
    fn date_from(&self, jdn: JulianDayNumber) -> Result<CalendarDate, CalendarError>;

    /// Number of month slots in `year`.
    fn months_in_year(&self, year: i64) -> i64;

    /// Whether `year` carries the calendar's intercalary day or month.
    ///
    /// # Errors
    /// Returns `CalendarError::Overflow` at the far ends of the `i64` range.
    fn is_leap_year(&self, year: i64) -> Result<bool, CalendarError>;

    /// Days in `month` of `year`, or 0 if the year has no such month.
    ///
    /// # Errors
    /// Returns `CalendarError::Overflow` if the first day of the month or of
    /// the month after it is not representable.
    fn days_in_month(&self, year: i64, month: i64) -> Result<i64, CalendarError> {
        let months = self.months_in_year(year);
        if !(1..=months).contains(&month) {
            return Ok(0);
        }

        let start = self.julian_day_number_from(CalendarDate::new(year, month, 1))?;
        let next = if month == months {
            CalendarDate::new(year.checked_add(1).ok_or(CalendarError::Overflow)?, 1, 1)
        } else {
            CalendarDate::new(year, month + 1, 1)
        };
        Ok(self.julian_day_number_from(next)? - start)
    }

    /// Days from the first day of `year` to the first day of the next.
    ///
    /// # Errors
    /// Returns `CalendarError::Overflow` if either day is not representable.
    fn days_in_year(&self, year: i64) -> Result<i64, CalendarError> {
        let next = year.checked_add(1).ok_or(CalendarError::Overflow)?;
        let start = self.julian_day_number_from(CalendarDate::new(year, 1, 1))?;
        Ok(self.julian_day_number_from(CalendarDate::new(next, 1, 1))? - start)
    }

    /// Whether `date` names a day that exists in this calendar.
    fn is_valid_date(&self, date: CalendarDate) -> bool {
        self.validate(date).is_ok()
    }

    /// Returns `date` unchanged if it names a day that exists in this
    /// calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` for a month outside the year or a
    /// day outside the month.
    fn validate(&self, date: CalendarDate) -> Result<CalendarDate, CalendarError> {
        let length = self.days_in_month(date.year, date.month)?;
        if (1..=length).contains(&date.day) {
            Ok(date)
        } else {
            Err(CalendarError::InvalidDate(date))
        }
    }
}

/// Moves a valid date from one calendar to another through its Julian day
/// number.
///
/// # Errors
/// Returns `CalendarError::InvalidDate` if `date` is not valid in `from`, and
/// `CalendarError::Overflow` if the conversion leaves the `i64` range.
pub fn convert<F, T>(date: CalendarDate, from: &F, to: &T) -> Result<CalendarDate, CalendarError>
where
    F: Calendar + ?Sized,
    T: Calendar + ?Sized,
{
    let jdn = from.julian_day_number_from(from.validate(date)?)?;
    to.date_from(jdn)
}

/// A calendar defined entirely by Richards' parameters, optionally with the
/// Gregorian-type century correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawArithmeticCalendar")]
pub struct ArithmeticCalendar {
    pub parameters: CalendarParameters,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adjustment: Option<GregorianIntercalationAdjustment>,
}

impl ArithmeticCalendar {
    /// Builds a calendar after checking that the parameters are usable and
    /// that any adjustment sits on a 4-year base.
    ///
    /// # Errors
    /// Returns the first `ParameterError` found.
    pub fn try_new(
        parameters: CalendarParameters,
        adjustment: Option<GregorianIntercalationAdjustment>,
    ) -> Result<Self, ParameterError> {
        parameters.validate()?;
        if let Some(adjustment) = &adjustment {
            adjustment.check_base(&parameters)?;
        }
        Ok(Self { parameters, adjustment })
    }

    /// The calendar's exact repeat period.
    pub const fn cycle(&self) -> IntercalationCycle {
        IntercalationCycle::of(&self.parameters, self.adjustment.as_ref())
    }

    /// Years converted without translation.
    pub fn safe_year_range(&self) -> RangeInclusive<i64> {
        translate::safe_year_range(&self.parameters, self.adjustment.as_ref())
    }

    /// Day numbers converted without translation.
    pub fn safe_day_number_range(&self) -> RangeInclusive<JulianDayNumber> {
        translate::safe_day_number_range(&self.parameters, self.adjustment.as_ref())
    }
}

#[derive(Deserialize)]
struct RawArithmeticCalendar {
    parameters: CalendarParameters,
    #[serde(default)]
    adjustment: Option<GregorianIntercalationAdjustment>,
}

impl TryFrom<RawArithmeticCalendar> for ArithmeticCalendar {
    type Error = ParameterError;

    fn try_from(raw: RawArithmeticCalendar) -> Result<Self, Self::Error> {
        Self::try_new(raw.parameters, raw.adjustment)
    }
}

impl Calendar for ArithmeticCalendar {
    fn julian_day_number_from(&self, date: CalendarDate) -> Result<JulianDayNumber, CalendarError> {
        translate::date_to_day_number(date, &self.parameters, self.adjustment.as_ref())
    }

    fn date_from(&self, jdn: JulianDayNumber) -> Result<CalendarDate, CalendarError> {
        translate::day_number_to_date(jdn, &self.parameters, self.adjustment.as_ref())
    }

    fn months_in_year(&self, _year: i64) -> i64 {
        self.parameters.n
    }

    fn is_leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        Ok(self.days_in_year(year)? > self.cycle().common_year_length())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::*;

    #[test]
    fn test_days_in_month() {
        struct TestCase {
            calendar: ArithmeticCalendar,
            year: i64,
            month: i64,
            days: i64,
            description: &'static str,
        }

        let cases = [
            TestCase {
                calendar: GREGORIAN,
                year: 2024,
                month: 2,
                days: 29,
                description: "Gregorian leap February",
            },
            TestCase {
                calendar: GREGORIAN,
                year: 1900,
                month: 2,
                days: 28,
                description: "Gregorian century February",
            },
            TestCase {
                calendar: JULIAN,
                year: 1900,
                month: 2,
                days: 29,
                description: "Julian century February",
            },
            TestCase {
                calendar: GREGORIAN,
                year: 2023,
                month: 12,
                days: 31,
                description: "month running into the next year",
            },
            TestCase {
                calendar: EGYPTIAN,
                year: 100,
                month: 13,
                days: 5,
                description: "Egyptian epagomenal days",
            },
            TestCase {
                calendar: PERSIAN,
                year: 100,
                month: 9,
                days: 5,
                description: "Yazdegerdi epagomenal days after the eighth month",
            },
            TestCase {
                calendar: PERSIAN,
                year: 100,
                month: 13,
                days: 30,
                description: "Yazdegerdi last month",
            },
            TestCase {
                calendar: ETHIOPIAN_AMETE_MIHRET,
                year: 2015,
                month: 13,
                days: 6,
                description: "Ethiopian Pagume in a leap year",
            },
            TestCase {
                calendar: ETHIOPIAN_AMETE_MIHRET,
                year: 2016,
                month: 13,
                days: 5,
                description: "Ethiopian Pagume in a common year",
            },
            TestCase {
                calendar: COPTIC,
                year: 1739,
                month: 13,
                days: 6,
                description: "Coptic Nasie in a leap year",
            },
            TestCase {
                calendar: ISLAMIC,
                year: 2,
                month: 12,
                days: 30,
                description: "Dhu al-Hijjah in a leap year",
            },
            TestCase {
                calendar: ISLAMIC,
                year: 1,
                month: 12,
                days: 29,
                description: "Dhu al-Hijjah in a common year",
            },
            TestCase {
                calendar: ISLAMIC,
                year: 1,
                month: 1,
                days: 30,
                description: "Muharram",
            },
            TestCase {
                calendar: FRENCH_REPUBLICAN,
                year: 3,
                month: 13,
                days: 6,
                description: "Republican sansculottides in a leap year",
            },
            TestCase {
                calendar: BAHAI,
                year: 170,
                month: 19,
                days: 4,
                description: "Ayyám-i-Há in a common year",
            },
            TestCase {
                calendar: BAHAI,
                year: 160,
                month: 19,
                days: 5,
                description: "Ayyám-i-Há in a leap year",
            },
            TestCase {
                calendar: BAHAI,
                year: 170,
                month: 20,
                days: 19,
                description: "month of fasting",
            },
            TestCase {
                calendar: GREGORIAN,
                year: 2024,
                month: 13,
                days: 0,
                description: "month past the end of the year",
            },
            TestCase {
                calendar: GREGORIAN,
                year: 2024,
                month: 0,
                days: 0,
                description: "month zero",
            },
        ];

        for case in cases {
            assert_eq!(
                case.calendar.days_in_month(case.year, case.month),
                Ok(case.days),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_leap_years() {
        for year in [1600, 2000, 2024, 1996] {
            assert_eq!(GREGORIAN.is_leap_year(year), Ok(true), "{year}");
        }
        for year in [1700, 1900, 2100, 2023] {
            assert_eq!(GREGORIAN.is_leap_year(year), Ok(false), "{year}");
        }
        assert_eq!(JULIAN.is_leap_year(1900), Ok(true));
        assert_eq!(JULIAN.is_leap_year(0), Ok(true));
        assert_eq!(JULIAN.is_leap_year(-4), Ok(true));
        assert_eq!(JULIAN.is_leap_year(-1), Ok(false));
        assert_eq!(EGYPTIAN.is_leap_year(4), Ok(false));

        let islamic: Vec<i64> = (1..=30).filter(|&year| ISLAMIC.is_leap_year(year) == Ok(true)).collect();
        assert_eq!(islamic, [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29]);

        for year in [3, 7, 11, 15] {
            assert_eq!(FRENCH_REPUBLICAN.is_leap_year(year), Ok(true), "{year}");
        }
        for year in [100, 200, 400] {
            assert_eq!(FRENCH_REPUBLICAN.days_in_year(year), Ok(365), "{year}");
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(GREGORIAN.days_in_year(2024), Ok(366));
        assert_eq!(GREGORIAN.days_in_year(2023), Ok(365));
        assert_eq!(ISLAMIC.days_in_year(2), Ok(355));
        assert_eq!(ISLAMIC.days_in_year(1), Ok(354));
        assert_eq!(ARMENIAN.days_in_year(1), Ok(365));
    }

    #[test]
    fn test_validate() {
        assert!(GREGORIAN.is_valid_date(CalendarDate::new(2024, 2, 29)));
        assert!(!GREGORIAN.is_valid_date(CalendarDate::new(2023, 2, 29)));
        assert!(!GREGORIAN.is_valid_date(CalendarDate::new(2023, 1, 0)));
        assert!(!GREGORIAN.is_valid_date(CalendarDate::new(2023, 13, 1)));
        assert!(EGYPTIAN.is_valid_date(CalendarDate::new(1, 13, 5)));
        assert!(!EGYPTIAN.is_valid_date(CalendarDate::new(1, 13, 6)));

        let bad = CalendarDate::new(2023, 4, 31);
        assert_eq!(GREGORIAN.validate(bad), Err(CalendarError::InvalidDate(bad)));
    }

    #[test]
    fn test_convert() {
        let date = CalendarDate::new(2023, 9, 12);
        assert_eq!(
            convert(date, &GREGORIAN, &ETHIOPIAN_AMETE_MIHRET),
            Ok(CalendarDate::new(2016, 1, 1))
        );
        assert_eq!(convert(date, &GREGORIAN, &COPTIC), Ok(CalendarDate::new(1740, 1, 1)));
        assert_eq!(
            convert(CalendarDate::new(1446, 1, 1), &ISLAMIC, &GREGORIAN),
            Ok(CalendarDate::new(2024, 7, 8))
        );

        let invalid = CalendarDate::new(2023, 2, 30);
        assert_eq!(
            convert(invalid, &GREGORIAN, &JULIAN),
            Err(CalendarError::InvalidDate(invalid))
        );
    }

    #[test]
    fn test_try_new() {
        assert_eq!(
            ArithmeticCalendar::try_new(GREGORIAN.parameters, GREGORIAN.adjustment),
            Ok(GREGORIAN)
        );
        assert_eq!(
            ArithmeticCalendar::try_new(ISLAMIC.parameters, GREGORIAN.adjustment),
            Err(ParameterError::AdjustmentNeedsJulianBase { years: 30, days: 10_631 })
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&JULIAN).unwrap();
        assert!(!json.contains("adjustment"));
        let parsed: ArithmeticCalendar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, JULIAN);

        let json = serde_json::to_string(&BAHAI).unwrap();
        let parsed: ArithmeticCalendar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, BAHAI);

        let mismatched = ArithmeticCalendar {
            adjustment: GREGORIAN.adjustment,
            ..ISLAMIC
        };
        let json = serde_json::to_string(&mismatched).unwrap();
        assert!(serde_json::from_str::<ArithmeticCalendar>(&json).is_err());
    }

    #[test]
    fn test_trait_object() {
        let calendars: [&dyn Calendar; 3] = [&GREGORIAN, &JULIAN, &ISLAMIC];
        for calendar in calendars {
            let date = calendar.date_from(2_451_545).unwrap();
            assert_eq!(calendar.julian_day_number_from(date), Ok(2_451_545));
        }
    }

    quickcheck::quickcheck! {
        fn prop_day_number_round_trips(jdn: i64) -> bool {
            ALL.iter().all(|calendar| {
                calendar
                    .date_from(jdn)
                    .and_then(|date| calendar.julian_day_number_from(date))
                    == Ok(jdn)
            })
        }

        fn prop_dates_from_day_numbers_are_valid(jdn: i32) -> bool {
            ALL.iter().all(|calendar| {
                calendar
                    .date_from(i64::from(jdn))
                    .is_ok_and(|date| calendar.is_valid_date(date))
            })
        }

        fn prop_cycle_periodicity(year: i32, month: u8) -> bool {
            ALL.iter().all(|calendar| {
                let cycle = calendar.cycle();
                let month = i64::from(month) % calendar.parameters.n + 1;
                let date = CalendarDate::new(i64::from(year), month, 1);
                let later = CalendarDate::new(i64::from(year) + cycle.years, month, 1);
                calendar.julian_day_number_from(later)
                    == calendar.julian_day_number_from(date).map(|jdn| jdn + cycle.days)
            })
        }
    }
}
