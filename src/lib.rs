//! Conversion between calendar dates and Julian day numbers.
//!
//! Most calendars here are described by the twelve integer parameters of
//! E. G. Richards' algorithm, optionally with the Gregorian century
//! correction layered on top. The conversion is exact for every `i64` day
//! number and year: inputs far from the epoch are first moved into a window
//! where the arithmetic cannot overflow by whole intercalation cycles, and
//! moved back afterwards.
//!
//! The Hebrew, Indian national and Maya calendars have their own
//! implementations on the same day number axis.
//!
//! ```
//! use julian_day_number::{Calendar, CalendarDate, CalendarKind, LongCount, calendars, convert};
//!
//! let jdn = calendars::GREGORIAN.julian_day_number_from(CalendarDate::new(2000, 1, 1))?;
//! assert_eq!(jdn, 2_451_545);
//! assert_eq!(calendars::JULIAN.date_from(jdn)?, CalendarDate::new(1999, 12, 19));
//! assert_eq!(LongCount::from_julian_day_number(jdn).to_string(), "12.19.6.15.2");
//!
//! let hebrew: CalendarKind = "hebrew".parse()?;
//! assert_eq!(
//!     convert(CalendarDate::new(2024, 10, 3), &calendars::GREGORIAN, &hebrew)?,
//!     CalendarDate::new(5785, 1, 1)
//! );
//! # Ok::<(), julian_day_number::CalendarError>(())
//! ```

mod astronomical;
mod calendar;
pub mod calendars;
mod consts;
pub mod converter;
mod easter;
mod hebrew;
mod indian;
mod julian_date;
mod kind;
mod math;
mod maya;
mod parameters;
mod prelude;
pub mod translate;
mod types;

pub use astronomical::Astronomical;
pub use calendar::{ArithmeticCalendar, Calendar, convert};
pub use consts::*;
pub use easter::{gregorian_easter, julian_easter};
pub use hebrew::Hebrew;
pub use indian::IndianNational;
pub use julian_date::{JulianDate, TimeOfDay};
pub use kind::CalendarKind;
pub use math::{floored_div, floored_div_rem, floored_rem};
pub use maya::{CalendarRound, Haab, LongCount, Tzolkin};
pub use parameters::{CalendarParameters, GregorianIntercalationAdjustment, IntercalationCycle, ParameterError};
pub use types::{CalendarDate, JulianDayNumber};

/// Error type for conversions and for the values they accept.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// The result does not fit in an `i64`.
    #[error("result is outside the representable range")]
    Overflow,

    #[error("{0} is not a valid date in this calendar")]
    InvalidDate(CalendarDate),

    #[error("invalid time of day {hour:02}:{minute:02}:{second:02}")]
    InvalidTime { hour: u8, minute: u8, second: f64 },

    #[error("invalid Julian date: {0}")]
    InvalidJulianDate(f64),

    #[error("invalid long count: {0:?}")]
    InvalidLongCount(String),

    #[error("invalid Tzolkʼin day: number {number} (must be 1-13), name {name} (must be 1-20)")]
    InvalidTzolkin { number: i64, name: i64 },

    #[error("invalid Haabʼ day: month {month} (must be 1-19), day {day}")]
    InvalidHaab { month: i64, day: i64 },

    /// The Tzolkʼin and Haabʼ positions never coincide.
    #[error("{tzolkin} {haab} never occurs")]
    ImpossibleCalendarRound { tzolkin: Tzolkin, haab: Haab },

    #[error("unknown calendar: {0:?}")]
    UnknownCalendar(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        struct TestCase {
            error: CalendarError,
            expected: &'static str,
        }

        let cases = [
            TestCase {
                error: CalendarError::Overflow,
                expected: "result is outside the representable range",
            },
            TestCase {
                error: CalendarError::InvalidDate(CalendarDate::new(2023, 2, 29)),
                expected: "2023-02-29 is not a valid date in this calendar",
            },
            TestCase {
                error: CalendarError::InvalidTime {
                    hour: 25,
                    minute: 0,
                    second: 0.0,
                },
                expected: "invalid time of day 25:00:00",
            },
            TestCase {
                error: CalendarError::InvalidLongCount("13.0.0".to_string()),
                expected: "invalid long count: \"13.0.0\"",
            },
            TestCase {
                error: CalendarError::ImpossibleCalendarRound {
                    tzolkin: Tzolkin { number: 4, name: 20 },
                    haab: Haab { month: 1, day: 1 },
                },
                expected: "4 Ajaw 1 Pop never occurs",
            },
            TestCase {
                error: CalendarError::UnknownCalendar("mayan".to_string()),
                expected: "unknown calendar: \"mayan\"",
            },
        ];

        for case in cases {
            assert_eq!(case.error.to_string(), case.expected);
        }
    }

    #[test]
    fn test_errors_propagate_across_calendars() {
        let result = "1.2.3".parse::<LongCount>().map(|long_count| long_count.kin);
        assert!(matches!(result, Err(CalendarError::InvalidLongCount(_))));

        let date = CalendarDate::new(5785, 7, 1);
        assert_eq!(
            convert(date, &Hebrew, &calendars::GREGORIAN),
            Err(CalendarError::InvalidDate(date))
        );
    }
}
