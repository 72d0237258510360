//! Date of Easter Sunday by the ecclesiastical computus.

use crate::math::{floored_div, floored_div_rem, floored_rem};
use crate::types::CalendarDate;

/// Easter Sunday of `year` in the Gregorian calendar, by the anonymous
/// Gregorian algorithm (Meeus/Jones/Butcher).
///
/// The result is a Gregorian date, in March or April.
pub fn gregorian_easter(year: i64) -> CalendarDate {
    let golden = floored_rem(year, 19);
    let (century, year_of_century) = floored_div_rem(year, 100);
    let (leap_centuries, century_rem) = floored_div_rem(century, 4);
    let moon_correction = floored_div(century + 8, 25);
    let solar_correction = floored_div(century - moon_correction + 1, 3);

    let epact = floored_rem(
        19 * golden + century - leap_centuries - solar_correction + 15,
        30,
    );
    let (quarter, quarter_rem) = floored_div_rem(year_of_century, 4);
    let weekday = floored_rem(32 + 2 * century_rem + 2 * quarter - epact - quarter_rem, 7);
    let shift = floored_div(golden + 11 * epact + 22 * weekday, 451);

    let (month, day) = floored_div_rem(epact + weekday - 7 * shift + 114, 31);
    CalendarDate::new(year, month, day + 1)
}

/// Easter Sunday of `year` in the Julian calendar.
///
/// The result is a Julian date; convert it through a Julian day number to
/// compare with Gregorian dates.
pub fn julian_easter(year: i64) -> CalendarDate {
    let a = floored_rem(year, 4);
    let b = floored_rem(year, 7);
    let c = floored_rem(year, 19);
    let d = floored_rem(19 * c + 15, 30);
    let e = floored_rem(2 * a + 4 * b - d + 34, 7);

    let (month, day) = floored_div_rem(d + e + 114, 31);
    CalendarDate::new(year, month, day + 1)
}
