//! The calendar astronomers use for historical dates: Julian up to
//! 4 October 1582, Gregorian from 15 October 1582.

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::calendar::{ArithmeticCalendar, Calendar};
use crate::calendars::{GREGORIAN, JULIAN};
use crate::consts::GREGORIAN_REFORM_JDN;
use crate::types::{CalendarDate, JulianDayNumber};

const REFORM_YEAR: i64 = 1582;
const LAST_JULIAN_DATE: CalendarDate = CalendarDate::new(REFORM_YEAR, 10, 4);
const FIRST_GREGORIAN_DATE: CalendarDate = CalendarDate::new(REFORM_YEAR, 10, 15);

/// Julian calendar before the Gregorian reform, Gregorian after it.
///
/// The ten days dropped by the reform (5 to 14 October 1582) are not valid
/// dates. Converting one anyway reads it as a Julian date.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Astronomical;

impl Astronomical {
    fn for_date(date: CalendarDate) -> &'static ArithmeticCalendar {
        if date < FIRST_GREGORIAN_DATE { &JULIAN } else { &GREGORIAN }
    }

    const fn for_day_number(jdn: JulianDayNumber) -> &'static ArithmeticCalendar {
        if jdn < GREGORIAN_REFORM_JDN { &JULIAN } else { &GREGORIAN }
    }

    const fn for_year(year: i64) -> &'static ArithmeticCalendar {
        if year < REFORM_YEAR { &JULIAN } else { &GREGORIAN }
    }
}

impl Calendar for Astronomical {
    fn julian_day_number_from(&self, date: CalendarDate) -> Result<JulianDayNumber, CalendarError> {
        Self::for_date(date).julian_day_number_from(date)
    }

    fn date_from(&self, jdn: JulianDayNumber) -> Result<CalendarDate, CalendarError> {
        Self::for_day_number(jdn).date_from(jdn)
    }

    fn months_in_year(&self, _year: i64) -> i64 {
        12
    }

    fn is_leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        Self::for_year(year).is_leap_year(year)
    }

    /// Nominal length of the month under the rule in force that year;
    /// October 1582 counts 31 days even though ten of them were skipped.
    fn days_in_month(&self, year: i64, month: i64) -> Result<i64, CalendarError> {
        Self::for_year(year).days_in_month(year, month)
    }

    fn validate(&self, date: CalendarDate) -> Result<CalendarDate, CalendarError> {
        let length = self.days_in_month(date.year, date.month)?;
        let skipped = LAST_JULIAN_DATE < date && date < FIRST_GREGORIAN_DATE;
        if (1..=length).contains(&date.day) && !skipped {
            Ok(date)
        } else {
            Err(CalendarError::InvalidDate(date))
        }
    }
}
