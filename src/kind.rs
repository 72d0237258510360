use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::astronomical::Astronomical;
use crate::calendar::Calendar;
use crate::calendars;
use crate::hebrew::Hebrew;
use crate::indian::IndianNational;
use crate::prelude::*;
use crate::types::{CalendarDate, JulianDayNumber};

/// Names every year/month/day calendar in the crate, so that a calendar can
/// be chosen at runtime or read from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum CalendarKind {
    #[display(fmt = "julian")]
    Julian,
    #[display(fmt = "gregorian")]
    Gregorian,
    /// Julian before the 1582 reform, Gregorian after.
    #[display(fmt = "astronomical")]
    Astronomical,
    #[display(fmt = "egyptian")]
    Egyptian,
    #[display(fmt = "armenian")]
    Armenian,
    #[display(fmt = "khwarizmian")]
    Khwarizmian,
    #[display(fmt = "persian")]
    Persian,
    #[display(fmt = "ethiopian_amete_mihret")]
    EthiopianAmeteMihret,
    #[display(fmt = "ethiopian_amete_alem")]
    EthiopianAmeteAlem,
    #[display(fmt = "coptic")]
    Coptic,
    #[display(fmt = "french_republican")]
    FrenchRepublican,
    #[display(fmt = "islamic")]
    Islamic,
    #[display(fmt = "bahai")]
    Bahai,
    #[display(fmt = "indian_national")]
    IndianNational,
    #[display(fmt = "hebrew")]
    Hebrew,
}

impl CalendarKind {
    pub const ALL: [Self; 15] = [
        Self::Julian,
        Self::Gregorian,
        Self::Astronomical,
        Self::Egyptian,
        Self::Armenian,
        Self::Khwarizmian,
        Self::Persian,
        Self::EthiopianAmeteMihret,
        Self::EthiopianAmeteAlem,
        Self::Coptic,
        Self::FrenchRepublican,
        Self::Islamic,
        Self::Bahai,
        Self::IndianNational,
        Self::Hebrew,
    ];

    /// The calendar this kind names.
    pub const fn calendar(self) -> &'static dyn Calendar {
        match self {
            Self::Julian => &calendars::JULIAN,
            Self::Gregorian => &calendars::GREGORIAN,
            Self::Astronomical => &Astronomical,
            Self::Egyptian => &calendars::EGYPTIAN,
            Self::Armenian => &calendars::ARMENIAN,
            Self::Khwarizmian => &calendars::KHWARIZMIAN,
            Self::Persian => &calendars::PERSIAN,
            Self::EthiopianAmeteMihret => &calendars::ETHIOPIAN_AMETE_MIHRET,
            Self::EthiopianAmeteAlem => &calendars::ETHIOPIAN_AMETE_ALEM,
            Self::Coptic => &calendars::COPTIC,
            Self::FrenchRepublican => &calendars::FRENCH_REPUBLICAN,
            Self::Islamic => &calendars::ISLAMIC,
            Self::Bahai => &calendars::BAHAI,
            Self::IndianNational => &IndianNational,
            Self::Hebrew => &Hebrew,
        }
    }
}

impl FromStr for CalendarKind {
    type Err = CalendarError;

    /// Parses the snake_case name, ignoring case and accepting `-` for `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.to_string() == name)
            .ok_or_else(|| CalendarError::UnknownCalendar(s.to_string()))
    }
}

impl Calendar for CalendarKind {
    fn julian_day_number_from(&self, date: CalendarDate) -> Result<JulianDayNumber, CalendarError> {
        self.calendar().julian_day_number_from(date)
    }

    fn date_from(&self, jdn: JulianDayNumber) -> Result<CalendarDate, CalendarError> {
        self.calendar().date_from(jdn)
    }

    fn months_in_year(&self, year: i64) -> i64 {
        self.calendar().months_in_year(year)
    }

    fn is_leap_year(&self, year: i64) -> Result<bool, CalendarError> {
        self.calendar().is_leap_year(year)
    }

    fn days_in_month(&self, year: i64, month: i64) -> Result<i64, CalendarError> {
        self.calendar().days_in_month(year, month)
    }

    fn days_in_year(&self, year: i64) -> Result<i64, CalendarError> {
        self.calendar().days_in_year(year)
    }

    fn is_valid_date(&self, date: CalendarDate) -> bool {
        self.calendar().is_valid_date(date)
    }

    fn validate(&self, date: CalendarDate) -> Result<CalendarDate, CalendarError> {
        self.calendar().validate(date)
    }
}
