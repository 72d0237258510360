use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// A Julian day number: whole days counted from the day that begins at noon,
/// 1 January 4713 BC in the proleptic Julian calendar (JDN 0).
pub type JulianDayNumber = i64;

/// A `(year, month, day)` triple in some calendar.
///
/// The triple carries no calendar and is not validated on construction: the
/// conversion engine accepts any month and day numbers and extends every
/// calendar proleptically. Use [`Calendar::validate`](crate::Calendar::validate)
/// to check a date against a particular calendar's rules.
///
/// Years are astronomical: the year before year 1 is year 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
#[display(fmt = "{}-{:02}-{:02}", year, month, day)]
pub struct CalendarDate {
    pub year:  i64,
    pub month: i64,
    pub day:   i64,
}

impl CalendarDate {
    /// Creates a date from its components.
    #[inline]
    pub const fn new(year: i64, month: i64, day: i64) -> Self {
        Self { year, month, day }
    }

    /// Returns the date as a `(year, month, day)` tuple.
    #[inline]
    pub const fn to_tuple(self) -> (i64, i64, i64) {
        (self.year, self.month, self.day)
    }
}

impl From<(i64, i64, i64)> for CalendarDate {
    fn from((year, month, day): (i64, i64, i64)) -> Self {
        Self::new(year, month, day)
    }
}

impl From<CalendarDate> for (i64, i64, i64) {
    fn from(date: CalendarDate) -> Self {
        date.to_tuple()
    }
}
