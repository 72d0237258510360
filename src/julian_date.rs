//! Fractional Julian dates.
//!
//! A Julian date counts days from noon, so the civil day with Julian day
//! number `n` runs from `JD n - 0.5` to `JD n + 0.5`.

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::calendar::Calendar;
use crate::consts::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::prelude::*;
use crate::types::{CalendarDate, JulianDayNumber};

/// A time of day on the civil (midnight-based) clock.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", hour, minute, second)]
pub struct TimeOfDay {
    pub hour:   u8,
    pub minute: u8,
    pub second: f64,
}

impl TimeOfDay {
    pub const MIDNIGHT: Self = Self { hour: 0, minute: 0, second: 0.0 };
    pub const NOON: Self = Self { hour: 12, minute: 0, second: 0.0 };

    /// # Errors
    /// Returns `CalendarError::InvalidTime` unless `hour < 24`,
    /// `minute < 60` and `0 <= second < 60`.
    pub fn new(hour: u8, minute: u8, second: f64) -> Result<Self, CalendarError> {
        if hour < 24 && minute < 60 && (0.0..60.0).contains(&second) {
            Ok(Self { hour, minute, second })
        } else {
            Err(CalendarError::InvalidTime { hour, minute, second })
        }
    }

    pub fn seconds_since_midnight(&self) -> f64 {
        f64::from(self.hour) * SECONDS_PER_HOUR + f64::from(self.minute) * SECONDS_PER_MINUTE + self.second
    }

    /// `seconds` must lie in `0.0..SECONDS_PER_DAY`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_seconds(seconds: f64) -> Self {
        let hour = (seconds / SECONDS_PER_HOUR).floor();
        let rest = seconds - hour * SECONDS_PER_HOUR;
        let minute = (rest / SECONDS_PER_MINUTE).floor();
        Self {
            hour:   hour as u8,
            minute: minute as u8,
            second: rest - minute * SECONDS_PER_MINUTE,
        }
    }
}

/// A Julian date: days and fractions of a day since noon on 1 January
/// 4713 BC (proleptic Julian).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Display, From, Into)]
#[display(fmt = "JD {}", _0)]
pub struct JulianDate(pub f64);

impl JulianDate {
    /// # Errors
    /// Returns `CalendarError::InvalidJulianDate` for NaN or an infinity.
    pub fn new(value: f64) -> Result<Self, CalendarError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(CalendarError::InvalidJulianDate(value))
        }
    }

    /// The Julian date of `time` on the civil day `jdn`.
    #[allow(clippy::cast_precision_loss)]
    pub fn from_day_number_and_time(jdn: JulianDayNumber, time: TimeOfDay) -> Self {
        Self(jdn as f64 - 0.5 + time.seconds_since_midnight() / SECONDS_PER_DAY)
    }

    /// Splits the date into the civil day it falls on and the time of day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidJulianDate` if the value is not finite
    /// or its day number does not fit in an `i64`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn to_day_number_and_time(self) -> Result<(JulianDayNumber, TimeOfDay), CalendarError> {
        let shifted = self.0 + 0.5;
        let day = shifted.floor();
        // i64::MAX is not exactly representable; 2^63 is the first value out.
        if !day.is_finite() || day < i64::MIN as f64 || day >= -(i64::MIN as f64) {
            return Err(CalendarError::InvalidJulianDate(self.0));
        }

        let seconds = ((shifted - day) * SECONDS_PER_DAY).clamp(0.0, SECONDS_PER_DAY);
        let (day, seconds) = if seconds >= SECONDS_PER_DAY {
            (day + 1.0, 0.0)
        } else {
            (day, seconds)
        };
        Ok((day as JulianDayNumber, TimeOfDay::from_seconds(seconds)))
    }

    /// The civil day this date falls on.
    ///
    /// # Errors
    /// As for [`JulianDate::to_day_number_and_time`].
    pub fn day_number(self) -> Result<JulianDayNumber, CalendarError> {
        Ok(self.to_day_number_and_time()?.0)
    }

    /// The Julian date of a date and time in any calendar.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDate` if `date` does not exist in
    /// `calendar`, or `CalendarError::Overflow` from the conversion.
    pub fn from_date_time<C: Calendar + ?Sized>(
        calendar: &C,
        date: CalendarDate,
        time: TimeOfDay,
    ) -> Result<Self, CalendarError> {
        let jdn = calendar.julian_day_number_from(calendar.validate(date)?)?;
        Ok(Self::from_day_number_and_time(jdn, time))
    }

    /// The date and time this Julian date falls on in `calendar`.
    ///
    /// # Errors
    /// As for [`JulianDate::to_day_number_and_time`], plus
    /// `CalendarError::Overflow` from the conversion.
    pub fn to_date_time<C: Calendar + ?Sized>(
        self,
        calendar: &C,
    ) -> Result<(CalendarDate, TimeOfDay), CalendarError> {
        let (jdn, time) = self.to_day_number_and_time()?;
        Ok((calendar.date_from(jdn)?, time))
    }
}
