//! Maya long count, Tzolkʼin, Haabʼ and calendar round, on the Julian day
//! number axis through the GMT correlation.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::CalendarError;
use crate::consts::{
    CALENDAR_ROUND_DAYS, DAYS_PER_BAKTUN, DAYS_PER_KATUN, DAYS_PER_TUN, DAYS_PER_UINAL, HAAB_DAYS,
    MAYA_CORRELATION, TZOLKIN_DAYS,
};
use crate::math::{floored_div_rem, floored_rem};
use crate::prelude::*;
use crate::types::JulianDayNumber;

const TZOLKIN_NAMES: [&str; 20] = [
    "Imix", "Ikʼ", "Akʼbʼal", "Kʼan", "Chikchan", "Kimi", "Manikʼ", "Lamat", "Muluk", "Ok", "Chuwen", "Ebʼ",
    "Bʼen", "Ix", "Men", "Kʼibʼ", "Kabʼan", "Etzʼnabʼ", "Kawak", "Ajaw",
];

const HAAB_MONTHS: [&str; 19] = [
    "Pop", "Woʼ", "Sip", "Sotzʼ", "Sek", "Xul", "Yaxkʼin", "Mol", "Chʼen", "Yax", "Sakʼ", "Keh", "Mak", "Kʼankʼin",
    "Muwan", "Pax", "Kʼayab", "Kumkʼu", "Wayebʼ",
];

/// Day count of the Tzolkʼin and Haabʼ positions at the correlation day,
/// 4 Ajaw 8 Kumkʼu.
const TZOLKIN_NUMBER_OFFSET: i64 = 3;
const TZOLKIN_NAME_OFFSET: i64 = 19;
const HAAB_OFFSET: i64 = 348;

const WAYEB: i64 = 19;

/// `days` since the correlation day, reduced modulo `period`.
fn days_since_creation(jdn: JulianDayNumber, period: i64) -> i64 {
    floored_rem(jdn, period) - floored_rem(MAYA_CORRELATION, period)
}

fn name_at(names: &[&'static str], position: i64) -> &'static str {
    usize::try_from(position - 1)
        .ok()
        .and_then(|index| names.get(index))
        .copied()
        .unwrap_or("?")
}

/// A long count date, `baktun.katun.tun.uinal.kin` days after the creation
/// date 0.0.0.0.0 (11 August 3114 BC, proleptic Gregorian).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
#[display(fmt = "{}.{}.{}.{}.{}", baktun, katun, tun, uinal, kin)]
pub struct LongCount {
    pub baktun: i64,
    pub katun:  i64,
    pub tun:    i64,
    pub uinal:  i64,
    pub kin:    i64,
}

impl LongCount {
    /// Creates a long count, checking every place but the baktun.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidLongCount` if a place is out of range.
    pub fn new(baktun: i64, katun: i64, tun: i64, uinal: i64, kin: i64) -> Result<Self, CalendarError> {
        let long_count = Self { baktun, katun, tun, uinal, kin };
        let places_valid = (0..20).contains(&katun)
            && (0..20).contains(&tun)
            && (0..18).contains(&uinal)
            && (0..20).contains(&kin);
        if places_valid {
            Ok(long_count)
        } else {
            Err(CalendarError::InvalidLongCount(long_count.to_string()))
        }
    }

    pub fn from_julian_day_number(jdn: JulianDayNumber) -> Self {
        // Split both day numbers into baktuns first so that nothing overflows
        // near i64::MIN.
        let (baktuns, days) = floored_div_rem(jdn, DAYS_PER_BAKTUN);
        let (creation_baktuns, creation_days) = floored_div_rem(MAYA_CORRELATION, DAYS_PER_BAKTUN);
        let (borrow, days) = floored_div_rem(days - creation_days, DAYS_PER_BAKTUN);

        let (katun, days) = floored_div_rem(days, DAYS_PER_KATUN);
        let (tun, days) = floored_div_rem(days, DAYS_PER_TUN);
        let (uinal, kin) = floored_div_rem(days, DAYS_PER_UINAL);
        Self {
            baktun: baktuns - creation_baktuns + borrow,
            katun,
            tun,
            uinal,
            kin,
        }
    }

    /// # Errors
    /// Returns `CalendarError::Overflow` if the day number does not fit in an
    /// `i64`.
    pub fn julian_day_number(&self) -> Result<JulianDayNumber, CalendarError> {
        let days = i128::from(self.baktun) * i128::from(DAYS_PER_BAKTUN)
            + i128::from(self.katun) * i128::from(DAYS_PER_KATUN)
            + i128::from(self.tun) * i128::from(DAYS_PER_TUN)
            + i128::from(self.uinal) * i128::from(DAYS_PER_UINAL)
            + i128::from(self.kin);
        JulianDayNumber::try_from(days + i128::from(MAYA_CORRELATION)).map_err(|_| CalendarError::Overflow)
    }
}

impl FromStr for LongCount {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidLongCount(s.to_string());

        let places = s
            .trim()
            .split('.')
            .map(|place| place.parse::<i64>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        match places.as_slice() {
            &[baktun, katun, tun, uinal, kin] => Self::new(baktun, katun, tun, uinal, kin),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for LongCount {
    type Error = CalendarError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<LongCount> for String {
    fn from(long_count: LongCount) -> Self {
        long_count.to_string()
    }
}

/// A day of the 260-day Tzolkʼin: a number `1..=13` and one of twenty named
/// days `1..=20` (Imix to Ajaw).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "RawTzolkin")]
#[display(fmt = "{} {}", number, "name_at(&TZOLKIN_NAMES, *name)")]
pub struct Tzolkin {
    pub number: i64,
    pub name:   i64,
}

impl Tzolkin {
    /// # Errors
    /// Returns `CalendarError::InvalidTzolkin` for a number or name out of
    /// range.
    pub fn new(number: i64, name: i64) -> Result<Self, CalendarError> {
        if (1..=13).contains(&number) && (1..=20).contains(&name) {
            Ok(Self { number, name })
        } else {
            Err(CalendarError::InvalidTzolkin { number, name })
        }
    }

    pub fn from_julian_day_number(jdn: JulianDayNumber) -> Self {
        let days = days_since_creation(jdn, TZOLKIN_DAYS);
        Self {
            number: floored_rem(days + TZOLKIN_NUMBER_OFFSET, 13) + 1,
            name:   floored_rem(days + TZOLKIN_NAME_OFFSET, 20) + 1,
        }
    }

    /// Yucatec name of the day.
    pub fn day_name(&self) -> &'static str {
        name_at(&TZOLKIN_NAMES, self.name)
    }

    /// Days since creation, modulo 260, on which this Tzolkʼin day falls.
    fn position(&self) -> i64 {
        let number_residue = floored_rem(self.number - 1 - TZOLKIN_NUMBER_OFFSET, 13);
        (0..20)
            .map(|cycle| number_residue + 13 * cycle)
            .find(|&days| floored_rem(days + TZOLKIN_NAME_OFFSET, 20) + 1 == self.name)
            .unwrap_or(number_residue)
    }
}

#[derive(Deserialize)]
struct RawTzolkin {
    number: i64,
    name:   i64,
}

impl TryFrom<RawTzolkin> for Tzolkin {
    type Error = CalendarError;

    fn try_from(raw: RawTzolkin) -> Result<Self, Self::Error> {
        Self::new(raw.number, raw.name)
    }
}

/// A day of the 365-day Haabʼ: eighteen months of 20 days numbered `0..=19`,
/// then the five days of Wayebʼ (month 19).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "RawHaab")]
#[display(fmt = "{} {}", day, "name_at(&HAAB_MONTHS, *month)")]
pub struct Haab {
    pub month: i64,
    pub day:   i64,
}

impl Haab {
    /// # Errors
    /// Returns `CalendarError::InvalidHaab` for a month or day out of range.
    pub fn new(month: i64, day: i64) -> Result<Self, CalendarError> {
        let last_day = if month == WAYEB { 4 } else { 19 };
        if (1..=WAYEB).contains(&month) && (0..=last_day).contains(&day) {
            Ok(Self { month, day })
        } else {
            Err(CalendarError::InvalidHaab { month, day })
        }
    }

    pub fn from_julian_day_number(jdn: JulianDayNumber) -> Self {
        let position = floored_rem(days_since_creation(jdn, HAAB_DAYS) + HAAB_OFFSET, HAAB_DAYS);
        Self {
            month: position / 20 + 1,
            day:   position % 20,
        }
    }

    /// Yucatec name of the month.
    pub fn month_name(&self) -> &'static str {
        name_at(&HAAB_MONTHS, self.month)
    }

    /// Days since creation, modulo 365, on which this Haabʼ day falls.
    fn position(&self) -> i64 {
        floored_rem((self.month - 1) * 20 + self.day - HAAB_OFFSET, HAAB_DAYS)
    }
}

#[derive(Deserialize)]
struct RawHaab {
    month: i64,
    day:   i64,
}

impl TryFrom<RawHaab> for Haab {
    type Error = CalendarError;

    fn try_from(raw: RawHaab) -> Result<Self, Self::Error> {
        Self::new(raw.month, raw.day)
    }
}

/// A Tzolkʼin day paired with a Haabʼ day, recurring every 18980 days.
///
/// Only a quarter of the pairs can occur: the two positions must agree
/// modulo 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display(fmt = "{} {}", tzolkin, haab)]
pub struct CalendarRound {
    pub tzolkin: Tzolkin,
    pub haab:    Haab,
}

impl CalendarRound {
    pub fn from_julian_day_number(jdn: JulianDayNumber) -> Self {
        Self {
            tzolkin: Tzolkin::from_julian_day_number(jdn),
            haab:    Haab::from_julian_day_number(jdn),
        }
    }

    /// Whether this pair occurs at all.
    pub fn is_possible(&self) -> bool {
        self.position().is_ok()
    }

    /// Days since creation, modulo 18980, on which this pair falls.
    fn position(&self) -> Result<i64, CalendarError> {
        Tzolkin::new(self.tzolkin.number, self.tzolkin.name)?;
        Haab::new(self.haab.month, self.haab.day)?;

        let tzolkin = self.tzolkin.position();
        let haab = self.haab.position();
        (0..HAAB_DAYS / 5)
            .map(|cycle| tzolkin + TZOLKIN_DAYS * cycle)
            .find(|&days| floored_rem(days - haab, HAAB_DAYS) == 0)
            .ok_or(CalendarError::ImpossibleCalendarRound {
                tzolkin: self.tzolkin,
                haab:    self.haab,
            })
    }

    /// The latest day number at or before `jdn` carrying this calendar
    /// round.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTzolkin` or `CalendarError::InvalidHaab`
    /// for out-of-range fields, `CalendarError::ImpossibleCalendarRound` if
    /// the pair never occurs, and `CalendarError::Overflow` if its last
    /// occurrence falls before `i64::MIN`.
    pub fn on_or_before(&self, jdn: JulianDayNumber) -> Result<JulianDayNumber, CalendarError> {
        let position = self.position()?;
        let behind = floored_rem(days_since_creation(jdn, CALENDAR_ROUND_DAYS) - position, CALENDAR_ROUND_DAYS);
        jdn.checked_sub(behind).ok_or(CalendarError::Overflow)
    }
}
