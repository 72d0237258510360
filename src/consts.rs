use crate::types::JulianDayNumber;

/// Years in the Gregorian intercalation cycle
pub const GREGORIAN_CYCLE_YEARS: i64 = 400;
/// Days in the Gregorian intercalation cycle
pub const GREGORIAN_CYCLE_DAYS: i64 = 146_097;

/// Largest magnitude accepted for any calendar parameter (2^31)
pub const PARAMETER_LIMIT: i64 = 1 << 31;

/// First day of the Gregorian calendar, 15 October 1582
pub const GREGORIAN_REFORM_JDN: JulianDayNumber = 2_299_161;

/// Seconds in a civil day
pub const SECONDS_PER_DAY: f64 = 86_400.0;
/// Seconds in an hour
pub(crate) const SECONDS_PER_HOUR: f64 = 3_600.0;
/// Seconds in a minute
pub(crate) const SECONDS_PER_MINUTE: f64 = 60.0;

/// Years between the Śaka era and the Gregorian year in which it begins
pub(crate) const SAKA_YEAR_OFFSET: i64 = 78;

/// 1 Tishrei AM 1 (7 October 3761 BC, proleptic Julian)
pub const HEBREW_EPOCH: JulianDayNumber = 347_998;
/// Parts (halakim) in an hour
pub(crate) const PARTS_PER_HOUR: i128 = 1_080;
/// Parts (halakim) in a day
pub(crate) const PARTS_PER_DAY: i128 = 24 * PARTS_PER_HOUR;
/// Months in the 19-year Metonic cycle
pub(crate) const METONIC_MONTHS: i128 = 235;
/// Years in the Metonic cycle
pub(crate) const METONIC_YEARS: i128 = 19;

/// Julian day number of Maya long count 0.0.0.0.0 (GMT correlation)
pub const MAYA_CORRELATION: JulianDayNumber = 584_283;
/// Days in a baktun
pub(crate) const DAYS_PER_BAKTUN: i64 = 144_000;
/// Days in a katun
pub(crate) const DAYS_PER_KATUN: i64 = 7_200;
/// Days in a tun
pub(crate) const DAYS_PER_TUN: i64 = 360;
/// Days in a uinal
pub(crate) const DAYS_PER_UINAL: i64 = 20;
/// Days in a Tzolkʼin round
pub const TZOLKIN_DAYS: i64 = 260;
/// Days in a Haabʼ year
pub const HAAB_DAYS: i64 = 365;
/// Days before a Tzolkʼin and Haabʼ pair recurs
pub const CALENDAR_ROUND_DAYS: i64 = 18_980;
