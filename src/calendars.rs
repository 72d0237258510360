//! Ready-made arithmetic calendars.
//!
//! Years are counted from each calendar's own era, astronomically, so year 0
//! precedes year 1. Calendars with epagomenal days carry them as a short
//! final pseudo-month.

use crate::calendar::ArithmeticCalendar;
use crate::parameters::{CalendarParameters, GregorianIntercalationAdjustment};

#[allow(clippy::too_many_arguments)]
const fn base(
    y: i64,
    j: i64,
    m: i64,
    n: i64,
    r: i64,
    p: i64,
    q: i64,
    v: i64,
    u: i64,
    s: i64,
    t: i64,
    w: i64,
) -> ArithmeticCalendar {
    ArithmeticCalendar {
        parameters: CalendarParameters { y, j, m, n, r, p, q, v, u, s, t, w },
        adjustment: None,
    }
}

const fn adjusted(calendar: ArithmeticCalendar, a: i64, b: i64, c: i64) -> ArithmeticCalendar {
    ArithmeticCalendar {
        adjustment: Some(GregorianIntercalationAdjustment { a, b, c }),
        ..calendar
    }
}

/// Twelve months of 30 days and five epagomenal days.
const fn wandering_year(y: i64, j: i64, m: i64) -> ArithmeticCalendar {
    base(y, j, m, 13, 1, 365, 0, 0, 1, 30, 0, 0)
}

/// The Alexandrian pattern: twelve months of 30 days, five or six epagomenal
/// days, a leap year every fourth year.
const fn alexandrian(y: i64) -> ArithmeticCalendar {
    base(y, 124, 0, 13, 4, 1461, 0, 3, 1, 30, 0, 0)
}

/// The proleptic Julian calendar.
pub const JULIAN: ArithmeticCalendar = base(4716, 1401, 2, 12, 4, 1461, 0, 3, 5, 153, 2, 2);

/// The proleptic Gregorian calendar.
pub const GREGORIAN: ArithmeticCalendar = adjusted(JULIAN, 184, 274_277, -38);

/// Egyptian civil calendar, years of Nabonassar. 1 Thoth 1 is 26 February
/// 747 BC (Julian).
pub const EGYPTIAN: ArithmeticCalendar = wandering_year(3968, 47, 0);

/// Armenian calendar. 1 Navasard 1 is 11 July 552 (Julian).
pub const ARMENIAN: ArithmeticCalendar = wandering_year(5268, 317, 0);

pub const KHWARIZMIAN: ArithmeticCalendar = wandering_year(5348, 317, 0);

/// Persian calendar of the Yazdegerdi era, with the epagomenal days after
/// the eighth month.
pub const PERSIAN: ArithmeticCalendar = wandering_year(5348, 77, 9);

/// Ethiopian calendar, Amete Mihret (Incarnation) era.
pub const ETHIOPIAN_AMETE_MIHRET: ArithmeticCalendar = alexandrian(4720);

/// Ethiopian calendar, Amete Alem (World) era, 5500 years ahead of Amete
/// Mihret.
pub const ETHIOPIAN_AMETE_ALEM: ArithmeticCalendar = alexandrian(4720 - 5500);

/// Coptic calendar, era of the Martyrs.
pub const COPTIC: ArithmeticCalendar = alexandrian(4996);

/// French Republican calendar with Romme's leap rule, extended
/// proleptically. 1 Vendémiaire I is 22 September 1792.
pub const FRENCH_REPUBLICAN: ArithmeticCalendar = adjusted(
    base(6504, 111, 0, 13, 4, 1461, 0, 3, 1, 30, 0, 0),
    396,
    578_797,
    -51,
);

/// Tabular Islamic calendar, 11 leap years in 30, civil (Friday) epoch.
pub const ISLAMIC: ArithmeticCalendar = base(5519, 7664, 0, 12, 30, 10_631, 14, 15, 100, 2951, 51, 10);

/// Bahá'í calendar with the year starting on 21 March. Month 19 is
/// Ayyám-i-Há and month 20 is ʻAláʼ.
pub const BAHAI: ArithmeticCalendar = adjusted(
    base(6560, 1412, 19, 20, 4, 1461, 0, 3, 1, 19, 0, 0),
    184,
    274_273,
    -50,
);

/// Every calendar in this module.
pub const ALL: [ArithmeticCalendar; 12] = [
    JULIAN,
    GREGORIAN,
    EGYPTIAN,
    ARMENIAN,
    KHWARIZMIAN,
    PERSIAN,
    ETHIOPIAN_AMETE_MIHRET,
    ETHIOPIAN_AMETE_ALEM,
    COPTIC,
    FRENCH_REPUBLICAN,
    ISLAMIC,
    BAHAI,
];
