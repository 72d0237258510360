//! Richards' closed-form conversion between dates and Julian day numbers.
//!
//! These functions evaluate the formulas directly with checked `i64`
//! arithmetic. They return `None` when an intermediate product overflows,
//! which for valid dates happens only outside the safe windows derived in
//! [`translate`](crate::translate). Callers normally go through the
//! translated entry points instead.

use crate::consts::GREGORIAN_CYCLE_DAYS;
use crate::math::{floored_div, floored_rem};
use crate::parameters::{CalendarParameters, GregorianIntercalationAdjustment};
use crate::types::{CalendarDate, JulianDayNumber};

/// Converts a date to its Julian day number.
///
/// No validity check is made on the month or day: out-of-range values are
/// carried arithmetically into neighbouring months and years.
pub fn date_to_day_number(
    date: CalendarDate,
    parameters: &CalendarParameters,
    adjustment: Option<&GregorianIntercalationAdjustment>,
) -> Option<JulianDayNumber> {
    let CalendarParameters { y, j, m, n, r, p, q, u, s, t, .. } = *parameters;

    let h = date.month.checked_sub(m)?;
    let g = date
        .year
        .checked_add(y)?
        .checked_sub(floored_div(n.checked_sub(h)?, n))?;
    let f = floored_rem(h.checked_sub(1)?.checked_add(n)?, n);
    let e = floored_div(p.checked_mul(g)?.checked_add(q)?, r)
        .checked_add(date.day)?
        .checked_sub(1)?
        .checked_sub(j)?;
    let jdn = e.checked_add(floored_div(s.checked_mul(f)?.checked_add(t)?, u))?;

    match adjustment {
        Some(adjustment) => {
            let centuries = floored_div(g.checked_add(adjustment.a)?, 100);
            jdn.checked_sub(floored_div(3 * centuries, 4))?
                .checked_sub(adjustment.c)
        }
        None => Some(jdn),
    }
}

/// Converts a Julian day number to a date. Inverse of [`date_to_day_number`].
pub fn day_number_to_date(
    jdn: JulianDayNumber,
    parameters: &CalendarParameters,
    adjustment: Option<&GregorianIntercalationAdjustment>,
) -> Option<CalendarDate> {
    let CalendarParameters { y, j, m, n, r, p, v, u, s, w, .. } = *parameters;

    let mut f = jdn.checked_add(j)?;
    if let Some(adjustment) = adjustment {
        let cycles = floored_div(jdn.checked_mul(4)?.checked_add(adjustment.b)?, GREGORIAN_CYCLE_DAYS);
        f = f
            .checked_add(floored_div(3 * cycles, 4))?
            .checked_add(adjustment.c)?;
    }
    let e = r.checked_mul(f)?.checked_add(v)?;
    let g = floored_div(floored_rem(e, p), r);
    let h = u.checked_mul(g)?.checked_add(w)?;
    let day = floored_div(floored_rem(h, s), u) + 1;
    let month = floored_rem(floored_div(h, s) + m, n) + 1;
    let year = floored_div(e, p)
        .checked_sub(y)?
        .checked_add(floored_div(n + m - month, n))?;

    Some(CalendarDate::new(year, month, day))
}
