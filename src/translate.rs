//! Overflow guard around the conversion kernel.
//!
//! The kernel multiplies years and day numbers by calendar constants, so its
//! intermediate values overflow long before the final result does. For each
//! calendar this module derives, from the calendar's own constants and the
//! width of `i64`, the window of years and of day numbers on which every
//! intermediate of the kernel fits. An input outside its window is shifted by
//! a whole number `k` of intercalation cycles into the window, converted, and
//! the result shifted back by `k` cycles in the other unit. The sign of `k`
//! records the direction of the shift; `k == 0` means no shift.
//!
//! Bounds are computed in `i128` so that their derivation cannot itself
//! overflow.

use std::ops::RangeInclusive;

use tracing::trace;

use crate::CalendarError;
use crate::consts::GREGORIAN_CYCLE_DAYS;
use crate::converter;
use crate::math::{ceiled_div, floored_div, floored_div_rem};
use crate::parameters::{CalendarParameters, GregorianIntercalationAdjustment, IntercalationCycle};
use crate::types::{CalendarDate, JulianDayNumber};

const WIDE_MIN: i128 = i64::MIN as i128;
const WIDE_MAX: i128 = i64::MAX as i128;

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

/// Days the month and day terms can add on top of the start of a year,
/// together with the constant offsets the kernel applies after its largest
/// product.
fn day_margin(
    parameters: &CalendarParameters,
    adjustment: Option<&GregorianIntercalationAdjustment>,
) -> i128 {
    let CalendarParameters { j, n, u, s, t, .. } = *parameters;
    let (n, u, s, t) = (i128::from(n), i128::from(u), i128::from(s), i128::from(t));

    let month_offset = floored_div(s * (n - 1) + t, u);
    let month_length = ceiled_div(s, u);
    let correction = adjustment.map_or(0, |adjustment| i128::from(adjustment.c).abs());

    month_offset.abs() + month_length + i128::from(j).abs() + correction + 1
}

/// The years on which [`converter::date_to_day_number`] cannot overflow for
/// any valid month and day.
pub fn safe_year_range(
    parameters: &CalendarParameters,
    adjustment: Option<&GregorianIntercalationAdjustment>,
) -> RangeInclusive<i64> {
    let margin = day_margin(parameters, adjustment);
    let (y, r, p, q) = (
        i128::from(parameters.y),
        i128::from(parameters.r),
        i128::from(parameters.p),
        i128::from(parameters.q),
    );

    // p * g + q must fit, and so must its quotient by r once the day terms
    // are added.
    let mut max_g = floored_div(WIDE_MAX - q, p).min(floored_div(r * (WIDE_MAX - margin) + r - 1 - q, p));
    let mut min_g = ceiled_div(WIDE_MIN - q, p).max(ceiled_div(r * (WIDE_MIN + margin) - q, p));
    if let Some(adjustment) = adjustment {
        max_g = max_g.min(WIDE_MAX - i128::from(adjustment.a));
        min_g = min_g.max(WIDE_MIN - i128::from(adjustment.a));
    }

    // g is the year plus y, less one for the months before month zero.
    saturate(min_g - y + 1)..=saturate(max_g - y)
}

/// The day numbers on which [`converter::day_number_to_date`] cannot
/// overflow.
pub fn safe_day_number_range(
    parameters: &CalendarParameters,
    adjustment: Option<&GregorianIntercalationAdjustment>,
) -> RangeInclusive<JulianDayNumber> {
    let (j, r, v) = (
        i128::from(parameters.j),
        i128::from(parameters.r),
        i128::from(parameters.v),
    );

    // r * f + v must fit, where f is the day number plus j and the century
    // correction.
    let mut lower = (ceiled_div(WIDE_MIN - v, r) - j).max(WIDE_MIN - j);
    let mut upper = (floored_div(WIDE_MAX - v, r) - j).min(WIDE_MAX - j);

    if let Some(adjustment) = adjustment {
        let (b, c) = (i128::from(adjustment.b), i128::from(adjustment.c).abs());
        let correction = |jdn: i128| floored_div(3 * floored_div(4 * jdn + b, i128::from(GREGORIAN_CYCLE_DAYS)), 4);

        // The correction grows with the day number, so pulling each bound in
        // by the correction at that bound keeps every day inside it safe.
        lower += c;
        upper -= c;
        lower -= correction(lower);
        upper -= correction(upper);

        // 4 * jdn + b must fit as well.
        lower = lower.max(ceiled_div(WIDE_MIN - b, 4));
        upper = upper.min(floored_div(WIDE_MAX - b, 4));
    }

    saturate(lower)..=saturate(upper)
}

/// Number of whole periods to subtract from `value` to bring it inside
/// `window`: positive above the window, negative below it, zero inside.
///
/// The window must hold at least `period` values for the shifted value to
/// land inside it.
fn cycles_outside(value: i128, window: &RangeInclusive<i64>, period: i64) -> i128 {
    let period = i128::from(period);
    let (start, end) = (i128::from(*window.start()), i128::from(*window.end()));

    if value > end {
        floored_div(value - end, period) + 1
    } else if value < start {
        floored_div(value - start, period)
    } else {
        0
    }
}

fn narrow(value: i128) -> Result<i64, CalendarError> {
    i64::try_from(value).map_err(|_| CalendarError::Overflow)
}

/// Converts a date to its Julian day number without intermediate overflow.
///
/// Months outside `1..=n` carry into neighbouring years and days outside the
/// month carry into neighbouring months, however far out of range they are.
///
/// # Errors
/// Returns `CalendarError::Overflow` only if the Julian day number does not
/// fit in an `i64`.
pub fn date_to_day_number(
    date: CalendarDate,
    parameters: &CalendarParameters,
    adjustment: Option<&GregorianIntercalationAdjustment>,
) -> Result<JulianDayNumber, CalendarError> {
    let cycle = IntercalationCycle::of(parameters, adjustment);
    let window = safe_year_range(parameters, adjustment);

    // Only the first day of an in-range month goes through the kernel; the
    // day is added back linearly.
    let (carry, month_index) = floored_div_rem(i128::from(date.month) - 1, i128::from(parameters.n));
    let year = i128::from(date.year) + carry;
    let k = cycles_outside(year, &window, cycle.years);
    let shifted = narrow(year - k * i128::from(cycle.years))?;
    if k != 0 {
        trace!(year = date.year, shifted, cycles = %k, "date translated into safe window");
    }

    let first = CalendarDate::new(shifted, narrow(month_index + 1)?, 1);
    let jdn = converter::date_to_day_number(first, parameters, adjustment).ok_or(CalendarError::Overflow)?;
    narrow(i128::from(jdn) + k * i128::from(cycle.days) + i128::from(date.day) - 1)
}

/// Converts a Julian day number to a date without intermediate overflow.
///
/// Every `i64` day number has a date in every arithmetic calendar.
///
/// # Errors
/// Returns `CalendarError::Overflow` if the calendar's parameters are so
/// extreme that the year itself does not fit in an `i64`.
pub fn day_number_to_date(
    jdn: JulianDayNumber,
    parameters: &CalendarParameters,
    adjustment: Option<&GregorianIntercalationAdjustment>,
) -> Result<CalendarDate, CalendarError> {
    let cycle = IntercalationCycle::of(parameters, adjustment);
    let window = safe_day_number_range(parameters, adjustment);
    let k = cycles_outside(i128::from(jdn), &window, cycle.days);

    if k == 0 {
        return converter::day_number_to_date(jdn, parameters, adjustment).ok_or(CalendarError::Overflow);
    }

    let shifted = narrow(i128::from(jdn) - k * i128::from(cycle.days))?;
    trace!(jdn, shifted, cycles = %k, "day number translated into safe window");

    let date = converter::day_number_to_date(shifted, parameters, adjustment).ok_or(CalendarError::Overflow)?;
    Ok(CalendarDate {
        year: narrow(i128::from(date.year) + k * i128::from(cycle.years))?,
        ..date
    })
}
