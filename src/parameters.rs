//! The constants that describe one arithmetic calendar to the conversion
//! engine.

use crate::consts::{GREGORIAN_CYCLE_DAYS, GREGORIAN_CYCLE_YEARS, PARAMETER_LIMIT};
use serde::{Deserialize, Serialize};

/// Error type for calendar parameters that the engine cannot work with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    /// A divisor is zero or negative.
    #[error("parameter {name} must be positive, found {value}")]
    NotPositive { name: &'static str, value: i64 },

    /// A coefficient is too large for the kernel's intermediate products.
    #[error("parameter {name} = {value} is outside -{limit}..={limit}", limit = PARAMETER_LIMIT)]
    OutOfRange { name: &'static str, value: i64 },

    /// A Gregorian-type adjustment was layered on a base that is not the
    /// 4-year, 1461-day cycle.
    #[error("a Gregorian-type adjustment needs a 4-year cycle of 1461 days, found {years} years of {days} days")]
    AdjustmentNeedsJulianBase { years: i64, days: i64 },
}

/// The twelve integers of Richards' algorithm describing one calendar.
///
/// `p / r` is the calendar's mean year length in days and `n` counts every
/// month of the computational year, including an epagomenal block treated as
/// one extra pseudo-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawParameters")]
pub struct CalendarParameters {
    /// Computational-calendar years preceding the calendar's epoch.
    pub y: i64,
    /// Day offset of the computational epoch from day zero.
    pub j: i64,
    /// Month number treated as month zero of the computational year.
    pub m: i64,
    /// Months per year, pseudo-months included.
    pub n: i64,
    /// Years per base intercalation cycle.
    pub r: i64,
    /// Days per base intercalation cycle.
    pub p: i64,
    pub q: i64,
    pub v: i64,
    pub u: i64,
    pub s: i64,
    pub t: i64,
    pub w: i64,
}

impl CalendarParameters {
    /// Checks that the divisors are positive and that every coefficient is
    /// small enough for the kernel's products to stay within `i64`.
    ///
    /// # Errors
    /// Returns the first offending parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [("n", self.n), ("r", self.r), ("p", self.p), ("u", self.u), ("s", self.s)] {
            if value <= 0 {
                return Err(ParameterError::NotPositive { name, value });
            }
        }
        for (name, value) in self.named() {
            if value.unsigned_abs() > PARAMETER_LIMIT.unsigned_abs() {
                return Err(ParameterError::OutOfRange { name, value });
            }
        }
        Ok(())
    }

    const fn named(&self) -> [(&'static str, i64); 12] {
        [
            ("y", self.y),
            ("j", self.j),
            ("m", self.m),
            ("n", self.n),
            ("r", self.r),
            ("p", self.p),
            ("q", self.q),
            ("v", self.v),
            ("u", self.u),
            ("s", self.s),
            ("t", self.t),
            ("w", self.w),
        ]
    }
}

#[derive(Deserialize)]
struct RawParameters {
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
}

impl TryFrom<RawParameters> for CalendarParameters {
    type Error = ParameterError;

    fn try_from(raw: RawParameters) -> Result<Self, Self::Error> {
        let RawParameters { y, j, m, n, r, p, q, v, u, s, t, w } = raw;
        let parameters = Self { y, j, m, n, r, p, q, v, u, s, t, w };
        parameters.validate()?;
        Ok(parameters)
    }
}

/// The century correction `(A, B, C)` that turns a 4-year base calendar into
/// one that drops three leap days every 400 years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GregorianIntercalationAdjustment {
    pub a: i64,
    pub b: i64,
    pub c: i64,
}

impl GregorianIntercalationAdjustment {
    /// Checks that `parameters` describe the 4-year base this correction is
    /// defined on.
    ///
    /// # Errors
    /// Returns `ParameterError::AdjustmentNeedsJulianBase` for any other base.
    pub const fn check_base(&self, parameters: &CalendarParameters) -> Result<(), ParameterError> {
        if parameters.r == 4 && parameters.p == 1461 {
            Ok(())
        } else {
            Err(ParameterError::AdjustmentNeedsJulianBase {
                years: parameters.r,
                days:  parameters.p,
            })
        }
    }
}

/// A whole number of years after which a calendar's date to day number
/// mapping repeats exactly, shifted by `days`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntercalationCycle {
    pub years: i64,
    pub days:  i64,
}

impl IntercalationCycle {
    /// The 400-year cycle of every Gregorian-type calendar.
    pub const GREGORIAN: Self = Self {
        years: GREGORIAN_CYCLE_YEARS,
        days:  GREGORIAN_CYCLE_DAYS,
    };

    /// The exact repeat period of a calendar: `(r, p)` for a base calendar,
    /// the 400-year cycle once the century correction is applied.
    pub const fn of(
        parameters: &CalendarParameters,
        adjustment: Option<&GregorianIntercalationAdjustment>,
    ) -> Self {
        match adjustment {
            Some(_) => Self::GREGORIAN,
            None => Self {
                years: parameters.r,
                days:  parameters.p,
            },
        }
    }

    /// Length of the shortest year in the cycle.
    pub const fn common_year_length(&self) -> i64 {
        self.days / self.years
    }
}
