//! Floored integer division.
//!
//! Every division in the conversion formulas rounds toward negative infinity.
//! Rust's `/` and `%` truncate toward zero and `div_euclid` keeps the
//! remainder non-negative even for negative divisors, so neither can stand in
//! for these helpers.

use num_traits::{PrimInt, Signed};

/// Divides `a` by `b`, rounding the quotient toward negative infinity.
///
/// Returns `(quotient, remainder)` such that `a == quotient * b + remainder`,
/// where the remainder is zero or has the same sign as `b`.
///
/// ```
/// use julian_day_number::floored_div_rem;
///
/// assert_eq!(floored_div_rem(-7, 2), (-4, 1));
/// assert_eq!(floored_div_rem(-100, -23), (4, -8));
/// ```
///
/// # Panics
/// Panics if `b` is zero, or if the quotient is not representable
/// (`T::min_value()` divided by `-1`).
#[inline]
pub fn floored_div_rem<T: PrimInt + Signed>(a: T, b: T) -> (T, T) {
    let quotient = a / b;
    let remainder = a % b;
    if !remainder.is_zero() && remainder.is_negative() != b.is_negative() {
        (quotient - T::one(), remainder + b)
    } else {
        (quotient, remainder)
    }
}

/// The quotient of [`floored_div_rem`].
///
/// # Panics
/// Panics under the same conditions as [`floored_div_rem`].
#[inline]
pub fn floored_div<T: PrimInt + Signed>(a: T, b: T) -> T {
    floored_div_rem(a, b).0
}

/// The remainder of [`floored_div_rem`].
///
/// # Panics
/// Panics under the same conditions as [`floored_div_rem`].
#[inline]
pub fn floored_rem<T: PrimInt + Signed>(a: T, b: T) -> T {
    floored_div_rem(a, b).1
}

/// Smallest integer not less than `a / b`, for `b > 0`.
#[inline]
pub(crate) fn ceiled_div<T: PrimInt + Signed>(a: T, b: T) -> T {
    -floored_div(-a, b)
}
