// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounding policies for converting distances into whole divisions.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Relative tolerance under which a quotient is treated as the integer it is
/// closest to.
///
/// Scales and steps are usually written as short decimals (`0.1`, `3.3`),
/// which are not exactly representable in binary. Without this, `13.2 / 3.3`
/// would count as slightly more than four steps and round the wrong way.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// How a fractional number of divisions is turned into a whole one.
///
/// Every policy is expressed relative to the reference point of the
/// measurement (the `from` of [`divisions_between`]), so it behaves the same
/// in both directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Rounding {
    /// Away from the reference point: the count never under-covers the
    /// distance.
    #[default]
    Up,
    /// Toward the reference point: the count never over-covers the distance.
    Down,
    /// To the nearest whole division, with exact ties going toward the
    /// reference point.
    HalfDown,
}

impl Rounding {
    /// Rounds a signed quotient according to this policy.
    ///
    /// The sign of `quotient` is the direction away from the reference point.
    #[must_use]
    pub fn apply(self, quotient: f64) -> f64 {
        let quotient = settle(quotient);
        match self {
            Self::Up => {
                if quotient < 0.0 {
                    quotient.floor()
                } else {
                    quotient.ceil()
                }
            }
            Self::Down => quotient.trunc(),
            Self::HalfDown => {
                let toward = quotient.trunc();
                if (quotient - toward).abs() > 0.5 {
                    toward + quotient.signum()
                } else {
                    toward
                }
            }
        }
    }
}

/// Snaps `quotient` to the nearest integer when it is within floating-point
/// noise of it.
fn settle(quotient: f64) -> f64 {
    let nearest = quotient.round();
    if (quotient - nearest).abs() <= INTEGRAL_TOLERANCE * nearest.abs().max(1.0) {
        nearest
    } else {
        quotient
    }
}

/// Converts an already-rounded count to `i32`, saturating at the bounds.
pub(crate) fn to_division(count: f64) -> i32 {
    let count = count.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[expect(
        clippy::cast_possible_truncation,
        reason = "The count is integral and clamped into the i32 range just above"
    )]
    {
        count as i32
    }
}

/// Counts how many whole `step`s separate `from` and `to`, signed by direction.
///
/// - A `step` of zero means a single division covers any non-zero
///   displacement, so the result is the sign of `to - from` (and `0` when the
///   two are equal).
/// - Otherwise the result is `(to - from) / step` rounded with `rounding`.
///
/// ```rust
/// use understory_scale::{Rounding, divisions_between};
///
/// assert_eq!(divisions_between(1.5, -4.0, -0.5, Rounding::Up), 3);
/// assert_eq!(divisions_between(1.5, -4.0, -0.5, Rounding::Down), 2);
/// assert_eq!(divisions_between(1.5, 0.0, 2.25, Rounding::HalfDown), 1);
/// assert_eq!(divisions_between(0.0, 7.0, 11.5, Rounding::Up), 1);
/// ```
#[must_use]
pub fn divisions_between(step: f64, from: f64, to: f64, rounding: Rounding) -> i32 {
    if step == 0.0 {
        return if to > from {
            1
        } else if to < from {
            -1
        } else {
            0
        };
    }
    to_division(rounding.apply((to - from) / step))
}
