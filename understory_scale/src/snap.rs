// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping arbitrary values onto the virtual scale.
//!
//! The *virtual scale* is a [`Scale`] extended beyond both boundaries by a
//! uniform grid of `step`s. A step of zero means the grid is empty and
//! nothing outside `[first, last]` is reachable.

use crate::Scale;
use crate::rounding::Rounding;

/// Returns whichever of `a` and `b` is closer to `value`.
///
/// On an exact tie `a` wins. Callers rely on this left bias to keep snapping
/// deterministic (for example, the lower neighbour wins a midpoint).
///
/// ```rust
/// use understory_scale::closest_value;
///
/// assert_eq!(closest_value(1.0, 3.0, 2.0), 1.0);
/// assert_eq!(closest_value(1.0, 3.0, 2.1), 3.0);
/// ```
#[must_use]
pub fn closest_value(a: f64, b: f64, value: f64) -> f64 {
    if (value - a).abs() <= (value - b).abs() {
        a
    } else {
        b
    }
}

/// Returns the point of the grid `boundary + k * step` closest to `value`.
///
/// An exact midpoint between two grid points resolves to the one closer to
/// `boundary` ([`Rounding::HalfDown`]). With a zero `step` the grid collapses
/// onto `boundary`, which is returned unchanged.
///
/// ```rust
/// use understory_scale::closest_outside_boundary;
///
/// assert_eq!(closest_outside_boundary(-2.0, 1.5, -8.75), -8.0);
/// assert_eq!(closest_outside_boundary(-2.0, 1.5, -8.76), -9.5);
/// assert_eq!(closest_outside_boundary(3.5, 0.0, 10.0), 3.5);
/// ```
#[must_use]
pub fn closest_outside_boundary(boundary: f64, step: f64, value: f64) -> f64 {
    if step == 0.0 {
        return boundary;
    }
    let steps = Rounding::HalfDown.apply((value - boundary) / step);
    boundary + steps * step
}

/// Snaps `value` onto the closest legal point of the virtual scale.
///
/// - Without a scale, `value` is returned unchanged.
/// - A value equal to a scale entry is returned as is.
/// - A value between two entries snaps to the closer one, the lower entry
///   winning a tie.
/// - A value beyond a boundary snaps to the closest grid point of that
///   boundary (see [`closest_outside_boundary`]).
///
/// Snapping is idempotent.
///
/// ```rust
/// use understory_scale::{Scale, stick_to_scale};
///
/// let scale = Scale::new([-2.0, -1.0, 0.0, 0.75, 3.5]).unwrap();
/// assert_eq!(stick_to_scale(Some(&scale), 1.5, 0.375), 0.0);
/// assert_eq!(stick_to_scale(Some(&scale), 1.5, 0.376), 0.75);
/// assert_eq!(stick_to_scale(Some(&scale), 1.5, 7.26), 8.0);
/// assert_eq!(stick_to_scale(None, 1.5, 7.26), 7.26);
/// ```
#[must_use]
pub fn stick_to_scale(scale: Option<&Scale>, step: f64, value: f64) -> f64 {
    let Some(scale) = scale else {
        return value;
    };
    match scale.search(value) {
        Ok(_) => value,
        Err(0) => closest_outside_boundary(scale.first(), step, value),
        Err(insertion) if insertion == scale.len() => {
            closest_outside_boundary(scale.last(), step, value)
        }
        Err(insertion) => {
            let below = scale.as_slice()[insertion - 1];
            let above = scale.as_slice()[insertion];
            closest_value(below, above, value)
        }
    }
}

/// Returns `true` if `value` is a legal point of the virtual scale.
///
/// Legal points are the scale entries themselves plus, when `step` is
/// non-zero, the grid points `boundary + k * step` beyond either boundary.
/// Membership is exact: a value close to, but not on, a legal point is not
/// legal.
///
/// ```rust
/// use understory_scale::{Scale, is_on_scale};
///
/// let scale = Scale::new([-2.0, -1.34, 1.53, 3.5]).unwrap();
/// assert!(is_on_scale(&scale, 0.0, -1.34));
/// assert!(!is_on_scale(&scale, 0.0, 2.0));
/// assert!(!is_on_scale(&scale, 0.0, 8.0));
/// assert!(is_on_scale(&scale, 1.5, 8.0));
/// assert!(!is_on_scale(&scale, 1.5, 7.0));
/// ```
#[must_use]
pub fn is_on_scale(scale: &Scale, step: f64, value: f64) -> bool {
    stick_to_scale(Some(scale), step, value) == value
}
