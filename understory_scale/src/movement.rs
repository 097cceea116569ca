// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Moving a value by a signed number of divisions.

use crate::Scale;
use crate::rounding::{Rounding, divisions_between};
use crate::snap::closest_outside_boundary;

/// Moves `value` by `division` discrete steps over the virtual scale.
///
/// This is the entry point a gesture handler calls each time the number of
/// divisions travelled since the gesture started changes. It is always
/// called with the value the gesture started from, never with the result of
/// a previous call.
///
/// - `division == 0` returns `value` unchanged.
/// - Without a scale the result is `value + division * step`. A zero step
///   therefore ignores movement.
/// - Inside `[first, last]` the value moves along the scale indices. A value
///   between two entries starts from the neighbour *behind* the direction of
///   travel, so the first division lands on the neighbour ahead. Movement
///   past either end continues by whole steps from that boundary.
/// - Beyond a boundary and moving further out, the value is first aligned to
///   the boundary's step grid and then moved by whole steps. With a zero step
///   no outward movement is possible and `value` is returned.
/// - Beyond a boundary and moving back, the whole steps up to the boundary
///   are consumed first and the rest of the movement continues along the
///   scale (possibly leaving it again on the far side). With a zero step the
///   boundary is a single division away.
///
/// Walking one division at a time from `a` to `b` and then back from `b`
/// visits the same points in reverse.
///
/// ```rust
/// use understory_scale::{Scale, move_by_divisions};
///
/// let scale = Scale::new([-2.0, -1.99, -1.34, -1.0, 0.0, 0.75, 1.53, 3.01, 3.5]).unwrap();
/// let s = Some(&scale);
///
/// assert_eq!(move_by_divisions(s, 1.5, -1.99, -1), -2.0);
/// assert_eq!(move_by_divisions(s, 1.5, -1.99, -4), -6.5);
/// assert_eq!(move_by_divisions(s, 1.5, -6.5, 4), -1.99);
/// assert_eq!(move_by_divisions(s, 0.0, 3.01, 3), 3.5);
/// assert_eq!(move_by_divisions(None, 1.5, 1.0, -2), -2.0);
/// ```
#[must_use]
pub fn move_by_divisions(scale: Option<&Scale>, step: f64, value: f64, division: i32) -> f64 {
    if division == 0 {
        return value;
    }
    let division = i64::from(division);
    let Some(scale) = scale else {
        return move_by_step(step, value, division);
    };
    if (value < scale.first() && division < 0) || (value > scale.last() && division > 0) {
        return move_outward(scale, step, value, division);
    }
    if !scale.contains_range(value) {
        return move_inward(scale, step, value, division);
    }
    let index = match scale.search(value) {
        Ok(index) => index as i64,
        // Start from the neighbour behind the direction of travel.
        Err(insertion) if division < 0 => insertion as i64,
        Err(insertion) => insertion as i64 - 1,
    };
    move_along(scale, step, index, division)
}

fn move_by_step(step: f64, value: f64, division: i64) -> f64 {
    value + division as f64 * step
}

/// Value beyond a boundary, moving further away from the scale.
fn move_outward(scale: &Scale, step: f64, value: f64, division: i64) -> f64 {
    if step == 0.0 {
        return value;
    }
    // Align to the grid first. If the aligned point already lies in the
    // direction of travel it counts as the first division.
    let (aligned, correction) = if division < 0 {
        let aligned = closest_outside_boundary(scale.first(), step, value);
        (aligned, i64::from(aligned < value))
    } else {
        let aligned = closest_outside_boundary(scale.last(), step, value);
        (aligned, -i64::from(aligned > value))
    };
    move_by_step(step, aligned, division + correction)
}

/// Value beyond a boundary, moving back toward the scale.
fn move_inward(scale: &Scale, step: f64, value: f64, division: i64) -> f64 {
    let boundary_index = if division > 0 {
        0
    } else {
        scale.last_index() as i64
    };
    if step == 0.0 {
        return move_along(scale, step, boundary_index, division - division.signum());
    }
    let boundary = if division > 0 {
        scale.first()
    } else {
        scale.last()
    };
    // Negative on the left of the scale, positive on the right; rounded away
    // from the boundary so a partial step counts as a whole division.
    let outside = i64::from(divisions_between(step, boundary, value, Rounding::Up));
    move_along(scale, step, boundary_index, division + outside)
}

/// Moves `division` indices from `index`, continuing by whole steps past
/// either end of the scale.
fn move_along(scale: &Scale, step: f64, index: i64, division: i64) -> f64 {
    let destination = index + division;
    let last_index = scale.last_index() as i64;
    if destination < 0 {
        move_by_step(step, scale.first(), destination)
    } else if destination > last_index {
        move_by_step(step, scale.last(), destination - last_index)
    } else {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Destination is within 0..=last_index, which came from a usize"
        )]
        let index = destination as usize;
        scale.as_slice()[index]
    }
}
