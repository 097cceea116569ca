// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Counting divisions between two values.

use crate::Scale;
use crate::rounding::{Rounding, divisions_between};

/// Which neighbour to take when a value falls between two legal points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Neighbour {
    Lower,
    Upper,
}

/// Counts the divisions needed to travel from `from` to `to`, signed by
/// direction.
///
/// Without a scale this is [`divisions_between`] with [`Rounding::Up`].
///
/// With a scale, both endpoints are placed on the virtual scale (scale
/// indices inside, whole steps beyond each boundary). A point that falls
/// between two legal points is resolved against the direction of travel for
/// `from` and along it for `to`, so the count always covers the whole
/// distance. This is the same direction-biased lookup that
/// [`move_by_divisions`](crate::move_by_divisions) uses, so moving by the
/// returned count from `from` lands on or past `to`.
///
/// With a zero `step`, every point beyond a boundary counts as a single
/// division past it; two such points on the same side are `0` divisions
/// apart.
///
/// ```rust
/// use understory_scale::{Scale, number_of_divisions};
///
/// let scale = Scale::new([-2.0, -1.99, -1.34, -1.0, 0.0, 0.75, 1.53, 3.01, 3.5]).unwrap();
/// let s = Some(&scale);
///
/// assert_eq!(number_of_divisions(s, 0.0, 0.0, -1.99), -3);
/// assert_eq!(number_of_divisions(s, 0.0, 1.0, -1.5), -5);
/// assert_eq!(number_of_divisions(s, 1.5, -5.0, 7.0), 13);
/// assert_eq!(number_of_divisions(None, 1.5, -4.0, -0.5), 3);
/// ```
#[must_use]
pub fn number_of_divisions(scale: Option<&Scale>, step: f64, from: f64, to: f64) -> i32 {
    let Some(scale) = scale else {
        return divisions_between(step, from, to, Rounding::Up);
    };
    if from == to {
        return 0;
    }
    let (behind, ahead) = if to > from {
        (Neighbour::Lower, Neighbour::Upper)
    } else {
        (Neighbour::Upper, Neighbour::Lower)
    };
    let start = virtual_index(scale, step, from, behind);
    let end = virtual_index(scale, step, to, ahead);
    to_division_i64(end - start)
}

/// Position of `value` on the virtual scale, resolved to a whole index.
///
/// Index `0` is the first scale entry; negative indices are grid points left
/// of it and indices past `last_index` are grid points right of the last
/// entry.
fn virtual_index(scale: &Scale, step: f64, value: f64, neighbour: Neighbour) -> i64 {
    let last_index = scale.last_index() as i64;
    if value < scale.first() {
        if step == 0.0 {
            return -1;
        }
        // Lower is further from the boundary on this side.
        let rounding = match neighbour {
            Neighbour::Lower => Rounding::Up,
            Neighbour::Upper => Rounding::Down,
        };
        return i64::from(divisions_between(step, scale.first(), value, rounding));
    }
    if value > scale.last() {
        if step == 0.0 {
            return last_index + 1;
        }
        let rounding = match neighbour {
            Neighbour::Lower => Rounding::Down,
            Neighbour::Upper => Rounding::Up,
        };
        return last_index + i64::from(divisions_between(step, scale.last(), value, rounding));
    }
    match scale.search(value) {
        Ok(index) => index as i64,
        Err(insertion) => match neighbour {
            Neighbour::Lower => insertion as i64 - 1,
            Neighbour::Upper => insertion as i64,
        },
    }
}

fn to_division_i64(count: i64) -> i32 {
    i32::try_from(count).unwrap_or(if count < 0 { i32::MIN } else { i32::MAX })
}
