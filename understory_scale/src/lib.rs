// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Scale: discrete navigation over stepped value scales.
//!
//! This crate is the numeric core of swipe/drag value pickers. A gesture is
//! quantized into a signed number of *divisions* elsewhere; this crate turns
//! "start value + divisions" into the resulting value, given:
//!
//! - an optional [`Scale`]: a strictly ascending list of anchor values the
//!   picker walks through one entry per division, and
//! - a `step`: the uniform increment used beyond the scale's boundaries, or
//!   everywhere when there is no scale. A step of `0` forbids movement
//!   outside the scale.
//!
//! Together they form the *virtual scale*: the scale entries plus the grid
//! `boundary + k * step` beyond each end.
//!
//! The API is a handful of pure functions:
//!
//! - [`move_by_divisions`]: move a value by `n` divisions.
//! - [`stick_to_scale`]: snap an arbitrary value onto the virtual scale.
//! - [`number_of_divisions`]: count the divisions between two values.
//! - [`is_on_scale`]: test whether a value is a legal point.
//! - [`closest_value`], [`closest_outside_boundary`], [`divisions_between`]:
//!   the building blocks the above are made of, with their tie-breaking
//!   policies ([`Rounding`]) exposed.
//!
//! Nothing here owns state. Host widgets keep their configuration (see
//! `understory_swipe`) and call in once per gesture update, always from the
//! value the gesture started at.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_scale::{Scale, move_by_divisions, stick_to_scale};
//!
//! // Zoom levels, extended by steps of 100 beyond the largest one.
//! let zoom = Scale::new([25.0, 50.0, 75.0, 100.0, 150.0, 200.0]).unwrap();
//!
//! // Dragging two divisions to the right from 75 lands on 150.
//! assert_eq!(move_by_divisions(Some(&zoom), 100.0, 75.0, 2), 150.0);
//! // Past the last entry, movement continues by whole steps.
//! assert_eq!(move_by_divisions(Some(&zoom), 100.0, 150.0, 3), 400.0);
//! // Typed-in values can be snapped onto the legal points.
//! assert_eq!(stick_to_scale(Some(&zoom), 100.0, 130.0), 150.0);
//! ```
//!
//! ## Floating-point behavior
//!
//! Values are `f64`. Counting whole steps tolerates binary representation
//! noise, so decimal steps such as `0.1` or `3.3` count exactly. Results of
//! step arithmetic (`boundary + k * step`) are ordinary `f64` results.
//!
//! This crate is `no_std` and uses `alloc`. Float rounding comes from `std`
//! with the default `std` feature, or from Kurbo's `libm` backend when built
//! with `default-features = false, features = ["libm"]`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod count;
mod movement;
mod rounding;
mod scale;
mod snap;

pub use count::number_of_divisions;
pub use movement::move_by_divisions;
pub use rounding::{Rounding, divisions_between};
pub use scale::{Scale, ScaleError};
pub use snap::{closest_outside_boundary, closest_value, is_on_scale, stick_to_scale};
