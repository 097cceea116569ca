// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Swipe: a headless model of a swipe value picker.
//!
//! A swipe picker shows a number and changes it in discrete steps while the
//! user drags horizontally across it. This crate holds the parts of such a
//! widget that are not drawing or gesture recognition:
//!
//! - [`PickerConfig`]: the validated configuration (anchor scale, step,
//!   limits, sticky and looped flags), built with [`PickerConfigBuilder`].
//! - [`Picker`]: the current value and the rules for changing it. Limits,
//!   snapping onto the scale, and wrap-around all live here.
//! - [`SwipeTracker`]: converts pointer travel into division counts.
//!
//! The numeric work is done by [`understory_scale`]; this crate decides
//! *which* value a swipe commits.
//!
//! ## Usage
//!
//! ### Committing swipes
//!
//! ```rust
//! use understory_swipe::{Picker, PickerConfig};
//!
//! let config = PickerConfig::builder()
//!     .step(1.0)
//!     .range(0.0, 10.0)
//!     .looped(true)
//!     .build()
//!     .unwrap();
//! let mut picker = Picker::with_value(config, 9.0);
//!
//! // Two divisions to the right of 9 wrap past 10 onto 0.
//! let change = picker.apply_swipe(9.0, 2).unwrap();
//! assert_eq!((change.old, change.new), (9.0, 0.0));
//! ```
//!
//! ### Driving a picker from pointer events
//!
//! ```rust
//! use kurbo::Point;
//! use understory_swipe::{Picker, PickerConfig, SwipeTracker};
//!
//! let config = PickerConfig::builder()
//!     .scale([1.0, 2.0, 5.0, 10.0, 20.0, 50.0])
//!     .step(0.0)
//!     .range(1.0, 50.0)
//!     .build()
//!     .unwrap();
//! let mut picker = Picker::with_value(config, 5.0);
//! let mut tracker = SwipeTracker::new(24.0).unwrap();
//!
//! picker.begin_swipe(&mut tracker, Point::new(200.0, 10.0));
//! // Every 24 px of horizontal travel is one entry of the scale.
//! assert!(picker.track(&mut tracker, Point::new(250.0, 12.0)).is_some());
//! assert_eq!(picker.value(), 20.0);
//! // Moving back reports new divisions relative to where the gesture began.
//! picker.track(&mut tracker, Point::new(176.0, 12.0));
//! assert_eq!(picker.value(), 2.0);
//! tracker.end();
//! ```
//!
//! ## Logging
//!
//! Configuration replacement is reported with `tracing` at `DEBUG` level;
//! value changes, loop wraps, and tracker division changes at `TRACE`. No
//! subscriber is installed.
//!
//! This crate is `no_std` and uses `alloc`. Float rounding comes from `std`
//! with the default `std` feature, or from Kurbo's `libm` backend when built
//! with `default-features = false, features = ["libm"]`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod picker;
mod tracker;

pub use config::{ConfigError, PickerConfig, PickerConfigBuilder};
pub use picker::{Picker, ValueChange};
pub use tracker::SwipeTracker;
