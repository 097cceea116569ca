// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer travel to division counts.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

use crate::config::ConfigError;

/// Turns horizontal pointer travel into a signed number of divisions.
///
/// One division is `threshold` pixels of travel. The count is measured from
/// the position the gesture started at and rounded to the nearest whole
/// division, so small jitter around the start does not move the value. Travel
/// of exactly half a division rounds toward the right: `+0.5` counts as `1`
/// and `-0.5` as `0`.
///
/// ```rust
/// use kurbo::Point;
/// use understory_swipe::SwipeTracker;
///
/// let mut tracker = SwipeTracker::new(20.0).unwrap();
/// tracker.start(5.0, Point::new(100.0, 40.0));
///
/// assert_eq!(tracker.update(Point::new(105.0, 40.0)), None);
/// assert_eq!(tracker.update(Point::new(131.0, 12.0)), Some(2));
/// assert_eq!(tracker.update(Point::new(139.0, 12.0)), None);
/// assert_eq!(tracker.update(Point::new(60.0, 40.0)), Some(-2));
/// assert_eq!(tracker.initial_value(), 5.0);
/// ```
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold: f64,
    start: Option<Point>,
    initial_value: f64,
    division: i32,
}

impl SwipeTracker {
    /// Creates an idle tracker with `threshold` pixels per division.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidThreshold`] if `threshold` is not a positive
    /// finite number.
    pub fn new(threshold: f64) -> Result<Self, ConfigError> {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(Self {
            threshold,
            start: None,
            initial_value: 0.0,
            division: 0,
        })
    }

    /// Pixels of travel per division.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Begins a gesture at `pos` from `value`, discarding any previous one.
    pub fn start(&mut self, value: f64, pos: Point) {
        self.start = Some(pos);
        self.initial_value = value;
        self.division = 0;
    }

    /// Updates the pointer position.
    ///
    /// Returns the new division count if it changed since the last report,
    /// or `None` if it did not or no gesture is in progress.
    pub fn update(&mut self, pos: Point) -> Option<i32> {
        let start = self.start?;
        let travel = (pos.x - start.x) / self.threshold;
        // Half-way ties resolve toward positive infinity.
        let travel = (travel + 0.5)
            .floor()
            .clamp(f64::from(i32::MIN), f64::from(i32::MAX));
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Rounded and clamped into the i32 range just above"
        )]
        let division = travel as i32;
        if division == self.division {
            return None;
        }
        tracing::trace!(
            from = self.division,
            to = division,
            "swipe division changed"
        );
        self.division = division;
        Some(division)
    }

    /// Value the current gesture started from.
    #[must_use]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Last reported division count.
    #[must_use]
    pub fn division(&self) -> i32 {
        self.division
    }

    /// Returns `true` between [`start`](Self::start) and [`end`](Self::end).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    /// Ends the gesture. Later updates are ignored until the next start.
    pub fn end(&mut self) {
        self.start = None;
        self.division = 0;
    }
}
