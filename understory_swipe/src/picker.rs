// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker value state: limits, sticky snapping, and looped swipes.

use kurbo::Point;
use understory_scale::{closest_value, move_by_divisions, number_of_divisions, stick_to_scale};

use crate::config::PickerConfig;
use crate::tracker::SwipeTracker;

/// Initial value of a picker created with [`Picker::new`].
const DEFAULT_VALUE: f64 = 1.0;

/// A committed change of the picker value.
///
/// Returned by every mutating [`Picker`] method whose call actually changed
/// the value, in place of a change listener.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueChange {
    /// Value before the change.
    pub old: f64,
    /// Value after the change.
    pub new: f64,
}

/// Headless state of a swipe value picker.
///
/// A `Picker` owns a validated [`PickerConfig`] and the current value. It
/// keeps the value within `[min, max]` and, when the configuration is
/// sticky and has a scale, on the virtual scale. It does no rendering and no
/// gesture recognition; hosts feed it division counts (directly through
/// [`Picker::apply_swipe`] or through a [`SwipeTracker`]).
///
/// ```rust
/// use understory_swipe::{Picker, PickerConfig, ValueChange};
///
/// let config = PickerConfig::builder()
///     .scale([1.0, 2.0, 5.0, 10.0])
///     .step(10.0)
///     .range(0.0, 40.0)
///     .build()
///     .unwrap();
/// let mut picker = Picker::with_value(config, 2.0);
///
/// // Two divisions to the right of 2 is 10; one more leaves the scale.
/// assert_eq!(picker.apply_swipe(2.0, 2), Some(ValueChange { old: 2.0, new: 10.0 }));
/// assert_eq!(picker.swipe(2.0, 3), 20.0);
/// // Results are clamped to the limits when committed.
/// picker.apply_swipe(2.0, 10);
/// assert_eq!(picker.value(), 40.0);
/// ```
#[derive(Clone, Debug)]
pub struct Picker {
    config: PickerConfig,
    value: f64,
}

impl Picker {
    /// Creates a picker with the default initial value (`1.0`), constrained by
    /// `config`.
    #[must_use]
    pub fn new(config: PickerConfig) -> Self {
        Self::with_value(config, DEFAULT_VALUE)
    }

    /// Creates a picker with an initial value, constrained by `config`.
    #[must_use]
    pub fn with_value(config: PickerConfig, value: f64) -> Self {
        let mut picker = Self { config, value };
        picker.value = picker.constrain(value);
        picker
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns `true` if the value sits on either limit.
    ///
    /// Hosts use this to stop a fling early when the picker is not looped.
    #[must_use]
    pub fn is_at_limit(&self) -> bool {
        self.value == self.config.min() || self.value == self.config.max()
    }

    /// Replaces the configuration and re-applies it to the current value.
    ///
    /// Returns the resulting change, if the new constraints moved the value.
    pub fn set_config(&mut self, config: PickerConfig) -> Option<ValueChange> {
        tracing::debug!(
            step = config.step(),
            min = config.min(),
            max = config.max(),
            sticky = config.is_sticky(),
            looped = config.is_looped(),
            "picker configuration replaced"
        );
        self.config = config;
        self.set_value(self.value)
    }

    /// Assigns a value, snapping it when sticky and clamping it to the limits.
    ///
    /// Returns the change if the stored value differs afterwards.
    pub fn set_value(&mut self, value: f64) -> Option<ValueChange> {
        let new = self.constrain(value);
        if new == self.value {
            return None;
        }
        let change = ValueChange {
            old: self.value,
            new,
        };
        self.value = new;
        tracing::trace!(old = change.old, new = change.new, "picker value changed");
        Some(change)
    }

    /// Snaps `value` onto the virtual scale, letting the limits win when
    /// they are closer.
    ///
    /// Without a scale, `value` is returned unchanged.
    #[must_use]
    pub fn stick(&self, value: f64) -> f64 {
        let config = &self.config;
        let Some(scale) = config.scale() else {
            return value;
        };
        let snapped = stick_to_scale(Some(scale), config.step(), value);
        // The snapped point wins ties against either limit.
        [config.min(), config.max()]
            .into_iter()
            .fold(snapped, |closest, limit| closest_value(closest, limit, value))
    }

    /// Computes the value `division` divisions away from `from`.
    ///
    /// When the configuration is looped, a result beyond one limit wraps
    /// around to the other, keeping the number of divisions that overflowed:
    /// one division past `max` lands on `min` and one division before `min`
    /// lands on `max`. Otherwise the raw result is returned and clamping is
    /// left to [`set_value`](Self::set_value).
    #[must_use]
    pub fn swipe(&self, from: f64, division: i32) -> f64 {
        let config = &self.config;
        let scale = config.scale();
        let step = config.step();
        let mut result = move_by_divisions(scale, step, from, division);
        if !config.is_looped() {
            return result;
        }

        let sign = division.signum();
        let (exit, entry) = if division < 0 {
            (config.min(), config.max())
        } else {
            (config.max(), config.min())
        };
        // Every wrap consumes at least one division.
        for _ in 0..=division.unsigned_abs() {
            if config.contains(result) {
                return result;
            }
            let mut overflow = number_of_divisions(scale, step, exit, result);
            let reached = move_by_divisions(scale, step, result, overflow.saturating_neg());
            if reached != exit {
                // The limit is not a legal point; the first overflowing
                // division stops on the limit itself.
                if overflow.abs() == 1 {
                    return exit;
                }
                overflow = overflow.saturating_sub(sign);
            }
            result = move_by_divisions(scale, step, entry, overflow.saturating_sub(sign));
            tracing::trace!(overflow, result, "looped swipe wrapped");
        }
        result.clamp(config.min(), config.max())
    }

    /// Computes [`swipe`](Self::swipe) and commits the result with
    /// [`set_value`](Self::set_value).
    pub fn apply_swipe(&mut self, from: f64, division: i32) -> Option<ValueChange> {
        let value = self.swipe(from, division);
        self.set_value(value)
    }

    /// Starts a gesture on `tracker` from the current value.
    pub fn begin_swipe(&self, tracker: &mut SwipeTracker, pos: Point) {
        tracker.start(self.value, pos);
    }

    /// Feeds a pointer position to `tracker` and applies the swipe if the
    /// division count changed.
    pub fn track(&mut self, tracker: &mut SwipeTracker, pos: Point) -> Option<ValueChange> {
        let division = tracker.update(pos)?;
        self.apply_swipe(tracker.initial_value(), division)
    }

    fn constrain(&self, value: f64) -> f64 {
        let value = if self.config.is_sticky() {
            self.stick(value)
        } else {
            value
        };
        value.clamp(self.config.min(), self.config.max())
    }
}

#[cfg(test)]
mod tests {
    use super::{Picker, ValueChange};
    use crate::PickerConfig;

    fn looped(min: f64, max: f64, step: f64) -> Picker {
        let config = PickerConfig::builder()
            .step(step)
            .range(min, max)
            .looped(true)
            .build()
            .unwrap();
        Picker::with_value(config, min)
    }

    #[test]
    fn new_picker_starts_at_one() {
        let picker = Picker::new(PickerConfig::default());
        assert_eq!(picker.value(), 1.0);
    }

    #[test]
    fn initial_value_is_constrained() {
        let config = PickerConfig::builder().range(2.0, 4.0).build().unwrap();
        assert_eq!(Picker::new(config).value(), 2.0);
    }

    #[test]
    fn set_value_reports_only_real_changes() {
        let mut picker = Picker::new(PickerConfig::default());
        assert_eq!(
            picker.set_value(3.0),
            Some(ValueChange { old: 1.0, new: 3.0 })
        );
        assert_eq!(picker.set_value(3.0), None);
    }

    #[test]
    fn set_value_clamps_to_limits() {
        let config = PickerConfig::builder().range(-1.0, 1.0).build().unwrap();
        let mut picker = Picker::with_value(config, 0.0);
        picker.set_value(5.0);
        assert_eq!(picker.value(), 1.0);
        assert!(picker.is_at_limit());
        picker.set_value(-5.0);
        assert_eq!(picker.value(), -1.0);
    }

    #[test]
    fn stick_prefers_closer_limit() {
        let config = PickerConfig::builder()
            .scale([-2.0, 0.0, 3.5])
            .step(0.0)
            .range(-5.0, 10.0)
            .build()
            .unwrap();
        let picker = Picker::new(config);
        // Outside with a zero step the scale saturates at 3.5, but 10 is closer.
        assert_eq!(picker.stick(6.75), 3.5);
        assert_eq!(picker.stick(6.76), 10.0);
        assert_eq!(picker.stick(-3.5), -2.0);
        assert_eq!(picker.stick(-3.6), -5.0);
    }

    #[test]
    fn stick_without_scale_is_identity() {
        let picker = Picker::new(PickerConfig::default());
        assert_eq!(picker.stick(1.234), 1.234);
    }

    #[test]
    fn looped_swipe_wraps_past_max() {
        let picker = looped(0.0, 10.0, 1.0);
        assert_eq!(picker.swipe(10.0, 1), 0.0);
        assert_eq!(picker.swipe(10.0, 3), 2.0);
        assert_eq!(picker.swipe(9.0, 1), 10.0);
    }

    #[test]
    fn looped_swipe_wraps_past_min() {
        let picker = looped(0.0, 10.0, 1.0);
        assert_eq!(picker.swipe(0.0, -1), 10.0);
        assert_eq!(picker.swipe(0.0, -3), 8.0);
        assert_eq!(picker.swipe(2.0, -2), 0.0);
    }

    #[test]
    fn looped_swipe_stops_on_off_grid_limit() {
        let picker = looped(0.0, 10.0, 3.0);
        assert_eq!(picker.swipe(9.0, 1), 10.0);
        assert_eq!(picker.swipe(9.0, 2), 0.0);
        assert_eq!(picker.swipe(9.0, 3), 3.0);
    }

    #[test]
    fn looped_swipe_wraps_repeatedly() {
        let picker = looped(0.0, 2.0, 1.0);
        // Each lap around [0, 2] takes three divisions.
        assert_eq!(picker.swipe(0.0, 3), 0.0);
        assert_eq!(picker.swipe(0.0, 7), 1.0);
        assert_eq!(picker.swipe(0.0, -7), 2.0);
    }

    #[test]
    fn unlooped_swipe_returns_raw_result() {
        let config = PickerConfig::builder().range(0.0, 10.0).build().unwrap();
        let mut picker = Picker::with_value(config, 9.0);
        assert_eq!(picker.swipe(9.0, 3), 12.0);
        assert_eq!(
            picker.apply_swipe(9.0, 3),
            Some(ValueChange { old: 9.0, new: 10.0 })
        );
    }

    #[test]
    fn set_config_reapplies_constraints() {
        let mut picker = Picker::with_value(PickerConfig::default(), 0.4);
        let sticky = PickerConfig::builder()
            .scale([0.0, 0.75, 1.5])
            .step(0.75)
            .sticky(true)
            .build()
            .unwrap();
        assert_eq!(
            picker.set_config(sticky),
            Some(ValueChange { old: 0.4, new: 0.75 })
        );
        let same = picker.config().clone();
        assert_eq!(picker.set_config(same), None);
    }
}
