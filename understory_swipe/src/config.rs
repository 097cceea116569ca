// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated picker configuration.

use alloc::vec::Vec;
use core::fmt;

use understory_scale::{Scale, ScaleError};

/// Error returned when a picker or tracker configuration is rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// The scale values are empty, not finite, or not strictly ascending.
    Scale(ScaleError),
    /// The step is negative, NaN, or infinite.
    InvalidStep(f64),
    /// The value limits are not finite or `min >= max`.
    InvalidRange {
        /// Requested lower limit.
        min: f64,
        /// Requested upper limit.
        max: f64,
    },
    /// The swipe threshold is not a positive finite number of pixels.
    InvalidThreshold(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale(err) => write!(f, "invalid scale: {err}"),
            Self::InvalidStep(step) => {
                write!(f, "step must be a finite non-negative number, got {step}")
            }
            Self::InvalidRange { min, max } => {
                write!(f, "value range must satisfy min < max, got [{min}, {max}]")
            }
            Self::InvalidThreshold(threshold) => write!(
                f,
                "swipe threshold must be a finite positive number, got {threshold}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Scale(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ScaleError> for ConfigError {
    fn from(err: ScaleError) -> Self {
        Self::Scale(err)
    }
}

/// Immutable, validated configuration of a [`Picker`](crate::Picker).
///
/// Build one with [`PickerConfig::builder`]. To change a configuration,
/// turn it back into a builder with [`PickerConfig::to_builder`], adjust it,
/// and build again; every build re-validates the whole configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct PickerConfig {
    scale: Option<Scale>,
    step: f64,
    min: f64,
    max: f64,
    sticky: bool,
    looped: bool,
}

impl PickerConfig {
    /// Starts a builder with the default configuration.
    #[must_use]
    pub fn builder() -> PickerConfigBuilder {
        PickerConfigBuilder::new()
    }

    /// Returns a builder pre-filled with this configuration.
    #[must_use]
    pub fn to_builder(&self) -> PickerConfigBuilder {
        PickerConfigBuilder {
            scale: self.scale.as_ref().map(|s| s.as_slice().to_vec()),
            step: self.step,
            min: self.min,
            max: self.max,
            sticky: self.sticky,
            looped: self.looped,
        }
    }

    /// The anchor scale, if any.
    #[must_use]
    pub fn scale(&self) -> Option<&Scale> {
        self.scale.as_ref()
    }

    /// The uniform step.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Lower value limit.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper value limit.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Whether assigned values are snapped onto the scale.
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Whether swipes wrap around from one limit to the other.
    #[must_use]
    pub fn is_looped(&self) -> bool {
        self.looped
    }

    /// Returns `true` if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            scale: None,
            step: 1.0,
            min: f64::MIN,
            max: f64::MAX,
            sticky: false,
            looped: false,
        }
    }
}

/// Builder for [`PickerConfig`].
///
/// ```rust
/// use understory_swipe::{ConfigError, PickerConfig};
///
/// let config = PickerConfig::builder()
///     .scale([0.0, 0.25, 0.5, 1.0])
///     .step(0.5)
///     .range(-2.0, 3.0)
///     .sticky(true)
///     .build()
///     .unwrap();
/// assert_eq!(config.scale().map(|s| s.len()), Some(4));
///
/// let err = PickerConfig::builder().range(1.0, 1.0).build().unwrap_err();
/// assert_eq!(err, ConfigError::InvalidRange { min: 1.0, max: 1.0 });
/// ```
#[derive(Clone, Debug)]
pub struct PickerConfigBuilder {
    scale: Option<Vec<f64>>,
    step: f64,
    min: f64,
    max: f64,
    sticky: bool,
    looped: bool,
}

impl PickerConfigBuilder {
    /// Creates a builder with the default configuration: no scale, a step of
    /// `1.0`, the full `f64` range, not sticky, not looped.
    #[must_use]
    pub fn new() -> Self {
        PickerConfig::default().to_builder()
    }

    /// Sets the anchor scale. Validated by [`build`](Self::build).
    #[must_use]
    pub fn scale(mut self, values: impl Into<Vec<f64>>) -> Self {
        self.scale = Some(values.into());
        self
    }

    /// Sets a single-entry scale, so the step grid passes through `anchor`.
    #[must_use]
    pub fn anchor(self, anchor: f64) -> Self {
        self.scale([anchor])
    }

    /// Removes the anchor scale; movement becomes pure step arithmetic.
    #[must_use]
    pub fn without_scale(mut self) -> Self {
        self.scale = None;
        self
    }

    /// Sets the uniform step.
    #[must_use]
    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    /// Sets both value limits.
    #[must_use]
    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Enables or disables snapping of assigned values onto the scale.
    #[must_use]
    pub fn sticky(mut self, sticky: bool) -> Self {
        self.sticky = sticky;
        self
    }

    /// Enables or disables wrap-around between the limits.
    #[must_use]
    pub fn looped(mut self, looped: bool) -> Self {
        self.looped = looped;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::Scale`] if the scale values are rejected by
    ///   [`Scale::new`].
    /// - [`ConfigError::InvalidStep`] if the step is negative or not finite.
    /// - [`ConfigError::InvalidRange`] if either limit is not finite or
    ///   `min >= max`.
    pub fn build(self) -> Result<PickerConfig, ConfigError> {
        self.validate()
            .inspect_err(|err| tracing::debug!(%err, "picker configuration rejected"))
    }

    fn validate(self) -> Result<PickerConfig, ConfigError> {
        let scale = self.scale.map(Scale::new).transpose()?;
        if !self.step.is_finite() || self.step < 0.0 {
            return Err(ConfigError::InvalidStep(self.step));
        }
        if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(PickerConfig {
            scale,
            step: self.step,
            min: self.min,
            max: self.max,
            sticky: self.sticky,
            looped: self.looped,
        })
    }
}

impl Default for PickerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use core::error::Error as _;

    use understory_scale::ScaleError;

    use super::{ConfigError, PickerConfig};

    #[test]
    fn defaults_are_valid() {
        let config = PickerConfig::builder().build().unwrap();
        assert_eq!(config, PickerConfig::default());
        assert!(config.scale().is_none());
        assert_eq!(config.step(), 1.0);
        assert!(!config.is_sticky());
        assert!(!config.is_looped());
    }

    #[test]
    fn invalid_scale_is_reported() {
        let err = PickerConfig::builder()
            .scale(Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::Scale(ScaleError::Empty));
        assert!(err.source().is_some());

        let err = PickerConfig::builder()
            .scale([5.0, 3.0])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Scale(ScaleError::NotAscending { index: 1 })
        );
    }

    #[test]
    fn invalid_step_is_reported() {
        let err = PickerConfig::builder().step(-1.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidStep(-1.0));
        assert!(PickerConfig::builder().step(f64::INFINITY).build().is_err());
        assert!(PickerConfig::builder().step(0.0).build().is_ok());
    }

    #[test]
    fn invalid_range_is_reported() {
        let err = PickerConfig::builder().range(5.0, 1.0).build().unwrap_err();
        assert_eq!(err, ConfigError::InvalidRange { min: 5.0, max: 1.0 });
        assert!(err.source().is_none());
        assert!(err.to_string().contains("min < max"));
        assert!(
            PickerConfig::builder()
                .range(f64::NEG_INFINITY, 1.0)
                .build()
                .is_err()
        );
    }

    #[test]
    fn to_builder_round_trips_and_revalidates() {
        let config = PickerConfig::builder()
            .anchor(1.0)
            .step(1.5)
            .range(-10.0, 10.0)
            .looped(true)
            .build()
            .unwrap();
        assert_eq!(config.to_builder().build().unwrap(), config);

        let edited = config.to_builder().without_scale().build().unwrap();
        assert!(edited.scale().is_none());
        assert!(edited.is_looped());

        assert!(config.to_builder().range(3.0, -3.0).build().is_err());
    }
}
