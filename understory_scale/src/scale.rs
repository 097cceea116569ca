// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated anchor scales.

use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;

/// Error returned when a sequence of values cannot be used as a [`Scale`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScaleError {
    /// The sequence has no values.
    Empty,
    /// The value at `index` is NaN or infinite.
    NotFinite {
        /// Position of the offending value.
        index: usize,
    },
    /// The value at `index` is not strictly greater than its predecessor.
    NotAscending {
        /// Position of the offending value.
        index: usize,
    },
}

impl fmt::Display for ScaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("scale must contain at least one value"),
            Self::NotFinite { index } => write!(f, "scale value at index {index} is not finite"),
            Self::NotAscending { index } => write!(
                f,
                "scale value at index {index} is not strictly greater than the previous value"
            ),
        }
    }
}

impl core::error::Error for ScaleError {}

/// A non-empty, strictly ascending sequence of finite anchor values.
///
/// A `Scale` is the set of "legal" values a stepped picker moves between.
/// It is validated once, on construction, and cannot be mutated afterwards;
/// callers that want a different scale build a new one.
///
/// ```rust
/// use understory_scale::{Scale, ScaleError};
///
/// let scale = Scale::new([0.5, 1.0, 2.0, 5.0]).unwrap();
/// assert_eq!(scale.first(), 0.5);
/// assert_eq!(scale.last(), 5.0);
///
/// assert_eq!(Scale::new(Vec::new()), Err(ScaleError::Empty));
/// assert_eq!(
///     Scale::new([5.0, 3.0]),
///     Err(ScaleError::NotAscending { index: 1 })
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Scale {
    values: Vec<f64>,
}

impl Scale {
    /// Validates `values` and wraps them in a `Scale`.
    ///
    /// # Errors
    ///
    /// - [`ScaleError::Empty`] if there are no values.
    /// - [`ScaleError::NotFinite`] if any value is NaN or infinite.
    /// - [`ScaleError::NotAscending`] if any value is not strictly greater than
    ///   the one before it (duplicates included).
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, ScaleError> {
        let values = values.into();
        if values.is_empty() {
            return Err(ScaleError::Empty);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(ScaleError::NotFinite { index });
        }
        if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(ScaleError::NotAscending { index: index + 1 });
        }
        Ok(Self { values })
    }

    /// Creates a scale with a single anchor value.
    ///
    /// Combined with a step, this describes an infinite uniform grid that
    /// passes through `anchor`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::NotFinite`] if `anchor` is NaN or infinite.
    pub fn single(anchor: f64) -> Result<Self, ScaleError> {
        Self::new([anchor])
    }

    /// Returns the smallest (left boundary) value.
    #[must_use]
    pub fn first(&self) -> f64 {
        self.values[0]
    }

    /// Returns the largest (right boundary) value.
    #[must_use]
    pub fn last(&self) -> f64 {
        self.values[self.last_index()]
    }

    /// Returns the index of the last value.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.values.len() - 1
    }

    /// Returns the number of values. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; present for API symmetry with slices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the value at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns `true` if `value` lies within `[first, last]`.
    #[must_use]
    pub fn contains_range(&self, value: f64) -> bool {
        self.first() <= value && value <= self.last()
    }

    /// Binary search for `value`.
    ///
    /// Returns `Ok(index)` on an exact match, or `Err(insertion)` with the
    /// index at which `value` would have to be inserted to keep the scale
    /// ascending. `-0.0` and `0.0` compare equal.
    pub fn search(&self, value: f64) -> Result<usize, usize> {
        self.values
            .binary_search_by(|probe| probe.partial_cmp(&value).unwrap_or(Ordering::Less))
    }
}

impl TryFrom<Vec<f64>> for Scale {
    type Error = ScaleError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Scale {
    type Error = ScaleError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl AsRef<[f64]> for Scale {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}
