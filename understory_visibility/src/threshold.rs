// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validated overlap-ratio thresholds.

use core::fmt;

use smallvec::SmallVec;

/// Reason a threshold set was rejected by [`Thresholds::new`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ThresholdError {
    /// No thresholds were supplied.
    Empty,
    /// A value was not in `(0, 1]`, or was not a number.
    OutOfRange {
        /// The offending value.
        value: f64,
    },
    /// The same value was supplied more than once.
    Duplicate {
        /// The repeated value.
        value: f64,
    },
}

impl fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "threshold set is empty"),
            Self::OutOfRange { value } => {
                write!(f, "threshold {value} is outside the range (0, 1]")
            }
            Self::Duplicate { value } => write!(f, "threshold {value} appears more than once"),
        }
    }
}

impl core::error::Error for ThresholdError {}

/// An ordered, non-empty set of overlap ratios in `(0, 1]`.
///
/// Order is preserved as given; transitions for a single report are delivered
/// in this order. Sets are conventionally ascending but this is not required.
///
/// ```
/// use understory_visibility::{ThresholdError, Thresholds};
///
/// let thresholds = Thresholds::new([0.25, 0.75]).unwrap();
/// assert_eq!(thresholds.as_slice(), &[0.25, 0.75]);
///
/// assert_eq!(Thresholds::new([]), Err(ThresholdError::Empty));
/// assert_eq!(
///     Thresholds::new([0.5, 1.5]),
///     Err(ThresholdError::OutOfRange { value: 1.5 })
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Thresholds {
    values: SmallVec<[f64; 4]>,
}

impl Thresholds {
    /// Validates and collects a threshold set.
    ///
    /// Rejects empty input, values outside `(0, 1]` (including NaN), and
    /// repeated values.
    pub fn new<I>(values: I) -> Result<Self, ThresholdError>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut out: SmallVec<[f64; 4]> = SmallVec::new();
        for value in values {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ThresholdError::OutOfRange { value });
            }
            if out.contains(&value) {
                return Err(ThresholdError::Duplicate { value });
            }
            out.push(value);
        }
        if out.is_empty() {
            return Err(ThresholdError::Empty);
        }
        Ok(Self { values: out })
    }

    /// Returns the thresholds in configured order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Returns an iterator over the thresholds in configured order.
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, f64>> {
        self.values.iter().copied()
    }
}

impl Default for Thresholds {
    /// Returns `[0.1, 0.5]`: "starting to appear" and "mostly on screen".
    fn default() -> Self {
        Self {
            values: SmallVec::from_slice(&[0.1, 0.5]),
        }
    }
}
