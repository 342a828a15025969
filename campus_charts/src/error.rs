// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout precondition failures.

use core::fmt;

/// Errors returned when a layout cannot be computed from its inputs.
///
/// Degenerate value ranges and out-of-domain values are not errors: the line
/// layout substitutes a range of `1` and the bar layout clamps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// The comparison series does not line up with the primary series.
    SeriesLengthMismatch {
        /// Length of the primary series.
        primary: usize,
        /// Length of the comparison series.
        comparison: usize,
    },
    /// The layout needs more points than were supplied.
    InsufficientPoints {
        /// Minimum number of points the layout accepts (besides zero).
        required: usize,
        /// Number of points supplied.
        actual: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SeriesLengthMismatch {
                primary,
                comparison,
            } => write!(
                f,
                "comparison series has {comparison} points but the primary series has {primary}"
            ),
            Self::InsufficientPoints { required, actual } => {
                write!(f, "layout needs at least {required} points, got {actual}")
            }
        }
    }
}

impl core::error::Error for LayoutError {}

/// Checks that an optional comparison series matches the primary length.
pub(crate) fn check_comparison(primary: usize, comparison: Option<usize>) -> Result<(), LayoutError> {
    match comparison {
        Some(comparison) if comparison != primary => Err(LayoutError::SeriesLengthMismatch {
            primary,
            comparison,
        }),
        _ => Ok(()),
    }
}
