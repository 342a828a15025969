// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart input data.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::Color;

/// A labeled numeric value.
#[derive(Clone, Debug, PartialEq)]
pub struct DataPoint {
    /// Display label (x-axis category). Not required to be unique.
    pub label: String,
    /// The value.
    pub value: f64,
}

impl DataPoint {
    /// Creates a data point.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// An ordered sequence of data points.
///
/// Order is significant: index `i` determines horizontal position. Layouts
/// only ever borrow a series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// Points in display order.
    pub points: Vec<DataPoint>,
}

impl Series {
    /// Creates a series from points.
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Creates a series from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        pairs
            .into_iter()
            .map(|(label, value)| DataPoint::new(label, value))
            .collect()
    }

    /// Returns the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the series has no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates over values in order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Collects values in order.
    pub fn value_vec(&self) -> Vec<f64> {
        self.values().collect()
    }

    /// Returns the `(min, max)` of the finite values, if any.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        finite_range(self.values())
    }

    /// Returns a copy with the points in reverse order.
    pub fn reversed(&self) -> Self {
        Self {
            points: self.points.iter().rev().cloned().collect(),
        }
    }
}

impl FromIterator<DataPoint> for Series {
    fn from_iter<T: IntoIterator<Item = DataPoint>>(iter: T) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

/// One slice of a donut chart.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutSegment {
    /// Display label.
    pub label: String,
    /// Share of the full circle, in percent (`0..=100`).
    pub percentage: f64,
    /// Fill color.
    pub color: Color,
}

impl DonutSegment {
    /// Creates a segment.
    pub fn new(label: impl Into<String>, percentage: f64, color: Color) -> Self {
        Self {
            label: label.into(),
            percentage,
            color,
        }
    }
}

/// Returns the `(min, max)` of the finite values, or `None` if there are none.
pub(crate) fn finite_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values.filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    (min.is_finite() && max.is_finite()).then_some((min, max))
}
