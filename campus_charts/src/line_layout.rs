// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line layout.
//!
//! Points are spread evenly across the plot width by index and normalised
//! vertically against the series' own min/max, leaving half of `margin` free
//! above the highest point and below the lowest. Each pair of consecutive
//! points also yields a [`LineSegment`] described as a rotated bar (length +
//! angle anchored at the left point), which is how surfaces without a path
//! primitive draw the line.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point};

use crate::error::{LayoutError, check_comparison};
use crate::scale::{ScaleLinear, ScalePoint};
use crate::series::{Series, finite_range};

/// Layout inputs for a line chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineLayoutSpec {
    /// Plot width; the first point sits at `x = 0`, the last at `x = width`.
    pub width: f64,
    /// Plot height (y grows downward).
    pub height: f64,
    /// Vertical space kept free, split evenly above and below the data.
    pub margin: f64,
    /// Radius of the point markers.
    pub point_radius: f64,
    /// Gap between the bottom of the plot and the x labels.
    pub label_gap: f64,
}

impl Default for LineLayoutSpec {
    fn default() -> Self {
        Self {
            width: 280.0,
            height: 100.0,
            margin: 16.0,
            point_radius: 5.0,
            label_gap: 6.0,
        }
    }
}

impl LineLayoutSpec {
    /// The minimum number of points a non-empty line needs.
    pub const MIN_POINTS: usize = 2;

    /// Creates a spec for a `width` x `height` plot with default margins.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the vertical margin.
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin.max(0.0);
        self
    }

    /// Sets the point marker radius.
    pub fn with_point_radius(mut self, point_radius: f64) -> Self {
        self.point_radius = point_radius.max(0.0);
        self
    }

    /// Computes line geometry for `series`, with an optional index-aligned
    /// `comparison` line sharing its value domain.
    ///
    /// An empty series yields an empty layout; a single point is rejected
    /// because its x position is undefined.
    pub fn layout(
        &self,
        series: &Series,
        comparison: Option<&Series>,
    ) -> Result<LineLayout, LayoutError> {
        check_comparison(series.len(), comparison.map(Series::len))?;
        let n = series.len();
        if n == 0 {
            return Ok(LineLayout::empty(*self));
        }
        if n < Self::MIN_POINTS {
            return Err(LayoutError::InsufficientPoints {
                required: Self::MIN_POINTS,
                actual: n,
            });
        }

        let comparison_values = comparison.into_iter().flat_map(Series::values);
        let (min, max) = finite_range(series.values().chain(comparison_values)).unwrap_or((0.0, 0.0));
        let range = (max - min).max(1.0);

        let half_margin = 0.5 * self.margin;
        let x = ScalePoint::new((0.0, self.width), n);
        let y = ScaleLinear::new((min, min + range), (self.height - half_margin, half_margin));
        let trace = |s: &Series| LineTrace::build(s, &x, &y, min);

        Ok(LineLayout {
            spec: *self,
            min,
            max,
            range,
            primary: trace(series),
            comparison: comparison.map(trace),
        })
    }
}

/// A positioned data point.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePoint {
    /// Category label.
    pub label: String,
    /// The value as supplied.
    pub value: f64,
    /// Plot-local position.
    pub position: Point,
}

/// The straight piece between two consecutive points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineSegment {
    /// Left endpoint (rotation anchor).
    pub start: Point,
    /// Right endpoint.
    pub end: Point,
    /// Euclidean length.
    pub length: f64,
    /// Rotation about `start` in degrees, clockwise in y-down coordinates.
    pub angle_degrees: f64,
}

impl LineSegment {
    /// Computes the segment from `start` to `end`.
    pub fn between(start: Point, end: Point) -> Self {
        let d = end - start;
        Self {
            start,
            end,
            length: d.hypot(),
            angle_degrees: d.atan2() * (180.0 / core::f64::consts::PI),
        }
    }

    /// Returns the segment as a `kurbo::Line`.
    pub fn line(&self) -> Line {
        Line::new(self.start, self.end)
    }
}

/// Positioned points and segments for one series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineTrace {
    /// Points in series order.
    pub points: Vec<LinePoint>,
    /// Segments between consecutive points (`points.len() - 1` of them).
    pub segments: Vec<LineSegment>,
}

impl LineTrace {
    fn build(series: &Series, x: &ScalePoint, y: &ScaleLinear, floor: f64) -> Self {
        let points: Vec<LinePoint> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let v = if p.value.is_finite() { p.value } else { floor };
                LinePoint {
                    label: p.label.clone(),
                    value: p.value,
                    position: Point::new(x.x(i), y.map(v)),
                }
            })
            .collect();
        let segments = points
            .windows(2)
            .map(|w| LineSegment::between(w[0].position, w[1].position))
            .collect();
        Self { points, segments }
    }

    /// Total length of all segments.
    pub fn length(&self) -> f64 {
        self.segments.iter().map(|s| s.length).sum()
    }

    /// Point x coordinates in order.
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.position.x).collect()
    }

    /// Point y coordinates in order.
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.position.y).collect()
    }

    /// The full polyline.
    pub fn path(&self) -> BezPath {
        self.revealed_path(1.0)
    }

    /// The polyline drawn from the first point up to `progress` of its
    /// total length.
    pub fn revealed_path(&self, progress: f32) -> BezPath {
        let mut path = BezPath::new();
        let Some(first) = self.points.first() else {
            return path;
        };
        path.move_to(first.position);

        let target = self.length() * f64::from(progress.clamp(0.0, 1.0));
        let mut walked = 0.0;
        for seg in &self.segments {
            if walked + seg.length <= target {
                path.line_to(seg.end);
                walked += seg.length;
                continue;
            }
            if seg.length > 0.0 {
                let t = (target - walked) / seg.length;
                if t > 0.0 {
                    path.line_to(seg.start.lerp(seg.end, t));
                }
            }
            break;
        }
        path
    }
}

/// Output of [`LineLayoutSpec::layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    spec: LineLayoutSpec,
    /// Smallest finite value across the plotted series.
    pub min: f64,
    /// Largest finite value across the plotted series.
    pub max: f64,
    /// `max(max - min, 1)`; never zero.
    pub range: f64,
    /// The primary line.
    pub primary: LineTrace,
    /// The comparison line, if one was supplied.
    pub comparison: Option<LineTrace>,
}

impl LineLayout {
    /// Grid lines at these fractions of the plot height, top to bottom.
    pub const GRID_FRACTIONS: [f64; 3] = [0.0, 0.5, 1.0];

    pub(crate) fn empty(spec: LineLayoutSpec) -> Self {
        Self {
            spec,
            min: 0.0,
            max: 0.0,
            range: 1.0,
            primary: LineTrace::default(),
            comparison: None,
        }
    }

    /// Returns the spec the layout was computed from.
    pub fn spec(&self) -> &LineLayoutSpec {
        &self.spec
    }

    /// Returns the number of points per line.
    pub fn len(&self) -> usize {
        self.primary.points.len()
    }

    /// Returns `true` if nothing is plotted.
    pub fn is_empty(&self) -> bool {
        self.primary.points.is_empty()
    }

    /// Plot-local y coordinates of the horizontal grid lines.
    pub fn grid_ys(&self) -> [f64; 3] {
        Self::GRID_FRACTIONS.map(|f| f * self.spec.height)
    }

    /// Anchor (top-center) for each x label.
    pub fn label_anchors(&self) -> Vec<Point> {
        let y = self.spec.height + self.spec.label_gap;
        self.primary
            .points
            .iter()
            .map(|p| Point::new(p.position.x, y))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> LineLayoutSpec {
        LineLayoutSpec::new(280.0, 100.0).with_margin(16.0)
    }

    #[test]
    fn flat_series_uses_unit_range() {
        let series = Series::from_pairs([("a", 10.0), ("b", 10.0), ("c", 10.0)]);
        let layout = spec().layout(&series, None).unwrap();
        assert_eq!(layout.range, 1.0);
        for y in layout.primary.ys() {
            assert!((y - (100.0 - 8.0)).abs() < 1e-9, "y = {y}");
        }
        for seg in &layout.primary.segments {
            assert!(seg.angle_degrees.abs() < 1e-9);
        }
    }

    #[test]
    fn extremes_touch_the_margins() {
        let series = Series::from_pairs([("lo", 20.0), ("hi", 60.0), ("mid", 40.0)]);
        let layout = spec().layout(&series, None).unwrap();
        let ys = layout.primary.ys();
        assert!((ys[0] - 92.0).abs() < 1e-9);
        assert!((ys[1] - 8.0).abs() < 1e-9);
        assert!((ys[2] - 50.0).abs() < 1e-9);
        assert_eq!(layout.primary.xs(), [0.0, 140.0, 280.0]);
    }

    #[test]
    fn segments_measure_rotation_and_length() {
        let seg = LineSegment::between(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((seg.length - 5.0).abs() < 1e-12);
        let expected = kurbo::Vec2::new(3.0, 4.0).atan2().to_degrees();
        assert!((seg.angle_degrees - expected).abs() < 1e-9);

        let down = LineSegment::between(Point::new(0.0, 0.0), Point::new(10.0, 10.0));
        assert!((down.angle_degrees - 45.0).abs() < 1e-9);
        assert_eq!(down.line().p1, Point::new(10.0, 10.0));
    }

    #[test]
    fn empty_series_has_no_geometry() {
        let layout = spec().layout(&Series::default(), None).unwrap();
        assert!(layout.is_empty());
        assert!(layout.primary.segments.is_empty());
        assert_eq!(layout.primary.revealed_path(1.0).elements().len(), 0);
    }

    #[test]
    fn single_point_is_rejected() {
        let series = Series::from_pairs([("only", 1.0)]);
        let err = spec().layout(&series, None).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InsufficientPoints {
                required: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn comparison_shares_the_value_domain() {
        let series = Series::from_pairs([("a", 10.0), ("b", 20.0)]);
        let comparison = Series::from_pairs([("a", 0.0), ("b", 40.0)]);
        let layout = spec().layout(&series, Some(&comparison)).unwrap();
        assert_eq!((layout.min, layout.max, layout.range), (0.0, 40.0, 40.0));
        let cmp = layout.comparison.as_ref().unwrap();
        assert!((cmp.ys()[0] - 92.0).abs() < 1e-9);
        assert!((cmp.ys()[1] - 8.0).abs() < 1e-9);
        assert_eq!(cmp.xs(), layout.primary.xs());

        let short = Series::from_pairs([("a", 0.0)]);
        assert!(spec().layout(&series, Some(&short)).is_err());
    }

    #[test]
    fn revealed_path_stops_partway() {
        let series = Series::from_pairs([("a", 0.0), ("b", 0.0), ("c", 0.0)]);
        let layout = LineLayoutSpec::new(200.0, 100.0)
            .layout(&series, None)
            .unwrap();
        assert!((layout.primary.length() - 200.0).abs() < 1e-9);

        let half = layout.primary.revealed_path(0.5);
        let end = half.elements().last().and_then(|el| el.end_point()).unwrap();
        assert!((end.x - 100.0).abs() < 1e-9);

        let quarter = layout.primary.revealed_path(0.25);
        let end = quarter.elements().last().and_then(|el| el.end_point()).unwrap();
        assert!((end.x - 50.0).abs() < 1e-9);

        assert_eq!(layout.primary.revealed_path(0.0).elements().len(), 1);
        assert_eq!(layout.primary.path().elements().len(), 3);
    }

    #[test]
    fn grid_and_labels_follow_plot_height() {
        let series = Series::from_pairs([("Mon", 1.0), ("Tue", 2.0)]);
        let layout = spec().layout(&series, None).unwrap();
        assert_eq!(layout.grid_ys(), [0.0, 50.0, 100.0]);
        let anchors = layout.label_anchors();
        assert_eq!(anchors[1], Point::new(280.0, 106.0));
    }
}
