// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut layout.
//!
//! Segments are laid end to end around the ring starting at 12 o'clock and
//! running clockwise. Angles are exposed in degrees for surfaces that rotate
//! views, and as `kurbo` arcs and annular-sector paths for surfaces that can
//! draw curves.
//!
//! The percentages are not normalised: a total below 100 leaves part of the
//! ring empty, and a total above 100 overdraws past the starting point.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Arc, BezPath, Circle, Point, Shape, Vec2};
use peniko::Color;
use smallvec::SmallVec;

use crate::series::DonutSegment;

/// Layout inputs for a donut chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutLayoutSpec {
    /// Side length of the square the donut occupies.
    pub size: f64,
    /// Ring thickness.
    pub thickness: f64,
    /// Space between the ring's center line and the square, summed over both
    /// sides.
    pub inset: f64,
    /// Inset of the center label disc, summed over both sides.
    pub label_inset: f64,
}

impl Default for DonutLayoutSpec {
    fn default() -> Self {
        Self {
            size: 120.0,
            thickness: 10.0,
            inset: 20.0,
            label_inset: 30.0,
        }
    }
}

impl DonutLayoutSpec {
    /// Creates a spec for a donut in a `size` x `size` square.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Sets the ring thickness.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness.max(0.0);
        self
    }

    /// Radius of the ring's center line.
    pub fn radius(&self) -> f64 {
        (0.5 * (self.size - self.inset)).max(0.0)
    }

    /// Computes the arcs for `segments`.
    pub fn layout(&self, segments: &[DonutSegment]) -> DonutLayout {
        let center = Point::new(0.5 * self.size, 0.5 * self.size);
        let radius = self.radius();
        let half = 0.5 * self.thickness;
        let ring = Ring {
            center,
            outer_radius: radius + half,
            inner_radius: (radius - half).max(0.0),
        };

        let mut offset = 0.0;
        let arcs = segments
            .iter()
            .map(|s| {
                let pct = if s.percentage.is_finite() {
                    s.percentage.max(0.0)
                } else {
                    0.0
                };
                let arc = DonutArc {
                    label: s.label.clone(),
                    percentage: s.percentage,
                    color: s.color,
                    offset,
                    start_degrees: offset / 100.0 * 360.0,
                    sweep_degrees: pct / 100.0 * 360.0,
                    ring,
                };
                offset += pct;
                arc
            })
            .collect();

        DonutLayout {
            spec: *self,
            ring,
            arcs,
            center_label: CenterLabel::from_segments(segments),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Ring {
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
}

impl Ring {
    fn radius(&self) -> f64 {
        0.5 * (self.outer_radius + self.inner_radius)
    }
}

/// A piece of a segment spanning at most 180°.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfArc {
    /// Clockwise rotation from 12 o'clock, in degrees.
    pub start_degrees: f64,
    /// Clockwise sweep in degrees, in `(0, 180]`.
    pub sweep_degrees: f64,
}

/// One positioned donut segment.
#[derive(Clone, Debug, PartialEq)]
pub struct DonutArc {
    /// Display label.
    pub label: String,
    /// Percentage as supplied.
    pub percentage: f64,
    /// Fill color.
    pub color: Color,
    /// Sum of the preceding segments' percentages.
    pub offset: f64,
    /// Clockwise rotation from 12 o'clock, in degrees.
    pub start_degrees: f64,
    /// Clockwise sweep in degrees.
    pub sweep_degrees: f64,
    ring: Ring,
}

impl DonutArc {
    /// The largest sweep a single [`HalfArc`] covers.
    pub const MAX_HALF_SWEEP: f64 = 180.0;

    /// The largest sweep that is drawn. A ring shows at most one full turn.
    pub const MAX_DRAWN_SWEEP: f64 = 360.0;

    /// End angle in degrees.
    pub fn end_degrees(&self) -> f64 {
        self.start_degrees + self.sweep_degrees
    }

    /// The sweep that geometry is built from, capped at one turn.
    pub fn drawn_sweep_degrees(&self) -> f64 {
        self.sweep_degrees.min(Self::MAX_DRAWN_SWEEP)
    }

    /// The segment along the ring's center line.
    ///
    /// `kurbo` measures angles from the positive x axis toward positive y,
    /// which is clockwise on a y-down surface.
    pub fn arc(&self) -> Arc {
        let r = self.ring.radius();
        Arc {
            center: self.ring.center,
            radii: Vec2::new(r, r),
            start_angle: screen_radians(self.start_degrees),
            sweep_angle: self.drawn_sweep_degrees().to_radians(),
            x_rotation: 0.0,
        }
    }

    /// The segment as a filled annular sector.
    pub fn ring_path(&self, tolerance: f64) -> BezPath {
        if self.sweep_degrees <= 0.0 {
            return BezPath::new();
        }
        Circle::new(self.ring.center, self.ring.outer_radius)
            .segment(
                self.ring.inner_radius,
                screen_radians(self.start_degrees),
                self.drawn_sweep_degrees().to_radians(),
            )
            .to_path(tolerance)
    }

    /// Splits the sweep into pieces of at most 180°.
    ///
    /// A zero sweep yields nothing. Sweeps beyond a full turn are capped
    /// first, so there are never more than two pieces.
    pub fn half_arcs(&self) -> SmallVec<[HalfArc; 2]> {
        let mut out = SmallVec::new();
        let mut start = self.start_degrees;
        let mut remaining = self.drawn_sweep_degrees();
        while remaining > 0.0 {
            let sweep = remaining.min(Self::MAX_HALF_SWEEP);
            out.push(HalfArc {
                start_degrees: start,
                sweep_degrees: sweep,
            });
            start += sweep;
            remaining -= sweep;
        }
        out
    }
}

/// Text for the donut's center disc.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CenterLabel {
    /// Headline, e.g. `"45%"`. Empty when the total is zero.
    pub value: String,
    /// Caption under the headline.
    pub caption: String,
}

impl CenterLabel {
    /// Reports the first segment only, regardless of which one is largest.
    fn from_segments(segments: &[DonutSegment]) -> Self {
        let total: f64 = segments.iter().map(|s| s.percentage).sum();
        let Some(first) = segments.first() else {
            return Self::default();
        };
        let value = if total > 0.0 {
            alloc::format!("{}%", first.percentage)
        } else {
            String::new()
        };
        Self {
            value,
            caption: first.label.clone(),
        }
    }
}

/// Output of [`DonutLayoutSpec::layout`].
#[derive(Clone, Debug, PartialEq)]
pub struct DonutLayout {
    spec: DonutLayoutSpec,
    ring: Ring,
    /// Arcs in segment order.
    pub arcs: Vec<DonutArc>,
    /// Center text.
    pub center_label: CenterLabel,
}

impl DonutLayout {
    /// Returns the spec the layout was computed from.
    pub fn spec(&self) -> &DonutLayoutSpec {
        &self.spec
    }

    /// Center of the ring.
    pub fn center(&self) -> Point {
        self.ring.center
    }

    /// Outer edge of the ring.
    pub fn outer_radius(&self) -> f64 {
        self.ring.outer_radius
    }

    /// Inner edge of the ring.
    pub fn inner_radius(&self) -> f64 {
        self.ring.inner_radius
    }

    /// Radius of the center label disc.
    pub fn label_radius(&self) -> f64 {
        (0.5 * (self.spec.size - self.spec.label_inset)).max(0.0)
    }

    /// The unfilled background ring.
    pub fn track(&self) -> Circle {
        Circle::new(self.ring.center, self.ring.radius())
    }

    /// Sum of all sweeps in degrees (`360 * Σpct / 100`).
    pub fn total_sweep_degrees(&self) -> f64 {
        self.arcs.iter().map(|a| a.sweep_degrees).sum()
    }

    /// Offsets (cumulative percentages) in segment order.
    pub fn offsets(&self) -> Vec<f64> {
        self.arcs.iter().map(|a| a.offset).collect()
    }

    /// Sweeps in degrees in segment order.
    pub fn sweeps(&self) -> Vec<f64> {
        self.arcs.iter().map(|a| a.sweep_degrees).collect()
    }
}

/// Converts a clockwise-from-12-o'clock angle in degrees to `kurbo` radians.
fn screen_radians(degrees: f64) -> f64 {
    (degrees - 90.0).to_radians()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use peniko::color::palette::css;

    use super::*;

    fn segments(pcts: &[f64]) -> Vec<DonutSegment> {
        pcts.iter()
            .enumerate()
            .map(|(i, p)| DonutSegment::new(alloc::format!("s{i}"), *p, css::TEAL))
            .collect()
    }

    #[test]
    fn ring_geometry_follows_size() {
        let layout = DonutLayoutSpec::default().layout(&[]);
        assert_eq!(layout.center(), Point::new(60.0, 60.0));
        assert_eq!(layout.outer_radius(), 55.0);
        assert_eq!(layout.inner_radius(), 45.0);
        assert_eq!(layout.label_radius(), 45.0);
        assert_eq!(layout.track().radius, 50.0);
        assert!(layout.arcs.is_empty());
        assert_eq!(layout.total_sweep_degrees(), 0.0);
    }

    #[test]
    fn arc_starts_at_twelve_and_runs_clockwise() {
        let layout = DonutLayoutSpec::default().layout(&segments(&[25.0]));
        let arc = layout.arcs[0].arc();
        assert!((arc.start_angle + core::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((arc.sweep_angle - core::f64::consts::FRAC_PI_2).abs() < 1e-12);

        // A quarter turn from 12 o'clock ends at 3 o'clock.
        let bounds = layout.arcs[0].ring_path(0.1).bounding_box();
        assert!(bounds.x0 >= 60.0 - 1e-6);
        assert!(bounds.y1 <= 60.0 + 1e-6);
        assert!((bounds.x1 - 115.0).abs() < 1e-6);
        assert!((bounds.y0 - 5.0).abs() < 1e-6);
    }

    #[test]
    fn half_arcs_split_large_sweeps() {
        let layout = DonutLayoutSpec::default().layout(&segments(&[10.0, 75.0, 0.0]));
        assert_eq!(layout.arcs[0].half_arcs().len(), 1);

        let big = layout.arcs[1].half_arcs();
        assert_eq!(big.len(), 2);
        assert_eq!(big[0].start_degrees, 36.0);
        assert_eq!(big[0].sweep_degrees, 180.0);
        assert_eq!(big[1].start_degrees, 216.0);
        assert!((big[1].sweep_degrees - 90.0).abs() < 1e-9);

        assert!(layout.arcs[2].half_arcs().is_empty());
        assert_eq!(layout.arcs[2].ring_path(0.1).elements().len(), 0);
    }

    #[test]
    fn oversized_segments_draw_one_turn() {
        let layout = DonutLayoutSpec::default().layout(&segments(&[1.0e18, 25.0]));
        let huge = &layout.arcs[0];
        assert_eq!(huge.sweep_degrees, 3.6e18);
        assert_eq!(huge.drawn_sweep_degrees(), 360.0);

        let pieces = huge.half_arcs();
        assert_eq!(pieces.len(), 2);
        assert!(!pieces.spilled());
        assert_eq!(pieces[1].start_degrees, 180.0);
        assert_eq!(pieces[1].sweep_degrees, 180.0);

        assert!((huge.arc().sweep_angle - core::f64::consts::TAU).abs() < 1e-12);
        let bounds = huge.ring_path(0.1).bounding_box();
        assert!((bounds.width() - 110.0).abs() < 0.2);

        // Later segments still start past the oversized one.
        assert_eq!(layout.arcs[1].start_degrees, 3.6e18);
    }

    #[test]
    fn negative_percentages_do_not_rewind() {
        let layout = DonutLayoutSpec::default().layout(&segments(&[-10.0, 50.0]));
        assert_eq!(layout.sweeps(), [0.0, 180.0]);
        assert_eq!(layout.offsets(), [0.0, 0.0]);
    }

    #[test]
    fn center_label_reports_first_segment() {
        let layout = DonutLayoutSpec::default().layout(&[
            DonutSegment::new("Present", 20.0, css::GREEN),
            DonutSegment::new("Absent", 80.0, css::RED),
        ]);
        assert_eq!(layout.center_label.value, "20%");
        assert_eq!(layout.center_label.caption, "Present");

        let zero = DonutLayoutSpec::default().layout(&segments(&[0.0]));
        assert_eq!(zero.center_label.value, "");
        assert_eq!(zero.center_label.caption, "s0");

        let none = DonutLayoutSpec::default().layout(&[]);
        assert_eq!(none.center_label, CenterLabel::default());
        assert_eq!(none.center_label.value.to_string(), "");
    }
}
