// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical bar layout with optional comparison ("ghost") bars.
//!
//! Heights are measured against a caller-supplied domain maximum rather than
//! the data, so a 50% bar is always half the plot height regardless of its
//! neighbours. Values outside `[0, domain_max]` are clamped.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Rect;

use crate::error::{LayoutError, check_comparison};
use crate::scale::{ScaleBand, ScaleLinear};
use crate::series::Series;

/// Layout inputs for a bar chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayoutSpec {
    /// Pixel height of a bar whose value equals `domain_max`.
    pub max_height: f64,
    /// Value that maps to `max_height`.
    pub domain_max: f64,
    /// Width of the plot the bar groups are spread across.
    pub plot_width: f64,
    /// Width of a primary bar.
    pub bar_width: f64,
    /// Width of a comparison bar.
    pub ghost_width: f64,
    /// Horizontal gap between the comparison bar and the primary bar.
    pub gap: f64,
    /// Inner band padding between groups, in band units.
    pub group_padding: f64,
}

impl Default for BarLayoutSpec {
    fn default() -> Self {
        Self {
            max_height: 130.0,
            domain_max: 100.0,
            plot_width: 280.0,
            bar_width: 22.0,
            ghost_width: 16.0,
            gap: 3.0,
            group_padding: 0.1,
        }
    }
}

impl BarLayoutSpec {
    /// Creates a spec with the given maximum bar height and domain maximum.
    pub fn new(max_height: f64, domain_max: f64) -> Self {
        Self {
            max_height,
            domain_max,
            ..Self::default()
        }
    }

    /// Sets the plot width.
    pub fn with_plot_width(mut self, plot_width: f64) -> Self {
        self.plot_width = plot_width;
        self
    }

    /// Sets the primary and comparison bar widths and the gap between them.
    pub fn with_bar_widths(mut self, bar_width: f64, ghost_width: f64, gap: f64) -> Self {
        self.bar_width = bar_width.max(0.0);
        self.ghost_width = ghost_width.max(0.0);
        self.gap = gap.max(0.0);
        self
    }

    /// Sets the inner padding between bar groups.
    pub fn with_group_padding(mut self, group_padding: f64) -> Self {
        self.group_padding = group_padding;
        self
    }

    /// Maps a value to a clamped bar height.
    ///
    /// A non-positive `domain_max` (or a non-finite value) yields `0`.
    pub fn height_for(&self, value: f64) -> f64 {
        let max_height = self.max_height.max(0.0);
        if self.domain_max.is_nan() || self.domain_max <= 0.0 || !value.is_finite() {
            return 0.0;
        }
        ScaleLinear::new((0.0, self.domain_max), (0.0, max_height))
            .with_clamp(true)
            .map(value)
    }

    /// Computes bar geometry for `series`, with an optional index-aligned
    /// `comparison` series.
    pub fn layout(
        &self,
        series: &Series,
        comparison: Option<&Series>,
    ) -> Result<BarLayout, LayoutError> {
        check_comparison(series.len(), comparison.map(Series::len))?;

        let columns = series
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let ghost = comparison.map(|c| {
                    let value = c.points[i].value;
                    GhostBar {
                        value,
                        height: self.height_for(value),
                    }
                });
                BarColumn {
                    label: p.label.clone(),
                    value: p.value,
                    height: self.height_for(p.value),
                    ghost,
                }
            })
            .collect();

        Ok(BarLayout {
            spec: *self,
            band: ScaleBand::new((0.0, self.plot_width.max(0.0)), series.len())
                .with_padding(self.group_padding, 0.5 * self.group_padding),
            columns,
        })
    }
}

/// A comparison bar rendered behind a primary bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GhostBar {
    /// Comparison value.
    pub value: f64,
    /// Settled height in pixels.
    pub height: f64,
}

/// One labeled column of the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct BarColumn {
    /// Category label.
    pub label: String,
    /// Primary value (unclamped, for labelling).
    pub value: f64,
    /// Settled primary bar height in pixels.
    pub height: f64,
    /// Comparison bar, if a comparison series was supplied.
    pub ghost: Option<GhostBar>,
}

/// A horizontal grid line at a fraction of the domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    /// Domain value the line marks.
    pub value: f64,
    /// Distance above the baseline in pixels.
    pub offset: f64,
    /// Plot-local y coordinate (y grows downward, baseline at `max_height`).
    pub y: f64,
}

/// Output of [`BarLayoutSpec::layout`].
///
/// Rectangles are in plot-local coordinates with y growing downward and the
/// bar baseline at `y = max_height`.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    spec: BarLayoutSpec,
    band: ScaleBand,
    /// Columns in series order.
    pub columns: Vec<BarColumn>,
}

impl BarLayout {
    /// The fractions of the domain that get a grid line, top to bottom.
    pub const GRID_FRACTIONS: [f64; 4] = [1.0, 0.75, 0.5, 0.25];

    pub(crate) fn empty(spec: BarLayoutSpec) -> Self {
        Self {
            spec,
            band: ScaleBand::new((0.0, spec.plot_width.max(0.0)), 0),
            columns: Vec::new(),
        }
    }

    /// Returns the spec the layout was computed from.
    pub fn spec(&self) -> &BarLayoutSpec {
        &self.spec
    }

    /// Returns the number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if there are no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns `true` if the columns carry comparison bars.
    pub fn has_comparison(&self) -> bool {
        self.columns.first().is_some_and(|c| c.ghost.is_some())
    }

    /// Settled primary heights in series order.
    pub fn heights(&self) -> Vec<f64> {
        self.columns.iter().map(|c| c.height).collect()
    }

    /// Settled comparison heights in series order (empty without comparison).
    pub fn ghost_heights(&self) -> Vec<f64> {
        self.columns
            .iter()
            .filter_map(|c| c.ghost.map(|g| g.height))
            .collect()
    }

    /// Horizontal center of the column at `index`.
    pub fn column_center(&self, index: usize) -> f64 {
        self.band.center(index)
    }

    /// The primary bar at `index`, grown to `progress` of its settled height.
    pub fn bar_rect(&self, index: usize, progress: f32) -> Option<Rect> {
        let column = self.columns.get(index)?;
        let (_, bar_x) = self.stack_origins(index, column.ghost.is_some());
        Some(self.grown_rect(bar_x, self.spec.bar_width, column.height, progress))
    }

    /// The comparison bar at `index`, grown to `progress` of its settled height.
    pub fn ghost_rect(&self, index: usize, progress: f32) -> Option<Rect> {
        let ghost = self.columns.get(index)?.ghost?;
        let (ghost_x, _) = self.stack_origins(index, true);
        Some(self.grown_rect(ghost_x, self.spec.ghost_width, ghost.height, progress))
    }

    /// Grid lines at [`Self::GRID_FRACTIONS`] of the domain.
    pub fn grid_lines(&self) -> Vec<GridLine> {
        let baseline = self.spec.max_height.max(0.0);
        Self::GRID_FRACTIONS
            .iter()
            .map(|f| {
                let value = f * self.spec.domain_max;
                let offset = self.spec.height_for(value);
                GridLine {
                    value,
                    offset,
                    y: baseline - offset,
                }
            })
            .collect()
    }

    /// Left edges of the comparison and primary bars for the group at `index`.
    fn stack_origins(&self, index: usize, with_ghost: bool) -> (f64, f64) {
        let center = self.band.center(index);
        if with_ghost {
            let total = self.spec.ghost_width + self.spec.gap + self.spec.bar_width;
            let left = center - 0.5 * total;
            (left, left + self.spec.ghost_width + self.spec.gap)
        } else {
            let left = center - 0.5 * self.spec.bar_width;
            (left, left)
        }
    }

    fn grown_rect(&self, x: f64, width: f64, height: f64, progress: f32) -> Rect {
        let baseline = self.spec.max_height.max(0.0);
        let h = campus_motion::interpolate(0.0, height, progress);
        Rect::new(x, baseline - h, x + width, baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heights_scale_against_fixed_domain() {
        let series = Series::from_pairs([("A", 50.0), ("B", 100.0)]);
        let layout = BarLayoutSpec::new(120.0, 100.0).layout(&series, None).unwrap();
        assert_eq!(layout.heights(), [60.0, 120.0]);
        assert!(!layout.has_comparison());
        assert!(layout.ghost_heights().is_empty());
    }

    #[test]
    fn out_of_domain_values_are_clamped() {
        let series = Series::from_pairs([("neg", -10.0), ("over", 250.0), ("nan", f64::NAN)]);
        let layout = BarLayoutSpec::new(120.0, 100.0).layout(&series, None).unwrap();
        assert_eq!(layout.heights(), [0.0, 120.0, 0.0]);
        // The label value is kept as supplied.
        assert_eq!(layout.columns[1].value, 250.0);
    }

    #[test]
    fn non_positive_domain_yields_flat_bars() {
        let series = Series::from_pairs([("A", 50.0)]);
        for domain_max in [0.0, -5.0, f64::NAN] {
            let layout = BarLayoutSpec::new(120.0, domain_max)
                .layout(&series, None)
                .unwrap();
            assert_eq!(layout.heights(), [0.0], "domain_max = {domain_max}");
        }
    }

    #[test]
    fn comparison_must_match_length() {
        let series = Series::from_pairs([("A", 50.0), ("B", 60.0)]);
        let comparison = Series::from_pairs([("A", 40.0)]);
        let err = BarLayoutSpec::default()
            .layout(&series, Some(&comparison))
            .unwrap_err();
        assert_eq!(
            err,
            LayoutError::SeriesLengthMismatch {
                primary: 2,
                comparison: 1
            }
        );
    }

    #[test]
    fn ghost_sits_left_of_primary_bar() {
        let series = Series::from_pairs([("A", 80.0)]);
        let comparison = Series::from_pairs([("A", 50.0)]);
        let layout = BarLayoutSpec::new(100.0, 100.0)
            .with_plot_width(100.0)
            .with_bar_widths(22.0, 16.0, 3.0)
            .layout(&series, Some(&comparison))
            .unwrap();
        assert_eq!(layout.ghost_heights(), [50.0]);

        let bar = layout.bar_rect(0, 1.0).unwrap();
        let ghost = layout.ghost_rect(0, 1.0).unwrap();
        assert!((ghost.x1 + 3.0 - bar.x0).abs() < 1e-9);
        assert!((bar.height() - 80.0).abs() < 1e-9);
        assert!((ghost.height() - 50.0).abs() < 1e-9);
        assert_eq!(bar.y1, 100.0);

        let center = layout.column_center(0);
        assert!(((ghost.x0 + bar.x1) * 0.5 - center).abs() < 1e-9);
    }

    #[test]
    fn bars_grow_from_the_baseline() {
        let series = Series::from_pairs([("A", 100.0)]);
        let layout = BarLayoutSpec::new(120.0, 100.0).layout(&series, None).unwrap();
        let half = layout.bar_rect(0, 0.5).unwrap();
        assert_eq!(half.y1, 120.0);
        assert_eq!(half.height(), 60.0);
        let rest = layout.bar_rect(0, 0.0).unwrap();
        assert_eq!(rest.height(), 0.0);
        assert!(layout.bar_rect(1, 1.0).is_none());
        assert!(layout.ghost_rect(0, 1.0).is_none());
    }

    #[test]
    fn grid_lines_mark_domain_quartiles() {
        let layout = BarLayoutSpec::new(130.0, 100.0)
            .layout(&Series::default(), None)
            .unwrap();
        assert!(layout.is_empty());
        let grid = layout.grid_lines();
        let values: Vec<f64> = grid.iter().map(|g| g.value).collect();
        assert_eq!(values, [100.0, 75.0, 50.0, 25.0]);
        assert_eq!(grid[0].offset, 130.0);
        assert_eq!(grid[0].y, 0.0);
        assert_eq!(grid[2].offset, 65.0);
    }
}
