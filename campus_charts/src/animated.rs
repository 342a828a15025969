// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated chart drivers.
//!
//! A driver owns a layout and the sequencers that grow it in. Feed it data
//! with `set_data`, call `tick` once per frame, and read the interpolated
//! geometry back with `frame`. New data replays the entrance only when its
//! values differ from the previous call, so re-supplying an identical series
//! every frame is harmless.

extern crate alloc;

use alloc::vec::Vec;

use campus_motion::{
    AnimationEvent, AnimationEventKind, Sequencer, Stagger, TickOutcome, Timestamp, Timing,
    Tracer,
};
use kurbo::{BezPath, Point, Rect};

use crate::bar_layout::{BarLayout, BarLayoutSpec};
use crate::error::LayoutError;
use crate::line_layout::{LineLayout, LineLayoutSpec};
use crate::presets;
use crate::series::Series;

/// One frame of a bar column.
#[derive(Clone, Debug, PartialEq)]
pub struct BarFrame<'a> {
    /// Category label.
    pub label: &'a str,
    /// Primary value.
    pub value: f64,
    /// Primary bar at its current height.
    pub bar: Rect,
    /// Comparison bar at its current height.
    pub ghost: Option<Rect>,
    /// Growth progress of the primary bar.
    pub progress: f32,
}

/// Bar chart with staggered entrance growth.
#[derive(Clone, Debug)]
pub struct AnimatedBarChart {
    spec: BarLayoutSpec,
    bar_timing: Stagger,
    ghost_timing: Stagger,
    layout: BarLayout,
    bars: Sequencer,
    ghosts: Sequencer,
}

impl AnimatedBarChart {
    /// Trace target for the primary bars.
    pub const BARS: &'static str = "bars";
    /// Trace target for the comparison bars.
    pub const GHOSTS: &'static str = "ghosts";

    /// Creates an empty chart using [`presets::BAR_GROWTH`] and
    /// [`presets::GHOST_GROWTH`].
    pub fn new(spec: BarLayoutSpec) -> Self {
        Self {
            spec,
            bar_timing: presets::BAR_GROWTH,
            ghost_timing: presets::GHOST_GROWTH,
            layout: BarLayout::empty(spec),
            bars: Sequencer::default(),
            ghosts: Sequencer::default(),
        }
    }

    /// Overrides the bar and comparison-bar timings.
    ///
    /// Applies from the next call to [`AnimatedBarChart::set_data`].
    pub fn with_timings(mut self, bars: Stagger, ghosts: Stagger) -> Self {
        self.bar_timing = bars;
        self.ghost_timing = ghosts;
        self.bars = Sequencer::default();
        self.ghosts = Sequencer::default();
        self
    }

    /// Returns the current layout (settled geometry).
    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    /// Progress values of the primary bars.
    pub fn bar_progress(&self) -> &Sequencer {
        &self.bars
    }

    /// Progress values of the comparison bars.
    pub fn ghost_progress(&self) -> &Sequencer {
        &self.ghosts
    }

    /// Lays out new data and replays the entrance if the values changed.
    ///
    /// On error the previous layout and animation are left untouched.
    /// Returns `true` if the entrance was replayed.
    pub fn set_data(
        &mut self,
        series: &Series,
        comparison: Option<&Series>,
        now: Timestamp,
        tracer: &mut Tracer<'_>,
    ) -> Result<bool, LayoutError> {
        let layout = self.spec.layout(series, comparison)?;
        let n = layout.len();
        let ghost_n = if layout.has_comparison() { n } else { 0 };
        if self.bars.len() != n {
            self.bars = Sequencer::staggered(n, &self.bar_timing);
        }
        if self.ghosts.len() != ghost_n {
            self.ghosts = Sequencer::staggered(ghost_n, &self.ghost_timing);
        }
        self.layout = layout;

        let key = data_key(series, comparison);
        let bars = replay(&mut self.bars, Self::BARS, &key, now, tracer);
        let ghosts = replay(&mut self.ghosts, Self::GHOSTS, &key, now, tracer);
        Ok(bars || ghosts)
    }

    /// Advances the animation to `now`.
    pub fn tick(&mut self, now: Timestamp, tracer: &mut Tracer<'_>) -> TickOutcome {
        let bars = advance(&mut self.bars, Self::BARS, now, tracer);
        let ghosts = advance(&mut self.ghosts, Self::GHOSTS, now, tracer);
        bars.merge(ghosts)
    }

    /// Returns `true` while any bar is still growing.
    pub fn is_running(&self) -> bool {
        self.bars.is_running() || self.ghosts.is_running()
    }

    /// Freezes every bar at its current height. Returns `true` if anything
    /// was moving.
    pub fn cancel(&mut self, now: Timestamp, tracer: &mut Tracer<'_>) -> bool {
        let bars = halt(&mut self.bars, Self::BARS, now, tracer);
        let ghosts = halt(&mut self.ghosts, Self::GHOSTS, now, tracer);
        bars || ghosts
    }

    /// Geometry for the current frame.
    pub fn frame(&self) -> Vec<BarFrame<'_>> {
        self.layout
            .columns
            .iter()
            .enumerate()
            .filter_map(|(i, column)| {
                let progress = self.bars.progress(i);
                Some(BarFrame {
                    label: &column.label,
                    value: column.value,
                    bar: self.layout.bar_rect(i, progress)?,
                    ghost: self.layout.ghost_rect(i, self.ghosts.progress(i)),
                    progress,
                })
            })
            .collect()
    }
}

/// One frame of a point marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DotFrame {
    /// Marker center.
    pub center: Point,
    /// Current radius (grows from `0`).
    pub radius: f64,
    /// Current opacity in `[0, 1]`.
    pub opacity: f32,
}

/// One frame of a line chart.
#[derive(Clone, Debug, PartialEq)]
pub struct LineFrame {
    /// Primary stroke, drawn in from the left.
    pub path: BezPath,
    /// Comparison stroke, drawn in alongside the primary.
    pub comparison: Option<BezPath>,
    /// Point markers on the primary line.
    pub dots: Vec<DotFrame>,
    /// Draw progress of the strokes.
    pub draw_progress: f32,
}

/// Line chart with a drawn-in stroke and cascading point markers.
#[derive(Clone, Debug)]
pub struct AnimatedLineChart {
    spec: LineLayoutSpec,
    dot_timing: Stagger,
    layout: LineLayout,
    draw: Sequencer,
    dots: Sequencer,
}

impl AnimatedLineChart {
    /// Trace target for the stroke.
    pub const LINE: &'static str = "line";
    /// Trace target for the point markers.
    pub const DOTS: &'static str = "dots";

    /// Creates an empty chart using [`presets::LINE_DRAW`] and
    /// [`presets::DOT_REVEAL`].
    pub fn new(spec: LineLayoutSpec) -> Self {
        Self {
            spec,
            dot_timing: presets::DOT_REVEAL,
            layout: LineLayout::empty(spec),
            draw: Sequencer::new([presets::LINE_DRAW]),
            dots: Sequencer::default(),
        }
    }

    /// Overrides the stroke and marker timings.
    ///
    /// Applies from the next call to [`AnimatedLineChart::set_data`].
    pub fn with_timings(mut self, draw: Timing, dots: Stagger) -> Self {
        self.draw = Sequencer::new([draw]);
        self.dot_timing = dots;
        self.dots = Sequencer::default();
        self
    }

    /// Returns the current layout (settled geometry).
    pub fn layout(&self) -> &LineLayout {
        &self.layout
    }

    /// Lays out new data and replays the entrance if the values changed.
    ///
    /// On error the previous layout and animation are left untouched. An
    /// empty series clears the chart. Returns `true` if the entrance was
    /// replayed.
    pub fn set_data(
        &mut self,
        series: &Series,
        comparison: Option<&Series>,
        now: Timestamp,
        tracer: &mut Tracer<'_>,
    ) -> Result<bool, LayoutError> {
        let layout = self.spec.layout(series, comparison)?;
        let n = layout.len();
        if self.dots.len() != n {
            self.dots = Sequencer::staggered(n, &self.dot_timing);
        }
        self.layout = layout;

        if n == 0 {
            for seq in [&mut self.draw, &mut self.dots] {
                seq.reset();
                seq.clear_key();
            }
            return Ok(false);
        }

        let key = data_key(series, comparison);
        let draw = replay(&mut self.draw, Self::LINE, &key, now, tracer);
        let dots = replay(&mut self.dots, Self::DOTS, &key, now, tracer);
        Ok(draw || dots)
    }

    /// Advances the animation to `now`.
    pub fn tick(&mut self, now: Timestamp, tracer: &mut Tracer<'_>) -> TickOutcome {
        let draw = advance(&mut self.draw, Self::LINE, now, tracer);
        let dots = advance(&mut self.dots, Self::DOTS, now, tracer);
        draw.merge(dots)
    }

    /// Returns `true` while the stroke or any marker is still animating.
    pub fn is_running(&self) -> bool {
        self.draw.is_running() || self.dots.is_running()
    }

    /// Freezes the stroke and markers where they are. Returns `true` if
    /// anything was moving.
    pub fn cancel(&mut self, now: Timestamp, tracer: &mut Tracer<'_>) -> bool {
        let draw = halt(&mut self.draw, Self::LINE, now, tracer);
        let dots = halt(&mut self.dots, Self::DOTS, now, tracer);
        draw || dots
    }

    /// Geometry for the current frame.
    pub fn frame(&self) -> LineFrame {
        let draw_progress = self.draw.progress(0);
        let radius = self.spec.point_radius;
        let dots = self
            .layout
            .primary
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let progress = self.dots.progress(i);
                DotFrame {
                    center: p.position,
                    radius: campus_motion::interpolate(0.0, radius, progress),
                    opacity: progress.clamp(0.0, 1.0),
                }
            })
            .collect();
        LineFrame {
            path: self.layout.primary.revealed_path(draw_progress),
            comparison: self
                .layout
                .comparison
                .as_ref()
                .map(|c| c.revealed_path(draw_progress)),
            dots,
            draw_progress,
        }
    }
}

/// Primary values followed by comparison values.
fn data_key(series: &Series, comparison: Option<&Series>) -> Vec<f64> {
    series
        .values()
        .chain(comparison.into_iter().flat_map(Series::values))
        .collect()
}

fn replay(
    seq: &mut Sequencer,
    target: &'static str,
    key: &[f64],
    now: Timestamp,
    tracer: &mut Tracer<'_>,
) -> bool {
    if !seq.rekey(key, now) || seq.is_empty() {
        return false;
    }
    emit(tracer, target, AnimationEventKind::Reset, now, seq.len());
    emit(tracer, target, AnimationEventKind::Started, now, seq.len());
    true
}

fn advance(
    seq: &mut Sequencer,
    target: &'static str,
    now: Timestamp,
    tracer: &mut Tracer<'_>,
) -> TickOutcome {
    let outcome = seq.tick(now);
    if outcome == TickOutcome::Settled {
        emit(tracer, target, AnimationEventKind::Settled, now, seq.len());
    }
    outcome
}

fn halt(
    seq: &mut Sequencer,
    target: &'static str,
    now: Timestamp,
    tracer: &mut Tracer<'_>,
) -> bool {
    let cancelled = seq.cancel();
    if cancelled {
        emit(tracer, target, AnimationEventKind::Cancelled, now, seq.len());
    }
    cancelled
}

fn emit(
    tracer: &mut Tracer<'_>,
    target: &'static str,
    kind: AnimationEventKind,
    at: Timestamp,
    tracks: usize,
) {
    tracer.animation(&AnimationEvent {
        target,
        kind,
        at,
        tracks,
    });
}

#[cfg(test)]
mod tests {
    use campus_motion::{Clock, Easing, ManualClock};

    use super::*;

    fn linear_bars() -> AnimatedBarChart {
        let stagger = Stagger::from_millis(100, 50).with_easing(Easing::Linear);
        AnimatedBarChart::new(BarLayoutSpec::new(100.0, 100.0)).with_timings(stagger, stagger)
    }

    #[test]
    fn bars_grow_in_index_order() {
        let mut clock = ManualClock::default();
        let mut chart = linear_bars();
        let series = Series::from_pairs([("A", 100.0), ("B", 50.0)]);
        assert_eq!(
            chart.set_data(&series, None, clock.now(), &mut Tracer::none()),
            Ok(true)
        );

        let frame = chart.frame();
        assert_eq!(frame.len(), 2);
        assert_eq!(frame[0].bar.height(), 0.0);

        clock.advance_millis(100);
        assert_eq!(chart.tick(clock.now(), &mut Tracer::none()), TickOutcome::Running);
        let frame = chart.frame();
        assert_eq!(frame[0].bar.height(), 100.0);
        assert!((frame[1].bar.height() - 25.0).abs() < 1e-4);
        assert!(frame[1].ghost.is_none());

        clock.advance_millis(100);
        assert_eq!(chart.tick(clock.now(), &mut Tracer::none()), TickOutcome::Settled);
        assert_eq!(chart.frame()[1].bar.height(), 50.0);
    }

    #[test]
    fn identical_data_does_not_replay() {
        let mut clock = ManualClock::default();
        let mut chart = linear_bars();
        let series = Series::from_pairs([("A", 40.0)]);
        let comparison = Series::from_pairs([("A", 30.0)]);
        chart
            .set_data(&series, Some(&comparison), clock.now(), &mut Tracer::none())
            .unwrap();
        clock.advance_millis(500);
        chart.tick(clock.now(), &mut Tracer::none());

        let again = chart
            .set_data(&series.clone(), Some(&comparison), clock.now(), &mut Tracer::none())
            .unwrap();
        assert!(!again);
        assert!(!chart.is_running());
        assert_eq!(chart.frame()[0].ghost.map(|g| g.height()), Some(30.0));

        let changed = Series::from_pairs([("A", 41.0)]);
        assert_eq!(
            chart.set_data(&changed, Some(&comparison), clock.now(), &mut Tracer::none()),
            Ok(true)
        );
        assert_eq!(chart.frame()[0].bar.height(), 0.0);
        assert_eq!(chart.frame()[0].ghost.map(|g| g.height()), Some(0.0));
    }

    #[test]
    fn rejected_data_keeps_previous_state() {
        let mut chart = linear_bars();
        let series = Series::from_pairs([("A", 40.0), ("B", 10.0)]);
        chart
            .set_data(&series, None, Timestamp::ZERO, &mut Tracer::none())
            .unwrap();
        let short = Series::from_pairs([("A", 1.0)]);
        assert!(
            chart
                .set_data(&series, Some(&short), Timestamp::ZERO, &mut Tracer::none())
                .is_err()
        );
        assert_eq!(chart.layout().len(), 2);
        assert!(chart.is_running());
    }

    #[test]
    fn cancel_freezes_bars() {
        let mut clock = ManualClock::default();
        let mut chart = linear_bars();
        let series = Series::from_pairs([("A", 100.0)]);
        chart
            .set_data(&series, None, clock.now(), &mut Tracer::none())
            .unwrap();
        clock.advance_millis(40);
        chart.tick(clock.now(), &mut Tracer::none());
        assert!(chart.cancel(clock.now(), &mut Tracer::none()));
        assert!(!chart.cancel(clock.now(), &mut Tracer::none()));

        clock.advance_millis(1_000);
        assert_eq!(chart.tick(clock.now(), &mut Tracer::none()), TickOutcome::Idle);
        assert!((chart.frame()[0].bar.height() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn line_draws_in_then_dots_pop() {
        let mut clock = ManualClock::default();
        let mut chart = AnimatedLineChart::new(LineLayoutSpec::new(200.0, 100.0)).with_timings(
            Timing::from_millis(100).with_easing(Easing::Linear),
            Stagger::from_millis(100, 100).with_easing(Easing::Linear),
        );
        let series = Series::from_pairs([("a", 0.0), ("b", 0.0), ("c", 0.0)]);
        assert_eq!(
            chart.set_data(&series, None, clock.now(), &mut Tracer::none()),
            Ok(true)
        );

        clock.advance_millis(50);
        chart.tick(clock.now(), &mut Tracer::none());
        let frame = chart.frame();
        assert!((frame.draw_progress - 0.5).abs() < 1e-6);
        let end = frame.path.elements().last().and_then(|el| el.end_point()).unwrap();
        assert!((end.x - 100.0).abs() < 1e-3);
        assert!((frame.dots[0].radius - 2.5).abs() < 1e-4);
        assert_eq!(frame.dots[1].opacity, 0.0);
        assert!(frame.comparison.is_none());

        clock.advance_millis(250);
        assert_eq!(chart.tick(clock.now(), &mut Tracer::none()), TickOutcome::Settled);
        let frame = chart.frame();
        assert_eq!(frame.draw_progress, 1.0);
        assert!(frame.dots.iter().all(|d| d.opacity == 1.0 && d.radius == 5.0));
    }

    #[test]
    fn empty_line_clears_the_chart() {
        let mut chart = AnimatedLineChart::new(LineLayoutSpec::default());
        let series = Series::from_pairs([("a", 1.0), ("b", 2.0)]);
        chart
            .set_data(&series, None, Timestamp::ZERO, &mut Tracer::none())
            .unwrap();
        assert_eq!(
            chart.set_data(&Series::default(), None, Timestamp::ZERO, &mut Tracer::none()),
            Ok(false)
        );
        assert!(!chart.is_running());
        assert!(chart.frame().dots.is_empty());
        assert!(
            chart
                .set_data(&Series::from_pairs([("a", 1.0)]), None, Timestamp::ZERO, &mut Tracer::none())
                .is_err()
        );
    }
}
