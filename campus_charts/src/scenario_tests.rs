// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use campus_motion::{Clock, ManualClock, TickOutcome, Tracer};
use peniko::color::palette::css;

use crate::{
    AnimatedBarChart, BarLayoutSpec, DonutLayoutSpec, DonutSegment, LineLayoutSpec, Series,
};

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "{a} != {b}");
}

/// Weekly attendance, as shown on the staff dashboard.
fn attendance() -> Series {
    Series::from_pairs([
        ("Mon", 92.0),
        ("Tue", 88.0),
        ("Wed", 95.0),
        ("Thu", 79.0),
        ("Fri", 85.0),
    ])
}

#[test]
fn bar_heights_stay_within_plot_for_any_value() {
    let spec = BarLayoutSpec::new(130.0, 100.0);
    let series = Series::from_pairs([
        ("a", 0.0),
        ("b", 37.5),
        ("c", 100.0),
        ("d", -1e9),
        ("e", 1e9),
        ("f", f64::INFINITY),
        ("g", f64::NEG_INFINITY),
    ]);
    let layout = spec.layout(&series, Some(&series.reversed())).unwrap();
    for h in layout.heights().into_iter().chain(layout.ghost_heights()) {
        assert!((0.0..=130.0).contains(&h), "height {h} escaped the plot");
    }
    assert_close(layout.heights()[1], 48.75);
}

#[test]
fn bar_heights_follow_fixed_domain() {
    let series = Series::from_pairs([("A", 50.0), ("B", 100.0)]);
    let layout = BarLayoutSpec::new(120.0, 100.0).layout(&series, None).unwrap();
    assert_eq!(layout.heights(), [60.0, 120.0]);
}

#[test]
fn equal_values_yield_a_flat_line_at_the_lower_margin() {
    let spec = LineLayoutSpec::default();
    let series = Series::from_pairs([("a", 10.0), ("b", 10.0), ("c", 10.0)]);
    let layout = spec.layout(&series, None).unwrap();
    assert_eq!(layout.range, 1.0);
    for y in layout.primary.ys() {
        assert_close(y, spec.height - spec.margin / 2.0);
    }
}

#[test]
fn line_x_depends_only_on_index() {
    let spec = LineLayoutSpec::default();
    let series = attendance();
    let forward = spec.layout(&series, None).unwrap();
    let backward = spec.layout(&series.reversed(), None).unwrap();

    assert_eq!(forward.primary.xs(), backward.primary.xs());
    let mirrored: Vec<f64> = backward.primary.ys().into_iter().rev().collect();
    for (a, b) in forward.primary.ys().into_iter().zip(mirrored) {
        assert_close(a, b);
    }
    let labels: Vec<&str> = backward
        .primary
        .points
        .iter()
        .map(|p| p.label.as_str())
        .collect();
    assert_eq!(labels, ["Fri", "Thu", "Wed", "Tue", "Mon"]);
}

#[test]
fn line_segments_connect_consecutive_points() {
    let layout = LineLayoutSpec::default().layout(&attendance(), None).unwrap();
    let trace = &layout.primary;
    assert_eq!(trace.segments.len(), trace.points.len() - 1);
    for (seg, pair) in trace.segments.iter().zip(trace.points.windows(2)) {
        assert_eq!(seg.start, pair[0].position);
        assert_eq!(seg.end, pair[1].position);
        assert_close(seg.length, (pair[1].position - pair[0].position).hypot());
    }
    // Tue -> Wed climbs, so the segment rotates counter-clockwise (negative).
    assert!(trace.segments[1].angle_degrees < 0.0);
    assert!(trace.segments[2].angle_degrees > 0.0);
    assert_close(trace.length(), trace.segments.iter().map(|s| s.length).sum());
}

#[test]
fn donut_offsets_and_sweeps_accumulate() {
    let segments = [
        DonutSegment::new("Excellent", 25.0, css::SEA_GREEN),
        DonutSegment::new("Good", 25.0, css::ROYAL_BLUE),
        DonutSegment::new("Needs work", 50.0, css::TOMATO),
    ];
    let layout = DonutLayoutSpec::default().layout(&segments);
    assert_eq!(layout.offsets(), [0.0, 25.0, 50.0]);
    assert_eq!(layout.sweeps(), [90.0, 90.0, 180.0]);
    assert_close(layout.total_sweep_degrees(), 360.0);
    assert_close(layout.arcs[2].end_degrees(), 360.0);
}

#[test]
fn donut_total_sweep_tracks_percentage_sum() {
    let cases: [&[f64]; 3] = [&[10.0, 20.0], &[60.0, 70.0], &[]];
    for pcts in cases {
        let segments: Vec<DonutSegment> = pcts
            .iter()
            .map(|p| DonutSegment::new("s", *p, css::GRAY))
            .collect();
        let sum: f64 = pcts.iter().sum();
        let layout = DonutLayoutSpec::default().layout(&segments);
        assert_close(layout.total_sweep_degrees(), 360.0 * sum / 100.0);
    }
}

#[test]
fn settled_chart_ignores_repeated_data() {
    let mut clock = ManualClock::default();
    let mut chart = AnimatedBarChart::new(BarLayoutSpec::default());
    let series = attendance();
    let comparison = series.reversed();

    assert_eq!(
        chart.set_data(&series, Some(&comparison), clock.now(), &mut Tracer::none()),
        Ok(true)
    );
    let mut outcome = TickOutcome::Running;
    while outcome == TickOutcome::Running {
        clock.advance_millis(16);
        outcome = chart.tick(clock.now(), &mut Tracer::none());
    }
    assert_eq!(outcome, TickOutcome::Settled);
    let settled = chart.layout().heights();

    for _ in 0..2 {
        assert_eq!(
            chart.set_data(&series, Some(&comparison), clock.now(), &mut Tracer::none()),
            Ok(false)
        );
        assert_eq!(chart.tick(clock.now(), &mut Tracer::none()), TickOutcome::Idle);
    }
    let heights: Vec<f64> = chart.frame().iter().map(|f| f.bar.height()).collect();
    for (a, b) in heights.into_iter().zip(settled) {
        assert!((a - b).abs() < 1e-4);
    }
}

#[cfg(feature = "trace")]
#[test]
fn chart_reports_animation_lifecycle() {
    use campus_motion::{AnimationEvent, AnimationEventKind, TraceSink};

    #[derive(Default)]
    struct Recorder(Vec<(&'static str, AnimationEventKind)>);

    impl TraceSink for Recorder {
        fn on_animation(&mut self, e: &AnimationEvent) {
            self.0.push((e.target, e.kind));
        }
    }

    let mut clock = ManualClock::default();
    let mut sink = Recorder::default();
    let mut chart = AnimatedBarChart::new(BarLayoutSpec::default());
    {
        let mut tracer = Tracer::new(&mut sink);
        chart
            .set_data(&attendance(), None, clock.now(), &mut tracer)
            .unwrap();
        clock.advance_millis(2_000);
        chart.tick(clock.now(), &mut tracer);
    }
    assert_eq!(
        sink.0,
        [
            ("bars", AnimationEventKind::Reset),
            ("bars", AnimationEventKind::Started),
            ("bars", AnimationEventKind::Settled),
        ]
    );
}
