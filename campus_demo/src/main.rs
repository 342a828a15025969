// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plays the dashboard animations on a simulated clock and writes SVG
//! snapshots of selected frames.

mod svg;

use std::io;
use std::path::{Path, PathBuf};

use campus_charts::{
    AnimatedBarChart, AnimatedLineChart, BarLayoutSpec, DonutLayoutSpec, DonutSegment,
    LineLayoutSpec, Series,
};
use campus_motion::{
    AnimationEvent, Clock, ManualClock, SystemClock, TickOutcome, Timestamp, TraceSink, Tracer,
    TransitionEvent,
};
use campus_nav::{CloseReason, NavConfig, NavController, NavEvent, Route, SurfaceKind, z_order};
use kurbo::{Affine, Circle, Point, Rect, Vec2};
use peniko::Color;
use peniko::color::palette::css;

use crate::svg::{SvgDoc, TextAnchor};

/// One frame at 60 Hz, rounded down.
const FRAME_MS: u64 = 16;

const ANALYTICS_BARS: [(&str, f64); 5] = [
    ("CS101", 78.0),
    ("CS201", 65.0),
    ("CS304", 88.0),
    ("CS401", 72.0),
    ("CS501", 60.0),
];
const GHOST_BARS: [f64; 5] = [65.0, 70.0, 75.0, 68.0, 55.0];

const ANALYTICS_LINE: [(&str, f64); 6] = [
    ("Jan", 20.0),
    ("Feb", 72.0),
    ("Mar", 68.0),
    ("Apr", 80.0),
    ("May", 75.0),
    ("Jun", 88.0),
];
const ANALYTICS_LINE_ALT: [f64; 6] = [55.0, 60.0, 70.0, 65.0, 82.0, 78.0];

const ATTENDANCE_BARS: [(&str, f64); 5] = [
    ("Mon", 92.0),
    ("Tue", 88.0),
    ("Wed", 95.0),
    ("Thu", 79.0),
    ("Fri", 84.0),
];
const ATTENDANCE_GHOST: [f64; 5] = [80.0, 75.0, 85.0, 70.0, 78.0];

const BAR: Color = Color::from_rgb8(0x63, 0x66, 0xf1);
const GHOST: Color = Color::from_rgb8(0x2e, 0x2c, 0x70);
const LINE: Color = Color::from_rgb8(0x06, 0xb6, 0xd4);
const LINE_ALT: Color = Color::from_rgb8(0x8b, 0x5c, 0xf6);
const SURFACE: Color = Color::from_rgb8(0x0f, 0x11, 0x1a);
const PANEL: Color = Color::from_rgb8(0x16, 0x18, 0x25);
const GRID: Color = Color::from_rgb8(0x2a, 0x2d, 0x3e);
const MUTED: Color = Color::from_rgb8(0x8b, 0x8f, 0xa8);

/// Prints every animation and navigation event as it happens.
#[derive(Debug, Default)]
struct PrintSink {
    events: usize,
}

impl TraceSink for PrintSink {
    fn on_animation(&mut self, e: &AnimationEvent) {
        self.events += 1;
        println!(
            "{:>6} ms  {:<8} {:?} ({} tracks)",
            millis(e.at),
            e.target,
            e.kind,
            e.tracks
        );
    }

    fn on_transition(&mut self, e: &TransitionEvent) {
        self.events += 1;
        println!(
            "{:>6} ms  {:<8} {} -> {} ({})",
            millis(e.at),
            e.machine,
            e.from,
            e.to,
            e.cause
        );
    }
}

fn millis(at: Timestamp) -> u64 {
    at.as_nanos() / 1_000_000
}

fn main() -> io::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from("campus_demo_out"), PathBuf::from);
    std::fs::create_dir_all(&out_dir)?;

    let wall = SystemClock::new();
    let mut sink = PrintSink::default();
    let mut written = 0;
    {
        let mut tracer = Tracer::new(&mut sink);
        println!("-- analytics bars");
        written += bar_demo(&out_dir, "analytics", &ANALYTICS_BARS, &GHOST_BARS, &mut tracer)?;
        println!("-- attendance bars");
        written += bar_demo(
            &out_dir,
            "attendance",
            &ATTENDANCE_BARS,
            &ATTENDANCE_GHOST,
            &mut tracer,
        )?;
        println!("-- analytics line");
        written += line_demo(&out_dir, &mut tracer)?;
        written += donut_demo(&out_dir)?;
        println!("-- navigation");
        written += nav_demo(&out_dir, &mut tracer)?;
    }

    println!(
        "wrote {written} files to {} ({} events, {} ms)",
        out_dir.display(),
        sink.events,
        millis(wall.now())
    );
    Ok(())
}

/// Steps `clock` one frame at a time up to `until_ms`, calling `frame` after
/// each step.
fn run_until(clock: &mut ManualClock, until_ms: u64, mut frame: impl FnMut(Timestamp)) {
    let until = Timestamp::from_millis(until_ms);
    while clock.now() < until {
        let next = millis(clock.now()) + FRAME_MS;
        clock.set(Timestamp::from_millis(next.min(until_ms)));
        frame(clock.now());
    }
}

fn write_svg(out_dir: &Path, name: &str, doc: &SvgDoc) -> io::Result<usize> {
    let path = out_dir.join(name);
    std::fs::write(&path, doc.to_svg_string())?;
    println!("        wrote {}", path.display());
    Ok(1)
}

fn layout_error(e: campus_charts::LayoutError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, e)
}

fn bar_demo(
    out_dir: &Path,
    name: &str,
    bars: &[(&str, f64)],
    ghosts: &[f64],
    tracer: &mut Tracer<'_>,
) -> io::Result<usize> {
    let series = Series::from_pairs(bars.iter().copied());
    let comparison = Series::from_pairs(bars.iter().zip(ghosts).map(|(&(l, _), &g)| (l, g)));
    let mut chart = AnimatedBarChart::new(BarLayoutSpec::default());
    let mut clock = ManualClock::default();
    chart
        .set_data(&series, Some(&comparison), clock.now(), tracer)
        .map_err(layout_error)?;

    let mut written = 0;
    for snapshot in [120, 400, 1_000] {
        run_until(&mut clock, snapshot, |now| {
            chart.tick(now, tracer);
        });
        let doc = render_bars(&chart);
        written += write_svg(out_dir, &format!("{name}_bars_{snapshot:04}ms.svg"), &doc)?;
    }

    // Same values again: nothing replays.
    let replayed = chart
        .set_data(&series, Some(&comparison), clock.now(), tracer)
        .map_err(layout_error)?;
    println!("        same data replayed: {replayed}");
    Ok(written)
}

fn render_bars(chart: &AnimatedBarChart) -> SvgDoc {
    let spec = *chart.layout().spec();
    let origin = Vec2::new(40.0, 20.0);
    let mut doc = SvgDoc::new(Rect::new(
        0.0,
        0.0,
        spec.plot_width + 60.0,
        spec.max_height + 50.0,
    ))
    .with_background(SURFACE);

    for grid in chart.layout().grid_lines() {
        let y = origin.y + grid.y;
        doc.line(
            0,
            Point::new(origin.x, y),
            Point::new(origin.x + spec.plot_width, y),
            GRID,
            1.0,
        );
        doc.text(
            1,
            Point::new(origin.x - 6.0, y - 5.0),
            9.0,
            TextAnchor::End,
            &grid.value.to_string(),
            MUTED,
        );
    }

    for frame in chart.frame() {
        if let Some(ghost) = frame.ghost {
            doc.rect(2, ghost + origin, GHOST);
        }
        doc.rect(3, frame.bar + origin, BAR);
        doc.text(
            4,
            Point::new(frame.bar.center().x + origin.x, origin.y + spec.max_height + 6.0),
            10.0,
            TextAnchor::Middle,
            frame.label,
            MUTED,
        );
    }
    doc
}

fn line_demo(out_dir: &Path, tracer: &mut Tracer<'_>) -> io::Result<usize> {
    let series = Series::from_pairs(ANALYTICS_LINE);
    let comparison = Series::from_pairs(
        ANALYTICS_LINE
            .iter()
            .zip(ANALYTICS_LINE_ALT)
            .map(|(&(l, _), v)| (l, v)),
    );
    let mut chart = AnimatedLineChart::new(LineLayoutSpec::default());
    let mut clock = ManualClock::default();
    chart
        .set_data(&series, Some(&comparison), clock.now(), tracer)
        .map_err(layout_error)?;

    let mut written = 0;
    for snapshot in [200, 600, 1_000, 1_800] {
        let mut outcome = TickOutcome::Idle;
        run_until(&mut clock, snapshot, |now| {
            outcome = chart.tick(now, tracer);
        });
        println!("        {snapshot} ms: {outcome:?}");
        let doc = render_line(&chart);
        written += write_svg(out_dir, &format!("analytics_line_{snapshot:04}ms.svg"), &doc)?;
    }
    Ok(written)
}

fn render_line(chart: &AnimatedLineChart) -> SvgDoc {
    let layout = chart.layout();
    let spec = *layout.spec();
    let origin = Vec2::new(10.0, 10.0);
    let shift = Affine::translate(origin);
    let mut doc = SvgDoc::new(Rect::new(0.0, 0.0, spec.width + 20.0, spec.height + 40.0))
        .with_background(SURFACE);

    for y in layout.grid_ys() {
        doc.line(
            0,
            Point::new(origin.x, origin.y + y),
            Point::new(origin.x + spec.width, origin.y + y),
            GRID,
            1.0,
        );
    }

    let frame = chart.frame();
    if let Some(comparison) = &frame.comparison {
        doc.path(1, &(shift * comparison.clone()), None, Some((LINE_ALT, 1.5)));
    }
    doc.path(2, &(shift * frame.path.clone()), None, Some((LINE, 2.0)));
    for dot in &frame.dots {
        doc.circle(
            3,
            Circle::new(dot.center + origin, dot.radius),
            Some(LINE.multiply_alpha(dot.opacity)),
            Some((SURFACE, 1.5)),
        );
    }
    for (anchor, point) in layout.label_anchors().into_iter().zip(&layout.primary.points) {
        doc.text(
            4,
            anchor + origin,
            9.0,
            TextAnchor::Middle,
            &point.label,
            MUTED,
        );
    }
    doc
}

fn donut_demo(out_dir: &Path) -> io::Result<usize> {
    let segments = [
        DonutSegment::new("Present", 82.0, Color::from_rgb8(0x10, 0xb9, 0x81)),
        DonutSegment::new("Late", 10.0, Color::from_rgb8(0xf5, 0x9e, 0x0b)),
        DonutSegment::new("Absent", 8.0, Color::from_rgb8(0xef, 0x44, 0x44)),
    ];
    let layout = DonutLayoutSpec::default().layout(&segments);
    let size = layout.spec().size;
    let mut doc = SvgDoc::new(Rect::new(0.0, 0.0, size + 110.0, size)).with_background(SURFACE);

    doc.circle(0, layout.track(), None, Some((GRID, layout.spec().thickness)));
    for arc in &layout.arcs {
        doc.path(1, &arc.ring_path(0.1), Some(arc.color), None);
    }
    let center = layout.center();
    doc.text(
        2,
        center - Vec2::new(0.0, 12.0),
        16.0,
        TextAnchor::Middle,
        &layout.center_label.value,
        css::WHITE,
    );
    doc.text(
        2,
        center + Vec2::new(0.0, 6.0),
        9.0,
        TextAnchor::Middle,
        &layout.center_label.caption,
        MUTED,
    );
    for (i, arc) in layout.arcs.iter().enumerate() {
        let y = 30.0 + 22.0 * i as f64;
        doc.circle(2, Circle::new((size + 14.0, y + 5.0), 4.0), Some(arc.color), None);
        doc.text(
            2,
            Point::new(size + 24.0, y),
            10.0,
            TextAnchor::Start,
            &format!("{} {}%", arc.label, arc.percentage),
            MUTED,
        );
    }
    write_svg(out_dir, "attendance_donut.svg", &doc)
}

fn nav_demo(out_dir: &Path, tracer: &mut Tracer<'_>) -> io::Result<usize> {
    let mut clock = ManualClock::default();
    let mut nav = NavController::new(375.0, NavConfig::default());
    let mut written = write_svg(out_dir, "nav_0000ms_closed.svg", &render_nav(&nav, 375.0))?;

    nav.handle(NavEvent::OpenRequested, clock.now(), tracer);
    run_until(&mut clock, 150, |now| {
        nav.handle(NavEvent::Tick, now, tracer);
    });
    written += write_svg(out_dir, "nav_0150ms_opening.svg", &render_nav(&nav, 375.0))?;

    run_until(&mut clock, 400, |now| {
        nav.handle(NavEvent::Tick, now, tracer);
    });
    written += write_svg(out_dir, "nav_0400ms_open.svg", &render_nav(&nav, 375.0))?;

    // Picking a page from the drawer closes it.
    nav.handle(NavEvent::RouteSelected(Route::Planner), clock.now(), tracer);
    run_until(&mut clock, 500, |now| {
        nav.handle(NavEvent::Tick, now, tracer);
    });
    written += write_svg(out_dir, "nav_0500ms_closing.svg", &render_nav(&nav, 375.0))?;

    // Reopen, then tap the scrim halfway through.
    run_until(&mut clock, 700, |now| {
        nav.handle(NavEvent::Tick, now, tracer);
    });
    nav.handle(NavEvent::ToggleRequested, clock.now(), tracer);
    run_until(&mut clock, 850, |now| {
        nav.handle(NavEvent::Tick, now, tracer);
    });
    nav.handle(
        NavEvent::CloseRequested(CloseReason::ScrimTap),
        clock.now(),
        tracer,
    );
    run_until(&mut clock, 1_200, |now| {
        nav.handle(NavEvent::Tick, now, tracer);
    });

    // Open again and rotate to a tablet width mid-animation.
    nav.handle(NavEvent::OpenRequested, clock.now(), tracer);
    run_until(&mut clock, 1_300, |now| {
        nav.handle(NavEvent::Tick, now, tracer);
    });
    nav.handle(NavEvent::Resize(1_024.0), clock.now(), tracer);
    written += write_svg(out_dir, "nav_1300ms_desktop.svg", &render_nav(&nav, 1_024.0))?;

    println!("        final state: {:?}", nav.state());
    Ok(written)
}

fn render_nav(nav: &NavController, width: f64) -> SvgDoc {
    const HEIGHT: f64 = 480.0;
    let p = nav.presentation();
    let active = nav.state().active_route;
    let mut doc = SvgDoc::new(Rect::new(0.0, 0.0, width, HEIGHT)).with_background(SURFACE);

    let (sidebar_x, content_x) = match p.surface {
        SurfaceKind::DesktopPanel => (0.0, p.sidebar_width),
        SurfaceKind::MobileClosed | SurfaceKind::MobileOpen => (p.drawer_offset, 0.0),
    };

    doc.text(
        z_order::CONTENT,
        Point::new(content_x + 16.0, 16.0),
        16.0,
        TextAnchor::Start,
        active.label(),
        css::WHITE,
    );
    if p.style.menu_button {
        doc.text(
            z_order::CONTENT,
            Point::new(width - 16.0, 16.0),
            16.0,
            TextAnchor::End,
            "Menu",
            MUTED,
        );
    }

    if p.style.overlay_mounted {
        doc.rect(
            z_order::SCRIM,
            Rect::new(0.0, 0.0, width, HEIGHT),
            p.scrim_fill(),
        );
    }

    let sidebar_z = if p.style.sidebar_docked {
        z_order::CONTENT
    } else {
        z_order::DRAWER
    };
    if p.style.sidebar_docked || p.style.overlay_mounted {
        doc.rect(
            sidebar_z,
            Rect::new(sidebar_x, 0.0, sidebar_x + p.sidebar_width, HEIGHT),
            PANEL,
        );
        for (i, route) in Route::ALL.iter().enumerate() {
            let y = 56.0 + 32.0 * i as f64;
            let fill = if *route == active { route.accent() } else { MUTED };
            doc.circle(
                sidebar_z,
                Circle::new((sidebar_x + 24.0, y + 6.0), 4.0),
                Some(route.accent()),
                None,
            );
            doc.text(
                sidebar_z,
                Point::new(sidebar_x + 38.0, y),
                12.0,
                TextAnchor::Start,
                route.label(),
                fill,
            );
        }
    }
    doc
}
