// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The responsive navigation state machine.

use campus_motion::{
    AnimationEvent, AnimationEventKind, Sequencer, TickOutcome, Timestamp, Tracer,
    TransitionEvent,
};
use peniko::Color;

use crate::config::NavConfig;
use crate::route::{Route, ViewportClass};
use crate::state::{CloseReason, DrawerTarget, NavEvent, NavPhase, NavState, PhaseChange};
use crate::style::{SurfaceKind, SurfaceStyle};

const SLIDE: usize = 0;
const SCRIM: usize = 1;

/// What the rendering surface should show this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Presentation {
    /// Which surface is active.
    pub surface: SurfaceKind,
    /// Its style record.
    pub style: SurfaceStyle,
    /// Sidebar (and drawer) width.
    pub sidebar_width: f64,
    /// Horizontal drawer offset: `-sidebar_width` when hidden, `0` when shown.
    pub drawer_offset: f64,
    /// Scrim opacity in `[0, 1]`, applied on top of the style's scrim color.
    pub scrim_opacity: f32,
    /// Whether a scrim tap should be delivered as a close request.
    pub scrim_interactive: bool,
}

impl Presentation {
    /// The scrim color with the current opacity applied.
    pub fn scrim_fill(&self) -> Color {
        self.style.scrim_color.multiply_alpha(self.scrim_opacity)
    }
}

/// Owns [`NavState`] and drives the drawer animation.
///
/// Feed it [`NavEvent`]s (or call the matching methods) and one
/// [`NavEvent::Tick`] per frame; read [`NavController::presentation`] to
/// paint. Nothing runs between calls, so dropping the controller abandons any
/// drawer animation in flight.
#[derive(Clone, Debug)]
pub struct NavController {
    config: NavConfig,
    state: NavState,
    phase: NavPhase,
    drawer: Sequencer,
}

impl NavController {
    /// Machine name used for phase transition events.
    pub const MACHINE: &'static str = "nav";
    /// Machine name used for route transition events.
    pub const ROUTER: &'static str = "route";
    /// Target name used for drawer animation events.
    pub const DRAWER: &'static str = "drawer";

    /// Creates a controller for a viewport of `width`, on the landing route
    /// with the drawer closed.
    pub fn new(width: f64, config: NavConfig) -> Self {
        let viewport = config.classify(width);
        Self {
            config,
            state: NavState::new(Route::default(), viewport),
            phase: resting_phase(viewport),
            drawer: Sequencer::new([config.open_drawer, config.open_scrim]),
        }
    }

    /// Starts on `route` instead of the landing route.
    pub fn with_route(mut self, route: Route) -> Self {
        self.state.active_route = route;
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Returns the current state.
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Returns the current phase.
    pub fn phase(&self) -> NavPhase {
        self.phase
    }

    /// Returns `true` while the drawer or scrim is moving.
    pub fn is_animating(&self) -> bool {
        self.drawer.is_running()
    }

    /// Dispatches an event. Returns the phase change it caused, if any.
    pub fn handle(
        &mut self,
        event: NavEvent,
        now: Timestamp,
        tracer: &mut Tracer<'_>,
    ) -> Option<PhaseChange> {
        match event {
            NavEvent::Resize(width) => self.resize(width, now, tracer),
            NavEvent::OpenRequested => self.open(now, tracer),
            NavEvent::CloseRequested(reason) => self.close(reason, now, tracer),
            NavEvent::ToggleRequested => {
                if self.phase.can_open() {
                    self.open(now, tracer)
                } else {
                    self.close(CloseReason::Button, now, tracer)
                }
            }
            NavEvent::RouteSelected(route) => self.select_route(route, now, tracer),
            NavEvent::Tick => self.tick(now, tracer),
        }
    }

    /// Reclassifies the viewport.
    ///
    /// Crossing the breakpoint in either direction snaps the drawer closed
    /// without animating.
    pub fn resize(
        &mut self,
        width: f64,
        now: Timestamp,
        tracer: &mut Tracer<'_>,
    ) -> Option<PhaseChange> {
        let viewport = self.config.classify(width);
        if viewport == self.state.viewport {
            return None;
        }
        self.state.viewport = viewport;
        self.state.drawer_open = false;
        if self.drawer.cancel() {
            self.emit(AnimationEventKind::Cancelled, now, tracer);
        }
        self.drawer.reset();
        let cause = match viewport {
            ViewportClass::Desktop => "resize-desktop",
            ViewportClass::Mobile => "resize-mobile",
        };
        self.enter(resting_phase(viewport), cause, now, tracer)
    }

    /// Slides the drawer in. Ignored on desktop and when already open or
    /// opening; reverses a close in progress from where it is.
    pub fn open(&mut self, now: Timestamp, tracer: &mut Tracer<'_>) -> Option<PhaseChange> {
        if !self.phase.can_open() {
            return None;
        }
        self.state.drawer_open = true;
        self.drawer.set_timing(SLIDE, self.config.open_drawer);
        self.drawer.set_timing(SCRIM, self.config.open_scrim);
        self.start(1.0, now, tracer);
        self.enter(
            NavPhase::MobileTransitioning {
                toward: DrawerTarget::Open,
            },
            "open-requested",
            now,
            tracer,
        )
    }

    /// Slides the drawer out. Ignored unless open or opening.
    pub fn close(
        &mut self,
        reason: CloseReason,
        now: Timestamp,
        tracer: &mut Tracer<'_>,
    ) -> Option<PhaseChange> {
        if !self.phase.can_close() {
            return None;
        }
        self.state.drawer_open = false;
        self.drawer.set_timing(SLIDE, self.config.close);
        self.drawer.set_timing(SCRIM, self.config.close);
        self.start(0.0, now, tracer);
        self.enter(
            NavPhase::MobileTransitioning {
                toward: DrawerTarget::Closed,
            },
            reason.name(),
            now,
            tracer,
        )
    }

    /// Makes `route` active. On mobile this also closes the drawer.
    pub fn select_route(
        &mut self,
        route: Route,
        now: Timestamp,
        tracer: &mut Tracer<'_>,
    ) -> Option<PhaseChange> {
        let previous = self.state.active_route;
        self.state.active_route = route;
        if previous != route {
            tracer.transition(&TransitionEvent {
                machine: Self::ROUTER,
                from: previous.id(),
                to: route.id(),
                cause: "route-selected",
                at: now,
            });
        }
        if self.state.viewport.is_mobile() {
            self.close(CloseReason::RouteSelected, now, tracer)
        } else {
            None
        }
    }

    /// Advances the drawer animation, finishing the transition once it
    /// settles.
    pub fn tick(&mut self, now: Timestamp, tracer: &mut Tracer<'_>) -> Option<PhaseChange> {
        if self.drawer.tick(now) != TickOutcome::Settled {
            return None;
        }
        self.emit(AnimationEventKind::Settled, now, tracer);
        let NavPhase::MobileTransitioning { toward } = self.phase else {
            return None;
        };
        let rest = match toward {
            DrawerTarget::Open => NavPhase::MobileOpen,
            DrawerTarget::Closed => NavPhase::MobileClosed,
        };
        self.enter(rest, "settled", now, tracer)
    }

    /// Drawer slide progress (`0` hidden, `1` shown).
    pub fn drawer_progress(&self) -> f32 {
        self.drawer.progress(SLIDE)
    }

    /// Scrim fade progress (`0` transparent, `1` at full scrim color).
    pub fn scrim_progress(&self) -> f32 {
        self.drawer.progress(SCRIM)
    }

    /// What to paint for the current frame.
    pub fn presentation(&self) -> Presentation {
        let surface = match self.phase {
            NavPhase::DesktopPanel => SurfaceKind::DesktopPanel,
            NavPhase::MobileClosed => SurfaceKind::MobileClosed,
            NavPhase::MobileOpen | NavPhase::MobileTransitioning { .. } => SurfaceKind::MobileOpen,
        };
        let style = surface.style();
        let width = self.config.sidebar_width;
        Presentation {
            surface,
            style,
            sidebar_width: width,
            drawer_offset: campus_motion::interpolate(-width, 0.0, self.drawer_progress()),
            scrim_opacity: self.scrim_progress().clamp(0.0, 1.0),
            scrim_interactive: style.scrim_interactive && self.state.drawer_open,
        }
    }

    fn start(&mut self, target: f32, now: Timestamp, tracer: &mut Tracer<'_>) {
        if self.drawer.animate_to(target, now) {
            self.emit(AnimationEventKind::Started, now, tracer);
        }
    }

    fn enter(
        &mut self,
        to: NavPhase,
        cause: &'static str,
        now: Timestamp,
        tracer: &mut Tracer<'_>,
    ) -> Option<PhaseChange> {
        let from = self.phase;
        if from == to {
            return None;
        }
        self.phase = to;
        tracer.transition(&TransitionEvent {
            machine: Self::MACHINE,
            from: from.name(),
            to: to.name(),
            cause,
            at: now,
        });
        Some(PhaseChange { from, to })
    }

    fn emit(&self, kind: AnimationEventKind, at: Timestamp, tracer: &mut Tracer<'_>) {
        tracer.animation(&AnimationEvent {
            target: Self::DRAWER,
            kind,
            at,
            tracks: self.drawer.len(),
        });
    }
}

fn resting_phase(viewport: ViewportClass) -> NavPhase {
    match viewport {
        ViewportClass::Desktop => NavPhase::DesktopPanel,
        ViewportClass::Mobile => NavPhase::MobileClosed,
    }
}
