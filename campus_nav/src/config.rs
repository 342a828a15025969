// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use campus_motion::{Easing, Timing};

use crate::route::ViewportClass;

/// Breakpoint, sidebar size, and drawer timings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavConfig {
    /// Viewports at least this wide dock the sidebar.
    pub breakpoint: f64,
    /// Sidebar (and drawer) width.
    pub sidebar_width: f64,
    /// Drawer slide-in.
    pub open_drawer: Timing,
    /// Scrim fade-in.
    pub open_scrim: Timing,
    /// Drawer slide-out and scrim fade-out.
    pub close: Timing,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            breakpoint: 768.0,
            sidebar_width: 242.0,
            open_drawer: Timing::from_millis(300).with_easing(Easing::EaseOut),
            open_scrim: Timing::from_millis(250),
            close: Timing::from_millis(200),
        }
    }
}

impl NavConfig {
    /// Sets the desktop breakpoint.
    pub fn with_breakpoint(mut self, breakpoint: f64) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    /// Sets the sidebar width.
    pub fn with_sidebar_width(mut self, sidebar_width: f64) -> Self {
        self.sidebar_width = sidebar_width.max(0.0);
        self
    }

    /// Sets the drawer and scrim opening timings.
    pub fn with_open_timings(mut self, drawer: Timing, scrim: Timing) -> Self {
        self.open_drawer = drawer;
        self.open_scrim = scrim;
        self
    }

    /// Sets the closing timing shared by drawer and scrim.
    pub fn with_close_timing(mut self, close: Timing) -> Self {
        self.close = close;
        self
    }

    /// Classifies a viewport width against the breakpoint.
    pub fn classify(&self, width: f64) -> ViewportClass {
        ViewportClass::classify(width, self.breakpoint)
    }
}
