// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Navigation state, phases, and input events.

use crate::route::{Route, ViewportClass};

/// The externally visible navigation state.
///
/// `drawer_open` records the user's intent: it turns `true` when an open is
/// requested and `false` when a close is requested, even though the drawer
/// keeps animating afterwards. It is always `false` on desktop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavState {
    /// The selected page.
    pub active_route: Route,
    /// Whether the drawer is (or is becoming) open.
    pub drawer_open: bool,
    /// Current width class.
    pub viewport: ViewportClass,
}

impl NavState {
    /// Creates the state at mount: drawer closed.
    pub fn new(active_route: Route, viewport: ViewportClass) -> Self {
        Self {
            active_route,
            drawer_open: false,
            viewport,
        }
    }
}

/// Where an in-flight drawer animation is heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DrawerTarget {
    /// Sliding in.
    Open,
    /// Sliding out.
    Closed,
}

/// Presentation phase of the navigation controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavPhase {
    /// Sidebar docked; no drawer, no scrim.
    DesktopPanel,
    /// Drawer off-screen, scrim transparent and inert.
    MobileClosed,
    /// Drawer on-screen, scrim opaque and closing on tap.
    MobileOpen,
    /// Drawer moving between closed and open.
    MobileTransitioning {
        /// Where the drawer is heading.
        toward: DrawerTarget,
    },
}

impl NavPhase {
    /// Short name used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Self::DesktopPanel => "desktop-panel",
            Self::MobileClosed => "mobile-closed",
            Self::MobileOpen => "mobile-open",
            Self::MobileTransitioning {
                toward: DrawerTarget::Open,
            } => "opening",
            Self::MobileTransitioning {
                toward: DrawerTarget::Closed,
            } => "closing",
        }
    }

    /// Returns `true` if an open request would do something.
    pub fn can_open(self) -> bool {
        matches!(
            self,
            Self::MobileClosed
                | Self::MobileTransitioning {
                    toward: DrawerTarget::Closed
                }
        )
    }

    /// Returns `true` if a close request would do something.
    pub fn can_close(self) -> bool {
        matches!(
            self,
            Self::MobileOpen
                | Self::MobileTransitioning {
                    toward: DrawerTarget::Open
                }
        )
    }
}

/// Why the drawer is being closed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CloseReason {
    /// The scrim was tapped.
    ScrimTap,
    /// An explicit close (or menu toggle) button was pressed.
    Button,
    /// A route was selected from the drawer.
    RouteSelected,
}

impl CloseReason {
    /// Short name used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Self::ScrimTap => "scrim-tap",
            Self::Button => "close-button",
            Self::RouteSelected => "route-selected",
        }
    }
}

/// Input to [`NavController::handle`](crate::NavController::handle).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavEvent {
    /// The viewport was measured at this width.
    Resize(f64),
    /// The menu button asked for the drawer.
    OpenRequested,
    /// Something asked for the drawer to go away.
    CloseRequested(CloseReason),
    /// The menu button was pressed while it toggles.
    ToggleRequested,
    /// A page was picked in the sidebar or drawer.
    RouteSelected(Route),
    /// A frame elapsed.
    Tick,
}

/// A phase transition reported by the controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseChange {
    /// Phase before the event.
    pub from: NavPhase,
    /// Phase after the event.
    pub to: NavPhase,
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    extern crate std;

    use super::*;

    #[test]
    fn state_serializes_with_snake_case_tags() {
        let state = NavState {
            active_route: Route::Planner,
            drawer_open: true,
            viewport: ViewportClass::Mobile,
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"active_route":"planner","drawer_open":true,"viewport":"mobile"}"#
        );
        let back: NavState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
