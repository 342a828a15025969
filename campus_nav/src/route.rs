// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed set of dashboard pages.

use peniko::Color;

/// A dashboard page reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Route {
    /// Overview page (the landing route).
    #[default]
    Dashboard,
    /// Performance trends.
    Analytics,
    /// Attendance marking.
    Attendance,
    /// Assignment tracking.
    Assignments,
    /// Lesson planning.
    Planner,
    /// Exam management.
    Exam,
}

impl Route {
    /// Every route in sidebar order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Analytics,
        Self::Attendance,
        Self::Assignments,
        Self::Planner,
        Self::Exam,
    ];

    /// Stable identifier, e.g. `"planner"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Analytics => "analytics",
            Self::Attendance => "attendance",
            Self::Assignments => "assignments",
            Self::Planner => "planner",
            Self::Exam => "exam",
        }
    }

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Analytics => "Analytics",
            Self::Attendance => "Attendance",
            Self::Assignments => "Assignments",
            Self::Planner => "Lesson Planner",
            Self::Exam => "Exam Mgmt",
        }
    }

    /// Accent used for the route's icon tile.
    pub fn accent(self) -> Color {
        match self {
            Self::Dashboard => Color::from_rgb8(0x5B, 0x5F, 0xEF),
            Self::Analytics => Color::from_rgb8(0x06, 0xB6, 0xD4),
            Self::Attendance => Color::from_rgb8(0x10, 0xB9, 0x81),
            Self::Assignments => Color::from_rgb8(0xF5, 0x9E, 0x0B),
            Self::Planner => Color::from_rgb8(0x8B, 0x5C, 0xF6),
            Self::Exam => Color::from_rgb8(0xEF, 0x44, 0x44),
        }
    }

    /// Looks a route up by [`Route::id`].
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }
}

/// Width class of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ViewportClass {
    /// Narrower than the breakpoint: the sidebar lives in a drawer.
    Mobile,
    /// At least as wide as the breakpoint: the sidebar is docked.
    Desktop,
}

impl ViewportClass {
    /// Classifies `width` against `breakpoint`.
    ///
    /// Widths at or above the breakpoint are desktop; anything else,
    /// including NaN, is mobile.
    pub fn classify(width: f64, breakpoint: f64) -> Self {
        if width >= breakpoint {
            Self::Desktop
        } else {
            Self::Mobile
        }
    }

    /// Returns `true` for [`ViewportClass::Mobile`].
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_lookup() {
        for route in Route::ALL {
            assert_eq!(Route::from_id(route.id()), Some(route));
        }
        assert_eq!(Route::from_id("grades"), None);
        assert_eq!(Route::default(), Route::Dashboard);
        assert_eq!(Route::Planner.label(), "Lesson Planner");
    }

    #[test]
    fn breakpoint_width_is_desktop() {
        assert_eq!(ViewportClass::classify(768.0, 768.0), ViewportClass::Desktop);
        assert_eq!(ViewportClass::classify(767.9, 768.0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::classify(f64::NAN, 768.0), ViewportClass::Mobile);
        assert!(ViewportClass::classify(320.0, 768.0).is_mobile());
    }
}
