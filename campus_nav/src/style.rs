// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-surface presentation records.
//!
//! Each navigation surface maps to one fixed [`SurfaceStyle`]; there is no
//! merging of partial styles at runtime.

use peniko::Color;
use peniko::color::palette::css;

/// Paint order of the mobile overlay layers.
pub mod z_order {
    /// Page content.
    pub const CONTENT: i32 = 0;
    /// The dimming scrim over the content.
    pub const SCRIM: i32 = 10;
    /// The drawer above the scrim.
    pub const DRAWER: i32 = 20;
}

/// Peak opacity of the scrim color.
pub const SCRIM_ALPHA: f32 = 0.55;

/// Which way the sidebar is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    /// Sidebar docked beside the content.
    DesktopPanel,
    /// Drawer hidden off-screen.
    MobileClosed,
    /// Drawer on screen (or on its way in or out).
    MobileOpen,
}

/// How a surface is composed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceStyle {
    /// The sidebar takes part in the row layout beside the content.
    pub sidebar_docked: bool,
    /// A hamburger button is shown in the top bar.
    pub menu_button: bool,
    /// The drawer and scrim are mounted.
    pub overlay_mounted: bool,
    /// The scrim receives taps (and closes the drawer).
    pub scrim_interactive: bool,
    /// Scrim color at full opacity.
    pub scrim_color: Color,
    /// Paint order of the scrim.
    pub scrim_z: i32,
    /// Paint order of the drawer.
    pub drawer_z: i32,
}

impl SurfaceKind {
    /// Returns the style record for this surface.
    pub fn style(self) -> SurfaceStyle {
        let scrim_color = css::BLACK.with_alpha(SCRIM_ALPHA);
        match self {
            Self::DesktopPanel => SurfaceStyle {
                sidebar_docked: true,
                menu_button: false,
                overlay_mounted: false,
                scrim_interactive: false,
                scrim_color,
                scrim_z: z_order::CONTENT,
                drawer_z: z_order::CONTENT,
            },
            Self::MobileClosed => SurfaceStyle {
                sidebar_docked: false,
                menu_button: true,
                overlay_mounted: false,
                scrim_interactive: false,
                scrim_color,
                scrim_z: z_order::SCRIM,
                drawer_z: z_order::DRAWER,
            },
            Self::MobileOpen => SurfaceStyle {
                sidebar_docked: false,
                menu_button: true,
                overlay_mounted: true,
                scrim_interactive: true,
                scrim_color,
                scrim_z: z_order::SCRIM,
                drawer_z: z_order::DRAWER,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_open_drawer_mounts_the_overlay() {
        assert!(SurfaceKind::DesktopPanel.style().sidebar_docked);
        assert!(!SurfaceKind::DesktopPanel.style().menu_button);
        assert!(!SurfaceKind::MobileClosed.style().overlay_mounted);

        let open = SurfaceKind::MobileOpen.style();
        assert!(open.overlay_mounted && open.scrim_interactive);
        assert!(open.drawer_z > open.scrim_z);
        assert_eq!(open.scrim_z, 10);
        assert_eq!(open.drawer_z, 20);
        assert!((open.scrim_color.components[3] - SCRIM_ALPHA).abs() < 1e-6);
    }
}
