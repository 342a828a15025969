// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Responsive navigation for the Campus360 dashboard.
//!
//! Wide viewports dock the sidebar beside the page; narrow ones hide it in a
//! drawer that slides over a dimming scrim. [`NavController`] owns the
//! [`NavState`], classifies viewport widths, animates the drawer with a
//! `campus_motion` sequencer, and reports a [`Presentation`] per frame.
//!
//! ```
//! use campus_motion::{Timestamp, Tracer};
//! use campus_nav::{NavConfig, NavController, NavEvent, NavPhase};
//!
//! let mut nav = NavController::new(375.0, NavConfig::default());
//! let mut tracer = Tracer::none();
//! nav.handle(NavEvent::OpenRequested, Timestamp::ZERO, &mut tracer);
//! nav.handle(NavEvent::Tick, Timestamp::from_millis(1_000), &mut tracer);
//! assert_eq!(nav.phase(), NavPhase::MobileOpen);
//! assert_eq!(nav.presentation().drawer_offset, 0.0);
//! ```
//!
//! # Crate features
//!
//! - `std` (disabled by default): color math through `std`.
//! - `libm` (enabled by default): color math through `libm` for `no_std`.
//! - `serde` (disabled by default): `Serialize`/`Deserialize` for the state
//!   types.
//! - `trace` (disabled by default): forwards to `campus_motion/trace`.

#![no_std]

mod config;
mod controller;
mod route;
mod state;
mod style;

pub use config::NavConfig;
pub use controller::{NavController, Presentation};
pub use route::{Route, ViewportClass};
pub use state::{CloseReason, DrawerTarget, NavEvent, NavPhase, NavState, PhaseChange};
pub use style::{SCRIM_ALPHA, SurfaceKind, SurfaceStyle, z_order};
