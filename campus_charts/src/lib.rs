// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry for the Campus360 dashboard.
//!
//! This crate turns data series into plain geometry that any rendering
//! surface can paint:
//! - **Layouts** ([`BarLayoutSpec`], [`LineLayoutSpec`], [`DonutLayoutSpec`])
//!   are pure functions from a borrowed [`Series`] to settled geometry.
//! - **Drivers** ([`AnimatedBarChart`], [`AnimatedLineChart`]) pair a layout
//!   with `campus_motion` sequencers and yield per-frame geometry.
//!
//! Coordinates are plot-local with y growing downward. Painting, text
//! shaping and theming are out of scope.
//!
//! # Crate features
//!
//! - `std` (disabled by default): float math through `std`.
//! - `libm` (enabled by default): float math through `libm` for `no_std`.
//! - `trace` (disabled by default): forwards to `campus_motion/trace`.

#![no_std]

extern crate alloc;

mod animated;
mod bar_layout;
mod donut_layout;
mod error;
mod line_layout;
pub mod presets;
mod scale;
#[cfg(test)]
mod scenario_tests;
mod series;

pub use animated::{AnimatedBarChart, AnimatedLineChart, BarFrame, DotFrame, LineFrame};
pub use bar_layout::{BarColumn, BarLayout, BarLayoutSpec, GhostBar, GridLine};
pub use donut_layout::{CenterLabel, DonutArc, DonutLayout, DonutLayoutSpec, HalfArc};
pub use error::LayoutError;
pub use line_layout::{LineLayout, LineLayoutSpec, LinePoint, LineSegment, LineTrace};
pub use scale::{ScaleBand, ScaleLinear, ScalePoint};
pub use series::{DataPoint, DonutSegment, Series};
