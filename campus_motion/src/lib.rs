// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven animation primitives for the Campus360 dashboard.
//!
//! Nothing in this crate owns a timer. Callers read a [`Timestamp`] from a
//! [`Clock`] once per frame and hand it to [`Sequencer::tick`], which advances
//! every in-flight track and reports whether anything is still moving.
//!
//! - **[`time`]**: monotonic [`Timestamp`]s and clock sources.
//! - **[`easing`]**: easing curves mapping linear time to eased progress.
//! - **[`timing`]**: per-track [`Timing`] and group-level [`Stagger`].
//! - **[`sequencer`]**: the [`Sequencer`] state machine.
//! - **[`trace`]**: optional diagnostics hooks.
//!
//! # Crate features
//!
//! - `std` (disabled by default): enables [`SystemClock`].
//! - `trace` (disabled by default): enables the [`Tracer`] method bodies.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod easing;
pub mod sequencer;
pub mod time;
pub mod timing;
pub mod trace;

pub use easing::Easing;
pub use sequencer::{Sequencer, TickOutcome, interpolate};
#[cfg(feature = "std")]
pub use time::SystemClock;
pub use time::{Clock, ManualClock, Timestamp};
pub use timing::{Stagger, Timing};
pub use trace::{
    AnimationEvent, AnimationEventKind, NoopSink, TraceSink, Tracer, TransitionEvent,
};
