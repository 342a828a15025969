// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Diagnostics hooks for animation and state-machine activity.
//!
//! Instrumented code reports through a [`Tracer`], which wraps an optional
//! `&mut dyn TraceSink`. When the `trace` feature is **off**, every `Tracer`
//! method compiles to nothing. When **on**, each method performs a single
//! `Option` branch before dispatching.
//!
//! Event payloads use `&'static str` names rather than concrete types so that
//! downstream crates (charts, navigation) can report their own states without
//! this crate knowing about them.

use crate::time::Timestamp;

/// What happened to a group animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationEventKind {
    /// Tracks were started toward a new target.
    Started,
    /// The last in-flight track reached its target.
    Settled,
    /// In-flight tracks were abandoned where they were.
    Cancelled,
    /// Tracks were returned to rest before replaying.
    Reset,
}

/// Emitted when a group animation changes state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnimationEvent {
    /// Name of the animated target (e.g. `"bars"`, `"drawer"`).
    pub target: &'static str,
    /// What happened.
    pub kind: AnimationEventKind,
    /// Frame time at which it happened.
    pub at: Timestamp,
    /// Number of tracks in the group.
    pub tracks: usize,
}

/// Emitted when a state machine moves between named states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEvent {
    /// Name of the state machine (e.g. `"nav"`).
    pub machine: &'static str,
    /// State before the transition.
    pub from: &'static str,
    /// State after the transition.
    pub to: &'static str,
    /// What caused the transition.
    pub cause: &'static str,
    /// Frame time at which it happened.
    pub at: Timestamp,
}

/// Receives trace events.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when a group animation starts, settles, is cancelled, or resets.
    fn on_animation(&mut self, e: &AnimationEvent) {
        _ = e;
    }

    /// Called when a state machine changes state.
    fn on_transition(&mut self, e: &TransitionEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`AnimationEvent`].
    #[inline]
    pub fn animation(&mut self, e: &AnimationEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_animation(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`TransitionEvent`].
    #[inline]
    pub fn transition(&mut self, e: &TransitionEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_transition(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}
