// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-track timing and group stagger descriptions.

use core::time::Duration;

use crate::easing::Easing;

/// When and how fast a single track moves.
///
/// The delay is measured from the moment the track is started; the easing is
/// applied to linear progress through `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Timing {
    /// How long the track takes once it begins moving.
    pub duration: Duration,
    /// How long the track waits after being started before moving.
    pub delay: Duration,
    /// Curve applied to linear progress.
    pub easing: Easing,
}

impl Timing {
    /// Creates a timing with no delay and [`Easing::STANDARD`].
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing: Easing::STANDARD,
        }
    }

    /// Creates a timing of `millis` milliseconds with no delay.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Sets the start delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Total time from start until the track settles.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.delay.saturating_add(self.duration)
    }

    /// Linear progress in `[0, 1]` after `elapsed` time since the track started.
    ///
    /// A zero-length duration jumps straight to `1` once the delay has passed.
    #[must_use]
    pub fn linear_progress(&self, elapsed: Duration) -> f64 {
        let Some(active) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (active.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Eased progress after `elapsed` time since the track started.
    #[must_use]
    pub fn eased_progress(&self, elapsed: Duration) -> f64 {
        self.easing.apply(self.linear_progress(elapsed))
    }
}

/// A cascading group timing: element `i` starts `delay + i * stagger` after
/// the group is started, and every element runs for `duration`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    /// Per-element run time.
    pub duration: Duration,
    /// Extra delay added per element index.
    pub stagger: Duration,
    /// Delay applied to every element, including the first.
    pub delay: Duration,
    /// Curve applied to every element.
    pub easing: Easing,
}

impl Stagger {
    /// Creates a stagger with no base delay and [`Easing::STANDARD`].
    #[must_use]
    pub const fn new(duration: Duration, stagger: Duration) -> Self {
        Self {
            duration,
            stagger,
            delay: Duration::ZERO,
            easing: Easing::STANDARD,
        }
    }

    /// Creates a stagger from millisecond values.
    #[must_use]
    pub const fn from_millis(duration: u64, stagger: u64) -> Self {
        Self::new(Duration::from_millis(duration), Duration::from_millis(stagger))
    }

    /// Sets the base delay applied to every element.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Sets the easing curve.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Returns the timing for the element at `index`.
    #[must_use]
    pub fn timing(&self, index: usize) -> Timing {
        let steps = u32::try_from(index).unwrap_or(u32::MAX);
        let offset = self.stagger.checked_mul(steps).unwrap_or(Duration::MAX);
        Timing {
            duration: self.duration,
            delay: self.delay.saturating_add(offset),
            easing: self.easing,
        }
    }
}
