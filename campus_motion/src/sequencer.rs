// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group animation state machine.
//!
//! A [`Sequencer`] owns one progress value per animated element ("track").
//! Starting the sequencer schedules every track from its current value toward
//! a target; each [`Sequencer::tick`] recomputes the values from the supplied
//! frame time. Tracks are independent once started, but they are always
//! started, cancelled, and reset together.
//!
//! Progress values only ever change inside `tick`, `reset`, and `snap_to`, so
//! a frame that does not tick observes exactly the values of the last frame.

extern crate alloc;

use alloc::vec::Vec;

use crate::time::Timestamp;
use crate::timing::{Stagger, Timing};

/// What a call to [`Sequencer::tick`] observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TickOutcome {
    /// Nothing was in flight.
    Idle,
    /// At least one track is still moving.
    Running,
    /// The last in-flight track reached its target during this tick.
    Settled,
}

impl TickOutcome {
    /// Combines the outcomes of sequencers ticked together in one frame.
    ///
    /// The group is running while any member runs, and settles on the frame
    /// where its last member settles.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Running, _) | (_, Self::Running) => Self::Running,
            (Self::Settled, _) | (_, Self::Settled) => Self::Settled,
            (Self::Idle, Self::Idle) => Self::Idle,
        }
    }
}

#[derive(Clone, Debug)]
struct Track {
    timing: Timing,
    from: f32,
    to: f32,
    value: f32,
    started: Option<Timestamp>,
}

impl Track {
    fn at_rest(timing: Timing) -> Self {
        Self {
            timing,
            from: 0.0,
            to: 0.0,
            value: 0.0,
            started: None,
        }
    }

    fn is_running(&self) -> bool {
        self.started.is_some()
    }
}

/// Per-element progress values advanced by frame ticks.
#[derive(Clone, Debug, Default)]
pub struct Sequencer {
    tracks: Vec<Track>,
    key: Option<Vec<u64>>,
}

impl Sequencer {
    /// Creates a sequencer with one track per timing, all at rest (`0`).
    pub fn new(timings: impl IntoIterator<Item = Timing>) -> Self {
        Self {
            tracks: timings.into_iter().map(Track::at_rest).collect(),
            key: None,
        }
    }

    /// Creates a sequencer with `count` tracks cascading per `stagger`.
    pub fn staggered(count: usize, stagger: &Stagger) -> Self {
        Self::new((0..count).map(|i| stagger.timing(i)))
    }

    /// Returns the number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Returns `true` if there are no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Returns the progress of track `index`, or `0` if out of range.
    pub fn progress(&self, index: usize) -> f32 {
        self.tracks.get(index).map_or(0.0, |t| t.value)
    }

    /// Iterates over all progress values in track order.
    pub fn progresses(&self) -> impl Iterator<Item = f32> + '_ {
        self.tracks.iter().map(|t| t.value)
    }

    /// Returns `true` while any track is scheduled or moving.
    pub fn is_running(&self) -> bool {
        self.tracks.iter().any(Track::is_running)
    }

    /// Returns `true` if every track rests at exactly `target`.
    pub fn is_settled_at(&self, target: f32) -> bool {
        self.tracks
            .iter()
            .all(|t| !t.is_running() && t.value == target)
    }

    /// Returns the timing of track `index`.
    pub fn timing(&self, index: usize) -> Option<Timing> {
        self.tracks.get(index).map(|t| t.timing)
    }

    /// Replaces the timing of track `index`.
    ///
    /// The next tick measures the track against the new timing, so replace
    /// it before restarting the track rather than mid-flight.
    pub fn set_timing(&mut self, index: usize, timing: Timing) {
        if let Some(track) = self.tracks.get_mut(index) {
            track.timing = timing;
        }
    }

    /// Starts every track toward `1`. See [`Sequencer::animate_to`].
    pub fn animate(&mut self, now: Timestamp) -> bool {
        self.animate_to(1.0, now)
    }

    /// Starts every track from its current value toward `target` (clamped to
    /// `[0, 1]`).
    ///
    /// Tracks already resting at `target`, or already in flight toward it, are
    /// left alone, so repeating the call is a no-op. Returns `true` if any
    /// track was (re)started.
    pub fn animate_to(&mut self, target: f32, now: Timestamp) -> bool {
        let target = if target.is_nan() {
            0.0
        } else {
            target.clamp(0.0, 1.0)
        };
        let mut started = false;
        for track in &mut self.tracks {
            let heading_there = track.is_running() && track.to == target;
            let resting_there = !track.is_running() && track.value == target;
            if heading_there || resting_there {
                continue;
            }
            track.from = track.value;
            track.to = target;
            track.started = Some(now);
            started = true;
        }
        started
    }

    /// Advances every in-flight track to its value at `now`.
    pub fn tick(&mut self, now: Timestamp) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        for track in &mut self.tracks {
            let Some(started) = track.started else {
                continue;
            };
            let elapsed = now.saturating_duration_since(started);
            let linear = track.timing.linear_progress(elapsed);
            if linear >= 1.0 {
                track.value = track.to;
                track.started = None;
            } else {
                let eased = track.timing.easing.apply(linear);
                track.value = lerp_f32(track.from, track.to, eased);
            }
        }
        if self.is_running() {
            TickOutcome::Running
        } else {
            TickOutcome::Settled
        }
    }

    /// Stops every in-flight track where it is. Returns `true` if anything
    /// was in flight.
    pub fn cancel(&mut self) -> bool {
        let mut cancelled = false;
        for track in &mut self.tracks {
            cancelled |= track.started.take().is_some();
        }
        cancelled
    }

    /// Cancels everything and returns every track to rest at `0`.
    pub fn reset(&mut self) {
        self.snap_to(0.0);
    }

    /// Cancels everything and jumps every track to `target`.
    pub fn snap_to(&mut self, target: f32) {
        let target = if target.is_nan() {
            0.0
        } else {
            target.clamp(0.0, 1.0)
        };
        for track in &mut self.tracks {
            track.from = target;
            track.to = target;
            track.value = target;
            track.started = None;
        }
    }

    /// Replays the entrance animation if `values` differ from the last key.
    ///
    /// The key is compared bit-for-bit, so a data source that rebuilds an
    /// identical series every frame does not restart the animation. On a
    /// change every track is reset to `0` and started toward `1`. Returns
    /// `true` if the animation was replayed.
    pub fn rekey(&mut self, values: &[f64], now: Timestamp) -> bool {
        let same = self.key.as_deref().is_some_and(|key| {
            key.len() == values.len() && key.iter().zip(values).all(|(k, v)| *k == v.to_bits())
        });
        if same {
            return false;
        }
        self.key = Some(values.iter().map(|v| v.to_bits()).collect());
        self.reset();
        self.animate(now);
        true
    }

    /// Forgets the last key so the next [`Sequencer::rekey`] always replays.
    pub fn clear_key(&mut self) {
        self.key = None;
    }
}

/// Interpolates between `rest` and `target` by `progress`.
///
/// Progress is not clamped, matching the way overshooting easings are
/// expected to render.
#[inline]
pub fn interpolate(rest: f64, target: f64, progress: f32) -> f64 {
    rest + (target - rest) * f64::from(progress)
}

fn lerp_f32(from: f32, to: f32, t: f64) -> f32 {
    let v = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
    #[allow(
        clippy::cast_possible_truncation,
        reason = "interpolates between two f32 values in [0, 1]"
    )]
    {
        v as f32
    }
}
