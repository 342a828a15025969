// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entrance timings used by the dashboard charts.
//!
//! All presets use [`Easing::STANDARD`](campus_motion::Easing::STANDARD).

use core::time::Duration;

use campus_motion::{Stagger, Timing};

/// Primary bars: 550 ms each, 80 ms apart.
pub const BAR_GROWTH: Stagger = Stagger::from_millis(550, 80);

/// Comparison bars trail their primary bar by 40 ms.
pub const GHOST_GROWTH: Stagger = BAR_GROWTH.with_delay(Duration::from_millis(40));

/// The line stroke draws in over 800 ms.
pub const LINE_DRAW: Timing = Timing::from_millis(800);

/// Point markers pop in 100 ms apart, 300 ms each.
pub const DOT_REVEAL: Stagger = Stagger::from_millis(300, 100);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_trails_primary_bar() {
        let bar = BAR_GROWTH.timing(2);
        let ghost = GHOST_GROWTH.timing(2);
        assert_eq!(bar.delay, Duration::from_millis(160));
        assert_eq!(ghost.delay, Duration::from_millis(200));
        assert_eq!(bar.duration, ghost.duration);
    }

    #[test]
    fn dots_cascade_by_index() {
        assert_eq!(DOT_REVEAL.timing(0).delay, Duration::ZERO);
        assert_eq!(DOT_REVEAL.timing(4).total(), Duration::from_millis(700));
        assert_eq!(LINE_DRAW.total(), Duration::from_millis(800));
    }
}
