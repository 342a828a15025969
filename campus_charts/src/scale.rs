// Copyright 2025 the Campus360 Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Every chart layout in this crate is a composition of these mappings:
//! bars use a [`ScaleBand`] along x and a clamped [`ScaleLinear`] for height,
//! lines use a [`ScalePoint`] along x and a [`ScaleLinear`] along y.

/// A linear mapping from a continuous domain to a continuous range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
    clamp: bool,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` values to `range` values.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self {
            domain,
            range,
            clamp: false,
        }
    }

    /// Enables or disables clamping of inputs to the domain.
    pub fn with_clamp(mut self, clamp: bool) -> Self {
        self.clamp = clamp;
        self
    }

    /// Maps a value from domain space into range space.
    ///
    /// A zero-width domain maps everything to the start of the range.
    pub fn map(&self, x: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let denom = d1 - d0;
        if denom == 0.0 {
            return r0;
        }
        let mut t = (x - d0) / denom;
        if self.clamp {
            t = t.clamp(0.0, 1.0);
        }
        r0 + t * (r1 - r0)
    }

    /// Returns the configured domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Returns the configured range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }
}

/// A discrete band scale for categorical charts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleBand {
    range: (f64, f64),
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
}

impl ScaleBand {
    /// Creates a new band scale covering `count` bands over `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding_inner: 0.1,
            padding_outer: 0.1,
        }
    }

    /// Sets inner and outer padding in band units.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Returns the computed band width.
    pub fn band_width(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 0.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = n + self.padding_inner * (n - 1.0) + 2.0 * self.padding_outer;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns the start position of the band at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let bw = self.band_width();
        let step = bw * (1.0 + self.padding_inner);
        let start = if r1 >= r0 { r0 } else { r1 };
        start + bw * self.padding_outer + step * index as f64
    }

    /// Returns the center position of the band at `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.x(index) + 0.5 * self.band_width()
    }
}

/// A discrete point scale (like band without width).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePoint {
    range: (f64, f64),
    count: usize,
    padding: f64,
}

impl ScalePoint {
    /// Creates a new point scale whose first and last points sit on the
    /// ends of `range`.
    pub fn new(range: (f64, f64), count: usize) -> Self {
        Self {
            range,
            count,
            padding: 0.0,
        }
    }

    /// Sets the outer padding in point steps.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    /// Returns the distance between adjacent points (`0` for fewer than two).
    pub fn step(&self) -> f64 {
        let (r0, r1) = self.range;
        let n = self.count as f64;
        if n <= 1.0 {
            return 0.0;
        }
        let span = (r1 - r0).abs();
        let denom = (n - 1.0) + 2.0 * self.padding;
        if denom == 0.0 { 0.0 } else { span / denom }
    }

    /// Returns the position of the point at `index`.
    pub fn x(&self, index: usize) -> f64 {
        let (r0, r1) = self.range;
        let step = self.step();
        let start = if r1 >= r0 { r0 } else { r1 };
        start + self.padding * step + step * index as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_scale_spans_range_end_to_end() {
        let scale = ScalePoint::new((0.0, 280.0), 5);
        assert_eq!(scale.x(0), 0.0);
        assert!((scale.x(4) - 280.0).abs() < 1e-9);
        assert!(scale.x(1) < scale.x(2));
    }

    #[test]
    fn single_point_sits_at_range_start() {
        let scale = ScalePoint::new((10.0, 50.0), 1);
        assert_eq!(scale.step(), 0.0);
        assert_eq!(scale.x(0), 10.0);
    }

    #[test]
    fn clamped_linear_scale_stays_in_range() {
        let s = ScaleLinear::new((0.0, 100.0), (0.0, 120.0)).with_clamp(true);
        assert_eq!(s.map(50.0), 60.0);
        assert_eq!(s.map(150.0), 120.0);
        assert_eq!(s.map(-20.0), 0.0);

        let unclamped = ScaleLinear::new((0.0, 100.0), (0.0, 120.0));
        assert_eq!(unclamped.map(150.0), 180.0);
    }

    #[test]
    fn zero_width_domain_maps_to_range_start() {
        let s = ScaleLinear::new((0.0, 0.0), (0.0, 120.0));
        assert_eq!(s.map(42.0), 0.0);
    }

    #[test]
    fn band_centers_are_evenly_spaced() {
        let band = ScaleBand::new((0.0, 400.0), 4).with_padding(0.0, 0.0);
        assert_eq!(band.band_width(), 100.0);
        assert_eq!(band.center(0), 50.0);
        assert_eq!(band.center(3), 350.0);
    }
}
