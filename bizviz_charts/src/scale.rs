// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scales map data values onto one screen axis.
//!
//! Each kind comes as a spec, which knows its domain, and an instance, which
//! also knows the pixel range it was laid out over.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::time;

/// Any scale an axis can carry, before layout.
#[derive(Clone, Copy, Debug)]
pub enum ScaleSpec {
    /// Numbers.
    Linear(ScaleLinearSpec),
    /// Day numbers, ticked on calendar boundaries.
    Time(ScaleTimeSpec),
    /// Categories.
    Band(ScaleBandSpec),
}

macro_rules! scale_spec_from {
    ($($spec:ident => $variant:ident),*) => {
        $(impl From<$spec> for ScaleSpec {
            fn from(spec: $spec) -> Self {
                Self::$variant(spec)
            }
        })*
    };
}

scale_spec_from!(ScaleLinearSpec => Linear, ScaleTimeSpec => Time, ScaleBandSpec => Band);

/// A laid-out numeric or time scale.
#[derive(Clone, Copy, Debug)]
pub enum ScaleContinuous {
    /// Numbers.
    Linear(ScaleLinear),
    /// Day numbers.
    Time(ScaleTime),
}

impl ScaleContinuous {
    fn linear(&self) -> &ScaleLinear {
        match self {
            Self::Linear(s) | Self::Time(ScaleTime(s)) => s,
        }
    }

    /// Screen position of `x`.
    pub fn map(&self, x: f64) -> f64 {
        self.linear().map(x)
    }

    /// About `count` tick values; calendar-aligned on time scales.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        match self {
            Self::Linear(s) => s.ticks(count),
            Self::Time(s) => s.ticks(count),
        }
    }

    /// The `(start, end)` data values.
    pub fn domain(&self) -> (f64, f64) {
        self.linear().domain
    }
}

/// Proportional mapping from `domain` onto `range`.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinear {
    domain: (f64, f64),
    range: (f64, f64),
}

impl ScaleLinear {
    /// Maps `domain` onto `range`; either may be reversed.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Screen position of `x`; an empty domain maps everything to the range start.
    pub fn map(&self, x: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let t = (x - self.domain.0) / span;
        self.range.0 + t * (self.range.1 - self.range.0)
    }

    /// The `(start, end)` data values.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Round tick values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.domain.0, self.domain.1, count)
    }
}

/// A numeric domain, optionally widened to round tick values.
#[derive(Clone, Copy, Debug)]
pub struct ScaleLinearSpec {
    /// `(start, end)` data values.
    pub domain: (f64, f64),
    /// Extend the domain outward to the first and last tick.
    pub nice: bool,
}

impl ScaleLinearSpec {
    /// A spec over `domain`, used as given.
    pub fn new(domain: (f64, f64)) -> Self {
        Self {
            domain,
            nice: false,
        }
    }

    /// Turns domain widening on or off.
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    /// The domain actually drawn for about `tick_count` ticks.
    pub fn resolved_domain(&self, tick_count: usize) -> (f64, f64) {
        if self.nice
            && let [first, .., last] = nice_ticks(self.domain.0, self.domain.1, tick_count)[..]
        {
            return (first, last);
        }
        self.domain
    }

    /// Lays the scale out over `range`.
    pub fn instantiate(&self, range: (f64, f64), tick_count: usize) -> ScaleLinear {
        ScaleLinear::new(self.resolved_domain(tick_count), range)
    }
}

/// Step multipliers tried per decade, with the error ratio each one covers.
const NICE_STEPS: [(f64, f64); 3] = [(7.5, 10.0), (3.5, 5.0), (1.5, 2.0)];

/// Evenly spaced round values covering `[a, b]` in about `count` steps.
fn nice_ticks(a: f64, b: f64, count: usize) -> Vec<f64> {
    if count == 0 || !a.is_finite() || !b.is_finite() {
        return Vec::new();
    }
    let (lo, hi) = (a.min(b), a.max(b));
    if lo == hi {
        return alloc::vec![lo];
    }
    let Some(step) = nice_step((hi - lo) / count as f64) else {
        return alloc::vec![lo, hi];
    };
    let first = (lo / step).floor();
    let last = (hi / step).ceil();
    // Index from `first` so every tick is an exact multiple of `step`.
    let mut ticks = Vec::new();
    let mut k = first;
    while k <= last && ticks.len() <= 10_000 {
        ticks.push(k * step);
        k += 1.0;
    }
    ticks
}

fn nice_step(raw: f64) -> Option<f64> {
    if !(raw.is_finite() && raw > 0.0) {
        return None;
    }
    let decade = 10_f64.powf(raw.log10().floor());
    let ratio = raw / decade;
    let multiplier = NICE_STEPS
        .iter()
        .find(|(min_ratio, _)| ratio >= *min_ratio)
        .map_or(1.0, |&(_, m)| m);
    Some(multiplier * decade)
}

/// Pads a `(min, max)` domain by `fraction` of its span on both sides.
///
/// This mirrors the autoscale margin of common plotting libraries. A zero-span
/// domain is widened by `fraction` of its magnitude (or by `fraction` if zero).
pub fn padded_domain(domain: (f64, f64), fraction: f64) -> (f64, f64) {
    let (lo, hi) = domain;
    let span = hi - lo;
    if span == 0.0 {
        let pad = if lo == 0.0 { fraction } else { lo.abs() * fraction };
        return (lo - pad, hi + pad);
    }
    (lo - span * fraction, hi + span * fraction)
}

/// A discrete band scale: `count` equal slots, a bar centered in each.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBand {
    spec: ScaleBandSpec,
    range: (f64, f64),
}

impl ScaleBand {
    /// Width of one band.
    pub fn band_width(&self) -> f64 {
        let ScaleBandSpec {
            count,
            padding_inner,
            padding_outer,
        } = self.spec;
        if count == 0 {
            return 0.0;
        }
        let n = count as f64;
        let units = n + padding_inner * (n - 1.0) + 2.0 * padding_outer;
        (self.range.1 - self.range.0).abs() / units
    }

    /// Number of bands.
    pub fn count(&self) -> usize {
        self.spec.count
    }

    /// Leading edge of band `index`.
    ///
    /// Bands run from the low end of the range, so on a y axis with range
    /// `(bottom, top)` band 0 is the topmost.
    pub fn start(&self, index: usize) -> f64 {
        let width = self.band_width();
        let low = self.range.0.min(self.range.1);
        low + width * (self.spec.padding_outer + (1.0 + self.spec.padding_inner) * index as f64)
    }

    /// Middle of band `index`.
    pub fn center(&self, index: usize) -> f64 {
        self.start(index) + 0.5 * self.band_width()
    }
}

/// Band count and padding, in band widths.
///
/// The default padding leaves each bar 80% of its slot.
#[derive(Clone, Copy, Debug)]
pub struct ScaleBandSpec {
    /// Number of bands.
    pub count: usize,
    /// Gap between neighboring bands.
    pub padding_inner: f64,
    /// Gap before the first and after the last band.
    pub padding_outer: f64,
}

impl ScaleBandSpec {
    /// `count` bands with the default padding.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            padding_inner: 0.25,
            padding_outer: 0.125,
        }
    }

    /// Overrides the padding; negative values count as zero.
    pub fn with_padding(mut self, inner: f64, outer: f64) -> Self {
        self.padding_inner = inner.max(0.0);
        self.padding_outer = outer.max(0.0);
        self
    }

    /// Lays the bands out over `range`.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleBand {
        ScaleBand { spec: *self, range }
    }
}

/// A linear scale over day numbers (see [`crate::days_from_date`]).
#[derive(Clone, Copy, Debug)]
pub struct ScaleTime(ScaleLinear);

impl ScaleTime {
    /// Maps the day range `domain` onto `range`.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self(ScaleLinear::new(domain, range))
    }

    /// Screen position of day `t`.
    pub fn map(&self, t: f64) -> f64 {
        self.0.map(t)
    }

    /// Day or month starts inside the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        time::nice_date_ticks(self.0.domain.0, self.0.domain.1, count)
    }

    /// The `(first, last)` day numbers.
    pub fn domain(&self) -> (f64, f64) {
        self.0.domain
    }
}

/// A range of day numbers, used as given.
#[derive(Clone, Copy, Debug)]
pub struct ScaleTimeSpec {
    /// `(first, last)` day numbers.
    pub domain: (f64, f64),
}

impl ScaleTimeSpec {
    /// A spec over `domain`.
    pub fn new(domain: (f64, f64)) -> Self {
        Self { domain }
    }

    /// Lays the scale out over `range`.
    pub fn instantiate(&self, range: (f64, f64)) -> ScaleTime {
        ScaleTime::new(self.domain, range)
    }
}
