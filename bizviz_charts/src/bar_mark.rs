// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use bizviz_core::{Mark, MarkId};
use peniko::Brush;

use crate::scale::{ScaleBand, ScaleContinuous};

/// Which way bars grow from the baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BarOrient {
    /// Bands along x, values along y.
    Vertical,
    /// Bands along y, values along x.
    Horizontal,
}

/// One bar per value, positioned by a band scale.
///
/// Bar `i` occupies band `i` and gets id `id_base + i`.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Orientation.
    pub orient: BarOrient,
    /// Band scale for bar positions.
    pub band: ScaleBand,
    /// Scale for bar values.
    pub value_scale: ScaleContinuous,
    /// Value the bars grow from.
    pub baseline: f64,
    /// Fill paints, cycled per bar.
    pub fills: Vec<Brush>,
    /// Rendering order hint (`bizviz_core::Mark::z_index`).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar spec with baseline `0` and the default fill.
    pub fn new(orient: BarOrient, id_base: u64, band: ScaleBand, value_scale: ScaleContinuous) -> Self {
        Self {
            id_base,
            orient,
            band,
            value_scale,
            baseline: 0.0,
            fills: Vec::new(),
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline value.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Uses a single fill for every bar.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fills = alloc::vec![fill.into()];
        self
    }

    /// Cycles through `fills`, one per bar.
    pub fn with_fills(mut self, fills: Vec<Brush>) -> Self {
        self.fills = fills;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one rect mark per finite value.
    pub fn marks(&self, values: &[f64]) -> Vec<Mark> {
        let bw = self.band.band_width();
        let v0 = self.value_scale.map(self.baseline);

        values
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(row, v)| {
                let v1 = self.value_scale.map(v);
                let start = self.band.start(row);
                let (x, y, w, h) = match self.orient {
                    BarOrient::Vertical => (start, v0.min(v1), bw, (v1 - v0).abs()),
                    BarOrient::Horizontal => (v0.min(v1), start, (v1 - v0).abs(), bw),
                };
                let fill = if self.fills.is_empty() {
                    Brush::default()
                } else {
                    self.fills[row % self.fills.len()].clone()
                };
                Mark::builder(MarkId::for_row(self.id_base, row))
                    .rect()
                    .z_index(self.z_index)
                    .x_const(x)
                    .y_const(y)
                    .w_const(w)
                    .h_const(h)
                    .fill_brush_const(fill)
                    .build()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizviz_core::MarkPayload;
    use kurbo::Rect;
    use peniko::color::palette::css;

    use super::*;
    use crate::scale::{ScaleBandSpec, ScaleLinear};

    fn rects(marks: &[Mark]) -> Vec<Rect> {
        marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Rect(r) => Some(r.rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn vertical_bars_grow_up_from_baseline() {
        let band = ScaleBandSpec::new(2).with_padding(0.0, 0.0).instantiate((0.0, 100.0));
        let y = ScaleContinuous::Linear(ScaleLinear::new((0.0, 10.0), (100.0, 0.0)));
        let marks = BarMarkSpec::new(BarOrient::Vertical, 1, band, y).marks(&[5.0, 10.0]);
        assert_eq!(
            rects(&marks),
            [Rect::new(0.0, 50.0, 50.0, 100.0), Rect::new(50.0, 0.0, 100.0, 100.0)]
        );
    }

    #[test]
    fn horizontal_bars_handle_negative_values_and_cycle_fills() {
        let band = ScaleBandSpec::new(2).with_padding(0.0, 0.0).instantiate((100.0, 0.0));
        let x = ScaleContinuous::Linear(ScaleLinear::new((-10.0, 10.0), (0.0, 200.0)));
        let marks = BarMarkSpec::new(BarOrient::Horizontal, 1, band, x)
            .with_fills(alloc::vec![css::RED.into()])
            .marks(&[-5.0, 5.0]);
        assert_eq!(
            rects(&marks),
            [Rect::new(50.0, 0.0, 100.0, 50.0), Rect::new(100.0, 50.0, 150.0, 100.0)]
        );
        let MarkPayload::Rect(r) = &marks[1].payload else {
            panic!("expected rect");
        };
        assert_eq!(r.fill, css::RED.into());
    }

    #[test]
    fn non_finite_values_produce_no_bar() {
        let band = ScaleBandSpec::new(3).instantiate((0.0, 100.0));
        let y = ScaleContinuous::Linear(ScaleLinear::new((0.0, 10.0), (100.0, 0.0)));
        let marks = BarMarkSpec::new(BarOrient::Vertical, 1, band, y).marks(&[1.0, f64::NAN, 2.0]);
        let ids: Vec<u64> = marks.iter().map(|m| m.id.0).collect();
        assert_eq!(ids, [1, 3]);
    }
}
