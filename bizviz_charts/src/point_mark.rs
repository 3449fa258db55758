// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

extern crate alloc;

use alloc::vec::Vec;

use bizviz_core::{Mark, MarkId};
use kurbo::{Circle, Point, Rect, Shape};
use peniko::Brush;

/// Circle glyphs at already-scaled positions.
///
/// This generates one [`bizviz_core::MarkKind::Path`] mark per point; the id of
/// point `i` is `id_base + i`, so identity follows row order.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable-id base.
    pub id_base: u64,
    /// Glyph centers in scene coordinates.
    pub points: Vec<Point>,
    /// Glyph diameter in scene coordinates.
    pub size: f64,
    /// Fill paint for the point glyphs.
    pub fill: Brush,
    /// Optional clip rectangle; points outside are dropped.
    pub clip: Option<Rect>,
    /// Rendering order hint (`bizviz_core::Mark::z_index`).
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point mark spec with circles of size 6 and the default fill.
    pub fn new(id_base: u64, points: Vec<Point>) -> Self {
        Self {
            id_base,
            points,
            size: 6.0,
            fill: Brush::default(),
            clip: None,
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the glyph size.
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Drops points whose centers fall outside `clip`.
    pub fn with_clip(mut self, clip: Rect) -> Self {
        self.clip = Some(clip);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one mark per visible point.
    pub fn marks(&self) -> Vec<Mark> {
        self.points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.x.is_finite() && p.y.is_finite())
            .filter(|(_, p)| self.clip.is_none_or(|c| inside(c, **p)))
            .map(|(row, p)| {
                Mark::builder(MarkId::for_row(self.id_base, row))
                    .path()
                    .z_index(self.z_index)
                    .path_const(Circle::new(*p, 0.5 * self.size).to_path(0.1))
                    .fill_brush_const(self.fill.clone())
                    .stroke_width_const(0.0)
                    .build()
            })
            .collect()
    }
}

// Closed on all sides, unlike `Rect::contains`.
fn inside(r: Rect, p: Point) -> bool {
    p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1
}
