// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Straight stroked segments: axis lines, ticks, gridlines, trend lines and
//! event markers.

use bizviz_core::{Mark, MarkId};
use kurbo::{Line, Point, Rect, Shape};
use peniko::{Brush, Color};

use crate::axis::StrokeStyle;
use crate::z_order;

/// A segment between two scene points.
#[derive(Clone, Debug)]
pub struct RuleMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Start point.
    pub from: Point,
    /// End point.
    pub to: Point,
    /// Paint, width and dash.
    pub stroke: StrokeStyle,
    /// Rendering order hint.
    pub z_index: i32,
}

impl RuleMarkSpec {
    /// A solid 1-unit rule from `from` to `to` in the series-stroke layer.
    pub fn new(id: MarkId, from: impl Into<Point>, to: impl Into<Point>) -> Self {
        Self {
            id,
            from: from.into(),
            to: to.into(),
            stroke: StrokeStyle::default(),
            z_index: z_order::SERIES_STROKE,
        }
    }

    /// A rule at height `y` from `x0` to `x1`.
    pub fn horizontal(id: MarkId, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(id, (x0, y), (x1, y))
    }

    /// A rule at `x` from `y0` to `y1`.
    pub fn vertical(id: MarkId, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(id, (x, y0), (x, y1))
    }

    /// Sets paint and width, keeping the dash.
    pub fn with_stroke(mut self, brush: impl Into<Brush>, stroke_width: f64) -> Self {
        self.stroke.brush = brush.into();
        self.stroke.stroke_width = stroke_width;
        self
    }

    /// Replaces paint, width and dash.
    pub fn with_stroke_style(mut self, style: &StrokeStyle) -> Self {
        self.stroke = style.clone();
        self
    }

    /// Dashes the rule.
    pub fn with_dash(mut self, dash: &[f64]) -> Self {
        self.stroke.dash = dash.iter().copied().collect();
        self
    }

    /// Moves the rule to another layer.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Builds the stroked path.
    pub fn mark(&self) -> Mark {
        Mark::builder(self.id)
            .path()
            .z_index(self.z_index)
            .path_const(Line::new(self.from, self.to).to_path(0.1))
            .fill_const(Color::TRANSPARENT)
            .stroke_brush_const(self.stroke.brush.clone())
            .stroke_width_const(self.stroke.stroke_width)
            .stroke_dash_const(&self.stroke.dash)
            .build()
    }
}

/// Clips the segment `a`-`b` to `rect` (Liang-Barsky).
///
/// Returns `None` when the segment lies entirely outside.
pub fn clip_segment(a: Point, b: Point, rect: Rect) -> Option<(Point, Point)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, a.x - rect.x0),
        (dx, rect.x1 - a.x),
        (-dy, a.y - rect.y0),
        (dy, rect.y1 - a.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((
        Point::new(a.x + t0 * dx, a.y + t0 * dy),
        Point::new(a.x + t1 * dx, a.y + t1 * dy),
    ))
}
