// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle mark generation.

use bizviz_core::{Mark, MarkId};
use kurbo::Rect;
use peniko::Brush;

use crate::axis::StrokeStyle;

/// A single filled (and optionally outlined) rectangle.
#[derive(Clone, Debug)]
pub struct RectMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Optional outline.
    pub stroke: Option<StrokeStyle>,
    /// Rendering order hint (`bizviz_core::Mark::z_index`).
    pub z_index: i32,
}

impl RectMarkSpec {
    /// Creates a rect spec with the default fill and no outline.
    pub fn new(id: MarkId, rect: Rect) -> Self {
        Self {
            id,
            rect,
            fill: Brush::default(),
            stroke: None,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the outline.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates the rect mark.
    pub fn mark(&self) -> Mark {
        let rect = self.rect.abs();
        let mut builder = Mark::builder(self.id)
            .rect()
            .z_index(self.z_index)
            .x_const(rect.x0)
            .y_const(rect.y0)
            .w_const(rect.width())
            .h_const(rect.height())
            .fill_brush_const(self.fill.clone());
        if let Some(stroke) = &self.stroke {
            builder = builder
                .stroke_brush_const(stroke.brush.clone())
                .stroke_width_const(stroke.stroke_width);
        }
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use bizviz_core::MarkPayload;
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn inverted_rects_are_normalized_and_outlined() {
        let mark = RectMarkSpec::new(MarkId::from_raw(1), Rect::new(10.0, 10.0, 0.0, 0.0))
            .with_fill(css::WHITE)
            .with_stroke(StrokeStyle::solid(css::GRAY, 2.0))
            .mark();
        let MarkPayload::Rect(r) = &mark.payload else {
            panic!("expected rect");
        };
        assert_eq!(r.rect, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(r.stroke_width, 2.0);
    }
}
