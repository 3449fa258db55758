// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Positioned text labels.

extern crate alloc;

use alloc::string::String;

use bizviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::Point;
use peniko::Brush;

use crate::TextStyle;
use crate::z_order;

/// One label at a fixed scene position.
#[derive(Clone, Debug)]
pub struct TextMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Anchor point.
    pub pos: Point,
    /// Label text.
    pub text: String,
    /// Size and weight.
    pub style: TextStyle,
    /// Horizontal and vertical alignment relative to `pos`.
    pub align: (TextAnchor, TextBaseline),
    /// Rotation about `pos`, in degrees; negative turns counter-clockwise.
    pub angle: f64,
    /// Fill paint.
    pub fill: Brush,
    /// Rendering order hint.
    pub z_index: i32,
}

impl TextMarkSpec {
    /// A label drawn in the series-label layer, its top-left corner at `pos`.
    pub fn new(id: MarkId, pos: Point, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            id,
            pos,
            text: text.into(),
            style,
            align: (TextAnchor::Start, TextBaseline::Hanging),
            angle: 0.0,
            fill: Brush::default(),
            z_index: z_order::SERIES_LABELS,
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets how the text sits around its anchor point.
    pub fn aligned(mut self, anchor: TextAnchor, baseline: TextBaseline) -> Self {
        self.align = (anchor, baseline);
        self
    }

    /// Rotates the label about its anchor point.
    pub fn rotated(mut self, degrees: f64) -> Self {
        self.angle = degrees;
        self
    }

    /// Moves the label to another layer.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Builds the text mark.
    pub fn mark(&self) -> Mark {
        let (anchor, baseline) = self.align;
        Mark::builder(self.id)
            .text()
            .z_index(self.z_index)
            .x_const(self.pos.x)
            .y_const(self.pos.y)
            .text_const(self.text.clone())
            .font_size_const(self.style.font_size)
            .font_weight_const(self.style.font_weight)
            .fill_brush_const(self.fill.clone())
            .text_anchor(anchor)
            .text_baseline(baseline)
            .angle_const(self.angle)
            .build()
    }
}
