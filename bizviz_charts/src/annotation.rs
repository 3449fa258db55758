// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Annotations: boxed text with an optional arrow to a target point.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bizviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{BezPath, Point, Rect, RoundedRect, Shape, Vec2};
use peniko::{Brush, Color};

use crate::measure::{TextMeasurer, TextStyle};
use crate::z_order;

/// A text callout drawn in a rounded box.
///
/// The text starts at `pos` (start-anchored); its box is the measured text
/// extent grown by `padding`. If `target` is set, an arrow runs from the box
/// to the target point.
#[derive(Clone, Debug)]
pub struct AnnotationSpec {
    /// Stable-id base (box `+0`, text `+1`, arrow `+2`).
    pub id_base: u64,
    /// Text content.
    pub text: String,
    /// Text anchor position in scene coordinates.
    pub pos: Point,
    /// Vertical baseline for `pos`.
    pub baseline: TextBaseline,
    /// Font size.
    pub font_size: f64,
    /// Text paint.
    pub text_fill: Brush,
    /// Box fill paint.
    pub box_fill: Brush,
    /// Box outline paint.
    pub box_stroke: Brush,
    /// Padding between text and box edge.
    pub padding: f64,
    /// Corner radius of the box.
    pub corner_radius: f64,
    /// Optional arrow target.
    pub target: Option<Point>,
}

impl AnnotationSpec {
    /// Creates an annotation with a white box, black text and no arrow.
    pub fn new(id_base: u64, text: impl Into<String>, pos: Point) -> Self {
        Self {
            id_base,
            text: text.into(),
            pos,
            baseline: TextBaseline::Alphabetic,
            font_size: 12.0,
            text_fill: Brush::Solid(Color::BLACK),
            box_fill: Brush::Solid(Color::WHITE),
            box_stroke: Brush::Solid(Color::BLACK),
            padding: 5.0,
            corner_radius: 4.0,
            target: None,
        }
    }

    /// Sets the text baseline at `pos`.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the box fill paint.
    pub fn with_box_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.box_fill = fill.into();
        self
    }

    /// Sets the box padding.
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Draws an arrow from the box to `target`.
    pub fn with_arrow_to(mut self, target: Point) -> Self {
        self.target = Some(target);
        self
    }

    /// Returns the box rectangle.
    pub fn box_rect(&self, measurer: &dyn TextMeasurer) -> Rect {
        let m = measurer.measure(&self.text, TextStyle::new(self.font_size));
        let h = m.line_height();
        let y0 = match self.baseline {
            TextBaseline::Hanging => self.pos.y,
            TextBaseline::Middle => self.pos.y - 0.5 * h,
            TextBaseline::Alphabetic | TextBaseline::Ideographic => self.pos.y - m.ascent,
        };
        Rect::new(self.pos.x, y0, self.pos.x + m.advance_width, y0 + h)
            .inflate(self.padding, self.padding)
    }

    /// Generates the box, text and (optional) arrow marks.
    pub fn marks(&self, measurer: &dyn TextMeasurer) -> Vec<Mark> {
        let rect = self.box_rect(measurer);
        let mut out = Vec::new();

        out.push(
            Mark::builder(MarkId::from_raw(self.id_base))
                .path()
                .z_index(z_order::ANNOTATIONS)
                .path_const(RoundedRect::from_rect(rect, self.corner_radius).to_path(0.1))
                .fill_brush_const(self.box_fill.clone())
                .stroke_brush_const(self.box_stroke.clone())
                .stroke_width_const(0.8)
                .build(),
        );
        out.push(
            Mark::builder(MarkId::from_raw(self.id_base + 1))
                .text()
                .z_index(z_order::ANNOTATIONS + 1)
                .x_const(self.pos.x)
                .y_const(self.pos.y)
                .text_const(self.text.clone())
                .font_size_const(self.font_size)
                .fill_brush_const(self.text_fill.clone())
                .text_anchor(TextAnchor::Start)
                .text_baseline(self.baseline)
                .build(),
        );

        if let Some(target) = self.target
            && let Some(path) = arrow_path(rect, target)
        {
            out.push(
                Mark::builder(MarkId::from_raw(self.id_base + 2))
                    .path()
                    .z_index(z_order::ANNOTATIONS - 1)
                    .path_const(path)
                    .fill_const(Color::TRANSPARENT)
                    .stroke_brush_const(Color::BLACK)
                    .stroke_width_const(1.0)
                    .build(),
            );
        }
        out
    }
}

/// An arrow from the point of `rect` nearest to `target`, with a two-stroke head.
fn arrow_path(rect: Rect, target: Point) -> Option<BezPath> {
    let start = Point::new(
        target.x.clamp(rect.x0, rect.x1),
        target.y.clamp(rect.y0, rect.y1),
    );
    let shaft = target - start;
    let len = shaft.hypot();
    if !len.is_finite() || len < 1e-6 {
        return None;
    }
    let dir = shaft / len;
    let head = 6.0_f64.min(0.5 * len);
    let normal = Vec2::new(-dir.y, dir.x);
    let back = target - dir * head;

    let mut p = BezPath::new();
    p.move_to(start);
    p.line_to(target);
    p.move_to(back + normal * (0.5 * head));
    p.line_to(target);
    p.line_to(back - normal * (0.5 * head));
    Some(p)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizviz_core::MarkPayload;

    use super::*;
    use crate::HeuristicTextMeasurer;

    #[test]
    fn hanging_text_box_starts_below_pos() {
        let measurer = HeuristicTextMeasurer;
        let spec = AnnotationSpec::new(1, "Correlation: 0.612", Point::new(10.0, 20.0))
            .with_baseline(TextBaseline::Hanging)
            .with_padding(2.0);
        let rect = spec.box_rect(&measurer);
        assert_eq!(rect.y0, 18.0);
        assert_eq!(rect.x0, 8.0);
        assert_eq!(spec.marks(&measurer).len(), 2);
    }

    #[test]
    fn arrow_ends_at_target() {
        let measurer = HeuristicTextMeasurer;
        let target = Point::new(0.0, 100.0);
        let spec = AnnotationSpec::new(1, "Holiday", Point::new(20.0, 80.0)).with_arrow_to(target);
        let marks = spec.marks(&measurer);
        assert_eq!(marks.len(), 3);
        let MarkPayload::Path(p) = &marks[2].payload else {
            panic!("expected path");
        };
        let b = p.path.bounding_box();
        assert!((b.x0 - target.x).abs() < 1e-9);
        assert!((b.y1 - target.y).abs() < 1e-9);
    }

    #[test]
    fn no_arrow_when_target_is_inside_the_box() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(arrow_path(rect, Point::new(5.0, 5.0)).is_none());
    }
}
