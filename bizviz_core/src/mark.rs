// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marks and the mark builder.

extern crate alloc;

use alloc::string::String;

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::{Brush, Color};
use smallvec::SmallVec;

/// Stable identity of a mark across scene ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives a per-row id from a base id and a row index.
    pub const fn for_row(base: u64, row: usize) -> Self {
        Self(base.wrapping_add(row as u64))
    }

    /// Returns this id shifted by `n`.
    pub const fn offset(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }
}

/// The primitive kind of a mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// Axis-aligned rectangle.
    Rect,
    /// Single line of unshaped text.
    Text,
    /// Arbitrary vector path.
    Path,
}

/// Horizontal text anchor, matching SVG `text-anchor`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor point.
    Start,
    /// Text is centered on the anchor point.
    Middle,
    /// Text ends at the anchor point.
    End,
}

/// Vertical text baseline, matching SVG `dominant-baseline`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// Alphabetic baseline.
    Alphabetic,
    /// Vertically centered.
    Middle,
    /// Hanging baseline (text hangs below the anchor).
    Hanging,
    /// Ideographic baseline.
    Ideographic,
}

/// Stroke dash lengths (on, off, on, off, ...). Empty means solid.
pub type DashPattern = SmallVec<[f64; 4]>;

/// Resolved rectangle geometry and paint.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
    /// Outline paint.
    pub stroke: Brush,
    /// Outline width; `0` disables the outline.
    pub stroke_width: f64,
}

/// Resolved text run.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// CSS font weight (`400` normal, `700` bold).
    pub font_weight: u16,
    /// Rotation around `pos`, in degrees.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// Resolved vector path and paint.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path geometry in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width; `0` disables the stroke.
    pub stroke_width: f64,
    /// Stroke dash pattern.
    pub dash: DashPattern,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A rectangle.
    Rect(RectPayload),
    /// A text run.
    Text(TextPayload),
    /// A path.
    Path(PathPayload),
}

impl MarkPayload {
    /// Returns the kind of this payload.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Text(_) => MarkKind::Text,
            Self::Path(_) => MarkKind::Path,
        }
    }

    /// Geometric bounds, if known without text measurement.
    ///
    /// Text marks return `None`; their extent depends on the renderer's font.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Text(_) => None,
            Self::Path(p) => {
                if p.path.elements().is_empty() {
                    None
                } else {
                    Some(p.path.bounding_box())
                }
            }
        }
    }
}

/// A drawable mark with stable identity.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable id.
    pub id: MarkId,
    /// Paint order; renderers sort by `(z_index, id)`.
    pub z_index: i32,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Starts building a mark. The builder defaults to a rect.
    pub fn builder(id: MarkId) -> MarkBuilder {
        MarkBuilder::new(id)
    }

    /// Returns the kind of this mark.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}

/// Builder for [`Mark`] values.
///
/// Setters that do not apply to the selected kind are ignored, so shared styling
/// code can set e.g. a fill without caring whether it is styling a rect or a path.
#[derive(Clone, Debug)]
pub struct MarkBuilder {
    id: MarkId,
    kind: MarkKind,
    z_index: i32,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    path: BezPath,
    text: String,
    font_size: f64,
    font_weight: u16,
    angle: f64,
    anchor: TextAnchor,
    baseline: TextBaseline,
    fill: Brush,
    stroke: Brush,
    stroke_width: Option<f64>,
    dash: DashPattern,
}

impl MarkBuilder {
    fn new(id: MarkId) -> Self {
        Self {
            id,
            kind: MarkKind::Rect,
            z_index: 0,
            x: 0.0,
            y: 0.0,
            w: 0.0,
            h: 0.0,
            path: BezPath::new(),
            text: String::new(),
            font_size: 12.0,
            font_weight: 400,
            angle: 0.0,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Alphabetic,
            fill: Brush::Solid(Color::BLACK),
            stroke: Brush::Solid(Color::BLACK),
            stroke_width: None,
            dash: DashPattern::new(),
        }
    }

    /// Selects the rect kind.
    pub fn rect(mut self) -> Self {
        self.kind = MarkKind::Rect;
        self
    }

    /// Selects the text kind.
    pub fn text(mut self) -> Self {
        self.kind = MarkKind::Text;
        self
    }

    /// Selects the path kind.
    pub fn path(mut self) -> Self {
        self.kind = MarkKind::Path;
        self
    }

    /// Sets the paint order.
    pub fn z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets x (rect origin or text anchor).
    pub fn x_const(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    /// Sets y (rect origin or text anchor).
    pub fn y_const(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    /// Sets the rect width.
    pub fn w_const(mut self, w: f64) -> Self {
        self.w = w;
        self
    }

    /// Sets the rect height.
    pub fn h_const(mut self, h: f64) -> Self {
        self.h = h;
        self
    }

    /// Sets the path geometry.
    pub fn path_const(mut self, path: BezPath) -> Self {
        self.path = path;
        self
    }

    /// Sets the text content.
    pub fn text_const(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the font size.
    pub fn font_size_const(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the font weight.
    pub fn font_weight_const(mut self, font_weight: u16) -> Self {
        self.font_weight = font_weight;
        self
    }

    /// Sets the text rotation in degrees.
    pub fn angle_const(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    /// Sets the text anchor.
    pub fn text_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn text_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets a solid fill color.
    pub fn fill_const(mut self, color: Color) -> Self {
        self.fill = Brush::Solid(color);
        self
    }

    /// Sets the fill paint.
    pub fn fill_brush_const(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the stroke paint.
    pub fn stroke_brush_const(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the stroke width.
    pub fn stroke_width_const(mut self, stroke_width: f64) -> Self {
        self.stroke_width = Some(stroke_width);
        self
    }

    /// Sets the stroke dash pattern.
    pub fn stroke_dash_const(mut self, dash: &[f64]) -> Self {
        self.dash = dash.iter().copied().collect();
        self
    }

    /// Finishes the mark.
    ///
    /// Rects default to no outline; paths default to a 1-unit stroke.
    pub fn build(self) -> Mark {
        let payload = match self.kind {
            MarkKind::Rect => MarkPayload::Rect(RectPayload {
                rect: Rect::new(self.x, self.y, self.x + self.w, self.y + self.h),
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width.unwrap_or(0.0),
            }),
            MarkKind::Text => MarkPayload::Text(TextPayload {
                pos: Point::new(self.x, self.y),
                text: self.text,
                font_size: self.font_size,
                font_weight: self.font_weight,
                angle: self.angle,
                anchor: self.anchor,
                baseline: self.baseline,
                fill: self.fill,
            }),
            MarkKind::Path => MarkPayload::Path(PathPayload {
                path: self.path,
                fill: self.fill,
                stroke: self.stroke,
                stroke_width: self.stroke_width.unwrap_or(1.0),
                dash: self.dash,
            }),
        };
        Mark {
            id: self.id,
            z_index: self.z_index,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn rect_builder_resolves_geometry() {
        let mark = Mark::builder(MarkId::from_raw(7))
            .rect()
            .x_const(10.0)
            .y_const(20.0)
            .w_const(5.0)
            .h_const(8.0)
            .fill_const(css::TOMATO)
            .build();
        let MarkPayload::Rect(r) = &mark.payload else {
            panic!("expected rect payload");
        };
        assert_eq!(r.rect, Rect::new(10.0, 20.0, 15.0, 28.0));
        assert_eq!(r.stroke_width, 0.0);
        assert_eq!(mark.payload.bounds(), Some(r.rect));
    }

    #[test]
    fn path_builder_keeps_dash_and_default_stroke() {
        let mut p = BezPath::new();
        p.move_to((0.0, 0.0));
        p.line_to((0.0, 10.0));
        let mark = Mark::builder(MarkId::from_raw(1))
            .path()
            .path_const(p)
            .stroke_dash_const(&[4.0, 2.0])
            .build();
        let MarkPayload::Path(p) = &mark.payload else {
            panic!("expected path payload");
        };
        assert_eq!(p.stroke_width, 1.0);
        assert_eq!(p.dash.as_slice(), &[4.0, 2.0]);
    }

    #[test]
    fn text_has_no_intrinsic_bounds() {
        let mark = Mark::builder(MarkId::from_raw(2))
            .text()
            .text_const("hello")
            .build();
        assert_eq!(mark.kind(), MarkKind::Text);
        assert!(mark.payload.bounds().is_none());
    }
}
