// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Legends: an optional bold title over one row per entry.
//!
//! Each row is a swatch (a square for filled series, a short stroke for
//! lines) followed by its label. The size is computed up front, so layout can
//! place the box before any mark exists.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bizviz_core::{DashPattern, Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Circle, Point, Rect, Shape};
use peniko::color::palette::css;
use peniko::{Brush, Color};

use crate::axis::StrokeStyle;
use crate::layout::Size;
use crate::measure::{TextMeasurer, TextStyle};
use crate::rect_mark::RectMarkSpec;
use crate::rule_mark::RuleMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

const SWATCH: f64 = 10.0;
const ROW_GAP: f64 = 5.0;
const LABEL_GAP: f64 = 6.0;
const FRAME_PADDING: f64 = 4.0;
const LINE_SWATCH_WIDTH: f64 = 1.5;

// Mark id offsets from the legend's base; swatches use the base.
const MARKER_IDS: u64 = 500;
const LABEL_IDS: u64 = 1_000;
const TITLE_ID: u64 = 2_000;
const FRAME_ID: u64 = 3_000;

/// What is drawn left of an entry's label.
#[derive(Clone, Debug, PartialEq)]
pub enum LegendSwatch {
    /// A filled square.
    Rect(Brush),
    /// A short stroke, optionally with a dot at its middle.
    Line {
        /// Stroke paint.
        stroke: Brush,
        /// Dash pattern; empty is solid.
        dash: DashPattern,
        /// Draw the dot.
        marker: bool,
    },
}

/// One legend row.
#[derive(Clone, Debug)]
pub struct LegendItem {
    /// Label text.
    pub label: String,
    /// Swatch.
    pub swatch: LegendSwatch,
}

impl LegendItem {
    /// A filled-square entry.
    pub fn solid(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            swatch: LegendSwatch::Rect(color.into()),
        }
    }

    /// A line entry, dashed when `dash` is not empty.
    pub fn line(label: impl Into<String>, color: Color, dash: &[f64], marker: bool) -> Self {
        Self {
            label: label.into(),
            swatch: LegendSwatch::Line {
                stroke: color.into(),
                dash: dash.iter().copied().collect(),
                marker,
            },
        }
    }
}

/// A legend, not yet placed.
#[derive(Clone, Debug)]
pub struct LegendSwatchesSpec {
    /// Base of this legend's mark ids.
    pub id_base: u64,
    /// Bold heading above the rows.
    pub title: Option<String>,
    /// Label size; the title uses it too.
    pub font_size: f64,
    /// Label paint.
    pub text_fill: Brush,
    /// Draw a translucent white box behind the legend.
    pub frame: bool,
    /// Rows in display order.
    pub items: Vec<LegendItem>,
}

impl LegendSwatchesSpec {
    /// An unframed, untitled legend with 10-unit labels.
    pub fn new(id_base: u64, items: Vec<LegendItem>) -> Self {
        Self {
            id_base,
            title: None,
            font_size: 10.0,
            text_fill: css::BLACK.into(),
            frame: false,
            items,
        }
    }

    /// Sets the heading.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the label size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Turns the frame on or off.
    pub fn with_frame(mut self, frame: bool) -> Self {
        self.frame = frame;
        self
    }

    fn padding(&self) -> f64 {
        if self.frame { FRAME_PADDING } else { 0.0 }
    }

    fn swatch_width(&self) -> f64 {
        let has_lines = self
            .items
            .iter()
            .any(|i| matches!(i.swatch, LegendSwatch::Line { .. }));
        if has_lines { 2.0 * SWATCH } else { SWATCH }
    }

    fn row_height(&self) -> f64 {
        SWATCH.max(self.font_size)
    }

    fn title_height(&self) -> f64 {
        if self.title.is_some() {
            self.font_size + ROW_GAP
        } else {
            0.0
        }
    }

    /// Size of the legend box, frame padding included.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> Size {
        let label_style = TextStyle::new(self.font_size);
        let widest_label = self
            .items
            .iter()
            .map(|i| measurer.measure(&i.label, label_style).advance_width)
            .fold(0.0_f64, f64::max);
        let rows_w = if self.items.is_empty() {
            0.0
        } else {
            self.swatch_width() + LABEL_GAP + widest_label
        };
        let title_w = self.title.as_ref().map_or(0.0, |t| {
            measurer
                .measure(t, TextStyle::bold(self.font_size))
                .advance_width
        });

        let n = self.items.len() as f64;
        let rows_h = n * self.row_height() + (n - 1.0).max(0.0) * ROW_GAP;
        let title_h = if self.items.is_empty() {
            self.title.as_ref().map_or(0.0, |_| self.font_size)
        } else {
            self.title_height()
        };
        let pad = 2.0 * self.padding();
        Size::new(rows_w.max(title_w) + pad, title_h + rows_h + pad)
    }

    /// Marks for the legend with its top-left corner at `(x, y)`.
    pub fn marks(&self, measurer: &dyn TextMeasurer, x: f64, y: f64) -> Vec<Mark> {
        let mut out = Vec::new();

        if self.frame {
            let size = self.measure(measurer);
            let frame = Rect::from_origin_size((x, y), (size.width, size.height));
            out.push(
                RectMarkSpec::new(MarkId::from_raw(self.id_base + FRAME_ID), frame)
                    .with_fill(css::WHITE.with_alpha(0.8))
                    .with_stroke(StrokeStyle::solid(Color::from_rgb8(0xcc, 0xcc, 0xcc), 1.0))
                    .with_z_index(z_order::LEGEND_SWATCHES - 1)
                    .mark(),
            );
        }

        let left = x + self.padding();
        let top = y + self.padding();
        if let Some(title) = &self.title {
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + TITLE_ID),
                    Point::new(left, top),
                    title.clone(),
                    TextStyle::bold(self.font_size),
                )
                .with_fill(self.text_fill.clone())
                .with_z_index(z_order::LEGEND_LABELS)
                .mark(),
            );
        }

        let swatch_w = self.swatch_width();
        let row_h = self.row_height();
        let first_row = top + self.title_height();
        for (i, item) in self.items.iter().enumerate() {
            let mid_y = first_row + i as f64 * (row_h + ROW_GAP) + 0.5 * row_h;
            let id = MarkId::for_row(self.id_base, i);
            match &item.swatch {
                LegendSwatch::Rect(fill) => {
                    let square = Rect::from_center_size((left + 0.5 * SWATCH, mid_y), (SWATCH, SWATCH));
                    out.push(
                        RectMarkSpec::new(id, square)
                            .with_fill(fill.clone())
                            .with_z_index(z_order::LEGEND_SWATCHES)
                            .mark(),
                    );
                }
                LegendSwatch::Line {
                    stroke,
                    dash,
                    marker,
                } => {
                    let style = StrokeStyle {
                        brush: stroke.clone(),
                        stroke_width: LINE_SWATCH_WIDTH,
                        dash: dash.clone(),
                    };
                    out.push(
                        RuleMarkSpec::horizontal(id, mid_y, left, left + swatch_w)
                            .with_stroke_style(&style)
                            .with_z_index(z_order::LEGEND_SWATCHES)
                            .mark(),
                    );
                    if *marker {
                        let dot = Circle::new((left + 0.5 * swatch_w, mid_y), 0.3 * SWATCH);
                        out.push(
                            Mark::builder(MarkId::for_row(self.id_base + MARKER_IDS, i))
                                .path()
                                .z_index(z_order::LEGEND_SWATCHES)
                                .path_const(dot.to_path(0.1))
                                .fill_brush_const(stroke.clone())
                                .stroke_width_const(0.0)
                                .build(),
                        );
                    }
                }
            }

            out.push(
                TextMarkSpec::new(
                    MarkId::for_row(self.id_base + LABEL_IDS, i),
                    Point::new(left + swatch_w + LABEL_GAP, mid_y),
                    item.label.clone(),
                    TextStyle::new(self.font_size),
                )
                .with_fill(self.text_fill.clone())
                .aligned(TextAnchor::Start, TextBaseline::Middle)
                .with_z_index(z_order::LEGEND_LABELS)
                .mark(),
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use bizviz_core::{MarkKind, MarkPayload};

    use super::*;
    use crate::measure::HeuristicTextMeasurer;

    fn items() -> Vec<LegendItem> {
        vec![
            LegendItem::solid("A", css::BLACK),
            LegendItem::solid("BBBB", css::RED),
            LegendItem::solid("CC", css::BLUE),
        ]
    }

    #[test]
    fn size_covers_swatches_and_the_widest_label() {
        let size = LegendSwatchesSpec::new(1, items()).measure(&HeuristicTextMeasurer);
        assert_eq!(size.width, SWATCH + LABEL_GAP + 0.6 * 10.0 * 4.0);
        assert_eq!(size.height, 3.0 * SWATCH + 2.0 * ROW_GAP);
    }

    #[test]
    fn title_adds_height_and_a_bold_mark() {
        let measurer = HeuristicTextMeasurer;
        let plain = LegendSwatchesSpec::new(1, items());
        let titled = plain.clone().with_title("Order Status");
        assert!(titled.measure(&measurer).height > plain.measure(&measurer).height);

        let marks = titled.marks(&measurer, 0.0, 0.0);
        let title = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(1 + TITLE_ID))
            .unwrap();
        let MarkPayload::Text(t) = &title.payload else {
            panic!("expected text");
        };
        assert_eq!(t.font_weight, 700);
        assert_eq!(t.text, "Order Status");
    }

    #[test]
    fn one_label_per_item() {
        let marks = LegendSwatchesSpec::new(1, items()).marks(&HeuristicTextMeasurer, 0.0, 0.0);
        let labels = marks
            .iter()
            .filter(|m| m.z_index == z_order::LEGEND_LABELS)
            .count();
        assert_eq!(labels, 3);
    }

    #[test]
    fn line_swatches_are_dashed_paths_with_optional_dots() {
        let spec = LegendSwatchesSpec::new(
            1,
            vec![
                LegendItem::line("Holiday", css::RED, &[4.0, 2.0], false),
                LegendItem::line("Orders", css::BLUE, &[], true),
            ],
        );
        let marks = spec.marks(&HeuristicTextMeasurer, 0.0, 0.0);
        let swatch = marks.iter().find(|m| m.id == MarkId::from_raw(1)).unwrap();
        assert_eq!(swatch.kind(), MarkKind::Path);
        let MarkPayload::Path(p) = &swatch.payload else {
            panic!("expected path");
        };
        assert_eq!(p.dash.as_slice(), &[4.0, 2.0]);

        let dots: Vec<_> = marks
            .iter()
            .filter(|m| m.id.0 >= 1 + MARKER_IDS && m.id.0 < 1 + LABEL_IDS)
            .collect();
        assert_eq!(dots.len(), 1);
    }

    #[test]
    fn framed_legend_fills_its_measured_box() {
        let measurer = HeuristicTextMeasurer;
        let spec = LegendSwatchesSpec::new(1, items()).with_frame(true);
        let size = spec.measure(&measurer);
        let marks = spec.marks(&measurer, 10.0, 20.0);
        let frame = marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(1 + FRAME_ID))
            .unwrap();
        let b = frame.payload.bounds().unwrap();
        assert_eq!((b.x0, b.y0), (10.0, 20.0));
        assert!((b.width() - size.width).abs() < 1e-9);
        assert!((b.height() - size.height).abs() < 1e-9);
    }
}
