// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axes: domain line, ticks, tick labels, optional gridlines and title.
//!
//! An [`AxisSpec`] is measured first so layout can reserve its strip next to
//! the plot, then asked for marks once the plot rectangle is known.

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use bizviz_core::{DashPattern, Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleContinuous, ScaleSpec};
use crate::text_mark::TextMarkSpec;
use crate::time::format_date_tick;
use crate::z_order;
use crate::{TextMeasurer, TextStyle};

/// Length of a tick mark.
const TICK_SIZE: f64 = 5.0;
/// Gap between a tick mark and its label.
const TICK_PADDING: f64 = 4.0;
/// Gap between the tick labels and the axis title.
const TITLE_OFFSET: f64 = 8.0;

// Mark id offsets from `AxisSpec::id_base`; the domain line uses the base.
const TICK_IDS: u64 = 1;
const LABEL_IDS: u64 = 1_000;
const GRID_IDS: u64 = 5_000;
const TITLE_ID: u64 = 9_000;

/// Paint, width and dash for stroked paths.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
    /// Dash pattern; empty is solid.
    pub dash: DashPattern,
}

impl StrokeStyle {
    /// A solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
            dash: DashPattern::new(),
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Paint and font sizes shared by every part of an axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Domain line and ticks.
    pub rule: StrokeStyle,
    /// Tick label paint.
    pub label_fill: Brush,
    /// Tick label size.
    pub label_font_size: f64,
    /// Title paint.
    pub title_fill: Brush,
    /// Title size.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            label_fill: rule.brush.clone(),
            title_fill: rule.brush.clone(),
            rule,
            label_font_size: 10.0,
            title_font_size: 11.0,
        }
    }
}

/// Gridlines across the plot at each tick.
#[derive(Clone, Debug, PartialEq)]
pub struct GridStyle {
    /// Gridline stroke.
    pub stroke: StrokeStyle,
}

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// Below the plot.
    Bottom,
    /// Left of the plot.
    Left,
    /// Right of the plot.
    Right,
}

/// How tick values become label text.
#[derive(Clone, Debug, Default)]
pub enum TickLabels {
    /// Numbers, or ISO dates on a time scale, formatted for the tick step.
    #[default]
    Auto,
    /// One name per band, by band index.
    Bands(Arc<[String]>),
}

/// One axis of a chart.
#[derive(Clone, Debug)]
pub struct AxisSpec {
    /// Base of this axis's mark ids.
    pub id_base: u64,
    /// Scale along the axis.
    pub scale: ScaleSpec,
    /// Placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks on continuous scales.
    pub tick_count: usize,
    /// Tick label rotation in degrees; negative turns counter-clockwise.
    pub label_angle: f64,
    /// Paint and sizes.
    pub style: AxisStyle,
    /// Gridlines, if any.
    pub grid: Option<GridStyle>,
    /// Axis title, if any.
    pub title: Option<String>,
    /// Label text source.
    pub tick_labels: TickLabels,
}

/// The axis scale mapped onto a concrete plot.
#[derive(Clone, Copy, Debug)]
enum Placed {
    Continuous(ScaleContinuous),
    Band(ScaleBand),
}

impl Placed {
    fn position(&self, v: f64) -> f64 {
        match self {
            Self::Continuous(s) => s.map(v),
            Self::Band(b) => b.center(discrete_index(v)),
        }
    }

    fn domain(&self) -> Option<(f64, f64)> {
        match self {
            Self::Continuous(s) => Some(s.domain()),
            Self::Band(_) => None,
        }
    }
}

impl AxisSpec {
    /// An axis with six ticks, unrotated labels and the default style.
    pub fn new(id_base: u64, scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 6,
            label_angle: 0.0,
            style: AxisStyle::default(),
            grid: None,
            title: None,
            tick_labels: TickLabels::Auto,
        }
    }

    /// An axis below the plot.
    pub fn bottom(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// An axis left of the plot.
    pub fn left(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// An axis right of the plot.
    pub fn right(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Right)
    }

    /// Sets the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Names the bands of a band axis.
    pub fn with_band_labels(mut self, labels: Vec<String>) -> Self {
        self.tick_labels = TickLabels::Bands(labels.into());
        self
    }

    /// Rotates the tick labels.
    pub fn with_label_angle(mut self, degrees: f64) -> Self {
        self.label_angle = degrees;
        self
    }

    /// Sets paint and sizes.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Draws gridlines across the plot.
    pub fn with_grid(mut self, grid: GridStyle) -> Self {
        self.grid = Some(grid);
        self
    }

    /// Sets the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn horizontal(&self) -> bool {
        self.orient == AxisOrient::Bottom
    }

    fn place(&self, plot: Rect) -> Placed {
        // Vertical ranges run bottom to top.
        let range = if self.horizontal() {
            (plot.x0, plot.x1)
        } else {
            (plot.y1, plot.y0)
        };
        match self.scale {
            ScaleSpec::Linear(s) => {
                Placed::Continuous(ScaleContinuous::Linear(s.instantiate(range, self.tick_count)))
            }
            ScaleSpec::Time(s) => Placed::Continuous(ScaleContinuous::Time(s.instantiate(range))),
            ScaleSpec::Band(s) => Placed::Band(s.instantiate(range)),
        }
    }

    /// Tick values and the step between them.
    fn ticks(&self) -> (Vec<f64>, f64) {
        let ticks = match self.place(Rect::new(0.0, 0.0, 1.0, 1.0)) {
            Placed::Continuous(s) => s.ticks(self.tick_count),
            Placed::Band(b) => return ((0..b.count()).map(|i| i as f64).collect(), 1.0),
        };
        let step = ticks
            .windows(2)
            .map(|w| (w[1] - w[0]).abs())
            .fold(f64::INFINITY, f64::min);
        (ticks, if step.is_finite() { step } else { 0.0 })
    }

    fn label(&self, v: f64, step: f64) -> String {
        match (&self.tick_labels, self.scale) {
            (TickLabels::Bands(names), _) => {
                names.get(discrete_index(v)).cloned().unwrap_or_default()
            }
            (TickLabels::Auto, ScaleSpec::Time(_)) => format_date_tick(v, step),
            (TickLabels::Auto, _) => format_tick_with_step(v, step),
        }
    }

    /// Thickness of the strip this axis needs beside the plot.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        let (ticks, step) = self.ticks();
        let (sin, cos) = {
            let theta = self.label_angle.to_radians();
            (theta.sin().abs(), theta.cos().abs())
        };
        let label_style = TextStyle::new(self.style.label_font_size);
        let widest = ticks
            .into_iter()
            .map(|v| {
                let m = measurer.measure(&self.label(v, step), label_style);
                // Extent of the rotated label box along the axis normal.
                if self.horizontal() {
                    sin * m.advance_width + cos * m.line_height()
                } else {
                    cos * m.advance_width + sin * m.line_height()
                }
            })
            .fold(0.0_f64, f64::max);

        let title = self.title.as_ref().map_or(0.0, |t| {
            TITLE_OFFSET
                + measurer
                    .measure(t, TextStyle::new(self.style.title_font_size))
                    .line_height()
        });
        TICK_SIZE + TICK_PADDING + widest + title
    }

    /// Marks for this axis around `plot`, with `strip` the space [`Self::measure`] reserved.
    pub fn marks(&self, plot: Rect, strip: Rect) -> Vec<Mark> {
        let placed = self.place(plot);
        let (ticks, step) = self.ticks();
        let horizontal = self.horizontal();
        let (lo, hi) = if horizontal {
            (plot.x0, plot.x1)
        } else {
            (plot.y0, plot.y1)
        };
        let inside = |p: f64| p >= lo - 1.0e-9 && p <= hi + 1.0e-9;
        let across = |id: MarkId, p: f64, from: f64, to: f64| {
            if horizontal {
                RuleMarkSpec::vertical(id, p, from, to)
            } else {
                RuleMarkSpec::horizontal(id, p, from, to)
            }
        };

        let mut out = Vec::new();

        if let Some(grid) = &self.grid {
            // Niced ticks can fall outside the plot; the domain ends cannot.
            let mut lines: Vec<f64> = ticks
                .iter()
                .copied()
                .filter(|v| inside(placed.position(*v)))
                .collect();
            if let Some((d0, d1)) = placed.domain() {
                for end in [d0, d1] {
                    if end.is_finite() && lines.iter().all(|t| (t - end).abs() > 1.0e-9) {
                        lines.push(end);
                    }
                }
            }
            let (from, to) = if horizontal {
                (plot.y0, plot.y1)
            } else {
                (plot.x0, plot.x1)
            };
            for (i, v) in lines.into_iter().enumerate() {
                let id = MarkId::for_row(self.id_base + GRID_IDS, i);
                out.push(
                    across(id, placed.position(v), from, to)
                        .with_stroke_style(&grid.stroke)
                        .with_z_index(z_order::GRID_LINES)
                        .mark(),
                );
            }
        }

        let (edge, outward) = match self.orient {
            AxisOrient::Bottom => (plot.y1, 1.0),
            AxisOrient::Left => (plot.x0, -1.0),
            AxisOrient::Right => (plot.x1, 1.0),
        };
        let domain = if horizontal {
            RuleMarkSpec::horizontal(MarkId::from_raw(self.id_base), edge, lo, hi)
        } else {
            RuleMarkSpec::vertical(MarkId::from_raw(self.id_base), edge, lo, hi)
        };
        out.push(
            domain
                .with_stroke_style(&self.style.rule)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );

        let label_at = edge + outward * (TICK_SIZE + TICK_PADDING);
        let align = match self.orient {
            // Rotated labels end at their tick.
            AxisOrient::Bottom if self.label_angle != 0.0 => (TextAnchor::End, TextBaseline::Hanging),
            AxisOrient::Bottom => (TextAnchor::Middle, TextBaseline::Hanging),
            AxisOrient::Left => (TextAnchor::End, TextBaseline::Middle),
            AxisOrient::Right => (TextAnchor::Start, TextBaseline::Middle),
        };
        let label_style = TextStyle::new(self.style.label_font_size);
        for (i, v) in ticks.iter().copied().enumerate() {
            let p = placed.position(v);
            if !inside(p) {
                continue;
            }
            let tick_id = MarkId::for_row(self.id_base + TICK_IDS, i);
            out.push(
                across(tick_id, p, edge, edge + outward * TICK_SIZE)
                    .with_stroke_style(&self.style.rule)
                    .with_z_index(z_order::AXIS_RULES)
                    .mark(),
            );

            let pos = if horizontal {
                Point::new(p, label_at)
            } else {
                Point::new(label_at, p)
            };
            let label_id = MarkId::for_row(self.id_base + LABEL_IDS, i);
            out.push(
                TextMarkSpec::new(label_id, pos, self.label(v, step), label_style)
                    .with_fill(self.style.label_fill.clone())
                    .aligned(align.0, align.1)
                    .rotated(self.label_angle)
                    .with_z_index(z_order::AXIS_LABELS)
                    .mark(),
            );
        }

        if let Some(title) = &self.title {
            // Centered in the outermost line of the strip.
            let half = 0.5 * self.style.title_font_size;
            let mid_x = 0.5 * (plot.x0 + plot.x1);
            let mid_y = 0.5 * (plot.y0 + plot.y1);
            let (pos, angle) = match self.orient {
                AxisOrient::Bottom => (Point::new(mid_x, strip.y1 - half), 0.0),
                AxisOrient::Left => (Point::new(strip.x0 + half, mid_y), -90.0),
                AxisOrient::Right => (Point::new(strip.x1 - half, mid_y), 90.0),
            };
            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + TITLE_ID),
                    pos,
                    title.clone(),
                    TextStyle::new(self.style.title_font_size),
                )
                .with_fill(self.style.title_fill.clone())
                .aligned(TextAnchor::Middle, TextBaseline::Middle)
                .rotated(angle)
                .with_z_index(z_order::AXIS_TITLES)
                .mark(),
            );
        }

        out
    }
}

fn discrete_index(v: f64) -> usize {
    if !(v.is_finite() && v > 0.0) {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "clamped to a small non-negative whole number"
    )]
    {
        v.round().min(10_000.0) as usize
    }
}
