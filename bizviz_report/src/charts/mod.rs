// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The report chart builders.
//!
//! Each builder checks its input table against a schema, computes the
//! displayed values, and lays out one [`Chart`]. Builders are pure: the same
//! table and theme always produce the same marks.

mod delivery;
mod donut;
mod freight;
mod holidays;
mod revenue;
mod treemap;

pub use delivery::{delivery_date_difference, real_vs_predicted_delivered_time};
pub use donut::{
    global_amount_order_status, top_10_least_revenue_categories,
    top_10_revenue_categories_amount,
};
pub use freight::freight_value_weight_relationship;
pub use holidays::order_amount_per_day_with_holidays;
pub use revenue::revenue_by_month_year;
pub use treemap::{revenue_per_state, top_10_revenue_categories};

use bizviz_charts::{
    AXIS_RULES, AxisStyle, ChartLayout, ChartSpec, GridStyle, HeuristicTextMeasurer,
    RectMarkSpec, StrokeStyle, TextMeasurer, TextStyle, TitleSpec, padded_domain,
};
use bizviz_core::{Mark, MarkId};
use bizviz_frame::{Schema, Table};
use kurbo::Rect;
use log::debug;
use peniko::Color;

use crate::{Chart, ChartSummary, ReportError, Theme};

pub(crate) const TITLE_ID: u64 = 0x1;
pub(crate) const PLOT_FRAME_ID: u64 = 0x2;
pub(crate) const AXIS_LEFT: u64 = 0x10_000;
pub(crate) const AXIS_RIGHT: u64 = 0x20_000;
pub(crate) const AXIS_BOTTOM: u64 = 0x30_000;
pub(crate) const LEGEND: u64 = 0x40_000;
pub(crate) const SERIES_A: u64 = 0x100_000;
pub(crate) const SERIES_B: u64 = 0x200_000;
pub(crate) const SERIES_C: u64 = 0x300_000;
pub(crate) const SERIES_D: u64 = 0x400_000;

pub(crate) fn measurer() -> &'static dyn TextMeasurer {
    &HeuristicTextMeasurer
}

/// Validates `table` for the chart `name`.
pub(crate) fn check(name: &str, schema: &Schema, table: &Table) -> Result<(), ReportError> {
    if let Err(e) = schema.check(table) {
        debug!("{name}: columns are {:?}", table.names().collect::<Vec<_>>());
        return Err(e.into());
    }
    debug!(
        "{name}: schema ok ({} columns, {} rows)",
        schema.fields().len(),
        table.row_count()
    );
    Ok(())
}

pub(crate) fn axis_style(theme: &Theme, title_pt: f64) -> AxisStyle {
    let rule = StrokeStyle::solid(theme.foreground, theme.pt(0.8));
    AxisStyle {
        rule,
        label_fill: theme.foreground.into(),
        label_font_size: theme.pt(theme.font_size),
        title_fill: theme.foreground.into(),
        title_font_size: theme.pt(title_pt),
    }
}

pub(crate) fn title(theme: &Theme, text: &str, size_pt: f64, bold: bool) -> TitleSpec {
    let size = theme.pt(size_pt);
    let style = if bold {
        TextStyle::bold(size)
    } else {
        TextStyle::new(size)
    };
    TitleSpec::new(MarkId::from_raw(TITLE_ID), text, style).with_fill(theme.foreground)
}

pub(crate) fn grid(theme: &Theme, alpha: f32) -> GridStyle {
    GridStyle {
        stroke: StrokeStyle::solid(theme.foreground.with_alpha(alpha), theme.pt(0.8)),
    }
}

/// The four-sided box drawn around a plot area.
pub(crate) fn plot_frame(theme: &Theme, plot: Rect) -> Mark {
    RectMarkSpec::new(MarkId::from_raw(PLOT_FRAME_ID), plot)
        .with_fill(Color::TRANSPARENT)
        .with_stroke(StrokeStyle::solid(theme.foreground, theme.pt(0.8)))
        .with_z_index(AXIS_RULES)
        .mark()
}

/// Lays out `spec`, builds series marks, and packages the result.
pub(crate) fn assemble(
    name: &'static str,
    theme: &Theme,
    spec: &ChartSpec,
    summary: ChartSummary,
    build_series: impl FnOnce(&ChartSpec, Rect) -> Vec<Mark>,
) -> Chart {
    let (layout, marks) = spec.marks(measurer(), build_series);
    let title = spec
        .title
        .as_ref()
        .map(|t| t.text.clone())
        .unwrap_or_default();
    package(name, title, theme, layout, marks, summary)
}

pub(crate) fn package(
    name: &'static str,
    title: String,
    theme: &Theme,
    layout: ChartLayout,
    marks: Vec<Mark>,
    summary: ChartSummary,
) -> Chart {
    debug!(
        "{name}: plot {:?}, {} marks",
        (layout.plot.x0, layout.plot.y0, layout.plot.x1, layout.plot.y1),
        marks.len()
    );
    Chart {
        name,
        title,
        layout,
        marks,
        summary,
        background: theme.background,
        font_family: theme.font_family.clone(),
    }
}

/// Pads `extent` for bars: the domain always includes zero and is only
/// padded away from it.
pub(crate) fn zero_based_domain((min, max): (f64, f64), margin: f64) -> (f64, f64) {
    let lo = min.min(0.0);
    let hi = max.max(0.0);
    let (plo, phi) = padded_domain((lo, hi), margin);
    (if lo < 0.0 { plo } else { 0.0 }, if hi > 0.0 { phi } else { 0.0 })
}

/// The last whitespace-separated token of `s` (or `s` itself when blank).
pub(crate) fn last_token(s: &str) -> &str {
    s.split_whitespace().next_back().unwrap_or(s)
}
