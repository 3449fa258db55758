// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bizviz_charts::{
    AxisSpec, BarMarkSpec, BarOrient, ChartSpec, LineMarkSpec, PointMarkSpec, ScaleBandSpec,
    ScaleContinuous, ScaleLinearSpec, StrokeStyle, padded_domain,
};
use bizviz_core::{Mark, MarkId};
use bizviz_frame::{ColumnType, Schema, Table, stats};
use kurbo::Point;
use log::{debug, warn};
use peniko::Brush;

use super::{
    AXIS_BOTTOM, AXIS_LEFT, AXIS_RIGHT, SERIES_A, SERIES_B, SERIES_C, assemble, axis_style,
    check, plot_frame, title, zero_based_domain,
};
use crate::{Chart, ChartSummary, ReportError, ReportYear, Series, Theme};

const NAME: &str = "revenue_by_month_year";
const TICKS: usize = 6;
const MARGIN: f64 = 0.05;

/// Revenue per month for one year: a line on the left axis and translucent
/// bars of the same values on an independent right axis.
///
/// Requires `month` (text) and `Year{year}` (number).
pub fn revenue_by_month_year(table: &Table, year: i32, theme: &Theme) -> Result<Chart, ReportError> {
    let year = ReportYear::try_from(year)?;
    let column = year.column_prefix();
    check(
        NAME,
        &Schema::new()
            .field("month", ColumnType::Text)
            .field(column.as_str(), ColumnType::Number),
        table,
    )?;

    let months = table.texts("month")?;
    let values = table.numbers(&column)?;
    let n = values.len();

    let extent = stats::extent(values).unwrap_or_else(|| {
        warn!("{NAME}: `{column}` has no finite values");
        (0.0, 1.0)
    });
    let left = ScaleLinearSpec::new(padded_domain(extent, MARGIN)).with_nice(true);
    let right = ScaleLinearSpec::new(zero_based_domain(extent, MARGIN)).with_nice(true);
    let band = ScaleBandSpec::new(n);
    debug!(
        "{NAME}: left {:?}, right {:?}",
        left.resolved_domain(TICKS),
        right.resolved_domain(TICKS)
    );

    let summary = ChartSummary {
        series: vec![Series::new(column.as_str(), values.to_vec())],
        categories: months.to_vec(),
        y_domain: Some(left.resolved_domain(TICKS)),
        y2_domain: Some(right.resolved_domain(TICKS)),
        ..ChartSummary::default()
    };

    let text = format!("Revenue by month in {year}");
    let spec = ChartSpec::new(theme.figure(theme.figures.revenue))
        .with_title(title(theme, &text, theme.title_font_size, false))
        .with_axis_bottom(
            AxisSpec::bottom(AXIS_BOTTOM, band)
                .with_band_labels(months.to_vec())
                .with_style(axis_style(theme, theme.label_font_size))
                .with_title("month"),
        )
        .with_axis_left(
            AxisSpec::left(AXIS_LEFT, left)
                .with_tick_count(TICKS)
                .with_style(axis_style(theme, theme.label_font_size))
                .with_title(column.as_str()),
        )
        .with_axis_right(
            AxisSpec::right(AXIS_RIGHT, right)
                .with_tick_count(TICKS)
                .with_style(axis_style(theme, theme.label_font_size))
                .with_title(column.as_str()),
        );

    let line_color = theme.color(0);
    let bar_fills: Vec<Brush> = theme
        .colors(n)
        .into_iter()
        .map(|c| c.with_alpha(0.5).into())
        .collect();

    Ok(assemble(NAME, theme, &spec, summary, |_, plot| {
        let band = band.instantiate((plot.x0, plot.x1));
        let y_left = ScaleContinuous::Linear(left.instantiate((plot.y1, plot.y0), TICKS));
        let y_right = ScaleContinuous::Linear(right.instantiate((plot.y1, plot.y0), TICKS));

        let points: Vec<Point> = values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point::new(band.center(i), y_left.map(v)))
            .collect();

        let mut marks: Vec<Mark> = BarMarkSpec::new(BarOrient::Vertical, SERIES_C, band, y_right)
            .with_fills(bar_fills)
            .marks(values);
        marks.extend(
            LineMarkSpec::new(MarkId::from_raw(SERIES_A), points.clone())
                .with_stroke(StrokeStyle::solid(line_color, theme.pt(1.5)))
                .marks(),
        );
        marks.extend(
            PointMarkSpec::new(SERIES_B, points)
                .with_size(theme.pt(6.0))
                .with_fill(line_color)
                .marks(),
        );
        marks.push(plot_frame(theme, plot));
        marks
    }))
}
