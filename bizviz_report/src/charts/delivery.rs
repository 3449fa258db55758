// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bizviz_charts::{
    AxisSpec, BarMarkSpec, BarOrient, ChartSpec, LegendItem, LegendOrient,
    LegendPlacement, LegendSwatchesSpec, LineMarkSpec, PointMarkSpec, ScaleBandSpec,
    ScaleContinuous, ScaleLinearSpec, StrokeStyle, padded_domain,
};
use bizviz_core::MarkId;
use bizviz_frame::{AggregateOp, ColumnType, Schema, Table, group_by_text, stats};
use kurbo::Point;
use log::{debug, warn};
use peniko::Brush;

use super::{
    AXIS_BOTTOM, AXIS_LEFT, LEGEND, SERIES_A, SERIES_B, SERIES_C, assemble, axis_style, check,
    grid, plot_frame, title, zero_based_domain,
};
use crate::{Chart, ChartSummary, ReportError, ReportYear, Series, Theme};

const TICKS: usize = 6;
const MARGIN: f64 = 0.05;

const DELIVERY_TIME: &str = "real_vs_predicted_delivered_time";

/// Real and estimated average delivery days per month, as two lines on one axis.
///
/// Requires `month` (text), `Year{year}_real_time` and
/// `Year{year}_estimated_time` (numbers).
pub fn real_vs_predicted_delivered_time(
    table: &Table,
    year: i32,
    theme: &Theme,
) -> Result<Chart, ReportError> {
    let year = ReportYear::try_from(year)?;
    let real_col = format!("{}_real_time", year.column_prefix());
    let estimated_col = format!("{}_estimated_time", year.column_prefix());
    check(
        DELIVERY_TIME,
        &Schema::new()
            .field("month", ColumnType::Text)
            .field(real_col.as_str(), ColumnType::Number)
            .field(estimated_col.as_str(), ColumnType::Number),
        table,
    )?;

    let months = table.texts("month")?;
    let real = table.numbers(&real_col)?;
    let estimated = table.numbers(&estimated_col)?;

    let both: Vec<f64> = real.iter().chain(estimated).copied().collect();
    let extent = stats::extent(&both).unwrap_or_else(|| {
        warn!("{DELIVERY_TIME}: no finite delivery times");
        (0.0, 1.0)
    });
    let y = ScaleLinearSpec::new(padded_domain(extent, MARGIN)).with_nice(true);
    let band = ScaleBandSpec::new(months.len()).with_padding(0.0, 0.0);
    debug!("{DELIVERY_TIME}: y {:?}", y.resolved_domain(TICKS));

    let labels = ["Real time", "Estimated time"];
    let colors = [theme.color(0), theme.color(1)];
    let summary = ChartSummary {
        series: vec![
            Series::new(labels[0], real.to_vec()),
            Series::new(labels[1], estimated.to_vec()),
        ],
        categories: months.to_vec(),
        legend: labels.iter().map(ToString::to_string).collect(),
        y_domain: Some(y.resolved_domain(TICKS)),
        ..ChartSummary::default()
    };

    let legend = LegendSwatchesSpec::new(
        LEGEND,
        labels
            .iter()
            .zip(colors)
            .map(|(label, color)| LegendItem::line(*label, color, &[], true))
            .collect(),
    )
    .with_font_size(theme.pt(theme.font_size))
    .with_frame(true);

    let text = format!("Average days delivery time by month in {year}");
    let spec = ChartSpec::new(theme.figure(theme.figures.delivery_time))
        .with_title(title(theme, &text, theme.title_font_size, false))
        .with_axis_bottom(
            AxisSpec::bottom(AXIS_BOTTOM, band)
                .with_band_labels(months.to_vec())
                .with_style(axis_style(theme, theme.label_font_size))
                .with_title("month"),
        )
        .with_axis_left(
            AxisSpec::left(AXIS_LEFT, y)
                .with_tick_count(TICKS)
                .with_style(axis_style(theme, theme.label_font_size))
                .with_title("Average days delivery time"),
        )
        .with_legend(legend, LegendPlacement::new(LegendOrient::TopRight, 10.0));

    Ok(assemble(DELIVERY_TIME, theme, &spec, summary, |_, plot| {
        let band = band.instantiate((plot.x0, plot.x1));
        let y = ScaleContinuous::Linear(y.instantiate((plot.y1, plot.y0), TICKS));
        let mut marks = Vec::new();
        for (k, (values, color)) in [real, estimated].into_iter().zip(colors).enumerate() {
            let k = k as u64;
            let points: Vec<Point> = values
                .iter()
                .enumerate()
                .map(|(i, &v)| Point::new(band.center(i), y.map(v)))
                .collect();
            marks.extend(
                LineMarkSpec::new(MarkId::from_raw(SERIES_A + k), points.clone())
                    .with_stroke(StrokeStyle::solid(color, theme.pt(1.5)))
                    .marks(),
            );
            let base = if k == 0 { SERIES_B } else { SERIES_C };
            marks.extend(
                PointMarkSpec::new(base, points)
                    .with_size(theme.pt(6.0))
                    .with_fill(color)
                    .marks(),
            );
        }
        marks.push(plot_frame(theme, plot));
        marks
    }))
}

const DATE_DIFFERENCE: &str = "delivery_date_difference";

/// Mean difference between estimated and actual delivery date per state, as
/// horizontal bars in first-seen state order.
///
/// Requires `Delivery_Difference` (number) and `State` (text).
pub fn delivery_date_difference(table: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    check(
        DATE_DIFFERENCE,
        &Schema::new()
            .field("Delivery_Difference", ColumnType::Number)
            .field("State", ColumnType::Text),
        table,
    )?;

    let grouped = group_by_text(
        table.texts("State")?,
        table.numbers("Delivery_Difference")?,
        AggregateOp::Mean,
    );
    if grouped.values.iter().any(|v| v.is_nan()) {
        warn!("{DATE_DIFFERENCE}: some states have no finite differences and get no bar");
    }

    let extent = stats::extent(&grouped.values).unwrap_or((0.0, 1.0));
    let x = ScaleLinearSpec::new(zero_based_domain(extent, MARGIN)).with_nice(true);
    let band = ScaleBandSpec::new(grouped.keys.len());
    debug!(
        "{DATE_DIFFERENCE}: {} states, x {:?}",
        grouped.keys.len(),
        x.resolved_domain(TICKS)
    );

    let grid = grid(theme, theme.grid_alpha.delivery_difference);
    let text = "Difference Between Delivery Estimate Date and Delivery Date";
    let spec = ChartSpec::new(theme.figure(theme.figures.delivery_difference))
        .with_title(title(theme, text, 14.0, true))
        .with_axis_bottom(
            AxisSpec::bottom(AXIS_BOTTOM, x)
                .with_tick_count(TICKS)
                .with_style(axis_style(theme, 12.0))
                .with_grid(grid.clone())
                .with_title("Delivery Difference (days)"),
        )
        .with_axis_left(
            AxisSpec::left(AXIS_LEFT, band)
                .with_band_labels(grouped.keys.clone())
                .with_style(axis_style(theme, 12.0))
                .with_grid(grid)
                .with_title("State"),
        );

    let fills: Vec<Brush> = theme
        .colors(grouped.keys.len())
        .into_iter()
        .map(Brush::from)
        .collect();
    let summary = ChartSummary {
        series: vec![Series::new("Delivery_Difference", grouped.values.clone())],
        categories: grouped.keys.clone(),
        x_domain: Some(x.resolved_domain(TICKS)),
        ..ChartSummary::default()
    };

    Ok(assemble(DATE_DIFFERENCE, theme, &spec, summary, |_, plot| {
        let band = band.instantiate((plot.y1, plot.y0));
        let x = ScaleContinuous::Linear(x.instantiate((plot.x0, plot.x1), TICKS));
        let mut marks = BarMarkSpec::new(BarOrient::Horizontal, SERIES_A, band, x)
            .with_fills(fills)
            .marks(&grouped.values);
        marks.push(plot_frame(theme, plot));
        marks
    }))
}

#[cfg(test)]
mod tests {
    use bizviz_core::MarkPayload;

    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn delivery_lines_share_one_axis_and_legend() {
        let table = Table::new()
            .with_column("month", strings(&["Jan", "Feb", "Mar"]))
            .and_then(|t| t.with_column("Year2018_real_time", vec![10.0, 12.0, 9.0]))
            .and_then(|t| t.with_column("Year2018_estimated_time", vec![25.0, 24.0, 26.0]))
            .unwrap();
        let chart = real_vs_predicted_delivered_time(&table, 2018, &Theme::default()).unwrap();

        assert_eq!(chart.title, "Average days delivery time by month in 2018");
        assert_eq!(chart.summary.legend, ["Real time", "Estimated time"]);
        let (lo, hi) = chart.summary.y_domain.unwrap();
        assert!(lo <= 9.0 && hi >= 26.0);
        let lines = chart
            .marks
            .iter()
            .filter(|m| m.id == MarkId::from_raw(SERIES_A) || m.id == MarkId::from_raw(SERIES_A + 1))
            .count();
        assert_eq!(lines, 2);
        assert!(chart.layout.legend.is_some());
    }

    #[test]
    fn state_bars_are_means_in_first_seen_order() {
        let table = Table::new()
            .with_column("Delivery_Difference", vec![10.0, 20.0, -4.0, 12.0])
            .and_then(|t| t.with_column("State", strings(&["SP", "RJ", "AM", "SP"])))
            .unwrap();
        let chart = delivery_date_difference(&table, &Theme::default()).unwrap();

        assert_eq!(chart.summary.categories, ["SP", "RJ", "AM"]);
        assert_eq!(chart.summary.series[0].values, [11.0, 20.0, -4.0]);
        let (lo, hi) = chart.summary.x_domain.unwrap();
        assert!(lo < 0.0 && hi >= 20.0);

        let bars: Vec<_> = chart
            .marks
            .iter()
            .filter_map(|m| match (&m.payload, m.id.0) {
                (MarkPayload::Rect(r), id) if (SERIES_A..SERIES_A + 3).contains(&id) => Some(r.rect),
                _ => None,
            })
            .collect();
        assert_eq!(bars.len(), 3);
        // First-seen state is the top band; the negative bar ends left of the others' start.
        assert!(bars[0].y0 < bars[1].y0 && bars[1].y0 < bars[2].y0);
        assert!(bars[2].x0 < bars[0].x0);
    }
}
