// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut charts: wedges proportional to a value column, with a legend of
//! shortened category labels.

use core::f64::consts::TAU;

use bizviz_charts::{
    ChartSpec, LegendItem, LegendOrient, LegendPlacement, LegendSwatchesSpec, SectorMarkSpec,
};
use bizviz_core::MarkId;
use bizviz_frame::{ColumnType, Schema, Table, stats};
use kurbo::Point;
use log::debug;

use super::{LEGEND, SERIES_A, assemble, check, last_token, title};
use crate::{Chart, ChartSummary, ReportError, Series, Theme};

/// Inner radius as a fraction of the outer radius.
const HOLE: f64 = 0.7;
/// Outer radius as a fraction of half the smaller plot side.
const RADIUS: f64 = 0.8;

/// What distinguishes one donut report from another.
#[derive(Clone, Copy, Debug)]
struct DonutReport<'a> {
    name: &'static str,
    label_column: &'a str,
    value_column: &'a str,
    legend_title: &'a str,
    title: &'a str,
}

/// Order counts per status.
///
/// Requires `order_status` (text) and `Ammount` (number).
pub fn global_amount_order_status(table: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    donut(
        table,
        theme,
        DonutReport {
            name: "global_amount_order_status",
            label_column: "order_status",
            value_column: "Ammount",
            legend_title: "Order Status",
            title: "Order Status Total",
        },
    )
}

/// Revenue share of the ten lowest-revenue categories.
///
/// Requires `Category` (text) and `Revenue` (number).
pub fn top_10_least_revenue_categories(table: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    donut(
        table,
        theme,
        DonutReport {
            name: "top_10_least_revenue_categories",
            label_column: "Category",
            value_column: "Revenue",
            legend_title: "Top 10 Least Revenue Categories",
            title: "Top 10 Least Revenue Categories Amount",
        },
    )
}

/// Revenue share of the ten highest-revenue categories.
///
/// Requires `Category` (text) and `Revenue` (number).
pub fn top_10_revenue_categories_amount(table: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    donut(
        table,
        theme,
        DonutReport {
            name: "top_10_revenue_categories_amount",
            label_column: "Category",
            value_column: "Revenue",
            legend_title: "Top 10 Revenue Categories",
            title: "Top 10 Revenue Categories Amount",
        },
    )
}

fn donut(table: &Table, theme: &Theme, report: DonutReport<'_>) -> Result<Chart, ReportError> {
    check(
        report.name,
        &Schema::new()
            .field(report.label_column, ColumnType::Text)
            .field(report.value_column, ColumnType::Number),
        table,
    )?;

    let categories = table.texts(report.label_column)?;
    let values = table.numbers(report.value_column)?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
        return Err(ReportError::invalid_value(
            report.value_column,
            format!("wedge values must be finite and non-negative, found {bad}"),
        ));
    }
    let total = stats::sum(values);
    if total <= 0.0 {
        return Err(ReportError::invalid_value(
            report.value_column,
            "wedge values sum to zero",
        ));
    }

    let labels: Vec<String> = categories
        .iter()
        .map(|c| last_token(c).to_string())
        .collect();
    let colors = theme.colors(values.len());
    debug!("{}: {} wedges, total {total}", report.name, values.len());

    let legend = LegendSwatchesSpec::new(
        LEGEND,
        labels
            .iter()
            .zip(&colors)
            .map(|(label, color)| LegendItem::solid(label.as_str(), *color))
            .collect(),
    )
    .with_title(report.legend_title)
    .with_font_size(theme.pt(theme.font_size));

    let spec = ChartSpec::new(theme.figure(theme.figures.donut))
        .with_title(title(theme, report.title, theme.title_font_size, false))
        .with_legend(legend, LegendPlacement::new(LegendOrient::Right, theme.pt(6.0)));

    let summary = ChartSummary {
        series: vec![Series::new(report.value_column, values.to_vec())],
        categories: categories.to_vec(),
        legend: labels,
        ..ChartSummary::default()
    };

    Ok(assemble(report.name, theme, &spec, summary, |_, plot| {
        let center = Point::new(0.5 * (plot.x0 + plot.x1), 0.5 * (plot.y0 + plot.y1));
        let outer = RADIUS * 0.5 * plot.width().min(plot.height());
        let mut start = 0.0;
        let mut marks = Vec::new();
        for (i, (&v, color)) in values.iter().zip(colors).enumerate() {
            let sweep = TAU * v / total;
            if sweep > 0.0 {
                marks.push(
                    SectorMarkSpec::new(
                        MarkId::for_row(SERIES_A, i),
                        center,
                        (HOLE * outer, outer),
                        (start, start + sweep),
                    )
                    .with_fill(color)
                    .mark(),
                );
            }
            start += sweep;
        }
        marks
    }))
}
