// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bizviz_charts::{ChartLayout, ChartLayoutSpec, TreemapItem, TreemapSpec};
use bizviz_frame::{AggregateOp, ColumnType, Schema, SortOrder, Table, argsort_f64, group_by_text};
use kurbo::Rect;
use log::debug;

use super::{SERIES_A, check, package};
use crate::{Chart, ChartSummary, ReportError, Series, Theme};

/// Tile area margins in pixels: top, left, right, bottom.
const MARGIN: (f64, f64, f64, f64) = (50.0, 25.0, 25.0, 25.0);

/// Revenue per customer state as a treemap.
///
/// Requires `customer_state` (text) and `Revenue` (number).
pub fn revenue_per_state(table: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    treemap(
        table,
        theme,
        "revenue_per_state",
        "Revenue per state",
        ("customer_state", "Revenue"),
    )
}

/// Order counts of the top revenue categories as a treemap.
///
/// Requires `Category` (text) and `Num_order` (number).
pub fn top_10_revenue_categories(table: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    treemap(
        table,
        theme,
        "top_10_revenue_categories",
        "Top 10 Revenue Categories",
        ("Category", "Num_order"),
    )
}

fn treemap(
    table: &Table,
    theme: &Theme,
    name: &'static str,
    title: &str,
    (label_column, value_column): (&str, &str),
) -> Result<Chart, ReportError> {
    check(
        name,
        &Schema::new()
            .field(label_column, ColumnType::Text)
            .field(value_column, ColumnType::Number),
        table,
    )?;

    let values = table.numbers(value_column)?;
    if let Some(bad) = values.iter().find(|v| **v < 0.0) {
        return Err(ReportError::invalid_value(
            value_column,
            format!("tile values must be non-negative, found {bad}"),
        ));
    }

    let grouped = group_by_text(table.texts(label_column)?, values, AggregateOp::Sum);
    let order = argsort_f64(&grouped.values, SortOrder::Desc);
    let labels: Vec<String> = order.iter().map(|&i| grouped.keys[i].clone()).collect();
    let sums: Vec<f64> = order.iter().map(|&i| grouped.values[i]).collect();
    debug!("{name}: {} tiles from {} rows", sums.len(), table.row_count());

    let mut layout = ChartLayout::arrange(&ChartLayoutSpec {
        view_size: theme.figures.treemap,
        ..ChartLayoutSpec::default()
    });
    let (top, left, right, bottom) = MARGIN;
    let view = layout.view;
    layout.plot = Rect::new(
        view.x0 + left,
        view.y0 + top,
        (view.x1 - right).max(view.x0 + left),
        (view.y1 - bottom).max(view.y0 + top),
    );

    let items = labels
        .iter()
        .zip(&sums)
        .map(|(label, &value)| TreemapItem::new(label.as_str(), value))
        .collect();
    let marks = TreemapSpec::new(SERIES_A, items, theme.tile_colors())
        .with_font_size(theme.pt(theme.font_size))
        .marks(layout.plot);

    let summary = ChartSummary {
        series: vec![Series::new(value_column, sums)],
        categories: labels,
        ..ChartSummary::default()
    };
    Ok(package(name, title.to_string(), theme, layout, marks, summary))
}
