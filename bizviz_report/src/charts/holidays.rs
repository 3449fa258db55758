// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bizviz_charts::{
    AnnotationSpec, AxisSpec, ChartSpec, LegendItem, LegendOrient, LegendPlacement,
    LegendSwatchesSpec, LineMarkSpec, PointMarkSpec, RuleMarkSpec, ScaleContinuous,
    ScaleLinearSpec, ScaleTimeSpec, StrokeStyle, days_from_date, padded_domain,
};
use bizviz_core::MarkId;
use bizviz_frame::{ColumnType, Schema, Table, argsort_dates, stats};
use kurbo::Point;
use log::{debug, warn};
use peniko::color::palette::css;

use super::{
    AXIS_BOTTOM, AXIS_LEFT, LEGEND, SERIES_A, SERIES_B, SERIES_C, SERIES_D, assemble, axis_style,
    check, grid, measurer, plot_frame, title,
};
use crate::{Chart, ChartSummary, ReportError, Series, Theme};

const NAME: &str = "order_amount_per_day_with_holidays";
const TICKS: usize = 8;
const MARGIN: f64 = 0.05;
/// Only the first few holidays get a callout.
const ANNOTATED: usize = 3;
/// Id stride between callouts (box, text, arrow).
const ANNOTATION_STRIDE: u64 = 0x10;

/// Daily order counts over time, with a dashed vertical marker on every
/// holiday and a callout on the first three.
///
/// Requires `date` (date, or `YYYY-MM-DD` text), `order_count` (number) and
/// `holiday` (bool). Rows are drawn in date order; the input table is not
/// modified.
pub fn order_amount_per_day_with_holidays(
    table: &Table,
    theme: &Theme,
) -> Result<Chart, ReportError> {
    check(
        NAME,
        &Schema::new()
            .field_any_of("date", &[ColumnType::Date, ColumnType::Text])
            .field("order_count", ColumnType::Number)
            .field("holiday", ColumnType::Bool),
        table,
    )?;

    let dates = table.dates("date")?;
    let order = argsort_dates(&dates);
    let sorted = table.take(&order);
    let dates: Vec<_> = order.iter().map(|&i| dates[i]).collect();
    let counts = sorted.numbers("order_count")?;
    let flags = sorted.bools("holiday")?;
    let days: Vec<f64> = dates.iter().map(|&d| days_from_date(d)).collect();

    let holidays: Vec<usize> = flags
        .iter()
        .enumerate()
        .filter_map(|(i, &h)| h.then_some(i))
        .collect();
    // A missing count leaves its callout undrawn.
    let callouts: Vec<usize> = holidays
        .iter()
        .take(ANNOTATED)
        .copied()
        .filter(|&i| counts[i].is_finite())
        .collect();
    debug!(
        "{NAME}: {} days, {} holidays, {} annotated",
        days.len(),
        holidays.len(),
        callouts.len()
    );

    let x = ScaleTimeSpec::new(match stats::extent(&days) {
        Some((a, b)) if a == b => (a - 1.0, b + 1.0),
        Some(extent) => padded_domain(extent, MARGIN),
        None => (0.0, 1.0),
    });
    let top = match stats::extent(counts) {
        Some((_, max)) if max > 0.0 => max * (1.0 + MARGIN),
        _ => {
            warn!("{NAME}: no positive order counts");
            1.0
        }
    };
    let y = ScaleLinearSpec::new((0.0, top)).with_nice(true);

    let line_color = css::STEEL_BLUE.with_alpha(0.8);
    let marker_color = css::RED.with_alpha(0.8);
    let dash = [theme.pt(3.7), theme.pt(1.6)];

    let mut items = vec![LegendItem::line("Orders per Day", line_color, &[], true)];
    if !holidays.is_empty() {
        items.push(LegendItem::line("Holiday", marker_color, &dash, false));
    }
    let legend_labels = items.iter().map(|item| item.label.clone()).collect();
    let legend = LegendSwatchesSpec::new(LEGEND, items)
        .with_font_size(theme.pt(theme.font_size))
        .with_frame(true);

    let grid = grid(theme, theme.grid_alpha.holidays);
    let spec = ChartSpec::new(theme.figure(theme.figures.holidays))
        .with_title(title(
            theme,
            "Orders per Day in 2017 with Holiday Markers",
            16.0,
            true,
        ))
        .with_axis_bottom(
            AxisSpec::bottom(AXIS_BOTTOM, x)
                .with_tick_count(TICKS)
                .with_label_angle(-45.0)
                .with_style(axis_style(theme, 12.0))
                .with_grid(grid.clone())
                .with_title("Date"),
        )
        .with_axis_left(
            AxisSpec::left(AXIS_LEFT, y)
                .with_tick_count(TICKS)
                .with_style(axis_style(theme, 12.0))
                .with_grid(grid)
                .with_title("Number of Orders"),
        )
        .with_legend(legend, LegendPlacement::new(LegendOrient::TopRight, 10.0));

    let summary = ChartSummary {
        series: vec![Series::new("order_count", counts.to_vec())],
        categories: dates.iter().map(ToString::to_string).collect(),
        legend: legend_labels,
        x_domain: Some(x.domain),
        y_domain: Some(y.resolved_domain(TICKS)),
        markers: holidays.len(),
        annotations: callouts.len(),
        ..ChartSummary::default()
    };

    Ok(assemble(NAME, theme, &spec, summary, |_, plot| {
        let xs = ScaleContinuous::Time(x.instantiate((plot.x0, plot.x1)));
        let ys = ScaleContinuous::Linear(y.instantiate((plot.y1, plot.y0), TICKS));
        let points: Vec<Point> = days
            .iter()
            .zip(counts)
            .map(|(&d, &c)| Point::new(xs.map(d), ys.map(c)))
            .collect();

        let mut marks = LineMarkSpec::new(MarkId::from_raw(SERIES_A), points.clone())
            .with_stroke(StrokeStyle::solid(line_color, theme.pt(1.5)))
            .marks();
        marks.extend(
            PointMarkSpec::new(SERIES_B, points.clone())
                .with_size(theme.pt(4.0))
                .with_fill(line_color)
                .marks(),
        );

        for &i in &holidays {
            marks.push(
                RuleMarkSpec::vertical(MarkId::for_row(SERIES_C, i), points[i].x, plot.y0, plot.y1)
                    .with_stroke(marker_color, theme.pt(1.5))
                    .with_dash(&dash)
                    .mark(),
            );
        }

        let offset = theme.pt(10.0);
        for (k, &i) in callouts.iter().enumerate() {
            let target = points[i];
            let font_size = theme.pt(10.0);
            marks.extend(
                AnnotationSpec::new(
                    SERIES_D + k as u64 * ANNOTATION_STRIDE,
                    "Holiday",
                    Point::new(target.x + offset, target.y - offset),
                )
                .with_font_size(font_size)
                .with_padding(0.3 * font_size)
                .with_box_fill(css::YELLOW.with_alpha(0.7))
                .with_arrow_to(target)
                .marks(measurer()),
            );
        }

        marks.push(plot_frame(theme, plot));
        marks
    }))
}

#[cfg(test)]
mod tests {
    use bizviz_core::MarkPayload;
    use chrono::NaiveDate;

    use super::*;

    fn table(dates: Vec<&str>, counts: Vec<f64>, holiday: Vec<bool>) -> Table {
        Table::new()
            .with_column("date", dates)
            .and_then(|t| t.with_column("order_count", counts))
            .and_then(|t| t.with_column("holiday", holiday))
            .unwrap()
    }

    fn in_range(chart: &Chart, base: u64) -> usize {
        chart
            .marks
            .iter()
            .filter(|m| (base..base + 0x10_000).contains(&m.id.0))
            .count()
    }

    #[test]
    fn one_marker_per_holiday_and_three_callouts() {
        let days: Vec<String> = (1..=8).map(|d| format!("2017-11-{d:02}")).collect();
        let chart = order_amount_per_day_with_holidays(
            &table(
                days.iter().map(String::as_str).collect(),
                vec![10.0, 12.0, 8.0, 30.0, 11.0, 9.0, 14.0, 13.0],
                vec![true, false, true, true, false, true, true, false],
            ),
            &Theme::default(),
        )
        .unwrap();

        assert_eq!(chart.summary.markers, 5);
        assert_eq!(in_range(&chart, SERIES_C), 5);
        assert_eq!(chart.summary.annotations, 3);
        // Box, text and arrow per callout.
        assert_eq!(in_range(&chart, SERIES_D), 9);
        assert_eq!(chart.summary.legend, ["Orders per Day", "Holiday"]);
        assert_eq!(chart.summary.y_domain.unwrap().0, 0.0);
    }

    #[test]
    fn holidays_without_a_count_get_a_marker_but_no_callout() {
        let chart = order_amount_per_day_with_holidays(
            &table(
                vec!["2017-01-01", "2017-01-02", "2017-01-03"],
                vec![1.0, f64::NAN, 3.0],
                vec![false, true, false],
            ),
            &Theme::default(),
        )
        .unwrap();

        assert_eq!(chart.summary.markers, 1);
        assert_eq!(in_range(&chart, SERIES_C), 1);
        assert_eq!(chart.summary.annotations, 0);
        assert_eq!(in_range(&chart, SERIES_D), 0);
    }

    #[test]
    fn rows_are_drawn_in_date_order() {
        let input = table(
            vec!["2017-01-03", "2017-01-01", "2017-01-02"],
            vec![3.0, 1.0, 2.0],
            vec![false, false, true],
        );
        let chart = order_amount_per_day_with_holidays(&input, &Theme::default()).unwrap();

        assert_eq!(chart.summary.categories, ["2017-01-01", "2017-01-02", "2017-01-03"]);
        assert_eq!(chart.summary.series[0].values, [1.0, 2.0, 3.0]);
        assert_eq!(input.numbers("order_count").unwrap(), [3.0, 1.0, 2.0]);

        let MarkPayload::Path(line) = &chart
            .marks
            .iter()
            .find(|m| m.id == MarkId::from_raw(SERIES_A))
            .unwrap()
            .payload
        else {
            panic!("the series line is a path");
        };
        let xs: Vec<f64> = line.path.elements().iter().filter_map(|e| e.end_point()).map(|p| p.x).collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "{xs:?}");
    }

    #[test]
    fn no_holidays_means_no_holiday_legend_entry() {
        let dates = vec![
            NaiveDate::from_ymd_opt(2017, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2017, 3, 2).unwrap(),
        ];
        let input = Table::new()
            .with_column("date", dates)
            .and_then(|t| t.with_column("order_count", vec![4.0, 5.0]))
            .and_then(|t| t.with_column("holiday", vec![false, false]))
            .unwrap();
        let chart = order_amount_per_day_with_holidays(&input, &Theme::default()).unwrap();
        assert_eq!(chart.summary.legend, ["Orders per Day"]);
        assert_eq!(chart.summary.markers, 0);
        assert_eq!(in_range(&chart, SERIES_C), 0);
    }

    #[test]
    fn unparseable_dates_are_a_schema_error() {
        let err = order_amount_per_day_with_holidays(
            &table(vec!["2017-01-01", "soon"], vec![1.0, 2.0], vec![false, true]),
            &Theme::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ReportError::Schema(_)), "{err}");
        assert!(err.to_string().contains("soon"), "{err}");
    }
}
