// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bizviz_charts::{
    AnnotationSpec, AxisSpec, ChartSpec, PointMarkSpec, RuleMarkSpec, SERIES_STROKE,
    ScaleContinuous, ScaleLinearSpec, clip_segment,
};
use bizviz_core::{MarkId, TextBaseline};
use bizviz_frame::{ColumnType, Schema, Table, stats};
use kurbo::Point;
use log::{debug, warn};
use peniko::color::palette::css;

use super::{
    AXIS_BOTTOM, AXIS_LEFT, SERIES_A, SERIES_B, SERIES_C, assemble, axis_style, check, grid,
    measurer, plot_frame, title,
};
use crate::{Chart, ChartSummary, ReportError, Series, Theme};

const NAME: &str = "freight_value_weight_relationship";
const TICKS: usize = 8;
const CLIP_QUANTILE: f64 = 0.95;

/// Freight value against product weight: a scatter with a least-squares trend
/// line, annotated with the Pearson correlation.
///
/// Both axes run from zero to the 95th percentile of their column; points
/// beyond are not drawn. Requires `product_weight_g` and `freight_value`
/// (numbers).
pub fn freight_value_weight_relationship(
    table: &Table,
    theme: &Theme,
) -> Result<Chart, ReportError> {
    check(
        NAME,
        &Schema::new()
            .field("product_weight_g", ColumnType::Number)
            .field("freight_value", ColumnType::Number),
        table,
    )?;

    let weight = table.numbers("product_weight_g")?;
    let freight = table.numbers("freight_value")?;

    let correlation = stats::pearson(weight, freight);
    if correlation.is_nan() {
        warn!("{NAME}: correlation is undefined, rendering NaN");
    }
    let x_limit = stats::quantile(weight, CLIP_QUANTILE);
    let y_limit = stats::quantile(freight, CLIP_QUANTILE);
    let x = ScaleLinearSpec::new(axis_domain("product_weight_g", x_limit));
    let y = ScaleLinearSpec::new(axis_domain("freight_value", y_limit));
    debug!("{NAME}: r = {correlation}, x {:?}, y {:?}", x.domain, y.domain);

    let spec = ChartSpec::new(theme.figure(theme.figures.freight))
        .with_title(title(
            theme,
            "Freight Value vs Product Weight Relationship",
            16.0,
            true,
        ))
        .with_axis_bottom(
            AxisSpec::bottom(AXIS_BOTTOM, x)
                .with_tick_count(TICKS)
                .with_style(axis_style(theme, 12.0))
                .with_grid(grid(theme, theme.grid_alpha.freight))
                .with_title("Product Weight (grams)"),
        )
        .with_axis_left(
            AxisSpec::left(AXIS_LEFT, y)
                .with_tick_count(TICKS)
                .with_style(axis_style(theme, 12.0))
                .with_grid(grid(theme, theme.grid_alpha.freight))
                .with_title("Freight Value (BRL)"),
        );

    let summary = ChartSummary {
        series: vec![
            Series::new("product_weight_g", weight.to_vec()),
            Series::new("freight_value", freight.to_vec()),
        ],
        x_domain: Some((0.0, x_limit)),
        y_domain: Some((0.0, y_limit)),
        correlation: Some(correlation),
        annotations: 1,
        ..ChartSummary::default()
    };

    let fit = stats::linear_fit(weight, freight);
    let data_x = stats::extent(weight);

    Ok(assemble(NAME, theme, &spec, summary, |_, plot| {
        let xs = ScaleContinuous::Linear(x.instantiate((plot.x0, plot.x1), TICKS));
        let ys = ScaleContinuous::Linear(y.instantiate((plot.y1, plot.y0), TICKS));

        let points = weight
            .iter()
            .zip(freight)
            .map(|(&w, &f)| Point::new(xs.map(w), ys.map(f)))
            .collect();
        let mut marks = PointMarkSpec::new(SERIES_A, points)
            .with_size(theme.pt(30.0_f64.sqrt()))
            .with_fill(css::STEEL_BLUE.with_alpha(0.6))
            .with_clip(plot)
            .marks();

        if let (Some((slope, intercept)), Some((x0, x1))) = (fit, data_x) {
            let a = Point::new(xs.map(x0), ys.map(slope * x0 + intercept));
            let b = Point::new(xs.map(x1), ys.map(slope * x1 + intercept));
            if let Some((a, b)) = clip_segment(a, b, plot) {
                marks.push(
                    RuleMarkSpec::new(MarkId::from_raw(SERIES_B), a, b)
                        .with_stroke(css::RED, theme.pt(2.0))
                        .with_z_index(SERIES_STROKE)
                        .mark(),
                );
            }
        }

        let font_size = theme.pt(12.0);
        let anchor = Point::new(
            plot.x0 + 0.05 * plot.width(),
            plot.y1 - 0.95 * plot.height(),
        );
        marks.extend(
            AnnotationSpec::new(SERIES_C, format!("Correlation: {correlation:.3}"), anchor)
                .with_baseline(TextBaseline::Alphabetic)
                .with_font_size(font_size)
                .with_padding(0.3 * font_size)
                .with_box_fill(css::WHITE.with_alpha(0.8))
                .marks(measurer()),
        );
        marks.push(plot_frame(theme, plot));
        marks
    }))
}

/// `[0, limit]`, or `[0, 1]` when the percentile is undefined or not positive.
fn axis_domain(column: &str, limit: f64) -> (f64, f64) {
    if limit.is_finite() && limit > 0.0 {
        (0.0, limit)
    } else {
        warn!("{NAME}: no usable 95th percentile for `{column}`, showing [0, 1]");
        (0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use bizviz_core::MarkPayload;

    use super::*;

    fn table(weight: Vec<f64>, freight: Vec<f64>) -> Table {
        Table::new()
            .with_column("product_weight_g", weight)
            .and_then(|t| t.with_column("freight_value", freight))
            .unwrap()
    }

    fn annotation_text(chart: &Chart) -> String {
        chart
            .marks
            .iter()
            .find_map(|m| match &m.payload {
                MarkPayload::Text(t) if m.id == MarkId::from_raw(SERIES_C + 1) => {
                    Some(t.text.clone())
                }
                _ => None,
            })
            .unwrap_or_default()
    }

    #[test]
    fn axes_clip_to_the_95th_percentile_and_outliers_are_hidden() {
        let weight: Vec<f64> = (1..=20).map(f64::from).collect();
        let freight: Vec<f64> = weight.iter().map(|w| 2.0 * w + 1.0).collect();
        let chart = freight_value_weight_relationship(&table(weight, freight), &Theme::default())
            .unwrap();

        let (_, x_hi) = chart.summary.x_domain.unwrap();
        assert!((x_hi - 19.05).abs() < 1e-9, "{x_hi}");
        let points = chart
            .marks
            .iter()
            .filter(|m| (SERIES_A..SERIES_A + 20).contains(&m.id.0))
            .count();
        assert_eq!(points, 19);
        assert_eq!(annotation_text(&chart), "Correlation: 1.000");
        assert!(chart.marks.iter().any(|m| m.id == MarkId::from_raw(SERIES_B)));
    }

    #[test]
    fn correlation_matches_pearson() {
        let weight = vec![100.0, 250.0, 400.0, 800.0, 1200.0, 3000.0];
        let freight = vec![12.0, 15.5, 14.0, 22.0, 25.0, 41.0];
        let expected = stats::pearson(&weight, &freight);
        let chart = freight_value_weight_relationship(&table(weight, freight), &Theme::default())
            .unwrap();
        let r = chart.summary.correlation.unwrap();
        assert!((r - expected).abs() < 1e-12);
        assert!(r > 0.9);
        assert_eq!(annotation_text(&chart), format!("Correlation: {expected:.3}"));
    }

    #[test]
    fn degenerate_inputs_render_nan() {
        let chart = freight_value_weight_relationship(
            &table(vec![5.0, 5.0], vec![1.0, 2.0]),
            &Theme::default(),
        )
        .unwrap();
        assert!(chart.summary.correlation.unwrap().is_nan());
        assert_eq!(annotation_text(&chart), "Correlation: NaN");
        assert!(!chart.marks.iter().any(|m| m.id == MarkId::from_raw(SERIES_B)));

        let chart = freight_value_weight_relationship(
            &table(vec![f64::NAN, f64::NAN], vec![1.0, 2.0]),
            &Theme::default(),
        )
        .unwrap();
        assert!(chart.summary.x_domain.unwrap().1.is_nan());
    }
}
