// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Properties every report chart shares.

use bizviz_frame::{Column, Table, stats};

use crate::{Chart, ReportError, Theme, charts};

type Builder = fn(&Table, &Theme) -> Result<Chart, ReportError>;

fn table(columns: Vec<(&str, Column)>) -> Table {
    let mut t = Table::new();
    for (name, column) in columns {
        t.push_column(name, column).unwrap();
    }
    t
}

fn revenue_2017(t: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    charts::revenue_by_month_year(t, 2017, theme)
}

fn delivery_time_2016(t: &Table, theme: &Theme) -> Result<Chart, ReportError> {
    charts::real_vs_predicted_delivered_time(t, 2016, theme)
}

fn months() -> Column {
    vec!["Jan", "Feb", "Mar", "Apr"].into()
}

/// One minimal valid input per chart, with the columns the chart requires.
fn fixtures() -> Vec<(&'static str, Builder, Table)> {
    vec![
        (
            "revenue_by_month_year",
            revenue_2017 as Builder,
            table(vec![
                ("month", months()),
                ("Year2017", vec![1200.5, 980.0, 1430.25, 1310.0].into()),
            ]),
        ),
        (
            "real_vs_predicted_delivered_time",
            delivery_time_2016 as Builder,
            table(vec![
                ("month", months()),
                ("Year2016_real_time", vec![12.0, 14.5, 10.25, 11.0].into()),
                ("Year2016_estimated_time", vec![30.0, 28.0, 26.5, 27.0].into()),
            ]),
        ),
        (
            "global_amount_order_status",
            charts::global_amount_order_status as Builder,
            table(vec![
                ("order_status", vec!["delivered", "shipped", "canceled"].into()),
                ("Ammount", vec![96478.0, 1107.0, 625.0].into()),
            ]),
        ),
        (
            "revenue_per_state",
            charts::revenue_per_state as Builder,
            table(vec![
                ("customer_state", vec!["SP", "RJ", "MG"].into()),
                ("Revenue", vec![5_998_226.0, 2_144_379.0, 1_872_257.0].into()),
            ]),
        ),
        (
            "top_10_least_revenue_categories",
            charts::top_10_least_revenue_categories as Builder,
            table(vec![
                ("Category", vec!["security and services", "fashion childrens clothes"].into()),
                ("Revenue", vec![324.51, 785.67].into()),
            ]),
        ),
        (
            "top_10_revenue_categories_amount",
            charts::top_10_revenue_categories_amount as Builder,
            table(vec![
                ("Category", vec!["health beauty", "watches gifts", "bed bath table"].into()),
                ("Revenue", vec![1_441_248.0, 1_305_541.0, 1_241_681.0].into()),
            ]),
        ),
        (
            "top_10_revenue_categories",
            charts::top_10_revenue_categories as Builder,
            table(vec![
                ("Category", vec!["health beauty", "watches gifts"].into()),
                ("Num_order", vec![8836.0, 5624.0].into()),
            ]),
        ),
        (
            "freight_value_weight_relationship",
            charts::freight_value_weight_relationship as Builder,
            table(vec![
                ("product_weight_g", vec![300.0, 650.0, 1200.0, 2500.0, 9000.0].into()),
                ("freight_value", vec![11.0, 14.5, 18.0, 27.25, 80.0].into()),
            ]),
        ),
        (
            "delivery_date_difference",
            charts::delivery_date_difference as Builder,
            table(vec![
                ("Delivery_Difference", vec![8.0, 13.0, 19.0, 11.0].into()),
                ("State", vec!["AL", "MA", "AC", "AL"].into()),
            ]),
        ),
        (
            "order_amount_per_day_with_holidays",
            charts::order_amount_per_day_with_holidays as Builder,
            table(vec![
                ("date", vec!["2017-11-24", "2017-11-23", "2017-11-25", "2017-12-25"].into()),
                ("order_count", vec![1147.0, 156.0, 487.0, 104.0].into()),
                ("holiday", vec![true, false, false, true].into()),
            ]),
        ),
    ]
}

#[test]
fn every_chart_builds_from_a_minimal_table() {
    let theme = Theme::default();
    for (name, build, input) in fixtures() {
        let chart = build(&input, &theme).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(chart.name, name);
        assert!(!chart.marks.is_empty(), "{name} has no marks");
        assert!(chart.to_svg().starts_with("<svg"), "{name}");
    }
}

#[test]
fn every_chart_rejects_a_missing_column() {
    let theme = Theme::default();
    for (name, build, input) in fixtures() {
        for dropped in input.names() {
            let kept: Vec<&str> = input.names().filter(|n| *n != dropped).collect();
            let mut partial = Table::new();
            for n in kept {
                partial
                    .push_column(n, input.column(n).unwrap().clone())
                    .unwrap();
            }
            let err = build(&partial, &theme)
                .err()
                .unwrap_or_else(|| panic!("{name} built without `{dropped}`"));
            assert!(matches!(err, ReportError::Schema(_)), "{name}: {err}");
            assert!(err.to_string().contains(dropped), "{name}: {err}");
        }
    }
}

#[test]
fn donut_wedges_and_legend_cover_every_category() {
    let theme = Theme::default();
    let donuts = [
        "global_amount_order_status",
        "top_10_least_revenue_categories",
        "top_10_revenue_categories_amount",
    ];
    for (name, build, input) in fixtures().into_iter().filter(|f| donuts.contains(&f.0)) {
        let chart = build(&input, &theme).unwrap();
        let value_column = input.names().nth(1).unwrap();
        let shown = stats::sum(&chart.summary.series[0].values);
        let expected = stats::sum(input.numbers(value_column).unwrap());
        assert!((shown - expected).abs() < 1e-9, "{name}");
        assert_eq!(chart.summary.legend.len(), input.row_count(), "{name}");
    }
}

#[test]
fn freight_correlation_is_pearson() {
    let (_, build, input) = fixtures()
        .into_iter()
        .find(|f| f.0 == "freight_value_weight_relationship")
        .unwrap();
    let chart = build(&input, &Theme::default()).unwrap();
    let expected = stats::pearson(
        input.numbers("product_weight_g").unwrap(),
        input.numbers("freight_value").unwrap(),
    );
    let r = chart.summary.correlation.unwrap();
    assert!((r - expected).abs() < 1e-9, "{r} vs {expected}");
}

#[test]
fn holiday_markers_match_true_flags() {
    let (_, build, input) = fixtures()
        .into_iter()
        .find(|f| f.0 == "order_amount_per_day_with_holidays")
        .unwrap();
    let chart = build(&input, &Theme::default()).unwrap();
    let flags = input.bools("holiday").unwrap();
    assert_eq!(chart.summary.markers, flags.iter().filter(|h| **h).count());
    assert_eq!(chart.summary.annotations, 2);
}

#[test]
fn rebuilding_a_chart_changes_nothing() {
    let theme = Theme::default();
    for (name, build, input) in fixtures() {
        let first = build(&input, &theme).unwrap();
        let second = build(&input, &theme).unwrap();

        let mut scene = first.scene();
        let diffs = scene.tick(second.marks.iter().cloned());
        assert!(diffs.is_empty(), "{name}: {} diffs", diffs.len());
        assert_eq!(first.summary, second.summary, "{name}");
        assert_eq!(first.to_svg(), second.to_svg(), "{name}");
    }
}

#[test]
fn themes_do_not_leak_between_calls() {
    let (_, build, input) = fixtures().remove(0);
    let before = build(&input, &Theme::default()).unwrap();

    let loud = Theme {
        dpi: 200.0,
        ..Theme::default()
    };
    let big = build(&input, &loud).unwrap();
    assert_eq!(big.layout.view.width(), 2.0 * before.layout.view.width());

    let after = build(&input, &Theme::default()).unwrap();
    assert_eq!(before.to_svg(), after.to_svg());
}
