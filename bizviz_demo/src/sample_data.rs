// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Built-in query results shaped like the report's SQL output.

use core::f64::consts::TAU;

use bizviz_frame::{Table, TableError};
use chrono::{Datelike, Days, NaiveDate};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Monthly revenue per year (`month`, `Year2016`, `Year2017`, `Year2018`).
pub(crate) fn revenue_by_month() -> Result<Table, TableError> {
    Table::new()
        .with_column("month", MONTHS.to_vec())?
        .with_column(
            "Year2016",
            vec![
                0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 46_566.7, 0.0, 19.6,
            ],
        )?
        .with_column(
            "Year2017",
            vec![
                127_545.7, 271_298.7, 414_369.4, 390_952.2, 567_066.7, 490_225.6, 566_403.9,
                646_000.6, 701_169.9, 751_140.3, 1_153_393.2, 843_078.3,
            ],
        )?
        .with_column(
            "Year2018",
            vec![
                950_030.4, 844_178.7, 983_213.4, 996_647.8, 996_517.7, 865_124.3, 895_507.2,
                854_686.3, 0.0, 0.0, 0.0, 0.0,
            ],
        )
}

/// Average real and estimated delivery days per month and year.
pub(crate) fn delivery_time() -> Result<Table, TableError> {
    Table::new()
        .with_column("month", MONTHS.to_vec())?
        .with_column(
            "Year2016_real_time",
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 54.8, 19.6, 0.0, 4.7],
        )?
        .with_column(
            "Year2016_estimated_time",
            vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 18.2, 55.7, 0.0, 28.1],
        )?
        .with_column(
            "Year2017_real_time",
            vec![12.6, 13.2, 12.9, 14.9, 11.3, 11.1, 11.2, 10.9, 11.9, 11.6, 15.2, 15.2],
        )?
        .with_column(
            "Year2017_estimated_time",
            vec![39.6, 31.8, 24.3, 27.4, 24.4, 24.8, 23.4, 23.3, 23.8, 23.9, 24.0, 26.2],
        )?
        .with_column(
            "Year2018_real_time",
            vec![14.1, 16.9, 16.2, 11.5, 11.3, 9.3, 8.8, 7.7, 0.0, 0.0, 0.0, 0.0],
        )?
        .with_column(
            "Year2018_estimated_time",
            vec![26.4, 26.0, 24.0, 23.8, 24.5, 28.5, 26.0, 18.0, 0.0, 0.0, 0.0, 0.0],
        )
}

/// Order counts per status.
pub(crate) fn order_status() -> Result<Table, TableError> {
    Table::new()
        .with_column(
            "order_status",
            vec![
                "order delivered",
                "order shipped",
                "order canceled",
                "order unavailable",
                "order invoiced",
                "order processing",
                "order created",
                "order approved",
            ],
        )?
        .with_column(
            "Ammount",
            vec![96_478.0, 1_107.0, 625.0, 609.0, 314.0, 301.0, 5.0, 2.0],
        )
}

/// Revenue per customer state.
pub(crate) fn revenue_per_state() -> Result<Table, TableError> {
    Table::new()
        .with_column(
            "customer_state",
            vec![
                "SP", "RJ", "MG", "RS", "PR", "SC", "BA", "DF", "GO", "ES", "PE", "CE", "PA",
                "MT", "MA",
            ],
        )?
        .with_column(
            "Revenue",
            vec![
                5_998_226.9, 2_144_379.7, 1_872_257.3, 890_898.5, 811_156.4, 623_086.4,
                616_645.8, 355_141.1, 350_092.3, 317_682.7, 324_850.4, 279_464.0, 218_295.9,
                187_029.3, 152_523.0,
            ],
        )
}

/// The ten lowest-revenue product categories.
pub(crate) fn least_revenue_categories() -> Result<Table, TableError> {
    Table::new()
        .with_column(
            "Category",
            vec![
                "security and services",
                "fashion childrens clothes",
                "cds music dvds",
                "home comfort 2",
                "flowers",
                "arts and craftmanship",
                "la cuisine",
                "fashion sport",
                "diapers and hygiene",
                "fashio female clothing",
            ],
        )?
        .with_column(
            "Revenue",
            vec![
                324.51, 718.98, 1_199.43, 1_710.54, 2_213.01, 2_326.17, 2_913.53, 2_681.24,
                4_126.17, 4_902.17,
            ],
        )
}

/// The ten highest-revenue product categories with their order counts.
pub(crate) fn top_revenue_categories() -> Result<Table, TableError> {
    Table::new()
        .with_column(
            "Category",
            vec![
                "bed table bath",
                "health beauty",
                "computers accessories",
                "furniture decoration",
                "watches gifts",
                "sports leisure",
                "housewares",
                "auto",
                "garden tools",
                "cool stuff",
            ],
        )?
        .with_column(
            "Num_order",
            vec![
                9_272.0, 8_647.0, 6_529.0, 6_307.0, 5_493.0, 7_529.0, 5_743.0, 3_809.0,
                3_448.0, 3_559.0,
            ],
        )?
        .with_column(
            "Revenue",
            vec![
                1_712_553.7, 1_657_373.1, 1_585_330.5, 1_430_176.4, 1_429_216.7, 1_392_127.6,
                1_094_758.1, 852_294.3, 838_280.8, 779_698.0,
            ],
        )
}

/// Per-item product weight and freight value.
pub(crate) fn freight() -> Result<Table, TableError> {
    const ROWS: u32 = 400;
    let mut weight = Vec::new();
    let mut freight = Vec::new();
    for i in 0..ROWS {
        let t = f64::from(i);
        // Spread weights unevenly over 50 g to 30 kg, most of them light.
        let u = f64::from(i.wrapping_mul(7_919) % ROWS) / f64::from(ROWS);
        let w = 50.0 + 30_000.0 * u * u * u;
        weight.push(w.round());
        freight.push(((9.0 + 0.0021 * w + 4.0 * (0.37 * t).sin()).max(0.0) * 100.0).round() / 100.0);
    }
    Table::new()
        .with_column("product_weight_g", weight)?
        .with_column("freight_value", freight)
}

/// Per-order difference between estimated and actual delivery date, by state.
pub(crate) fn delivery_difference() -> Result<Table, TableError> {
    let states = [
        ("AC", 19.8),
        ("RO", 19.1),
        ("AP", 18.9),
        ("AM", 18.6),
        ("RR", 16.4),
        ("MT", 13.4),
        ("PA", 13.2),
        ("RS", 12.9),
        ("SP", 10.1),
        ("RJ", 10.9),
        ("MG", 12.3),
        ("BA", 9.9),
        ("CE", 9.9),
        ("SE", 9.1),
        ("AL", 7.9),
    ];
    let mut state = Vec::new();
    let mut difference = Vec::new();
    for round in 0..4_i32 {
        for (code, mean) in states {
            state.push(code);
            difference.push(mean + f64::from(round - 1) * 1.5);
        }
    }
    Table::new()
        .with_column("Delivery_Difference", difference)?
        .with_column("State", state)
}

const HOLIDAYS_2017: [(u32, u32); 12] = [
    (1, 1),
    (2, 27),
    (2, 28),
    (4, 14),
    (4, 21),
    (5, 1),
    (6, 15),
    (9, 7),
    (10, 12),
    (11, 2),
    (11, 15),
    (12, 25),
];

/// Daily order counts for 2017 with national holiday flags.
///
/// Dates are ISO text, as they come back from the database.
pub(crate) fn orders_per_day() -> Result<Table, TableError> {
    let mut dates = Vec::new();
    let mut counts = Vec::new();
    let mut holiday = Vec::new();
    let start = NaiveDate::from_ymd_opt(2017, 1, 1).unwrap_or_default();
    for offset in 0..365 {
        let Some(day) = start.checked_add_days(Days::new(offset)) else {
            break;
        };
        let t = f64::from(day.ordinal0());
        let weekly = 1.0 + 0.15 * (TAU * t / 7.0).sin();
        let mut count = ((40.0 + 0.75 * t) * weekly).round();
        if (day.month(), day.day()) == (11, 24) {
            count = 1_147.0;
        }
        dates.push(day.format("%Y-%m-%d").to_string());
        counts.push(count);
        holiday.push(HOLIDAYS_2017.contains(&(day.month(), day.day())));
    }
    Table::new()
        .with_column("date", dates)?
        .with_column("order_count", counts)?
        .with_column("holiday", holiday)
}

#[cfg(test)]
mod tests {
    use bizviz_report::{Theme, charts};

    use super::*;

    #[test]
    fn every_sample_table_renders() {
        let theme = Theme::default();
        for year in [2016, 2017, 2018] {
            charts::revenue_by_month_year(&revenue_by_month().unwrap(), year, &theme).unwrap();
            charts::real_vs_predicted_delivered_time(&delivery_time().unwrap(), year, &theme)
                .unwrap();
        }
        charts::global_amount_order_status(&order_status().unwrap(), &theme).unwrap();
        charts::revenue_per_state(&revenue_per_state().unwrap(), &theme).unwrap();
        charts::top_10_least_revenue_categories(&least_revenue_categories().unwrap(), &theme)
            .unwrap();
        charts::top_10_revenue_categories_amount(&top_revenue_categories().unwrap(), &theme)
            .unwrap();
        charts::top_10_revenue_categories(&top_revenue_categories().unwrap(), &theme).unwrap();
        charts::freight_value_weight_relationship(&freight().unwrap(), &theme).unwrap();
        charts::delivery_date_difference(&delivery_difference().unwrap(), &theme).unwrap();
        charts::order_amount_per_day_with_holidays(&orders_per_day().unwrap(), &theme).unwrap();
    }

    #[test]
    fn a_year_of_days_with_twelve_holidays() {
        let table = orders_per_day().unwrap();
        assert_eq!(table.row_count(), 365);
        let holidays = table.bools("holiday").unwrap().iter().filter(|h| **h).count();
        assert_eq!(holidays, HOLIDAYS_2017.len());
    }
}
