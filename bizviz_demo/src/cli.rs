// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::Config;

/// Render the bizviz report charts from built-in sample data.
#[derive(Parser, Debug)]
#[command(name = "bizviz_demo", version, about)]
pub(crate) struct Cli {
    /// Output directory [default: bizviz_out]
    #[arg(long, value_name = "DIR")]
    pub(crate) out: Option<PathBuf>,

    /// TOML config file (`out_dir`, `html`, `year`, `[theme]`)
    #[arg(long, value_name = "FILE")]
    pub(crate) config: Option<PathBuf>,

    /// Write one `report.html` page instead of one SVG per chart
    #[arg(long)]
    pub(crate) html: bool,

    /// Year for the monthly charts (2016, 2017 or 2018) [default: 2017]
    #[arg(long)]
    pub(crate) year: Option<i32>,

    /// Charts to render [default: all]
    #[arg(value_enum, value_name = "CHART")]
    pub(crate) charts: Vec<ChartName>,
}

/// The report charts, by function name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "snake_case")]
pub(crate) enum ChartName {
    RevenueByMonthYear,
    RealVsPredictedDeliveredTime,
    GlobalAmountOrderStatus,
    RevenuePerState,
    #[value(name = "top_10_least_revenue_categories")]
    Top10LeastRevenueCategories,
    #[value(name = "top_10_revenue_categories_amount")]
    Top10RevenueCategoriesAmount,
    #[value(name = "top_10_revenue_categories")]
    Top10RevenueCategories,
    FreightValueWeightRelationship,
    DeliveryDateDifference,
    OrderAmountPerDayWithHolidays,
}

const DEFAULT_OUT_DIR: &str = "bizviz_out";
const DEFAULT_YEAR: i32 = 2017;

/// Flags merged over the config file.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Settings {
    pub(crate) out_dir: PathBuf,
    pub(crate) html: bool,
    pub(crate) year: i32,
    pub(crate) charts: Vec<ChartName>,
}

impl Settings {
    pub(crate) fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            out_dir: cli
                .out
                .clone()
                .or_else(|| config.out_dir.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR)),
            html: cli.html || config.html,
            year: cli.year.or(config.year).unwrap_or(DEFAULT_YEAR),
            charts: if cli.charts.is_empty() {
                ChartName::value_variants().to_vec()
            } else {
                cli.charts.clone()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_config_file() {
        let cli = Cli::try_parse_from([
            "bizviz_demo",
            "--year",
            "2018",
            "top_10_revenue_categories",
            "revenue_per_state",
        ])
        .unwrap();
        let config = Config {
            out_dir: Some(PathBuf::from("from_config")),
            year: Some(2016),
            html: true,
            ..Config::default()
        };
        let settings = Settings::resolve(&cli, &config);
        assert_eq!(settings.out_dir, PathBuf::from("from_config"));
        assert_eq!(settings.year, 2018);
        assert!(settings.html);
        assert_eq!(
            settings.charts,
            [ChartName::Top10RevenueCategories, ChartName::RevenuePerState]
        );
    }

    #[test]
    fn no_charts_means_all_of_them() {
        let cli = Cli::try_parse_from(["bizviz_demo"]).unwrap();
        let settings = Settings::resolve(&cli, &Config::default());
        assert_eq!(settings.charts.len(), 10);
        assert_eq!(settings.year, DEFAULT_YEAR);
        assert!(!settings.html);
    }

    #[test]
    fn unknown_chart_names_are_rejected() {
        assert!(Cli::try_parse_from(["bizviz_demo", "pie_of_everything"]).is_err());
    }
}
