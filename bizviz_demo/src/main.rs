// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders the bizviz report charts from built-in sample data.
//!
//! ```text
//! bizviz_demo [--out DIR] [--config FILE] [--html] [--year YEAR] [CHART...]
//! ```

mod cli;
mod config;
mod error;
mod sample_data;

use std::error::Error as _;
use std::process::ExitCode;

use bizviz_report::{HtmlReport, ReportYear, Reporter, Surface, SvgDir, Theme};
use clap::Parser;
use log::{error, info};

use crate::cli::{ChartName, Cli, Settings};
use crate::config::Config;
use crate::error::DemoError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            let mut source = e.source();
            while let Some(cause) = source {
                error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), DemoError> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let settings = Settings::resolve(cli, &config);
    let year = ReportYear::try_from(settings.year)?;
    let theme = config.theme.apply(Theme::default())?;

    if settings.html {
        let path = settings.out_dir.join("report.html");
        let mut reporter = Reporter::new(theme, HtmlReport::new(path, "bizviz report"));
        render(&mut reporter, &settings.charts, year)?;
        let page = reporter.surface().finish()?;
        info!("wrote {} charts to {}", reporter.surface().len(), page.display());
    } else {
        let mut reporter = Reporter::new(theme, SvgDir::new(&settings.out_dir));
        render(&mut reporter, &settings.charts, year)?;
        info!(
            "wrote {} SVG files to {}",
            reporter.surface().written().len(),
            settings.out_dir.display()
        );
    }
    Ok(())
}

fn render<S: Surface>(
    reporter: &mut Reporter<S>,
    charts: &[ChartName],
    year: ReportYear,
) -> Result<(), DemoError> {
    let year = year.get();
    for chart in charts {
        match chart {
            ChartName::RevenueByMonthYear => {
                reporter.plot_revenue_by_month_year(&sample_data::revenue_by_month()?, year)?;
            }
            ChartName::RealVsPredictedDeliveredTime => reporter
                .plot_real_vs_predicted_delivered_time(&sample_data::delivery_time()?, year)?,
            ChartName::GlobalAmountOrderStatus => {
                reporter.plot_global_amount_order_status(&sample_data::order_status()?)?;
            }
            ChartName::RevenuePerState => {
                reporter.plot_revenue_per_state(&sample_data::revenue_per_state()?)?;
            }
            ChartName::Top10LeastRevenueCategories => reporter
                .plot_top_10_least_revenue_categories(&sample_data::least_revenue_categories()?)?,
            ChartName::Top10RevenueCategoriesAmount => reporter
                .plot_top_10_revenue_categories_amount(&sample_data::top_revenue_categories()?)?,
            ChartName::Top10RevenueCategories => {
                reporter.plot_top_10_revenue_categories(&sample_data::top_revenue_categories()?)?;
            }
            ChartName::FreightValueWeightRelationship => {
                reporter.plot_freight_value_weight_relationship(&sample_data::freight()?)?;
            }
            ChartName::DeliveryDateDifference => {
                reporter.plot_delivery_date_difference(&sample_data::delivery_difference()?)?;
            }
            ChartName::OrderAmountPerDayWithHolidays => {
                reporter.plot_order_amount_per_day_with_holidays(&sample_data::orders_per_day()?)?;
            }
        }
    }
    Ok(())
}
