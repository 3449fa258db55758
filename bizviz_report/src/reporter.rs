// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bizviz_frame::Table;
use log::debug;

use crate::{Chart, ReportError, Surface, Theme, charts};

/// Builds report charts with one theme and shows them on one surface.
///
/// Every `plot_*` method validates its table, builds the chart and blocks
/// until the surface has taken it. A failed call shows nothing.
#[derive(Debug)]
pub struct Reporter<S> {
    theme: Theme,
    surface: S,
}

impl<S: Surface> Reporter<S> {
    /// Creates a reporter.
    pub fn new(theme: Theme, surface: S) -> Self {
        Self { theme, surface }
    }

    /// The display surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    fn show(&mut self, chart: Result<Chart, ReportError>) -> Result<(), ReportError> {
        let chart = chart?;
        self.surface.show(&chart)?;
        debug!("built {} ({} marks)", chart.name, chart.marks.len());
        Ok(())
    }

    /// Monthly revenue of `year`: line with markers plus translucent bars on a
    /// second axis. See [`charts::revenue_by_month_year`].
    pub fn plot_revenue_by_month_year(&mut self, table: &Table, year: i32) -> Result<(), ReportError> {
        let chart = charts::revenue_by_month_year(table, year, &self.theme);
        self.show(chart)
    }

    /// Real vs. estimated delivery days per month of `year`.
    /// See [`charts::real_vs_predicted_delivered_time`].
    pub fn plot_real_vs_predicted_delivered_time(
        &mut self,
        table: &Table,
        year: i32,
    ) -> Result<(), ReportError> {
        let chart = charts::real_vs_predicted_delivered_time(table, year, &self.theme);
        self.show(chart)
    }

    /// Order counts per status as a donut. See [`charts::global_amount_order_status`].
    pub fn plot_global_amount_order_status(&mut self, table: &Table) -> Result<(), ReportError> {
        let chart = charts::global_amount_order_status(table, &self.theme);
        self.show(chart)
    }

    /// Revenue per state as a treemap. See [`charts::revenue_per_state`].
    pub fn plot_revenue_per_state(&mut self, table: &Table) -> Result<(), ReportError> {
        let chart = charts::revenue_per_state(table, &self.theme);
        self.show(chart)
    }

    /// See [`charts::top_10_least_revenue_categories`].
    pub fn plot_top_10_least_revenue_categories(&mut self, table: &Table) -> Result<(), ReportError> {
        let chart = charts::top_10_least_revenue_categories(table, &self.theme);
        self.show(chart)
    }

    /// See [`charts::top_10_revenue_categories_amount`].
    pub fn plot_top_10_revenue_categories_amount(&mut self, table: &Table) -> Result<(), ReportError> {
        let chart = charts::top_10_revenue_categories_amount(table, &self.theme);
        self.show(chart)
    }

    /// See [`charts::top_10_revenue_categories`].
    pub fn plot_top_10_revenue_categories(&mut self, table: &Table) -> Result<(), ReportError> {
        let chart = charts::top_10_revenue_categories(table, &self.theme);
        self.show(chart)
    }

    /// See [`charts::freight_value_weight_relationship`].
    pub fn plot_freight_value_weight_relationship(
        &mut self,
        table: &Table,
    ) -> Result<(), ReportError> {
        let chart = charts::freight_value_weight_relationship(table, &self.theme);
        self.show(chart)
    }

    /// See [`charts::delivery_date_difference`].
    pub fn plot_delivery_date_difference(&mut self, table: &Table) -> Result<(), ReportError> {
        let chart = charts::delivery_date_difference(table, &self.theme);
        self.show(chart)
    }

    /// See [`charts::order_amount_per_day_with_holidays`].
    pub fn plot_order_amount_per_day_with_holidays(
        &mut self,
        table: &Table,
    ) -> Result<(), ReportError> {
        let chart = charts::order_amount_per_day_with_holidays(table, &self.theme);
        self.show(chart)
    }
}
