// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Report charts for an e-commerce BI review.
//!
//! Each chart is built from a small pre-aggregated [`Table`](bizviz_frame::Table):
//! - [`charts`] holds one pure builder per report chart, returning a [`Chart`]
//!   (marks, layout and a [`ChartSummary`] of the displayed values).
//! - A [`Surface`] decides where finished charts go: SVG files, one HTML page,
//!   or an in-memory [`Recorder`].
//! - [`Reporter`] pairs a [`Theme`] with a surface and exposes one `plot_*`
//!   method per chart.
//!
//! ```no_run
//! use bizviz_frame::Table;
//! use bizviz_report::{Reporter, SvgDir, Theme};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let table = Table::new()
//!     .with_column("customer_state", vec!["SP", "RJ"])?
//!     .with_column("Revenue", vec![120.0, 80.0])?;
//! let mut reporter = Reporter::new(Theme::default(), SvgDir::new("out"));
//! reporter.plot_revenue_per_state(&table)?;
//! # Ok(())
//! # }
//! ```

mod chart;
pub mod charts;
mod error;
mod reporter;
mod surface;
mod svg;
mod theme;
mod year;

#[cfg(test)]
mod report_tests;

pub use chart::{Chart, ChartSummary, Series};
pub use error::ReportError;
pub use reporter::Reporter;
pub use surface::{HtmlReport, Recorder, Surface, SvgDir};
pub use theme::{CATEGORY10, FigureSizes, GridAlphas, Inches, TILE_COLORWAY, Theme};
pub use year::ReportYear;
