// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input tables for `bizviz` report charts.
//!
//! Report charts consume pre-aggregated query results. This crate provides:
//! - [`Table`]: ordered, uniquely named, equally long typed columns,
//! - [`Schema`]: the column contract a chart expects, checked up front,
//! - small transforms (grouping, sorting, row selection), and
//! - the summary statistics charts display (Pearson correlation, quantiles, fits).
//!
//! Missing numeric values are `NaN`. Statistics skip them the way a dataframe would.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
mod float;
mod schema;
pub mod stats;
mod table;
mod transform;

pub use schema::{Field, Schema};
pub use table::{Column, ColumnType, Table, TableError};
pub use transform::{AggregateOp, Grouped, SortOrder, argsort_dates, argsort_f64, group_by_text};
