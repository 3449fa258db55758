// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint layers for chart marks, back to front.
//!
//! Marks sharing a layer are painted in [`bizviz_core::MarkId`] order.

/// Gridlines, behind every series.
pub const GRID_LINES: i32 = -50;

/// Filled series marks: bars, wedges and tiles.
pub const SERIES_FILL: i32 = 0;
/// Lines, trend lines and holiday rules.
pub const SERIES_STROKE: i32 = 10;
/// Point markers on top of a line.
pub const SERIES_POINTS: i32 = 20;
/// Text inside tiles.
pub const SERIES_LABELS: i32 = 25;

/// Domain lines, ticks and the plot frame.
pub const AXIS_RULES: i32 = 30;
/// Tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis titles.
pub const AXIS_TITLES: i32 = 50;

/// Legend swatches; the legend frame sits one below.
pub const LEGEND_SWATCHES: i32 = 60;
/// Legend entry text.
pub const LEGEND_LABELS: i32 = 70;
/// Annotation boxes; the arrow sits one below, the text one above.
pub const ANNOTATIONS: i32 = 75;
/// The chart title.
pub const TITLES: i32 = 80;
