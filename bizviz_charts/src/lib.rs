// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `bizviz_core`.
//!
//! This crate sits between report code and the mark model:
//! - **Scales** map data values into screen coordinates.
//! - **Guides** (axes, legends, titles) are measured for layout, then emitted as marks.
//! - **Mark specs** (lines, points, bars, sectors, rules, annotations, treemaps)
//!   turn already-shaped data into positioned [`bizviz_core::Mark`]s.
//!
//! Text shaping is out of scope; text marks carry unshaped strings and layout
//! relies on a [`TextMeasurer`].

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod annotation;
mod axis;
mod bar_mark;
mod chart_spec;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod layout;
mod legend;
mod line_mark;
mod measure;
mod point_mark;
mod rect_mark;
mod rule_mark;
mod scale;
mod sector_mark;
mod text_mark;
mod time;
mod title;
mod treemap;
mod z_order;

pub use annotation::AnnotationSpec;
pub use axis::{AxisOrient, AxisSpec, AxisStyle, GridStyle, StrokeStyle, TickLabels};
pub use bar_mark::{BarMarkSpec, BarOrient};
pub use chart_spec::ChartSpec;
pub use format::{format_tick_with_step, format_value};
pub use layout::{ChartLayout, ChartLayoutSpec, LegendOrient, LegendPlacement, Size};
pub use legend::{LegendItem, LegendSwatch, LegendSwatchesSpec};
pub use line_mark::LineMarkSpec;
pub use measure::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};
pub use point_mark::PointMarkSpec;
pub use rect_mark::RectMarkSpec;
pub use rule_mark::{RuleMarkSpec, clip_segment};
pub use scale::{
    ScaleBand, ScaleBandSpec, ScaleContinuous, ScaleLinear, ScaleLinearSpec, ScaleSpec,
    ScaleTime, ScaleTimeSpec, padded_domain,
};
pub use sector_mark::SectorMarkSpec;
pub use text_mark::TextMarkSpec;
pub use time::{date_from_days, days_from_date, format_date_tick, nice_date_ticks};
pub use title::TitleSpec;
pub use treemap::{TreemapItem, TreemapSpec, squarify};
pub use z_order::*;
