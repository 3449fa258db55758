// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition helpers.
//!
//! A chart is assembled from:
//! - a fixed figure size and the plot rectangle left inside it
//! - guide components (title, axes, legend)
//! - a set of series/annotation marks built against the plot rectangle.

extern crate alloc;

use alloc::vec::Vec;

use bizviz_core::Mark;
use kurbo::Rect;

use crate::{
    AxisSpec, ChartLayout, ChartLayoutSpec, LegendPlacement, LegendSwatchesSpec, Size,
    TextMeasurer, TitleSpec,
};

/// A composed chart description that owns guide specs and layout inputs.
#[derive(Clone, Debug, Default)]
pub struct ChartSpec {
    /// Optional title.
    pub title: Option<TitleSpec>,
    /// Layout options (view size and outer padding); guide thicknesses are filled in
    /// by [`ChartSpec::layout`].
    pub layout: ChartLayoutSpec,
    /// Optional left axis.
    pub axis_left: Option<AxisSpec>,
    /// Optional right axis.
    pub axis_right: Option<AxisSpec>,
    /// Optional bottom axis.
    pub axis_bottom: Option<AxisSpec>,
    /// Optional legend.
    pub legend: Option<(LegendSwatchesSpec, LegendPlacement)>,
}

impl ChartSpec {
    /// Creates an empty chart of the given figure size.
    pub fn new(view_size: Size) -> Self {
        Self {
            layout: ChartLayoutSpec {
                view_size,
                outer_padding: 8.0,
                ..ChartLayoutSpec::default()
            },
            ..Self::default()
        }
    }

    /// Sets the title.
    pub fn with_title(mut self, title: TitleSpec) -> Self {
        self.title = Some(title);
        self
    }

    /// Sets the left axis.
    pub fn with_axis_left(mut self, axis: AxisSpec) -> Self {
        self.axis_left = Some(axis);
        self
    }

    /// Sets the right axis.
    pub fn with_axis_right(mut self, axis: AxisSpec) -> Self {
        self.axis_right = Some(axis);
        self
    }

    /// Sets the bottom axis.
    pub fn with_axis_bottom(mut self, axis: AxisSpec) -> Self {
        self.axis_bottom = Some(axis);
        self
    }

    /// Sets the legend.
    pub fn with_legend(mut self, legend: LegendSwatchesSpec, placement: LegendPlacement) -> Self {
        self.legend = Some((legend, placement));
        self
    }

    /// Computes layout for this chart.
    pub fn layout(&self, measurer: &dyn TextMeasurer) -> ChartLayout {
        let mut layout = self.layout;
        layout.title_top = self.title.as_ref().map(|t| t.measure(measurer));
        layout.axis_left = self.axis_left.as_ref().map(|a| a.measure(measurer));
        layout.axis_right = self.axis_right.as_ref().map(|a| a.measure(measurer));
        layout.axis_bottom = self.axis_bottom.as_ref().map(|a| a.measure(measurer));
        layout.legend = self
            .legend
            .as_ref()
            .map(|(spec, placement)| (spec.measure(measurer), *placement));
        ChartLayout::arrange(&layout)
    }

    /// Generates marks for titles/axes/legend, given a computed layout.
    pub fn guide_marks(&self, measurer: &dyn TextMeasurer, layout: &ChartLayout) -> Vec<Mark> {
        let mut out = Vec::new();

        if let (Some(title), Some(rect)) = (self.title.as_ref(), layout.title_top) {
            out.extend(title.marks(rect));
        }

        let plot = layout.plot;
        for (axis, rect) in [
            (self.axis_bottom.as_ref(), layout.axis_bottom),
            (self.axis_left.as_ref(), layout.axis_left),
            (self.axis_right.as_ref(), layout.axis_right),
        ] {
            if let (Some(axis), Some(axis_rect)) = (axis, rect) {
                out.extend(axis.marks(plot, axis_rect));
            }
        }

        if let (Some((legend, _placement)), Some(rect)) = (self.legend.as_ref(), layout.legend) {
            out.extend(legend.marks(measurer, rect.x0, rect.y0));
        }

        out
    }

    /// Produces a full mark list: series marks + guide marks.
    ///
    /// The series builder is invoked with the resolved plot rectangle.
    pub fn marks(
        &self,
        measurer: &dyn TextMeasurer,
        build_series: impl FnOnce(&Self, Rect) -> Vec<Mark>,
    ) -> (ChartLayout, Vec<Mark>) {
        let layout = self.layout(measurer);
        let mut marks = build_series(self, layout.plot);
        marks.extend(self.guide_marks(measurer, &layout));
        (layout, marks)
    }
}
