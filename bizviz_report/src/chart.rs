// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use bizviz_charts::ChartLayout;
use bizviz_core::{Mark, Scene};
use peniko::Color;

use crate::svg::SvgDocument;

/// One named numeric series shown by a chart.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    /// Series label (column name or legend label).
    pub name: String,
    /// Values in display order.
    pub values: Vec<f64>,
}

impl Series {
    /// Creates a series.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }
}

/// The numeric content a chart displays, independent of geometry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartSummary {
    /// Plotted series.
    pub series: Vec<Series>,
    /// Category labels along the band axis, wedges or tiles.
    pub categories: Vec<String>,
    /// Legend labels in display order.
    pub legend: Vec<String>,
    /// Horizontal axis domain, if the chart has one.
    pub x_domain: Option<(f64, f64)>,
    /// Left (or only) vertical axis domain.
    pub y_domain: Option<(f64, f64)>,
    /// Right vertical axis domain.
    pub y2_domain: Option<(f64, f64)>,
    /// Correlation coefficient annotated on the chart.
    pub correlation: Option<f64>,
    /// Number of event markers (vertical rules).
    pub markers: usize,
    /// Number of text callouts.
    pub annotations: usize,
}

/// A fully built chart.
#[derive(Clone, Debug)]
pub struct Chart {
    /// Stable slug used as the output file stem.
    pub name: &'static str,
    /// Title text.
    pub title: String,
    /// Computed layout.
    pub layout: ChartLayout,
    /// Every mark (series and guides).
    pub marks: Vec<Mark>,
    /// Displayed values.
    pub summary: ChartSummary,
    /// Figure background.
    pub background: Color,
    /// CSS font family for text.
    pub font_family: String,
}

impl Chart {
    /// Retains this chart's marks in a fresh scene.
    pub fn scene(&self) -> Scene {
        let mut scene = Scene::new();
        scene.tick(self.marks.iter().cloned());
        scene
    }

    /// Serializes the chart as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        SvgDocument {
            view_box: self.layout.view,
            background: self.background,
            font_family: &self.font_family,
        }
        .render(&self.scene())
    }
}
