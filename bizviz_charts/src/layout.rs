// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Figure layout.
//!
//! The figure size is fixed. Guides first report how thick they are, then the
//! plot gets whatever is left and each guide is given the strip beside it.

use kurbo::{Point, Rect};

/// Width and height in scene units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// A `width` by `height` size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Where a legend box goes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendOrient {
    /// Outside the plot on the right, vertically centered.
    Right,
    /// Inside the plot's top-right corner.
    TopRight,
}

/// A legend position and its gap from the plot edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LegendPlacement {
    /// Which side or corner.
    pub orient: LegendOrient,
    /// Gap from the plot; inward for corners.
    pub offset: f64,
}

impl LegendPlacement {
    /// A placement at `orient`, `offset` away from the plot edge.
    pub const fn new(orient: LegendOrient, offset: f64) -> Self {
        Self { orient, offset }
    }
}

impl Default for LegendPlacement {
    fn default() -> Self {
        Self::new(LegendOrient::Right, 18.0)
    }
}

/// Measured guide thicknesses for one figure.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChartLayoutSpec {
    /// Figure size.
    pub view_size: Size,
    /// Height of the title band across the top.
    pub title_top: Option<f64>,
    /// Blank border on every side of the figure.
    pub outer_padding: f64,
    /// Width of the left axis strip.
    pub axis_left: Option<f64>,
    /// Width of the right axis strip.
    pub axis_right: Option<f64>,
    /// Height of the bottom axis strip.
    pub axis_bottom: Option<f64>,
    /// Legend box size and position.
    pub legend: Option<(Size, LegendPlacement)>,
}

/// Rectangles handed out by [`ChartLayout::arrange`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartLayout {
    /// The whole figure, from the origin.
    pub view: Rect,
    /// Title band.
    pub title_top: Option<Rect>,
    /// Data area.
    pub plot: Rect,
    /// Left axis strip.
    pub axis_left: Option<Rect>,
    /// Right axis strip.
    pub axis_right: Option<Rect>,
    /// Bottom axis strip.
    pub axis_bottom: Option<Rect>,
    /// Legend box.
    pub legend: Option<Rect>,
}

fn thickness(guide: Option<f64>) -> f64 {
    guide.map_or(0.0, |t| t.max(0.0))
}

impl ChartLayout {
    /// Splits the figure between the plot and its guides.
    pub fn arrange(spec: &ChartLayoutSpec) -> Self {
        let pad = spec.outer_padding.max(0.0);
        let title = thickness(spec.title_top);
        let left = thickness(spec.axis_left);
        let right = thickness(spec.axis_right);
        let bottom = thickness(spec.axis_bottom);
        let side_legend = match spec.legend {
            Some((size, placement)) if placement.orient == LegendOrient::Right => {
                size.width.max(0.0) + placement.offset.max(0.0)
            }
            _ => 0.0,
        };

        let view = Rect::new(
            0.0,
            0.0,
            spec.view_size.width.max(0.0),
            spec.view_size.height.max(0.0),
        );
        let x0 = pad + left;
        let y0 = pad + title;
        let x1 = (view.x1 - pad - right - side_legend).max(x0);
        let y1 = (view.y1 - pad - bottom).max(y0);
        let plot = Rect::new(x0, y0, x1, y1);

        let strip = |width: f64, rect: Rect| (width > 0.0).then_some(rect);
        Self {
            view,
            title_top: strip(title, Rect::new(0.0, pad, view.x1, pad + title)),
            plot,
            axis_left: strip(left, Rect::new(x0 - left, y0, x0, y1)),
            axis_right: strip(right, Rect::new(x1, y0, x1 + right, y1)),
            axis_bottom: strip(bottom, Rect::new(x0, y1, x1, y1 + bottom)),
            legend: spec
                .legend
                .map(|(size, placement)| legend_box(plot, right, size, placement)),
        }
    }
}

fn legend_box(plot: Rect, right_axis: f64, size: Size, placement: LegendPlacement) -> Rect {
    let (w, h) = (size.width.max(0.0), size.height.max(0.0));
    let gap = placement.offset.max(0.0);
    let origin = match placement.orient {
        LegendOrient::Right => Point::new(
            plot.x1 + right_axis + gap,
            plot.y0 + 0.5 * (plot.height() - h).max(0.0),
        ),
        LegendOrient::TopRight => Point::new(plot.x1 - gap - w, plot.y0 + gap),
    };
    Rect::from_origin_size(origin, (w, h))
}
