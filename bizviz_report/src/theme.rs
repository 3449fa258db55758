// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Explicit rendering configuration.
//!
//! Every chart builder takes a [`Theme`] by reference; nothing about styling
//! is stored globally, so one chart cannot change how the next one looks.

use bizviz_charts::Size;
use peniko::Color;
use peniko::color::palette::css;

/// The ten-color categorical cycle used for bars, lines and wedges.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// The tile colorway used by treemaps.
pub const TILE_COLORWAY: [Color; 10] = [
    Color::from_rgb8(0x63, 0x6e, 0xfa),
    Color::from_rgb8(0xef, 0x55, 0x3b),
    Color::from_rgb8(0x00, 0xcc, 0x96),
    Color::from_rgb8(0xab, 0x63, 0xfa),
    Color::from_rgb8(0xff, 0xa1, 0x5a),
    Color::from_rgb8(0x19, 0xd3, 0xf3),
    Color::from_rgb8(0xff, 0x66, 0x92),
    Color::from_rgb8(0xb6, 0xe8, 0x80),
    Color::from_rgb8(0xff, 0x97, 0xff),
    Color::from_rgb8(0xfe, 0xcb, 0x52),
];

/// Figure size in inches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inches {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Inches {
    /// Creates a figure size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Per-chart figure sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FigureSizes {
    /// Revenue by month.
    pub revenue: Inches,
    /// Real vs estimated delivery time.
    pub delivery_time: Inches,
    /// Donut charts.
    pub donut: Inches,
    /// Freight value vs weight.
    pub freight: Inches,
    /// Delivery date difference.
    pub delivery_difference: Inches,
    /// Orders per day with holidays.
    pub holidays: Inches,
    /// Treemaps, in pixels (independent of DPI).
    pub treemap: Size,
}

impl Default for FigureSizes {
    fn default() -> Self {
        Self {
            revenue: Inches::new(12.0, 6.0),
            delivery_time: Inches::new(12.0, 6.0),
            donut: Inches::new(6.0, 3.0),
            freight: Inches::new(12.0, 8.0),
            delivery_difference: Inches::new(12.0, 8.0),
            holidays: Inches::new(15.0, 8.0),
            treemap: Size::new(800.0, 400.0),
        }
    }
}

/// Gridline opacity per chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridAlphas {
    /// Freight value vs weight.
    pub freight: f32,
    /// Delivery date difference.
    pub delivery_difference: f32,
    /// Orders per day with holidays.
    pub holidays: f32,
}

impl Default for GridAlphas {
    fn default() -> Self {
        Self {
            freight: 0.3,
            delivery_difference: 0.3,
            holidays: 0.2,
        }
    }
}

/// Styling shared by all report charts.
///
/// Font sizes are in points and converted with [`Theme::pt`].
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    /// Categorical colors, cycled per series or category.
    pub palette: Vec<Color>,
    /// Treemap tile colors.
    pub tile_palette: Vec<Color>,
    /// Figure background.
    pub background: Color,
    /// Text and axis color.
    pub foreground: Color,
    /// Pixels per inch.
    pub dpi: f64,
    /// CSS font family written into SVG output.
    pub font_family: String,
    /// Tick label and legend font size.
    pub font_size: f64,
    /// Axis title font size.
    pub label_font_size: f64,
    /// Default chart title font size.
    pub title_font_size: f64,
    /// Gridline opacities.
    pub grid_alpha: GridAlphas,
    /// Figure sizes.
    pub figures: FigureSizes,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            palette: CATEGORY10.to_vec(),
            tile_palette: TILE_COLORWAY.to_vec(),
            background: css::WHITE,
            foreground: css::BLACK,
            dpi: 100.0,
            font_family: "DejaVu Sans, Arial, sans-serif".to_string(),
            font_size: 10.0,
            label_font_size: 10.0,
            title_font_size: 12.0,
            grid_alpha: GridAlphas::default(),
            figures: FigureSizes::default(),
        }
    }
}

impl Theme {
    /// Converts points to pixels.
    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    /// Converts a figure size in inches to pixels.
    pub fn figure(&self, size: Inches) -> Size {
        Size::new(size.width * self.dpi, size.height * self.dpi)
    }

    /// The `i`-th palette color, cycling.
    pub fn color(&self, i: usize) -> Color {
        cycle(&self.palette, i).unwrap_or(self.foreground)
    }

    /// The first `n` palette colors, cycling.
    pub fn colors(&self, n: usize) -> Vec<Color> {
        (0..n).map(|i| self.color(i)).collect()
    }

    /// Treemap tile colors, falling back to the categorical palette.
    pub fn tile_colors(&self) -> Vec<Color> {
        if self.tile_palette.is_empty() {
            self.palette.clone()
        } else {
            self.tile_palette.clone()
        }
    }
}

fn cycle(colors: &[Color], i: usize) -> Option<Color> {
    (!colors.is_empty()).then(|| colors[i % colors.len()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_and_inches_follow_dpi() {
        let theme = Theme {
            dpi: 144.0,
            ..Theme::default()
        };
        assert_eq!(theme.pt(10.0), 20.0);
        assert_eq!(theme.figure(Inches::new(6.0, 3.0)), Size::new(864.0, 432.0));
    }

    #[test]
    fn palette_cycles_and_empty_falls_back_to_foreground() {
        let theme = Theme::default();
        assert_eq!(theme.color(10), theme.color(0));
        let empty = Theme {
            palette: Vec::new(),
            ..Theme::default()
        };
        assert_eq!(empty.color(3), empty.foreground);
    }
}
