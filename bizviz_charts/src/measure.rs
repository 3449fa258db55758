// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for guide layout.
//!
//! Guides (axes, legends, titles, annotation boxes) need text extents before
//! their marks are placed. Shaping stays downstream, so layout goes through
//! this small trait.

/// Text styling inputs relevant to measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in chart coordinates.
    pub font_size: f64,
    /// CSS font weight (`400` normal, `700` bold).
    pub font_weight: u16,
}

impl TextStyle {
    /// A normal-weight style with the given size.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_weight: 400,
        }
    }

    /// A bold style with the given size.
    #[must_use]
    pub fn bold(font_size: f64) -> Self {
        Self {
            font_size,
            font_weight: 700,
        }
    }
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// Advance width.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A minimal text measurement interface used by guide generators.
pub trait TextMeasurer {
    /// Measure a single line of text.
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics;
}

/// A heuristic text measurer.
///
/// It assumes an average glyph width of ~0.6em (~0.66em when bold) and a
/// baseline at ~0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: TextStyle) -> TextMetrics {
        let em = if style.font_weight >= 600 { 0.66 } else { 0.6 };
        TextMetrics {
            advance_width: em * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}
