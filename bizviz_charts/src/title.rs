// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart titles.
//!
//! A title takes a band off the top of the view in [`crate::ChartLayout`] and
//! is drawn as one centered label in that band.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bizviz_core::{Mark, MarkId, TextAnchor, TextBaseline};
use kurbo::Rect;
use peniko::Brush;

use crate::text_mark::TextMarkSpec;
use crate::z_order;
use crate::{TextMeasurer, TextStyle};

/// Vertical gap above and below the title text.
const TITLE_GAP: f64 = 6.0;

/// A chart-level title.
#[derive(Clone, Debug)]
pub struct TitleSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Title text.
    pub text: String,
    /// Size and weight.
    pub style: TextStyle,
    /// Fill paint.
    pub fill: Brush,
}

impl TitleSpec {
    /// Creates a title in the default fill.
    pub fn new(id: MarkId, text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            id,
            text: text.into(),
            style,
            fill: Brush::default(),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Height of the band this title needs.
    pub fn measure(&self, measurer: &dyn TextMeasurer) -> f64 {
        measurer.measure(&self.text, self.style).line_height() + 2.0 * TITLE_GAP
    }

    /// Emits the title centered in `band`.
    pub fn marks(&self, band: Rect) -> Vec<Mark> {
        let label = TextMarkSpec::new(self.id, band.center(), self.text.clone(), self.style)
            .with_fill(self.fill.clone())
            .aligned(TextAnchor::Middle, TextBaseline::Middle)
            .with_z_index(z_order::TITLES);
        alloc::vec![label.mark()]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizviz_core::MarkPayload;

    use super::*;
    use crate::HeuristicTextMeasurer;

    #[test]
    fn bold_title_is_centered_in_its_band() {
        let title = TitleSpec::new(MarkId::from_raw(10), "Freight", TextStyle::bold(16.0));
        let h = title.measure(&HeuristicTextMeasurer);
        assert_eq!(h, 16.0 + 12.0);

        let marks = title.marks(Rect::new(0.0, 0.0, 200.0, h));
        let [mark] = &marks[..] else {
            panic!("expected one mark");
        };
        let MarkPayload::Text(t) = &mark.payload else {
            panic!("expected text");
        };
        assert_eq!(t.font_weight, 700);
        assert_eq!(mark.z_index, z_order::TITLES);
        assert_eq!((t.pos.x, t.pos.y), (100.0, 0.5 * h));
    }
}
