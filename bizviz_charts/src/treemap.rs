// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Squarified treemaps.
//!
//! Tiles are laid out with the squarify algorithm (Bruls, Huizing, van Wijk):
//! items are added to the current row while doing so does not worsen the
//! row's worst aspect ratio, then the row is fixed along the shorter side.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use bizviz_core::{Mark, MarkId};
use kurbo::Rect;
use peniko::{Brush, Color};

use crate::axis::StrokeStyle;
use crate::format::format_value;
use crate::rect_mark::RectMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::TextStyle;

/// Lays out `values` (in order) as tiles filling `rect`.
///
/// Tile areas are proportional to the values. Non-finite or non-positive
/// values get an empty tile at the rect origin. Squarify works best with the
/// values sorted in descending order.
pub fn squarify(values: &[f64], rect: Rect) -> Vec<Rect> {
    let rect = rect.abs();
    let origin = Rect::new(rect.x0, rect.y0, rect.x0, rect.y0);
    let mut out = alloc::vec![origin; values.len()];

    let total: f64 = values
        .iter()
        .filter(|v| v.is_finite() && **v > 0.0)
        .sum();
    if total <= 0.0 || rect.area() <= 0.0 {
        return out;
    }
    let scale = rect.area() / total;
    let items: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| v.is_finite() && **v > 0.0)
        .map(|(i, v)| (i, v * scale))
        .collect();

    let mut remaining = rect;
    let mut start = 0;
    while start < items.len() {
        let short = remaining.width().min(remaining.height());
        let mut end = start + 1;
        while end < items.len()
            && worst(&items[start..=end], short) <= worst(&items[start..end], short)
        {
            end += 1;
        }
        let row = &items[start..end];
        let row_area: f64 = row.iter().map(|(_, a)| a).sum();

        if remaining.width() >= remaining.height() {
            // Column on the left edge.
            let w = if remaining.height() > 0.0 {
                row_area / remaining.height()
            } else {
                0.0
            };
            let mut y = remaining.y0;
            for &(i, a) in row {
                let h = if w > 0.0 { a / w } else { 0.0 };
                out[i] = Rect::new(remaining.x0, y, remaining.x0 + w, y + h);
                y += h;
            }
            remaining.x0 = (remaining.x0 + w).min(remaining.x1);
        } else {
            // Row along the top edge.
            let h = if remaining.width() > 0.0 {
                row_area / remaining.width()
            } else {
                0.0
            };
            let mut x = remaining.x0;
            for &(i, a) in row {
                let w = if h > 0.0 { a / h } else { 0.0 };
                out[i] = Rect::new(x, remaining.y0, x + w, remaining.y0 + h);
                x += w;
            }
            remaining.y0 = (remaining.y0 + h).min(remaining.y1);
        }
        start = end;
    }
    out
}

/// The worst aspect ratio of a row of areas laid along a side of length `short`.
fn worst(row: &[(usize, f64)], short: f64) -> f64 {
    let sum: f64 = row.iter().map(|(_, a)| a).sum();
    let (min, max) = row
        .iter()
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), (_, a)| (lo.min(*a), hi.max(*a)));
    if sum <= 0.0 || min <= 0.0 || short <= 0.0 {
        return f64::INFINITY;
    }
    let s2 = short * short;
    let sum2 = sum * sum;
    (s2 * max / sum2).max(sum2 / (s2 * min))
}

/// One treemap tile.
#[derive(Clone, Debug, PartialEq)]
pub struct TreemapItem {
    /// Tile label.
    pub label: String,
    /// Tile value (area weight).
    pub value: f64,
}

impl TreemapItem {
    /// Creates an item.
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// A treemap of labeled tiles.
#[derive(Clone, Debug)]
pub struct TreemapSpec {
    /// Stable-id base (tiles `+i`, labels `+1000+i`, values `+2000+i`).
    pub id_base: u64,
    /// Tiles in layout order.
    pub items: Vec<TreemapItem>,
    /// Tile fills, cycled.
    pub colors: Vec<Color>,
    /// Tile border.
    pub border: StrokeStyle,
    /// Label font size.
    pub font_size: f64,
    /// Label paint.
    pub text_fill: Brush,
    /// Padding between the tile edge and its labels.
    pub label_padding: f64,
}

impl TreemapSpec {
    /// Creates a treemap with white borders and white labels.
    pub fn new(id_base: u64, items: Vec<TreemapItem>, colors: Vec<Color>) -> Self {
        Self {
            id_base,
            items,
            colors,
            border: StrokeStyle::solid(Color::WHITE, 1.0),
            font_size: 12.0,
            text_fill: Brush::Solid(Color::WHITE),
            label_padding: 4.0,
        }
    }

    /// Sets the label font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Returns the tile rectangles for `rect`.
    pub fn layout(&self, rect: Rect) -> Vec<Rect> {
        let values: Vec<f64> = self.items.iter().map(|i| i.value).collect();
        squarify(&values, rect)
    }

    /// Generates tile and label marks filling `rect`.
    ///
    /// Each tile shows its label and value in the top-left corner.
    pub fn marks(&self, rect: Rect) -> Vec<Mark> {
        let mut out = Vec::new();
        for (i, (item, tile)) in self.items.iter().zip(self.layout(rect)).enumerate() {
            if tile.area() <= 0.0 {
                continue;
            }
            let fill = match self.colors.len() {
                0 => Color::BLACK,
                n => self.colors[i % n],
            };
            out.push(
                RectMarkSpec::new(MarkId::for_row(self.id_base, i), tile)
                    .with_fill(fill)
                    .with_stroke(self.border.clone())
                    .mark(),
            );

            let x = tile.x0 + self.label_padding;
            let y = tile.y0 + self.label_padding;
            for (offset, text, line) in [
                (1000, item.label.clone(), 0.0),
                (2000, format_value(item.value), 1.0),
            ] {
                out.push(
                    TextMarkSpec::new(
                        MarkId::for_row(self.id_base + offset, i),
                        (x, y + line * 1.2 * self.font_size).into(),
                        text,
                        TextStyle::new(self.font_size),
                    )
                    .with_fill(self.text_fill.clone())
                    .mark(),
                );
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn tiles_cover_the_rect_with_proportional_areas() {
        let rect = Rect::new(0.0, 0.0, 600.0, 400.0);
        let values = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
        let tiles = squarify(&values, rect);
        let total: f64 = values.iter().sum();
        let mut covered = 0.0;
        for (v, t) in values.iter().zip(&tiles) {
            let expected = rect.area() * v / total;
            assert!((t.area() - expected).abs() < 1e-6, "{t:?} vs {expected}");
            assert!(t.x0 >= -1e-9 && t.y0 >= -1e-9 && t.x1 <= 600.0 + 1e-9 && t.y1 <= 400.0 + 1e-9);
            covered += t.area();
        }
        assert!((covered - rect.area()).abs() < 1e-6);
    }

    #[test]
    fn tiles_do_not_overlap() {
        let tiles = squarify(&[5.0, 3.0, 2.0, 1.0], Rect::new(0.0, 0.0, 100.0, 50.0));
        for (i, a) in tiles.iter().enumerate() {
            for b in &tiles[i + 1..] {
                assert!(a.intersect(*b).area() < 1e-9, "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn degenerate_values_get_empty_tiles() {
        let tiles = squarify(&[0.0, f64::NAN, 2.0], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(tiles[0].area(), 0.0);
        assert_eq!(tiles[1].area(), 0.0);
        assert!((tiles[2].area() - 100.0).abs() < 1e-9);
        assert!(squarify(&[0.0], Rect::new(0.0, 0.0, 10.0, 10.0))[0].area() == 0.0);
    }

    #[test]
    fn spec_emits_tile_label_and_value_per_item() {
        let spec = TreemapSpec::new(
            10,
            vec![TreemapItem::new("SP", 300.0), TreemapItem::new("RJ", 100.5)],
            vec![Color::from_rgb8(0x63, 0x6e, 0xfa)],
        );
        let marks = spec.marks(Rect::new(0.0, 0.0, 400.0, 200.0));
        assert_eq!(marks.len(), 6);
        assert!(marks.iter().any(|m| m.id == MarkId::from_raw(10 + 2000 + 1)));
    }
}
