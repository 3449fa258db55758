// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line mark generation.

extern crate alloc;

use alloc::vec::Vec;

use bizviz_core::{Mark, MarkId};
use kurbo::{BezPath, Point};
use peniko::Color;

use crate::axis::StrokeStyle;

/// A polyline through already-scaled points.
///
/// This generates a single [`bizviz_core::MarkKind::Path`] mark. Non-finite
/// points break the line into separate runs, so missing values leave gaps.
#[derive(Clone, Debug)]
pub struct LineMarkSpec {
    /// Stable-id for the mark emitted by this spec.
    pub id: MarkId,
    /// Vertices in scene coordinates.
    pub points: Vec<Point>,
    /// Stroke style for the line.
    pub stroke: StrokeStyle,
    /// Rendering order hint (`bizviz_core::Mark::z_index`).
    pub z_index: i32,
}

impl LineMarkSpec {
    /// Creates a line mark spec with a black stroke at width 1.
    pub fn new(id: MarkId, points: Vec<Point>) -> Self {
        Self {
            id,
            points,
            stroke: StrokeStyle::default(),
            z_index: crate::z_order::SERIES_STROKE,
        }
    }

    /// Sets the stroke style.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    fn path(&self) -> BezPath {
        let mut p = BezPath::new();
        let mut pen_down = false;
        for pt in &self.points {
            if !(pt.x.is_finite() && pt.y.is_finite()) {
                pen_down = false;
                continue;
            }
            if pen_down {
                p.line_to(*pt);
            } else {
                p.move_to(*pt);
                pen_down = true;
            }
        }
        p
    }

    /// Generates marks for this line.
    pub fn marks(&self) -> Vec<Mark> {
        let line = Mark::builder(self.id)
            .path()
            .z_index(self.z_index)
            .path_const(self.path())
            .fill_const(Color::TRANSPARENT)
            .stroke_brush_const(self.stroke.brush.clone())
            .stroke_width_const(self.stroke.stroke_width)
            .stroke_dash_const(&self.stroke.dash)
            .build();
        alloc::vec![line]
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use bizviz_core::MarkPayload;
    use kurbo::PathEl;

    use super::*;

    #[test]
    fn non_finite_points_split_the_line() {
        let spec = LineMarkSpec::new(
            MarkId::from_raw(1),
            vec![
                Point::new(0.0, 0.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, f64::NAN),
                Point::new(3.0, 3.0),
                Point::new(4.0, 4.0),
            ],
        );
        let marks = spec.marks();
        assert_eq!(marks.len(), 1);
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("expected path");
        };
        let moves = p
            .path
            .elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count();
        assert_eq!(moves, 2);
        assert_eq!(p.path.elements().len(), 4);
        assert_eq!(p.fill, Color::TRANSPARENT.into());
    }
}
