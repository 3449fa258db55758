// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Donut and pie wedges.

use bizviz_core::{Mark, MarkId};
use kurbo::{Circle, Point, Shape};
use peniko::Brush;

use crate::z_order;

/// Arc flattening tolerance, in scene units.
const ARC_TOLERANCE: f64 = 0.1;

/// An annular wedge, unoutlined.
///
/// Angles are radians, counter-clockwise from the positive x axis with y up.
/// The y-down flip into scene space happens in [`SectorMarkSpec::mark`].
#[derive(Clone, Debug)]
pub struct SectorMarkSpec {
    /// Stable mark id.
    pub id: MarkId,
    /// Center in scene coordinates.
    pub center: Point,
    /// `(inner, outer)` radius; an inner radius of `0` makes a pie wedge.
    pub radii: (f64, f64),
    /// `(start, end)` angle; either order covers the same wedge.
    pub angles: (f64, f64),
    /// Fill paint.
    pub fill: Brush,
}

impl SectorMarkSpec {
    /// Creates a wedge in the default fill.
    pub fn new(id: MarkId, center: Point, radii: (f64, f64), angles: (f64, f64)) -> Self {
        Self {
            id,
            center,
            radii,
            angles,
            fill: Brush::default(),
        }
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Builds the wedge as a filled path.
    pub fn mark(&self) -> Mark {
        let (inner, outer) = self.radii;
        let lo = self.angles.0.min(self.angles.1);
        let hi = self.angles.0.max(self.angles.1);
        // Going counter-clockwise from lo to hi with y up is going clockwise
        // from -hi to -lo with y down.
        let wedge = Circle::new(self.center, outer).segment(inner, -hi, hi - lo);
        Mark::builder(self.id)
            .path()
            .z_index(z_order::SERIES_FILL)
            .path_const(wedge.path_elements(ARC_TOLERANCE).collect())
            .fill_brush_const(self.fill.clone())
            .stroke_width_const(0.0)
            .build()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use bizviz_core::{MarkDiff, MarkKind, MarkPayload, Scene};
    use core::f64::consts::{FRAC_PI_2, PI};
    use peniko::color::palette::css;

    use super::*;

    #[test]
    fn quarter_ring_sits_above_and_right_of_center() {
        let wedge = SectorMarkSpec::new(
            MarkId::from_raw(1),
            Point::new(50.0, 50.0),
            (10.0, 20.0),
            (0.0, FRAC_PI_2),
        )
        .with_fill(css::TOMATO);

        let mut scene = Scene::new();
        let diffs = scene.tick([wedge.mark()]);
        let [MarkDiff::Enter { kind, new, bounds, .. }] = &diffs[..] else {
            panic!("expected a single enter diff");
        };
        assert_eq!(*kind, MarkKind::Path);
        let MarkPayload::Path(p) = &**new else {
            panic!("expected path payload");
        };
        assert_eq!(p.fill, css::TOMATO.into());
        assert_eq!(p.stroke_width, 0.0);

        let b = bounds.unwrap();
        assert!(b.x0 >= 50.0 - 1e-6 && b.y1 <= 50.0 + 1e-6, "{b:?}");
        assert!((b.x1 - 70.0).abs() < 1e-6 && (b.y0 - 30.0).abs() < 1e-6, "{b:?}");
    }

    #[test]
    fn reversed_angles_draw_the_same_upper_half() {
        let forward = SectorMarkSpec::new(MarkId::from_raw(1), Point::ZERO, (0.0, 10.0), (0.0, PI));
        let reversed = SectorMarkSpec::new(MarkId::from_raw(1), Point::ZERO, (0.0, 10.0), (PI, 0.0));
        let b = forward.mark().payload.bounds().unwrap();
        assert!(b.y1 <= 1e-6, "{b:?}");
        assert_eq!(Some(b), reversed.mark().payload.bounds());
    }
}
