// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark model for `bizviz` charts.
//!
//! Everything a chart draws is a [`Mark`]: a rectangle, a text run, or a path,
//! each with a stable [`MarkId`] and a `z_index` for paint order. Chart code
//! builds marks with resolved geometry and paint; renderers (SVG, HTML) only
//! read [`MarkPayload`]s.
//!
//! A [`Scene`] retains the last mark set and reports [`MarkDiff`]s when ticked
//! with a new one. Rendering the same chart twice yields no diffs, which is how
//! callers check that a chart build is deterministic.

#![no_std]

extern crate alloc;

mod mark;
mod scene;

pub use mark::{
    DashPattern, Mark, MarkBuilder, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload,
    TextAnchor, TextBaseline, TextPayload,
};
pub use scene::{MarkDiff, Scene};
