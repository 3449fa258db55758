// Copyright 2025 the bizviz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Retained mark set with enter/update/exit diffing.

extern crate alloc;

use alloc::sync::Arc;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use kurbo::Rect;

use crate::{Mark, MarkId, MarkKind, MarkPayload};

/// A change between two successive mark sets.
#[derive(Clone, Debug)]
pub enum MarkDiff {
    /// A mark appeared.
    Enter {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Paint order.
        z_index: i32,
        /// New payload.
        new: Arc<MarkPayload>,
        /// Bounds of the new payload.
        bounds: Option<Rect>,
    },
    /// A mark changed geometry, paint, or paint order.
    Update {
        /// Mark id.
        id: MarkId,
        /// Mark kind after the update.
        kind: MarkKind,
        /// Previous paint order.
        old_z_index: i32,
        /// New paint order.
        new_z_index: i32,
        /// Previous payload.
        old: Arc<MarkPayload>,
        /// New payload.
        new: Arc<MarkPayload>,
        /// Previous bounds.
        old_bounds: Option<Rect>,
        /// New bounds.
        new_bounds: Option<Rect>,
    },
    /// A mark disappeared.
    Exit {
        /// Mark id.
        id: MarkId,
        /// Mark kind.
        kind: MarkKind,
        /// Paint order it had.
        z_index: i32,
        /// Last payload.
        old: Arc<MarkPayload>,
        /// Last bounds.
        bounds: Option<Rect>,
    },
}

impl MarkDiff {
    /// Returns the id of the affected mark.
    pub fn id(&self) -> MarkId {
        match self {
            Self::Enter { id, .. } | Self::Update { id, .. } | Self::Exit { id, .. } => *id,
        }
    }
}

/// The retained set of marks from the last tick.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, Arc<MarkPayload>)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if no marks are retained.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Looks up a retained mark.
    pub fn get(&self, id: MarkId) -> Option<(i32, &MarkPayload)> {
        self.marks.get(&id).map(|(z, p)| (*z, &**p))
    }

    /// Replaces the retained set with `marks` and returns the differences.
    ///
    /// Marks absent from `marks` exit. If an id repeats within `marks`, the last
    /// occurrence wins. Enter/update diffs follow input order; exits are sorted by id.
    pub fn tick(&mut self, marks: impl IntoIterator<Item = Mark>) -> Vec<MarkDiff> {
        let mut diffs = Vec::new();
        let mut seen: HashSet<MarkId> = HashSet::new();
        let mut next: HashMap<MarkId, (i32, Arc<MarkPayload>)> = HashMap::new();

        for mark in marks {
            let Mark {
                id,
                z_index,
                payload,
            } = mark;
            seen.insert(id);
            let payload = Arc::new(payload);
            match self.marks.get(&id) {
                None => diffs.push(MarkDiff::Enter {
                    id,
                    kind: payload.kind(),
                    z_index,
                    bounds: payload.bounds(),
                    new: payload.clone(),
                }),
                Some((old_z, old)) => {
                    if *old_z != z_index || **old != *payload {
                        diffs.push(MarkDiff::Update {
                            id,
                            kind: payload.kind(),
                            old_z_index: *old_z,
                            new_z_index: z_index,
                            old_bounds: old.bounds(),
                            new_bounds: payload.bounds(),
                            old: old.clone(),
                            new: payload.clone(),
                        });
                    }
                }
            }
            next.insert(id, (z_index, payload));
        }

        let mut exits: Vec<MarkId> = self
            .marks
            .keys()
            .copied()
            .filter(|id| !seen.contains(id))
            .collect();
        exits.sort();
        for id in exits {
            if let Some((z_index, old)) = self.marks.get(&id) {
                diffs.push(MarkDiff::Exit {
                    id,
                    kind: old.kind(),
                    z_index: *z_index,
                    bounds: old.bounds(),
                    old: old.clone(),
                });
            }
        }

        self.marks = next;
        diffs
    }

    /// Retained marks sorted by `(z_index, id)`, the order renderers paint in.
    pub fn sorted(&self) -> Vec<(MarkId, i32, &MarkPayload)> {
        let mut out: Vec<_> = self
            .marks
            .iter()
            .map(|(id, (z, p))| (*id, *z, &**p))
            .collect();
        out.sort_by_key(|(id, z, _)| (*z, *id));
        out
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn rect(id: u64, x: f64) -> Mark {
        Mark::builder(MarkId::from_raw(id))
            .rect()
            .x_const(x)
            .w_const(1.0)
            .h_const(1.0)
            .build()
    }

    #[test]
    fn first_tick_enters_everything() {
        let mut scene = Scene::new();
        let diffs = scene.tick(vec![rect(1, 0.0), rect(2, 5.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(matches!(diffs[0], MarkDiff::Enter { .. }));
        assert_eq!(scene.len(), 2);
    }

    #[test]
    fn identical_tick_has_no_diffs() {
        let mut scene = Scene::new();
        scene.tick(vec![rect(1, 0.0), rect(2, 5.0)]);
        let diffs = scene.tick(vec![rect(1, 0.0), rect(2, 5.0)]);
        assert!(diffs.is_empty(), "unexpected diffs: {diffs:?}");
    }

    #[test]
    fn changed_and_removed_marks_update_and_exit() {
        let mut scene = Scene::new();
        scene.tick(vec![rect(1, 0.0), rect(2, 5.0)]);
        let diffs = scene.tick(vec![rect(1, 3.0)]);
        assert_eq!(diffs.len(), 2);
        assert!(matches!(diffs[0], MarkDiff::Update { .. }));
        let MarkDiff::Exit { id, .. } = &diffs[1] else {
            panic!("expected an exit diff");
        };
        assert_eq!(*id, MarkId::from_raw(2));
        assert!(scene.get(MarkId::from_raw(2)).is_none());
    }

    #[test]
    fn sorted_orders_by_z_then_id() {
        let mut scene = Scene::new();
        let back = Mark::builder(MarkId::from_raw(9)).z_index(-1).build();
        scene.tick(vec![rect(2, 0.0), rect(1, 0.0), back]);
        let ids: std::vec::Vec<u64> = scene.sorted().iter().map(|(id, _, _)| id.0).collect();
        assert_eq!(ids, vec![9, 1, 2]);
    }
}
