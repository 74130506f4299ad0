// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained scene and its diff model.
//!
//! A [`Scene`] remembers the marks from the previous render cycle. Feeding it
//! the next cycle's marks yields [`MarkDiff`]s; a backend applies those
//! without re-walking unchanged content. Clearing the scene is itself just a
//! diff (everything exits), which is what makes the clear-then-render cycle
//! cheap to express.

use std::collections::HashMap;

use crate::mark::{Mark, MarkId, MarkPayload};

/// One change to the retained mark set.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkDiff {
    /// A mark that did not exist last cycle.
    Enter {
        /// Mark identity.
        id: MarkId,
        /// Render order.
        z_index: i32,
        /// New payload.
        new: Box<MarkPayload>,
    },
    /// A mark whose payload or render order changed.
    Update {
        /// Mark identity.
        id: MarkId,
        /// New render order.
        new_z_index: i32,
        /// New payload.
        new: Box<MarkPayload>,
    },
    /// A mark that is gone this cycle.
    Exit {
        /// Mark identity.
        id: MarkId,
    },
}

/// A retained set of marks with diffing.
#[derive(Debug, Default)]
pub struct Scene {
    marks: HashMap<MarkId, (i32, MarkPayload)>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of retained marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns whether the scene holds no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns the retained payload for a mark, if present.
    pub fn get(&self, id: MarkId) -> Option<&MarkPayload> {
        self.marks.get(&id).map(|(_z, payload)| payload)
    }

    /// Returns the retained marks sorted by `(z_index, id)`.
    pub fn marks_in_paint_order(&self) -> Vec<Mark> {
        let mut out: Vec<Mark> = self
            .marks
            .iter()
            .map(|(id, (z, payload))| Mark::new(*id, *z, payload.clone()))
            .collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Replaces the retained mark set with `marks`, returning the diffs.
    ///
    /// Marks absent from `marks` exit; unchanged marks produce no diff. If the
    /// same id appears twice in `marks`, the later entry wins.
    pub fn tick(&mut self, marks: Vec<Mark>) -> Vec<MarkDiff> {
        let mut next: HashMap<MarkId, (i32, MarkPayload)> = HashMap::with_capacity(marks.len());
        for mark in marks {
            next.insert(mark.id, (mark.z_index, mark.payload));
        }

        let mut diffs = Vec::new();
        for id in self.marks.keys() {
            if !next.contains_key(id) {
                diffs.push(MarkDiff::Exit { id: *id });
            }
        }
        for (id, (z, payload)) in &next {
            match self.marks.get(id) {
                None => diffs.push(MarkDiff::Enter {
                    id: *id,
                    z_index: *z,
                    new: Box::new(payload.clone()),
                }),
                Some((old_z, old_payload)) => {
                    if old_z != z || old_payload != payload {
                        diffs.push(MarkDiff::Update {
                            id: *id,
                            new_z_index: *z,
                            new: Box::new(payload.clone()),
                        });
                    }
                }
            }
        }

        self.marks = next;
        diffs
    }

    /// Applies diffs produced by another scene's [`tick`](Self::tick) or
    /// [`clear`](Self::clear), mirroring its retained mark set.
    ///
    /// Backends that keep a retained copy of the producer's scene can hold a
    /// `Scene` of their own and feed every received batch through here.
    pub fn apply(&mut self, diffs: &[MarkDiff]) {
        for diff in diffs {
            match diff {
                MarkDiff::Enter { id, z_index, new } => {
                    self.marks.insert(*id, (*z_index, (**new).clone()));
                }
                MarkDiff::Update {
                    id,
                    new_z_index,
                    new,
                } => {
                    self.marks.insert(*id, (*new_z_index, (**new).clone()));
                }
                MarkDiff::Exit { id } => {
                    self.marks.remove(id);
                }
            }
        }
    }

    /// Removes every retained mark, returning the exit diffs.
    ///
    /// Clearing an empty scene is a no-op.
    pub fn clear(&mut self) -> Vec<MarkDiff> {
        let diffs: Vec<MarkDiff> = self
            .marks
            .keys()
            .map(|id| MarkDiff::Exit { id: *id })
            .collect();
        self.marks.clear();
        diffs
    }
}
