// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface capability and pointer input model.

use kurbo::Rect;

use crate::mark::MarkId;
use crate::scene::MarkDiff;

/// The capability a drawing backend must provide.
///
/// A surface is a sink for [`MarkDiff`]s. It owns whatever native resources
/// (SVG nodes, GPU buffers, ...) back the retained marks; applying an exit
/// diff releases them. Whether and how the surface dispatches pointer hover
/// back to the application is the embedder's concern; it reports hover as
/// [`PointerEvent`]s keyed by the hovered mark's id.
pub trait Surface {
    /// Sets the outer view box in scene coordinates.
    fn set_view_box(&mut self, view: Rect);

    /// Applies a batch of diffs in order.
    fn apply(&mut self, diffs: &[MarkDiff]);
}

/// A pointer hover event delivered by the embedder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// The pointer entered a mark.
    Enter {
        /// The hovered mark.
        mark: MarkId,
        /// Pointer x in host pixels.
        x: f64,
        /// Pointer y in host pixels.
        y: f64,
    },
    /// The pointer left a mark.
    Leave {
        /// The mark that was hovered.
        mark: MarkId,
    },
}
