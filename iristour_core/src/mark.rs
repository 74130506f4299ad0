// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mark primitives.
//!
//! A mark is one drawable item with a stable identity. Identity is what lets
//! the retained [`crate::Scene`] tell an updated mark from a replaced one
//! across render cycles.

use kurbo::{BezPath, Point, Rect, Shape};
use peniko::Brush;

/// A stable mark identity.
///
/// Guide generators typically derive ids from a per-component base plus a
/// small offset; data-bound marks derive them from a group id plus the row
/// index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MarkId(pub u64);

impl MarkId {
    /// Creates an id from a raw value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Creates an id for a data row within a mark group.
    ///
    /// The group occupies the high bits; rows must stay below `2^20`.
    pub fn for_row(group: u64, row: u64) -> Self {
        Self((group << 20) | (row & 0xF_FFFF))
    }
}

/// Horizontal text anchoring relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Anchor the start of the text at the position.
    Start,
    /// Center the text on the position.
    Middle,
    /// Anchor the end of the text at the position.
    End,
}

/// Vertical text baseline relative to the mark position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The alphabetic baseline.
    Alphabetic,
    /// The visual midline.
    Middle,
    /// The hanging baseline (top-ish).
    Hanging,
    /// The ideographic baseline (bottom-ish).
    Ideographic,
}

/// The payload of a rectangle mark.
#[derive(Clone, Debug, PartialEq)]
pub struct RectPayload {
    /// Rectangle in scene coordinates.
    pub rect: Rect,
    /// Fill paint.
    pub fill: Brush,
}

/// The payload of a stroked/filled path mark.
#[derive(Clone, Debug, PartialEq)]
pub struct PathPayload {
    /// Path in scene coordinates.
    pub path: BezPath,
    /// Fill paint.
    pub fill: Brush,
    /// Stroke paint.
    pub stroke: Brush,
    /// Stroke width in scene coordinates; `0.0` disables stroking.
    pub stroke_width: f64,
}

/// The payload of a text mark (unshaped).
#[derive(Clone, Debug, PartialEq)]
pub struct TextPayload {
    /// Anchor position in scene coordinates.
    pub pos: Point,
    /// Text content.
    pub text: String,
    /// Font size in scene coordinates.
    pub font_size: f64,
    /// Rotation angle in degrees around `pos`.
    pub angle: f64,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Fill paint.
    pub fill: Brush,
}

/// The drawable content of a mark.
#[derive(Clone, Debug, PartialEq)]
pub enum MarkPayload {
    /// A filled rectangle.
    Rect(RectPayload),
    /// A filled and/or stroked path.
    Path(PathPayload),
    /// A run of text.
    Text(TextPayload),
}

/// The kind of a mark, without its data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MarkKind {
    /// A rectangle mark.
    Rect,
    /// A path mark.
    Path,
    /// A text mark.
    Text,
}

impl MarkPayload {
    /// Returns the mark kind.
    pub fn kind(&self) -> MarkKind {
        match self {
            Self::Rect(_) => MarkKind::Rect,
            Self::Path(_) => MarkKind::Path,
            Self::Text(_) => MarkKind::Text,
        }
    }

    /// Returns geometric bounds, where they are well-defined without text
    /// metrics.
    pub fn bounds(&self) -> Option<Rect> {
        match self {
            Self::Rect(r) => Some(r.rect),
            Self::Path(p) => Some(p.path.bounding_box()),
            Self::Text(_) => None,
        }
    }
}

/// A mark: stable identity, render order, payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Mark {
    /// Stable identity.
    pub id: MarkId,
    /// Rendering order hint; backends sort by `(z_index, id)`.
    pub z_index: i32,
    /// Drawable content.
    pub payload: MarkPayload,
}

impl Mark {
    /// Creates a mark.
    pub fn new(id: MarkId, z_index: i32, payload: MarkPayload) -> Self {
        Self {
            id,
            z_index,
            payload,
        }
    }

    /// Creates a rectangle mark.
    pub fn rect(id: MarkId, z_index: i32, rect: Rect, fill: impl Into<Brush>) -> Self {
        Self::new(
            id,
            z_index,
            MarkPayload::Rect(RectPayload {
                rect,
                fill: fill.into(),
            }),
        )
    }

    /// Creates a path mark.
    pub fn path(id: MarkId, z_index: i32, payload: PathPayload) -> Self {
        Self::new(id, z_index, MarkPayload::Path(payload))
    }

    /// Creates a text mark.
    pub fn text(id: MarkId, z_index: i32, payload: TextPayload) -> Self {
        Self::new(id, z_index, MarkPayload::Text(payload))
    }

    /// Returns the mark kind.
    pub fn kind(&self) -> MarkKind {
        self.payload.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_ids_are_distinct_within_and_across_groups() {
        let a0 = MarkId::for_row(1, 0);
        let a1 = MarkId::for_row(1, 1);
        let b0 = MarkId::for_row(2, 0);
        assert_ne!(a0, a1);
        assert_ne!(a0, b0);
        assert_ne!(a1, b0);
    }

    #[test]
    fn payload_bounds_cover_rect_and_path() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let payload = MarkPayload::Rect(RectPayload {
            rect,
            fill: Brush::default(),
        });
        assert_eq!(payload.bounds(), Some(rect));

        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 5.0));
        let payload = MarkPayload::Path(PathPayload {
            path,
            fill: Brush::default(),
            stroke: Brush::default(),
            stroke_width: 1.0,
        });
        let b = payload.bounds().expect("path bounds");
        assert_eq!((b.x1, b.y1), (10.0, 5.0));
    }
}
