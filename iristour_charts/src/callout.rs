// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callout annotation generation.
//!
//! A callout points at a data location with a connector line and places a
//! short title + note at the connector's far end.

use kurbo::{Point, Vec2};
use peniko::Brush;
use peniko::color::palette::css;

use iristour_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::rule_mark::RuleMarkSpec;
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A callout annotation spec.
#[derive(Clone, Debug)]
pub struct CalloutSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from
    /// this base.
    pub id_base: u64,
    /// The anchored data location in scene coordinates.
    pub anchor: Point,
    /// Label offset from the anchor in scene coordinates.
    pub offset: Vec2,
    /// Short title drawn at the connector end.
    pub title: String,
    /// Note text drawn under the title.
    pub note: String,
    /// Connector stroke paint.
    pub stroke: Brush,
    /// Title font size in scene coordinates.
    pub title_font_size: f64,
    /// Note font size in scene coordinates.
    pub note_font_size: f64,
    /// Text fill paint.
    pub fill: Brush,
}

impl CalloutSpec {
    /// Creates a callout with default styling.
    pub fn new(
        id_base: u64,
        anchor: Point,
        offset: Vec2,
        title: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            id_base,
            anchor,
            offset,
            title: title.into(),
            note: note.into(),
            stroke: Brush::Solid(css::GRAY),
            title_font_size: 12.0,
            note_font_size: 11.0,
            fill: Brush::Solid(css::BLACK),
        }
    }

    /// Sets the connector stroke paint.
    pub fn with_stroke(mut self, stroke: impl Into<Brush>) -> Self {
        self.stroke = stroke.into();
        self
    }

    /// Sets the text fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Generates the connector and text marks.
    ///
    /// Text grows away from the anchor: a rightward offset anchors the text
    /// start at the connector end, a leftward offset anchors the text end.
    pub fn marks(&self) -> Vec<Mark> {
        let end = self.anchor + self.offset;
        let text_anchor = if self.offset.x >= 0.0 {
            TextAnchor::Start
        } else {
            TextAnchor::End
        };

        let mut out = Vec::new();
        out.push(
            RuleMarkSpec::new(
                MarkId::from_raw(self.id_base),
                self.anchor.x,
                self.anchor.y,
                end.x,
                end.y,
            )
            .with_stroke(self.stroke.clone(), 1.0)
            .with_z_index(z_order::ANNOTATIONS)
            .mark(),
        );
        out.push(
            TextMarkSpec::new(MarkId::from_raw(self.id_base + 1), end, self.title.clone())
                .with_font_size(self.title_font_size)
                .with_fill(self.fill.clone())
                .with_anchor(text_anchor)
                .with_baseline(TextBaseline::Ideographic)
                .with_z_index(z_order::ANNOTATIONS)
                .mark(),
        );
        out.push(
            TextMarkSpec::new(
                MarkId::from_raw(self.id_base + 2),
                Point::new(end.x, end.y + self.note_font_size),
                self.note.clone(),
            )
            .with_font_size(self.note_font_size)
            .with_fill(self.fill.clone())
            .with_anchor(text_anchor)
            .with_baseline(TextBaseline::Ideographic)
            .with_z_index(z_order::ANNOTATIONS)
            .mark(),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Shape;

    use iristour_core::MarkPayload;

    use super::*;

    #[test]
    fn connector_runs_from_anchor_to_offset_end() {
        let callout = CalloutSpec::new(
            100,
            Point::new(200.0, 150.0),
            Vec2::new(-30.0, -30.0),
            "Long Sepals",
            "Mostly virginica",
        );
        let marks = callout.marks();
        let MarkPayload::Path(p) = &marks[0].payload else {
            panic!("connector should be a path");
        };
        let b = p.path.bounding_box();
        assert_eq!((b.x0, b.y0), (170.0, 120.0));
        assert_eq!((b.x1, b.y1), (200.0, 150.0));
    }

    #[test]
    fn leftward_offsets_anchor_text_at_its_end() {
        let callout = CalloutSpec::new(
            100,
            Point::new(200.0, 150.0),
            Vec2::new(-100.0, -30.0),
            "Wide Petals",
            "",
        );
        let marks = callout.marks();
        let MarkPayload::Text(t) = &marks[1].payload else {
            panic!("title should be text");
        };
        assert_eq!(t.anchor, TextAnchor::End);
        assert_eq!(t.pos, Point::new(100.0, 120.0));
    }

    #[test]
    fn rightward_offsets_anchor_text_at_its_start() {
        let callout = CalloutSpec::new(
            100,
            Point::new(50.0, 80.0),
            Vec2::new(30.0, -30.0),
            "Average Sepal Length",
            "",
        );
        let marks = callout.marks();
        let MarkPayload::Text(t) = &marks[1].payload else {
            panic!("title should be text");
        };
        assert_eq!(t.anchor, TextAnchor::Start);
    }
}
