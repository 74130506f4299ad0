// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A minimal retained SVG surface for `iristour_demo`.
//!
//! The surface mirrors the story's scene by feeding every diff batch into a
//! [`Scene`] of its own, then serializes the retained marks in paint order.

use std::fmt::Write;

use kurbo::Rect;
use peniko::Brush;

use iristour_core::{
    Mark, MarkDiff, MarkPayload, PathPayload, RectPayload, Scene, Surface, TextAnchor,
    TextBaseline, TextPayload,
};

/// A [`Surface`] that retains applied marks and dumps them as SVG.
#[derive(Debug, Default)]
pub(crate) struct SvgSurface {
    scene: Scene,
    view_box: Option<Rect>,
}

impl Surface for SvgSurface {
    fn set_view_box(&mut self, view: Rect) {
        self.view_box = Some(view);
    }

    fn apply(&mut self, diffs: &[MarkDiff]) {
        self.scene.apply(diffs);
    }
}

impl SvgSurface {
    pub(crate) fn to_svg_string(&self) -> String {
        let view = self
            .view_box
            .unwrap_or_else(|| Rect::new(0.0, 0.0, 100.0, 100.0));
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" \
             viewBox=\"{} {} {w} {h}\" width=\"{w}\" height=\"{h}\" \
             preserveAspectRatio=\"xMinYMin meet\">",
            view.x0,
            view.y0,
            w = view.width(),
            h = view.height(),
        );
        for mark in self.scene.marks_in_paint_order() {
            emit_mark(&mut svg, &mark);
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn emit_mark(svg: &mut String, mark: &Mark) {
    match &mark.payload {
        MarkPayload::Rect(r) => emit_rect(svg, r),
        MarkPayload::Path(p) => emit_path(svg, p),
        MarkPayload::Text(t) => emit_text(svg, t),
    }
}

fn emit_rect(svg: &mut String, r: &RectPayload) {
    let _ = writeln!(
        svg,
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"{}/>",
        r.rect.x0,
        r.rect.y0,
        r.rect.width(),
        r.rect.height(),
        paint_attrs("fill", &r.fill),
    );
}

fn emit_path(svg: &mut String, p: &PathPayload) {
    let mut attrs = paint_attrs("fill", &p.fill);
    if p.stroke_width > 0.0 {
        attrs.push_str(&paint_attrs("stroke", &p.stroke));
        let _ = write!(attrs, " stroke-width=\"{}\"", p.stroke_width);
    }
    let _ = writeln!(svg, "<path d=\"{}\"{attrs}/>", p.path.to_svg());
}

fn emit_text(svg: &mut String, t: &TextPayload) {
    let anchor = match t.anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    };
    let baseline = match t.baseline {
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Middle => "middle",
        TextBaseline::Hanging => "hanging",
        TextBaseline::Ideographic => "ideographic",
    };
    let _ = write!(
        svg,
        "<text x=\"{}\" y=\"{}\" font-size=\"{}\" \
         text-anchor=\"{anchor}\" dominant-baseline=\"{baseline}\"",
        t.pos.x, t.pos.y, t.font_size,
    );
    if t.angle != 0.0 {
        let _ = write!(
            svg,
            " transform=\"rotate({} {} {})\"",
            t.angle, t.pos.x, t.pos.y
        );
    }
    svg.push_str(&paint_attrs("fill", &t.fill));
    let _ = writeln!(svg, ">{}</text>", escape_xml(&t.text));
}

/// Renders a brush as `name`/`name-opacity` attributes, leading space
/// included. Non-solid brushes paint as `none`.
fn paint_attrs(name: &str, brush: &Brush) -> String {
    let Brush::Solid(color) = brush else {
        return format!(" {name}=\"none\"");
    };
    let rgba = color.to_rgba8();
    let mut out = format!(" {name}=\"#{:02x}{:02x}{:02x}\"", rgba.r, rgba.g, rgba.b);
    if rgba.a != 255 {
        let _ = write!(out, " {name}-opacity=\"{}\"", f64::from(rgba.a) / 255.0);
    }
    out
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::Color;

    use iristour_core::MarkId;

    use super::*;

    fn text_mark(id: u64, z: i32, text: &str) -> Mark {
        Mark::text(
            MarkId::from_raw(id),
            z,
            TextPayload {
                pos: Point::new(10.0, 20.0),
                text: text.to_string(),
                font_size: 12.0,
                angle: 0.0,
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Hanging,
                fill: Brush::Solid(Color::BLACK),
            },
        )
    }

    #[test]
    fn serializes_in_paint_order_with_escaped_text() {
        let mut producer = Scene::new();
        let diffs = producer.tick(vec![
            text_mark(1, 50, "Petal Length <cm> & more"),
            Mark::rect(
                MarkId::from_raw(2),
                0,
                Rect::new(0.0, 0.0, 10.0, 10.0),
                Color::from_rgb8(0x1f, 0x77, 0xb4),
            ),
        ]);

        let mut surface = SvgSurface::default();
        surface.set_view_box(Rect::new(0.0, 0.0, 800.0, 500.0));
        surface.apply(&diffs);

        let svg = surface.to_svg_string();
        let rect_at = svg.find("<rect").expect("rect serialized");
        let text_at = svg.find("<text").expect("text serialized");
        assert!(rect_at < text_at, "lower z-index must paint first");
        assert!(svg.contains("Petal Length &lt;cm&gt; &amp; more"));
        assert!(svg.contains("fill=\"#1f77b4\""));
        assert!(svg.contains("viewBox=\"0 0 800 500\""));
    }

    #[test]
    fn exit_diffs_drop_marks_from_the_output() {
        let mut producer = Scene::new();
        let mut surface = SvgSurface::default();
        surface.apply(&producer.tick(vec![text_mark(1, 0, "gone soon")]));
        assert!(surface.to_svg_string().contains("gone soon"));

        surface.apply(&producer.clear());
        assert!(!surface.to_svg_string().contains("gone soon"));
    }
}
