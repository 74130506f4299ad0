// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis mark generation.
//!
//! An axis is a single [`AxisSpec`] with an `orient` of `bottom` or `left`;
//! arranging it against a plot rectangle generates domain, tick, label, and
//! title marks.

use std::sync::Arc;

use kurbo::{Point, Rect};
use peniko::Brush;
use peniko::color::palette::css;

use iristour_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::format::format_tick_with_step;
use crate::rule_mark::RuleMarkSpec;
use crate::scale::{ScaleBand, ScaleLinear, ScaleSpec};
use crate::text_mark::TextMarkSpec;
use crate::z_order;

/// A paint + width pair for stroked paths (domain lines and ticks).
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

/// Axis styling defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisStyle {
    /// Style for the axis domain line and tick marks.
    pub rule: StrokeStyle,
    /// Fill paint for tick labels.
    pub label_fill: Brush,
    /// Font size for tick labels.
    pub label_font_size: f64,
    /// Fill paint for the axis title.
    pub title_fill: Brush,
    /// Font size for the axis title.
    pub title_font_size: f64,
}

impl Default for AxisStyle {
    fn default() -> Self {
        let rule = StrokeStyle::default();
        Self {
            rule: rule.clone(),
            label_fill: rule.brush.clone(),
            label_font_size: 10.0,
            title_fill: rule.brush,
            title_font_size: 11.0,
        }
    }
}

/// Axis orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrient {
    /// A horizontal axis placed below the plot area.
    Bottom,
    /// A vertical axis placed to the left of the plot area.
    Left,
}

/// An axis specification (single type + `orient`).
#[derive(Clone)]
pub struct AxisSpec {
    /// Stable-id base; each generated mark uses a deterministic offset from
    /// this base.
    pub id_base: u64,
    /// The axis scale specification.
    pub scale: ScaleSpec,
    /// Axis placement relative to the plot.
    pub orient: AxisOrient,
    /// Approximate number of ticks (ignored for band scales).
    pub tick_count: usize,
    /// Tick line length in scene coordinates.
    pub tick_size: f64,
    /// Padding between the tick end and the tick label.
    pub tick_padding: f64,
    /// Axis styling.
    pub style: AxisStyle,
    /// Optional axis title text.
    pub title: Option<String>,
    /// Optional tick label formatter.
    ///
    /// The second argument is the tick step (best-effort), which can be used
    /// for consistent decimal formatting. Band axes pass the band index as
    /// the value, which is how category labels are plugged in.
    pub tick_formatter: Option<Arc<dyn Fn(f64, f64) -> String>>,
}

impl std::fmt::Debug for AxisSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisSpec")
            .field("id_base", &self.id_base)
            .field("scale", &self.scale)
            .field("orient", &self.orient)
            .field("tick_count", &self.tick_count)
            .field("tick_size", &self.tick_size)
            .field("tick_padding", &self.tick_padding)
            .field("style", &self.style)
            .field("title", &self.title)
            .field("tick_formatter", &self.tick_formatter.is_some())
            .finish()
    }
}

impl AxisSpec {
    /// Creates a new axis specification with sensible defaults.
    ///
    /// The returned axis has `tick_count = 10`, `tick_size = 5`, a
    /// `tick_padding` of 4, and `style = AxisStyle::default()`.
    pub fn new(id_base: u64, scale: impl Into<ScaleSpec>, orient: AxisOrient) -> Self {
        Self {
            id_base,
            scale: scale.into(),
            orient,
            tick_count: 10,
            tick_size: 5.0,
            tick_padding: 4.0,
            style: AxisStyle::default(),
            title: None,
            tick_formatter: None,
        }
    }

    /// Convenience constructor for a `bottom` axis.
    pub fn bottom(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Bottom)
    }

    /// Convenience constructor for a `left` axis.
    pub fn left(id_base: u64, scale: impl Into<ScaleSpec>) -> Self {
        Self::new(id_base, scale, AxisOrient::Left)
    }

    /// Set the approximate tick count.
    pub fn with_tick_count(mut self, tick_count: usize) -> Self {
        self.tick_count = tick_count;
        self
    }

    /// Set tick size in scene coordinates.
    pub fn with_tick_size(mut self, tick_size: f64) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set tick padding in scene coordinates.
    pub fn with_tick_padding(mut self, tick_padding: f64) -> Self {
        self.tick_padding = tick_padding;
        self
    }

    /// Set the axis style.
    pub fn with_style(mut self, style: AxisStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the axis title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set a custom tick label formatter.
    pub fn with_tick_formatter(mut self, f: impl Fn(f64, f64) -> String + 'static) -> Self {
        self.tick_formatter = Some(Arc::new(f));
        self
    }

    /// Returns the pixel range this axis spans along `plot`.
    ///
    /// Bottom axes run left to right; left axes run bottom to top, so larger
    /// domain values land higher on screen. Callers instantiate their scale
    /// specs against this range so series marks and axis guides agree on
    /// positions.
    pub fn range(&self, plot: Rect) -> (f64, f64) {
        match self.orient {
            AxisOrient::Bottom => (plot.x0, plot.x1),
            AxisOrient::Left => (plot.y1, plot.y0),
        }
    }

    fn tick_values(&self) -> (Vec<f64>, f64) {
        match self.scale {
            ScaleSpec::Linear(s) => {
                let tmp = ScaleLinear::new(s.domain, (0.0, 1.0));
                let ticks = tmp.ticks(self.tick_count);
                let step = tick_step(&ticks);
                (ticks, step)
            }
            ScaleSpec::Band(s) => {
                let ticks: Vec<f64> = (0..s.count).map(|i| i as f64).collect();
                (ticks, 1.0)
            }
        }
    }

    fn format_tick(&self, v: f64, step: f64) -> String {
        match &self.tick_formatter {
            Some(f) => (f)(v, step),
            None => format_tick_with_step(v, step),
        }
    }

    /// Generate axis marks for the given plot rectangle and arranged axis
    /// rectangle.
    ///
    /// `axis_rect` should be the reserved margin region for this axis,
    /// adjacent to `plot`; titles are placed at its outer edge.
    pub fn marks(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        match self.orient {
            AxisOrient::Bottom => self.marks_bottom(plot, axis_rect),
            AxisOrient::Left => self.marks_left(plot, axis_rect),
        }
    }

    fn marks_bottom(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let y = plot.y1;
        let tick_size = self.tick_size.abs();
        let label_gap = self.tick_padding.max(0.0);
        let (ticks, step) = self.tick_values();
        let scale = self.tick_scale(plot);

        let mut out = Vec::new();

        // Domain line.
        out.push(
            RuleMarkSpec::horizontal(MarkId::from_raw(self.id_base), y, plot.x0, plot.x1)
                .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );

        for (i, v) in ticks.iter().copied().enumerate() {
            let x = scale.position(v);
            if x < plot.x0 - 1.0e-9 || x > plot.x1 + 1.0e-9 {
                continue;
            }

            out.push(
                RuleMarkSpec::vertical(
                    MarkId::from_raw(self.id_base + 1 + i as u64),
                    x,
                    y,
                    y + tick_size,
                )
                .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
            );

            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    Point::new(x, y + tick_size + label_gap),
                    self.format_tick(v, step),
                )
                .with_font_size(self.style.label_font_size)
                .with_fill(self.style.label_fill.clone())
                .with_anchor(TextAnchor::Middle)
                .with_baseline(TextBaseline::Hanging)
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }

        if let Some(title) = &self.title {
            // Place the title in the title strip at the outer edge of
            // `axis_rect`, below the tick labels.
            let x = (plot.x0 + plot.x1) * 0.5;
            let y = axis_rect.y1 - self.style.title_font_size;
            out.push(
                TextMarkSpec::new(MarkId::from_raw(self.id_base + 9000), Point::new(x, y), title)
                    .with_font_size(self.style.title_font_size)
                    .with_fill(self.style.title_fill.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_baseline(TextBaseline::Hanging)
                    .with_z_index(z_order::AXIS_TITLES)
                    .mark(),
            );
        }

        out
    }

    fn marks_left(&self, plot: Rect, axis_rect: Rect) -> Vec<Mark> {
        let x = plot.x0;
        let tick_size = self.tick_size.abs();
        let label_gap = self.tick_padding.max(0.0);
        let (ticks, step) = self.tick_values();
        let scale = self.tick_scale(plot);

        let mut out = Vec::new();

        // Domain line.
        out.push(
            RuleMarkSpec::vertical(MarkId::from_raw(self.id_base), x, plot.y0, plot.y1)
                .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
        );

        for (i, v) in ticks.iter().copied().enumerate() {
            let y = scale.position(v);
            if y < plot.y0 - 1.0e-9 || y > plot.y1 + 1.0e-9 {
                continue;
            }

            out.push(
                RuleMarkSpec::horizontal(
                    MarkId::from_raw(self.id_base + 1 + i as u64),
                    y,
                    x,
                    x - tick_size,
                )
                .with_stroke(self.style.rule.brush.clone(), self.style.rule.stroke_width)
                .with_z_index(z_order::AXIS_RULES)
                .mark(),
            );

            out.push(
                TextMarkSpec::new(
                    MarkId::from_raw(self.id_base + 1000 + i as u64),
                    Point::new(x - tick_size - label_gap, y),
                    self.format_tick(v, step),
                )
                .with_font_size(self.style.label_font_size)
                .with_fill(self.style.label_fill.clone())
                .with_anchor(TextAnchor::End)
                .with_baseline(TextBaseline::Middle)
                .with_z_index(z_order::AXIS_LABELS)
                .mark(),
            );
        }

        if let Some(title) = &self.title {
            // Rotated title in the title strip at the outer edge of
            // `axis_rect`; with a -90° rotation, font height maps to width.
            let x = axis_rect.x0 + 0.5 * self.style.title_font_size;
            let y = (plot.y0 + plot.y1) * 0.5;
            out.push(
                TextMarkSpec::new(MarkId::from_raw(self.id_base + 9000), Point::new(x, y), title)
                    .with_font_size(self.style.title_font_size)
                    .with_fill(self.style.title_fill.clone())
                    .with_anchor(TextAnchor::Middle)
                    .with_angle(-90.0)
                    .with_z_index(z_order::AXIS_TITLES)
                    .mark(),
            );
        }

        out
    }

    fn tick_scale(&self, plot: Rect) -> TickScale {
        let range = self.range(plot);
        match self.scale {
            ScaleSpec::Linear(s) => TickScale::Linear(s.instantiate(range)),
            ScaleSpec::Band(s) => TickScale::Band(s.instantiate(range)),
        }
    }
}

/// The instantiated scale an axis positions its ticks with.
#[derive(Clone, Copy, Debug)]
enum TickScale {
    Linear(ScaleLinear),
    Band(ScaleBand),
}

impl TickScale {
    /// Maps a tick value (a data value, or a band index) to a pixel position.
    fn position(&self, v: f64) -> f64 {
        match self {
            Self::Linear(s) => s.map(v),
            Self::Band(b) => b.x(discrete_index(v)) + 0.5 * b.band_width(),
        }
    }
}

fn tick_step(ticks: &[f64]) -> f64 {
    let step = ticks
        .windows(2)
        .map(|w| (w[1] - w[0]).abs())
        .fold(f64::INFINITY, f64::min);
    if step.is_finite() { step } else { 0.0 }
}

fn discrete_index(v: f64) -> usize {
    if !v.is_finite() || v < 0.0 {
        return 0;
    }
    let v = v.round().min(10_000.0);
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "value is clamped to a small non-negative range"
    )]
    {
        v as usize
    }
}
