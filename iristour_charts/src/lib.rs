// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart building blocks for `iristour_core`.
//!
//! This crate is a small, reusable layer above `iristour_core`:
//! - **Scales** map data values into scene coordinates.
//! - **Guides** (axes, callouts) are built by generating `iristour_core`
//!   marks.
//! - **Mark specs** (points, bars, rules, text) turn already-scaled rows into
//!   marks with stable identities.
//!
//! Scene composition (which scale, which rows, which colors) is the
//! application layer's job; nothing here looks at a dataset.

mod axis;
mod bar_mark;
mod callout;
mod format;
mod measure;
mod point_mark;
mod rule_mark;
mod scale;
mod text_mark;
pub mod z_order;

pub use axis::{AxisOrient, AxisSpec, AxisStyle, StrokeStyle};
pub use bar_mark::{BarMarkSpec, BarRow};
pub use callout::CalloutSpec;
pub use format::format_tick_with_step;
pub use measure::{HeuristicTextMeasurer, TextMeasurer, wrap_text};
pub use point_mark::{PointMarkSpec, PointRow};
pub use rule_mark::RuleMarkSpec;
pub use scale::{ScaleBand, ScaleBandSpec, ScaleLinear, ScaleLinearSpec, ScaleSpec};
pub use text_mark::TextMarkSpec;
