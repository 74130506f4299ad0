// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Suggested z-order conventions for chart-generated marks.
//!
//! Marks carry an explicit `z_index` for render ordering. The chart layer sets
//! z-indexes consistently so callers don't have to hand-tune paint order per
//! scene.
//!
//! These values are intentionally coarse. Renderers should sort by
//! `(z_index, MarkId)` for a deterministic tie-break.

/// Plot background/frame fills.
pub const PLOT_BACKGROUND: i32 = -100;

/// Filled series marks (bars).
pub const SERIES_FILL: i32 = 0;
/// Stroked series marks (rules).
pub const SERIES_STROKE: i32 = 10;
/// Point series marks drawn above fills.
pub const SERIES_POINTS: i32 = 20;

/// Axis domain line and tick marks.
pub const AXIS_RULES: i32 = 30;
/// Axis tick labels.
pub const AXIS_LABELS: i32 = 40;
/// Axis title labels.
pub const AXIS_TITLES: i32 = 50;

/// Callout connectors and labels drawn above series marks.
pub const ANNOTATIONS: i32 = 70;
/// Chart-level titles.
pub const TITLES: i32 = 80;
