// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal retained scene runtime for the iris tour.
//!
//! This crate is the small substrate the chart layer builds on:
//! - **Marks** are stable-identity drawing primitives (rect / path / text).
//! - A retained [`Scene`] diffs successive mark sets into enter/update/exit
//!   [`MarkDiff`]s so a backend only touches what changed.
//! - [`Surface`] is the capability a drawing backend must provide; hover
//!   input arrives as [`PointerEvent`]s keyed by mark identity.
//!
//! Text shaping and layout are out of scope; text marks store unshaped
//! strings.

mod mark;
mod scene;
mod surface;

pub use mark::{
    Mark, MarkId, MarkKind, MarkPayload, PathPayload, RectPayload, TextAnchor, TextBaseline,
    TextPayload,
};
pub use scene::{MarkDiff, Scene};
pub use surface::{PointerEvent, Surface};
