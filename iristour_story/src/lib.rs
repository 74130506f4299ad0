// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A guided tour of the iris dataset.
//!
//! Five scenes — an overview, three scatter plots, and a bar chart of
//! per-species means — rendered one at a time into a retained
//! [`iristour_core::Scene`], with cyclic forward/backward navigation,
//! responsive re-layout, hover tooltips, and one callout annotation per data
//! scene.
//!
//! The embedder supplies a [`Surface`](iristour_core::Surface) backend and
//! container widths, binds its navigation controls to
//! [`Story::next`]/[`Story::previous`], and forwards pointer hover as
//! [`PointerEvent`](iristour_core::PointerEvent)s.

mod canvas;
mod color;
mod data;
mod error;
mod scenes;
mod story;
mod tooltip;

pub use canvas::{
    CanvasGeometry, MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, TOTAL_HEIGHT,
};
pub use color::{CATEGORY10, ColorEncoding};
pub use data::{Dataset, DataSource, IRIS_CSV_URL, Measure, Record, StaticSource};
pub use error::StoryError;
pub use scenes::{
    CalloutConfig, RenderedScene, SCENE_COUNT, SCENES, SceneDef, SceneKind, ScatterConfig,
    build_scene, scene_def,
};
pub use story::{SceneNumber, Story};
pub use tooltip::{FADE_IN, FADE_OUT, Tooltip};

#[cfg(feature = "http")]
pub use data::HttpSource;
