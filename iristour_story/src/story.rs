// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The story state machine: navigation, render dispatch, and hover.
//!
//! [`Story`] is the one explicit application-state struct: it owns the
//! dataset, the color assignment, the active scene number, the canvas
//! geometry, the tooltip, and the retained mark scene. Every transition runs
//! exactly one clear+render cycle against the surface.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info};

use iristour_core::{MarkId, PointerEvent, Scene, Surface};

use crate::canvas::CanvasGeometry;
use crate::color::ColorEncoding;
use crate::data::{DataSource, Dataset};
use crate::error::StoryError;
use crate::scenes::{SCENE_COUNT, build_scene, scene_def};
use crate::tooltip::Tooltip;

/// A validated 1-based scene number in `[1, 5]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SceneNumber(u8);

impl SceneNumber {
    /// The first scene.
    pub const FIRST: Self = Self(1);

    /// Validates `n` as a scene number.
    pub fn new(n: i64) -> Result<Self, StoryError> {
        if (1..=i64::from(SCENE_COUNT)).contains(&n) {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "range-checked against SCENE_COUNT"
            )]
            Ok(Self(n as u8))
        } else {
            Err(StoryError::InvalidScene(n))
        }
    }

    /// Returns the 1-based scene number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// The cyclic successor.
    pub fn next(self) -> Self {
        Self(self.0 % SCENE_COUNT + 1)
    }

    /// The cyclic predecessor.
    pub fn previous(self) -> Self {
        Self((self.0 + SCENE_COUNT - 2) % SCENE_COUNT + 1)
    }
}

/// The guided tour: scene registry, navigator, and render dispatcher.
#[derive(Debug)]
pub struct Story<S: Surface> {
    surface: S,
    dataset: Option<Dataset>,
    colors: ColorEncoding,
    current: SceneNumber,
    geometry: CanvasGeometry,
    tooltip: Tooltip,
    scene: Scene,
    hover: HashMap<MarkId, String>,
}

impl<S: Surface> Story<S> {
    /// Creates a story with no dataset yet.
    ///
    /// Nothing renders until a dataset is attached; navigation and resize
    /// before that point are no-ops.
    pub fn new(surface: S, container_width: f64) -> Self {
        Self {
            surface,
            dataset: None,
            colors: ColorEncoding::new(),
            current: SceneNumber::FIRST,
            geometry: CanvasGeometry::layout(container_width),
            tooltip: Tooltip::new(),
            scene: Scene::new(),
            hover: HashMap::new(),
        }
    }

    /// Loads the dataset from `source` and renders the first scene.
    pub fn load(&mut self, source: &dyn DataSource, uri: &str) -> Result<(), StoryError> {
        let dataset = Dataset::load(source, uri)?;
        self.attach_dataset(dataset);
        Ok(())
    }

    /// Attaches an already-loaded dataset and renders the first scene.
    pub fn attach_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.render_current();
    }

    /// Returns the active scene number.
    pub fn current_scene(&self) -> SceneNumber {
        self.current
    }

    /// Returns the current canvas geometry.
    pub fn geometry(&self) -> CanvasGeometry {
        self.geometry
    }

    /// Returns the retained mark scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the tooltip controller.
    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Returns the surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Consumes the story, returning the surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Advances to the cyclic next scene and renders it.
    pub fn next(&mut self) {
        if self.dataset.is_none() {
            debug!("ignoring next: no dataset loaded yet");
            return;
        }
        self.current = self.current.next();
        self.render_current();
    }

    /// Moves to the cyclic previous scene and renders it.
    pub fn previous(&mut self) {
        if self.dataset.is_none() {
            debug!("ignoring previous: no dataset loaded yet");
            return;
        }
        self.current = self.current.previous();
        self.render_current();
    }

    /// Jumps to scene `n`, failing with `InvalidScene` outside `[1, 5]`.
    ///
    /// On failure the navigation state is unchanged.
    pub fn goto(&mut self, n: i64) -> Result<(), StoryError> {
        let target = SceneNumber::new(n)?;
        if self.dataset.is_none() {
            debug!(scene = n, "ignoring goto: no dataset loaded yet");
            return Ok(());
        }
        self.current = target;
        self.render_current();
        Ok(())
    }

    /// Recomputes the layout for a new container width and re-renders the
    /// active scene.
    pub fn resize(&mut self, container_width: f64) {
        self.geometry = CanvasGeometry::layout(container_width);
        if self.dataset.is_none() {
            debug!("ignoring resize render: no dataset loaded yet");
            return;
        }
        self.render_current();
    }

    /// Reacts to a pointer hover event from the embedder.
    ///
    /// Entering a data mark shows its tooltip near the pointer; entering a
    /// guide mark does nothing; leaving any mark hides the tooltip.
    pub fn pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter { mark, x, y } => {
                if let Some(text) = self.hover.get(&mark) {
                    self.tooltip.show(text.clone(), x, y);
                }
            }
            PointerEvent::Leave { .. } => self.tooltip.hide(),
        }
    }

    /// Advances tooltip fades by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.tooltip.tick(dt);
    }

    fn render_current(&mut self) {
        let Some(dataset) = &self.dataset else {
            return;
        };
        let def = scene_def(self.current.get());
        info!(scene = self.current.get(), title = def.title, "rendering scene");

        self.surface.set_view_box(self.geometry.canvas_rect());

        // Clear, then render: stale marks from the previous scene exit before
        // the new marks enter.
        let exits = self.scene.clear();
        self.surface.apply(&exits);

        let rendered = build_scene(def, dataset, &mut self.colors, self.geometry);
        self.hover = rendered.hover;
        let diffs = self.scene.tick(rendered.marks);
        self.surface.apply(&diffs);
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use iristour_core::{MarkDiff, MarkPayload};

    use super::*;

    /// Applies diffs to a retained map, mirroring what a real backend does.
    #[derive(Debug, Default)]
    struct RecordingSurface {
        view: Option<Rect>,
        retained: HashMap<MarkId, MarkPayload>,
        applied_batches: usize,
    }

    impl Surface for RecordingSurface {
        fn set_view_box(&mut self, view: Rect) {
            self.view = Some(view);
        }

        fn apply(&mut self, diffs: &[MarkDiff]) {
            self.applied_batches += 1;
            for diff in diffs {
                match diff {
                    MarkDiff::Enter { id, new, .. } | MarkDiff::Update { id, new, .. } => {
                        self.retained.insert(*id, (**new).clone());
                    }
                    MarkDiff::Exit { id } => {
                        self.retained.remove(id);
                    }
                }
            }
        }
    }

    fn sample_csv() -> String {
        let mut csv = String::from("sepal_length,sepal_width,petal_length,petal_width,species\n");
        for i in 0..50 {
            let bump = f64::from(i % 5) * 0.1;
            csv.push_str(&format!("{:.1},3.0,1.4,0.2,setosa\n", 5.0 + bump));
            csv.push_str(&format!("{:.1},2.8,4.3,1.3,versicolor\n", 6.0 + bump));
            csv.push_str(&format!("{:.1},3.0,5.5,2.0,virginica\n", 6.5 + bump));
        }
        csv
    }

    fn loaded_story() -> Story<RecordingSurface> {
        let mut story = Story::new(RecordingSurface::default(), 800.0);
        let dataset = Dataset::from_csv(&sample_csv()).expect("sample parses");
        story.attach_dataset(dataset);
        story
    }

    fn data_mark_ids(surface: &RecordingSurface) -> Vec<MarkId> {
        surface
            .retained
            .keys()
            .copied()
            .filter(|id| id.0 >= 1 << 20)
            .collect()
    }

    #[test]
    fn next_five_times_is_the_identity() {
        for start in 1..=5 {
            let mut n = SceneNumber::new(start).expect("valid scene");
            for _ in 0..5 {
                n = n.next();
            }
            assert_eq!(i64::from(n.get()), start);
        }
    }

    #[test]
    fn previous_inverts_next_everywhere() {
        for start in 1..=5 {
            let n = SceneNumber::new(start).expect("valid scene");
            assert_eq!(n.next().previous(), n);
            assert_eq!(n.previous().next(), n);
        }
    }

    #[test]
    fn previous_from_scene_one_wraps_to_five() {
        let mut story = loaded_story();
        assert_eq!(story.current_scene().get(), 1);
        story.previous();
        assert_eq!(story.current_scene().get(), 5);
    }

    #[test]
    fn goto_rejects_out_of_range_targets_and_keeps_state() {
        let mut story = loaded_story();
        story.next();
        assert_eq!(story.current_scene().get(), 2);

        for bad in [0, 6, -3, 100] {
            let err = story.goto(bad).unwrap_err();
            assert!(matches!(err, StoryError::InvalidScene(n) if n == bad));
            assert_eq!(story.current_scene().get(), 2, "state must be unchanged");
        }
    }

    #[test]
    fn navigation_before_load_is_a_no_op() {
        let mut story = Story::new(RecordingSurface::default(), 800.0);
        story.next();
        story.previous();
        story.resize(400.0);
        assert_eq!(story.current_scene().get(), 1);
        assert!(story.surface().retained.is_empty());
        assert_eq!(story.surface().applied_batches, 0);
    }

    #[test]
    fn attaching_the_dataset_renders_scene_one() {
        let story = loaded_story();
        assert_eq!(story.current_scene().get(), 1);
        assert!(!story.scene().is_empty());
        assert_eq!(
            story.surface().retained.len(),
            story.scene().len(),
            "surface mirrors the retained scene"
        );
        assert_eq!(
            story.surface().view,
            Some(story.geometry().canvas_rect())
        );
    }

    #[test]
    fn scene_transitions_replace_marks_instead_of_accumulating() {
        let mut story = loaded_story();
        story.next();
        assert_eq!(story.current_scene().get(), 2);
        // 150 points plus guides; the overview text is gone.
        assert_eq!(data_mark_ids(story.surface()).len(), 150);
        assert_eq!(story.surface().retained.len(), story.scene().len());
    }

    #[test]
    fn resize_rerenders_the_active_scatter_at_new_positions() {
        let mut story = loaded_story();
        story.goto(3).expect("scene 3 is valid");
        let before = data_mark_ids(story.surface()).len();
        assert_eq!(before, 150);

        let probe = MarkId::for_row(1, 0);
        let pos_before = story.surface().retained[&probe]
            .bounds()
            .expect("point has bounds")
            .center();

        story.resize(400.0);
        assert_eq!(story.current_scene().get(), 3);
        let after = data_mark_ids(story.surface()).len();
        assert_eq!(after, before, "mark count survives resize");

        let pos_after = story.surface().retained[&probe]
            .bounds()
            .expect("point has bounds")
            .center();
        assert_ne!(pos_before.x, pos_after.x, "x position recomputed");
        assert_eq!(
            story.surface().view,
            Some(CanvasGeometry::layout(400.0).canvas_rect())
        );
    }

    #[test]
    fn hovering_a_data_mark_drives_the_tooltip() {
        let mut story = loaded_story();
        story.next();
        let mark = MarkId::for_row(1, 0);

        story.pointer(PointerEvent::Enter {
            mark,
            x: 120.0,
            y: 80.0,
        });
        story.tick(Duration::from_millis(200));
        assert!(story.tooltip().is_visible());
        assert!(story.tooltip().text().contains("Species: setosa"));
        assert_eq!(story.tooltip().position(), (125.0, 52.0));

        story.pointer(PointerEvent::Leave { mark });
        story.tick(Duration::from_millis(500));
        assert!(!story.tooltip().is_visible());
    }

    #[test]
    fn hovering_a_guide_mark_does_not_show_a_tooltip() {
        let mut story = loaded_story();
        story.next();
        story.pointer(PointerEvent::Enter {
            mark: MarkId::from_raw(10),
            x: 0.0,
            y: 0.0,
        });
        story.tick(Duration::from_millis(200));
        assert!(!story.tooltip().is_visible());
    }
}
