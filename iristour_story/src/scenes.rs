// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The fixed registry of five scenes and their mark generation.
//!
//! Scene definitions are data: axis domains, measures, and callout
//! configuration live in a tagged variant per scene rather than in ad hoc
//! closures, so one generic build routine covers all five scenes.

use std::collections::HashMap;

use kurbo::{Point, Vec2};
use peniko::Brush;
use peniko::color::palette::css;
use tracing::warn;

use iristour_charts::{
    AxisSpec, BarMarkSpec, BarRow, CalloutSpec, HeuristicTextMeasurer, PointMarkSpec, PointRow,
    ScaleBandSpec, ScaleLinearSpec, TextMarkSpec, wrap_text, z_order,
};
use iristour_core::{Mark, MarkId, TextAnchor, TextBaseline};

use crate::canvas::{CanvasGeometry, MARGIN_TOP};
use crate::color::ColorEncoding;
use crate::data::{Dataset, IRIS_CSV_URL, Measure};

/// Number of scenes in the tour.
pub const SCENE_COUNT: u8 = 5;

// Stable-id layout. Data-bound series marks use `MarkId::for_row` with a
// group, which puts them far above every guide id.
const TITLE_ID: u64 = 10;
const OVERVIEW_TEXT_BASE: u64 = 300;
const X_AXIS_BASE: u64 = 100;
const Y_AXIS_BASE: u64 = 200;
const CALLOUT_BASE: u64 = 5000;
const SERIES_GROUP: u64 = 1;

/// A callout configuration with its anchor in data units.
#[derive(Clone, Copy, Debug)]
pub struct CalloutConfig {
    /// Short title drawn at the connector end.
    pub title: &'static str,
    /// Note text drawn under the title.
    pub note: &'static str,
    /// Anchor x in data units.
    pub x: f64,
    /// Anchor y in data units.
    pub y: f64,
    /// Label x-offset in pixels.
    pub dx: f64,
    /// Label y-offset in pixels.
    pub dy: f64,
}

/// A scatter scene configuration.
#[derive(Clone, Copy, Debug)]
pub struct ScatterConfig {
    /// Measure on the x axis.
    pub x: Measure,
    /// Measure on the y axis.
    pub y: Measure,
    /// Fixed x domain in data units.
    pub x_domain: (f64, f64),
    /// Fixed y domain in data units.
    pub y_domain: (f64, f64),
    /// The scene's callout.
    pub callout: CalloutConfig,
}

/// What a scene draws.
#[derive(Clone, Copy, Debug)]
pub enum SceneKind {
    /// Title + descriptive text, no marks.
    Overview,
    /// One circular point mark per record.
    Scatter(ScatterConfig),
    /// One bar per species, height = per-species mean of a measure.
    BarMeans {
        /// The aggregated measure.
        value: Measure,
        /// The scene's callout, anchored at the third species' bar.
        callout: CalloutConfig,
    },
}

/// One scene definition: a title plus its drawing configuration.
#[derive(Clone, Copy, Debug)]
pub struct SceneDef {
    /// Scene title shown in the top margin strip.
    pub title: &'static str,
    /// What the scene draws.
    pub kind: SceneKind,
}

/// The fixed, ordered scene registry.
pub const SCENES: [SceneDef; SCENE_COUNT as usize] = [
    SceneDef {
        title: "Iris Dataset Overview",
        kind: SceneKind::Overview,
    },
    SceneDef {
        title: "Sepal Length vs Width",
        kind: SceneKind::Scatter(ScatterConfig {
            x: Measure::SepalLength,
            y: Measure::SepalWidth,
            x_domain: (4.0, 8.0),
            y_domain: (2.0, 4.5),
            callout: CalloutConfig {
                title: "Sepal Length vs Width",
                note: "Long Sepals",
                x: 7.5,
                y: 3.8,
                dx: -30.0,
                dy: -30.0,
            },
        }),
    },
    SceneDef {
        title: "Petal Length vs Width",
        kind: SceneKind::Scatter(ScatterConfig {
            x: Measure::PetalLength,
            y: Measure::PetalWidth,
            x_domain: (1.0, 7.0),
            y_domain: (0.0, 2.5),
            callout: CalloutConfig {
                title: "Petal Length vs Width",
                note: "Wide Petals",
                x: 5.5,
                y: 2.0,
                dx: -100.0,
                dy: -30.0,
            },
        }),
    },
    SceneDef {
        title: "Sepal Length vs Petal Length",
        kind: SceneKind::Scatter(ScatterConfig {
            x: Measure::SepalLength,
            y: Measure::PetalLength,
            x_domain: (4.0, 8.0),
            y_domain: (1.0, 7.0),
            callout: CalloutConfig {
                title: "Sepal vs Petal Length",
                note: "High correlation",
                x: 6.5,
                y: 5.0,
                dx: -150.0,
                dy: -30.0,
            },
        }),
    },
    SceneDef {
        title: "Average Sepal Length by Species",
        kind: SceneKind::BarMeans {
            value: Measure::SepalLength,
            callout: CalloutConfig {
                title: "Average Sepal Length",
                note: "Species with Long Sepals",
                // Anchor comes from the third species' bar; x/y are unused.
                x: 0.0,
                y: 0.0,
                dx: 30.0,
                dy: -30.0,
            },
        },
    },
];

/// Looks up a scene definition by its 1-based number.
pub fn scene_def(number: u8) -> &'static SceneDef {
    &SCENES[usize::from(number - 1)]
}

/// The marks of one rendered scene plus the hover payload per data mark.
#[derive(Debug, Default)]
pub struct RenderedScene {
    /// All marks of the scene, unordered.
    pub marks: Vec<Mark>,
    /// Tooltip text keyed by data mark id.
    pub hover: HashMap<MarkId, String>,
}

/// Builds the full mark set for one scene at the current geometry.
pub fn build_scene(
    def: &SceneDef,
    dataset: &Dataset,
    colors: &mut ColorEncoding,
    geometry: CanvasGeometry,
) -> RenderedScene {
    let mut out = RenderedScene::default();
    out.marks.push(scene_title(def.title, geometry));
    match &def.kind {
        SceneKind::Overview => build_overview(&mut out, geometry),
        SceneKind::Scatter(config) => build_scatter(&mut out, config, dataset, colors, geometry),
        SceneKind::BarMeans { value, callout } => {
            build_bar_means(&mut out, *value, callout, dataset, colors, geometry);
        }
    }
    out
}

fn scene_title(title: &str, geometry: CanvasGeometry) -> Mark {
    let plot = geometry.plot_rect();
    TextMarkSpec::new(
        MarkId::from_raw(TITLE_ID),
        Point::new((plot.x0 + plot.x1) * 0.5, MARGIN_TOP * 0.5),
        title,
    )
    .with_font_size(24.0)
    .with_anchor(TextAnchor::Middle)
    .with_z_index(z_order::TITLES)
    .mark()
}

fn build_overview(out: &mut RenderedScene, geometry: CanvasGeometry) {
    let plot = geometry.plot_rect();
    let font_size = 16.0;
    let text = format!(
        "This visualization presents an overview of the Iris dataset, which \
         includes measurements of sepal length, sepal width, petal length, and \
         petal width for different species of Iris flowers. Navigate through \
         the scenes to explore the relationships between these features. The \
         dataset is available at {IRIS_CSV_URL}."
    );

    let block_width = (geometry.content_width - 40.0).max(1.0);
    let lines = wrap_text(&text, block_width, font_size, &HeuristicTextMeasurer);
    let x = plot.x0 + 0.5 * (geometry.content_width - block_width);
    let y0 = plot.y0 + 0.5 * geometry.content_height;
    let line_height = 1.1 * font_size;

    for (i, line) in lines.into_iter().enumerate() {
        out.marks.push(
            TextMarkSpec::new(
                MarkId::from_raw(OVERVIEW_TEXT_BASE + i as u64),
                Point::new(x, y0 + line_height * i as f64),
                line,
            )
            .with_font_size(font_size)
            .with_fill(Brush::Solid(css::GRAY))
            .with_baseline(TextBaseline::Hanging)
            .with_z_index(z_order::TITLES)
            .mark(),
        );
    }
}

fn build_scatter(
    out: &mut RenderedScene,
    config: &ScatterConfig,
    dataset: &Dataset,
    colors: &mut ColorEncoding,
    geometry: CanvasGeometry,
) {
    let plot = geometry.plot_rect();

    let x_spec = ScaleLinearSpec::new(config.x_domain);
    let y_spec = ScaleLinearSpec::new(config.y_domain);
    let x_axis = AxisSpec::bottom(X_AXIS_BASE, x_spec).with_title(config.x.label());
    let y_axis = AxisSpec::left(Y_AXIS_BASE, y_spec).with_title(config.y.label());
    let x_scale = x_spec.instantiate(x_axis.range(plot));
    let y_scale = y_spec.instantiate(y_axis.range(plot));

    out.marks.extend(x_axis.marks(plot, geometry.bottom_axis_rect()));
    out.marks.extend(y_axis.marks(plot, geometry.left_axis_rect()));

    let rows: Vec<PointRow> = dataset
        .records()
        .iter()
        .map(|r| PointRow {
            x: config.x.get(r),
            y: config.y.get(r),
            fill: Brush::Solid(colors.color(&r.species)),
        })
        .collect();
    let points = PointMarkSpec::new(SERIES_GROUP, x_scale, y_scale).marks(&rows);

    for (mark, record) in points.iter().zip(dataset.records()) {
        out.hover.insert(
            mark.id,
            format!(
                "Species: {}\n{}: {}\n{}: {}",
                record.species,
                config.x.label(),
                config.x.get(record),
                config.y.label(),
                config.y.get(record),
            ),
        );
    }
    out.marks.extend(points);

    let anchor = Point::new(x_scale.map(config.callout.x), y_scale.map(config.callout.y));
    out.marks.extend(
        CalloutSpec::new(
            CALLOUT_BASE,
            anchor,
            Vec2::new(config.callout.dx, config.callout.dy),
            config.callout.title,
            config.callout.note,
        )
        .marks(),
    );
}

fn build_bar_means(
    out: &mut RenderedScene,
    value: Measure,
    callout: &CalloutConfig,
    dataset: &Dataset,
    colors: &mut ColorEncoding,
    geometry: CanvasGeometry,
) {
    let plot = geometry.plot_rect();
    let species = dataset.species();

    let means: Vec<(&str, f64)> = species
        .iter()
        .filter_map(|s| dataset.mean(value, s).map(|m| (s.as_str(), m)))
        .collect();
    let max_mean = means.iter().map(|(_, m)| *m).fold(0.0_f64, f64::max);

    let band_spec = ScaleBandSpec::new(means.len()).with_padding(0.1, 0.1);
    let labels: Vec<String> = means.iter().map(|(s, _)| (*s).to_string()).collect();
    let x_axis = AxisSpec::bottom(X_AXIS_BASE, band_spec)
        .with_title("Species")
        .with_tick_formatter(move |v, _step| {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                reason = "band tick values are small non-negative indices"
            )]
            let i = v.round().max(0.0) as usize;
            labels.get(i).map_or_else(String::new, Clone::clone)
        });
    let y_spec = ScaleLinearSpec::new((0.0, max_mean));
    let y_axis = AxisSpec::left(Y_AXIS_BASE, y_spec).with_title("Avg Sepal Length");

    let band = band_spec.instantiate(x_axis.range(plot));
    let y_scale = y_spec.instantiate(y_axis.range(plot));

    out.marks.extend(x_axis.marks(plot, geometry.bottom_axis_rect()));
    out.marks.extend(y_axis.marks(plot, geometry.left_axis_rect()));

    let rows: Vec<BarRow> = means
        .iter()
        .map(|(s, m)| BarRow {
            value: *m,
            fill: Brush::Solid(colors.color(s)),
        })
        .collect();
    let bars = BarMarkSpec::new(SERIES_GROUP, band, y_scale).marks(&rows);

    for (mark, (s, m)) in bars.iter().zip(&means) {
        out.hover.insert(
            mark.id,
            format!("Species: {s}\nAvg Sepal Length: {m:.2}"),
        );
    }
    out.marks.extend(bars);

    // The callout points at the third species' bar.
    if let Some((_, mean)) = means.get(2) {
        let anchor = Point::new(band.x(2) + 0.5 * band.band_width(), y_scale.map(*mean));
        out.marks.extend(
            CalloutSpec::new(
                CALLOUT_BASE,
                anchor,
                Vec2::new(callout.dx, callout.dy),
                callout.title,
                callout.note,
            )
            .marks(),
        );
    } else {
        warn!(
            species = means.len(),
            "skipping bar chart callout: needs at least three species"
        );
    }
}

#[cfg(test)]
mod tests {
    use iristour_core::MarkPayload;

    use super::*;

    fn sample_dataset() -> Dataset {
        let mut csv = String::from("sepal_length,sepal_width,petal_length,petal_width,species\n");
        for i in 0..50 {
            let bump = f64::from(i % 5) * 0.1;
            csv.push_str(&format!("{:.1},3.0,1.4,0.2,setosa\n", 5.0 + bump));
            csv.push_str(&format!("{:.1},2.8,4.3,1.3,versicolor\n", 6.0 + bump));
            csv.push_str(&format!("{:.1},3.0,5.5,2.0,virginica\n", 6.5 + bump));
        }
        Dataset::from_csv(&csv).expect("sample parses")
    }

    fn data_marks(scene: &RenderedScene) -> Vec<&Mark> {
        scene
            .marks
            .iter()
            .filter(|m| m.id.0 >= 1 << 20)
            .collect()
    }

    #[test]
    fn overview_scene_has_title_and_text_but_no_data_marks() {
        let dataset = sample_dataset();
        let mut colors = ColorEncoding::new();
        let geometry = CanvasGeometry::layout(800.0);

        let scene = build_scene(scene_def(1), &dataset, &mut colors, geometry);
        assert!(data_marks(&scene).is_empty());
        assert!(scene.hover.is_empty());
        let texts: Vec<&str> = scene
            .marks
            .iter()
            .filter_map(|m| match &m.payload {
                MarkPayload::Text(t) => Some(t.text.as_str()),
                _ => None,
            })
            .collect();
        assert!(texts.contains(&"Iris Dataset Overview"));
        assert!(
            texts.iter().any(|t| t.contains("iris.csv")),
            "overview text should mention the data source"
        );
    }

    #[test]
    fn scatter_scene_draws_one_point_per_record_with_hover_text() {
        let dataset = sample_dataset();
        let mut colors = ColorEncoding::new();
        let geometry = CanvasGeometry::layout(800.0);

        let scene = build_scene(scene_def(2), &dataset, &mut colors, geometry);
        let points = data_marks(&scene);
        assert_eq!(points.len(), dataset.records().len());
        assert_eq!(scene.hover.len(), dataset.records().len());

        let first = &dataset.records()[0];
        let text = &scene.hover[&MarkId::for_row(SERIES_GROUP, 0)];
        assert!(text.contains(&format!("Species: {}", first.species)));
        assert!(text.contains("Sepal Length"));
        assert!(text.contains("Sepal Width"));
    }

    #[test]
    fn bar_scene_draws_one_bar_per_species_with_proportional_heights() {
        let dataset = sample_dataset();
        let mut colors = ColorEncoding::new();
        let geometry = CanvasGeometry::layout(800.0);

        let scene = build_scene(scene_def(5), &dataset, &mut colors, geometry);
        let bars = data_marks(&scene);
        assert_eq!(bars.len(), 3);

        let heights: Vec<f64> = bars
            .iter()
            .filter_map(|m| m.payload.bounds())
            .map(|b| b.height())
            .collect();
        let means: Vec<f64> = dataset
            .species()
            .iter()
            .map(|s| dataset.mean(Measure::SepalLength, s).expect("species seen"))
            .collect();
        // heights[i] / means[i] constant across bars.
        let ratio = heights[0] / means[0];
        for (h, m) in heights.iter().zip(&means) {
            assert!((h / m - ratio).abs() < 1e-6, "height not proportional");
        }

        let setosa_mean = means[0];
        let text = &scene.hover[&MarkId::for_row(SERIES_GROUP, 0)];
        assert!(text.contains("Species: setosa"));
        assert!(text.contains(&format!("Avg Sepal Length: {setosa_mean:.2}")));
    }

    #[test]
    fn bar_scene_with_a_single_species_skips_only_the_callout() {
        let csv = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.0,3.0,1.4,0.2,setosa
5.2,3.1,1.5,0.3,setosa
";
        let dataset = Dataset::from_csv(csv).expect("sample parses");
        let mut colors = ColorEncoding::new();
        let geometry = CanvasGeometry::layout(800.0);

        let scene = build_scene(scene_def(5), &dataset, &mut colors, geometry);
        assert_eq!(data_marks(&scene).len(), 1);
        assert!(
            !scene
                .marks
                .iter()
                .any(|m| m.id == MarkId::from_raw(CALLOUT_BASE)),
            "callout should be skipped with fewer than three species"
        );
    }

    #[test]
    fn scatter_scenes_reuse_species_colors_across_scenes() {
        let dataset = sample_dataset();
        let mut colors = ColorEncoding::new();
        let geometry = CanvasGeometry::layout(800.0);

        let scene2 = build_scene(scene_def(2), &dataset, &mut colors, geometry);
        let scene3 = build_scene(scene_def(3), &dataset, &mut colors, geometry);

        let fill_of = |scene: &RenderedScene| match &scene
            .marks
            .iter()
            .find(|m| m.id == MarkId::for_row(SERIES_GROUP, 0))
            .expect("first point exists")
            .payload
        {
            MarkPayload::Path(p) => p.fill.clone(),
            other => panic!("expected a path point, got {other:?}"),
        };
        assert_eq!(fill_of(&scene2), fill_of(&scene3));
    }
}
