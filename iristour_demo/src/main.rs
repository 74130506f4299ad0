// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drives the iris tour against the SVG surface and writes an HTML report:
//! one section per scene, plus hover and resize walk-throughs.

mod html;
mod svg;

use std::time::Duration;

use tracing::warn;

use iristour_core::{MarkId, PointerEvent};
use iristour_story::{Dataset, HttpSource, IRIS_CSV_URL, Story, scene_def};

use crate::html::HtmlSection;
use crate::svg::SvgSurface;

/// A small offline sample so the demo still runs without network access.
const FALLBACK_CSV: &str = "\
sepal_length,sepal_width,petal_length,petal_width,species
5.1,3.5,1.4,0.2,setosa
4.9,3.0,1.4,0.2,setosa
4.7,3.2,1.3,0.2,setosa
4.6,3.1,1.5,0.2,setosa
5.0,3.6,1.4,0.2,setosa
7.0,3.2,4.7,1.4,versicolor
6.4,3.2,4.5,1.5,versicolor
6.9,3.1,4.9,1.5,versicolor
5.5,2.3,4.0,1.3,versicolor
6.5,2.8,4.6,1.5,versicolor
6.3,3.3,6.0,2.5,virginica
5.8,2.7,5.1,1.9,virginica
7.1,3.0,5.9,2.1,virginica
6.3,2.9,5.6,1.8,virginica
6.5,3.0,5.8,2.2,virginica
";

fn main() {
    tracing_subscriber::fmt().init();

    let dataset = match Dataset::load(&HttpSource, IRIS_CSV_URL) {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!(error = %e, "falling back to the bundled sample dataset");
            Dataset::from_csv(FALLBACK_CSV).expect("bundled sample parses")
        }
    };
    let record_count = dataset.records().len();

    let mut story = Story::new(SvgSurface::default(), 800.0);
    story.attach_dataset(dataset);

    let mut sections = Vec::new();
    sections.push(scene_section(&story, record_count));
    for _ in 1..5 {
        story.next();
        sections.push(scene_section(&story, record_count));
    }

    // Hover walk-through: enter the first bar of scene 5, let the fade-in
    // finish, then leave.
    story.pointer(PointerEvent::Enter {
        mark: MarkId::for_row(1, 0),
        x: 200.0,
        y: 300.0,
    });
    story.tick(Duration::from_millis(200));
    let (tip_x, tip_y) = story.tooltip().position();
    sections.push(HtmlSection {
        title: "Hover walk-through".to_string(),
        description: format!(
            "Hovering the first bar shows the tooltip at ({tip_x}, {tip_y}) \
             with opacity {:.2}:\n{}",
            story.tooltip().opacity(),
            story.tooltip().text(),
        ),
        svg: story.surface().to_svg_string(),
    });
    story.pointer(PointerEvent::Leave {
        mark: MarkId::for_row(1, 0),
    });
    story.tick(Duration::from_millis(500));

    // Resize walk-through: scene 3 at 800px, then at 400px.
    if let Err(e) = story.goto(3) {
        warn!(error = %e, "unexpected navigation failure");
    }
    story.resize(400.0);
    sections.push(HtmlSection {
        title: "Resize walk-through".to_string(),
        description: format!(
            "Scene 3 re-laid-out for a 400px container; all {record_count} \
             points are at recomputed positions."
        ),
        svg: story.surface().to_svg_string(),
    });

    let report = html::render_report("Iris dataset tour", &sections);
    std::fs::write("iristour_demo.html", report).expect("write iristour_demo.html");
    println!("wrote iristour_demo.html");
}

fn scene_section(story: &Story<SvgSurface>, record_count: usize) -> HtmlSection {
    let number = story.current_scene().get();
    let def = scene_def(number);
    HtmlSection {
        title: format!("Scene {number} — {}", def.title),
        description: format!("{record_count} records loaded."),
        svg: story.surface().to_svg_string(),
    }
}
