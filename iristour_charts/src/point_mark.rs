// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point mark generation.

use kurbo::{Circle, Shape};
use peniko::{Brush, Color};

use iristour_core::{Mark, MarkId, PathPayload};

use crate::scale::ScaleLinear;

/// One data point in data units, with its resolved fill.
#[derive(Clone, Debug)]
pub struct PointRow {
    /// X value in data units.
    pub x: f64,
    /// Y value in data units.
    pub y: f64,
    /// Fill paint for this point.
    pub fill: Brush,
}

/// A circular point mark series.
///
/// This generates one circle per row. Mark identity is derived from
/// `(group, row index)`, so a re-layout at a new container width updates the
/// existing marks instead of replacing them.
#[derive(Clone, Debug)]
pub struct PointMarkSpec {
    /// Stable-id group for the series.
    pub group: u64,
    /// X scale mapping data x into scene x.
    pub x_scale: ScaleLinear,
    /// Y scale mapping data y into scene y.
    pub y_scale: ScaleLinear,
    /// Circle radius in scene coordinates.
    pub radius: f64,
    /// Rendering order hint (`iristour_core::Mark::z_index`).
    pub z_index: i32,
}

impl PointMarkSpec {
    /// Creates a point mark spec with a radius of 5.
    pub fn new(group: u64, x_scale: ScaleLinear, y_scale: ScaleLinear) -> Self {
        Self {
            group,
            x_scale,
            y_scale,
            radius: 5.0,
            z_index: crate::z_order::SERIES_POINTS,
        }
    }

    /// Sets the circle radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one mark per row.
    pub fn marks(&self, rows: &[PointRow]) -> Vec<Mark> {
        rows.iter()
            .enumerate()
            .map(|(row, r)| {
                let cx = self.x_scale.map(r.x);
                let cy = self.y_scale.map(r.y);
                let circle = Circle::new((cx, cy), self.radius);
                Mark::path(
                    MarkId::for_row(self.group, row as u64),
                    self.z_index,
                    PathPayload {
                        path: circle.to_path(0.1),
                        fill: r.fill.clone(),
                        stroke: Brush::Solid(Color::TRANSPARENT),
                        stroke_width: 0.0,
                    },
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_marks_land_at_scaled_positions() {
        let x_scale = ScaleLinear::new((0.0, 10.0), (0.0, 100.0));
        let y_scale = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        let spec = PointMarkSpec::new(3, x_scale, y_scale).with_radius(4.0);

        let rows = vec![
            PointRow {
                x: 0.0,
                y: 0.0,
                fill: Brush::default(),
            },
            PointRow {
                x: 5.0,
                y: 10.0,
                fill: Brush::default(),
            },
        ];
        let marks = spec.marks(&rows);
        assert_eq!(marks.len(), 2);
        assert_eq!(marks[0].id, MarkId::for_row(3, 0));

        let b = marks[1].payload.bounds().expect("circle bounds");
        let center = b.center();
        assert!((center.x - 50.0).abs() < 0.2);
        assert!((center.y - 0.0).abs() < 0.2);
    }
}
