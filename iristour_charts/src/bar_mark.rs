// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

use kurbo::Rect;
use peniko::Brush;

use iristour_core::{Mark, MarkId};

use crate::scale::{ScaleBand, ScaleLinear};

/// One bar value in data units, with its resolved fill.
#[derive(Clone, Debug)]
pub struct BarRow {
    /// Bar value in data units.
    pub value: f64,
    /// Fill paint for this bar.
    pub fill: Brush,
}

/// A vertical bar mark series.
///
/// This generates one rectangle per row, with bar geometry derived from a
/// numeric value and a baseline. Values below the baseline produce bars
/// hanging under it; the height is always non-negative.
#[derive(Clone, Debug)]
pub struct BarMarkSpec {
    /// Stable-id group for the series.
    pub group: u64,
    /// Band scale used for bar positions along x.
    pub band: ScaleBand,
    /// Linear scale used for bar positions along y.
    pub y_scale: ScaleLinear,
    /// Baseline in data units (typically `0.0`).
    pub baseline: f64,
    /// Rendering order hint (`iristour_core::Mark::z_index`).
    pub z_index: i32,
}

impl BarMarkSpec {
    /// Creates a bar mark spec with `baseline = 0`.
    pub fn new(group: u64, band: ScaleBand, y_scale: ScaleLinear) -> Self {
        Self {
            group,
            band,
            y_scale,
            baseline: 0.0,
            z_index: crate::z_order::SERIES_FILL,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_baseline(mut self, baseline: f64) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the z-index used for render ordering.
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Generates one mark per row, in band order.
    pub fn marks(&self, rows: &[BarRow]) -> Vec<Mark> {
        let bw = self.band.band_width();
        let y0 = self.y_scale.map(self.baseline);

        rows.iter()
            .enumerate()
            .map(|(row, r)| {
                let x = self.band.x(row);
                let yv = self.y_scale.map(r.value);
                let y = yv.min(y0);
                let h = (yv - y0).abs();
                Mark::rect(
                    MarkId::for_row(self.group, row as u64),
                    self.z_index,
                    Rect::new(x, y, x + bw, y + h),
                    r.fill.clone(),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use iristour_core::MarkPayload;

    use super::*;

    fn rect_of(mark: &Mark) -> Rect {
        match &mark.payload {
            MarkPayload::Rect(r) => r.rect,
            other => panic!("expected a rect mark, got {other:?}"),
        }
    }

    #[test]
    fn bar_heights_are_proportional_to_values() {
        let band = ScaleBand::new((0.0, 300.0), 3).with_padding(0.1, 0.1);
        let y_scale = ScaleLinear::new((0.0, 10.0), (100.0, 0.0));
        let spec = BarMarkSpec::new(2, band, y_scale);

        let rows = vec![
            BarRow {
                value: 5.0,
                fill: Brush::default(),
            },
            BarRow {
                value: 10.0,
                fill: Brush::default(),
            },
        ];
        let marks = spec.marks(&rows);
        let a = rect_of(&marks[0]);
        let b = rect_of(&marks[1]);
        assert!((a.height() - 50.0).abs() < 1e-9);
        assert!((b.height() - 100.0).abs() < 1e-9);
        assert!((a.y1 - 100.0).abs() < 1e-9, "bars sit on the baseline");
        assert!(a.x0 < b.x0);
    }

    #[test]
    fn negative_values_hang_below_the_baseline() {
        let band = ScaleBand::new((0.0, 100.0), 1);
        let y_scale = ScaleLinear::new((-10.0, 10.0), (100.0, 0.0));
        let spec = BarMarkSpec::new(2, band, y_scale);

        let marks = spec.marks(&[BarRow {
            value: -5.0,
            fill: Brush::default(),
        }]);
        let r = rect_of(&marks[0]);
        let baseline_y = y_scale.map(0.0);
        assert!((r.y0 - baseline_y).abs() < 1e-9);
        assert!(r.y1 > baseline_y);
    }
}
