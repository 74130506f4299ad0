// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas geometry.

use kurbo::Rect;

/// Top margin in pixels (title strip).
pub const MARGIN_TOP: f64 = 60.0;
/// Right margin in pixels.
pub const MARGIN_RIGHT: f64 = 30.0;
/// Bottom margin in pixels (x axis + title strip).
pub const MARGIN_BOTTOM: f64 = 50.0;
/// Left margin in pixels (y axis + title strip).
pub const MARGIN_LEFT: f64 = 60.0;
/// Fixed total canvas height in pixels.
pub const TOTAL_HEIGHT: f64 = 500.0;

/// The canvas layout derived from a measured container width.
///
/// The geometry is recomputed wholesale on every resize; there is no partial
/// update. Content extents are clamped to a 1-pixel minimum so a degenerate
/// container still yields a drawable (if useless) canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasGeometry {
    /// Content width in pixels (container width minus side margins).
    pub content_width: f64,
    /// Content height in pixels (height budget minus vertical margins).
    pub content_height: f64,
}

impl CanvasGeometry {
    /// Computes the layout for a container of `container_width` pixels.
    pub fn layout(container_width: f64) -> Self {
        let content_width = (container_width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0);
        let content_height = (TOTAL_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM).max(1.0);
        Self {
            content_width,
            content_height,
        }
    }

    /// Total canvas width including margins.
    pub fn total_width(&self) -> f64 {
        self.content_width + MARGIN_LEFT + MARGIN_RIGHT
    }

    /// Total canvas height including margins.
    pub fn total_height(&self) -> f64 {
        self.content_height + MARGIN_TOP + MARGIN_BOTTOM
    }

    /// The full canvas rectangle, margins included.
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.total_width(), self.total_height())
    }

    /// The plot (content) rectangle in canvas coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::new(
            MARGIN_LEFT,
            MARGIN_TOP,
            MARGIN_LEFT + self.content_width,
            MARGIN_TOP + self.content_height,
        )
    }

    /// The margin strip below the plot, for the x axis and its title.
    pub fn bottom_axis_rect(&self) -> Rect {
        let plot = self.plot_rect();
        Rect::new(plot.x0, plot.y1, plot.x1, plot.y1 + MARGIN_BOTTOM)
    }

    /// The margin strip left of the plot, for the y axis and its title.
    pub fn left_axis_rect(&self) -> Rect {
        let plot = self.plot_rect();
        Rect::new(plot.x0 - MARGIN_LEFT, plot.y0, plot.x0, plot.y1)
    }
}
