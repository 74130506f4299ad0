// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The shared tooltip controller.
//!
//! One tooltip instance serves every mark in every scene. Fades are modeled
//! as linear opacity ramps driven by `tick`; the embedder decides how often
//! to tick and how to draw the result.

use std::time::Duration;

/// Fade-in duration for `show`.
pub const FADE_IN: Duration = Duration::from_millis(200);
/// Fade-out duration for `hide`.
pub const FADE_OUT: Duration = Duration::from_millis(500);

/// Pointer offset applied to the tooltip position, in host pixels.
pub const OFFSET_X: f64 = 5.0;
/// Pointer offset applied to the tooltip position, in host pixels.
pub const OFFSET_Y: f64 = -28.0;

/// Target opacity when shown.
const SHOWN_OPACITY: f64 = 0.9;

/// A floating tooltip with fade in/out behavior.
///
/// A new `show` or `hide` pre-empts any in-flight fade: the ramp restarts
/// from the current opacity toward the new target, so rapid hover churn never
/// makes the tooltip jump.
#[derive(Debug)]
pub struct Tooltip {
    text: String,
    x: f64,
    y: f64,
    opacity: f64,
    target: f64,
    rate_per_sec: f64,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self::new()
    }
}

impl Tooltip {
    /// Creates a hidden tooltip.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            x: 0.0,
            y: 0.0,
            opacity: 0.0,
            target: 0.0,
            rate_per_sec: 0.0,
        }
    }

    /// Sets the content and position and starts fading in.
    ///
    /// The position is offset from the pointer by ([`OFFSET_X`],
    /// [`OFFSET_Y`]).
    pub fn show(&mut self, text: impl Into<String>, pointer_x: f64, pointer_y: f64) {
        self.text = text.into();
        self.x = pointer_x + OFFSET_X;
        self.y = pointer_y + OFFSET_Y;
        self.target = SHOWN_OPACITY;
        self.rate_per_sec = SHOWN_OPACITY / FADE_IN.as_secs_f64();
    }

    /// Starts fading out.
    pub fn hide(&mut self) {
        self.target = 0.0;
        self.rate_per_sec = SHOWN_OPACITY / FADE_OUT.as_secs_f64();
    }

    /// Advances the fade by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        let step = self.rate_per_sec * dt.as_secs_f64();
        if self.opacity < self.target {
            self.opacity = (self.opacity + step).min(self.target);
        } else {
            self.opacity = (self.opacity - step).max(self.target);
        }
    }

    /// Current opacity in `[0, 0.9]`.
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Current content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Current position in host pixels.
    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Whether the tooltip has any visible opacity.
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
