// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks and word wrapping.
//!
//! Shaping and layout live downstream of the scene, so guides and wrapped
//! text blocks accept a measurer callback for rough bounds estimation.

/// A minimal text measurement interface used by guide generators.
///
/// Callers can plug in a real text measurement backend (e.g. based on
/// shaping), or use [`HeuristicTextMeasurer`].
pub trait TextMeasurer {
    /// Returns `(width, height)` in the same coordinate system as the marks.
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64);
}

/// A tiny heuristic text measurer suitable for demos and early layout.
///
/// It assumes an average glyph width of ~0.6em and height of 1em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, font_size: f64) -> (f64, f64) {
        let width = 0.6 * font_size * text.chars().count() as f64;
        (width, font_size)
    }
}

/// Greedily wraps `text` into lines no wider than `max_width`.
///
/// Words are split on ASCII whitespace. A single word wider than `max_width`
/// gets a line of its own rather than being broken mid-word. Empty input
/// yields no lines.
pub fn wrap_text(
    text: &str,
    max_width: f64,
    font_size: f64,
    measurer: &dyn TextMeasurer,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{line} {word}")
        };
        let (w, _h) = measurer.measure(&candidate, font_size);
        if w > max_width && !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_max_width() {
        let measurer = HeuristicTextMeasurer;
        let lines = wrap_text(
            "a journey through the iris flower dataset",
            80.0,
            10.0,
            &measurer,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            let (w, _) = measurer.measure(line, 10.0);
            assert!(w <= 80.0 + 1e-9, "line too wide: {line:?}");
        }
    }

    #[test]
    fn wrap_keeps_oversized_words_whole() {
        let measurer = HeuristicTextMeasurer;
        let lines = wrap_text("tiny incomprehensibilities", 40.0, 10.0, &measurer);
        assert_eq!(lines, vec!["tiny", "incomprehensibilities"]);
    }

    #[test]
    fn wrap_of_empty_text_yields_no_lines() {
        let measurer = HeuristicTextMeasurer;
        assert!(wrap_text("", 100.0, 10.0, &measurer).is_empty());
        assert!(wrap_text("   ", 100.0, 10.0, &measurer).is_empty());
    }
}
