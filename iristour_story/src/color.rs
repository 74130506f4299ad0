// Copyright 2026 the Iristour Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Categorical color assignment.

use std::collections::HashMap;

use peniko::Color;

/// The classic 10-color categorical palette.
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb8(0x1f, 0x77, 0xb4),
    Color::from_rgb8(0xff, 0x7f, 0x0e),
    Color::from_rgb8(0x2c, 0xa0, 0x2c),
    Color::from_rgb8(0xd6, 0x27, 0x28),
    Color::from_rgb8(0x94, 0x67, 0xbd),
    Color::from_rgb8(0x8c, 0x56, 0x4b),
    Color::from_rgb8(0xe3, 0x77, 0xc2),
    Color::from_rgb8(0x7f, 0x7f, 0x7f),
    Color::from_rgb8(0xbc, 0xbd, 0x22),
    Color::from_rgb8(0x17, 0xbe, 0xcf),
];

/// An append-only mapping from categorical label to palette color.
///
/// Labels get palette entries in first-seen order and are never reassigned,
/// so a label keeps its color across every scene for the life of the process.
/// Past ten labels the palette wraps.
#[derive(Debug, Default)]
pub struct ColorEncoding {
    assigned: HashMap<String, usize>,
    order: Vec<String>,
}

impl ColorEncoding {
    /// Creates an empty encoding.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the color for `label`, assigning the next palette entry on
    /// first sight.
    pub fn color(&mut self, label: &str) -> Color {
        let index = match self.assigned.get(label) {
            Some(i) => *i,
            None => {
                let i = self.order.len();
                self.assigned.insert(label.to_string(), i);
                self.order.push(label.to_string());
                i
            }
        };
        CATEGORY10[index % CATEGORY10.len()]
    }

    /// Returns the number of labels seen so far.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns whether no label has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_label_always_gets_the_same_color() {
        let mut colors = ColorEncoding::new();
        let a1 = colors.color("setosa");
        let _ = colors.color("versicolor");
        let a2 = colors.color("setosa");
        assert_eq!(a1, a2);
    }

    #[test]
    fn first_seen_order_fixes_palette_entries() {
        let mut colors = ColorEncoding::new();
        let first = colors.color("versicolor");
        let second = colors.color("setosa");
        assert_eq!(first, CATEGORY10[0]);
        assert_eq!(second, CATEGORY10[1]);
        assert_ne!(first, second);
        // Re-querying in any order changes nothing.
        assert_eq!(colors.color("versicolor"), CATEGORY10[0]);
    }

    #[test]
    fn palette_wraps_after_ten_labels() {
        let mut colors = ColorEncoding::new();
        for i in 0..10 {
            colors.color(&format!("label-{i}"));
        }
        assert_eq!(colors.color("label-10"), CATEGORY10[0]);
        assert_eq!(colors.len(), 11);
    }
}
