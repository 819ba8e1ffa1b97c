// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Horizontal strip scroll position to slide index.

/// Item width as a fraction of the viewport in the fixed-layout mapping.
pub const LEGACY_ITEM_FRACTION: f32 = 0.85;
/// Gap between items in the fixed-layout mapping.
pub const LEGACY_GAP: f32 = 16.0;

/// Slide index assuming items are 85% of the viewport wide with a 16px gap.
///
/// Not clamped: with other layouts the result can fall outside the item
/// range. Kept for comparison with [`StripGeometry::slide_index`].
pub fn legacy_slide_index(scroll_left: f32, viewport_width: f32) -> i64 {
    let stride = viewport_width * LEGACY_ITEM_FRACTION + LEGACY_GAP;
    if stride <= 0.0 {
        return 0;
    }
    (scroll_left / stride).round() as i64
}

/// Measured layout of a strip of equally sized items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StripGeometry {
    pub item_width: f32,
    pub gap: f32,
    pub item_count: usize,
}

impl StripGeometry {
    /// Measure from laid-out item rectangles, left to right.
    pub fn from_rects(rects: &[egui::Rect]) -> Option<Self> {
        let first = rects.first()?;
        let gap = rects
            .get(1)
            .map(|second| (second.min.x - first.max.x).max(0.0))
            .unwrap_or(0.0);
        Some(Self {
            item_width: first.width(),
            gap,
            item_count: rects.len(),
        })
    }

    pub fn stride(&self) -> f32 {
        self.item_width + self.gap
    }

    /// Index of the item nearest to `scroll_left`, within `0..item_count`.
    pub fn slide_index(&self, scroll_left: f32) -> usize {
        let stride = self.stride();
        if self.item_count == 0 || stride <= 0.0 || !scroll_left.is_finite() {
            return 0;
        }
        let raw = (scroll_left / stride).round().max(0.0) as usize;
        raw.min(self.item_count - 1)
    }

    /// Fraction of the strip shown by the progress bar, `0.0..=1.0`.
    pub fn progress(&self, index: usize) -> f32 {
        if self.item_count == 0 {
            return 0.0;
        }
        (index.min(self.item_count - 1) + 1) as f32 / self.item_count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2, Rect};

    #[test]
    fn test_legacy_mapping() {
        assert_eq!(legacy_slide_index(0.0, 1000.0), 0);
        assert_eq!(legacy_slide_index(866.0, 1000.0), 1);
        assert_eq!(legacy_slide_index(1732.0, 1000.0), 2);
    }

    #[test]
    fn test_legacy_mapping_overshoots() {
        // Three items, but the scroll offset comes from a narrower layout.
        assert_eq!(legacy_slide_index(5000.0, 1000.0), 6);
    }

    #[test]
    fn test_measured_mapping_is_clamped() {
        let strip = StripGeometry {
            item_width: 850.0,
            gap: 16.0,
            item_count: 3,
        };
        assert_eq!(strip.slide_index(0.0), 0);
        assert_eq!(strip.slide_index(866.0), 1);
        assert_eq!(strip.slide_index(5000.0), 2);
        assert_eq!(strip.slide_index(-200.0), 0);
    }

    #[test]
    fn test_empty_strip() {
        let strip = StripGeometry {
            item_width: 0.0,
            gap: 0.0,
            item_count: 0,
        };
        assert_eq!(strip.slide_index(400.0), 0);
        assert_eq!(strip.progress(0), 0.0);
    }

    #[test]
    fn test_from_rects() {
        let rects = [
            Rect::from_min_size(pos2(0.0, 0.0), vec2(280.0, 300.0)),
            Rect::from_min_size(pos2(296.0, 0.0), vec2(280.0, 450.0)),
            Rect::from_min_size(pos2(592.0, 0.0), vec2(280.0, 250.0)),
        ];
        let strip = StripGeometry::from_rects(&rects).unwrap();
        assert_eq!(strip.item_width, 280.0);
        assert_eq!(strip.gap, 16.0);
        assert_eq!(strip.item_count, 3);
        assert_eq!(strip.slide_index(300.0), 1);
        assert!((strip.progress(1) - 2.0 / 3.0).abs() < 0.0001);
        assert!(StripGeometry::from_rects(&[]).is_none());
    }
}
