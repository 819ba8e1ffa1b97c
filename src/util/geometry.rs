// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module provides media fitting (cover/contain) and the visibility
//! ratio used by the reveal animation.

use crate::models::project::VisualFit;
use egui::{pos2, vec2, Rect, Vec2};

/// Where to draw an image of `image_size` inside `frame`.
///
/// Returns the destination rect and the UV rect. `Contain` letterboxes the
/// whole image; `Cover` fills the frame and crops the overflow through the
/// UV coordinates.
pub fn fit_image(image_size: Vec2, frame: Rect, fit: VisualFit) -> (Rect, Rect) {
    let full_uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
    if image_size.x <= 0.0 || image_size.y <= 0.0 || frame.width() <= 0.0 || frame.height() <= 0.0 {
        return (frame, full_uv);
    }

    let img_aspect = image_size.x / image_size.y;
    let frame_aspect = frame.width() / frame.height();

    match fit {
        VisualFit::Contain => {
            let size = if img_aspect > frame_aspect {
                // Image is wider - fit to width
                vec2(frame.width(), frame.width() / img_aspect)
            } else {
                // Image is taller - fit to height
                vec2(frame.height() * img_aspect, frame.height())
            };
            (Rect::from_center_size(frame.center(), size), full_uv)
        }
        VisualFit::Cover => {
            let uv = if img_aspect > frame_aspect {
                // Crop left and right
                let visible = frame_aspect / img_aspect;
                let margin = (1.0 - visible) / 2.0;
                Rect::from_min_max(pos2(margin, 0.0), pos2(1.0 - margin, 1.0))
            } else {
                // Crop top and bottom
                let visible = img_aspect / frame_aspect;
                let margin = (1.0 - visible) / 2.0;
                Rect::from_min_max(pos2(0.0, margin), pos2(1.0, 1.0 - margin))
            };
            (frame, uv)
        }
    }
}

/// Fraction of `element` inside `root` after growing `root` by `margin` on
/// every side. Zero-area elements count as fully visible when their position
/// lies inside the grown root.
pub fn intersection_ratio(element: Rect, root: Rect, margin: f32) -> f32 {
    let root = root.expand(margin);
    let area = element.width() * element.height();
    if area <= 0.0 {
        return if root.contains(element.min) { 1.0 } else { 0.0 };
    }
    let overlap = element.intersect(root);
    if overlap.width() <= 0.0 || overlap.height() <= 0.0 {
        return 0.0;
    }
    (overlap.width() * overlap.height()) / area
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::from_min_size(pos2(x, y), vec2(w, h))
    }

    #[test]
    fn test_contain_wide_image() {
        let frame = rect(0.0, 0.0, 400.0, 400.0);
        let (dest, uv) = fit_image(vec2(1920.0, 1080.0), frame, VisualFit::Contain);
        assert!((dest.width() - 400.0).abs() < 0.001);
        assert!((dest.height() - 225.0).abs() < 0.001);
        assert_eq!(dest.center(), frame.center());
        assert_eq!(uv, Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)));
    }

    #[test]
    fn test_cover_crops_sides() {
        let frame = rect(0.0, 0.0, 400.0, 400.0);
        let (dest, uv) = fit_image(vec2(800.0, 400.0), frame, VisualFit::Cover);
        assert_eq!(dest, frame);
        assert!((uv.min.x - 0.25).abs() < 0.001);
        assert!((uv.max.x - 0.75).abs() < 0.001);
        assert_eq!(uv.min.y, 0.0);
    }

    #[test]
    fn test_degenerate_image_uses_frame() {
        let frame = rect(10.0, 10.0, 100.0, 50.0);
        let (dest, _) = fit_image(vec2(0.0, 0.0), frame, VisualFit::Cover);
        assert_eq!(dest, frame);
    }

    #[test]
    fn test_intersection_ratio_half_visible() {
        let root = rect(0.0, 0.0, 1000.0, 800.0);
        let element = rect(0.0, 700.0, 100.0, 200.0);
        assert!((intersection_ratio(element, root, 0.0) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_margin_pre_triggers() {
        let root = rect(0.0, 0.0, 1000.0, 800.0);
        // Starts 30px below the viewport.
        let element = rect(0.0, 830.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(element, root, 0.0), 0.0);
        assert!((intersection_ratio(element, root, 50.0) - 0.2).abs() < 0.001);
    }

    #[test]
    fn test_fully_outside() {
        let root = rect(0.0, 0.0, 1000.0, 800.0);
        let element = rect(0.0, 2000.0, 100.0, 100.0);
        assert_eq!(intersection_ratio(element, root, 50.0), 0.0);
    }
}
