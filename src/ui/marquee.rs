// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Decorative scrolling ticker.

use super::theme;
use egui::{Align2, FontId, Sense};

const BAND_HEIGHT: f32 = 56.0;

/// Leftward offset of the ticker after `time` seconds. Wraps every
/// `cycle` points so the repeated text looks endless.
pub fn offset(time: f64, speed: f32, cycle: f32) -> f32 {
    if cycle <= 0.0 {
        return 0.0;
    }
    ((time * speed as f64) % cycle as f64) as f32
}

/// Draw the ticker band across the full width.
pub fn show(ui: &mut egui::Ui, text: &str, repeat: usize, speed: f32) {
    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), BAND_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, theme::INK);

    let font = FontId::proportional(28.0);
    let unit = format!("{} ", text);
    let galley = painter.layout_no_wrap(unit.clone(), font.clone(), theme::PAPER);
    let cycle = galley.size().x;
    if cycle <= 0.0 {
        return;
    }

    // Enough copies to cover the band plus the wrap distance.
    let copies = repeat.max((rect.width() / cycle).ceil() as usize + 1);
    let line = unit.repeat(copies);
    let start = rect.left() - offset(ui.input(|i| i.time), speed, cycle);
    painter.text(
        egui::pos2(start, rect.center().y),
        Align2::LEFT_CENTER,
        line,
        font,
        theme::PAPER,
    );
    ui.ctx().request_repaint();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_wraps() {
        assert_eq!(offset(0.0, 50.0, 200.0), 0.0);
        assert_eq!(offset(2.0, 50.0, 200.0), 100.0);
        assert_eq!(offset(4.0, 50.0, 200.0), 0.0);
        assert_eq!(offset(5.0, 50.0, 200.0), 50.0);
    }

    #[test]
    fn test_zero_cycle() {
        assert_eq!(offset(3.0, 50.0, 0.0), 0.0);
    }
}
