// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Colours, strokes and fonts.

use egui::{Color32, FontData, FontDefinitions, FontFamily, Stroke};
use std::path::{Path, PathBuf};

pub const INK: Color32 = Color32::BLACK;
pub const PAPER: Color32 = Color32::WHITE;
pub const ZINC_200: Color32 = Color32::from_rgb(228, 228, 231);
pub const ZINC_500: Color32 = Color32::from_rgb(113, 113, 122);
pub const ZINC_700: Color32 = Color32::from_rgb(63, 63, 70);
pub const ZINC_800: Color32 = Color32::from_rgb(39, 39, 42);
pub const BACKDROP: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 200);

pub const BORDER: f32 = 4.0;
pub const GAP: f32 = 32.0;
pub const CARD_PADDING: f32 = 24.0;
/// Offset of the hard drop shadow on hovered cards.
pub const SHADOW_OFFSET: f32 = 8.0;

pub fn border() -> Stroke {
    Stroke::new(BORDER, INK)
}

pub fn rgb([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

/// Text colour that reads on `background`.
pub fn text_on(dark_text: bool) -> Color32 {
    if dark_text {
        INK
    } else {
        PAPER
    }
}

const HANGUL_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
    "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
    "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    "C:\\Windows\\Fonts\\malgun.ttf",
];

/// Add a Hangul-capable fallback font so Korean copy renders.
///
/// `configured` wins over the well-known system locations. Without any
/// font, Korean text falls back to egui's replacement glyphs.
pub fn install_fonts(ctx: &egui::Context, configured: Option<&Path>) {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(HANGUL_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        match std::fs::read(&path) {
            Ok(bytes) => {
                let mut fonts = FontDefinitions::default();
                fonts
                    .font_data
                    .insert("hangul".to_owned(), FontData::from_owned(bytes));
                for family in [FontFamily::Proportional, FontFamily::Monospace] {
                    if let Some(list) = fonts.families.get_mut(&family) {
                        list.push("hangul".to_owned());
                    }
                }
                ctx.set_fonts(fonts);
                log::info!("Using Hangul font {}", path.display());
                return;
            }
            Err(e) => log::debug!("Font {} unavailable: {}", path.display(), e),
        }
    }
    log::warn!("No Hangul font found; Korean text will not render correctly");
}

/// Light, square-cornered visuals.
pub fn apply_style(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals::light());
    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.visuals.window_rounding = egui::Rounding::ZERO;
        style.visuals.panel_fill = PAPER;
        style.visuals.widgets.inactive.rounding = egui::Rounding::ZERO;
        style.visuals.widgets.hovered.rounding = egui::Rounding::ZERO;
        style.visuals.widgets.active.rounding = egui::Rounding::ZERO;
    });
}
