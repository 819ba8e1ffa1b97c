// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project cards for the bento grid.
//!
//! Featured projects get a large card with an always-on media panel and an
//! oversized title. Every other project is a hover tile: its media stays
//! dimmed until the pointer enters, which also starts playback.

use super::{paint_media, theme, ViewCtx};
use crate::models::project::{ModalVisual, ProjectRecord, VisualFit};
use crate::state::playback::Playback;
use crate::util::layout::LayoutHints;
use egui::{vec2, Align2, Color32, FontId, Rect, Sense};

/// Default media height of a hover tile.
const TILE_MEDIA_HEIGHT: f32 = 120.0;
/// Media height of the featured card.
const FEATURED_MEDIA_HEIGHT: f32 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    Featured,
    Tile,
}

impl CardLayout {
    pub fn for_record(record: &ProjectRecord) -> Self {
        if record.is_featured {
            CardLayout::Featured
        } else {
            CardLayout::Tile
        }
    }
}

/// Draw `record` filling the available space. Returns true when clicked.
pub fn show(ui: &mut egui::Ui, view: &mut ViewCtx<'_>, record: &ProjectRecord) -> bool {
    let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
    let hovered = ui.rect_contains_pointer(rect);
    let playback = view.hover.update(record.id, hovered, view.dt);
    let hints = LayoutHints::parse(&record.layout);

    match CardLayout::for_record(record) {
        CardLayout::Featured => paint_featured(ui, view, record, &hints, rect, hovered),
        CardLayout::Tile => paint_tile(ui, view, record, &hints, rect, hovered, playback),
    }

    if hovered {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }
    response.clicked()
}

fn paint_frame(ui: &egui::Ui, rect: Rect, fill: Color32, shadow: Option<Color32>) {
    let painter = ui.painter();
    if let Some(shadow) = shadow {
        painter.rect_filled(
            rect.translate(vec2(theme::SHADOW_OFFSET, theme::SHADOW_OFFSET)),
            0.0,
            shadow,
        );
    }
    painter.rect_filled(rect, 0.0, fill);
    painter.rect_stroke(rect, 0.0, theme::border());
}

fn paint_featured(
    ui: &egui::Ui,
    view: &mut ViewCtx<'_>,
    record: &ProjectRecord,
    hints: &LayoutHints,
    rect: Rect,
    hovered: bool,
) {
    paint_frame(ui, rect, theme::rgb(hints.background), hovered.then_some(theme::INK));
    let inner = rect.shrink(theme::CARD_PADDING);
    let text = theme::text_on(hints.dark_text);

    let media_height = hints
        .media_height
        .unwrap_or(FEATURED_MEDIA_HEIGHT)
        .min(inner.height() * 0.6);
    let media = Rect::from_min_size(inner.min, vec2(inner.width(), media_height));
    let tint = if hovered {
        Color32::WHITE
    } else {
        Color32::from_gray(170)
    };
    paint_media(
        ui,
        view.textures,
        media_source(record),
        media,
        VisualFit::Cover,
        Color32::from_gray(243),
        tint,
    );
    ui.painter().rect_stroke(media, 0.0, egui::Stroke::new(2.0, theme::INK));

    let painter = ui.painter_at(rect);
    painter.text(
        inner.left_bottom(),
        Align2::LEFT_BOTTOM,
        &record.title,
        FontId::proportional(if view.compact { 32.0 } else { 44.0 }),
        text,
    );
    painter.text(
        inner.right_bottom(),
        Align2::RIGHT_BOTTOM,
        &record.category,
        FontId::proportional(13.0),
        theme::ZINC_500,
    );
}

fn paint_tile(
    ui: &egui::Ui,
    view: &mut ViewCtx<'_>,
    record: &ProjectRecord,
    hints: &LayoutHints,
    rect: Rect,
    hovered: bool,
    playback: Playback,
) {
    let (rect, fill, shadow) = if hovered {
        let fill = hints.hover_background.unwrap_or(hints.background);
        let shadow = if hints.dark_text {
            theme::INK
        } else {
            theme::ZINC_500
        };
        (rect.translate(vec2(-4.0, -4.0)), theme::rgb(fill), Some(shadow))
    } else {
        (rect, theme::rgb(hints.background), None)
    };
    paint_frame(ui, rect, fill, shadow);

    let inner = rect.shrink(theme::CARD_PADDING);
    let text = theme::text_on(hints.dark_text);
    let painter = ui.painter_at(rect);

    let title = painter.text(
        inner.left_top(),
        Align2::LEFT_TOP,
        &record.title,
        FontId::proportional(28.0),
        text,
    );
    painter.text(
        inner.right_top(),
        Align2::RIGHT_TOP,
        "↗",
        FontId::proportional(24.0),
        text,
    );
    let category = painter.text(
        inner.left_bottom(),
        Align2::LEFT_BOTTOM,
        &record.category,
        FontId::proportional(12.0),
        text.gamma_multiply(0.7),
    );

    let top = title.bottom() + 16.0;
    let bottom = category.top() - 16.0;
    let wanted = hints.media_height.unwrap_or(TILE_MEDIA_HEIGHT);
    let height = wanted.min((bottom - top).max(0.0));
    if height <= 0.0 {
        return;
    }
    let media = Rect::from_min_size(egui::pos2(inner.left(), top), vec2(inner.width(), height));
    let tint = if hovered {
        Color32::WHITE
    } else {
        Color32::from_white_alpha(150)
    };
    paint_media(
        ui,
        view.textures,
        media_source(record),
        media,
        VisualFit::Cover,
        theme::ZINC_800,
        tint,
    );
    ui.painter()
        .rect_stroke(media, 0.0, egui::Stroke::new(1.0, theme::ZINC_700));

    if playback.is_playing() && matches!(record.tile_media(), Some(ModalVisual::Video(_))) {
        ui.painter_at(media).text(
            media.left_top() + vec2(8.0, 6.0),
            Align2::LEFT_TOP,
            format!("▶ {:.1}s", playback.position()),
            FontId::monospace(12.0),
            Color32::WHITE,
        );
    }
}

/// Image drawn for a tile: the still for videos, the image otherwise.
fn media_source(record: &ProjectRecord) -> Option<&str> {
    match record.tile_media() {
        Some(ModalVisual::Video(_)) => record.still_image(),
        Some(ModalVisual::Image(src)) => Some(src),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_featured_records_use_large_layout() {
        for record in content::builtin().projects {
            let expected = if record.is_featured {
                CardLayout::Featured
            } else {
                CardLayout::Tile
            };
            assert_eq!(CardLayout::for_record(&record), expected, "project {}", record.id);
        }
    }

    #[test]
    fn test_video_tile_uses_still() {
        let mut record = ProjectRecord::new(9, "X", "Y");
        record.video = Some("/clip.mp4".into());
        assert_eq!(media_source(&record), None);
        record.poster = Some("/clip.webp".into());
        assert_eq!(media_source(&record), Some("/clip.webp"));
    }

    #[test]
    fn test_image_tile() {
        let mut record = ProjectRecord::new(9, "X", "Y");
        record.image = Some("/still.png".into());
        assert_eq!(media_source(&record), Some("/still.png"));
    }
}
