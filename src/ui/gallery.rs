// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Long-form project gallery shown inside the detail modal.
//!
//! Blocks are resolved to a [`BlockView`] first; drawing then branches on
//! the view only, so each block renders through exactly one path.

use super::{paint_media, theme};
use crate::models::localized::Lang;
use crate::models::project::{GalleryBlock, VisualFit};
use crate::ui::textures::TextureCache;
use egui::{vec2, Color32, RichText};

/// Height of image and video blocks.
const MEDIA_HEIGHT: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockView<'a> {
    Text { heading: Option<&'a str>, body: &'a str },
    Image { src: &'a str },
    Video { src: &'a str },
    Code { code: &'a str, lang: Option<&'a str> },
}

impl<'a> BlockView<'a> {
    pub fn resolve(block: &'a GalleryBlock, lang: Lang) -> Self {
        match block {
            GalleryBlock::Text { content, .. } => {
                let text = content.get(lang);
                // A first line followed by more text is treated as a heading.
                match text.split_once('\n') {
                    Some((heading, body)) => BlockView::Text {
                        heading: Some(heading),
                        body,
                    },
                    None => BlockView::Text {
                        heading: None,
                        body: text,
                    },
                }
            }
            GalleryBlock::Image { src } => BlockView::Image { src: src.as_str() },
            GalleryBlock::Video { src } => BlockView::Video { src: src.as_str() },
            GalleryBlock::Code { content, lang: code_lang } => BlockView::Code {
                code: content.get(lang),
                lang: code_lang.as_deref(),
            },
        }
    }
}

/// Draw one resolved block at full width.
pub fn show_block(ui: &mut egui::Ui, textures: &mut TextureCache, block: BlockView<'_>) {
    match block {
        BlockView::Text { heading, body } => {
            if let Some(heading) = heading {
                ui.label(RichText::new(heading).size(20.0).strong().color(theme::INK));
                ui.add_space(4.0);
            }
            ui.label(RichText::new(body).size(15.0).color(theme::ZINC_700));
        }
        BlockView::Image { src } => {
            let (rect, _) = ui.allocate_exact_size(
                vec2(ui.available_width(), MEDIA_HEIGHT),
                egui::Sense::hover(),
            );
            paint_media(
                ui,
                textures,
                Some(src),
                rect,
                VisualFit::Contain,
                theme::ZINC_200,
                Color32::WHITE,
            );
        }
        BlockView::Video { src } => {
            let (rect, _) = ui.allocate_exact_size(
                vec2(ui.available_width(), MEDIA_HEIGHT),
                egui::Sense::hover(),
            );
            ui.painter().rect_filled(rect, 0.0, theme::ZINC_800);
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                format!("▶ {}", src),
                egui::FontId::monospace(14.0),
                Color32::WHITE,
            );
        }
        BlockView::Code { code, lang } => {
            egui::Frame::none()
                .fill(theme::ZINC_800)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    if let Some(lang) = lang {
                        ui.label(RichText::new(lang).monospace().size(11.0).color(theme::ZINC_500));
                    }
                    ui.label(RichText::new(code).monospace().color(Color32::WHITE));
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::localized::LocalizedString;

    fn kind(view: &BlockView<'_>) -> &'static str {
        match view {
            BlockView::Text { .. } => "text",
            BlockView::Image { .. } => "image",
            BlockView::Video { .. } => "video",
            BlockView::Code { .. } => "code",
        }
    }

    #[test]
    fn test_each_block_selects_its_own_branch() {
        let blocks = [
            (
                GalleryBlock::Text {
                    content: LocalizedString::plain("body"),
                    lang: None,
                },
                "text",
            ),
            (GalleryBlock::Image { src: "/a.webp".into() }, "image"),
            (GalleryBlock::Video { src: "/a.mp4".into() }, "video"),
            (
                GalleryBlock::Code {
                    content: LocalizedString::plain("x = 1"),
                    lang: Some("py".into()),
                },
                "code",
            ),
        ];
        for (block, expected) in &blocks {
            assert_eq!(kind(&BlockView::resolve(block, Lang::En)), *expected);
        }
    }

    #[test]
    fn test_text_heading_split() {
        let block = GalleryBlock::Text {
            content: LocalizedString::both("01. STRUCTURE\nBase geometry.", "01. 구조\n기본 형태."),
            lang: None,
        };
        assert_eq!(
            BlockView::resolve(&block, Lang::En),
            BlockView::Text {
                heading: Some("01. STRUCTURE"),
                body: "Base geometry."
            }
        );
        assert_eq!(
            BlockView::resolve(&block, Lang::Ko),
            BlockView::Text {
                heading: Some("01. 구조"),
                body: "기본 형태."
            }
        );
    }

    #[test]
    fn test_code_keeps_language_tag() {
        let block = GalleryBlock::Code {
            content: LocalizedString::plain("fn main() {}"),
            lang: Some("rust".into()),
        };
        assert_eq!(
            BlockView::resolve(&block, Lang::Ko),
            BlockView::Code {
                code: "fn main() {}",
                lang: Some("rust")
            }
        );
    }
}
