// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project detail and about overlays.
//!
//! Both overlays cover the window with a dimmed backdrop. Clicking the
//! backdrop or the close button asks to close; whether that goes through
//! history is decided by the state reducer, not here.

use super::gallery::{self, BlockView};
use super::{paint_media, theme, ViewCtx};
use crate::i18n::t;
use crate::models::about::AboutData;
use crate::models::localized::Lang;
use crate::models::project::{ModalVisual, ProjectRecord};
use crate::state::modal::OverlayMarker;
use crate::state::Action;
use egui::{vec2, Align2, Color32, FontId, RichText, Sense};

/// Permissions granted to the interactive embed.
pub const EMBED_PERMISSIONS: &[&str] = &[
    "autoplay",
    "clipboard-write",
    "encrypted-media",
    "gyroscope",
    "picture-in-picture",
    "fullscreen",
];

const PANEL_MAX_WIDTH: f32 = 1100.0;
const VISUAL_HEIGHT: f32 = 420.0;

/// A project resolved for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectView<'a> {
    pub id: u32,
    pub title: &'a str,
    pub category: &'a str,
    pub description: &'a str,
    pub tags: &'a [String],
    pub link: Option<&'a str>,
    pub github: Option<&'a str>,
    pub visual: Option<ModalVisual<'a>>,
    pub blocks: Vec<BlockView<'a>>,
}

impl<'a> ProjectView<'a> {
    pub fn new(record: &'a ProjectRecord, lang: Lang) -> Self {
        Self {
            id: record.id,
            title: &record.title,
            category: &record.category,
            description: record.description.get(lang),
            tags: &record.tags,
            link: record.has_link().then_some(record.link.as_str()),
            github: record.github.as_deref(),
            visual: record.modal_visual(),
            blocks: record
                .gallery
                .iter()
                .map(|block| BlockView::resolve(block, lang))
                .collect(),
        }
    }
}

/// Paint the backdrop and lay out the centred panel. Returns the action
/// produced by `add` or a close request when the backdrop was clicked.
fn overlay(
    ctx: &egui::Context,
    id: &str,
    marker: OverlayMarker,
    add: impl FnOnce(&mut egui::Ui) -> Option<Action>,
) -> Option<Action> {
    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new(id))
        .order(egui::Order::Foreground)
        .fixed_pos(screen.min)
        .show(ctx, |ui| {
            let backdrop = ui.allocate_rect(screen, Sense::click());
            ui.painter().rect_filled(screen, 0.0, theme::BACKDROP);

            let width = (screen.width() - 32.0).min(PANEL_MAX_WIDTH);
            let panel = egui::Rect::from_center_size(
                screen.center(),
                vec2(width, screen.height() - 48.0),
            );

            let mut action = ui
                .allocate_ui_at_rect(panel, |ui| {
                    egui::Frame::none()
                        .fill(theme::PAPER)
                        .stroke(theme::border())
                        .inner_margin(theme::CARD_PADDING)
                        .show(ui, |ui| {
                            ui.set_min_size(panel.size() - vec2(2.0 * theme::CARD_PADDING, 2.0 * theme::CARD_PADDING));
                            egui::ScrollArea::vertical()
                                .id_source((id, "scroll"))
                                .auto_shrink([false, false])
                                .show(ui, add)
                                .inner
                        })
                        .inner
                })
                .inner;

            let outside = ctx
                .pointer_interact_pos()
                .is_some_and(|pos| !panel.contains(pos));
            if action.is_none() && backdrop.clicked() && outside {
                action = Some(Action::RequestClose(marker));
            }
            action
        })
        .inner
}

fn close_button(ui: &mut egui::Ui, lang: Lang, marker: OverlayMarker) -> Option<Action> {
    let button = egui::Button::new(RichText::new(t("modal.close", lang)).strong().color(theme::PAPER))
        .fill(theme::INK);
    ui.add(button)
        .clicked()
        .then_some(Action::RequestClose(marker))
}

/// Draw the project detail overlay.
pub fn show_project(
    ctx: &egui::Context,
    view: &mut ViewCtx<'_>,
    record: &ProjectRecord,
    embed_loading: bool,
) -> Option<Action> {
    let project = ProjectView::new(record, view.lang);
    let lang = view.lang;

    overlay(ctx, "project_modal", OverlayMarker::Project, |ui| {
        let mut action = None;

        ui.horizontal(|ui| {
            ui.label(RichText::new(project.category).size(13.0).color(theme::ZINC_500));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                action = close_button(ui, lang, OverlayMarker::Project);
            });
        });
        ui.label(RichText::new(project.title).size(48.0).strong().color(theme::INK));
        ui.add_space(16.0);

        if let Some(visual) = project.visual {
            let (rect, _) = ui.allocate_exact_size(vec2(ui.available_width(), VISUAL_HEIGHT), Sense::hover());
            match visual {
                ModalVisual::Embed(url) => {
                    let loaded = paint_embed(ui, view, record, url, rect, embed_loading, lang);
                    if embed_loading && loaded {
                        action = action.or(Some(Action::EmbedLoaded));
                    }
                }
                ModalVisual::Video(_) => {
                    paint_media(
                        ui,
                        view.textures,
                        record.still_image(),
                        rect,
                        record.visual_fit,
                        theme::ZINC_800,
                        Color32::WHITE,
                    );
                    ui.painter().text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        "▶",
                        FontId::proportional(48.0),
                        Color32::WHITE,
                    );
                }
                ModalVisual::Image(src) => paint_media(
                    ui,
                    view.textures,
                    Some(src),
                    rect,
                    record.visual_fit,
                    theme::ZINC_200,
                    Color32::WHITE,
                ),
            }
            ui.painter().rect_stroke(rect, 0.0, theme::border());
            ui.add_space(24.0);
        }

        ui.label(RichText::new(project.description).size(17.0).color(theme::INK));
        ui.add_space(16.0);

        ui.horizontal_wrapped(|ui| {
            for tag in project.tags {
                egui::Frame::none()
                    .stroke(egui::Stroke::new(2.0, theme::INK))
                    .inner_margin(vec2(10.0, 4.0))
                    .show(ui, |ui| {
                        ui.label(RichText::new(tag).size(12.0).strong().color(theme::INK));
                    });
            }
        });
        ui.add_space(16.0);

        ui.horizontal(|ui| {
            if let Some(link) = project.link {
                if ui.button(RichText::new(format!("{} ↗", t("modal.visit", lang))).strong()).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(link));
                }
            }
            if let Some(github) = project.github {
                if ui.button(RichText::new(t("modal.github", lang)).strong()).clicked() {
                    ui.ctx().open_url(egui::OpenUrl::new_tab(github));
                }
            }
        });

        if !project.blocks.is_empty() {
            ui.add_space(32.0);
            for block in &project.blocks {
                gallery::show_block(ui, view.textures, *block);
                ui.add_space(24.0);
            }
        }
        action
    })
}

/// Draw the embed surface. Returns true once its preview has settled.
fn paint_embed(
    ui: &mut egui::Ui,
    view: &mut ViewCtx<'_>,
    record: &ProjectRecord,
    url: &str,
    rect: egui::Rect,
    loading: bool,
    lang: Lang,
) -> bool {
    let still = record.still_image();
    paint_media(ui, view.textures, still, rect, record.visual_fit, theme::ZINC_200, Color32::WHITE);
    let settled = still.map_or(true, |src| view.textures.is_settled(src));

    ui.allocate_ui_at_rect(rect.shrink(24.0), |ui| {
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.add_space(rect.height() / 2.0 - 70.0);
            if loading {
                ui.spinner();
                ui.label(RichText::new(t("modal.loading", lang)).strong().color(theme::INK));
                return;
            }
            ui.label(RichText::new(url).monospace().color(theme::INK));
            let open = egui::Button::new(RichText::new(t("modal.open_embed", lang)).strong().color(theme::PAPER))
                .fill(theme::INK);
            if ui.add(open).clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(url));
            }
            ui.label(
                RichText::new(format!("{}: {}", t("modal.permissions", lang), EMBED_PERMISSIONS.join("; ")))
                    .size(11.0)
                    .color(theme::ZINC_500),
            );
        });
    });
    settled
}

/// Draw the about overlay.
pub fn show_about(ctx: &egui::Context, lang: Lang, about: &AboutData) -> Option<Action> {
    overlay(ctx, "about_modal", OverlayMarker::About, |ui| {
        let mut action = None;
        ui.horizontal(|ui| {
            ui.label(RichText::new(t("nav.about", lang)).size(13.0).color(theme::ZINC_500));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                action = close_button(ui, lang, OverlayMarker::About);
            });
        });
        ui.label(RichText::new(about.slogan.get(lang)).size(56.0).strong().color(theme::INK));
        ui.add_space(24.0);

        for paragraph in about.paragraphs.get(lang) {
            ui.label(RichText::new(paragraph).size(17.0).color(theme::INK));
            ui.add_space(8.0);
        }

        if !about.timeline.is_empty() {
            ui.add_space(24.0);
            ui.label(RichText::new(t("about.timeline", lang)).size(24.0).strong());
            ui.separator();
            for entry in &about.timeline {
                ui.horizontal_top(|ui| {
                    ui.add_sized(
                        vec2(140.0, 20.0),
                        egui::Label::new(RichText::new(&entry.period).monospace().strong()),
                    );
                    ui.vertical(|ui| {
                        ui.label(RichText::new(entry.title.get(lang)).strong());
                        let detail = entry.detail.get(lang);
                        if !detail.is_empty() {
                            ui.label(RichText::new(detail).color(theme::ZINC_700));
                        }
                    });
                });
                ui.add_space(8.0);
            }
        }

        if !about.skills.is_empty() {
            ui.add_space(24.0);
            ui.label(RichText::new(t("about.skills", lang)).size(24.0).strong());
            ui.separator();
            for group in &about.skills {
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(&group.category).monospace().strong());
                    for item in &group.items {
                        ui.label(RichText::new(item).color(theme::ZINC_700));
                    }
                });
            }
        }
        action
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_language_toggle_changes_only_localized_fields() {
        let catalog = content::builtin();
        for record in &catalog.projects {
            let en = ProjectView::new(record, Lang::En);
            let ko = ProjectView::new(record, Lang::Ko);

            assert_eq!(en.id, ko.id);
            assert_eq!(en.title, ko.title);
            assert_eq!(en.category, ko.category);
            assert_eq!(en.tags, ko.tags);
            assert_eq!(en.link, ko.link);
            assert_eq!(en.visual, ko.visual);
            assert_eq!(en.blocks.len(), ko.blocks.len());

            assert_eq!(ko.description, record.description.get(Lang::Ko));
            for (a, b) in en.blocks.iter().zip(&ko.blocks) {
                match (a, b) {
                    (BlockView::Image { src: x }, BlockView::Image { src: y })
                    | (BlockView::Video { src: x }, BlockView::Video { src: y }) => assert_eq!(x, y),
                    (BlockView::Text { .. }, BlockView::Text { .. })
                    | (BlockView::Code { .. }, BlockView::Code { .. }) => {}
                    _ => panic!("block kind changed with language"),
                }
            }
        }
    }

    #[test]
    fn test_korean_description_differs() {
        let catalog = content::builtin();
        let record = &catalog.projects[0];
        assert_ne!(
            ProjectView::new(record, Lang::En).description,
            ProjectView::new(record, Lang::Ko).description
        );
    }

    #[test]
    fn test_placeholder_link_is_hidden() {
        let mut record = ProjectRecord::new(1, "A", "B");
        record.link = "#".into();
        assert_eq!(ProjectView::new(&record, Lang::En).link, None);
    }

    #[test]
    fn test_embed_permissions() {
        assert_eq!(EMBED_PERMISSIONS.len(), 6);
        assert!(EMBED_PERMISSIONS.contains(&"picture-in-picture"));
    }
}
