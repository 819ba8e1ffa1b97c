// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Root view and egui App implementation.
//!
//! `FolioApp` owns the catalog, the state store and the per-frame
//! services (textures, reveal tracking, hover playback) and composes the
//! page: nav, marquee, project grid, arsenal, lab log, footer, and the two
//! modals on top.

use crate::config::AppConfig;
use crate::content;
use crate::i18n::t;
use crate::io::serialization;
use crate::models::catalog::Catalog;
use crate::state::modal::{HistoryStack, OverlayMarker};
use crate::state::playback::HoverPlayback;
use crate::state::reveal::{FrameVisibility, RevealKey, RevealTracker};
use crate::state::store::Store;
use crate::state::{Action, AppState};
use crate::ui::nav::{NavAction, Section};
use crate::ui::textures::TextureCache;
use crate::ui::{arsenal, footer, grid, lab, marquee, modal, nav, theme, ViewCtx};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver};

/// Every element the reveal tracker should watch for the current layout.
pub fn reveal_keys(catalog: &Catalog, lab_expanded: bool, preview: usize) -> Vec<RevealKey> {
    let lab_count = if lab_expanded {
        catalog.lab.len()
    } else {
        preview.min(catalog.lab.len())
    };
    catalog
        .projects
        .iter()
        .map(|p| RevealKey::Project(p.id))
        .chain(catalog.lab.iter().take(lab_count).map(|item| RevealKey::Lab(item.id)))
        .chain(std::iter::once(arsenal::REVEAL_KEY))
        .collect()
}

/// Whether this frame carries a back navigation request.
fn back_requested(input: &egui::InputState) -> bool {
    input.pointer.button_pressed(egui::PointerButton::Extra1)
        || (input.modifiers.alt && input.key_pressed(egui::Key::ArrowLeft))
        || input.key_pressed(egui::Key::Escape)
}

pub struct FolioApp {
    config: AppConfig,
    catalog: Catalog,
    store: Store<HistoryStack>,
    textures: TextureCache,
    reveal: RevealTracker,
    hover: HoverPlayback,

    /// Rescan generation the reveal tracker last observed.
    observed_generation: Option<u64>,

    /// Section the nav asked to scroll to.
    scroll_target: Option<Section>,

    /// Receiver for background catalog loading
    catalog_loader: Option<Receiver<Result<Catalog, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl FolioApp {
    pub fn new(config: AppConfig) -> Self {
        let store = Store::new(AppState::new(config.language), HistoryStack::new());
        let mut app = Self {
            catalog: content::builtin(),
            store,
            textures: TextureCache::new(config.asset_root.clone()),
            reveal: RevealTracker::new(config.reveal()),
            hover: HoverPlayback::default(),
            observed_generation: None,
            scroll_target: None,
            catalog_loader: None,
            loading_message: None,
            config,
        };
        if let Some(path) = app.config.catalog.clone() {
            app.load_catalog(path);
        }
        app
    }

    /// Load a catalog file on a background thread.
    fn load_catalog(&mut self, path: PathBuf) {
        let (sender, receiver) = channel();
        self.catalog_loader = Some(receiver);
        self.loading_message = Some(format!("Loading {}...", path.display()));

        std::thread::spawn(move || {
            let result = serialization::import(&path).map_err(|e| format!("{:#}", e));
            if let Ok(catalog) = &result {
                log::info!(
                    "Imported {} projects and {} lab items from {}",
                    catalog.projects.len(),
                    catalog.lab.len(),
                    path.display()
                );
            }
            let _ = sender.send(result);
        });
    }

    fn export_catalog(&self, path: PathBuf) {
        match serialization::export(&self.catalog, &path) {
            Ok(()) => log::info!("Exported catalog to {}", path.display()),
            Err(e) => log::error!("Failed to export catalog: {:#}", e),
        }
    }

    /// Swap in a new catalog and start over with reveals and textures.
    fn replace_catalog(&mut self, catalog: Catalog) {
        if let Some(id) = self.store.state().selected_project {
            if catalog.project(id).is_none() {
                self.store.dispatch(Action::RequestClose(OverlayMarker::Project));
            }
        }
        self.catalog = catalog;
        self.textures.clear();
        self.reveal = RevealTracker::new(self.config.reveal());
        self.observed_generation = None;
    }

    fn poll_catalog(&mut self) {
        let Some(receiver) = &self.catalog_loader else {
            return;
        };
        let Ok(result) = receiver.try_recv() else {
            return;
        };
        self.catalog_loader = None;
        self.loading_message = None;
        match result {
            Ok(catalog) => self.replace_catalog(catalog),
            Err(e) => log::error!("Failed to load catalog: {}", e),
        }
    }

    /// Re-register reveal targets after mount and whenever a rescan was
    /// requested.
    fn sync_reveal(&mut self) {
        let generation = self.store.reveal_generation();
        if self.observed_generation == Some(generation) {
            return;
        }
        let keys = reveal_keys(
            &self.catalog,
            self.store.state().lab_expanded,
            self.config.lab_preview_count,
        );
        self.reveal.observe(keys);
        self.observed_generation = Some(generation);
    }

    fn menu_bar(&mut self, ctx: &egui::Context) {
        let lang = self.store.state().lang;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button(t("menu.file", lang), |ui| {
                    if ui.button(t("menu.open_catalog", lang)).clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Catalog", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.load_catalog(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button(t("menu.reset_catalog", lang)).clicked() {
                        self.replace_catalog(content::builtin());
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(t("menu.export_yaml", lang)).clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("YAML", &["yaml", "yml"])
                            .set_file_name("catalog.yaml")
                            .save_file()
                        {
                            self.export_catalog(path);
                        }
                        ui.close_menu();
                    }
                    if ui.button(t("menu.export_json", lang)).clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("JSON", &["json"])
                            .set_file_name("catalog.json")
                            .save_file()
                        {
                            self.export_catalog(path);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button(t("menu.quit", lang)).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                if let Some(message) = &self.loading_message {
                    ui.spinner();
                    ui.label(message);
                }
            });
        });
    }
}

/// Mark where a nav section starts and scroll there if requested.
fn section_anchor(ui: &mut egui::Ui, section: Section, target: &mut Option<Section>) {
    let (_, response) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 0.0), egui::Sense::hover());
    if *target == Some(section) {
        response.scroll_to_me(Some(egui::Align::TOP));
        *target = None;
    }
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_catalog();
        self.textures.poll(ctx);

        if ctx.input(back_requested) {
            if self.store.state().menu_open && !self.store.state().any_modal_open() {
                self.store.dispatch(Action::CloseMenu);
            } else {
                self.store.overlay_mut().back();
            }
        }
        self.store.pump_external();
        self.sync_reveal();

        self.menu_bar(ctx);

        let state = self.store.state().clone();
        let compact = ctx.screen_rect().width() < self.config.mobile_breakpoint;
        let dt = ctx.input(|i| i.stable_dt);
        let scroll_locked = self.store.scroll_locked();
        let mut actions: Vec<Action> = Vec::new();
        let mut visibility = FrameVisibility::new(ctx.screen_rect(), self.reveal.config().margin);

        let nav_actions = egui::TopBottomPanel::top("nav")
            .frame(egui::Frame::none().fill(theme::PAPER))
            .show(ctx, |ui| nav::show(ui, state.lang, compact, state.menu_open))
            .inner;
        for action in nav_actions {
            match action {
                NavAction::Dispatch(action) => actions.push(action),
                NavAction::ScrollTo(section) => self.scroll_target = Some(section),
            }
        }

        let mut view = ViewCtx {
            lang: state.lang,
            compact,
            textures: &mut self.textures,
            reveal: &self.reveal,
            visibility: &mut visibility,
            hover: &mut self.hover,
            dt,
        };
        let catalog = &self.catalog;
        let config = &self.config;
        let scroll_target = &mut self.scroll_target;

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(theme::PAPER))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_source("page")
                    .auto_shrink([false, false])
                    .enable_scrolling(!scroll_locked)
                    .show(ui, |ui| {
                        marquee::show(ui, &config.marquee_text, config.marquee_repeat, config.marquee_speed);

                        egui::Frame::none()
                            .inner_margin(egui::Margin::same(if compact { 16.0 } else { 48.0 }))
                            .show(ui, |ui| {
                                section_anchor(ui, Section::Works, scroll_target);
                                if let Some(id) = grid::show(ui, &mut view, &catalog.projects) {
                                    actions.push(Action::OpenProject(id));
                                }

                                ui.add_space(64.0);
                                arsenal::show(ui, &mut view, &catalog.arsenal());

                                ui.add_space(64.0);
                                section_anchor(ui, Section::Labs, scroll_target);
                                if let Some(action) = lab::show(
                                    ui,
                                    &mut view,
                                    &catalog.lab,
                                    state.lab_expanded,
                                    config.lab_preview_count,
                                    state.current_slide,
                                ) {
                                    actions.push(action);
                                }
                            });

                        footer::show(ui, state.lang);
                    });
            });

        if let Some(id) = state.selected_project {
            match catalog.project(id) {
                Some(record) => {
                    if let Some(action) = modal::show_project(ctx, &mut view, record, state.embed_loading) {
                        actions.push(action);
                    }
                }
                None => actions.push(Action::RequestClose(OverlayMarker::Project)),
            }
        }
        if state.about_open {
            if let Some(action) = modal::show_about(ctx, state.lang, &catalog.about) {
                actions.push(action);
            }
        }

        for action in actions {
            self.store.dispatch(action);
        }

        let revealed = self.reveal.pump(&mut visibility);
        if revealed > 0 {
            log::debug!("revealed {} elements", revealed);
        }

        if self.loading_message.is_some() || self.textures.is_loading() || self.hover.any_playing() || revealed > 0 {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_keys_follow_lab_expansion() {
        let catalog = content::builtin();
        let preview = reveal_keys(&catalog, false, 6);
        let archive = reveal_keys(&catalog, true, 6);

        let labs = |keys: &[RevealKey]| keys.iter().filter(|k| matches!(k, RevealKey::Lab(_))).count();
        assert_eq!(labs(&preview), 6.min(catalog.lab.len()));
        assert_eq!(labs(&archive), catalog.lab.len());
        assert!(preview.contains(&RevealKey::Project(catalog.projects[0].id)));
        assert!(archive.contains(&arsenal::REVEAL_KEY));
    }

    #[test]
    fn test_reveal_keys_short_lab() {
        let mut catalog = content::builtin();
        catalog.lab.truncate(2);
        let keys = reveal_keys(&catalog, false, 6);
        assert_eq!(keys.len(), catalog.projects.len() + 2 + 1);
    }

    #[test]
    fn test_new_app_uses_builtin_catalog() {
        let app = FolioApp::new(AppConfig::default());
        assert_eq!(app.catalog, content::builtin());
        assert!(app.catalog_loader.is_none());
        assert_eq!(app.store.state().lang, AppConfig::default().language);
    }
}
