// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The arsenal: every tool used across the catalog.

use super::{revealed, theme, ViewCtx};
use crate::i18n::t;
use crate::state::reveal::RevealKey;
use egui::RichText;

pub const REVEAL_KEY: RevealKey = RevealKey::Section("arsenal");

pub fn show(ui: &mut egui::Ui, view: &mut ViewCtx<'_>, tags: &[&str]) {
    if tags.is_empty() {
        return;
    }
    revealed(ui, view, REVEAL_KEY, |ui, view| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(t("section.arsenal", view.lang))
                    .size(40.0)
                    .strong()
                    .color(theme::INK),
            );
            ui.add_space(16.0);
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(12.0, 12.0);
                for tag in tags {
                    egui::Frame::none()
                        .fill(theme::PAPER)
                        .stroke(theme::border())
                        .inner_margin(egui::vec2(16.0, 8.0))
                        .show(ui, |ui| {
                            ui.label(RichText::new(*tag).size(18.0).strong().color(theme::INK));
                        });
                }
            });
        });
    });
}
