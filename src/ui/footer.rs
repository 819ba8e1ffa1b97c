// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

use super::theme;
use crate::i18n::t;
use crate::models::localized::Lang;
use egui::RichText;

const SOCIAL: &[(&str, &str)] = &[
    ("TWITTER", "https://twitter.com"),
    ("GITHUB", "https://github.com"),
];

pub fn show(ui: &mut egui::Ui, lang: Lang) {
    egui::Frame::none()
        .fill(theme::INK)
        .inner_margin(egui::Margin::symmetric(24.0, 32.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new(t("footer.rights", lang)).monospace().color(theme::PAPER));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    for (label, url) in SOCIAL.iter().rev() {
                        let link = egui::Button::new(RichText::new(*label).strong().color(theme::PAPER)).frame(false);
                        if ui.add(link).clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(*url));
                        }
                    }
                });
            });
        });
}
