// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Top navigation bar.

use super::theme;
use crate::i18n::t;
use crate::models::localized::Lang;
use crate::state::Action;
use egui::RichText;

pub const BRAND: &str = "JD.26";

/// Page sections the nav can jump to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Works,
    Labs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Dispatch(Action),
    ScrollTo(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Works,
    Labs,
    About,
}

const LINKS: [Link; 3] = [Link::Works, Link::Labs, Link::About];

impl Link {
    fn key(self) -> &'static str {
        match self {
            Link::Works => "nav.works",
            Link::Labs => "nav.labs",
            Link::About => "nav.about",
        }
    }

    fn action(self) -> NavAction {
        match self {
            Link::Works => NavAction::ScrollTo(Section::Works),
            Link::Labs => NavAction::ScrollTo(Section::Labs),
            Link::About => NavAction::Dispatch(Action::OpenAbout),
        }
    }
}

/// Actions for a link activated from the collapsed menu. The menu closes
/// before the link takes effect.
pub fn menu_link_actions(action: NavAction) -> [NavAction; 2] {
    [NavAction::Dispatch(Action::CloseMenu), action]
}

fn link_button(ui: &mut egui::Ui, text: &str, size: f32) -> bool {
    ui.add(egui::Button::new(RichText::new(text).size(size).strong().color(theme::INK)).frame(false))
        .clicked()
}

/// Draw the bar. `compact` collapses the links into a menu toggle.
pub fn show(ui: &mut egui::Ui, lang: Lang, compact: bool, menu_open: bool) -> Vec<NavAction> {
    let mut actions = Vec::new();

    egui::Frame::none()
        .fill(theme::PAPER)
        .inner_margin(egui::Margin::symmetric(24.0, 16.0))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(BRAND).size(28.0).strong().color(theme::INK));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let toggle = egui::Button::new(RichText::new(lang.toggled().label()).strong())
                        .stroke(egui::Stroke::new(2.0, theme::INK))
                        .fill(theme::PAPER);
                    if ui.add(toggle).clicked() {
                        actions.push(NavAction::Dispatch(Action::ToggleLang));
                    }
                    ui.add_space(16.0);

                    if compact {
                        let key = if menu_open { "nav.close" } else { "nav.menu" };
                        if link_button(ui, t(key, lang), 16.0) {
                            actions.push(NavAction::Dispatch(Action::ToggleMenu));
                        }
                    } else {
                        for link in LINKS.iter().rev() {
                            if link_button(ui, t(link.key(), lang), 16.0) {
                                actions.push(link.action());
                            }
                            ui.add_space(8.0);
                        }
                    }
                });
            });

            if compact && menu_open {
                ui.add_space(16.0);
                for link in LINKS {
                    if link_button(ui, t(link.key(), lang), 32.0) {
                        actions.extend(menu_link_actions(link.action()));
                    }
                }
            }
        });

    let (line, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), theme::BORDER), egui::Sense::hover());
    ui.painter().rect_filled(line, 0.0, theme::INK);
    actions
}
