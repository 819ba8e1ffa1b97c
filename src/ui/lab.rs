// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Lab log section.
//!
//! Collapsed, the log is a horizontal strip of the newest items with a slide
//! counter. Expanded, it becomes the full archive split by year.

use super::{paint_media, revealed, theme, ViewCtx};
use crate::i18n::t;
use crate::models::lab::LabItem;
use crate::models::project::VisualFit;
use crate::state::reveal::RevealKey;
use crate::state::scroller::StripGeometry;
use crate::state::Action;
use crate::util::layout::{parse_color, parse_px_height};
use egui::{vec2, Align2, Color32, FontId, RichText, Sense};

const ITEM_WIDTH: f32 = 280.0;
const STRIP_GAP: f32 = 16.0;
const DEFAULT_HEIGHT: f32 = 300.0;
const MAX_HEIGHT: f32 = 450.0;

/// One entry of the rendered lab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabRow<'a> {
    /// Start of a year group. `None` groups undated items.
    YearDivider(Option<u16>),
    Item(&'a LabItem),
}

/// Rows to render. The preview shows the first `preview` items; the archive
/// shows everything with a divider wherever the year changes.
pub fn plan_rows(items: &[LabItem], expanded: bool, preview: usize) -> Vec<LabRow<'_>> {
    if !expanded {
        return items.iter().take(preview).map(LabRow::Item).collect();
    }
    let mut rows = Vec::with_capacity(items.len() + 4);
    let mut previous: Option<Option<u16>> = None;
    for item in items {
        let year = item.year();
        if previous != Some(year) {
            rows.push(LabRow::YearDivider(year));
            previous = Some(year);
        }
        rows.push(LabRow::Item(item));
    }
    rows
}

/// Whether the expand/collapse control is needed.
pub fn has_more(items: &[LabItem], preview: usize) -> bool {
    items.len() > preview
}

/// Draw the section.
pub fn show(
    ui: &mut egui::Ui,
    view: &mut ViewCtx<'_>,
    items: &[LabItem],
    expanded: bool,
    preview: usize,
    current_slide: usize,
) -> Option<Action> {
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(t("section.lab", view.lang))
                .size(40.0)
                .strong()
                .color(theme::INK),
        );
        if has_more(items, preview) {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let key = if expanded { "lab.show_less" } else { "lab.show_all" };
                let button = egui::Button::new(RichText::new(t(key, view.lang)).strong())
                    .stroke(theme::border())
                    .fill(theme::PAPER);
                if ui.add(button).clicked() {
                    action = Some(Action::ToggleLabExpanded);
                }
            });
        }
    });
    ui.add_space(16.0);

    let rows = plan_rows(items, expanded, preview);
    if expanded {
        show_archive(ui, view, &rows);
    } else if let Some(slide) = show_strip(ui, view, &rows, current_slide) {
        action = action.or(Some(Action::SlideChanged(slide)));
    }
    action
}

fn show_strip(
    ui: &mut egui::Ui,
    view: &mut ViewCtx<'_>,
    rows: &[LabRow<'_>],
    current_slide: usize,
) -> Option<usize> {
    let item_width = if view.compact {
        ui.available_width() * 0.85
    } else {
        ITEM_WIDTH
    };
    let mut rects = Vec::with_capacity(rows.len());

    let output = egui::ScrollArea::horizontal()
        .id_source("lab_strip")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = STRIP_GAP;
                for row in rows {
                    if let LabRow::Item(item) = row {
                        let rect = revealed(ui, view, RevealKey::Lab(item.id), |ui, view| {
                            lab_card(ui, view, item, item_width)
                        });
                        rects.push(rect);
                    }
                }
            });
        });

    let strip = StripGeometry::from_rects(&rects)?;
    let slide = strip.slide_index(output.state.offset.x);

    ui.add_space(12.0);
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{:02} / {:02}", slide + 1, strip.item_count))
                .monospace()
                .strong(),
        );
        let (bar, _) = ui.allocate_exact_size(vec2(ui.available_width().min(240.0), 4.0), Sense::hover());
        ui.painter().rect_filled(bar, 0.0, theme::ZINC_200);
        let mut filled = bar;
        filled.set_width(bar.width() * strip.progress(slide));
        ui.painter().rect_filled(filled, 0.0, theme::INK);
    });

    (slide != current_slide).then_some(slide)
}

fn show_archive(ui: &mut egui::Ui, view: &mut ViewCtx<'_>, rows: &[LabRow<'_>]) {
    let mut group: Vec<&LabItem> = Vec::new();
    for row in rows {
        match row {
            LabRow::YearDivider(year) => {
                flush_group(ui, view, &mut group);
                ui.add_space(16.0);
                let label = year.map(|y| y.to_string()).unwrap_or_else(|| "—".to_string());
                ui.label(RichText::new(label).size(28.0).strong().color(theme::INK));
                let (line, _) = ui.allocate_exact_size(vec2(ui.available_width(), theme::BORDER), Sense::hover());
                ui.painter().rect_filled(line, 0.0, theme::INK);
                ui.add_space(12.0);
            }
            LabRow::Item(item) => group.push(*item),
        }
    }
    flush_group(ui, view, &mut group);
}

fn flush_group(ui: &mut egui::Ui, view: &mut ViewCtx<'_>, group: &mut Vec<&LabItem>) {
    if group.is_empty() {
        return;
    }
    let width = if view.compact {
        ui.available_width()
    } else {
        ITEM_WIDTH
    };
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing = vec2(STRIP_GAP, STRIP_GAP);
        for item in group.drain(..) {
            revealed(ui, view, RevealKey::Lab(item.id), |ui, view| {
                lab_card(ui, view, item, width)
            });
        }
    });
}

/// Draw one lab item and return its rect.
fn lab_card(ui: &mut egui::Ui, view: &mut ViewCtx<'_>, item: &LabItem, width: f32) -> egui::Rect {
    let height = parse_px_height(&item.height)
        .unwrap_or(DEFAULT_HEIGHT)
        .min(MAX_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(vec2(width, height), Sense::hover());

    let fill = item
        .color
        .strip_prefix("bg-")
        .and_then(parse_color)
        .map(theme::rgb)
        .unwrap_or(theme::ZINC_200);
    let image = item.has_image().then_some(item.color.as_str());
    paint_media(ui, view.textures, image, rect, VisualFit::Cover, fill, Color32::WHITE);
    ui.painter().rect_stroke(rect, 0.0, theme::border());

    let painter = ui.painter_at(rect);
    let inner = rect.shrink(16.0);
    let [r, g, b, _] = fill.to_array();
    let luminance = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    let text = if luminance >= 128.0 {
        theme::INK
    } else {
        theme::PAPER
    };
    painter.text(inner.left_bottom(), Align2::LEFT_BOTTOM, &item.title, FontId::proportional(20.0), text);
    painter.text(
        inner.left_bottom() - vec2(0.0, 26.0),
        Align2::LEFT_BOTTOM,
        &item.date,
        FontId::monospace(11.0),
        text.gamma_multiply(0.8),
    );

    if let Some(category) = item.category.as_deref() {
        let chip_color = theme::rgb(item.category_tag().rgb());
        let galley = painter.layout_no_wrap(category.to_uppercase(), FontId::proportional(11.0), theme::INK);
        let chip = egui::Rect::from_min_size(inner.left_top(), galley.size() + vec2(12.0, 6.0));
        painter.rect_filled(chip, 0.0, chip_color);
        painter.rect_stroke(chip, 0.0, egui::Stroke::new(2.0, theme::INK));
        painter.galley(chip.min + vec2(6.0, 3.0), galley, theme::INK);
    }
    rect
}
