// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Bento grid of project cards.

use super::{card, revealed, theme, ViewCtx};
use crate::models::project::ProjectRecord;
use crate::state::reveal::RevealKey;
use crate::util::layout::{LayoutHints, GRID_COLUMNS};
use egui::vec2;

/// Row height on wide layouts.
const ROW_HEIGHT: f32 = 400.0;
/// Card height when stacked in a single column.
const STACKED_HEIGHT: f32 = 340.0;

/// Split records into rows of at most `columns` spans, keeping order.
pub fn pack_rows(spans: &[u8], columns: u8) -> Vec<Vec<usize>> {
    let mut rows: Vec<Vec<usize>> = Vec::new();
    let mut used = 0u8;
    for (index, span) in spans.iter().enumerate() {
        let span = (*span).clamp(1, columns);
        match rows.last_mut() {
            Some(row) if used + span <= columns => {
                row.push(index);
                used += span;
            }
            _ => {
                rows.push(vec![index]);
                used = span;
            }
        }
    }
    rows
}

/// Draw the grid. Returns the id of a clicked project.
pub fn show(ui: &mut egui::Ui, view: &mut ViewCtx<'_>, projects: &[ProjectRecord]) -> Option<u32> {
    let mut clicked = None;
    let spans: Vec<u8> = projects
        .iter()
        .map(|p| LayoutHints::parse(&p.layout).col_span)
        .collect();
    let columns = if view.compact { 1 } else { GRID_COLUMNS };
    let width = ui.available_width();
    let column_width = (width - theme::GAP * (columns - 1) as f32) / columns as f32;

    for row in pack_rows(&spans, columns) {
        let height = if view.compact { STACKED_HEIGHT } else { ROW_HEIGHT };
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = theme::GAP;
            for index in row {
                let record = &projects[index];
                let span = spans[index].min(columns) as f32;
                let card_width = column_width * span + theme::GAP * (span - 1.0);
                ui.allocate_ui(vec2(card_width, height), |ui| {
                    ui.set_min_size(vec2(card_width, height));
                    revealed(ui, view, RevealKey::Project(record.id), |ui, view| {
                        if card::show(ui, view, record) {
                            clicked = Some(record.id);
                        }
                    });
                });
            }
        });
        ui.add_space(theme::GAP);
    }
    clicked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_bento_rows() {
        assert_eq!(pack_rows(&[2, 1, 1, 2], 3), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_overflow_starts_new_row() {
        assert_eq!(pack_rows(&[2, 2, 3, 1], 3), vec![vec![0], vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn test_single_column() {
        assert_eq!(pack_rows(&[2, 1, 3], 1), vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_empty() {
        assert!(pack_rows(&[], 3).is_empty());
    }
}
