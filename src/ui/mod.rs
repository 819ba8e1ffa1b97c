// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the portfolio page.

pub mod arsenal;
pub mod card;
pub mod footer;
pub mod gallery;
pub mod grid;
pub mod lab;
pub mod marquee;
pub mod modal;
pub mod nav;
pub mod textures;
pub mod theme;

use crate::models::localized::Lang;
use crate::state::playback::HoverPlayback;
use crate::state::reveal::{FrameVisibility, RevealKey, RevealTracker};
use textures::TextureCache;

/// Per-frame rendering context handed to every component.
pub struct ViewCtx<'a> {
    pub lang: Lang,
    /// Narrow window: single column, collapsed nav.
    pub compact: bool,
    pub textures: &'a mut TextureCache,
    pub reveal: &'a RevealTracker,
    pub visibility: &'a mut FrameVisibility,
    pub hover: &'a mut HoverPlayback,
    /// Seconds since the previous frame.
    pub dt: f32,
}

/// Draw `add` with the reveal fade for `key` and report where it landed.
pub fn revealed<'a, R>(
    ui: &mut egui::Ui,
    view: &mut ViewCtx<'a>,
    key: RevealKey,
    add: impl FnOnce(&mut egui::Ui, &mut ViewCtx<'a>) -> R,
) -> R {
    let shown = view.reveal.is_shown(key);
    let alpha = ui
        .ctx()
        .animate_bool_with_time(egui::Id::new(("reveal", key)), shown, 0.6);
    let inner = ui.scope(|ui| {
        ui.set_opacity(alpha);
        add(ui, view)
    });
    view.visibility
        .record_in(key, inner.response.rect, ui.clip_rect());
    inner.inner
}

/// Paint an image into `frame`, or a flat placeholder when it is not
/// available (still loading, missing or a video without a still).
pub fn paint_media(
    ui: &egui::Ui,
    textures: &mut TextureCache,
    src: Option<&str>,
    frame: egui::Rect,
    fit: crate::models::project::VisualFit,
    placeholder: egui::Color32,
    tint: egui::Color32,
) {
    let painter = ui.painter_at(frame);
    painter.rect_filled(frame, 0.0, placeholder);
    if let Some(texture) = src.and_then(|src| textures.get(src)) {
        let (dest, uv) =
            crate::util::geometry::fit_image(texture.size_vec2(), frame, fit);
        painter.image(texture.id(), dest, uv, tint);
    }
}
