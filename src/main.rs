// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! FOLIO - a bilingual portfolio viewer
//!
//! A cross-platform desktop application that presents a catalog of
//! projects, lab experiments and an about page with bento-grid layouts,
//! scroll reveals and history-aware modals.

mod app;
mod config;
mod content;
mod i18n;
mod io;
mod models;
mod state;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use config::AppConfig;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let config = AppConfig::load()?;
    log::info!("Starting with language {:?}, assets in {}", config.language, config.asset_root.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size)
            .with_title("FOLIO"),
        ..Default::default()
    };

    eframe::run_native(
        "FOLIO",
        options,
        Box::new(move |cc| {
            ui::theme::apply_style(&cc.egui_ctx);
            ui::theme::install_fonts(&cc.egui_ctx, config.korean_font.as_deref());
            Ok(Box::new(FolioApp::new(config)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
