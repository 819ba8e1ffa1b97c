// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Read from the YAML file named by `FOLIO_CONFIG`, else `folio.yaml` in the
//! working directory, else built-in defaults. Every field is optional in the
//! file.

use crate::models::localized::Lang;
use crate::state::reveal::RevealConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "FOLIO_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "folio.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
    pub language: Lang,
    /// Directory media paths are resolved against.
    pub asset_root: PathBuf,
    /// Catalog file to load instead of the built-in one.
    pub catalog: Option<PathBuf>,
    /// Lab items shown before the archive is expanded.
    pub lab_preview_count: usize,
    pub reveal_threshold: f32,
    pub reveal_margin: f32,
    pub marquee_text: String,
    pub marquee_repeat: usize,
    /// Marquee speed in points per second.
    pub marquee_speed: f32,
    /// Below this window width the nav collapses into a menu.
    pub mobile_breakpoint: f32,
    /// Font file with Hangul glyphs, tried before system fonts.
    pub korean_font: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_size: [1280.0, 860.0],
            min_window_size: [420.0, 600.0],
            language: Lang::En,
            asset_root: PathBuf::from("public"),
            catalog: None,
            lab_preview_count: 6,
            reveal_threshold: 0.1,
            reveal_margin: 50.0,
            marquee_text: "BREAKING BARRIERS //".to_string(),
            marquee_repeat: 8,
            marquee_speed: 50.0,
            mobile_breakpoint: 768.0,
            korean_font: None,
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = serde_yaml::from_str(&yaml)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    /// Resolve the configuration from the environment.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load() -> Result<Self> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Self::from_file(Path::new(&path));
        }
        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.exists() {
            return Self::from_file(default);
        }
        Ok(Self::default())
    }

    pub fn reveal(&self) -> RevealConfig {
        RevealConfig {
            threshold: self.reveal_threshold,
            margin: self.reveal_margin,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("folio.yaml");
        std::fs::write(&path, "language: ko\nlab_preview_count: 3\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.language, Lang::Ko);
        assert_eq!(config.lab_preview_count, 3);
        assert_eq!(config.marquee_repeat, 8);
        assert_eq!(config.reveal(), RevealConfig::default());
    }

    #[test]
    fn test_bad_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        std::fs::write(&path, "language: [").unwrap();
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.yaml"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(AppConfig::from_file(Path::new("/no/such/folio.yaml")).is_err());
    }
}
