// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Catalog serialization and deserialization.
//!
//! This module handles exporting and importing the content catalog in YAML
//! and JSON formats. The format is chosen by file extension.

use crate::models::catalog::Catalog;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// Catalog file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => Ok(Format::Yaml),
            Some("json") => Ok(Format::Json),
            other => bail!("Unsupported file extension: {:?}", other),
        }
    }
}

/// Export the catalog to YAML format.
pub fn export_yaml(catalog: &Catalog, path: &Path) -> Result<()> {
    let yaml = serde_yaml::to_string(catalog)?;
    std::fs::write(path, yaml).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Export the catalog to JSON format.
pub fn export_json(catalog: &Catalog, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog)?;
    std::fs::write(path, json).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Import a catalog from YAML format.
pub fn import_yaml(path: &Path) -> Result<Catalog> {
    let yaml =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog = serde_yaml::from_str(&yaml)
        .with_context(|| format!("parsing YAML catalog {}", path.display()))?;
    Ok(catalog)
}

/// Import a catalog from JSON format.
pub fn import_json(path: &Path) -> Result<Catalog> {
    let json =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let catalog = serde_json::from_str(&json)
        .with_context(|| format!("parsing JSON catalog {}", path.display()))?;
    Ok(catalog)
}

/// Export in the format implied by the extension.
pub fn export(catalog: &Catalog, path: &Path) -> Result<()> {
    match Format::from_path(path)? {
        Format::Yaml => export_yaml(catalog, path),
        Format::Json => export_json(catalog, path),
    }
}

/// Import in the format implied by the extension, rejecting catalogs with
/// duplicate project ids.
pub fn import(path: &Path) -> Result<Catalog> {
    let catalog = match Format::from_path(path)? {
        Format::Yaml => import_yaml(path)?,
        Format::Json => import_json(path)?,
    };
    let dupes = catalog.duplicate_ids();
    if !dupes.is_empty() {
        bail!("{}: duplicate project ids {:?}", path.display(), dupes);
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_yaml_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        let catalog = content::builtin();
        export(&catalog, &path).unwrap();
        assert_eq!(import(&path).unwrap(), catalog);
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        let catalog = content::builtin();
        export(&catalog, &path).unwrap();
        assert_eq!(import(&path).unwrap(), catalog);
    }

    #[test]
    fn test_unknown_extension() {
        let path = Path::new("catalog.toml");
        assert!(Format::from_path(path).is_err());
        assert!(export(&content::builtin(), path).is_err());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.json");
        let mut catalog = content::builtin();
        catalog.projects.push(catalog.projects[0].clone());
        export(&catalog, &path).unwrap();
        let err = import(&path).unwrap_err();
        assert!(err.to_string().contains("duplicate project ids"));
    }

    #[test]
    fn test_minimal_hand_written_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mini.yml");
        std::fs::write(
            &path,
            r#"
projects:
  - id: 7
    title: "SOLO"
    category: "MISC"
    type: interactive
    embed_url: "https://example.com"
    description: { en: "Hello", ko: "안녕" }
about:
  slogan: "HI"
  paragraphs: { en: ["one"], ko: ["하나"] }
"#,
        )
        .unwrap();
        let catalog = import(&path).unwrap();
        assert_eq!(catalog.projects.len(), 1);
        assert!(catalog.lab.is_empty());
        let project = &catalog.projects[0];
        assert!(!project.is_featured);
        assert!(project.tags.is_empty());
        assert!(matches!(
            project.modal_visual(),
            Some(crate::models::project::ModalVisual::Embed("https://example.com"))
        ));
    }
}
