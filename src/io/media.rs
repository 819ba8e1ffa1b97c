// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media file loading.
//!
//! Catalog media references are web-style paths (`/box.mp4`,
//! `/public/model.webp`) or URLs. This module maps them onto the local asset
//! root and decodes images into RGBA pixels suitable for egui textures.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// A decoded image.
#[derive(Debug)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8, row-major.
    pub pixels: Vec<u8>,
}

/// Map a catalog media reference onto `root`.
///
/// Returns `None` for remote URLs, which are never fetched. A leading
/// `/public/` is treated the same as `/`.
pub fn resolve_path(root: &Path, src: &str) -> Option<PathBuf> {
    if src.is_empty() || src.contains("://") {
        return None;
    }
    let relative = src
        .strip_prefix("/public/")
        .or_else(|| src.strip_prefix('/'))
        .unwrap_or(src);
    if relative.split('/').any(|part| part == "..") {
        return None;
    }
    Some(root.join(relative))
}

/// Whether a reference looks like a video file.
pub fn is_video(src: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    [".mp4", ".webm", ".mov", ".m4v"]
        .iter()
        .any(|ext| lower.ends_with(ext))
}

/// Decode an image file into RGBA pixels.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    if !path.exists() {
        bail!("Image not found: {}", path.display());
    }
    let img = image::open(path)
        .with_context(|| format!("decoding {}", path.display()))?
        .to_rgba8();
    let (width, height) = img.dimensions();
    Ok(LoadedImage {
        width,
        height,
        pixels: img.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_paths() {
        let root = Path::new("/srv/assets");
        assert_eq!(
            resolve_path(root, "/box.mp4"),
            Some(PathBuf::from("/srv/assets/box.mp4"))
        );
        assert_eq!(
            resolve_path(root, "/public/model.webp"),
            Some(PathBuf::from("/srv/assets/model.webp"))
        );
        assert_eq!(
            resolve_path(root, "lab/a.png"),
            Some(PathBuf::from("/srv/assets/lab/a.png"))
        );
    }

    #[test]
    fn test_remote_and_escaping_paths_are_refused() {
        let root = Path::new("/srv/assets");
        assert_eq!(resolve_path(root, "https://images.example.com/a.jpg"), None);
        assert_eq!(resolve_path(root, "/../etc/passwd"), None);
        assert_eq!(resolve_path(root, ""), None);
    }

    #[test]
    fn test_video_extensions() {
        assert!(is_video("/box.mp4"));
        assert!(is_video("/clip.WEBM"));
        assert!(!is_video("/model.webp"));
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tile.png");
        image::RgbaImage::from_pixel(4, 2, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .unwrap();

        let loaded = load_image(&path).unwrap();
        assert_eq!((loaded.width, loaded.height), (4, 2));
        assert_eq!(loaded.pixels.len(), 4 * 2 * 4);
        assert_eq!(&loaded.pixels[..4], &[255, 0, 0, 255]);
    }

    #[test]
    fn test_missing_image_is_an_error() {
        let err = load_image(Path::new("/definitely/not/here.png")).unwrap_err();
        assert!(err.to_string().contains("Image not found"));
    }
}
