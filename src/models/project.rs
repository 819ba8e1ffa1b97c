// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project records shown in the bento grid and the detail modal.
//!
//! Records are plain data: they are built once when the catalog loads and
//! are only ever selected by id afterwards.

use super::localized::LocalizedString;
use serde::{Deserialize, Serialize};

/// How a project presents itself in the detail modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    Interactive,
    Video,
    Image,
    #[default]
    Media,
}

/// Scaling of the modal visual inside its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisualFit {
    #[default]
    Cover,
    Contain,
}

/// One block of a project's long-form gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GalleryBlock {
    Text {
        content: LocalizedString,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
    Image {
        src: String,
    },
    Video {
        src: String,
    },
    Code {
        content: LocalizedString,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        lang: Option<String>,
    },
}

/// The single visual the detail modal shows for a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalVisual<'a> {
    Embed(&'a str),
    Video(&'a str),
    Image(&'a str),
}

/// A portfolio project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    /// Utility-class layout descriptor, see [`crate::util::layout`].
    #[serde(default)]
    pub layout: String,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub hide_modal_visual: bool,
    #[serde(default)]
    pub visual_fit: VisualFit,
    #[serde(default, rename = "type")]
    pub kind: ProjectKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embed_url: Option<String>,
    pub description: LocalizedString,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryBlock>,
}

impl ProjectRecord {
    /// Create a record with only the required fields set.
    pub fn new(id: u32, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            video: None,
            image: None,
            poster: None,
            layout: String::new(),
            is_featured: false,
            hide_modal_visual: false,
            visual_fit: VisualFit::Cover,
            kind: ProjectKind::Media,
            embed_url: None,
            description: LocalizedString::plain(""),
            link: String::new(),
            github: None,
            tags: Vec::new(),
            gallery: Vec::new(),
        }
    }

    /// Media shown on the grid tile. Video wins over image.
    pub fn tile_media(&self) -> Option<ModalVisual<'_>> {
        self.video
            .as_deref()
            .map(ModalVisual::Video)
            .or_else(|| self.image.as_deref().map(ModalVisual::Image))
    }

    /// The visual the detail modal renders: the embed for interactive
    /// projects, else video, else image, else nothing.
    pub fn modal_visual(&self) -> Option<ModalVisual<'_>> {
        if self.hide_modal_visual {
            return None;
        }
        if self.kind == ProjectKind::Interactive {
            if let Some(url) = self.embed_url.as_deref() {
                return Some(ModalVisual::Embed(url));
            }
        }
        self.tile_media()
    }

    /// Still image to show for a video surface.
    pub fn still_image(&self) -> Option<&str> {
        self.poster.as_deref().or(self.image.as_deref())
    }

    /// Whether the outbound link points anywhere.
    pub fn has_link(&self) -> bool {
        !self.link.is_empty() && self.link != "#"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProjectRecord {
        let mut r = ProjectRecord::new(2, "CHOCOLATE-ORDER SYSTEM", "REACT / TAILWIND");
        r.video = Some("/dashboard.mp4".into());
        r.image = Some("/dashboard.webp".into());
        r.embed_url = Some("https://order.example.com/".into());
        r
    }

    #[test]
    fn test_interactive_prefers_embed() {
        let mut r = record();
        r.kind = ProjectKind::Interactive;
        assert_eq!(
            r.modal_visual(),
            Some(ModalVisual::Embed("https://order.example.com/"))
        );
    }

    #[test]
    fn test_embed_ignored_for_other_kinds() {
        let r = record();
        assert_eq!(r.modal_visual(), Some(ModalVisual::Video("/dashboard.mp4")));
    }

    #[test]
    fn test_image_then_nothing() {
        let mut r = record();
        r.video = None;
        assert_eq!(r.modal_visual(), Some(ModalVisual::Image("/dashboard.webp")));
        r.image = None;
        assert_eq!(r.modal_visual(), None);
    }

    #[test]
    fn test_hidden_visual() {
        let mut r = record();
        r.kind = ProjectKind::Interactive;
        r.hide_modal_visual = true;
        assert_eq!(r.modal_visual(), None);
        // The grid tile is unaffected.
        assert!(r.tile_media().is_some());
    }

    #[test]
    fn test_gallery_block_tags() {
        let json = r#"[
            {"type": "text", "content": "01. STRUCTURE"},
            {"type": "image", "src": "/model.webp"},
            {"type": "video", "src": "/process.mp4"},
            {"type": "code", "content": "fn main() {}", "lang": "rust"}
        ]"#;
        let blocks: Vec<GalleryBlock> = serde_json::from_str(json).unwrap();
        assert!(matches!(blocks[0], GalleryBlock::Text { lang: None, .. }));
        assert_eq!(blocks[1], GalleryBlock::Image { src: "/model.webp".into() });
        assert_eq!(blocks[2], GalleryBlock::Video { src: "/process.mp4".into() });
        assert!(matches!(&blocks[3], GalleryBlock::Code { lang: Some(l), .. } if l == "rust"));
    }

    #[test]
    fn test_placeholder_link() {
        let mut r = record();
        r.link = "#".into();
        assert!(!r.has_link());
        r.link = "https://example.com".into();
        assert!(r.has_link());
    }
}
