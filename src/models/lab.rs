// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Lab log entries.
//!
//! Lab items are small experiments shown in a horizontal strip. They are
//! grouped by year in the archive view and colour coded by category.

use serde::{Deserialize, Serialize};

/// A lab log entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabItem {
    pub id: u32,
    pub title: String,
    /// Display date, e.g. `FEB 05, 2026`.
    pub date: String,
    /// Height hint, e.g. `h-[300px]`.
    #[serde(default)]
    pub height: String,
    /// Colour class (`bg-gray-300`) or an image path.
    #[serde(default)]
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl LabItem {
    /// The item's year: the explicit one, else the last four-digit group of
    /// the date label.
    pub fn year(&self) -> Option<u16> {
        self.year.or_else(|| year_from_date(&self.date))
    }

    /// Whether `color` refers to an image rather than a colour class.
    pub fn has_image(&self) -> bool {
        let lower = self.color.to_ascii_lowercase();
        lower.starts_with('/')
            || lower.starts_with("http")
            || [".png", ".jpg", ".jpeg", ".webp", ".gif"]
                .iter()
                .any(|ext| lower.ends_with(ext))
    }

    pub fn category_tag(&self) -> CategoryTag {
        CategoryTag::from_category(self.category.as_deref().unwrap_or(""))
    }
}

fn year_from_date(date: &str) -> Option<u16> {
    date.split(|c: char| !c.is_ascii_digit())
        .filter(|group| group.len() == 4)
        .last()
        .and_then(|group| group.parse().ok())
}

/// Colour family of a lab item, chosen by keyword in its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryTag {
    ThreeD,
    Web,
    Motion,
    Design,
    Other,
}

impl CategoryTag {
    pub fn from_category(category: &str) -> Self {
        let lower = category.to_ascii_lowercase();
        let has = |keys: &[&str]| keys.iter().any(|k| lower.contains(k));
        if has(&["3d", "blender", "three", "shader", "webgl"]) {
            CategoryTag::ThreeD
        } else if has(&["web", "react", "code", "dev", "frontend"]) {
            CategoryTag::Web
        } else if has(&["motion", "anim", "video"]) {
            CategoryTag::Motion
        } else if has(&["design", "ui", "type", "brand"]) {
            CategoryTag::Design
        } else {
            CategoryTag::Other
        }
    }

    /// Tag colour as RGB.
    pub fn rgb(self) -> [u8; 3] {
        match self {
            CategoryTag::ThreeD => [0xED, 0xC5, 0xC4],
            CategoryTag::Web => [0xC4, 0xD7, 0xED],
            CategoryTag::Motion => [0xFF, 0xC4, 0x97],
            CategoryTag::Design => [0xD4, 0xED, 0xC4],
            CategoryTag::Other => [0xE4, 0xE4, 0xE7],
        }
    }
}
