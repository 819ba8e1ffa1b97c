// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! About page content.

use super::localized::{LocalizedParagraphs, LocalizedString};
use serde::{Deserialize, Serialize};

/// One row of the about page timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub title: LocalizedString,
    #[serde(default = "empty")]
    pub detail: LocalizedString,
}

/// Skills listed under one heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// The about page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutData {
    pub slogan: LocalizedString,
    pub paragraphs: LocalizedParagraphs,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
}

fn empty() -> LocalizedString {
    LocalizedString::plain("")
}
