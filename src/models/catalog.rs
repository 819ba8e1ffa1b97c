// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The complete content catalog.
//!
//! A catalog bundles every record the page renders. It is immutable once
//! loaded; the application swaps in a whole new catalog when a catalog file
//! is imported.

use super::{about::AboutData, lab::LabItem, project::ProjectRecord};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub lab: Vec<LabItem>,
    pub about: AboutData,
}

impl Catalog {
    pub fn project(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// Every project tag once, in first-seen order.
    pub fn arsenal(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = Vec::new();
        for tag in self.projects.iter().flat_map(|p| p.tags.iter()) {
            if !tags.contains(&tag.as_str()) {
                tags.push(tag);
            }
        }
        tags
    }

    /// Duplicate project ids, which would make selection ambiguous.
    pub fn duplicate_ids(&self) -> Vec<u32> {
        let mut seen = Vec::new();
        let mut dupes = Vec::new();
        for id in self.projects.iter().map(|p| p.id) {
            if seen.contains(&id) {
                if !dupes.contains(&id) {
                    dupes.push(id);
                }
            } else {
                seen.push(id);
            }
        }
        dupes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_builtin_lookup() {
        let catalog = content::builtin();
        assert_eq!(catalog.project(2).map(|p| p.id), Some(2));
        assert!(catalog.project(999).is_none());
        assert!(catalog.duplicate_ids().is_empty());
    }

    #[test]
    fn test_arsenal_is_deduplicated_in_order() {
        let mut catalog = content::builtin();
        catalog.projects.truncate(2);
        catalog.projects[0].tags = vec!["React".into(), "Blender".into()];
        catalog.projects[1].tags = vec!["Blender".into(), "D3.js".into()];
        assert_eq!(catalog.arsenal(), vec!["React", "Blender", "D3.js"]);
    }

    #[test]
    fn test_duplicate_ids_reported_once() {
        let mut catalog = content::builtin();
        let copy = catalog.projects[0].clone();
        catalog.projects.push(copy.clone());
        catalog.projects.push(copy);
        assert_eq!(catalog.duplicate_ids(), vec![catalog.projects[0].id]);
    }
}
