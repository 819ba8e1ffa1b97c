// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Localized strings and language selection.
//!
//! Catalog text is either language-invariant or carries one variant per
//! supported language. Resolution is total: it never fails and never
//! allocates.

use serde::{Deserialize, Serialize};

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    En,
    Ko,
}

impl Lang {
    /// The other language.
    pub fn toggled(self) -> Self {
        match self {
            Lang::En => Lang::Ko,
            Lang::Ko => Lang::En,
        }
    }

    /// Short label shown on the language toggle.
    pub fn label(self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Ko => "KO",
        }
    }
}

/// A string that is either the same in every language or has one variant
/// per language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocalizedString {
    PerLang { en: String, ko: String },
    Plain(String),
}

impl LocalizedString {
    pub fn plain(text: impl Into<String>) -> Self {
        LocalizedString::Plain(text.into())
    }

    pub fn both(en: impl Into<String>, ko: impl Into<String>) -> Self {
        LocalizedString::PerLang {
            en: en.into(),
            ko: ko.into(),
        }
    }

    /// The text for `lang`.
    pub fn get(&self, lang: Lang) -> &str {
        match self {
            LocalizedString::Plain(text) => text,
            LocalizedString::PerLang { en, ko } => match lang {
                Lang::En => en,
                Lang::Ko => ko,
            },
        }
    }
}

impl From<&str> for LocalizedString {
    fn from(text: &str) -> Self {
        LocalizedString::plain(text)
    }
}

/// Resolve an optional localized value. Missing values resolve to `""`.
pub fn resolve(value: Option<&LocalizedString>, lang: Lang) -> &str {
    value.map(|v| v.get(lang)).unwrap_or("")
}

/// Paragraph lists that differ per language (about page narrative).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LocalizedParagraphs {
    pub en: Vec<String>,
    pub ko: Vec<String>,
}

impl LocalizedParagraphs {
    pub fn get(&self, lang: Lang) -> &[String] {
        match lang {
            Lang::En => &self.en,
            Lang::Ko => &self.ko,
        }
    }
}
