// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Interface strings (navigation, buttons, section headings).
//!
//! Catalog content carries its own translations; this table only covers the
//! chrome around it. Lookups fall back to English, then to the key itself.

use crate::models::localized::Lang;

const EN: &[(&str, &str)] = &[
    ("nav.works", "WORKS"),
    ("nav.labs", "LABS"),
    ("nav.about", "ABOUT"),
    ("nav.menu", "MENU"),
    ("nav.close", "CLOSE"),
    ("section.arsenal", "ARSENAL"),
    ("section.lab", "LAB LOG"),
    ("lab.show_all", "VIEW FULL ARCHIVE"),
    ("lab.show_less", "SHOW LESS"),
    ("modal.close", "CLOSE"),
    ("modal.visit", "VISIT WEBSITE"),
    ("modal.github", "GITHUB"),
    ("modal.loading", "LOADING..."),
    ("modal.open_embed", "OPEN LIVE DEMO"),
    ("modal.permissions", "Allowed"),
    ("about.timeline", "TIMELINE"),
    ("about.skills", "SKILLS"),
    ("footer.rights", "© 2026 JOHN DOE. NO RIGHTS RESERVED."),
    ("menu.file", "File"),
    ("menu.open_catalog", "Open Catalog..."),
    ("menu.export_yaml", "Export Catalog as YAML..."),
    ("menu.export_json", "Export Catalog as JSON..."),
    ("menu.reset_catalog", "Use Built-in Catalog"),
    ("menu.quit", "Quit"),
];

const KO: &[(&str, &str)] = &[
    ("nav.works", "작업"),
    ("nav.labs", "실험실"),
    ("nav.about", "소개"),
    ("nav.menu", "메뉴"),
    ("nav.close", "닫기"),
    ("section.arsenal", "도구"),
    ("section.lab", "실험 기록"),
    ("lab.show_all", "전체 기록 보기"),
    ("lab.show_less", "접기"),
    ("modal.close", "닫기"),
    ("modal.visit", "웹사이트 방문"),
    ("modal.loading", "불러오는 중..."),
    ("modal.open_embed", "라이브 데모 열기"),
    ("modal.permissions", "허용"),
    ("about.timeline", "연혁"),
    ("about.skills", "기술"),
];

fn table(lang: Lang) -> &'static [(&'static str, &'static str)] {
    match lang {
        Lang::En => EN,
        Lang::Ko => KO,
    }
}

fn lookup(table: &'static [(&'static str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Translate an interface key.
pub fn t<'a>(key: &'a str, lang: Lang) -> &'a str {
    lookup(table(lang), key)
        .or_else(|| lookup(EN, key))
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_korean_lookup() {
        assert_eq!(t("nav.about", Lang::Ko), "소개");
        assert_eq!(t("nav.about", Lang::En), "ABOUT");
    }

    #[test]
    fn test_falls_back_to_english() {
        assert_eq!(t("modal.github", Lang::Ko), "GITHUB");
    }

    #[test]
    fn test_unknown_key_is_returned() {
        assert_eq!(t("no.such.key", Lang::Ko), "no.such.key");
    }

    #[test]
    fn test_every_korean_key_exists_in_english() {
        for (key, _) in KO {
            assert!(lookup(EN, key).is_some(), "missing English entry for {key}");
        }
    }
}
