// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Layout descriptor parsing.
//!
//! Catalog records describe their tile with utility-class strings such as
//! `md:col-span-2 bg-black text-white hover:bg-[#edc5c4]`. Only the classes
//! that affect the native layout are understood; everything else is ignored.

/// Grid width in columns.
pub const GRID_COLUMNS: u8 = 3;

/// Layout hints extracted from a descriptor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutHints {
    /// Columns spanned on wide layouts, `1..=GRID_COLUMNS`.
    pub col_span: u8,
    pub background: [u8; 3],
    pub hover_background: Option<[u8; 3]>,
    pub dark_text: bool,
    /// Explicit media height in points.
    pub media_height: Option<f32>,
}

impl Default for LayoutHints {
    fn default() -> Self {
        Self {
            col_span: 1,
            background: [0, 0, 0],
            hover_background: None,
            dark_text: false,
            media_height: None,
        }
    }
}

impl LayoutHints {
    pub fn parse(descriptor: &str) -> Self {
        let mut hints = LayoutHints::default();
        let mut text_set = false;

        for class in descriptor.split_whitespace() {
            let base = class.rsplit(':').next().unwrap_or(class);
            let is_hover = class.starts_with("hover:");
            let responsive = class.contains(':') && !is_hover;

            if let Some(span) = base.strip_prefix("col-span-") {
                if let Ok(span) = span.parse::<u8>() {
                    hints.col_span = span.clamp(1, GRID_COLUMNS);
                }
            } else if let Some(px) = parse_px_height(base) {
                if !is_hover {
                    hints.media_height = Some(px);
                }
            } else if let Some(color) = base.strip_prefix("bg-").and_then(parse_color) {
                if is_hover {
                    hints.hover_background = Some(color);
                } else if !responsive {
                    hints.background = color;
                }
            } else if let Some(color) = base.strip_prefix("text-").and_then(parse_color) {
                if !is_hover {
                    hints.dark_text = luminance(color) < 128.0;
                    text_set = true;
                }
            }
        }

        if !text_set {
            hints.dark_text = luminance(hints.background) >= 128.0;
        }
        hints
    }
}

/// Parse a height hint such as `h-[300px]`.
pub fn parse_px_height(class: &str) -> Option<f32> {
    class
        .strip_prefix("h-[")?
        .strip_suffix("px]")?
        .parse::<f32>()
        .ok()
        .filter(|px| *px > 0.0)
}

/// Parse a colour token: `black`, `white`, `gray-NNN`, `zinc-NNN`, `[#rrggbb]`.
pub fn parse_color(token: &str) -> Option<[u8; 3]> {
    match token {
        "black" => return Some([0, 0, 0]),
        "white" => return Some([255, 255, 255]),
        _ => {}
    }
    if let Some(hex) = token.strip_prefix("[#").and_then(|t| t.strip_suffix(']')) {
        return parse_hex(hex);
    }
    let (family, shade) = token.split_once('-')?;
    let shade: u16 = shade.parse().ok()?;
    let gray = match shade {
        50 => 250,
        100 => 243,
        200 => 229,
        300 => 209,
        400 => 156,
        500 => 107,
        600 => 75,
        700 => 55,
        800 => 31,
        900 => 17,
        _ => return None,
    };
    match family {
        "gray" | "zinc" | "neutral" | "stone" | "slate" => Some([gray, gray, gray]),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn luminance([r, g, b]: [u8; 3]) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_tile() {
        let hints = LayoutHints::parse(
            "md:col-span-1 bg-black text-white hover:shadow-[8px_8px_0px_0px_rgba(113,113,122,1)]",
        );
        assert_eq!(hints.col_span, 1);
        assert_eq!(hints.background, [0, 0, 0]);
        assert!(!hints.dark_text);
        assert_eq!(hints.hover_background, None);
    }

    #[test]
    fn test_light_tile_with_hover_colour() {
        let hints = LayoutHints::parse("md:col-span-2 bg-gray-200 text-black hover:bg-[#FFC497]");
        assert_eq!(hints.col_span, 2);
        assert_eq!(hints.background, [229, 229, 229]);
        assert!(hints.dark_text);
        assert_eq!(hints.hover_background, Some([0xFF, 0xC4, 0x97]));
    }

    #[test]
    fn test_span_is_clamped() {
        assert_eq!(LayoutHints::parse("md:col-span-7").col_span, GRID_COLUMNS);
        assert_eq!(LayoutHints::parse("md:col-span-0").col_span, 1);
    }

    #[test]
    fn test_text_colour_inferred_from_background() {
        assert!(LayoutHints::parse("bg-white").dark_text);
        assert!(!LayoutHints::parse("bg-gray-800").dark_text);
    }

    #[test]
    fn test_height_hint() {
        assert_eq!(parse_px_height("h-[200px]"), Some(200.0));
        assert_eq!(parse_px_height("h-full"), None);
        assert_eq!(LayoutHints::parse("h-[200px]").media_height, Some(200.0));
    }

    #[test]
    fn test_unknown_classes_are_ignored() {
        assert_eq!(
            LayoutHints::parse("flex flex-col border-4 group cursor-pointer"),
            LayoutHints {
                dark_text: false,
                ..LayoutHints::default()
            }
        );
    }
}
