//! Per-font padding corrections.
//!
//! The paddings are hand-tuned for each font against the default layout
//! anchors; they are not derived from glyph metrics. Adding a font is a matter
//! of adding an entry to the embedded table below.

use std::collections::BTreeMap;
use std::path::PathBuf;

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::error::{CalendarError, CalendarResult};

pub const DEFAULT_FONT: &str = "Noto Sans JP";

const FONT_SETTINGS_JSON: &str = r#"
{
    "Noto Sans JP": {
        "FONT_PATH": "ttf/NotoSansJP-Regular.ttf",
        "SPACE_PADDING_COUNT": 2,
        "DAY_NAME_PADDING_PIXELS": 0,
        "SINGLE_DIGIT_DATE_PADDING_PIXELS": 0
    },
    "Murecho": {
        "FONT_PATH": "ttf/Murecho-Regular.ttf",
        "SPACE_PADDING_COUNT": 2,
        "DAY_NAME_PADDING_PIXELS": 0,
        "SINGLE_DIGIT_DATE_PADDING_PIXELS": 0
    },
    "Kaisei Decol": {
        "FONT_PATH": "ttf/KaiseiDecol-Regular.ttf",
        "SPACE_PADDING_COUNT": 1,
        "DAY_NAME_PADDING_PIXELS": 0,
        "SINGLE_DIGIT_DATE_PADDING_PIXELS": 0
    },
    "Mochiy Pop One": {
        "FONT_PATH": "ttf/MochiyPopOne-Regular.ttf",
        "SPACE_PADDING_COUNT": 2,
        "DAY_NAME_PADDING_PIXELS": 0,
        "SINGLE_DIGIT_DATE_PADDING_PIXELS": 0
    },
    "Zen Kurenaido": {
        "FONT_PATH": "ttf/ZenKurenaido-Regular.ttf",
        "SPACE_PADDING_COUNT": 2,
        "DAY_NAME_PADDING_PIXELS": 6,
        "SINGLE_DIGIT_DATE_PADDING_PIXELS": 6
    }
}
"#;

static FONT_DEFINITIONS: Lazy<Result<BTreeMap<String, FontProfile>, String>> =
    Lazy::new(|| serde_json::from_str(FONT_SETTINGS_JSON).map_err(|e| e.to_string()));

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct FontProfile {
    pub font_path: PathBuf,
    /// Spaces prepended to each weekday symbol
    pub space_padding_count: u8,
    pub day_name_padding_pixels: i32,
    /// Extra x offset for days 1-9
    pub single_digit_date_padding_pixels: i32,
}

impl FontProfile {
    /// The weekday symbol with this font's leading spaces applied
    pub fn pad_day_name(&self, symbol: &str) -> String {
        let mut padded = " ".repeat(usize::from(self.space_padding_count));
        padded.push_str(symbol);
        padded
    }

    pub fn date_padding(&self, day: u32) -> i32 {
        if day < 10 {
            self.single_digit_date_padding_pixels
        } else {
            0
        }
    }
}

fn definitions() -> CalendarResult<&'static BTreeMap<String, FontProfile>> {
    Lazy::force(&FONT_DEFINITIONS)
        .as_ref()
        .map_err(|e| CalendarError::FontTable(e.clone()))
}

/// Look up a font by display name
pub fn lookup(font_name: &str) -> CalendarResult<&'static FontProfile> {
    definitions()?
        .get(font_name)
        .ok_or_else(|| CalendarError::UnknownFont(font_name.to_owned()))
}

/// Display names of every configured font, sorted
pub fn font_names() -> CalendarResult<impl Iterator<Item = &'static str>> {
    Ok(definitions()?.keys().map(String::as_str))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_table_parses() {
        let names: Vec<&str> = font_names().unwrap().collect();
        assert_eq!(
            names,
            ["Kaisei Decol", "Mochiy Pop One", "Murecho", "Noto Sans JP", "Zen Kurenaido"]
        );
    }

    #[test]
    fn zen_kurenaido_has_pixel_paddings() {
        let profile = lookup("Zen Kurenaido").unwrap();
        assert_eq!(profile.day_name_padding_pixels, 6);
        assert_eq!(profile.single_digit_date_padding_pixels, 6);
        assert_eq!(profile.font_path, PathBuf::from("ttf/ZenKurenaido-Regular.ttf"));
    }

    #[test]
    fn kaisei_decol_pads_with_one_space() {
        let profile = lookup("Kaisei Decol").unwrap();
        assert_eq!(profile.pad_day_name("M"), " M");
        assert_eq!(lookup(DEFAULT_FONT).unwrap().pad_day_name("M"), "  M");
    }

    #[test]
    fn date_padding_only_for_single_digits() {
        let profile = lookup("Zen Kurenaido").unwrap();
        assert_eq!(profile.date_padding(9), 6);
        assert_eq!(profile.date_padding(10), 0);
    }

    #[test]
    fn unknown_font_is_an_error() {
        let err = lookup("Comic Sans").unwrap_err();
        assert!(matches!(err, CalendarError::UnknownFont(name) if name == "Comic Sans"));
    }
}
