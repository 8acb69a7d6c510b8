//! Named color presets.
//!
//! Colors are plain CSS color names. Only the drawing backend interprets them.

use crate::error::{CalendarError, CalendarResult};

pub const DEFAULT_PRESET: &str = "black";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPolicy {
    pub default: &'static str,
    pub saturday: &'static str,
    pub sunday: &'static str,
    pub holiday: &'static str,
    /// Canvas fill for raster output
    pub background: &'static str,
}

const COLOR_PRESETS: &[(&str, ColorPolicy)] = &[
    (
        "black",
        ColorPolicy {
            default: "black",
            saturday: "blue",
            sunday: "red",
            holiday: "red",
            background: "white",
        },
    ),
    (
        "white",
        ColorPolicy {
            default: "white",
            saturday: "lightblue",
            sunday: "pink",
            holiday: "pink",
            background: "darkslategray",
        },
    ),
];

impl ColorPolicy {
    /// Color for a grid column, holidays first, then Sunday and Saturday
    pub const fn color_for(&self, column: u8, is_holiday: bool) -> &'static str {
        if is_holiday {
            self.holiday
        } else {
            self.weekday_color(column)
        }
    }

    /// Color for a column ignoring holidays, as used by the weekday header
    pub const fn weekday_color(&self, column: u8) -> &'static str {
        match column {
            0 => self.sunday,
            6 => self.saturday,
            _ => self.default,
        }
    }
}

pub fn lookup(preset_name: &str) -> CalendarResult<&'static ColorPolicy> {
    COLOR_PRESETS
        .iter()
        .find(|(name, _)| *name == preset_name)
        .map(|(_, policy)| policy)
        .ok_or_else(|| CalendarError::UnknownPreset(preset_name.to_owned()))
}

pub fn preset_names() -> impl Iterator<Item = &'static str> {
    COLOR_PRESETS.iter().map(|(name, _)| *name)
}
