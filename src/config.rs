use serde::Deserialize;

use crate::error::{CalendarError, CalendarResult};

/// Largest accepted canvas side, in pixels
pub const MAX_CANVAS_SIDE: u32 = 8192;

/// Anchor coordinates of the calendar layout, in pixels.
///
/// Columns are `start_x_pos + column * col_width`, day rows are
/// `date_start_y + row * row_height`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct LayoutConstants {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub month_center_x: f32,
    pub month_center_y: f32,
    pub start_x_pos: f32,
    pub col_width: f32,
    /// Top of the weekday header row
    pub header_y: f32,
    pub date_start_y: f32,
    pub row_height: f32,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            canvas_width: 800,
            canvas_height: 600,
            month_center_x: 400.0,
            month_center_y: 70.0,
            start_x_pos: 110.0,
            col_width: 85.0,
            header_y: 140.0,
            date_start_y: 200.0,
            row_height: 62.0,
        }
    }
}

impl LayoutConstants {
    /// Overrides from a JSON object; absent keys keep their defaults
    pub fn from_json(json: &str) -> CalendarResult<Self> {
        let constants: Self =
            serde_json::from_str(json).map_err(|e| CalendarError::InvalidLayout(e.to_string()))?;
        constants.validate()?;
        Ok(constants)
    }

    /// Rejects empty or oversized canvases and non-finite anchors
    pub fn validate(&self) -> CalendarResult<()> {
        for (name, side) in [
            ("CANVAS_WIDTH", self.canvas_width),
            ("CANVAS_HEIGHT", self.canvas_height),
        ] {
            if side == 0 || side > MAX_CANVAS_SIDE {
                return Err(CalendarError::InvalidLayout(format!(
                    "{name} must be within 1..={MAX_CANVAS_SIDE}, got {side}"
                )));
            }
        }
        let anchors = [
            ("MONTH_CENTER_X", self.month_center_x),
            ("MONTH_CENTER_Y", self.month_center_y),
            ("START_X_POS", self.start_x_pos),
            ("COL_WIDTH", self.col_width),
            ("HEADER_Y", self.header_y),
            ("DATE_START_Y", self.date_start_y),
            ("ROW_HEIGHT", self.row_height),
        ];
        if let Some((name, _)) = anchors.iter().find(|(_, value)| !value.is_finite()) {
            return Err(CalendarError::InvalidLayout(format!("{name} is not a finite number")));
        }
        Ok(())
    }

    pub fn column_x(&self, column: u8) -> f32 {
        self.start_x_pos + f32::from(column) * self.col_width
    }

    pub fn row_y(&self, row: u8) -> f32 {
        self.date_start_y + f32::from(row) * self.row_height
    }
}
