//! Text drawing backends.
//!
//! The layout engine only needs [`TextMetrics`]; replaying a finished layout
//! needs a [`TextCanvas`]. [`TtfCanvas`] draws the font files named by the
//! font profiles, [`MonoCanvas`] is the built-in bitmap fallback.

mod mono;
mod raster;
pub mod text_styles;
mod ttf;

pub use mono::{parse_color, DrawError, MonoCanvas};
pub use raster::ImageTarget;
pub use ttf::{TtfCanvas, TtfFont};

use crate::layout::MonthLayout;

/// Rendered size of a piece of text in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSize {
    pub width: u32,
    pub height: u32,
}

impl TextSize {
    pub const ZERO: Self = Self {
        width: 0,
        height: 0,
    };

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

pub trait TextMetrics {
    type Font;

    /// Size of the inked text. Text without visible glyphs measures `(0, 0)`.
    fn measure_text(&self, text: &str, font: &Self::Font) -> TextSize;
}

pub trait TextCanvas: TextMetrics {
    type Error;

    /// Draws `text` with its top-left corner at `(x, y)`
    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: &str,
        font: &Self::Font,
    ) -> Result<(), Self::Error>;
}

/// Replays every instruction of `layout` on `canvas`, in order
pub fn draw_instructions<C: TextCanvas>(
    canvas: &mut C,
    layout: &MonthLayout<C::Font>,
) -> Result<(), C::Error> {
    for instruction in &layout.instructions {
        canvas.draw_text(
            instruction.position.x,
            instruction.position.y,
            &instruction.text,
            instruction.color,
            &instruction.font,
        )?;
    }
    Ok(())
}
