use core::convert::Infallible;
use core::fmt::Debug;

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    text::{renderer::TextRenderer, Baseline, Text, TextStyle},
};
use thiserror::Error;

use super::{text_styles::FontHandle, TextCanvas, TextMetrics, TextSize};

#[derive(Debug, Error)]
pub enum DrawError<E: Debug> {
    #[error("unsupported color: {0}")]
    Color(String),

    #[error("draw target error: {0:?}")]
    Target(E),
}

/// Resolves a CSS color name (or hex/rgb notation) to a pixel color
pub fn parse_color(name: &str) -> Option<Rgb888> {
    let [r, g, b, _] = csscolorparser::parse(name).ok()?.to_rgba8();
    Some(Rgb888::new(r, g, b))
}

/// Scratch target that only records where pixels land
struct InkBounds {
    area: Size,
    extent: Option<(Point, Point)>,
}

impl InkBounds {
    fn new(area: Size) -> Self {
        Self { area, extent: None }
    }

    fn ink_size(&self) -> TextSize {
        match self.extent {
            Some((min, max)) => {
                let span = max - min;
                TextSize::new(span.x as u32 + 1, span.y as u32 + 1)
            }
            None => TextSize::ZERO,
        }
    }
}

impl OriginDimensions for InkBounds {
    fn size(&self) -> Size {
        self.area
    }
}

impl DrawTarget for InkBounds {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, _) in pixels {
            self.extent = Some(match self.extent {
                Some((min, max)) => (min.component_min(point), max.component_max(point)),
                None => (point, point),
            });
        }
        Ok(())
    }
}

/// Draws text with profont bitmap fonts on any embedded-graphics target.
///
/// Text is placed by the top of its character cell, so glyphs without
/// ascenders start a few pixels below `y`.
pub struct MonoCanvas<D> {
    target: D,
}

impl<D> MonoCanvas<D>
where
    D: DrawTarget<Color = Rgb888>,
    D::Error: Debug,
{
    pub fn new(target: D) -> Self {
        Self { target }
    }

    /// Fills the whole target with `color`
    pub fn clear(&mut self, color: &str) -> Result<(), DrawError<D::Error>> {
        let color = parse_color(color).ok_or_else(|| DrawError::Color(color.to_owned()))?;
        self.target.clear(color).map_err(DrawError::Target)
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }
}

impl<D> TextMetrics for MonoCanvas<D> {
    type Font = FontHandle;

    /// Renders `text` off-screen and returns the bounds of the lit pixels
    fn measure_text(&self, text: &str, font: &FontHandle) -> TextSize {
        let style = MonoTextStyle::new(*font, Rgb888::WHITE);
        let cell = style
            .measure_string(text, Point::zero(), Baseline::Top)
            .bounding_box;
        let mut ink = InkBounds::new(cell.size);
        let drawn = Text::with_text_style(
            text,
            Point::zero(),
            style,
            TextStyle::with_baseline(Baseline::Top),
        )
        .draw(&mut ink);
        if let Err(never) = drawn {
            match never {}
        }
        ink.ink_size()
    }
}

impl<D> TextCanvas for MonoCanvas<D>
where
    D: DrawTarget<Color = Rgb888>,
    D::Error: Debug,
{
    type Error = DrawError<D::Error>;

    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: &str,
        font: &FontHandle,
    ) -> Result<(), Self::Error> {
        let color = parse_color(color).ok_or_else(|| DrawError::Color(color.to_owned()))?;
        let style = MonoTextStyle::new(*font, color);
        Text::with_text_style(
            text,
            Point::new(x.round() as i32, y.round() as i32),
            style,
            TextStyle::with_baseline(Baseline::Top),
        )
        .draw(&mut self.target)
        .map_err(DrawError::Target)?;
        Ok(())
    }
}
