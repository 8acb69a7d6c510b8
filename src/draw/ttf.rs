//! Outline font rendering for the TTF/OTF files named by font profiles.

use core::convert::Infallible;
use core::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{point, Font, FontArc, FontVec, GlyphId, OutlinedGlyph, PxScale, Rect, ScaleFont};
use embedded_graphics::{pixelcolor::RgbColor, prelude::DrawTarget};
use image::Rgb;
use log::debug;

use super::{parse_color, DrawError, ImageTarget, TextCanvas, TextMetrics, TextSize};
use crate::error::{CalendarError, CalendarResult};
use crate::fonts::FontProfile;

/// A parsed font file at a fixed pixel size
#[derive(Clone)]
pub struct TtfFont {
    font: FontArc,
    scale: PxScale,
    path: PathBuf,
}

impl TtfFont {
    /// Reads and parses the font file at `path`
    pub fn load(path: impl AsRef<Path>, size_px: f32) -> CalendarResult<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|e| CalendarError::FontAsset {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        let font = FontVec::try_from_vec(data).map_err(|e| CalendarError::FontAsset {
            path: path.to_owned(),
            reason: e.to_string(),
        })?;
        debug!("Loaded {} at {size_px}px", path.display());
        Ok(Self {
            font: FontArc::new(font),
            scale: PxScale::from(size_px),
            path: path.to_owned(),
        })
    }

    /// Loads the profile's font, resolving relative paths against `font_dir`
    pub fn for_profile(profile: &FontProfile, font_dir: &Path, size_px: f32) -> CalendarResult<Self> {
        Self::load(font_dir.join(&profile.font_path), size_px)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Outlines of `text` laid out on one line, the top of the line at `(x, y)`
    fn outlines(&self, text: &str, x: f32, y: f32) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = point(x, y + scaled.ascent());
        let mut previous: Option<GlyphId> = None;
        let mut outlines = Vec::with_capacity(text.len());
        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(previous) = previous {
                caret.x += scaled.kern(previous, id);
            }
            let glyph = id.with_scale_and_position(self.scale, caret);
            caret.x += scaled.h_advance(id);
            previous = Some(id);
            // whitespace has no outline
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                outlines.push(outlined);
            }
        }
        outlines
    }
}

impl fmt::Debug for TtfFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtfFont")
            .field("path", &self.path)
            .field("size_px", &self.scale.y)
            .finish()
    }
}

impl PartialEq for TtfFont {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.scale == other.scale
    }
}

/// Union of the pixel bounds of `outlines`
fn ink_bounds(outlines: &[OutlinedGlyph]) -> Option<Rect> {
    outlines
        .iter()
        .map(OutlinedGlyph::px_bounds)
        .reduce(|a, b| Rect {
            min: point(a.min.x.min(b.min.x), a.min.y.min(b.min.y)),
            max: point(a.max.x.max(b.max.x), a.max.y.max(b.max.y)),
        })
}

fn blend(under: u8, over: u8, coverage: f32) -> u8 {
    (f32::from(under) * (1.0 - coverage) + f32::from(over) * coverage).round() as u8
}

/// Draws antialiased text from outline fonts onto an [`ImageTarget`]
pub struct TtfCanvas {
    target: ImageTarget,
}

impl TtfCanvas {
    pub fn new(target: ImageTarget) -> Self {
        Self { target }
    }

    /// Fills the whole image with `color`
    pub fn clear(&mut self, color: &str) -> Result<(), DrawError<Infallible>> {
        let color = parse_color(color).ok_or_else(|| DrawError::Color(color.to_owned()))?;
        self.target.clear(color).map_err(DrawError::Target)
    }

    pub fn target(&self) -> &ImageTarget {
        &self.target
    }

    pub fn into_inner(self) -> ImageTarget {
        self.target
    }
}

impl TextMetrics for TtfCanvas {
    type Font = TtfFont;

    /// Pixel bounds of the glyph outlines, without side bearings or line gap
    fn measure_text(&self, text: &str, font: &TtfFont) -> TextSize {
        match ink_bounds(&font.outlines(text, 0.0, 0.0)) {
            Some(bounds) => TextSize::new(bounds.width() as u32, bounds.height() as u32),
            None => TextSize::ZERO,
        }
    }
}

impl TextCanvas for TtfCanvas {
    type Error = DrawError<Infallible>;

    /// `y` is the top of the line box (the font's ascent line)
    fn draw_text(
        &mut self,
        x: f32,
        y: f32,
        text: &str,
        color: &str,
        font: &TtfFont,
    ) -> Result<(), Self::Error> {
        let color = parse_color(color).ok_or_else(|| DrawError::Color(color.to_owned()))?;
        let image = self.target.image_mut();
        let (width, height) = image.dimensions();
        for outlined in font.outlines(text, x.round(), y.round()) {
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, coverage| {
                let px = bounds.min.x as i64 + i64::from(gx);
                let py = bounds.min.y as i64 + i64::from(gy);
                let (Ok(px), Ok(py)) = (u32::try_from(px), u32::try_from(py)) else {
                    return;
                };
                if px >= width || py >= height {
                    return;
                }
                let coverage = coverage.clamp(0.0, 1.0);
                let Rgb([r, g, b]) = *image.get_pixel(px, py);
                image.put_pixel(
                    px,
                    py,
                    Rgb([
                        blend(r, color.r(), coverage),
                        blend(g, color.g(), coverage),
                        blend(b, color.b(), coverage),
                    ]),
                );
            });
        }
        Ok(())
    }
}
