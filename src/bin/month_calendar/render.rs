use std::convert::Infallible;
use std::path::Path;

use anyhow::{Context, Result};
use month_calendar::{
    draw::{draw_instructions, DrawError, ImageTarget, MonoCanvas, TextCanvas, TtfCanvas},
    ColorPolicy, FontProfile, HolidaySet, LayoutConstants, MonthLayoutEngine,
};

pub struct RenderJob<'a> {
    pub year: i32,
    pub month: u32,
    pub profile: &'a FontProfile,
    pub colors: &'a ColorPolicy,
    pub constants: LayoutConstants,
    pub holidays: &'a HolidaySet,
    pub holiday_color: bool,
}

/// A text canvas backed by a whole calendar page
pub trait PageCanvas: TextCanvas + Sized {
    fn blank(constants: &LayoutConstants) -> Self;

    fn fill(&mut self, color: &str) -> Result<(), Self::Error>;

    fn into_page(self) -> ImageTarget;
}

impl PageCanvas for TtfCanvas {
    fn blank(constants: &LayoutConstants) -> Self {
        TtfCanvas::new(ImageTarget::new(constants.canvas_width, constants.canvas_height))
    }

    fn fill(&mut self, color: &str) -> Result<(), DrawError<Infallible>> {
        self.clear(color)
    }

    fn into_page(self) -> ImageTarget {
        self.into_inner()
    }
}

impl PageCanvas for MonoCanvas<ImageTarget> {
    fn blank(constants: &LayoutConstants) -> Self {
        MonoCanvas::new(ImageTarget::new(constants.canvas_width, constants.canvas_height))
    }

    fn fill(&mut self, color: &str) -> Result<(), DrawError<Infallible>> {
        self.clear(color)
    }

    fn into_page(self) -> ImageTarget {
        self.into_inner()
    }
}

pub fn render_month<C>(job: &RenderJob<'_>, font: &C::Font, path: &Path) -> Result<()>
where
    C: PageCanvas,
    C::Font: Clone,
    C::Error: std::error::Error + Send + Sync + 'static,
{
    let mut canvas = C::blank(&job.constants);
    canvas.fill(job.colors.background)?;

    let layout = MonthLayoutEngine::new(&canvas, job.constants)
        .with_holiday_color(job.holiday_color)
        .layout(
            job.year,
            job.month,
            job.profile,
            font,
            job.colors,
            job.holidays,
        )?;
    draw_instructions(&mut canvas, &layout)?;

    canvas
        .into_page()
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
