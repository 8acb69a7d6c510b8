use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use log::{info, warn};
use month_calendar::{
    calendar_utils::MonthDate,
    colors,
    draw::{text_styles::nearest_profont, ImageTarget, MonoCanvas, TtfCanvas, TtfFont},
    fonts,
    holidays::{HolidayCache, HolidayFetch, HolidayFetchError, HolidayOracle, HolidayProvider},
    LayoutConstants,
};

mod render;

use render::RenderJob;

#[derive(Debug, Parser)]
#[command(name = "month-calendar", version, about = "Render printable monthly calendar images")]
struct Args {
    /// Year to render, defaults to the current one
    #[arg(long)]
    year: Option<i32>,

    /// Render only this month instead of the whole year
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    month: Option<u32>,

    #[arg(long, default_value = fonts::DEFAULT_FONT)]
    font: String,

    /// Directory the fonts' relative FONT_PATHs are resolved against
    #[arg(long, default_value = ".")]
    font_dir: PathBuf,

    /// Color preset
    #[arg(long, default_value = colors::DEFAULT_PRESET)]
    preset: String,

    /// Text size in pixels. With --bitmap-font, the nearest profont point size.
    #[arg(long, default_value_t = 24)]
    font_size: u32,

    /// Draw with the built-in profont bitmap font instead of the TTF file
    #[arg(long)]
    bitmap_font: bool,

    /// JSON file overriding layout anchors
    #[arg(long)]
    layout: Option<PathBuf>,

    #[arg(long)]
    no_holiday_color: bool,

    /// Skip the holiday fetch
    #[arg(long)]
    offline: bool,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Print the available fonts and presets and exit
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        for name in fonts::font_names()? {
            println!("font: {name}");
        }
        for name in colors::preset_names() {
            println!("preset: {name}");
        }
        return Ok(());
    }

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let months: Vec<MonthDate> = MonthDate::months_of_year(year)?
        .into_iter()
        .filter(|date| args.month.map_or(true, |m| date.month().number_from_month() == m))
        .collect();
    let profile = fonts::lookup(&args.font)?;
    let colors = colors::lookup(&args.preset)?;
    let constants = match &args.layout {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read layout file {}", path.display()))?;
            LayoutConstants::from_json(&json)
                .with_context(|| format!("Invalid layout file {}", path.display()))?
        }
        None => LayoutConstants::default(),
    };

    let outline_font = if args.bitmap_font {
        info!("Rendering {year} with the bitmap font, preset {}", args.preset);
        None
    } else {
        let font = TtfFont::for_profile(profile, &args.font_dir, args.font_size as f32)
            .context("Pass --font-dir pointing at the fonts, or --bitmap-font to render without them")?;
        info!(
            "Rendering {year} with font {} ({}), preset {}",
            args.font,
            font.path().display(),
            args.preset
        );
        Some(font)
    };
    let bitmap_font = nearest_profont(args.font_size);

    let mut holidays = if args.offline || args.no_holiday_color {
        None
    } else {
        match holiday_provider() {
            Ok(provider) => Some(HolidayCache::new(HolidayOracle::new(provider))),
            Err(e) => {
                warn!("Holiday provider unavailable, rendering without holidays: {e}");
                None
            }
        }
    };
    let no_holidays = HolidayFetch::default();

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Failed to create {}", args.out_dir.display()))?;

    for date in months {
        let fetch = match holidays.as_mut() {
            Some(cache) => cache.get_or_fetch(date.year()),
            None => &no_holidays,
        };
        let month = date.month().number_from_month();
        let path = args.out_dir.join(format!("calendar_{year}_{month:02}.png"));
        let job = RenderJob {
            year,
            month,
            profile,
            colors,
            constants,
            holidays: &fetch.holidays,
            holiday_color: !args.no_holiday_color,
        };
        match &outline_font {
            Some(font) => render::render_month::<TtfCanvas>(&job, font, &path)?,
            None => render::render_month::<MonoCanvas<ImageTarget>>(&job, &bitmap_font, &path)?,
        }
        info!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(feature = "nager")]
fn holiday_provider() -> Result<impl HolidayProvider, HolidayFetchError> {
    month_calendar::holidays::NagerDateProvider::new()
}

#[cfg(not(feature = "nager"))]
fn holiday_provider() -> Result<impl HolidayProvider, HolidayFetchError> {
    struct Unconfigured;

    impl HolidayProvider for Unconfigured {
        fn fetch_raw(&self, _year: i32) -> Result<String, HolidayFetchError> {
            Err(HolidayFetchError::Transport(
                "built without a holiday provider".to_owned(),
            ))
        }
    }

    Ok(Unconfigured)
}
