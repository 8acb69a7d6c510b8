//! Drawing a laid out month onto a raster image.

use std::path::{Path, PathBuf};

use image::RgbImage;
use month_calendar::{
    colors,
    draw::{
        draw_instructions, text_styles::profont, ImageTarget, MonoCanvas, TextCanvas, TextMetrics,
        TextSize, TtfCanvas, TtfFont,
    },
    fonts,
    holidays::{HolidayFetchError, HolidayOracle, HolidayProvider},
    CalendarError, FontProfile, LayoutConstants, MonthLayoutEngine,
};

struct Offline;

impl HolidayProvider for Offline {
    fn fetch_raw(&self, _year: i32) -> Result<String, HolidayFetchError> {
        Err(HolidayFetchError::Transport("network unreachable".to_owned()))
    }
}

struct Fixture(&'static str);

impl HolidayProvider for Fixture {
    fn fetch_raw(&self, _year: i32) -> Result<String, HolidayFetchError> {
        Ok(self.0.to_owned())
    }
}

#[test]
fn network_failure_still_renders() {
    let fetch = HolidayOracle::new(Offline).fetch(2024);
    assert!(fetch.degraded);
    assert!(fetch.holidays.is_empty());

    let constants = LayoutConstants::default();
    let mut canvas = MonoCanvas::new(ImageTarget::new(
        constants.canvas_width,
        constants.canvas_height,
    ));
    let policy = colors::lookup("black").unwrap();
    canvas.clear(policy.background).unwrap();

    let font = profont(24).unwrap();
    let layout = MonthLayoutEngine::new(&canvas, constants)
        .layout(
            2024,
            1,
            fonts::lookup("Noto Sans JP").unwrap(),
            &font,
            policy,
            &fetch.holidays,
        )
        .unwrap();
    draw_instructions(&mut canvas, &layout).unwrap();

    let image = canvas.into_inner().into_image();
    let has = |rgb: [u8; 3]| image.pixels().any(|pixel| pixel.0 == rgb);
    assert!(has([0, 0, 0]), "no default-colored ink");
    assert!(has([255, 0, 0]), "no Sunday ink");
    assert!(has([0, 0, 255]), "no Saturday ink");
}

#[test]
fn month_label_centers_on_profont_metrics() {
    let constants = LayoutConstants::default();
    let canvas = MonoCanvas::new(ImageTarget::new(1, 1));
    let font = profont(18).unwrap();
    let size = canvas.measure_text("07", &font);

    let layout = MonthLayoutEngine::new(&canvas, constants)
        .layout(
            2025,
            7,
            fonts::lookup("Murecho").unwrap(),
            &font,
            colors::lookup("white").unwrap(),
            &Default::default(),
        )
        .unwrap();
    let label = layout.month_label().unwrap();
    assert_eq!(label.position.x, constants.month_center_x - size.width as f32 / 2.0);
    assert_eq!(label.position.y, constants.month_center_y - size.height as f32 / 2.0);
}

#[test]
fn fetched_holidays_are_colored() {
    let fetch = HolidayOracle::new(Fixture(
        r#"[{"date":"2024-01-01","name":"New Year's Day"},{"date":"2024-01-08","name":"Coming of Age Day"}]"#,
    ))
    .fetch(2024);
    assert!(!fetch.degraded);

    let canvas = MonoCanvas::new(ImageTarget::new(1, 1));
    let font = profont(24).unwrap();
    let layout = MonthLayoutEngine::new(&canvas, LayoutConstants::default())
        .layout(
            2024,
            1,
            fonts::lookup("Noto Sans JP").unwrap(),
            &font,
            colors::lookup("white").unwrap(),
            &fetch.holidays,
        )
        .unwrap();
    assert_eq!(layout.day(1).unwrap().color, "pink");
    assert_eq!(layout.day(8).unwrap().color, "pink");
    assert_eq!(layout.day(2).unwrap().color, "white");
}

#[test]
fn saves_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calendar.png");
    let mut canvas = MonoCanvas::new(ImageTarget::new(32, 32));
    canvas.clear("white").unwrap();
    canvas.target().save(&path).unwrap();

    let decoded = image::open(&path).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (32, 32));
}

const FONT_DIRS: [&str; 3] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/TTF",
    "/usr/share/fonts/dejavu",
];

/// A font file shipped with the OS, if this machine has it
fn system_font(file: &str) -> Option<PathBuf> {
    let found = FONT_DIRS
        .iter()
        .map(|dir| Path::new(dir).join(file))
        .find(|path| path.is_file());
    if found.is_none() {
        eprintln!("{file} not installed, skipping");
    }
    found
}

fn profile_for(path: &Path) -> FontProfile {
    FontProfile {
        font_path: path.to_owned(),
        space_padding_count: 2,
        day_name_padding_pixels: 0,
        single_digit_date_padding_pixels: 0,
    }
}

fn non_background_box(image: &RgbImage, background: [u8; 3]) -> Option<TextSize> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0 == background {
            continue;
        }
        bounds = Some(match bounds {
            Some((x0, y0, x1, y1)) => (x.min(x0), y.min(y0), x.max(x1), y.max(y1)),
            None => (x, y, x, y),
        });
    }
    bounds.map(|(x0, y0, x1, y1)| TextSize::new(x1 - x0 + 1, y1 - y0 + 1))
}

fn render_outline_page(profile: &FontProfile, size_px: f32) -> RgbImage {
    let constants = LayoutConstants::default();
    let font = TtfFont::for_profile(profile, Path::new("/"), size_px).unwrap();
    let mut canvas = TtfCanvas::new(ImageTarget::new(
        constants.canvas_width,
        constants.canvas_height,
    ));
    let policy = colors::lookup("black").unwrap();
    canvas.clear(policy.background).unwrap();
    let layout = MonthLayoutEngine::new(&canvas, constants)
        .layout(2024, 1, profile, &font, policy, &Default::default())
        .unwrap();
    draw_instructions(&mut canvas, &layout).unwrap();
    canvas.into_inner().into_image()
}

#[test]
fn profile_font_file_must_exist() {
    let dir = tempfile::tempdir().unwrap();
    let profile = fonts::lookup("Murecho").unwrap();
    let err = TtfFont::for_profile(profile, dir.path(), 24.0).unwrap_err();
    assert!(
        matches!(&err, CalendarError::FontAsset { path, .. } if path.ends_with("ttf/Murecho-Regular.ttf")),
        "{err}"
    );
}

#[test]
fn selected_font_changes_the_page() {
    let (Some(sans), Some(serif)) = (system_font("DejaVuSans.ttf"), system_font("DejaVuSerif.ttf"))
    else {
        return;
    };
    let sans_page = render_outline_page(&profile_for(&sans), 28.0);
    let serif_page = render_outline_page(&profile_for(&serif), 28.0);

    assert!(non_background_box(&sans_page, [255, 255, 255]).is_some());
    assert!(sans_page.as_raw() != serif_page.as_raw());
}

#[test]
fn outline_measurement_matches_drawn_ink() {
    let Some(sans) = system_font("DejaVuSans.ttf") else {
        return;
    };
    let font = TtfFont::load(&sans, 32.0).unwrap();
    for text in ["1", "7", "31", "  M", "S"] {
        let mut canvas = TtfCanvas::new(ImageTarget::new(160, 80));
        canvas.clear("white").unwrap();
        let measured = canvas.measure_text(text, &font);
        canvas.draw_text(10.0, 10.0, text, "black", &font).unwrap();

        let drawn = non_background_box(canvas.target().image(), [255, 255, 255]).unwrap();
        // edge pixels of the outline bounds may get no coverage at all
        let context = format!("{text:?}: measured {measured:?}, drawn {drawn:?}");
        assert!(drawn.width <= measured.width, "{context}");
        assert!(measured.width - drawn.width <= 2, "{context}");
        assert!(drawn.height <= measured.height, "{context}");
        assert!(measured.height - drawn.height <= 2, "{context}");
    }
    let canvas = TtfCanvas::new(ImageTarget::new(1, 1));
    assert_eq!(canvas.measure_text("   ", &font), TextSize::ZERO);
}
