//! Month layout: where every glyph of a calendar page goes.
//!
//! The month label is centered on its measured size. The weekday header and the
//! day numbers sit on a fixed column/row grid, nudged by the per-font paddings
//! from [`FontProfile`].

use log::debug;

use crate::calendar_utils::{CalendarCell, CalendarMonth, MonthDate, WEEKDAY_SYMBOLS};
use crate::colors::ColorPolicy;
use crate::config::LayoutConstants;
use crate::draw::TextMetrics;
use crate::error::CalendarResult;
use crate::fonts::FontProfile;
use crate::holidays::HolidaySet;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutPoint {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstructionKind {
    MonthLabel,
    WeekdayHeader { column: u8 },
    Day { cell: CalendarCell, holiday: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawInstruction<F> {
    pub kind: InstructionKind,
    pub text: String,
    pub position: LayoutPoint,
    pub color: &'static str,
    pub font: F,
}

/// Draw instructions for one month: label, seven headers, then days in order
#[derive(Debug, Clone)]
pub struct MonthLayout<F> {
    pub month: MonthDate,
    pub rows: u8,
    pub instructions: Vec<DrawInstruction<F>>,
}

impl<F> MonthLayout<F> {
    pub fn month_label(&self) -> Option<&DrawInstruction<F>> {
        self.instructions
            .iter()
            .find(|instruction| instruction.kind == InstructionKind::MonthLabel)
    }

    pub fn headers(&self) -> impl Iterator<Item = &DrawInstruction<F>> {
        self.instructions
            .iter()
            .filter(|instruction| matches!(instruction.kind, InstructionKind::WeekdayHeader { .. }))
    }

    pub fn days(&self) -> impl Iterator<Item = &DrawInstruction<F>> {
        self.instructions
            .iter()
            .filter(|instruction| matches!(instruction.kind, InstructionKind::Day { .. }))
    }

    /// The instruction for day-of-month `day`
    pub fn day(&self, day: u32) -> Option<&DrawInstruction<F>> {
        self.days().find(|instruction| match instruction.kind {
            InstructionKind::Day { cell, .. } => cell.day() == day,
            _ => false,
        })
    }
}

pub struct MonthLayoutEngine<'a, M> {
    metrics: &'a M,
    constants: LayoutConstants,
    holiday_color_enabled: bool,
}

impl<'a, M: TextMetrics> MonthLayoutEngine<'a, M>
where
    M::Font: Clone,
{
    pub fn new(metrics: &'a M, constants: LayoutConstants) -> Self {
        Self {
            metrics,
            constants,
            holiday_color_enabled: true,
        }
    }

    /// Turns holiday coloring on or off. On by default.
    pub fn with_holiday_color(mut self, enabled: bool) -> Self {
        self.holiday_color_enabled = enabled;
        self
    }

    pub fn constants(&self) -> &LayoutConstants {
        &self.constants
    }

    pub fn layout(
        &self,
        year: i32,
        month: u32,
        profile: &FontProfile,
        font: &M::Font,
        colors: &ColorPolicy,
        holidays: &HolidaySet,
    ) -> CalendarResult<MonthLayout<M::Font>> {
        let month_date = MonthDate::from_numbers(year, month)?;
        let calendar =
            CalendarMonth::with_holidays(month_date, holidays, self.holiday_color_enabled);

        let mut instructions = Vec::with_capacity(1 + WEEKDAY_SYMBOLS.len() + 31);
        instructions.push(self.month_label(month, font, colors));
        for (column, symbol) in (0_u8..).zip(WEEKDAY_SYMBOLS) {
            instructions.push(self.weekday_header(column, symbol, profile, font, colors));
        }
        for (cell, holiday) in calendar.days_iter() {
            instructions.push(self.day_cell(cell, holiday, profile, font, colors));
        }

        debug!(
            "Laid out {year}-{month:02}: {} instructions, {} holidays colored",
            instructions.len(),
            calendar.holiday_mask().count()
        );

        Ok(MonthLayout {
            month: month_date,
            rows: calendar.rows(),
            instructions,
        })
    }

    fn month_label(
        &self,
        month: u32,
        font: &M::Font,
        colors: &ColorPolicy,
    ) -> DrawInstruction<M::Font> {
        let text = format!("{month:02}");
        let size = self.metrics.measure_text(&text, font);
        let position = LayoutPoint {
            x: self.constants.month_center_x - size.width as f32 / 2.0,
            y: self.constants.month_center_y - size.height as f32 / 2.0,
        };
        DrawInstruction {
            kind: InstructionKind::MonthLabel,
            text,
            position,
            color: colors.default,
            font: font.clone(),
        }
    }

    fn weekday_header(
        &self,
        column: u8,
        symbol: &str,
        profile: &FontProfile,
        font: &M::Font,
        colors: &ColorPolicy,
    ) -> DrawInstruction<M::Font> {
        DrawInstruction {
            kind: InstructionKind::WeekdayHeader { column },
            text: profile.pad_day_name(symbol),
            position: LayoutPoint {
                x: self.constants.column_x(column) + profile.day_name_padding_pixels as f32,
                y: self.constants.header_y,
            },
            color: colors.weekday_color(column),
            font: font.clone(),
        }
    }

    fn day_cell(
        &self,
        cell: CalendarCell,
        holiday: bool,
        profile: &FontProfile,
        font: &M::Font,
        colors: &ColorPolicy,
    ) -> DrawInstruction<M::Font> {
        let day = cell.day();
        DrawInstruction {
            kind: InstructionKind::Day { cell, holiday },
            text: day.to_string(),
            position: LayoutPoint {
                // fixed per-font nudge for days 1-9
                x: self.constants.column_x(cell.column) + profile.date_padding(day) as f32,
                y: self.constants.row_y(cell.row),
            },
            color: colors.color_for(cell.column, holiday),
            font: font.clone(),
        }
    }
}
