use core::ops::Range;

use chrono::{Datelike, Month, Months, NaiveDate, Weekday};

use super::{HolidayMask, MonthDate};
use crate::holidays::HolidaySet;

/// A day of the month placed on the Sunday-first grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// 0 is Sunday, 6 is Saturday
    pub column: u8,
    pub row: u8,
}

impl CalendarCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

pub struct DaysIter {
    range: Range<u8>,
    start: NaiveDate,
    offset: u8,
    holiday_mask: HolidayMask,
}

impl DaysIter {
    fn new(calendar: &CalendarMonth) -> Self {
        Self {
            range: 0..calendar.days_amount(),
            start: calendar.start_date(),
            offset: calendar.start_column(),
            holiday_mask: calendar.holiday_mask,
        }
    }
}

impl Iterator for DaysIter {
    type Item = (CalendarCell, bool);

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.range.next()?;
        let date = self.start.checked_add_days(chrono::Days::new(u64::from(idx)))?;
        let slot = self.offset + idx;
        let cell = CalendarCell {
            date,
            column: slot % 7,
            row: slot / 7,
        };
        Some((cell, self.holiday_mask.is_day0_holiday(idx)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

/// Data used to describe a calendar month
#[derive(Debug, Clone, Copy)]
pub struct CalendarMonth {
    date: MonthDate,
    holiday_mask: HolidayMask,
}

impl CalendarMonth {
    /// A month with no holidays marked
    pub fn new(date: MonthDate) -> Self {
        Self {
            date,
            holiday_mask: HolidayMask::empty(),
        }
    }

    /// A month with holidays taken from a year's holiday set
    pub fn with_holidays(date: MonthDate, holidays: &HolidaySet, enabled: bool) -> Self {
        let mut calendar = Self::new(date);
        let mask = HolidayMask::from_holidays(date, calendar.days_amount(), holidays, enabled);
        calendar.set_holidays(mask);
        calendar
    }

    pub fn days_iter(&self) -> DaysIter {
        DaysIter::new(self)
    }

    pub const fn start_date(&self) -> NaiveDate {
        self.date.to_start_day_naive()
    }

    /// Get the amount of days in this month
    pub fn days_amount(&self) -> u8 {
        let start = self.start_date();
        // Only December of the last representable year has no successor
        start
            .checked_add_months(Months::new(1))
            .map_or(31, |end| end.signed_duration_since(start).num_days() as u8)
    }

    /// Get the day of the week this month starts on
    pub fn start_weekday(&self) -> Weekday {
        self.start_date().weekday()
    }

    /// Grid column of the 1st, counted from Sunday
    pub fn start_column(&self) -> u8 {
        self.start_weekday().num_days_from_sunday() as u8
    }

    /// Number of grid rows the month spans (4 to 6)
    pub fn rows(&self) -> u8 {
        (self.start_column() + self.days_amount()).div_ceil(7)
    }

    /// Get the month this month is from
    pub fn month(&self) -> Month {
        self.date.month()
    }

    pub fn holiday_mask(&self) -> HolidayMask {
        self.holiday_mask
    }

    /// Set the holidays
    pub fn set_holidays(&mut self, holiday_mask: HolidayMask) {
        self.holiday_mask = holiday_mask.truncate(self.days_amount());
    }
}
