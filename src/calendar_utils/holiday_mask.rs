use chrono::{Datelike, NaiveDate};

use super::MonthDate;
use crate::holidays::{is_holiday, HolidaySet};

/// One bit per day of a month, bit 0 being the 1st. A set bit marks a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HolidayMask(u32);

impl HolidayMask {
    pub const fn new(val: u32) -> Self {
        Self(val)
    }

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn truncate(self, days: u8) -> Self {
        if days >= 32 {
            return self;
        }
        Self(self.0 & ((1_u32 << days) - 1))
    }

    /// Builds the mask for `month` out of a year's holiday set.
    ///
    /// With `enabled` off the mask is empty regardless of the set.
    pub fn from_holidays(month: MonthDate, days: u8, holidays: &HolidaySet, enabled: bool) -> Self {
        let start = month.to_start_day_naive();
        let mut mask = 0_u32;
        for day0 in 0..days {
            let Some(date) = NaiveDate::from_ymd_opt(start.year(), start.month(), u32::from(day0) + 1)
            else {
                break;
            };
            if is_holiday(date, holidays, enabled) {
                mask |= 1 << day0;
            }
        }
        Self(mask)
    }

    pub const fn is_day0_holiday(self, day: u8) -> bool {
        day < 32 && ((self.0 >> day) & 0b1) != 0
    }

    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Month;

    use super::*;

    fn jan_2024() -> MonthDate {
        MonthDate::new(2024, Month::January).unwrap()
    }

    #[test]
    fn marks_only_dates_inside_the_month() {
        let holidays: HolidaySet = [
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 11).unwrap(),
        ]
        .into_iter()
        .collect();
        let mask = HolidayMask::from_holidays(jan_2024(), 31, &holidays, true);
        assert_eq!(mask.count(), 2);
        assert!(mask.is_day0_holiday(0));
        assert!(mask.is_day0_holiday(7));
        assert!(!mask.is_day0_holiday(10));
    }

    #[test]
    fn disabled_coloring_yields_empty_mask() {
        let holidays: HolidaySet = [NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()]
            .into_iter()
            .collect();
        let mask = HolidayMask::from_holidays(jan_2024(), 31, &holidays, false);
        assert_eq!(mask, HolidayMask::empty());
    }

    #[test]
    fn truncate_drops_days_past_month_end() {
        let mask = HolidayMask::new(u32::MAX).truncate(29);
        assert_eq!(mask.count(), 29);
        assert!(!mask.is_day0_holiday(29));
        assert_eq!(HolidayMask::new(u32::MAX).truncate(32).count(), 32);
    }
}
