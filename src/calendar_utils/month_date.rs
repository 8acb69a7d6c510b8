use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;

use crate::error::{CalendarError, CalendarResult};

/// A single calendar month, stored as its first day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDate(NaiveDate);

impl MonthDate {
    pub fn new(year: i32, month: Month) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).map(Self)
    }

    /// Validating constructor for a 1-based month number
    pub fn from_numbers(year: i32, month: u32) -> CalendarResult<Self> {
        let month = u8::try_from(month)
            .ok()
            .and_then(Month::from_u8)
            .ok_or(CalendarError::InvalidMonth(month))?;
        Self::new(year, month).ok_or(CalendarError::InvalidYear(year))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> Month {
        // day 1 of a valid date always has a month in 1..=12
        Month::from_u32(self.0.month()).unwrap_or(Month::January)
    }

    pub const fn to_start_day_naive(self) -> NaiveDate {
        self.0
    }

    /// All twelve months of `year`, January first
    pub fn months_of_year(year: i32) -> CalendarResult<Vec<Self>> {
        (1..=12).map(|month| Self::from_numbers(year, month)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_month_zero_and_thirteen() {
        assert!(matches!(
            MonthDate::from_numbers(2024, 0),
            Err(CalendarError::InvalidMonth(0))
        ));
        assert!(matches!(
            MonthDate::from_numbers(2024, 13),
            Err(CalendarError::InvalidMonth(13))
        ));
    }

    #[test]
    fn rejects_unrepresentable_year() {
        assert!(matches!(
            MonthDate::from_numbers(i32::MAX, 1),
            Err(CalendarError::InvalidYear(_))
        ));
    }

    #[test]
    fn starts_on_first_day() {
        let month = MonthDate::from_numbers(2024, 2).unwrap();
        assert_eq!(month.to_start_day_naive(), NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(month.month(), Month::February);
        assert_eq!(month.year(), 2024);
    }

    #[test]
    fn year_has_twelve_months_in_order() {
        let months = MonthDate::months_of_year(2025).unwrap();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0].month(), Month::January);
        assert_eq!(months[11].month(), Month::December);
    }
}
