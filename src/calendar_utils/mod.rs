//! A bunch of utils for working with calendar stuff

pub mod calendar;
pub mod holiday_mask;
mod month_date;

pub use calendar::{CalendarCell, CalendarMonth, DaysIter};
use chrono::Weekday;
pub use holiday_mask::HolidayMask;
pub use month_date::MonthDate;

/// Header symbols in grid order, Sunday first
pub const WEEKDAY_SYMBOLS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Grid column of a weekday, 0 being Sunday
pub fn weekday_column(val: Weekday) -> u8 {
    (val.num_days_from_monday() as u8 + 1) % 7
}

pub const fn all_weekdays_sunday_first() -> [Weekday; 7] {
    [
        Weekday::Sun,
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
    ]
}
