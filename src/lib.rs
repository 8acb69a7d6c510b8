//! Printable monthly calendar rendering.
//!
//! [`layout::MonthLayoutEngine`] turns a year/month, a [`fonts::FontProfile`] and a
//! [`colors::ColorPolicy`] into positioned draw instructions, which any
//! [`draw::TextCanvas`] can replay.

pub mod calendar_utils;
pub mod colors;
pub mod config;
pub mod draw;
pub mod error;
pub mod fonts;
pub mod holidays;
pub mod layout;

pub use colors::ColorPolicy;
pub use config::LayoutConstants;
pub use error::CalendarError;
pub use fonts::FontProfile;
pub use holidays::{HolidayFetch, HolidayOracle, HolidaySet};
pub use layout::{DrawInstruction, InstructionKind, LayoutPoint, MonthLayout, MonthLayoutEngine};
